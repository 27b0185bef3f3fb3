use super::*;

fn team(id: i64, is_dynasty: bool, wins: Option<u32>, losses: Option<u32>, points_for: Option<f64>) -> Team {
    Team {
        id,
        name: format!("Team {id}"),
        owner: "dan".to_owned(),
        is_dynasty,
        league_id: "L1".to_owned(),
        wins,
        losses,
        ties: None,
        points_for,
        points_against: None,
        playoff_position: None,
    }
}

// =============================================================
// summarize_teams
// =============================================================

#[test]
fn summarize_teams_empty_is_zeroed() {
    let summary = summarize_teams(&[]);
    assert_eq!(summary, TeamsSummary::default());
    assert_eq!(summary.record(), "0-0");
}

#[test]
fn summarize_teams_adds_records_and_points() {
    let teams = [
        team(1, true, Some(8), Some(5), Some(1400.5)),
        team(2, false, Some(3), Some(10), Some(1100.0)),
    ];
    let summary = summarize_teams(&teams);
    assert_eq!(summary.teams, 2);
    assert_eq!(summary.dynasty, 1);
    assert_eq!(summary.record(), "11-15");
    assert!((summary.points_for - 2500.5).abs() < f64::EPSILON);
}

#[test]
fn summarize_teams_treats_missing_stats_as_zero() {
    let summary = summarize_teams(&[team(1, true, None, None, None)]);
    assert_eq!(summary.teams, 1);
    assert_eq!(summary.record(), "0-0");
    assert!(summary.points_for.abs() < f64::EPSILON);
}
