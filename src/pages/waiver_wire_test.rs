use super::*;

fn candidate(player_id: i64, name: &str, recommendation_score: f64) -> WaiverWirePlayer {
    WaiverWirePlayer {
        player_id,
        name: name.to_owned(),
        position: "WR".to_owned(),
        team: "HOU".to_owned(),
        recommendation_score,
        reason: "Target share climbing".to_owned(),
        projected_points: None,
        availability: None,
    }
}

#[test]
fn rank_recommendations_orders_by_score_descending() {
    let ranked = rank_recommendations(vec![
        candidate(1, "Low", 41.0),
        candidate(2, "High", 88.5),
        candidate(3, "Mid", 63.2),
    ]);
    let ids: Vec<i64> = ranked.iter().map(|p| p.player_id).collect();
    assert_eq!(ids, [2, 3, 1]);
}

#[test]
fn rank_recommendations_breaks_ties_by_name() {
    let ranked = rank_recommendations(vec![candidate(1, "Zay Flowers", 70.0), candidate(2, "Adam Thielen", 70.0)]);
    assert_eq!(ranked[0].name, "Adam Thielen");
    assert_eq!(ranked[1].name, "Zay Flowers");
}

#[test]
fn rank_recommendations_empty_stays_empty() {
    assert!(rank_recommendations(Vec::new()).is_empty());
}
