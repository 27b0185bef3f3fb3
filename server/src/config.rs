//! Host process configuration read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostConfigError {
    #[error("{PORT_VAR} must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`HostConfigError::InvalidPort`] when `PORT` is set but unparseable.
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_values(std::env::var(PORT_VAR).ok().as_deref())
    }

    /// # Errors
    ///
    /// Returns [`HostConfigError::InvalidPort`] when `port` is not a valid port.
    pub fn from_values(port: Option<&str>) -> Result<Self, HostConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| HostConfigError::InvalidPort(raw.to_owned()))?,
        };
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
