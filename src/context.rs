use std::env;

/// Environment variable consulted by [`Context::from_env`].
pub const ENABLED_ENV: &str = "ARGTEXT_ENABLED";

/// Options shared by every lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// When false, every query returns the caller's default.
    pub enabled: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Context {
    /// Read options from the environment. Unset or unrecognised values keep
    /// the system enabled.
    pub fn from_env() -> Self {
        let enabled = match env::var(ENABLED_ENV) {
            Ok(v) => parse_switch(&v),
            Err(_) => true,
        };
        Self { enabled }
    }
}

fn parse_switch(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
