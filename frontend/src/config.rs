use log::Level;

/// localStorage key holding the serialized signed-in user.
pub const SESSION_STORAGE_KEY: &str = "sangrakshak_user";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Artificial delays applied by the mock session operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub login_delay_ms: u32,
    pub signup_delay_ms: u32,
    pub oauth_delay_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            signup_delay_ms: 1000,
            oauth_delay_ms: 1500,
        }
    }
}
