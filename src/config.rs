//! Configuration loader and defaults for the glimmerweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). The only tunable is the session
//! signing secret; the listen address is fixed, this is a development
//! server.
//!
use std::env;

use once_cell::sync::Lazy;

/// Fallback session secret used when `SESSION_SECRET` is unset
const DEFAULT_SESSION_SECRET: &str = "glimmer-default-secret-key";

/// Address the development server binds to
pub const WEB_HOST: &str = "0.0.0.0";

/// Port the development server listens on
pub const WEB_PORT: u16 = 5000;

/// Application configuration
pub struct Config {
    /// Secret handed to the signed-cookie machinery
    pub session_secret: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Config {
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| DEFAULT_SESSION_SECRET.into()),
        }
    }
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    /// Fallback and override behaviour of the session secret
    #[test]
    fn session_secret_env() {
        // Only test that touches SESSION_SECRET, so both cases run here
        // back to back.
        unsafe { env::remove_var("SESSION_SECRET") };
        assert_eq!(Config::from_env().session_secret, DEFAULT_SESSION_SECRET);

        unsafe { env::set_var("SESSION_SECRET", "foo") };
        assert_eq!(Config::from_env().session_secret, "foo");

        unsafe { env::remove_var("SESSION_SECRET") };
    }
}
