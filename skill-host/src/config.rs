//! Host configuration: user-agent tag, default locale, log file.
//! Loaded from environment variables SKILL_USER_AGENT, SKILL_DEFAULT_LOCALE, LOG_FILE.

use skill_core::{Result, SkillError};
use std::env;

/// User-agent tag stamped on every response envelope unless overridden.
pub const DEFAULT_USER_AGENT: &str = "sample/hello-world/v1.2";
/// Locale used when a request carries none.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    pub user_agent: String,
    pub default_locale: String,
    pub log_file: Option<String>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            log_file: None,
        }
    }
}

impl SkillConfig {
    /// Loads from the environment; every variable is optional. Set-but-blank values are rejected.
    pub fn from_env() -> Result<Self> {
        let user_agent = non_blank("SKILL_USER_AGENT")?.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let default_locale =
            non_blank("SKILL_DEFAULT_LOCALE")?.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());
        Ok(Self {
            user_agent,
            default_locale,
            log_file,
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }
}

fn non_blank(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => {
            Err(SkillError::Config(format!("{} is set but empty", key)))
        }
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(_) => Ok(None),
    }
}
