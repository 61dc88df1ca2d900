use crate::util::env::{get_bool_from_env_or, get_env_or, load_dotenv};
use anyhow::Result;
use lazy_static::lazy_static;
use tracing::warn;

pub const DEFAULT_OWNER: &str = "global";

lazy_static! {
    static ref GLOBAL: FpConfig = FpConfig::from_env().unwrap_or_else(|err| {
        warn!("Invalid configuration, using defaults: {}", err);
        FpConfig::default()
    });
}

#[derive(Debug, Clone, PartialEq)]
pub struct FpConfig {
    // Owner used when curry is called without one
    pub default_owner: String,

    // Emit a debug event for every curry step and pipeline stage
    pub log_calls: bool,
}

impl Default for FpConfig {
    fn default() -> Self {
        FpConfig {
            default_owner: DEFAULT_OWNER.to_string(),
            log_calls: false,
        }
    }
}

impl FpConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let default_owner = get_env_or("HOF_DEFAULT_OWNER", DEFAULT_OWNER.to_string())?;
        let log_calls = get_bool_from_env_or("HOF_LOG_CALLS", false)?;

        Ok(FpConfig {
            default_owner,
            log_calls,
        })
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static FpConfig {
        &GLOBAL
    }
}
