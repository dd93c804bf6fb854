//! Service configuration

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Value of `Access-Control-Allow-Origin`
    pub cors_allow_origin: String,
    /// Reject answers for any question other than the expected next one
    pub strict_question_order: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.cors_allow_origin.trim().is_empty() {
            return Err(CoreError::Config(
                "CORS allow-origin cannot be empty".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("Log filter cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            log_filter: "info".to_string(),
            cors_allow_origin: "*".to_string(),
            strict_question_order: false,
        }
    }
}
