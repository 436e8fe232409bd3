//! Server configuration

use clap::Parser;
use std::net::SocketAddr;

use crate::ApiState;

/// Lead intake server settings, from flags or environment
#[derive(Debug, Clone, Parser)]
#[command(name = "registro-api")]
#[command(version, about = "Lead registration intake endpoint", long_about = None)]
pub struct ApiConfig {
    /// Address to listen on
    #[arg(long, env = "REGISTRO_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Environment name reported by the probe
    #[arg(long, env = "REGISTRO_ENV", default_value = "prod")]
    pub environment: String,

    /// Release tag reported by the probe
    #[arg(long = "release", env = "REGISTRO_VERSION", default_value = "v2")]
    pub release: String,

    /// Reject leads that fail the form's field rules
    #[arg(long, env = "REGISTRO_VALIDATE_PAYLOAD")]
    pub validate_payload: bool,
}

impl ApiConfig {
    pub fn state(&self) -> ApiState {
        ApiState {
            environment: self.environment.clone(),
            version: self.release.clone(),
            validate_payload: self.validate_payload,
        }
    }
}
