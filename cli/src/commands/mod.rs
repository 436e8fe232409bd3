//! CLI Commands

pub mod config;
pub mod lead;
pub mod probe;

/// Path of the intake endpoint under the API base URL
pub const INTAKE_PATH: &str = "/api/registro";

/// Intake endpoint URL for a base URL like `http://localhost:8080`
pub fn endpoint(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), INTAKE_PATH)
}
