//! Probe command

use lead_client::{ClientConfig, HttpTransport};

use crate::output::{self, OutputFormat};

pub async fn handle(endpoint: String, format: OutputFormat) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&ClientConfig::with_endpoint(endpoint))?;
    let info = transport.probe().await?;
    if format == OutputFormat::Table {
        output::success(&format!("{} is up", transport.endpoint()));
    }
    format.print(&info);
    Ok(())
}
