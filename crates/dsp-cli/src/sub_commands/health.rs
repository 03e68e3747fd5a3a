use anyhow::{bail, Result};
use dsp_client::DspClient;

pub async fn health(client: &DspClient) -> Result<()> {
    let health = client.health().await?;

    if !health.is_healthy() {
        bail!("Backend at {} reported: {}", client.base_url(), health.message);
    }

    println!("{}: {}", client.base_url(), health.message);
    Ok(())
}
