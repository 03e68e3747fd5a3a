use anyhow::{Context, Result};
use dsp_client::DspClient;

pub async fn me(client: &DspClient, token: Option<&str>) -> Result<()> {
    let token = token.context("A token is required: pass --token or set DSP_AUTH_TOKEN")?;

    let user = client.me(token).await?;

    println!("{}", user.email);
    Ok(())
}
