use anyhow::Result;
use clap::Args;
use dsp_client::DspClient;

use crate::utils::render_body;

#[derive(Args)]
pub struct GetSubCommand {
    /// Request path, appended to the backend URL (e.g. `/me`)
    path: String,
}

pub async fn get(
    client: &DspClient,
    token: Option<&str>,
    sub_command_args: &GetSubCommand,
) -> Result<()> {
    let body = client.http().get(&sub_command_args.path, token).await?;

    println!("{}", render_body(&body)?);
    Ok(())
}
