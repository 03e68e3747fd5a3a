use anyhow::{Context, Result};
use clap::Args;
use dsp_client::DspClient;
use serde_json::Value;

use crate::utils::render_body;

#[derive(Args)]
pub struct PostSubCommand {
    /// Request path, appended to the backend URL (e.g. `/login`)
    path: String,
    /// JSON request body; `{}` when omitted
    #[arg(short, long)]
    body: Option<String>,
}

pub async fn post(
    client: &DspClient,
    token: Option<&str>,
    sub_command_args: &PostSubCommand,
) -> Result<()> {
    let body = parse_body(sub_command_args.body.as_deref())?;

    let response = client
        .http()
        .post(&sub_command_args.path, body.as_ref(), token)
        .await?;

    println!("{}", render_body(&response)?);
    Ok(())
}

fn parse_body(body: Option<&str>) -> Result<Option<Value>> {
    body.map(|body| serde_json::from_str(body).context("Request body is not valid JSON"))
        .transpose()
}
