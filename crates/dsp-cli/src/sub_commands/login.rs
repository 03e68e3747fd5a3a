use anyhow::Result;
use clap::Args;
use dsp_client::{DspClient, LoginRequest};

use crate::utils::value_or_prompt;

#[derive(Args)]
pub struct LoginSubCommand {
    /// Account email address
    #[arg(short, long)]
    email: String,
    /// Password; prompted for when omitted
    #[arg(short, long, env = "DSP_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

pub async fn login(client: &DspClient, sub_command_args: &LoginSubCommand) -> Result<()> {
    let password = value_or_prompt(sub_command_args.password.as_deref(), "Enter password:")?;
    let request = LoginRequest::new(sub_command_args.email.clone(), password);

    let token = client.login(&request).await?;

    println!("{}", token.access_token);
    Ok(())
}
