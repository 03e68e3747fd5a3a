use anyhow::Result;
use clap::Args;
use dsp_client::{DspClient, SignupRequest};

use crate::utils::value_or_prompt;

#[derive(Args)]
pub struct SignupSubCommand {
    /// Email address of the new account
    #[arg(short, long)]
    email: String,
    /// Password, at least 6 characters; prompted for when omitted
    #[arg(short, long, env = "DSP_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

pub async fn signup(client: &DspClient, sub_command_args: &SignupSubCommand) -> Result<()> {
    let password = value_or_prompt(sub_command_args.password.as_deref(), "Enter password:")?;
    let request = SignupRequest::new(sub_command_args.email.clone(), password);

    let token = client.signup(&request).await?;

    println!("{}", token.access_token);
    Ok(())
}
