//! Basic usage example for the DSP client
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Checking backend health
//! - Logging in and fetching the current user
//! - Error handling

use dsp_client::{DspClient, LoginRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = DspClient::from_env();
    println!("Backend: {}", client.base_url());

    println!("\n=== Health check ===");
    match client.health().await {
        Ok(health) => println!("Backend says: {}", health.message),
        Err(e) => eprintln!("Health check failed: {e}"),
    }

    let email = std::env::var("DSP_EMAIL").unwrap_or_else(|_| "user@example.com".to_string());
    let password = std::env::var("DSP_PASSWORD").unwrap_or_else(|_| "secret".to_string());

    println!("\n=== Login ===");
    let token = match client.login(&LoginRequest::new(email, password)).await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Login failed: {e}");
            return Ok(());
        }
    };

    let me = client.me(&token.access_token).await?;
    println!("Logged in as {}", me.email);

    Ok(())
}
