use std::io::{self, Write};

use anyhow::{bail, Result};
use dsp_client::ResponseBody;

/// Helper function to get user input with a prompt
pub fn get_user_input(prompt: &str) -> Result<String> {
    println!("{prompt}");
    let mut user_input = String::new();
    io::stdout().flush()?;
    io::stdin().read_line(&mut user_input)?;
    Ok(user_input.trim().to_string())
}

/// Use `value` when given, otherwise ask for it
pub fn value_or_prompt(value: Option<&str>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value.to_string()),
        None => {
            let input = get_user_input(prompt)?;
            if input.is_empty() {
                bail!("No input given");
            }
            Ok(input)
        }
    }
}

/// Render a response body for the terminal: JSON pretty printed, text verbatim
pub fn render_body(body: &ResponseBody) -> Result<String> {
    match body {
        ResponseBody::Json(value) => Ok(serde_json::to_string_pretty(value)?),
        ResponseBody::Text(text) => Ok(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_json_pretty() {
        let body = ResponseBody::Json(json!({"email": "user@example.com"}));
        assert_eq!(
            render_body(&body).expect("Body should render"),
            "{\n  \"email\": \"user@example.com\"\n}"
        );
    }

    #[test]
    fn test_render_text_verbatim() {
        let body = ResponseBody::Text("plain\ntext".to_string());
        assert_eq!(render_body(&body).expect("Body should render"), "plain\ntext");
    }

    #[test]
    fn test_value_or_prompt_prefers_value() {
        assert_eq!(
            value_or_prompt(Some("given"), "unused").expect("Value should be used"),
            "given"
        );
    }
}
