use crate::error::{Result, ShellbotError};
use crate::models::chat::ChatResponse;

/// Returned when a well-formed response carries no choices.
pub const NO_RESPONSE: &str = "No response from API";

/// Parse a raw response body and pull out the first choice's message text.
///
/// An empty `choices` array is not an error; it yields [`NO_RESPONSE`].
pub fn extract_content(body: &str) -> Result<String> {
    let resp: ChatResponse = serde_json::from_str(body).map_err(ShellbotError::Parse)?;

    if let Some(err) = &resp.error {
        tracing::warn!(
            api_message = err.message.as_deref().unwrap_or_default(),
            api_error_type = err.kind.as_deref().unwrap_or_default(),
            "API returned an error body"
        );
    }

    match resp.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content.unwrap_or_default()),
        None => {
            tracing::debug!("response carried no choices");
            Ok(NO_RESPONSE.to_string())
        }
    }
}
