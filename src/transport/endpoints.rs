//! Endpoint path constants and builder functions for the Generative
//! Language API.

/// Base path for models endpoints.
pub const MODELS: &str = "/models";

/// Constructs a path for the generateContent endpoint.
///
/// # Arguments
///
/// * `model` - The model name (e.g., "gemini-2.5-flash")
///
/// # Returns
///
/// A string containing the generateContent endpoint path
///
/// # Example
///
/// ```
/// use transcript_summarizer::transport::endpoints;
///
/// let path = endpoints::generate_content("gemini-2.5-flash");
/// assert_eq!(path, "/models/gemini-2.5-flash:generateContent");
/// ```
pub fn generate_content(model: &str) -> String {
    format!("{}/{}:generateContent", MODELS, model)
}

/// Constructs a path for the streamGenerateContent endpoint.
///
/// # Arguments
///
/// * `model` - The model name (e.g., "gemini-2.5-flash")
///
/// # Returns
///
/// A string containing the streamGenerateContent endpoint path
///
/// # Example
///
/// ```
/// use transcript_summarizer::transport::endpoints;
///
/// let path = endpoints::stream_generate_content("gemini-2.5-flash");
/// assert_eq!(path, "/models/gemini-2.5-flash:streamGenerateContent");
/// ```
pub fn stream_generate_content(model: &str) -> String {
    format!("{}/{}:streamGenerateContent", MODELS, model)
}
