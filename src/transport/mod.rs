//! HTTP transport layer for the summarizer client.

mod http;
mod error;
mod reqwest;
pub mod endpoints;
mod request;
mod response;

pub use http::{ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport, StreamingResponse};
pub use error::TransportError;
pub use reqwest::ReqwestTransport;
pub use request::RequestBuilder;
pub use response::ResponseParser;
