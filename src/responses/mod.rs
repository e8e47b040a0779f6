pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::json_failure;

pub use html::{html_response, html_response_with_status};
pub use json::{json_error, json_response};
