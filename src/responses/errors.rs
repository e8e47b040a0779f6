use crate::errors::ServerError;
use crate::responses::json_error;
use astra::Response;

/// Turn a failed API call into its JSON error response.
///
/// Not-found gets `not_found` as its message. Everything else is logged here
/// and reported to the client only as `failure`.
pub fn json_failure(err: ServerError, not_found: &str, failure: &str) -> Response {
    match err {
        ServerError::NotFound => json_error(404, not_found),
        other => {
            tracing::error!("{failure}: {other}");
            json_error(500, failure)
        }
    }
}
