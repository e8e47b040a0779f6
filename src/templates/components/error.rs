use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into an HTML error page.
///
/// Storage and internal failures are logged here; the page itself only says
/// that something went wrong.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    match err {
        ServerError::NotFound => render_error(status, "Not Found"),

        other => {
            tracing::error!("Request failed: {other}");
            render_error(status, "Something went wrong. Please try again later.")
        }
    }
}

fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
