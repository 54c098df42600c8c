//! Serving the single-page application in history mode.
//!
//! # Responsibilities
//! - Answer deep links (`/`, `/quiz` under the base path) with the app shell
//! - Tag the shell with the view the route table resolved
//! - Answer unknown paths with the shell's not-found view and a 404
//!
//! # Design Decisions
//! - Route table is the single source of truth for which paths exist
//! - Query strings never influence which view is served

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use crate::http::server::AppState;
use crate::routing::Resolution;

/// Fallback handler: resolve the path through the route table.
pub async fn spa_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let resolution = state.routes.resolve(uri.path());
    let status = match resolution {
        Resolution::Matched(_) => StatusCode::OK,
        Resolution::NotFound { ref path } => {
            tracing::debug!(path = %path, "No route matched");
            StatusCode::NOT_FOUND
        }
    };

    let page = render_shell(
        &state.frontend.title,
        &state.routes.base_url(),
        resolution.view_name(),
    );
    (status, Html(page))
}

/// HTML document the frontend boots from.
pub fn render_shell(title: &str, base_url: &str, view: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <base href=\"{base}\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"app\" data-view=\"{view}\" data-base-url=\"{base}\"></div>\n\
         </body>\n\
         </html>\n",
        base = escape(base_url),
        title = escape(title),
        view = escape(view),
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
