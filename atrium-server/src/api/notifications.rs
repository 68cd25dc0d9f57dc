//! User-visible notifications carried across a redirect.
//!
//! The identity actions answer the browser with a redirect and a `notice`
//! or `error` query parameter the profile page renders as a banner.

use axum::http::{HeaderMap, header};
use axum::response::Redirect;

/// Where the identity actions send the browser when no referrer is known
pub const PROFILE_PATH: &str = "/dashboard/profile";

pub fn notice_redirect(to: &str, message: &str) -> Redirect {
    redirect_with("notice", to, message)
}

pub fn error_redirect(to: &str, message: &str) -> Redirect {
    redirect_with("error", to, message)
}

/// The `Referer` target when the browser sent one, profile page otherwise
pub fn back_path(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| PROFILE_PATH.to_string())
}

fn redirect_with(key: &str, to: &str, message: &str) -> Redirect {
    let query = serde_urlencoded::to_string([(key, message)]).unwrap_or_default();
    Redirect::to(&format!("{}?{}", to, query))
}
