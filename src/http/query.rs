//! Query string handling for JSONP requests.
//!
//! # Responsibilities
//! - Extract the callback name from the query string
//! - Strip the callback and `_` cache-buster pairs from the raw query
//! - Write the filtered query back into the request URI
//!
//! # Design Decisions
//! - Filtering works on the raw text; surviving pairs are never re-encoded
//! - Only exact names are removed (`_c` survives, `_` does not)
//! - A query that filters down to nothing drops the `?` as well

use axum::http::uri::{PathAndQuery, Uri};
use axum::http::Request;
use url::form_urlencoded;

/// Name of the cache-busting parameter jQuery appends to JSONP requests.
pub const CACHE_BUSTER_PARAM: &str = "_";

/// Return the decoded callback requested in `query`, if any.
///
/// The last pair named `param` wins. An empty value is treated as no
/// callback.
pub fn extract_callback(query: Option<&str>, param: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .filter(|(name, _)| name == param)
        .last()
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Remove every `_` and `param` pair from a raw query string.
pub fn strip_params(query: &str, param: &str) -> String {
    query
        .split('&')
        .filter(|pair| {
            let name = pair.split_once('=').map_or(*pair, |(name, _)| name);
            name != CACHE_BUSTER_PARAM && name != param
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Rewrite the request URI so its query no longer carries `_` or `param`.
///
/// Returns `true` if the URI was changed.
pub fn strip_request_query<B>(req: &mut Request<B>, param: &str) -> bool {
    let Some(query) = req.uri().query() else {
        return false;
    };

    let filtered = strip_params(query, param);
    if filtered == query {
        return false;
    }

    let path = req.uri().path();
    let path_and_query = if filtered.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{filtered}")
    };

    let path_and_query = match PathAndQuery::try_from(path_and_query) {
        Ok(pq) => pq,
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Failed to rebuild query, keeping original URI");
            return false;
        }
    };

    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    match Uri::from_parts(parts) {
        Ok(uri) => {
            *req.uri_mut() = uri;
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Failed to rebuild URI, keeping original");
            false
        }
    }
}
