//! Response body rewriting.
//!
//! # Responsibilities
//! - Decide whether a response is JSON from its `Content-Type`
//! - Drain the body and frame it as `callback(...)` or `...\n`
//! - Keep `Content-Length` and `Content-Type` consistent with the new body
//!
//! # Design Decisions
//! - JSON detection is a case-insensitive substring match on "json",
//!   so vendor types like `application/vnd.example+json` qualify
//! - Bodies are concatenated as raw bytes; content is never validated
//! - Status codes are never touched

use axum::body::{Body, Bytes};
use axum::http::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::Response;

use crate::http::release::release_consumed;
use crate::observability::metrics::{self, Outcome};

/// Content type of a padded response.
pub const JAVASCRIPT_CONTENT_TYPE: &str = "application/javascript";

/// How a response body is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing {
    /// Wrap the body in a call to the named function.
    Pad(String),
    /// Append a single trailing newline.
    CarriageReturn,
    /// Leave the response alone.
    Passthrough,
}

impl Framing {
    /// Pick the framing for a response. A callback takes priority over
    /// the carriage return.
    pub fn select(callback: Option<String>, carriage_return: bool, headers: &HeaderMap) -> Self {
        if !is_json(headers) {
            return Framing::Passthrough;
        }
        match callback {
            Some(callback) => Framing::Pad(callback),
            None if carriage_return => Framing::CarriageReturn,
            None => Framing::Passthrough,
        }
    }

    fn frame(&self, text: &[u8]) -> Vec<u8> {
        match self {
            Framing::Pad(callback) => {
                let mut out = Vec::with_capacity(callback.len() + text.len() + 2);
                out.extend_from_slice(callback.as_bytes());
                out.push(b'(');
                out.extend_from_slice(text);
                out.push(b')');
                out
            }
            Framing::CarriageReturn => {
                let mut out = Vec::with_capacity(text.len() + 1);
                out.extend_from_slice(text);
                out.push(b'\n');
                out
            }
            Framing::Passthrough => text.to_vec(),
        }
    }

    fn outcome(&self) -> Outcome {
        match self {
            Framing::Pad(_) => Outcome::Padded,
            Framing::CarriageReturn => Outcome::CarriageReturn,
            Framing::Passthrough => Outcome::Passthrough,
        }
    }
}

/// Returns true if the `Content-Type` header mentions JSON.
pub fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().windows(4).any(|w| w.eq_ignore_ascii_case(b"json")))
}

/// Apply `framing` to a response produced by the inner service.
///
/// Passthrough responses are returned without reading the body. Any other
/// framing drains the body, releases it, and replaces it with a single
/// chunk.
pub async fn apply(response: Response<Body>, framing: Framing) -> Response<Body> {
    if framing == Framing::Passthrough {
        metrics::record_outcome(Outcome::Passthrough);
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let drained = axum::body::to_bytes(body, usize::MAX).await;
    release_consumed(&mut parts.extensions);

    let text = match drained {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to drain response body, forwarding error");
            metrics::record_outcome(Outcome::DrainFailed);
            parts.headers.remove(CONTENT_LENGTH);
            let failed = futures_util::stream::once(async move { Err::<Bytes, _>(e) });
            return Response::from_parts(parts, Body::from_stream(failed));
        }
    };

    let framed = framing.frame(&text);
    metrics::record_outcome(framing.outcome());
    metrics::record_rewritten_bytes(framed.len());

    parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(framed.len()));
    if let Framing::Pad(_) = framing {
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT_CONTENT_TYPE));
    }

    Response::from_parts(parts, Body::from(framed))
}
