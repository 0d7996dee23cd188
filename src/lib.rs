//! JSONP support for tower and axum services.
//!
//! [`JsonpLayer`] wraps any `Service<Request<B>>` returning
//! `Response<B2>`. Before the inner service runs, the callback parameter and
//! jQuery's `_` cache-buster are removed from the query string, so caches
//! downstream see one key per resource. When a callback was requested and
//! the response is JSON, the body is returned as `callback(body)` with
//! `Content-Type: application/javascript`.
//!
//! ```no_run
//! use axum::{routing::get, Json, Router};
//! use jsonp_layer::{JsonpConfig, JsonpLayer};
//!
//! let app: Router = Router::new()
//!     .route("/items", get(|| async { Json(vec![1, 2, 3]) }))
//!     .layer(JsonpLayer::with_config(
//!         JsonpConfig::default().with_carriage_return(true),
//!     ));
//! ```

pub mod config;
pub mod http;
pub mod observability;

pub use config::JsonpConfig;
pub use http::{BodyRelease, Jsonp, JsonpLayer};
