//! HTTP interception subsystem.
//!
//! # Data Flow
//! ```text
//! Request from caller
//!     → query.rs (extract callback, strip callback and `_` pairs)
//!     → inner service
//!     → padding.rs (JSON check, drain, frame, fix headers)
//!     → release.rs (release the drained body, if it asks for it)
//!     → Response to caller
//! ```

pub mod layer;
pub mod padding;
pub mod query;
pub mod release;

pub use layer::{Jsonp, JsonpLayer};
pub use padding::{Framing, JAVASCRIPT_CONTENT_TYPE};
pub use release::BodyRelease;
