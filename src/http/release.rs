//! Explicit release of resource-backed response bodies.
//!
//! An inner service whose body holds a resource that must be released by
//! whoever consumes it (a file handle, a pooled buffer, a lease) attaches a
//! [`BodyRelease`] to the response extensions. The JSONP layer invokes it
//! only after draining the body itself; untouched responses keep the
//! extension so the caller inherits the obligation.

use std::fmt;
use std::sync::{Arc, Mutex};

use axum::http::Extensions;

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// One-shot release hook for a response body.
///
/// Clones share the same hook; the closure runs at most once no matter how
/// many clones call [`BodyRelease::release`].
#[derive(Clone)]
pub struct BodyRelease {
    slot: Arc<Mutex<Option<ReleaseFn>>>,
}

impl BodyRelease {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            slot: Arc::new(Mutex::new(Some(Box::new(f)))),
        }
    }

    /// Run the hook. Returns `false` if it had already run.
    pub fn release(&self) -> bool {
        let hook = match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match hook {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn is_released(&self) -> bool {
        match self.slot.lock() {
            Ok(slot) => slot.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl fmt::Debug for BodyRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyRelease")
            .field("released", &self.is_released())
            .finish()
    }
}

/// Take the release hook out of `extensions` and run it, if one is present.
pub(crate) fn release_consumed(extensions: &mut Extensions) -> bool {
    extensions
        .remove::<BodyRelease>()
        .is_some_and(|hook| hook.release())
}
