//! Configuration schema definitions.
//!
//! All types derive Serde's `Deserialize` for loading from config files.

use serde::Deserialize;

/// Query parameter carrying the callback name when none is configured.
pub const DEFAULT_CALLBACK_PARAM: &str = "callback";

/// Settings for a single JSONP layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonpConfig {
    /// Name of the query parameter holding the callback (default: "callback").
    pub callback_param: String,

    /// Append a trailing newline to JSON responses served without a callback.
    pub carriage_return: bool,
}

impl Default for JsonpConfig {
    fn default() -> Self {
        Self {
            callback_param: DEFAULT_CALLBACK_PARAM.to_string(),
            carriage_return: false,
        }
    }
}

impl JsonpConfig {
    /// Use `name` as the callback query parameter.
    pub fn with_callback_param(mut self, name: impl Into<String>) -> Self {
        self.callback_param = name.into();
        self
    }

    /// Enable or disable the trailing newline on plain JSON responses.
    pub fn with_carriage_return(mut self, enabled: bool) -> Self {
        self.carriage_return = enabled;
        self
    }
}
