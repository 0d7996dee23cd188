//! Metrics collection.
//!
//! # Metrics
//! - `jsonp_responses_total` (counter): responses by `outcome`
//! - `jsonp_rewritten_bytes` (histogram): size of padded / newline-terminated bodies

/// What the JSONP layer did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Padded,
    CarriageReturn,
    Passthrough,
    DrainFailed,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Padded => "padded",
            Outcome::CarriageReturn => "carriage_return",
            Outcome::Passthrough => "passthrough",
            Outcome::DrainFailed => "drain_failed",
        }
    }
}

pub fn record_outcome(outcome: Outcome) {
    ::metrics::counter!("jsonp_responses_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_rewritten_bytes(len: usize) {
    ::metrics::histogram!("jsonp_rewritten_bytes").record(len as f64);
}
