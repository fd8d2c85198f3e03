use crate::constants::NOT_ALLOWED_BY_CORS;
use crate::headers::Headers;
use thiserror::Error;

/// Headers and response metadata for an allowed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to answer with when `end_response` is set.
    pub status: Option<u16>,
    /// Preflights are answered directly and never reach a route handler.
    pub end_response: bool,
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(CorsResult),
    Simple(CorsResult),
    /// Origin not on the allow-list. The request still runs, but the response
    /// carries no CORS headers so the browser withholds it from the caller.
    Rejected(CorsRejection),
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, CorsDecision::Rejected(_))
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) | CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::Rejected(_) => None,
        }
    }
}

/// Policy outcome for a disallowed origin. Expected traffic, not a fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", NOT_ALLOWED_BY_CORS)]
pub struct CorsRejection {
    pub origin: String,
}
