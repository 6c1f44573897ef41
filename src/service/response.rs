//! service::response
//!
//! The uniform success/failure envelope.
//!
//! Every operation answers with either
//! `{"success": true, ...payload}` or
//! `{"success": false, "error": {"code": ..., "message": ...}}`.

use serde::Serialize;

use crate::core::network::{NetworkError, Route, Station};
use crate::core::types::{StationId, TypeError};
use crate::core::MutationRecord;

/// Machine-readable failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NoSuchStation,
    NoSuchRoute,
    InvalidWeight,
    BadRequest,
}

/// Structured failure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl From<NetworkError> for ErrorBody {
    fn from(err: NetworkError) -> Self {
        let code = match err {
            NetworkError::NoSuchStation(_) => ErrorCode::NoSuchStation,
            NetworkError::NoSuchRoute { .. } => ErrorCode::NoSuchRoute,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl From<TypeError> for ErrorBody {
    fn from(err: TypeError) -> Self {
        let code = match err {
            TypeError::InvalidWeight(_) => ErrorCode::InvalidWeight,
            TypeError::InvalidStationName(_) => ErrorCode::BadRequest,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

/// Success payload; flattened next to `success` in the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// `add_station` — the prior name when overwriting, for audit.
    StationAdded { replaced: Option<String> },
    /// `remove_station`.
    StationRemoved { cascaded_routes: usize },
    /// `add_route` — no extra fields.
    RouteAdded {},
    /// `remove_route` — parallel edges removed.
    RouteRemoved { removed: usize },
    /// `list_stations`.
    Stations { stations: Vec<Station> },
    /// `list_routes`.
    Routes { routes: Vec<Route> },
    /// `shortest_path` — `path`/`distance` present only when reachable.
    Path {
        reachable: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<Vec<StationId>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<u64>,
    },
    /// `bfs` / `dfs`.
    Traversal { order: Vec<StationId> },
    /// `history` — newest first.
    History { entries: Vec<MutationRecord> },
    /// `status`.
    Status {
        stations: usize,
        routes: usize,
        history: usize,
        fingerprint: String,
    },
}

/// The response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        success: bool,
        #[serde(flatten)]
        payload: Payload,
    },
    Failure {
        success: bool,
        error: ErrorBody,
    },
}

impl Envelope {
    /// A success envelope around a payload.
    pub fn success(payload: Payload) -> Self {
        Self::Success {
            success: true,
            payload,
        }
    }

    /// A failure envelope from anything convertible to an error body.
    pub fn failure(error: impl Into<ErrorBody>) -> Self {
        Self::Failure {
            success: false,
            error: error.into(),
        }
    }

    /// A `bad_request` failure with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: ErrorBody {
                code: ErrorCode::BadRequest,
                message: message.into(),
            },
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The error body for failure envelopes.
    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// Serialize to a single JSON line (no trailing newline).
    ///
    /// Envelope types always serialize; an encoder failure would be a bug,
    /// so it is reported as a `bad_request`-coded JSON literal rather than a
    /// panic.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"success":false,"error":{{"code":"bad_request","message":"encode failure: {e}"}}}}"#
            )
        })
    }
}
