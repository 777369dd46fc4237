//! Failure reasons for natural-language conversions
//!
//! The adapter never propagates errors. Every way a query can fail to
//! produce a result is one of these variants, so callers branch on
//! presence/absence and can still log the reason.

use thiserror::Error;
use serde::Serialize;
use ts_rs::TS;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "type")]
#[ts(export, export_to = "conversion/")]
pub enum ConversionFailure {
    /// Query has fewer than three whitespace-separated tokens
    #[error("Query is too short to interpret")]
    AmbiguousQuery,

    /// The extraction service failed or returned malformed data
    #[error("Could not extract a conversion from the query")]
    ExtractionFailed,

    /// An extracted unit name matches nothing in the registry
    #[error("Unit not recognised")]
    UnresolvedUnit,

    /// Both units resolved, but no single category contains them
    #[error("Units belong to different categories")]
    CrossCategory,

    /// The engine has no way to relate the two units
    #[error("Units cannot be converted")]
    NotConvertible,
}

// Message used when a command receives units it cannot relate
pub const ERR_NOT_CONVERTIBLE: &str = "Cannot convert between the given units";
