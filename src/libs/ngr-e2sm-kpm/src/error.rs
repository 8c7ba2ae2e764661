//! KPM Error Types

use ngr_asn1c::PerError;
use thiserror::Error;

/// Errors that can occur while assembling or encoding a KPM indication
#[derive(Error, Debug)]
pub enum KpmError {
    /// ASN.1 encoding/decoding error; fatal for the current build
    #[error("ASN.1 codec error: {0}")]
    Asn1(#[from] PerError),

    /// A measurement item cannot be represented on the wire
    #[error("Invalid measurement {name}: {reason}")]
    InvalidMeasurement { name: String, reason: String },
}

pub type KpmResult<T> = Result<T, KpmError>;
