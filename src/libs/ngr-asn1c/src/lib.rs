//! NextGRAN ASN.1 Codec Library
//!
//! This crate provides ASN.1 APER encoding/decoding for the E2 service
//! models spoken between a RAN node and the near-RT RIC.
//!
//! # Modules
//!
//! - `per` - Packed Encoding Rules (APER) encoder/decoder
//! - `e2sm_kpm` - E2SM-KPM indication types and codec (O-RAN E2SM-KPM)

pub mod per; // Packed Encoding Rules
pub mod e2sm_kpm; // E2SM-KPM codec

#[cfg(test)]
mod property_tests;

// Re-export commonly used types
pub use per::{AperDecode, AperDecoder, AperEncode, AperEncoder, PerError, PerResult};
