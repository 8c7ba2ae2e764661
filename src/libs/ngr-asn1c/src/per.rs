//! PER (Packed Encoding Rules) encoding/decoding
//!
//! Implementation of Aligned PER (APER) as used by the E2 service models.
//! Based on ITU-T X.691; REAL values use the X.690 8.5 binary (base-2)
//! content form wrapped in a length determinant.

use bitvec::prelude::*;
use bytes::Bytes;
use thiserror::Error;

/// PER codec errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerError {
    #[error("Buffer underflow: need {needed} bits, have {available}")]
    BufferUnderflow { needed: usize, available: usize },
    #[error("Invalid constraint: value {value} not in range {min}..={max}")]
    ConstraintViolation { value: i64, min: i64, max: i64 },
    #[error("Invalid choice index: {index} (max {max})")]
    InvalidChoiceIndex { index: usize, max: usize },
    #[error("Invalid length: {length}")]
    InvalidLength { length: usize },
    #[error("Non-finite REAL value: {value}")]
    NonFiniteReal { value: f64 },
    #[error("Unsupported extension")]
    UnsupportedExtension,
    #[error("Decode error: {0}")]
    DecodeError(String),
}

pub type PerResult<T> = Result<T, PerError>;

/// Constraint definition for constrained integers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub min: i64,
    pub max: i64,
    pub extensible: bool,
}

impl Constraint {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max, extensible: false }
    }

    pub const fn extensible(min: i64, max: i64) -> Self {
        Self { min, max, extensible: true }
    }

    pub fn range(&self) -> u64 {
        if self.max >= self.min {
            (self.max - self.min) as u64 + 1
        } else {
            0
        }
    }

    /// Bits needed to encode values in this range
    pub fn bits_needed(&self) -> usize {
        let range = self.range();
        if range <= 1 {
            0
        } else {
            64 - (range - 1).leading_zeros() as usize
        }
    }
}

/// Minimal big-endian two's-complement representation of a signed value
fn signed_to_min_bytes(value: i64) -> Vec<u8> {
    let mut buf = Vec::new();
    if value >= 0 {
        let mut v = value as u64;
        if v == 0 {
            buf.push(0);
        } else {
            while v > 0 {
                buf.push((v & 0xFF) as u8);
                v >>= 8;
            }
            buf.reverse();
            // Leading zero keeps the sign bit clear
            if buf[0] & 0x80 != 0 {
                buf.insert(0, 0);
            }
        }
    } else {
        let mut v = value;
        loop {
            let top = (v & 0xFF) as u8;
            buf.push(top);
            v >>= 8;
            if (v == -1 && top & 0x80 != 0) || (v == 0 && top & 0x80 == 0) {
                break;
            }
        }
        buf.reverse();
    }
    buf
}

/// Minimal big-endian representation of an unsigned value (no sign padding)
fn unsigned_to_min_bytes(mut value: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    if value == 0 {
        buf.push(0);
    } else {
        while value > 0 {
            buf.push((value & 0xFF) as u8);
            value >>= 8;
        }
        buf.reverse();
    }
    buf
}

/// APER (Aligned PER) Encoder
pub struct AperEncoder {
    buffer: BitVec<u8, Msb0>,
}

impl AperEncoder {
    pub fn new() -> Self {
        Self { buffer: BitVec::new() }
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buffer.into_vec())
    }

    /// Get current bit position
    pub fn bit_position(&self) -> usize {
        self.buffer.len()
    }

    /// Align to octet boundary
    pub fn align(&mut self) {
        let remainder = self.buffer.len() % 8;
        if remainder != 0 {
            for _ in 0..(8 - remainder) {
                self.buffer.push(false);
            }
        }
    }

    /// Write a single bit
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer.push(bit);
    }

    /// Write multiple bits from a value (MSB first)
    pub fn write_bits(&mut self, value: u64, num_bits: usize) {
        for i in (0..num_bits).rev() {
            self.buffer.push((value >> i) & 1 == 1);
        }
    }

    /// Write raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.write_bits(*byte as u64, 8);
        }
    }

    /// Encode constrained whole number (X.691 Section 12.2)
    pub fn encode_constrained_whole_number(
        &mut self,
        value: i64,
        constraint: &Constraint,
    ) -> PerResult<()> {
        if value < constraint.min || value > constraint.max {
            return Err(PerError::ConstraintViolation {
                value,
                min: constraint.min,
                max: constraint.max,
            });
        }

        let range = constraint.range();
        let offset = (value - constraint.min) as u64;

        if range == 1 {
            // Single value, no bits on the wire
            return Ok(());
        }

        if range <= 255 {
            self.write_bits(offset, constraint.bits_needed());
        } else if range == 256 {
            self.align();
            self.write_bits(offset, 8);
        } else if range <= 65536 {
            self.align();
            self.write_bits(offset, 16);
        } else {
            // Large range, encode as unconstrained
            self.encode_unconstrained_whole_number(value)?;
        }

        Ok(())
    }

    /// Encode unconstrained whole number (X.691 Section 12.2.6)
    pub fn encode_unconstrained_whole_number(&mut self, value: i64) -> PerResult<()> {
        let bytes = signed_to_min_bytes(value);
        self.encode_length_determinant(bytes.len())?;
        self.align();
        self.write_bytes(&bytes);
        Ok(())
    }

    /// Encode length determinant (X.691 Section 11.9)
    ///
    /// Lengths above 16383 would require the fragmented form, which the
    /// E2SM payloads produced here never reach.
    pub fn encode_length_determinant(&mut self, length: usize) -> PerResult<()> {
        self.align();
        if length <= 127 {
            // Short form: 0xxxxxxx
            self.write_bits(length as u64, 8);
        } else if length <= 16383 {
            // Long form: 10xxxxxx xxxxxxxx
            self.write_bits(0x8000 | length as u64, 16);
        } else {
            return Err(PerError::InvalidLength { length });
        }
        Ok(())
    }

    /// Encode constrained length determinant
    pub fn encode_constrained_length(
        &mut self,
        length: usize,
        min: usize,
        max: usize,
    ) -> PerResult<()> {
        let constraint = Constraint::new(min as i64, max as i64);
        self.encode_constrained_whole_number(length as i64, &constraint)
    }

    /// Encode ENUMERATED (X.691 Section 14)
    pub fn encode_enumerated(&mut self, value: i64, constraint: &Constraint) -> PerResult<()> {
        if constraint.extensible {
            let in_root = value >= constraint.min && value <= constraint.max;
            self.write_bit(!in_root);
            if in_root {
                self.encode_constrained_whole_number(value, constraint)?;
            } else {
                self.encode_normally_small_non_negative(value as u64)?;
            }
        } else {
            self.encode_constrained_whole_number(value, constraint)?;
        }
        Ok(())
    }

    /// Encode normally small non-negative whole number (X.691 Section 11.6)
    pub fn encode_normally_small_non_negative(&mut self, value: u64) -> PerResult<()> {
        if value <= 63 {
            self.write_bit(false);
            self.write_bits(value, 6);
        } else {
            self.write_bit(true);
            self.encode_unconstrained_whole_number(value as i64)?;
        }
        Ok(())
    }

    /// Encode CHOICE index (X.691 Section 23)
    pub fn encode_choice_index(
        &mut self,
        index: usize,
        num_alternatives: usize,
        extensible: bool,
    ) -> PerResult<()> {
        if extensible {
            let in_root = index < num_alternatives;
            self.write_bit(!in_root);
            if in_root {
                let constraint = Constraint::new(0, (num_alternatives - 1) as i64);
                self.encode_constrained_whole_number(index as i64, &constraint)?;
            } else {
                self.encode_normally_small_non_negative((index - num_alternatives) as u64)?;
            }
        } else {
            if index >= num_alternatives {
                return Err(PerError::InvalidChoiceIndex {
                    index,
                    max: num_alternatives - 1,
                });
            }
            let constraint = Constraint::new(0, (num_alternatives - 1) as i64);
            self.encode_constrained_whole_number(index as i64, &constraint)?;
        }
        Ok(())
    }

    /// Encode OCTET STRING (X.691 Section 17)
    pub fn encode_octet_string(
        &mut self,
        data: &[u8],
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> PerResult<()> {
        let len = data.len();

        match (min_len, max_len) {
            (Some(min), Some(max)) if min == max => {
                // Fixed size, no length on the wire
                if len != min {
                    return Err(PerError::InvalidLength { length: len });
                }
                if min > 2 {
                    self.align();
                }
                self.write_bytes(data);
            }
            (Some(min), Some(max)) => {
                self.encode_constrained_length(len, min, max)?;
                if max > 2 {
                    self.align();
                }
                self.write_bytes(data);
            }
            _ => {
                self.encode_length_determinant(len)?;
                self.write_bytes(data);
            }
        }
        Ok(())
    }

    /// Encode BIT STRING (X.691 Section 16)
    pub fn encode_bit_string(
        &mut self,
        bits: &BitSlice<u8, Msb0>,
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> PerResult<()> {
        let len = bits.len();

        match (min_len, max_len) {
            (Some(min), Some(max)) if min == max => {
                // Fixed size
                if len != min {
                    return Err(PerError::InvalidLength { length: len });
                }
                if min > 16 {
                    self.align();
                }
            }
            (Some(min), Some(max)) => {
                self.encode_constrained_length(len, min, max)?;
                if max > 16 {
                    self.align();
                }
            }
            _ => {
                self.encode_length_determinant(len)?;
            }
        }
        for bit in bits {
            self.write_bit(*bit);
        }
        Ok(())
    }

    /// Encode REAL (X.690 Section 8.5, binary base-2 form)
    ///
    /// The content octets are `{ header, exponent, mantissa }` with the
    /// mantissa normalized so its low bit is set, wrapped in a length
    /// determinant like any variable-size field. Zero encodes as zero
    /// content octets. Infinities and NaN are rejected.
    pub fn encode_real(&mut self, value: f64) -> PerResult<()> {
        if !value.is_finite() {
            return Err(PerError::NonFiniteReal { value });
        }

        let mut content: Vec<u8> = Vec::new();
        if value != 0.0 {
            let bits = value.to_bits();
            let sign = (bits >> 63) as u8;
            let raw_exp = ((bits >> 52) & 0x7FF) as i64;
            let mut mantissa = bits & 0x000F_FFFF_FFFF_FFFF;
            let mut exponent = if raw_exp == 0 {
                // Subnormal, no implicit leading bit
                -1074
            } else {
                mantissa |= 1 << 52;
                raw_exp - 1075
            };
            while mantissa & 1 == 0 {
                mantissa >>= 1;
                exponent += 1;
            }

            let exp_bytes = signed_to_min_bytes(exponent);
            // 0x80 = binary base 2, scaling factor 0; bit 6 carries the sign,
            // bits 0-1 the exponent length minus one. Exponents of f64 fit
            // in two octets, so the multi-octet form is never needed.
            content.push(0x80 | (sign << 6) | (exp_bytes.len() as u8 - 1));
            content.extend_from_slice(&exp_bytes);
            content.extend_from_slice(&unsigned_to_min_bytes(mantissa));
        }

        self.encode_length_determinant(content.len())?;
        self.write_bytes(&content);
        Ok(())
    }
}

impl Default for AperEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// APER (Aligned PER) Decoder
pub struct AperDecoder<'a> {
    data: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> AperDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data: BitSlice::from_slice(data),
            position: 0,
        }
    }

    /// Get current bit position
    pub fn bit_position(&self) -> usize {
        self.position
    }

    /// Get remaining bits
    pub fn remaining_bits(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Align to octet boundary
    pub fn align(&mut self) {
        let remainder = self.position % 8;
        if remainder != 0 {
            self.position += 8 - remainder;
        }
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> PerResult<bool> {
        if self.position >= self.data.len() {
            return Err(PerError::BufferUnderflow {
                needed: 1,
                available: 0,
            });
        }
        let bit = self.data[self.position];
        self.position += 1;
        Ok(bit)
    }

    /// Read multiple bits as a value (MSB first)
    pub fn read_bits(&mut self, num_bits: usize) -> PerResult<u64> {
        if self.position + num_bits > self.data.len() {
            return Err(PerError::BufferUnderflow {
                needed: num_bits,
                available: self.data.len() - self.position,
            });
        }

        let mut value: u64 = 0;
        for _ in 0..num_bits {
            value = (value << 1) | (self.data[self.position] as u64);
            self.position += 1;
        }
        Ok(value)
    }

    /// Read raw bytes
    pub fn read_bytes(&mut self, num_bytes: usize) -> PerResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(num_bytes);
        for _ in 0..num_bytes {
            bytes.push(self.read_bits(8)? as u8);
        }
        Ok(bytes)
    }

    /// Decode constrained whole number (X.691 Section 12.2)
    pub fn decode_constrained_whole_number(&mut self, constraint: &Constraint) -> PerResult<i64> {
        let range = constraint.range();

        if range == 1 {
            return Ok(constraint.min);
        }

        let offset = if range <= 255 {
            self.read_bits(constraint.bits_needed())?
        } else if range == 256 {
            self.align();
            self.read_bits(8)?
        } else if range <= 65536 {
            self.align();
            self.read_bits(16)?
        } else {
            return self.decode_unconstrained_whole_number();
        };

        Ok(constraint.min + offset as i64)
    }

    /// Decode unconstrained whole number (X.691 Section 12.2.6)
    pub fn decode_unconstrained_whole_number(&mut self) -> PerResult<i64> {
        let len = self.decode_length_determinant()?;
        self.align();
        let bytes = self.read_bytes(len)?;

        if bytes.is_empty() {
            return Ok(0);
        }

        let negative = bytes[0] & 0x80 != 0;
        let mut value: i64 = if negative { -1 } else { 0 };
        for byte in bytes {
            value = (value << 8) | (byte as i64);
        }
        Ok(value)
    }

    /// Decode length determinant (X.691 Section 11.9)
    pub fn decode_length_determinant(&mut self) -> PerResult<usize> {
        self.align();
        let first_byte = self.read_bits(8)? as u8;

        if first_byte & 0x80 == 0 {
            // Short form
            Ok(first_byte as usize)
        } else if first_byte & 0x40 == 0 {
            // Long form
            let second_byte = self.read_bits(8)? as u8;
            Ok((((first_byte & 0x3F) as usize) << 8) | (second_byte as usize))
        } else {
            // Fragmented form is not produced by the encoder
            Err(PerError::DecodeError(
                "fragmented length determinant not supported".into(),
            ))
        }
    }

    /// Decode constrained length determinant
    pub fn decode_constrained_length(&mut self, min: usize, max: usize) -> PerResult<usize> {
        let constraint = Constraint::new(min as i64, max as i64);
        self.decode_constrained_whole_number(&constraint)
            .map(|v| v as usize)
    }

    /// Decode ENUMERATED (X.691 Section 14)
    pub fn decode_enumerated(&mut self, constraint: &Constraint) -> PerResult<i64> {
        if constraint.extensible {
            let extended = self.read_bit()?;
            if !extended {
                self.decode_constrained_whole_number(constraint)
            } else {
                let value = self.decode_normally_small_non_negative()?;
                Ok(value as i64)
            }
        } else {
            self.decode_constrained_whole_number(constraint)
        }
    }

    /// Decode normally small non-negative whole number (X.691 Section 11.6)
    pub fn decode_normally_small_non_negative(&mut self) -> PerResult<u64> {
        let large = self.read_bit()?;
        if !large {
            self.read_bits(6)
        } else {
            self.decode_unconstrained_whole_number().map(|v| v as u64)
        }
    }

    /// Decode CHOICE index (X.691 Section 23)
    pub fn decode_choice_index(
        &mut self,
        num_alternatives: usize,
        extensible: bool,
    ) -> PerResult<usize> {
        if extensible {
            let extended = self.read_bit()?;
            if !extended {
                let constraint = Constraint::new(0, (num_alternatives - 1) as i64);
                self.decode_constrained_whole_number(&constraint)
                    .map(|v| v as usize)
            } else {
                let ext_index = self.decode_normally_small_non_negative()?;
                Ok(num_alternatives + ext_index as usize)
            }
        } else {
            let constraint = Constraint::new(0, (num_alternatives - 1) as i64);
            self.decode_constrained_whole_number(&constraint)
                .map(|v| v as usize)
        }
    }

    /// Decode OCTET STRING (X.691 Section 17)
    pub fn decode_octet_string(
        &mut self,
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> PerResult<Vec<u8>> {
        let len = match (min_len, max_len) {
            (Some(min), Some(max)) if min == max => {
                if min > 2 {
                    self.align();
                }
                min
            }
            (Some(min), Some(max)) => {
                let len = self.decode_constrained_length(min, max)?;
                if max > 2 {
                    self.align();
                }
                len
            }
            _ => self.decode_length_determinant()?,
        };

        self.read_bytes(len)
    }

    /// Decode BIT STRING (X.691 Section 16)
    pub fn decode_bit_string(
        &mut self,
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> PerResult<BitVec<u8, Msb0>> {
        let len = match (min_len, max_len) {
            (Some(min), Some(max)) if min == max => {
                if min > 16 {
                    self.align();
                }
                min
            }
            (Some(min), Some(max)) => {
                let len = self.decode_constrained_length(min, max)?;
                if max > 16 {
                    self.align();
                }
                len
            }
            _ => self.decode_length_determinant()?,
        };

        let mut bits = BitVec::with_capacity(len);
        for _ in 0..len {
            bits.push(self.read_bit()?);
        }
        Ok(bits)
    }

    /// Decode REAL (X.690 Section 8.5, binary base-2 form)
    pub fn decode_real(&mut self) -> PerResult<f64> {
        let len = self.decode_length_determinant()?;
        let content = self.read_bytes(len)?;

        if content.is_empty() {
            return Ok(0.0);
        }

        let header = content[0];
        if header & 0x80 == 0 {
            return Err(PerError::DecodeError(
                "only binary REAL encoding is supported".into(),
            ));
        }
        if header & 0x30 != 0 || header & 0x0C != 0 {
            return Err(PerError::DecodeError(
                "unsupported REAL base or scaling factor".into(),
            ));
        }
        let negative = header & 0x40 != 0;
        let exp_len = (header & 0x03) as usize + 1;
        if content.len() < 1 + exp_len + 1 {
            return Err(PerError::DecodeError("truncated REAL content".into()));
        }

        let mut exponent: i64 = if content[1] & 0x80 != 0 { -1 } else { 0 };
        for byte in &content[1..1 + exp_len] {
            exponent = (exponent << 8) | (*byte as i64);
        }

        let mut mantissa: u64 = 0;
        for byte in &content[1 + exp_len..] {
            mantissa = (mantissa << 8) | (*byte as u64);
        }

        let mut value = mantissa as f64 * 2f64.powi(exponent as i32);
        if negative {
            value = -value;
        }
        Ok(value)
    }
}

/// Trait for types that can be encoded with APER
pub trait AperEncode {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()>;
}

/// Trait for types that can be decoded with APER
pub trait AperDecode: Sized {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_bits_needed() {
        assert_eq!(Constraint::new(0, 0).bits_needed(), 0);
        assert_eq!(Constraint::new(0, 1).bits_needed(), 1);
        assert_eq!(Constraint::new(0, 2).bits_needed(), 2);
        assert_eq!(Constraint::new(0, 7).bits_needed(), 3);
        assert_eq!(Constraint::new(0, 255).bits_needed(), 8);
    }

    #[test]
    fn test_encode_decode_constrained() {
        let constraint = Constraint::new(0, 2);

        for value in 0..=2 {
            let mut encoder = AperEncoder::new();
            encoder
                .encode_constrained_whole_number(value, &constraint)
                .unwrap();
            encoder.align();

            let bytes = encoder.into_bytes();
            let mut decoder = AperDecoder::new(&bytes);
            let decoded = decoder.decode_constrained_whole_number(&constraint).unwrap();

            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_encode_decode_large_range() {
        let constraint = Constraint::new(0, 4_294_967_295);
        for value in [0i64, 1, 255, 65536, 4_294_967_295] {
            let mut encoder = AperEncoder::new();
            encoder
                .encode_constrained_whole_number(value, &constraint)
                .unwrap();
            encoder.align();

            let bytes = encoder.into_bytes();
            let mut decoder = AperDecoder::new(&bytes);
            assert_eq!(
                decoder.decode_constrained_whole_number(&constraint).unwrap(),
                value
            );
        }
    }

    #[test]
    fn test_constraint_violation() {
        let constraint = Constraint::new(0, 4_294_967_295);
        let mut encoder = AperEncoder::new();
        let err = encoder
            .encode_constrained_whole_number(-1, &constraint)
            .unwrap_err();
        assert!(matches!(err, PerError::ConstraintViolation { value: -1, .. }));
    }

    #[test]
    fn test_encode_decode_length() {
        for len in [0, 1, 127, 128, 255, 1000, 16383] {
            let mut encoder = AperEncoder::new();
            encoder.encode_length_determinant(len).unwrap();

            let bytes = encoder.into_bytes();
            let mut decoder = AperDecoder::new(&bytes);
            let decoded = decoder.decode_length_determinant().unwrap();

            assert_eq!(len, decoded);
        }
    }

    #[test]
    fn test_length_over_limit_rejected() {
        let mut encoder = AperEncoder::new();
        assert!(matches!(
            encoder.encode_length_determinant(16384),
            Err(PerError::InvalidLength { length: 16384 })
        ));
    }

    #[test]
    fn test_encode_decode_octet_string() {
        let data = vec![0x01, 0x02, 0x03, 0x04];

        let mut encoder = AperEncoder::new();
        encoder.encode_octet_string(&data, None, None).unwrap();

        let bytes = encoder.into_bytes();
        let mut decoder = AperDecoder::new(&bytes);
        let decoded = decoder.decode_octet_string(None, None).unwrap();

        assert_eq!(data, decoded);
    }

    #[test]
    fn test_encode_decode_fixed_bit_string() {
        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        for i in 0..10 {
            bits.push(i % 3 == 0);
        }

        let mut encoder = AperEncoder::new();
        encoder
            .encode_bit_string(&bits, Some(10), Some(10))
            .unwrap();
        encoder.align();

        let bytes = encoder.into_bytes();
        let mut decoder = AperDecoder::new(&bytes);
        let decoded = decoder.decode_bit_string(Some(10), Some(10)).unwrap();
        assert_eq!(bits, decoded);
    }

    #[test]
    fn test_encode_decode_real() {
        for value in [0.0, 1.0, -1.0, 2.5, 512.4, 3.2, -0.2, 1e-9, 1.5e12] {
            let mut encoder = AperEncoder::new();
            encoder.encode_real(value).unwrap();

            let bytes = encoder.into_bytes();
            let mut decoder = AperDecoder::new(&bytes);
            let decoded = decoder.decode_real().unwrap();

            assert_eq!(value, decoded, "round trip of {value}");
        }
    }

    #[test]
    fn test_real_rejects_non_finite() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut encoder = AperEncoder::new();
            assert!(matches!(
                encoder.encode_real(value),
                Err(PerError::NonFiniteReal { .. })
            ));
        }
    }

    #[test]
    fn test_real_zero_is_empty_content() {
        let mut encoder = AperEncoder::new();
        encoder.encode_real(0.0).unwrap();
        // Just the zero length determinant
        assert_eq!(encoder.into_bytes().as_ref(), &[0x00]);
    }
}
