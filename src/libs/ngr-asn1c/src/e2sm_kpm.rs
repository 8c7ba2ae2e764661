//! E2SM-KPM Schema Types
//!
//! Tagged-union wire types for the E2SM-KPM RIC Indication Header and
//! Indication Message (O-RAN E2SM-KPM), with APER encode/decode impls.
//!
//! The RAN-side producer only emits the Format1 header and the Format3
//! message (per-UE measurement reports, each carrying a Format1 report).
//! Format2 keeps its slot in the top-level CHOICE index space but has no
//! in-memory representation; decoding it is rejected.

use bitvec::prelude::*;

use crate::per::{AperDecode, AperDecoder, AperEncode, AperEncoder, Constraint, PerError, PerResult};

/// maxnoofMeasurementRecord / maxnoofMeasurementInfo / maxnoofUEMeasReport
///
/// The schema bounds these lists at 65535; the lower bound is relaxed to
/// zero so that a permissive builder can emit an empty report.
const LIST_SIZE: (usize, usize) = (0, 65535);

fn encode_list<T: AperEncode>(encoder: &mut AperEncoder, items: &[T]) -> PerResult<()> {
    encoder.encode_constrained_length(items.len(), LIST_SIZE.0, LIST_SIZE.1)?;
    for item in items {
        item.encode_aper(encoder)?;
    }
    Ok(())
}

fn decode_list<T: AperDecode>(decoder: &mut AperDecoder) -> PerResult<Vec<T>> {
    let len = decoder.decode_constrained_length(LIST_SIZE.0, LIST_SIZE.1)?;
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(T::decode_aper(decoder)?);
    }
    Ok(items)
}

fn encode_printable_string(encoder: &mut AperEncoder, value: &str) -> PerResult<()> {
    encoder.encode_octet_string(value.as_bytes(), None, None)
}

fn decode_printable_string(decoder: &mut AperDecoder) -> PerResult<String> {
    let bytes = decoder.decode_octet_string(None, None)?;
    String::from_utf8(bytes).map_err(|e| PerError::DecodeError(format!("invalid string: {e}")))
}

// ============================================================================
// Identifiers
// ============================================================================

/// PLMN Identity - 3-octet BCD encoding of MCC + MNC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlmnId {
    /// Mobile Country Code (3 digits)
    pub mcc: [u8; 3],
    /// Mobile Network Code (2 or 3 digits)
    pub mnc: [u8; 3],
    /// MNC length (2 or 3)
    pub mnc_len: u8,
}

impl PlmnId {
    /// A 2-digit MNC has no third digit; it is zeroed here so that two
    /// `PlmnId`s with the same wire form always compare equal.
    pub fn new(mcc: [u8; 3], mnc: [u8; 3], mnc_len: u8) -> Self {
        let mnc = if mnc_len == 2 { [mnc[0], mnc[1], 0] } else { mnc };
        Self { mcc, mnc, mnc_len }
    }

    /// Encode to the 3-octet wire form
    pub fn to_octets(&self) -> [u8; 3] {
        // Byte 0: MCC digit 2 | MCC digit 1
        // Byte 1: MNC digit 3 | MCC digit 3 (MNC digit 3 = 0xF if 2-digit MNC)
        // Byte 2: MNC digit 2 | MNC digit 1
        let mnc3 = if self.mnc_len == 2 { 0x0F } else { self.mnc[2] };
        [
            (self.mcc[1] << 4) | self.mcc[0],
            (mnc3 << 4) | self.mcc[2],
            (self.mnc[1] << 4) | self.mnc[0],
        ]
    }

    pub fn from_octets(octets: [u8; 3]) -> Self {
        let mcc = [octets[0] & 0x0F, octets[0] >> 4, octets[1] & 0x0F];
        let mnc3 = octets[1] >> 4;
        let (mnc, mnc_len) = if mnc3 == 0x0F {
            ([octets[2] & 0x0F, octets[2] >> 4, 0], 2)
        } else {
            ([octets[2] & 0x0F, octets[2] >> 4, mnc3], 3)
        };
        Self { mcc, mnc, mnc_len }
    }
}

/// GUAMI - Globally Unique AMF Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guami {
    pub plmn_identity: PlmnId,
    /// AMF Region ID - BIT STRING (SIZE(8))
    pub amf_region_id: u8,
    /// AMF Set ID - BIT STRING (SIZE(10))
    pub amf_set_id: u16,
    /// AMF Pointer - BIT STRING (SIZE(6))
    pub amf_pointer: u8,
}

fn bits_of(value: u64, width: usize) -> PerResult<BitVec<u8, Msb0>> {
    if width < 64 && value >> width != 0 {
        return Err(PerError::ConstraintViolation {
            value: value as i64,
            min: 0,
            max: (1 << width) - 1,
        });
    }
    let mut bits = BitVec::with_capacity(width);
    for i in (0..width).rev() {
        bits.push((value >> i) & 1 == 1);
    }
    Ok(bits)
}

fn bits_to_u64(bits: &BitSlice<u8, Msb0>) -> u64 {
    bits.iter().fold(0u64, |acc, bit| (acc << 1) | (*bit as u64))
}

impl AperEncode for Guami {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.encode_octet_string(&self.plmn_identity.to_octets(), Some(3), Some(3))?;
        encoder.encode_bit_string(&bits_of(self.amf_region_id as u64, 8)?, Some(8), Some(8))?;
        encoder.encode_bit_string(&bits_of(self.amf_set_id as u64, 10)?, Some(10), Some(10))?;
        encoder.encode_bit_string(&bits_of(self.amf_pointer as u64, 6)?, Some(6), Some(6))
    }
}

impl AperDecode for Guami {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let plmn = decoder.decode_octet_string(Some(3), Some(3))?;
        let plmn_identity = PlmnId::from_octets([plmn[0], plmn[1], plmn[2]]);
        let amf_region_id = bits_to_u64(&decoder.decode_bit_string(Some(8), Some(8))?) as u8;
        let amf_set_id = bits_to_u64(&decoder.decode_bit_string(Some(10), Some(10))?) as u16;
        let amf_pointer = bits_to_u64(&decoder.decode_bit_string(Some(6), Some(6))?) as u8;
        Ok(Self {
            plmn_identity,
            amf_region_id,
            amf_set_id,
            amf_pointer,
        })
    }
}

/// UEID-GNB - gNB-scoped UE identity
///
/// Of the schema's optional fields only ran-UEID is modelled; the F1AP/
/// E1AP ID lists are never produced by this RAN element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UeIdGnb {
    /// AMF UE NGAP ID - INTEGER (0..2^40-1)
    pub amf_ue_ngap_id: u64,
    pub guami: Guami,
    /// RAN UE ID - OCTET STRING (SIZE(8))
    pub ran_ue_id: Option<[u8; 8]>,
}

impl UeIdGnb {
    const AMF_UE_NGAP_ID_CONSTRAINT: Constraint = Constraint::new(0, 1_099_511_627_775);
}

impl AperEncode for UeIdGnb {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.write_bit(self.ran_ue_id.is_some());
        encoder.encode_constrained_whole_number(
            self.amf_ue_ngap_id as i64,
            &Self::AMF_UE_NGAP_ID_CONSTRAINT,
        )?;
        self.guami.encode_aper(encoder)?;
        if let Some(ran_ue_id) = &self.ran_ue_id {
            encoder.encode_octet_string(ran_ue_id, Some(8), Some(8))?;
        }
        Ok(())
    }
}

impl AperDecode for UeIdGnb {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let has_ran_ue_id = decoder.read_bit()?;
        let amf_ue_ngap_id =
            decoder.decode_constrained_whole_number(&Self::AMF_UE_NGAP_ID_CONSTRAINT)? as u64;
        let guami = Guami::decode_aper(decoder)?;
        let ran_ue_id = if has_ran_ue_id {
            let bytes = decoder.decode_octet_string(Some(8), Some(8))?;
            let mut id = [0u8; 8];
            id.copy_from_slice(&bytes);
            Some(id)
        } else {
            None
        };
        Ok(Self {
            amf_ue_ngap_id,
            guami,
            ran_ue_id,
        })
    }
}

/// UEID - CHOICE over the node-scoped UE identity forms
///
/// Only the gNB alternative is produced; the other six root alternatives
/// (gNB-DU, gNB-CU-UP, ng-eNB, ng-eNB-DU, en-gNB, eNB) keep their index
/// slots but are rejected on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UeId {
    GnbUeId(UeIdGnb),
}

impl UeId {
    pub const NUM_ALTERNATIVES: usize = 7;
    pub const EXTENSIBLE: bool = true;
}

impl AperEncode for UeId {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        match self {
            UeId::GnbUeId(id) => {
                encoder.encode_choice_index(0, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                id.encode_aper(encoder)
            }
        }
    }
}

impl AperDecode for UeId {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        let index = decoder.decode_choice_index(Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
        match index {
            0 => Ok(UeId::GnbUeId(UeIdGnb::decode_aper(decoder)?)),
            _ => Err(PerError::InvalidChoiceIndex {
                index,
                max: Self::NUM_ALTERNATIVES - 1,
            }),
        }
    }
}

// ============================================================================
// Measurement records
// ============================================================================

/// MeasurementRecordItem - CHOICE { integer, real, noValue }
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementRecordItem {
    /// INTEGER (0..4294967295)
    Integer(u64),
    Real(f64),
    NoValue,
}

impl MeasurementRecordItem {
    pub const NUM_ALTERNATIVES: usize = 3;
    pub const EXTENSIBLE: bool = true;
    const INTEGER_CONSTRAINT: Constraint = Constraint::new(0, 4_294_967_295);
}

impl AperEncode for MeasurementRecordItem {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        match self {
            MeasurementRecordItem::Integer(value) => {
                encoder.encode_choice_index(0, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                encoder.encode_constrained_whole_number(*value as i64, &Self::INTEGER_CONSTRAINT)
            }
            MeasurementRecordItem::Real(value) => {
                encoder.encode_choice_index(1, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                encoder.encode_real(*value)
            }
            MeasurementRecordItem::NoValue => {
                encoder.encode_choice_index(2, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)
            }
        }
    }
}

impl AperDecode for MeasurementRecordItem {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        let index = decoder.decode_choice_index(Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
        match index {
            0 => {
                let value =
                    decoder.decode_constrained_whole_number(&Self::INTEGER_CONSTRAINT)? as u64;
                Ok(MeasurementRecordItem::Integer(value))
            }
            1 => Ok(MeasurementRecordItem::Real(decoder.decode_real()?)),
            2 => Ok(MeasurementRecordItem::NoValue),
            _ => Err(PerError::InvalidChoiceIndex {
                index,
                max: Self::NUM_ALTERNATIVES - 1,
            }),
        }
    }
}

/// MeasurementDataItem - one measurement record
///
/// The optional incompleteFlag is never produced; its presence bit is
/// still written so the preamble matches the modelled schema.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementDataItem {
    pub meas_record: Vec<MeasurementRecordItem>,
}

impl AperEncode for MeasurementDataItem {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.write_bit(false); // incompleteFlag absent
        encode_list(encoder, &self.meas_record)
    }
}

impl AperDecode for MeasurementDataItem {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        if decoder.read_bit()? {
            return Err(PerError::DecodeError("incompleteFlag not supported".into()));
        }
        Ok(Self {
            meas_record: decode_list(decoder)?,
        })
    }
}

/// MeasurementType - CHOICE { measName, measID }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasurementType {
    /// PrintableString (SIZE(1..150))
    MeasName(String),
    /// INTEGER (1..65536)
    MeasId(u32),
}

impl MeasurementType {
    pub const NUM_ALTERNATIVES: usize = 2;
    pub const EXTENSIBLE: bool = true;
    const MEAS_ID_CONSTRAINT: Constraint = Constraint::new(1, 65536);
}

impl AperEncode for MeasurementType {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        match self {
            MeasurementType::MeasName(name) => {
                encoder.encode_choice_index(0, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                encode_printable_string(encoder, name)
            }
            MeasurementType::MeasId(id) => {
                encoder.encode_choice_index(1, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                encoder.encode_constrained_whole_number(*id as i64, &Self::MEAS_ID_CONSTRAINT)
            }
        }
    }
}

impl AperDecode for MeasurementType {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        let index = decoder.decode_choice_index(Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
        match index {
            0 => Ok(MeasurementType::MeasName(decode_printable_string(decoder)?)),
            1 => {
                let id = decoder.decode_constrained_whole_number(&Self::MEAS_ID_CONSTRAINT)?;
                Ok(MeasurementType::MeasId(id as u32))
            }
            _ => Err(PerError::InvalidChoiceIndex {
                index,
                max: Self::NUM_ALTERNATIVES - 1,
            }),
        }
    }
}

/// MeasurementLabel - only the noLabel marker is modelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementLabel {
    pub no_label: bool,
}

impl MeasurementLabel {
    // ENUMERATED { true, ... }
    const NO_LABEL_CONSTRAINT: Constraint = Constraint::extensible(0, 0);
}

impl AperEncode for MeasurementLabel {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.write_bit(self.no_label);
        if self.no_label {
            encoder.encode_enumerated(0, &Self::NO_LABEL_CONSTRAINT)?;
        }
        Ok(())
    }
}

impl AperDecode for MeasurementLabel {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let no_label = decoder.read_bit()?;
        if no_label {
            decoder.decode_enumerated(&Self::NO_LABEL_CONSTRAINT)?;
        }
        Ok(Self { no_label })
    }
}

/// LabelInfoItem - SEQUENCE { measLabel }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInfoItem {
    pub meas_label: MeasurementLabel,
}

impl AperEncode for LabelInfoItem {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        self.meas_label.encode_aper(encoder)
    }
}

impl AperDecode for LabelInfoItem {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        Ok(Self {
            meas_label: MeasurementLabel::decode_aper(decoder)?,
        })
    }
}

/// MeasurementInfoItem - SEQUENCE { measType, labelInfoList }
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementInfoItem {
    pub meas_type: MeasurementType,
    pub label_info_list: Vec<LabelInfoItem>,
}

impl AperEncode for MeasurementInfoItem {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        self.meas_type.encode_aper(encoder)?;
        encode_list(encoder, &self.label_info_list)
    }
}

impl AperDecode for MeasurementInfoItem {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        Ok(Self {
            meas_type: MeasurementType::decode_aper(decoder)?,
            label_info_list: decode_list(decoder)?,
        })
    }
}

// ============================================================================
// Indication Message formats
// ============================================================================

/// E2SM-KPM-IndicationMessage-Format1 - measData + optional measInfoList
///
/// Index i of measData corresponds to index i of measInfoList; the
/// builders construct both lists from one pass over the source items.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicationMessageFormat1 {
    pub meas_data: Vec<MeasurementDataItem>,
    pub meas_info_list: Option<Vec<MeasurementInfoItem>>,
}

impl AperEncode for IndicationMessageFormat1 {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.write_bit(self.meas_info_list.is_some());
        encoder.write_bit(false); // granulPeriod absent
        encode_list(encoder, &self.meas_data)?;
        if let Some(info_list) = &self.meas_info_list {
            encode_list(encoder, info_list)?;
        }
        Ok(())
    }
}

impl AperDecode for IndicationMessageFormat1 {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let has_info_list = decoder.read_bit()?;
        if decoder.read_bit()? {
            return Err(PerError::DecodeError("granulPeriod not supported".into()));
        }
        let meas_data = decode_list(decoder)?;
        let meas_info_list = if has_info_list {
            Some(decode_list(decoder)?)
        } else {
            None
        };
        Ok(Self {
            meas_data,
            meas_info_list,
        })
    }
}

/// UEMeasurementReportItem - SEQUENCE { ueID, measReport }
#[derive(Debug, Clone, PartialEq)]
pub struct UeMeasurementReportItem {
    pub ue_id: UeId,
    pub meas_report: IndicationMessageFormat1,
}

impl AperEncode for UeMeasurementReportItem {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        self.ue_id.encode_aper(encoder)?;
        self.meas_report.encode_aper(encoder)
    }
}

impl AperDecode for UeMeasurementReportItem {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        Ok(Self {
            ue_id: UeId::decode_aper(decoder)?,
            meas_report: IndicationMessageFormat1::decode_aper(decoder)?,
        })
    }
}

/// E2SM-KPM-IndicationMessage-Format3 - per-UE measurement reports
#[derive(Debug, Clone, PartialEq)]
pub struct IndicationMessageFormat3 {
    pub ue_meas_report_list: Vec<UeMeasurementReportItem>,
}

impl AperEncode for IndicationMessageFormat3 {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encode_list(encoder, &self.ue_meas_report_list)
    }
}

impl AperDecode for IndicationMessageFormat3 {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        Ok(Self {
            ue_meas_report_list: decode_list(decoder)?,
        })
    }
}

/// E2SM-KPM-IndicationMessage - CHOICE over the message formats
#[derive(Debug, Clone, PartialEq)]
pub enum E2smKpmIndicationMessage {
    Format1(IndicationMessageFormat1),
    Format3(IndicationMessageFormat3),
}

impl E2smKpmIndicationMessage {
    pub const NUM_ALTERNATIVES: usize = 3;
    pub const EXTENSIBLE: bool = true;
}

impl AperEncode for E2smKpmIndicationMessage {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension of the outer SEQUENCE
        match self {
            E2smKpmIndicationMessage::Format1(msg) => {
                encoder.encode_choice_index(0, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                msg.encode_aper(encoder)
            }
            E2smKpmIndicationMessage::Format3(msg) => {
                encoder.encode_choice_index(2, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                msg.encode_aper(encoder)
            }
        }
    }
}

impl AperDecode for E2smKpmIndicationMessage {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let index = decoder.decode_choice_index(Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
        match index {
            0 => Ok(E2smKpmIndicationMessage::Format1(
                IndicationMessageFormat1::decode_aper(decoder)?,
            )),
            2 => Ok(E2smKpmIndicationMessage::Format3(
                IndicationMessageFormat3::decode_aper(decoder)?,
            )),
            _ => Err(PerError::InvalidChoiceIndex {
                index,
                max: Self::NUM_ALTERNATIVES - 1,
            }),
        }
    }
}

// ============================================================================
// Indication Header
// ============================================================================

/// E2SM-KPM-IndicationHeader-Format1
///
/// colletStartTime carries the collection timestamp as an 8-octet
/// big-endian microsecond count (TimeStamp ::= OCTET STRING (SIZE(8))).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicationHeaderFormat1 {
    pub collet_start_time: [u8; 8],
    pub file_format_version: Option<String>,
    pub sender_name: Option<String>,
    pub sender_type: Option<String>,
    pub vendor_name: Option<String>,
}

impl AperEncode for IndicationHeaderFormat1 {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension
        encoder.write_bit(self.file_format_version.is_some());
        encoder.write_bit(self.sender_name.is_some());
        encoder.write_bit(self.sender_type.is_some());
        encoder.write_bit(self.vendor_name.is_some());
        encoder.encode_octet_string(&self.collet_start_time, Some(8), Some(8))?;
        for field in [
            &self.file_format_version,
            &self.sender_name,
            &self.sender_type,
            &self.vendor_name,
        ]
        .into_iter()
        .flatten()
        {
            encode_printable_string(encoder, field)?;
        }
        Ok(())
    }
}

impl AperDecode for IndicationHeaderFormat1 {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let has_version = decoder.read_bit()?;
        let has_sender_name = decoder.read_bit()?;
        let has_sender_type = decoder.read_bit()?;
        let has_vendor_name = decoder.read_bit()?;

        let ts = decoder.decode_octet_string(Some(8), Some(8))?;
        let mut collet_start_time = [0u8; 8];
        collet_start_time.copy_from_slice(&ts);

        let mut opt_string = |present: bool| -> PerResult<Option<String>> {
            if present {
                Ok(Some(decode_printable_string(decoder)?))
            } else {
                Ok(None)
            }
        };
        let file_format_version = opt_string(has_version)?;
        let sender_name = opt_string(has_sender_name)?;
        let sender_type = opt_string(has_sender_type)?;
        let vendor_name = opt_string(has_vendor_name)?;

        Ok(Self {
            collet_start_time,
            file_format_version,
            sender_name,
            sender_type,
            vendor_name,
        })
    }
}

/// E2SM-KPM-IndicationHeader - CHOICE over the header formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum E2smKpmIndicationHeader {
    Format1(IndicationHeaderFormat1),
}

impl E2smKpmIndicationHeader {
    pub const NUM_ALTERNATIVES: usize = 1;
    pub const EXTENSIBLE: bool = true;
}

impl AperEncode for E2smKpmIndicationHeader {
    fn encode_aper(&self, encoder: &mut AperEncoder) -> PerResult<()> {
        encoder.write_bit(false); // extension of the outer SEQUENCE
        match self {
            E2smKpmIndicationHeader::Format1(hdr) => {
                encoder.encode_choice_index(0, Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
                hdr.encode_aper(encoder)
            }
        }
    }
}

impl AperDecode for E2smKpmIndicationHeader {
    fn decode_aper(decoder: &mut AperDecoder) -> PerResult<Self> {
        if decoder.read_bit()? {
            return Err(PerError::UnsupportedExtension);
        }
        let index = decoder.decode_choice_index(Self::NUM_ALTERNATIVES, Self::EXTENSIBLE)?;
        match index {
            0 => Ok(E2smKpmIndicationHeader::Format1(
                IndicationHeaderFormat1::decode_aper(decoder)?,
            )),
            _ => Err(PerError::InvalidChoiceIndex {
                index,
                max: Self::NUM_ALTERNATIVES - 1,
            }),
        }
    }
}
