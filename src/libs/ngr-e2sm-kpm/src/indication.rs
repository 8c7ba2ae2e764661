//! KPM Indication Builders
//!
//! Functions for assembling E2SM-KPM RIC Indication trees from collected
//! measurements and APER-encoding them to bytes. The flow is one-way:
//! profile helpers fill a [`MeasurementCollector`], its values are turned
//! into a format-tagged message tree, and the tree is serialized through
//! `ngr-asn1c`. A codec failure is fatal for the build; there is no
//! fallback encoding and no retry.

use bytes::Bytes;

use ngr_asn1c::e2sm_kpm::*;
use ngr_asn1c::{AperEncode, AperEncoder};

use crate::error::{KpmError, KpmResult};
use crate::measurement::{MeasValue, SubjectMeasurements};

/// Measurement name used for the placeholder report when no UE-scoped
/// measurements exist for the reporting period.
pub const PLACEHOLDER_MEAS_NAME: &str = "DRB.RlcSduDelayDl";

/// Longest measurement name the schema accepts (PrintableString SIZE 1..150)
const MAX_MEAS_NAME_LEN: usize = 150;

/// Values for one RIC Indication Header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpmIndicationHeaderValues {
    /// Collection start time, microseconds since the Unix epoch.
    /// Any 64-bit value is accepted; no range validation is performed.
    pub collect_start_time_us: u64,
}

/// Values for one RIC Indication Message; consumed exactly once
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpmIndicationMessageValues {
    /// Cell-scoped measurements. Tracked for message formats that carry a
    /// cell container; the Format3 message produced here does not emit
    /// them.
    pub cell_measurements: Option<SubjectMeasurements>,
    /// One entry per UE, in reporting order
    pub ue_measurements: Vec<SubjectMeasurements>,
}

/// An APER-encoded header or message, ready for the E2 transport.
///
/// Ownership transfers to the caller; the builder keeps nothing of the
/// encoded bytes. The length always equals the byte count produced by
/// the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    bytes: Bytes,
}

impl EncodedPayload {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Source of the UE identity embedded in each UE measurement report.
///
/// Injected so that tests and deployments control identity generation
/// deterministically; `subject_id` carries the collector's UE identifier
/// when the report stems from a real UE, and `None` for the placeholder.
pub trait UeIdentitySource {
    fn ue_identity(&self, subject_id: Option<&str>) -> UeIdGnb;
}

/// Fixed UE identity used when the caller has no better source:
/// AMF UE NGAP ID 1, GUAMI of PLMN 001/01 with region 2 / set 1 /
/// pointer 0, and RAN UE ID `01 00 00 00 00 00 00 00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUeIdentity;

impl UeIdentitySource for DefaultUeIdentity {
    fn ue_identity(&self, _subject_id: Option<&str>) -> UeIdGnb {
        UeIdGnb {
            amf_ue_ngap_id: 1,
            guami: Guami {
                plmn_identity: PlmnId::new([0, 0, 1], [0, 1, 0], 2),
                amf_region_id: 2,
                amf_set_id: 1,
                amf_pointer: 0,
            },
            ran_ue_id: Some([0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        }
    }
}

/// Build the indication header tree.
///
/// The timestamp is embedded as its 8 big-endian octets in
/// colletStartTime.
pub fn build_indication_header(values: &KpmIndicationHeaderValues) -> E2smKpmIndicationHeader {
    E2smKpmIndicationHeader::Format1(IndicationHeaderFormat1 {
        collet_start_time: values.collect_start_time_us.to_be_bytes(),
        file_format_version: None,
        sender_name: None,
        sender_type: None,
        vendor_name: None,
    })
}

fn info_item(name: &str) -> MeasurementInfoItem {
    MeasurementInfoItem {
        meas_type: MeasurementType::MeasName(name.to_owned()),
        label_info_list: vec![LabelInfoItem {
            meas_label: MeasurementLabel { no_label: true },
        }],
    }
}

/// Map one subject's items into a Format1 measurement report.
///
/// The data list and the info list are built from the same pass over the
/// items, so index i of one always describes index i of the other. A
/// subject with no items yields an empty report, which is still
/// encodable (permissive policy).
fn build_meas_report(subject: &SubjectMeasurements) -> KpmResult<IndicationMessageFormat1> {
    let mut meas_data = Vec::with_capacity(subject.items.len());
    let mut meas_info = Vec::with_capacity(subject.items.len());

    for item in &subject.items {
        if item.name.is_empty() || item.name.len() > MAX_MEAS_NAME_LEN {
            return Err(KpmError::InvalidMeasurement {
                name: item.name.clone(),
                reason: format!("name length {} outside 1..=150", item.name.len()),
            });
        }
        let record = match item.value {
            MeasValue::Integer(v) => {
                let v = u64::try_from(v).map_err(|_| KpmError::InvalidMeasurement {
                    name: item.name.clone(),
                    reason: format!("negative value {v} for integer record"),
                })?;
                MeasurementRecordItem::Integer(v)
            }
            MeasValue::Real(v) => MeasurementRecordItem::Real(v),
        };
        meas_data.push(MeasurementDataItem {
            meas_record: vec![record],
        });
        meas_info.push(info_item(&item.name));
    }

    Ok(IndicationMessageFormat1 {
        meas_data,
        meas_info_list: Some(meas_info),
    })
}

/// Build the indication message tree.
///
/// With at least one UE entry, one UE measurement report item is emitted
/// per entry, in order. With no UE entries, a single placeholder report
/// is synthesized: one real-valued `0.0` measurement named
/// [`PLACEHOLDER_MEAS_NAME`], identity taken from `identities`.
pub fn build_indication_message(
    values: &KpmIndicationMessageValues,
    identities: &dyn UeIdentitySource,
) -> KpmResult<E2smKpmIndicationMessage> {
    let mut reports = Vec::with_capacity(values.ue_measurements.len().max(1));

    if values.ue_measurements.is_empty() {
        log::debug!("no UE measurements collected, synthesizing placeholder report");
        reports.push(UeMeasurementReportItem {
            ue_id: UeId::GnbUeId(identities.ue_identity(None)),
            meas_report: IndicationMessageFormat1 {
                meas_data: vec![MeasurementDataItem {
                    meas_record: vec![MeasurementRecordItem::Real(0.0)],
                }],
                meas_info_list: Some(vec![info_item(PLACEHOLDER_MEAS_NAME)]),
            },
        });
    } else {
        for subject in &values.ue_measurements {
            reports.push(UeMeasurementReportItem {
                ue_id: UeId::GnbUeId(identities.ue_identity(subject.subject_id.as_deref())),
                meas_report: build_meas_report(subject)?,
            });
        }
    }

    Ok(E2smKpmIndicationMessage::Format3(IndicationMessageFormat3 {
        ue_meas_report_list: reports,
    }))
}

fn encode_tree<T: AperEncode>(tree: &T) -> KpmResult<EncodedPayload> {
    let mut encoder = AperEncoder::new();
    tree.encode_aper(&mut encoder)?;
    encoder.align();
    Ok(EncodedPayload {
        bytes: encoder.into_bytes(),
    })
}

/// Build and APER-encode an indication header
pub fn encode_indication_header(values: &KpmIndicationHeaderValues) -> KpmResult<EncodedPayload> {
    let payload = encode_tree(&build_indication_header(values))?;
    log::debug!(
        "encoded KPM indication header: {} bytes, t={}us",
        payload.len(),
        values.collect_start_time_us
    );
    Ok(payload)
}

/// Build and APER-encode an indication message
pub fn encode_indication_message(
    values: &KpmIndicationMessageValues,
    identities: &dyn UeIdentitySource,
) -> KpmResult<EncodedPayload> {
    let tree = build_indication_message(values, identities)?;
    let payload = encode_tree(&tree)?;
    log::debug!(
        "encoded KPM indication message: {} bytes, {} UE reports",
        payload.len(),
        values.ue_measurements.len().max(1)
    );
    Ok(payload)
}
