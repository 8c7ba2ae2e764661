//! NextGRAN E2SM-KPM Indication Library
//!
//! This crate builds RIC Indication Headers and Messages for the O-RAN
//! E2 Service Model for Key Performance Measurement (E2SM-KPM), as
//! defined in O-RAN.WG3.E2SM-KPM.
//!
//! # Architecture
//!
//! The library is layered on top of `ngr-asn1c` which provides raw ASN.1
//! APER encoding/decoding of the KPM schema. This crate adds:
//!
//! - **Measurement collection** (`measurement`) for named cell-scoped and
//!   UE-scoped values in call order
//! - **Profile helpers** (`lte`, `mmwave`) mapping RAN performance
//!   counters to standard measurement names, with a reduced-size policy
//!   that omits secondary measurements
//! - **Indication builders** (`indication`) assembling Format1 headers
//!   and Format3 messages and serializing them to owned byte payloads
//!
//! # Example
//!
//! ```no_run
//! use ngr_e2sm_kpm::indication::{
//!     encode_indication_header, encode_indication_message,
//!     DefaultUeIdentity, KpmIndicationHeaderValues,
//! };
//! use ngr_e2sm_kpm::lte::LteIndicationMessageHelper;
//!
//! let mut helper = LteIndicationMessageHelper::new(false);
//! helper.add_cu_up_ue_pm_item("0001", 1000, 10, 512.4, 3.2);
//! helper.fill_cu_up_values(2048, 4096);
//!
//! let header = encode_indication_header(&KpmIndicationHeaderValues {
//!     collect_start_time_us: 1_700_000_000_000_000,
//! })?;
//! let message = encode_indication_message(&helper.into_values(), &DefaultUeIdentity)?;
//! # Ok::<(), ngr_e2sm_kpm::KpmError>(())
//! ```

pub mod error;
pub mod measurement;
pub mod indication;
pub mod lte;
pub mod mmwave;

// Re-export key types for convenience
pub use error::{KpmError, KpmResult};
pub use indication::{
    DefaultUeIdentity, EncodedPayload, KpmIndicationHeaderValues, KpmIndicationMessageValues,
    UeIdentitySource,
};
pub use measurement::{MeasValue, MeasurementCollector, MeasurementItem, SubjectMeasurements};


#[cfg(test)]
mod tests {
    use super::*;
    use indication::{encode_indication_header, encode_indication_message};
    use lte::LteIndicationMessageHelper;
    use mmwave::{DuCellPmCounters, MmWaveIndicationMessageHelper};
    use ngr_asn1c::e2sm_kpm::{
        E2smKpmIndicationHeader, E2smKpmIndicationMessage, IndicationMessageFormat3,
        MeasurementRecordItem, MeasurementType,
    };
    use ngr_asn1c::{AperDecode, AperDecoder};

    fn decode_message(payload: &EncodedPayload) -> IndicationMessageFormat3 {
        let mut decoder = AperDecoder::new(payload.bytes());
        match E2smKpmIndicationMessage::decode_aper(&mut decoder).unwrap() {
            E2smKpmIndicationMessage::Format3(f3) => f3,
            other => panic!("expected Format3, got {other:?}"),
        }
    }

    fn report_entries(f3: &IndicationMessageFormat3, report: usize) -> Vec<(String, MeasurementRecordItem)> {
        let mr = &f3.ue_meas_report_list[report].meas_report;
        let info = mr.meas_info_list.as_ref().unwrap();
        assert_eq!(mr.meas_data.len(), info.len());
        mr.meas_data
            .iter()
            .zip(info)
            .map(|(data, info)| {
                assert_eq!(data.meas_record.len(), 1);
                let name = match &info.meas_type {
                    MeasurementType::MeasName(n) => n.clone(),
                    other => panic!("expected a measurement name, got {other:?}"),
                };
                (name, data.meas_record[0].clone())
            })
            .collect()
    }

    #[test]
    fn test_header_roundtrip_preserves_timestamp() {
        let values = KpmIndicationHeaderValues {
            collect_start_time_us: 1_693_000_123_456_789,
        };
        let payload = encode_indication_header(&values).unwrap();
        assert!(!payload.is_empty());

        let mut decoder = AperDecoder::new(payload.bytes());
        let E2smKpmIndicationHeader::Format1(f1) =
            E2smKpmIndicationHeader::decode_aper(&mut decoder).unwrap();
        assert_eq!(
            u64::from_be_bytes(f1.collet_start_time),
            values.collect_start_time_us
        );
    }

    #[test]
    fn test_lte_full_message_roundtrip() {
        let mut helper = LteIndicationMessageHelper::new(false);
        helper.add_cu_up_ue_pm_item("0001", 1000, 10, 512.4, 3.2);
        helper.add_cu_cp_ue_pm_item("0002", 2, 1);

        let payload =
            encode_indication_message(&helper.into_values(), &DefaultUeIdentity).unwrap();
        let f3 = decode_message(&payload);
        assert_eq!(f3.ue_meas_report_list.len(), 2);

        assert_eq!(
            report_entries(&f3, 0),
            [
                (
                    "DRB.PdcpSduVolumeDl_Filter.UEID".to_owned(),
                    MeasurementRecordItem::Integer(1000)
                ),
                (
                    "Tot.PdcpSduNbrDl.UEID".to_owned(),
                    MeasurementRecordItem::Integer(10)
                ),
                (
                    "DRB.PdcpSduBitRateDl.UEID".to_owned(),
                    MeasurementRecordItem::Integer(513)
                ),
                (
                    "DRB.PdcpSduDelayDl.UEID".to_owned(),
                    MeasurementRecordItem::Integer(4)
                ),
            ]
        );
        assert_eq!(
            report_entries(&f3, 1),
            [
                (
                    "DRB.EstabSucc.5QI.UEID".to_owned(),
                    MeasurementRecordItem::Integer(2)
                ),
                (
                    "DRB.RelActNbr.5QI.UEID".to_owned(),
                    MeasurementRecordItem::Integer(1)
                ),
            ]
        );
    }

    #[test]
    fn test_placeholder_message_when_only_cell_data() {
        let mut helper = MmWaveIndicationMessageHelper::new(false);
        helper.add_du_cell_pm_item(&DuCellPmCounters::default());

        let values = helper.into_values();
        assert!(values.cell_measurements.is_some());

        let payload = encode_indication_message(&values, &DefaultUeIdentity).unwrap();
        let f3 = decode_message(&payload);
        assert_eq!(f3.ue_meas_report_list.len(), 1);
        assert_eq!(
            report_entries(&f3, 0),
            [(
                indication::PLACEHOLDER_MEAS_NAME.to_owned(),
                MeasurementRecordItem::Real(0.0)
            )]
        );
    }

    #[test]
    fn test_mixed_value_kinds_roundtrip() {
        let mut collector = MeasurementCollector::new();
        collector.add_ue_item("0001", "A", MeasValue::Integer(1));
        collector.add_ue_item("0001", "B", MeasValue::Real(2.5));
        let (_, ues) = collector.into_parts();
        let values = KpmIndicationMessageValues {
            cell_measurements: None,
            ue_measurements: ues,
        };

        let payload = encode_indication_message(&values, &DefaultUeIdentity).unwrap();
        let f3 = decode_message(&payload);
        assert_eq!(
            report_entries(&f3, 0),
            [
                ("A".to_owned(), MeasurementRecordItem::Integer(1)),
                ("B".to_owned(), MeasurementRecordItem::Real(2.5)),
            ]
        );
    }
}
