//! Property-Based Tests for the APER codec
//!
//! These tests verify that codec primitives and E2SM-KPM wire types
//! round-trip through encode/decode, producing equivalent values.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    mod per_props {
        use super::*;
        use crate::per::{AperDecoder, AperEncoder, Constraint};

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_unconstrained_whole_number_round_trip(value in any::<i64>()) {
                let mut encoder = AperEncoder::new();
                encoder.encode_unconstrained_whole_number(value).unwrap();
                encoder.align();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(decoder.decode_unconstrained_whole_number().unwrap(), value);
            }

            #[test]
            fn prop_constrained_u32_round_trip(value in 0u32..=u32::MAX) {
                let constraint = Constraint::new(0, 4_294_967_295);
                let mut encoder = AperEncoder::new();
                encoder
                    .encode_constrained_whole_number(value as i64, &constraint)
                    .unwrap();
                encoder.align();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(
                    decoder.decode_constrained_whole_number(&constraint).unwrap(),
                    value as i64
                );
            }

            #[test]
            fn prop_real_round_trip(value in -1e15f64..1e15) {
                let mut encoder = AperEncoder::new();
                encoder.encode_real(value).unwrap();
                encoder.align();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(decoder.decode_real().unwrap(), value);
            }

            #[test]
            fn prop_octet_string_round_trip(data in prop::collection::vec(any::<u8>(), 0..512)) {
                let mut encoder = AperEncoder::new();
                encoder.encode_octet_string(&data, None, None).unwrap();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(decoder.decode_octet_string(None, None).unwrap(), data);
            }
        }
    }

    mod e2sm_kpm_props {
        use super::*;
        use crate::e2sm_kpm::*;
        use crate::per::{AperDecode, AperDecoder, AperEncode, AperEncoder};

        fn arb_guami() -> impl Strategy<Value = Guami> {
            (
                prop::array::uniform3(0u8..10),
                prop::array::uniform3(0u8..10),
                2u8..4,
                any::<u8>(),
                0u16..1024,
                0u8..64,
            )
                .prop_map(|(mcc, mnc, mnc_len, region, set, ptr)| Guami {
                    plmn_identity: PlmnId::new(mcc, mnc, mnc_len),
                    amf_region_id: region,
                    amf_set_id: set,
                    amf_pointer: ptr,
                })
        }

        fn arb_record_item() -> impl Strategy<Value = MeasurementRecordItem> {
            prop_oneof![
                (0u64..=u32::MAX as u64).prop_map(MeasurementRecordItem::Integer),
                (-1e12f64..1e12).prop_map(MeasurementRecordItem::Real),
                Just(MeasurementRecordItem::NoValue),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_ue_id_round_trip(
                guami in arb_guami(),
                amf_ue_ngap_id in 0u64..(1u64 << 40),
                ran_ue_id in prop::option::of(prop::array::uniform8(any::<u8>())),
            ) {
                let ue_id = UeId::GnbUeId(UeIdGnb { amf_ue_ngap_id, guami, ran_ue_id });

                let mut encoder = AperEncoder::new();
                ue_id.encode_aper(&mut encoder).unwrap();
                encoder.align();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(UeId::decode_aper(&mut decoder).unwrap(), ue_id);
            }

            #[test]
            fn prop_measurement_record_round_trip(
                records in prop::collection::vec(arb_record_item(), 0..16),
            ) {
                let item = MeasurementDataItem { meas_record: records };

                let mut encoder = AperEncoder::new();
                item.encode_aper(&mut encoder).unwrap();
                encoder.align();

                let bytes = encoder.into_bytes();
                let mut decoder = AperDecoder::new(&bytes);
                prop_assert_eq!(MeasurementDataItem::decode_aper(&mut decoder).unwrap(), item);
            }
        }
    }
}
