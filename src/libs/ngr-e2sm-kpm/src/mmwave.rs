//! mmWave Indication Message Helper
//!
//! Translates NR gNB performance counters (CU-UP PDCP split-bearer
//! volumes, DU MAC/PRB/MCS/SINR statistics, CU-CP bearer counters and
//! handover-quality SINR reports) into collector entries.
//!
//! Inclusion policy per measurement (`reduced` omits, never zeroes):
//!
//! | measurement                                   | included when reduced |
//! |-----------------------------------------------|-----------------------|
//! | QosFlow.PdcpPduVolumeDL_Filter.UEID           | no                    |
//! | DRB.PdcpPduNbrDl.Qos.UEID                     | no                    |
//! | DRB.UEThpDl.UEID                              | yes                   |
//! | TB.TotNbrDl.1.UEID .. DRB.BufferSize.Qos.UEID | no                    |
//! | TB.TotNbrDlInitial.{Qpsk,16Qam,64Qam}         | yes                   |
//! | RRU.PrbUsedDl                                 | yes                   |
//! | DRB.MeanActiveUeDl                            | yes                   |
//! | TB.TotNbrDl.1, TB.TotNbrDlInitial             | no                    |
//! | TB.ErrTotalNbrDl.1, QosFlow.PdcpPduVolumeDL_Filter | no               |
//! | CARR.PDSCHMCSDist.Bin1..6                     | no                    |
//! | L1M.RS-SINR.Bin34..Bin127                     | no                    |
//! | DRB.BufferSize.Qos                            | no                    |
//! | DRB.EstabSucc.5QI.UEID, DRB.RelActNbr.5QI.UEID | no                   |
//! | serving/neighbour SINR reports                | yes                   |

use crate::indication::KpmIndicationMessageValues;
use crate::measurement::{MeasValue, MeasurementCollector};

const MCS_BIN_NAMES: [&str; 6] = [
    "CARR.PDSCHMCSDist.Bin1",
    "CARR.PDSCHMCSDist.Bin2",
    "CARR.PDSCHMCSDist.Bin3",
    "CARR.PDSCHMCSDist.Bin4",
    "CARR.PDSCHMCSDist.Bin5",
    "CARR.PDSCHMCSDist.Bin6",
];

const SINR_BIN_NAMES: [&str; 7] = [
    "L1M.RS-SINR.Bin34",
    "L1M.RS-SINR.Bin46",
    "L1M.RS-SINR.Bin58",
    "L1M.RS-SINR.Bin70",
    "L1M.RS-SINR.Bin82",
    "L1M.RS-SINR.Bin94",
    "L1M.RS-SINR.Bin127",
];

/// Per-UE DU MAC-layer counters for one reporting period
#[derive(Debug, Clone, Copy, Default)]
pub struct DuUePmCounters {
    pub mac_pdu: i64,
    pub mac_pdu_initial: i64,
    pub mac_qpsk: i64,
    pub mac_16qam: i64,
    pub mac_64qam: i64,
    pub mac_retx: i64,
    pub mac_volume: i64,
    /// PRBs used downlink; fractional, ceiled on the wire
    pub mac_prb: f64,
    /// CARR.PDSCHMCSDist.Bin1..6
    pub mcs_bins: [i64; 6],
    /// L1M.RS-SINR.Bin34..Bin127
    pub sinr_bins: [i64; 7],
    pub rlc_buffer_occupancy: i64,
    /// Downlink UE throughput; stays a real-tagged record
    pub drb_throughput_dl: f64,
}

/// Cell-wide DU MAC-layer counters for one reporting period
#[derive(Debug, Clone, Copy, Default)]
pub struct DuCellPmCounters {
    pub mac_pdu: i64,
    pub mac_pdu_initial: i64,
    pub mac_qpsk: i64,
    pub mac_16qam: i64,
    pub mac_64qam: i64,
    /// PRB utilization downlink; fractional, ceiled on the wire
    pub prb_utilization_dl: f64,
    pub mac_retx: i64,
    pub mac_volume: i64,
    pub mcs_bins: [i64; 6],
    pub sinr_bins: [i64; 7],
    pub rlc_buffer_occupancy: i64,
    pub active_ue_dl: i64,
}

/// One neighbour cell's measured radio quality
#[derive(Debug, Clone, Copy)]
pub struct NeighbourCellSinr {
    pub cell_id: u16,
    pub sinr: f64,
    pub converted_sinr: f64,
}

/// Builds the measurement set for one mmWave reporting period
#[derive(Debug, Default)]
pub struct MmWaveIndicationMessageHelper {
    collector: MeasurementCollector,
    reduced: bool,
}

impl MmWaveIndicationMessageHelper {
    pub fn new(reduced: bool) -> Self {
        Self {
            collector: MeasurementCollector::new(),
            reduced,
        }
    }

    /// UE-scoped CU-UP split-bearer PDCP volumes
    pub fn add_cu_up_ue_pm_item(
        &mut self,
        ue_id: &str,
        tx_pdcp_pdu_bytes_nr_rlc: i64,
        tx_pdcp_pdu_nr_rlc: i64,
    ) {
        if self.reduced {
            return;
        }
        self.collector.add_ue_item(
            ue_id,
            "QosFlow.PdcpPduVolumeDL_Filter.UEID",
            MeasValue::Integer(tx_pdcp_pdu_bytes_nr_rlc),
        );
        self.collector.add_ue_item(
            ue_id,
            "DRB.PdcpPduNbrDl.Qos.UEID",
            MeasValue::Integer(tx_pdcp_pdu_nr_rlc),
        );
    }

    /// UE-scoped DU MAC counters.
    ///
    /// The throughput measurement is always included and keeps its
    /// real-tagged record; everything else is integer-tagged and dropped
    /// in reduced mode.
    pub fn add_du_ue_pm_item(&mut self, ue_id: &str, counters: &DuUePmCounters) {
        self.collector.add_ue_item(
            ue_id,
            "DRB.UEThpDl.UEID",
            MeasValue::Real(counters.drb_throughput_dl),
        );
        if self.reduced {
            return;
        }

        let items: Vec<(String, MeasValue)> = [
            ("TB.TotNbrDl.1.UEID", MeasValue::Integer(counters.mac_pdu)),
            (
                "TB.TotNbrDlInitial.1.UEID",
                MeasValue::Integer(counters.mac_pdu_initial),
            ),
            (
                "TB.TotNbrDlInitial.Qpsk.UEID",
                MeasValue::Integer(counters.mac_qpsk),
            ),
            (
                "TB.TotNbrDlInitial.16Qam.UEID",
                MeasValue::Integer(counters.mac_16qam),
            ),
            (
                "TB.TotNbrDlInitial.64Qam.UEID",
                MeasValue::Integer(counters.mac_64qam),
            ),
            ("TB.ErrTotalNbrDl.1.UEID", MeasValue::Integer(counters.mac_retx)),
            (
                "QosFlow.PdcpPduVolumeDL_Filter.UEID",
                MeasValue::Integer(counters.mac_volume),
            ),
            ("RRU.PrbUsedDl.UEID", MeasValue::from_ceiled(counters.mac_prb)),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .chain(
            MCS_BIN_NAMES
                .iter()
                .zip(counters.mcs_bins)
                .chain(SINR_BIN_NAMES.iter().zip(counters.sinr_bins))
                .map(|(name, value)| (format!("{name}.UEID"), MeasValue::Integer(value))),
        )
        .chain(std::iter::once((
            "DRB.BufferSize.Qos.UEID".to_owned(),
            MeasValue::Integer(counters.rlc_buffer_occupancy),
        )))
        .collect();

        for (name, value) in items {
            self.collector.add_ue_item(ue_id, &name, value);
        }
    }

    /// Cell-scoped DU MAC counters
    pub fn add_du_cell_pm_item(&mut self, counters: &DuCellPmCounters) {
        if !self.reduced {
            self.collector
                .add_cell_item("TB.TotNbrDl.1", MeasValue::Integer(counters.mac_pdu));
            self.collector.add_cell_item(
                "TB.TotNbrDlInitial",
                MeasValue::Integer(counters.mac_pdu_initial),
            );
        }

        self.collector
            .add_cell_item("TB.TotNbrDlInitial.Qpsk", MeasValue::Integer(counters.mac_qpsk));
        self.collector
            .add_cell_item("TB.TotNbrDlInitial.16Qam", MeasValue::Integer(counters.mac_16qam));
        self.collector
            .add_cell_item("TB.TotNbrDlInitial.64Qam", MeasValue::Integer(counters.mac_64qam));
        self.collector.add_cell_item(
            "RRU.PrbUsedDl",
            MeasValue::from_ceiled(counters.prb_utilization_dl),
        );

        if !self.reduced {
            self.collector
                .add_cell_item("TB.ErrTotalNbrDl.1", MeasValue::Integer(counters.mac_retx));
            self.collector.add_cell_item(
                "QosFlow.PdcpPduVolumeDL_Filter",
                MeasValue::Integer(counters.mac_volume),
            );
            for (name, value) in MCS_BIN_NAMES
                .iter()
                .zip(counters.mcs_bins)
                .chain(SINR_BIN_NAMES.iter().zip(counters.sinr_bins))
            {
                self.collector.add_cell_item(name, MeasValue::Integer(value));
            }
            self.collector.add_cell_item(
                "DRB.BufferSize.Qos",
                MeasValue::Integer(counters.rlc_buffer_occupancy),
            );
        }

        self.collector
            .add_cell_item("DRB.MeanActiveUeDl", MeasValue::Integer(counters.active_ue_dl));
    }

    /// UE-scoped CU-CP bearer counters
    pub fn add_cu_cp_ue_pm_item(&mut self, ue_id: &str, num_drb: i64, drb_rel_act: i64) {
        if self.reduced {
            return;
        }
        self.collector
            .add_ue_item(ue_id, "DRB.EstabSucc.5QI.UEID", MeasValue::Integer(num_drb));
        self.collector
            .add_ue_item(ue_id, "DRB.RelActNbr.5QI.UEID", MeasValue::Integer(drb_rel_act));
    }

    /// Serving-cell radio quality for handover decisions; always included
    pub fn add_serving_sinr_report(
        &mut self,
        ue_id: &str,
        serving_cell_id: u16,
        serving_sinr: f64,
        serving_converted_sinr: f64,
    ) {
        self.collector
            .add_ue_item(ue_id, "servingcellID", MeasValue::Integer(serving_cell_id as i64));
        self.collector
            .add_ue_item(ue_id, "servingSINR", MeasValue::from_ceiled(serving_sinr));
        self.collector.add_ue_item(
            ue_id,
            "servingconvertedSINR",
            MeasValue::from_ceiled(serving_converted_sinr),
        );
    }

    /// Neighbour-cell radio quality for handover decisions; always
    /// included. Names are indexed from 1 in slice order
    /// (`neigCellid1`, `neigSINR1`, `neigconvertedSINR1`, ...).
    pub fn add_neighbour_sinr_report(&mut self, ue_id: &str, neighbours: &[NeighbourCellSinr]) {
        for (i, neighbour) in neighbours.iter().enumerate() {
            let idx = i + 1;
            self.collector.add_ue_item(
                ue_id,
                &format!("neigCellid{idx}"),
                MeasValue::Integer(neighbour.cell_id as i64),
            );
            self.collector.add_ue_item(
                ue_id,
                &format!("neigSINR{idx}"),
                MeasValue::from_ceiled(neighbour.sinr),
            );
            self.collector.add_ue_item(
                ue_id,
                &format!("neigconvertedSINR{idx}"),
                MeasValue::from_ceiled(neighbour.converted_sinr),
            );
        }
    }

    pub fn collector(&self) -> &MeasurementCollector {
        &self.collector
    }

    /// Consume the helper into builder input
    pub fn into_values(self) -> KpmIndicationMessageValues {
        let (cell, ues) = self.collector.into_parts();
        KpmIndicationMessageValues {
            cell_measurements: (!cell.is_empty()).then_some(cell),
            ue_measurements: ues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ue_counters() -> DuUePmCounters {
        DuUePmCounters {
            mac_pdu: 100,
            mac_pdu_initial: 90,
            mac_qpsk: 30,
            mac_16qam: 30,
            mac_64qam: 30,
            mac_retx: 10,
            mac_volume: 4096,
            mac_prb: 17.3,
            mcs_bins: [1, 2, 3, 4, 5, 6],
            sinr_bins: [7, 6, 5, 4, 3, 2, 1],
            rlc_buffer_occupancy: 2048,
            drb_throughput_dl: 512.4,
        }
    }

    fn cell_counters() -> DuCellPmCounters {
        DuCellPmCounters {
            mac_pdu: 1000,
            mac_pdu_initial: 900,
            mac_qpsk: 300,
            mac_16qam: 300,
            mac_64qam: 300,
            prb_utilization_dl: 42.1,
            mac_retx: 100,
            mac_volume: 65536,
            mcs_bins: [10, 20, 30, 40, 50, 60],
            sinr_bins: [70, 60, 50, 40, 30, 20, 10],
            rlc_buffer_occupancy: 8192,
            active_ue_dl: 12,
        }
    }

    #[test]
    fn test_du_ue_full_item_order() {
        let mut helper = MmWaveIndicationMessageHelper::new(false);
        helper.add_du_ue_pm_item("0001", &ue_counters());

        let ue = &helper.collector().ue_measurements()[0];
        let names: Vec<&str> = ue.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "DRB.UEThpDl.UEID",
                "TB.TotNbrDl.1.UEID",
                "TB.TotNbrDlInitial.1.UEID",
                "TB.TotNbrDlInitial.Qpsk.UEID",
                "TB.TotNbrDlInitial.16Qam.UEID",
                "TB.TotNbrDlInitial.64Qam.UEID",
                "TB.ErrTotalNbrDl.1.UEID",
                "QosFlow.PdcpPduVolumeDL_Filter.UEID",
                "RRU.PrbUsedDl.UEID",
                "CARR.PDSCHMCSDist.Bin1.UEID",
                "CARR.PDSCHMCSDist.Bin2.UEID",
                "CARR.PDSCHMCSDist.Bin3.UEID",
                "CARR.PDSCHMCSDist.Bin4.UEID",
                "CARR.PDSCHMCSDist.Bin5.UEID",
                "CARR.PDSCHMCSDist.Bin6.UEID",
                "L1M.RS-SINR.Bin34.UEID",
                "L1M.RS-SINR.Bin46.UEID",
                "L1M.RS-SINR.Bin58.UEID",
                "L1M.RS-SINR.Bin70.UEID",
                "L1M.RS-SINR.Bin82.UEID",
                "L1M.RS-SINR.Bin94.UEID",
                "L1M.RS-SINR.Bin127.UEID",
                "DRB.BufferSize.Qos.UEID",
            ]
        );

        // Throughput keeps the real-tagged record, PRBs are ceiled
        assert_eq!(ue.get("DRB.UEThpDl.UEID"), Some(&MeasValue::Real(512.4)));
        assert_eq!(ue.get("RRU.PrbUsedDl.UEID"), Some(&MeasValue::Integer(18)));
    }

    #[test]
    fn test_du_ue_reduced_keeps_only_throughput() {
        let mut helper = MmWaveIndicationMessageHelper::new(true);
        helper.add_du_ue_pm_item("0001", &ue_counters());

        let ue = &helper.collector().ue_measurements()[0];
        assert_eq!(ue.len(), 1);
        assert_eq!(ue.items[0].name, "DRB.UEThpDl.UEID");
        assert_eq!(ue.items[0].value, MeasValue::Real(512.4));
    }

    #[test]
    fn test_du_cell_reduced_subset() {
        let mut full = MmWaveIndicationMessageHelper::new(false);
        full.add_du_cell_pm_item(&cell_counters());
        let mut reduced = MmWaveIndicationMessageHelper::new(true);
        reduced.add_du_cell_pm_item(&cell_counters());

        let names = |h: &MmWaveIndicationMessageHelper| -> Vec<String> {
            h.collector()
                .cell_measurements()
                .items
                .iter()
                .map(|i| i.name.clone())
                .collect()
        };

        assert_eq!(
            names(&reduced),
            [
                "TB.TotNbrDlInitial.Qpsk",
                "TB.TotNbrDlInitial.16Qam",
                "TB.TotNbrDlInitial.64Qam",
                "RRU.PrbUsedDl",
                "DRB.MeanActiveUeDl",
            ]
        );
        for name in names(&reduced) {
            assert!(names(&full).contains(&name), "{name} missing from full set");
        }
        assert_eq!(names(&full).len(), 5 + 18);

        let cell = reduced.collector().cell_measurements();
        assert_eq!(cell.get("RRU.PrbUsedDl"), Some(&MeasValue::Integer(43)));
    }

    #[test]
    fn test_sinr_reports_ignore_reduced_flag() {
        let mut helper = MmWaveIndicationMessageHelper::new(true);
        helper.add_serving_sinr_report("0001", 3, 14.2, 25.8);
        helper.add_neighbour_sinr_report(
            "0001",
            &[
                NeighbourCellSinr {
                    cell_id: 4,
                    sinr: -0.2,
                    converted_sinr: 9.1,
                },
                NeighbourCellSinr {
                    cell_id: 5,
                    sinr: 3.0,
                    converted_sinr: 11.9,
                },
            ],
        );

        let ue = &helper.collector().ue_measurements()[0];
        let entries: Vec<(&str, MeasValue)> = ue
            .items
            .iter()
            .map(|i| (i.name.as_str(), i.value))
            .collect();
        assert_eq!(
            entries,
            [
                ("servingcellID", MeasValue::Integer(3)),
                ("servingSINR", MeasValue::Integer(15)),
                ("servingconvertedSINR", MeasValue::Integer(26)),
                ("neigCellid1", MeasValue::Integer(4)),
                ("neigSINR1", MeasValue::Integer(0)),
                ("neigconvertedSINR1", MeasValue::Integer(10)),
                ("neigCellid2", MeasValue::Integer(5)),
                ("neigSINR2", MeasValue::Integer(3)),
                ("neigconvertedSINR2", MeasValue::Integer(12)),
            ]
        );
    }

    #[test]
    fn test_into_values_splits_cell_and_ue() {
        let mut helper = MmWaveIndicationMessageHelper::new(false);
        helper.add_du_cell_pm_item(&cell_counters());
        helper.add_du_ue_pm_item("0001", &ue_counters());

        let values = helper.into_values();
        assert!(values.cell_measurements.is_some());
        assert_eq!(values.ue_measurements.len(), 1);
    }
}
