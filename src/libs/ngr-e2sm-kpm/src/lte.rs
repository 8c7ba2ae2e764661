//! LTE Indication Message Helper
//!
//! Translates LTE eNB performance counters (CU-UP PDCP volume/throughput
//! and CU-CP bearer counters) into collector entries.
//!
//! Inclusion policy per measurement (`reduced` omits, never zeroes):
//!
//! | measurement                        | included when reduced |
//! |------------------------------------|-----------------------|
//! | DRB.PdcpSduVolumeDl_Filter.UEID    | no                    |
//! | Tot.PdcpSduNbrDl.UEID              | no                    |
//! | DRB.PdcpSduBitRateDl.UEID          | no                    |
//! | DRB.PdcpSduDelayDl.UEID            | no                    |
//! | DRB.PdcpSduDelayDl (cell)          | no                    |
//! | m_pDCPBytesUL / m_pDCPBytesDL      | yes                   |
//! | numActiveUes                       | yes                   |
//! | DRB.EstabSucc.5QI.UEID             | no                    |
//! | DRB.RelActNbr.5QI.UEID             | no                    |

use crate::indication::KpmIndicationMessageValues;
use crate::measurement::{MeasValue, MeasurementCollector};

/// Builds the measurement set for one LTE reporting period
#[derive(Debug, Default)]
pub struct LteIndicationMessageHelper {
    collector: MeasurementCollector,
    reduced: bool,
}

impl LteIndicationMessageHelper {
    pub fn new(reduced: bool) -> Self {
        Self {
            collector: MeasurementCollector::new(),
            reduced,
        }
    }

    /// UE-scoped CU-UP PDCP measurements.
    ///
    /// Volumes and packet counts are integer counters; throughput (kbps)
    /// and latency are fractional and are ceiled into their
    /// integer-tagged records.
    pub fn add_cu_up_ue_pm_item(
        &mut self,
        ue_id: &str,
        tx_bytes: i64,
        tx_dl_packets: i64,
        pdcp_throughput: f64,
        pdcp_latency: f64,
    ) {
        if self.reduced {
            return;
        }
        self.collector.add_ue_item(
            ue_id,
            "DRB.PdcpSduVolumeDl_Filter.UEID",
            MeasValue::Integer(tx_bytes),
        );
        self.collector
            .add_ue_item(ue_id, "Tot.PdcpSduNbrDl.UEID", MeasValue::Integer(tx_dl_packets));
        self.collector.add_ue_item(
            ue_id,
            "DRB.PdcpSduBitRateDl.UEID",
            MeasValue::from_ceiled(pdcp_throughput),
        );
        self.collector.add_ue_item(
            ue_id,
            "DRB.PdcpSduDelayDl.UEID",
            MeasValue::from_ceiled(pdcp_latency),
        );
    }

    /// Cell-scoped CU-UP average PDCP latency
    pub fn add_cu_up_cell_pm_item(&mut self, cell_average_latency: f64) {
        if self.reduced {
            return;
        }
        self.collector
            .add_cell_item("DRB.PdcpSduDelayDl", MeasValue::from_ceiled(cell_average_latency));
    }

    /// Aggregate CU-UP PDCP volumes; always included
    pub fn fill_cu_up_values(&mut self, pdcp_bytes_ul: i64, pdcp_bytes_dl: i64) {
        self.collector
            .add_cell_item("m_pDCPBytesUL", MeasValue::Integer(pdcp_bytes_ul));
        self.collector
            .add_cell_item("m_pDCPBytesDL", MeasValue::Integer(pdcp_bytes_dl));
    }

    /// CU-CP active UE count; always included
    pub fn fill_cu_cp_values(&mut self, num_active_ues: u16) {
        self.collector
            .add_cell_item("numActiveUes", MeasValue::Integer(num_active_ues as i64));
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
