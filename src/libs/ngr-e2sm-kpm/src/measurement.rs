//! Measurement Collection
//!
//! Canonical in-memory form of the performance measurements gathered for
//! one reporting period: named values per subject, where a subject is
//! either the serving cell or a single UE. Insertion order is preserved
//! per subject and determines the order of the wire-level lists.

/// A single measurement value
///
/// Integer values map to the integer-tagged wire record, real values to
/// the real-tagged record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasValue {
    Integer(i64),
    Real(f64),
}

impl MeasValue {
    /// Convert a fractional quantity destined for an integer-tagged wire
    /// record. The conversion is always `ceil`, toward positive infinity:
    /// `from_ceiled(-0.2) == Integer(0)`, `from_ceiled(3.0) == Integer(3)`.
    pub fn from_ceiled(value: f64) -> Self {
        MeasValue::Integer(value.ceil() as i64)
    }
}

/// One named metric value; immutable once created
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementItem {
    pub name: String,
    pub value: MeasValue,
}

/// The ordered measurements of one subject (the cell, or one UE)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectMeasurements {
    /// UE identifier for UE-scoped measurements; `None` for the cell
    pub subject_id: Option<String>,
    pub items: Vec<MeasurementItem>,
}

impl SubjectMeasurements {
    pub fn new(subject_id: Option<String>) -> Self {
        Self {
            subject_id,
            items: Vec::new(),
        }
    }

    /// Add a measurement, keeping names unique.
    ///
    /// Duplicate names are last-write-wins: re-adding a name overwrites
    /// the previous value in place, keeping the original list position.
    pub fn add(&mut self, name: &str, value: MeasValue) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => {
                log::trace!("overwriting measurement {name} for subject {:?}", self.subject_id);
                existing.value = value;
            }
            None => self.items.push(MeasurementItem {
                name: name.to_owned(),
                value,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a measurement by name
    pub fn get(&self, name: &str) -> Option<&MeasValue> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| &item.value)
    }
}

/// Accumulates cell- and UE-scoped measurements for one indication build.
///
/// A collector lives for exactly one reporting period: create, populate
/// through the profile helpers, convert into
/// [`KpmIndicationMessageValues`](crate::indication::KpmIndicationMessageValues),
/// discard. It performs no I/O and is not shared across builds.
#[derive(Debug, Default)]
pub struct MeasurementCollector {
    cell: SubjectMeasurements,
    ues: Vec<SubjectMeasurements>,
}

impl MeasurementCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell-scoped measurement
    pub fn add_cell_item(&mut self, name: &str, value: MeasValue) {
        self.cell.add(name, value);
    }

    /// Add a UE-scoped measurement.
    ///
    /// UEs are kept in first-touch order; items within a UE in call order.
    pub fn add_ue_item(&mut self, ue_id: &str, name: &str, value: MeasValue) {
        let pos = match self
            .ues
            .iter()
            .position(|ue| ue.subject_id.as_deref() == Some(ue_id))
        {
            Some(pos) => pos,
            None => {
                self.ues.push(SubjectMeasurements::new(Some(ue_id.to_owned())));
                self.ues.len() - 1
            }
        };
        self.ues[pos].add(name, value);
    }

    pub fn cell_measurements(&self) -> &SubjectMeasurements {
        &self.cell
    }

    pub fn ue_measurements(&self) -> &[SubjectMeasurements] {
        &self.ues
    }

    /// Consume the collector, yielding its subjects
    pub fn into_parts(self) -> (SubjectMeasurements, Vec<SubjectMeasurements>) {
        (self.cell, self.ues)
    }
}
