//! Ban-duration aggregation over labeled input fields.

use crate::model::DurationField;

/// Minutes per recognized duration label.
const SCALE_FACTORS: &[(&str, u64)] = &[("day", 1440), ("hour", 60), ("minute", 1), ("min", 1)];

/// Scale factor for a field label, if the label is recognized.
fn scale_factor(label: &str) -> Option<u64> {
    SCALE_FACTORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, factor)| *factor)
}

/// Collapse labeled duration fields into one total, expressed in minutes.
///
/// Unrecognized labels contribute nothing, and a value that does not parse
/// as a non-negative integer contributes zero; neither is an error. The
/// result depends only on the fields passed in.
#[must_use]
pub fn total_minutes(fields: &[DurationField]) -> u64 {
    fields
        .iter()
        .filter_map(|field| {
            let factor = scale_factor(&field.label)?;
            let value = field.value.trim().parse::<u64>().ok()?;
            Some(value.saturating_mul(factor))
        })
        .fold(0, u64::saturating_add)
}
