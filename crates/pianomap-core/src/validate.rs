use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::keyboard::{PianoKey, KEY_COUNT};

/// Descriptive completeness/uniqueness report over a key mapping.
///
/// Purely derived from the input; never mutates or repairs the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub key_count: usize,
    pub min_label: Option<u8>,
    pub max_label: Option<u8>,
    /// Labels that appear more than once, ascending
    pub duplicate_labels: Vec<u8>,
    /// Labels from the expected universe 0..=87 that never appear, ascending
    pub missing_labels: Vec<u8>,
}

impl ValidationReport {
    /// True when the mapping covers all 88 labels exactly once
    pub fn is_complete(&self) -> bool {
        self.key_count == KEY_COUNT
            && self.duplicate_labels.is_empty()
            && self.missing_labels.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keys: {}", self.key_count)?;
        match (self.min_label, self.max_label) {
            (Some(min), Some(max)) => writeln!(f, "label range: {} - {}", min, max)?,
            _ => writeln!(f, "label range: (empty)")?,
        }
        writeln!(f, "duplicate labels: {}", self.duplicate_labels.len())?;
        if self.missing_labels.is_empty() {
            write!(f, "missing labels: none")
        } else {
            write!(f, "missing labels: {:?}", self.missing_labels)
        }
    }
}

/// Validate a key mapping against the expected 88-label universe
pub fn validate_mapping(keys: &[PianoKey]) -> ValidationReport {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key.label).or_insert(0) += 1;
    }

    let duplicate_labels = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(&label, _)| label)
        .collect();

    let missing_labels = (0..KEY_COUNT as u8)
        .filter(|label| !counts.contains_key(label))
        .collect();

    ValidationReport {
        key_count: keys.len(),
        min_label: counts.keys().next().copied(),
        max_label: counts.keys().next_back().copied(),
        duplicate_labels,
        missing_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::all_keys;

    #[test]
    fn test_generated_mapping_is_complete() {
        let report = validate_mapping(&all_keys());
        assert!(report.is_complete());
        assert_eq!(report.key_count, 88);
        assert_eq!(report.min_label, Some(0));
        assert_eq!(report.max_label, Some(87));
        assert!(report.duplicate_labels.is_empty());
        assert!(report.missing_labels.is_empty());
    }

    #[test]
    fn test_empty_mapping() {
        let report = validate_mapping(&[]);
        assert!(!report.is_complete());
        assert_eq!(report.key_count, 0);
        assert_eq!(report.min_label, None);
        assert_eq!(report.max_label, None);
        assert_eq!(report.missing_labels.len(), 88);
    }

    #[test]
    fn test_detects_duplicates_and_gaps() {
        let mut keys = all_keys();
        // Replace the C8 entry with a second copy of A0
        keys[87] = keys[0];

        let report = validate_mapping(&keys);
        assert!(!report.is_complete());
        assert_eq!(report.key_count, 88);
        assert_eq!(report.duplicate_labels, vec![0]);
        assert_eq!(report.missing_labels, vec![87]);
        assert_eq!(report.max_label, Some(86));
    }

    #[test]
    fn test_report_display() {
        let report = validate_mapping(&all_keys());
        let text = report.to_string();
        assert!(text.contains("keys: 88"));
        assert!(text.contains("label range: 0 - 87"));
        assert!(text.contains("missing labels: none"));
    }
}
