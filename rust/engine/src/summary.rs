use serde::{Deserialize, Serialize};

/// Snapshot of the settled beans after a run.
/// Serialized as a single JSON object for batch reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSummary {
    /// Number of slots on the board
    pub slot_count: usize,
    /// Beans per slot, lowest index first
    pub counts: Vec<usize>,
    /// Sum of `counts`
    pub total: usize,
    /// Mean slot index of the settled beans, absent when no bean has settled
    #[serde(default)]
    pub average: Option<f64>,
}

impl SlotSummary {
    pub fn from_counts(counts: Vec<usize>) -> Self {
        let total = counts.iter().sum();
        let average = average_index(&counts);
        Self {
            slot_count: counts.len(),
            counts,
            total,
            average,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub(crate) fn average_index(counts: &[usize]) -> Option<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }
    let weighted: usize = counts.iter().enumerate().map(|(i, c)| i * c).sum();
    Some(weighted as f64 / total as f64)
}
