use serde::{Deserialize, Serialize};

use crate::ordinal::Ordinal;

/// What a reader sees: the step counter, the ordinal, and its rendered form.
/// A snapshot handed to another task may already be stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: u64,
    pub ordinal: Ordinal,
    pub rendered: String,
}

impl Snapshot {
    pub fn new(step: u64, ordinal: Ordinal) -> Self {
        Self {
            step,
            rendered: ordinal.to_string(),
            ordinal,
        }
    }
}
