use serde::{Deserialize, Serialize};

use super::ResourceKind;

/// Four-way category subtotals of a resolved composite item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub materials: f64,
    pub labor: f64,
    pub equipment: f64,
    pub miscellaneous: f64,
}

impl CostBreakdown {
    /// Add a cost to the slot matching a resource category. Service and any
    /// future non-standard category attribute to miscellaneous.
    pub fn add(&mut self, kind: ResourceKind, amount: f64) {
        match kind {
            ResourceKind::Material => self.materials += amount,
            ResourceKind::Labor => self.labor += amount,
            ResourceKind::Equipment => self.equipment += amount,
            ResourceKind::Service => self.miscellaneous += amount,
        }
    }

    /// Sum of the four subtotals. The resolved `total` is always exactly
    /// this sum, never an independently recomputed figure.
    pub fn sum(&self) -> f64 {
        self.materials + self.labor + self.equipment + self.miscellaneous
    }
}

/// Result of resolving one composite item against a catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostResolution {
    pub total: f64,
    pub breakdown: CostBreakdown,
    /// Non-fatal data-quality findings (unresolved refs, invalid yields).
    pub warnings: Vec<String>,
}

/// Result of the incompleteness check on one composite item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncompleteReport {
    pub incomplete: bool,
    pub reasons: Vec<String>,
}
