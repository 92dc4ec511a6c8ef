//! Results of a condenser sizing run.

use uom::si::f64::Power;

use super::{CoilGeometry, Duty, PerZone, ZoneEnthalpies, ZoneResult};

/// Duty, sizing, and geometry of one zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneReport {
    pub duty: Duty,
    pub sizing: ZoneResult,
    pub geometry: CoilGeometry,
}

/// Per-zone reports for a sized condenser coil.
#[derive(Debug, Clone, Copy)]
pub struct CondenserResults {
    /// Refrigerant enthalpies the duties were split from.
    pub enthalpies: ZoneEnthalpies,

    pub zones: PerZone<ZoneReport>,
}

impl CondenserResults {
    /// Total heat rejected by the coil.
    #[must_use]
    pub fn total_duty(&self) -> Power {
        self.zones
            .iter()
            .map(|(_, report)| report.duty)
            .sum::<Duty>()
            .into_inner()
    }
}
