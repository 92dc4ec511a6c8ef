//! Thermal zones of a condenser coil and a per-zone container.

use std::fmt;

/// One of the three sequential thermal regions of a condenser coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Liquid cooled below saturation.
    Subcooling,
    /// Vapor condensing at constant temperature.
    Condensing,
    /// Superheated vapor cooled to saturation.
    Desuperheating,
}

impl Zone {
    /// All zones, in the order air meets them.
    pub const ALL: [Zone; 3] = [Zone::Subcooling, Zone::Condensing, Zone::Desuperheating];

    /// Returns `true` if the refrigerant changes phase in this zone.
    #[must_use]
    pub fn is_phase_change(self) -> bool {
        matches!(self, Zone::Condensing)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Subcooling => "subcooling",
            Zone::Condensing => "condensing",
            Zone::Desuperheating => "desuperheating",
        };
        f.write_str(name)
    }
}

/// One value per [`Zone`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerZone<T> {
    pub subcooling: T,
    pub condensing: T,
    pub desuperheating: T,
}

impl<T> PerZone<T> {
    /// Returns the value for `zone`.
    pub fn get(&self, zone: Zone) -> &T {
        match zone {
            Zone::Subcooling => &self.subcooling,
            Zone::Condensing => &self.condensing,
            Zone::Desuperheating => &self.desuperheating,
        }
    }

    /// Iterates over the values in [`Zone::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        Zone::ALL.into_iter().map(move |zone| (zone, self.get(zone)))
    }

    /// Applies a fallible function to each zone in [`Zone::ALL`] order,
    /// stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, mut f: impl FnMut(Zone, T) -> Result<U, E>) -> Result<PerZone<U>, E> {
        Ok(PerZone {
            subcooling: f(Zone::Subcooling, self.subcooling)?,
            condensing: f(Zone::Condensing, self.condensing)?,
            desuperheating: f(Zone::Desuperheating, self.desuperheating)?,
        })
    }
}
