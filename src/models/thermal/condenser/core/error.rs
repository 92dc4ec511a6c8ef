use thiserror::Error;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::ConstraintError;

use super::{NtuSolveError, Zone};

/// Errors that abort a condenser sizing run.
///
/// The first error detected ends the run; no partial results are returned.
#[derive(Debug, Error)]
pub enum CondenserError {
    /// A zone duty is negative (or not a number).
    ///
    /// The refrigerant enthalpies are out of order for a condensing cycle,
    /// e.g. the "superheated" inlet lies below saturated vapor.
    #[error("invalid thermodynamic state: {zone} duty is {} W", .duty.get::<watt>())]
    InvalidThermodynamicState { zone: Zone, duty: Power },

    /// The requested duty cannot be met with the given air-side conditions.
    #[error("infeasible heat exchange in {zone} zone: {reason}")]
    InfeasibleHeatExchange { zone: Zone, reason: Infeasibility },

    /// An input parameter violates its numeric constraint.
    #[error("invalid parameter `{parameter}`")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The NTU root-find did not converge.
    #[error("NTU solve did not converge in {zone} zone")]
    SolverDivergence {
        zone: Zone,
        #[source]
        source: NtuSolveError,
    },

    /// The thermo model rejected a refrigerant state.
    #[error("property lookup failed: {context}")]
    PropertyLookupFailure {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Why a zone's heat exchange is infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Infeasibility {
    /// Air does not enter cooler than the zone's hot side.
    #[error("no driving force (hot side minus air inlet is {} K)", .delta_t.get::<delta_kelvin>())]
    NoDrivingForce { delta_t: TemperatureInterval },

    /// The duty needs an effectiveness of one or more.
    #[error("required effectiveness {effectiveness} is not below 1")]
    EffectivenessTooHigh { effectiveness: f64 },
}

impl CondenserError {
    /// Creates an invalid-parameter error for `parameter`.
    pub(super) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }

    /// Creates a property lookup failure with context.
    pub(super) fn lookup_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyLookupFailure {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
