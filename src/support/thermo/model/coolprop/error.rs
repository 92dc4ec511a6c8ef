use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) refrigerant model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

/// Classifies an `rfluids` error message as a [`PropertyError`].
///
/// `rfluids` only exposes CoolProp failures as strings, so this is a
/// best-effort substring match. Unrecognized messages become
/// [`PropertyError::Calculation`] with the original text preserved.
fn classify(message: &str) -> PropertyError {
    const UNDEFINED: &[&str] = &["not defined", "not implemented"];
    const OUT_OF_DOMAIN: &[&str] = &[
        "out of range",
        "not in range",
        "outside the range of validity",
        "must be between",
        "quality must be",
        "above the critical",
        "below the triple",
    ];
    const INVALID_STATE: &[&str] = &["not a valid number", "invalid state", "invalid number"];

    let lowered = message.to_lowercase();
    let context = message.to_string();
    let matches = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if matches(UNDEFINED) {
        PropertyError::Undefined { context }
    } else if matches(OUT_OF_DOMAIN) {
        PropertyError::OutOfDomain { context }
    } else if matches(INVALID_STATE) {
        PropertyError::InvalidState { context }
    } else {
        PropertyError::Calculation { context }
    }
}
