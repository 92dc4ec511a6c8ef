//! Approximate coil geometry from a zone's required area.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Velocity, VolumeRate},
    length::meter,
    ratio::ratio,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::CondenserError;

/// Conversion used for fin pitch.
pub const INCHES_PER_METER: f64 = 39.37;

/// Coil-level construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct CoilParameters {
    /// Tube outer diameter.
    ///
    /// Reserved for a future tube-side correlation; the geometry estimate
    /// does not use it.
    pub tube_outer_diameter: Length,

    /// Fin density in fins per inch.
    pub fins_per_inch: f64,

    /// Maximum fin rows allowed for any one zone.
    pub max_rows: u32,
}

/// Estimated coil dimensions for one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    pub face_area: Area,
    pub width: Length,
    pub height: Length,
    pub fin_pitch: Length,

    /// Between one and the configured maximum.
    pub fin_rows: u32,

    /// Half the rows, and at least one.
    pub tube_passes: u32,
}

/// Derives a square coil face and row count from a required area.
///
/// The face area is the volumetric air flow over the face velocity, and the
/// face is taken to be square. Rows are the required area over the area one
/// row of fins presents (`width * fin_pitch`), floored and clamped to
/// `[1, max_rows]`.
///
/// # Errors
///
/// Returns [`CondenserError::InvalidParameter`] if the air flow, face velocity,
/// fin density, or maximum row count is not strictly positive, or if `area`
/// is negative.
pub fn estimate_geometry(
    area: Area,
    air_volume_flow: VolumeRate,
    face_velocity: Velocity,
    coil: &CoilParameters,
) -> Result<CoilGeometry, CondenserError> {
    let area = NonNegative::new(area)
        .map_err(CondenserError::invalid("area"))?
        .into_inner();
    let air_volume_flow = StrictlyPositive::new(air_volume_flow)
        .map_err(CondenserError::invalid("air_volume_flow"))?
        .into_inner();
    let face_velocity = StrictlyPositive::new(face_velocity)
        .map_err(CondenserError::invalid("face_velocity"))?
        .into_inner();
    let fins_per_inch = StrictlyPositive::new(coil.fins_per_inch)
        .map_err(CondenserError::invalid("fins_per_inch"))?
        .into_inner();
    let max_rows = StrictlyPositive::new(coil.max_rows)
        .map_err(CondenserError::invalid("max_rows"))?
        .into_inner();

    let face_area: Area = air_volume_flow / face_velocity;
    let width = Length::new::<meter>(face_area.get::<square_meter>().sqrt());
    let height: Length = face_area / width;
    let fin_pitch = Length::new::<meter>(1.0 / (fins_per_inch * INCHES_PER_METER));

    let raw_rows = (area / (width * fin_pitch)).get::<ratio>().floor();
    let fin_rows = clamp_rows(raw_rows, max_rows);
    let tube_passes = (fin_rows / 2).max(1);

    tracing::debug!(
        face_area_m2 = face_area.get::<square_meter>(),
        width_m = width.get::<meter>(),
        raw_rows,
        fin_rows,
        tube_passes,
        "estimated coil geometry"
    );

    Ok(CoilGeometry {
        face_area,
        width,
        height,
        fin_pitch,
        fin_rows,
        tube_passes,
    })
}

/// Clamps a floored row count to `[1, max_rows]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_rows(raw_rows: f64, max_rows: u32) -> u32 {
    if raw_rows >= f64::from(max_rows) {
        if raw_rows > f64::from(max_rows) {
            tracing::debug!(raw_rows, max_rows, "row count clamped to maximum");
        }
        return max_rows;
    }
    if raw_rows < 1.0 {
        tracing::warn!(raw_rows, "required area is under one fin row, reporting one row");
        return 1;
    }
    raw_rows as u32
}
