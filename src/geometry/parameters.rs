use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Boat-tail mode resolved from the raw parameter fields.
///
/// Exactly one of the radius / angle forms may be active; the resolution
/// from raw fields happens in [`ProfileParameters::boat_tail`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoatTail {
    /// No boat tail.
    None,
    /// Taper to an explicit rear radius over `length`.
    Radius { length: f64, radius: f64 },
    /// Taper at an angle from the horizontal, in degrees, over `length`.
    Angle { length: f64, degrees: f64 },
}

/// Immutable input parameters for a profile build.
///
/// All lengths and radii share one unit (conventionally mm, or calibers
/// pre-multiplied by the caller). Optional features are switched off by
/// leaving their governing length or radius at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileParameters {
    /// Radius of the body at the rear of the ogive.
    pub base_radius: f64,
    /// Radius of the spherical nose cap.
    pub tip_radius: f64,
    /// Length of the ogive section. May be omitted when `aspect_ratio` is given.
    #[serde(default)]
    pub ogive_length: Option<f64>,
    /// Length-to-diameter ratio: `ogive_length = aspect_ratio * 2 * base_radius`.
    /// Ignored when `ogive_length` is supplied directly.
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    /// Constant radial wall thickness of a hollow profile; `0` = solid.
    #[serde(default)]
    pub wall_thickness: f64,
    /// Outer radius of the shoulder step.
    #[serde(default)]
    pub shoulder_radius: f64,
    /// Axial length of the shoulder; `0` = no shoulder.
    #[serde(default)]
    pub shoulder_length: f64,
    /// Radius from the axis to the cannelure groove floor.
    #[serde(default)]
    pub cannelure_radius: f64,
    /// Axial extent of the cannelure; either value `0` = no cannelure.
    #[serde(default)]
    pub cannelure_length: f64,
    /// Length of the parallel body section between ogive and rear; `0` = none.
    #[serde(default)]
    pub straight_length: f64,
    /// Axial length of the boat tail; `0` = no boat tail.
    #[serde(default)]
    pub boat_tail_length: f64,
    /// Rear radius of a radius-specified boat tail.
    #[serde(default)]
    pub boat_tail_radius: Option<f64>,
    /// Taper angle (degrees from horizontal) of an angle-specified boat tail.
    #[serde(default)]
    pub boat_tail_angle: Option<f64>,
    /// Parametric sample count for the arc and ogive curves.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
}

fn default_resolution() -> u32 {
    1000
}

impl ProfileParameters {
    /// Creates parameters for a plain solid blunted ogive, with every
    /// optional feature switched off and the default resolution.
    #[must_use]
    pub fn new(base_radius: f64, tip_radius: f64) -> Self {
        Self {
            base_radius,
            tip_radius,
            ogive_length: None,
            aspect_ratio: None,
            wall_thickness: 0.0,
            shoulder_radius: 0.0,
            shoulder_length: 0.0,
            cannelure_radius: 0.0,
            cannelure_length: 0.0,
            straight_length: 0.0,
            boat_tail_length: 0.0,
            boat_tail_radius: None,
            boat_tail_angle: None,
            resolution: default_resolution(),
        }
    }

    /// Resolves the ogive length, deriving it from the aspect ratio when not
    /// given directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingOgiveLength`] when neither
    /// `ogive_length` nor `aspect_ratio` is supplied.
    pub fn resolved_ogive_length(&self) -> Result<f64> {
        if let Some(length) = self.ogive_length {
            return Ok(length);
        }
        if let Some(ar) = self.aspect_ratio {
            return Ok(ar * 2.0 * self.base_radius);
        }
        Err(ConfigurationError::MissingOgiveLength.into())
    }

    /// Resolves the boat-tail mode from the raw fields.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::BoatTailOverconstrained`] when both a radius
    ///   and an angle are supplied.
    /// - [`ConfigurationError::BoatTailUnderconstrained`] when the length is
    ///   nonzero but neither radius nor angle is supplied.
    pub fn boat_tail(&self) -> Result<BoatTail> {
        match (self.boat_tail_radius, self.boat_tail_angle) {
            (Some(_), Some(_)) => Err(ConfigurationError::BoatTailOverconstrained.into()),
            _ if self.boat_tail_length == 0.0 => Ok(BoatTail::None),
            (Some(radius), None) => Ok(BoatTail::Radius {
                length: self.boat_tail_length,
                radius,
            }),
            (None, Some(degrees)) => Ok(BoatTail::Angle {
                length: self.boat_tail_length,
                degrees,
            }),
            (None, None) => Err(ConfigurationError::BoatTailUnderconstrained.into()),
        }
    }

    /// Validates every field before a build.
    ///
    /// The tangency feasibility conditions are *not* checked here; those are
    /// domain errors raised by the solver itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] for non-finite or negative values,
    /// a resolution below 2, an inconsistent boat tail, or a missing ogive
    /// length.
    pub fn validate(&self) -> Result<()> {
        check_positive("base_radius", self.base_radius)?;
        check_non_negative("tip_radius", self.tip_radius)?;
        check_non_negative("wall_thickness", self.wall_thickness)?;
        check_non_negative("shoulder_radius", self.shoulder_radius)?;
        check_non_negative("shoulder_length", self.shoulder_length)?;
        check_non_negative("cannelure_radius", self.cannelure_radius)?;
        check_non_negative("cannelure_length", self.cannelure_length)?;
        check_non_negative("straight_length", self.straight_length)?;
        check_non_negative("boat_tail_length", self.boat_tail_length)?;
        if let Some(radius) = self.boat_tail_radius {
            check_non_negative("boat_tail_radius", radius)?;
        }
        if let Some(degrees) = self.boat_tail_angle {
            check_range("boat_tail_angle", degrees, 0.0, 90.0)?;
        }
        if let Some(ar) = self.aspect_ratio {
            check_positive("aspect_ratio", ar)?;
        }
        check_positive("ogive_length", self.resolved_ogive_length()?)?;
        self.boat_tail()?;
        if self.resolution < 2 {
            return Err(ConfigurationError::ResolutionTooLow(self.resolution).into());
        }
        Ok(())
    }
}

fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFiniteParameter { parameter, value }.into())
    }
}

fn check_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value < 0.0 {
        return Err(ConfigurationError::NegativeParameter { parameter, value }.into());
    }
    Ok(())
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value <= 0.0 {
        return Err(ConfigurationError::NonPositiveParameter { parameter, value }.into());
    }
    Ok(())
}

fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value < min || value >= max {
        return Err(ConfigurationError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}
