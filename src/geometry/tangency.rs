use crate::error::{GeometryDomainError, Result};

/// Derived scalars of the blunted-nose tangent-circle solve.
///
/// Purely a function of `(base_radius, ogive_length, tip_radius,
/// ogive_radius)`; recomputed whenever the parameters change, never
/// mutated independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangencyGeometry {
    /// X-coordinate of the nose-sphere center (the sphere sits on the axis).
    pub x0: f64,
    /// X-coordinate of the tangency point between nose arc and ogive body.
    pub xt: f64,
    /// Y-coordinate of the tangency point.
    pub yt: f64,
    /// X-coordinate of the apex, the foremost point of the blunted nose.
    pub xa: f64,
}

/// Ogive radius `rho` of the tangent circle whose arc forms the body curve.
#[must_use]
pub fn ogive_radius(base_radius: f64, ogive_length: f64) -> f64 {
    (base_radius * base_radius + ogive_length * ogive_length) / (2.0 * base_radius)
}

/// Solves the spherically-blunted tangent-ogive tangency equations.
///
/// ```text
/// x0 = gamma - sqrt((rho-rn)^2 - (rho-beta)^2)
/// yt = rn*(rho-beta)/(rho-rn)
/// xt = x0 - sqrt(rn^2 - yt^2)
/// xa = x0 - rn
/// ```
///
/// with `beta = base_radius`, `gamma = ogive_length`, `rn = tip_radius`,
/// `rho = ogive_radius`.
///
/// # Errors
///
/// Returns [`GeometryDomainError::NegativeRadicand`] when
/// `(rho-rn)^2 < (rho-beta)^2` or `rn^2 < yt^2`, and likewise when
/// `rho <= tip_radius` or `rho <= base_radius`: the requested
/// tip/base/ogive combination has no valid blunting.
pub fn solve(
    base_radius: f64,
    ogive_length: f64,
    tip_radius: f64,
    ogive_radius: f64,
) -> Result<TangencyGeometry> {
    let beta = base_radius;
    let gamma = ogive_length;
    let rn = tip_radius;
    let rho = ogive_radius;

    // The tangent circle must clear both the nose sphere and the base;
    // outside that regime the radicands lose their meaning even when they
    // happen to be positive.
    if rho <= rn || rho <= beta {
        return Err(GeometryDomainError::NegativeRadicand {
            base_radius,
            tip_radius,
            ogive_length,
            ogive_radius,
        }
        .into());
    }

    let center_radicand = (rho - rn).powi(2) - (rho - beta).powi(2);
    if center_radicand < 0.0 {
        return Err(GeometryDomainError::NegativeRadicand {
            base_radius,
            tip_radius,
            ogive_length,
            ogive_radius,
        }
        .into());
    }
    let x0 = gamma - center_radicand.sqrt();
    let yt = rn * (rho - beta) / (rho - rn);

    let tangent_radicand = rn * rn - yt * yt;
    if tangent_radicand < 0.0 {
        return Err(GeometryDomainError::NegativeRadicand {
            base_radius,
            tip_radius,
            ogive_length,
            ogive_radius,
        }
        .into());
    }
    let xt = x0 - tangent_radicand.sqrt();
    let xa = x0 - rn;

    Ok(TangencyGeometry { x0, xt, yt, xa })
}
