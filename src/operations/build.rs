use tracing::debug;

use crate::error::Result;
use crate::geometry::{
    tangency, AssembledProfile, ProfileCurve, ProfileParameters, TangencyGeometry,
};
use crate::math::polyline_2d::dedup_consecutive;
use crate::math::{Point2, TOLERANCE};
use crate::operations::segments::{
    append_boat_tail, append_cannelure, append_shoulder, append_straight,
};
use crate::operations::wall_offset::WallOffset2D;

use super::assemble::assemble_profile;

/// Everything produced by one pipeline run.
///
/// Immutable once built; changing a parameter means rebuilding from a new
/// [`ProfileParameters`].
#[derive(Debug, Clone)]
pub struct BuiltProfile {
    /// The parameters the build ran with.
    pub parameters: ProfileParameters,
    /// Resolved ogive length (possibly derived from the aspect ratio).
    pub ogive_length: f64,
    /// Ogive radius `rho` of the tangent circle.
    pub ogive_radius: f64,
    /// Tangent-circle solve results.
    pub tangency: TangencyGeometry,
    /// Outer generator curve, apex to rear.
    pub outer: ProfileCurve,
    /// Inner surface curve; present only for hollow profiles.
    pub inner: Option<ProfileCurve>,
    /// The closed ring handed to exporters.
    pub profile: AssembledProfile,
}

/// Runs the profile pipeline: solve → sample → append → offset → assemble.
///
/// Each stage is a pure function passing an immutable curve forward; there
/// is no mid-pipeline error recovery — any failure aborts the build and no
/// partial profile is returned. Rebuilding with identical parameters
/// reproduces the same profile point-for-point.
#[derive(Debug)]
pub struct ProfileBuilder {
    parameters: ProfileParameters,
}

impl ProfileBuilder {
    /// Creates a builder for the given parameters.
    #[must_use]
    pub fn new(parameters: ProfileParameters) -> Self {
        Self { parameters }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// - [`crate::error::ConfigurationError`] from parameter validation.
    /// - [`crate::error::GeometryDomainError`] from the tangency solve or
    ///   the wall offset.
    pub fn build(&self) -> Result<BuiltProfile> {
        let p = &self.parameters;
        p.validate()?;

        let ogive_length = p.resolved_ogive_length()?;
        let rho = tangency::ogive_radius(p.base_radius, ogive_length);
        let geo = tangency::solve(p.base_radius, ogive_length, p.tip_radius, rho)?;
        debug!(
            x0 = geo.x0,
            xt = geo.xt,
            yt = geo.yt,
            xa = geo.xa,
            rho,
            "tangent-circle solve"
        );

        let mut points: Vec<Point2> =
            crate::sampling::sample_nose_arc(&geo, p.tip_radius, p.resolution).collect();
        points.extend(crate::sampling::sample_ogive(
            p.base_radius,
            ogive_length,
            rho,
            geo.xt,
            p.resolution,
        ));
        let body = ProfileCurve::new(dedup_consecutive(&points, TOLERANCE));
        debug!(points = body.len(), "outer body curve sampled");

        let outer = append_straight(body, p.straight_length);
        let outer = append_cannelure(outer, p.cannelure_radius, p.cannelure_length);
        let outer = append_boat_tail(outer, &p.boat_tail()?);
        let outer = append_shoulder(
            outer,
            p.shoulder_radius,
            p.shoulder_length,
            p.wall_thickness,
        );
        debug!(points = outer.len(), "segments appended");

        // Solid and hollow are first-class branches: no inner curve object
        // exists at all for a solid profile.
        let inner = if p.wall_thickness > 0.0 {
            let inner = WallOffset2D::new(&outer, p.wall_thickness).execute()?;
            debug!(points = inner.len(), "inner surface offset");
            Some(inner)
        } else {
            None
        };

        let profile = assemble_profile(&outer, inner.as_ref())?;
        debug!(
            points = profile.len(),
            closed = profile.is_closed(),
            "profile assembled"
        );

        Ok(BuiltProfile {
            parameters: p.clone(),
            ogive_length,
            ogive_radius: rho,
            tangency: geo,
            outer,
            inner,
            profile,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, GeometryDomainError, OgivalError};
    use crate::math::polyline_2d::is_x_non_decreasing;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn bullet_params() -> ProfileParameters {
        ProfileParameters {
            aspect_ratio: Some(4.0),
            resolution: 200,
            ..ProfileParameters::new(33.0, 10.0)
        }
    }

    fn nosecone_params() -> ProfileParameters {
        ProfileParameters {
            ogive_length: Some(160.0),
            wall_thickness: 1.5,
            shoulder_radius: 18.0,
            shoulder_length: 38.0,
            resolution: 200,
            ..ProfileParameters::new(20.0, 5.0)
        }
    }

    #[test]
    fn solid_build_has_no_inner_surface() {
        init_tracing();
        let built = ProfileBuilder::new(bullet_params()).build().unwrap();
        assert!(built.inner.is_none());
        // Closed outer curve: outer + base vertex + closing repeat.
        assert_eq!(built.profile.len(), built.outer.len() + 2);
        assert_eq!(
            &built.profile.points()[..built.outer.len()],
            built.outer.points()
        );
        assert!(built.profile.is_closed());
    }

    #[test]
    fn outer_curve_is_monotone_and_above_axis() {
        let built = ProfileBuilder::new(bullet_params()).build().unwrap();
        assert!(is_x_non_decreasing(built.outer.points(), 1e-9));
        for p in built.outer.points() {
            assert!(p.y >= -1e-9, "negative radius at ({}, {})", p.x, p.y);
        }
    }

    #[test]
    fn outer_curve_starts_at_apex() {
        let built = ProfileBuilder::new(bullet_params()).build().unwrap();
        let first = built.outer.points()[0];
        assert!((first.x - built.tangency.xa).abs() < 1e-9);
        assert!(first.y.abs() < 1e-9);
    }

    #[test]
    fn build_is_idempotent() {
        let a = ProfileBuilder::new(bullet_params()).build().unwrap();
        let b = ProfileBuilder::new(bullet_params()).build().unwrap();
        assert_eq!(a.profile.points(), b.profile.points());
        assert_eq!(a.outer.points(), b.outer.points());
    }

    #[test]
    fn hollow_build_produces_trimmed_inner_surface() {
        init_tracing();
        let built = ProfileBuilder::new(nosecone_params()).build().unwrap();
        let inner = built.inner.as_ref().unwrap();
        assert!(inner.len() >= 2);
        for p in inner.points() {
            assert!(p.y >= 0.0, "inner point below axis: ({}, {})", p.x, p.y);
        }
        // Inner surface stays inside the outer envelope.
        let outer_max_x = built.outer.last().unwrap().x;
        for p in inner.points() {
            assert!(p.x <= outer_max_x + 1e-9);
        }
        assert!(built.profile.is_closed());
    }

    #[test]
    fn hollow_ring_runs_outer_then_reversed_inner() {
        let built = ProfileBuilder::new(nosecone_params()).build().unwrap();
        let inner = built.inner.as_ref().unwrap();
        let ring = built.profile.points();
        // The ring visits the inner curve's rear end right after the outer
        // curve's rear end.
        let outer_last = built.outer.last().unwrap();
        let inner_last = inner.last().unwrap();
        let after_outer = ring[built.outer.len()];
        assert!((outer_last.x - ring[built.outer.len() - 1].x).abs() < 1e-9);
        assert!((after_outer.x - inner_last.x).abs() < 1e-9);
        assert!((after_outer.y - inner_last.y).abs() < 1e-9);
    }

    #[test]
    fn no_shoulder_appends_nothing() {
        let mut params = nosecone_params();
        params.shoulder_length = 0.0;
        params.wall_thickness = 0.0;
        let built = ProfileBuilder::new(params).build().unwrap();
        // No point sits at the shoulder radius.
        assert!(built
            .outer
            .points()
            .iter()
            .all(|p| (p.y - 18.0).abs() > 1e-9));
        assert_eq!(built.profile.len(), built.outer.len() + 2);
    }

    #[test]
    fn boat_tail_overconstrained_aborts() {
        let mut params = bullet_params();
        params.boat_tail_length = 2.0;
        params.boat_tail_radius = Some(1.0);
        params.boat_tail_angle = Some(9.0);
        let result = ProfileBuilder::new(params).build();
        assert!(matches!(
            result,
            Err(OgivalError::Configuration(
                ConfigurationError::BoatTailOverconstrained
            ))
        ));
    }

    #[test]
    fn infeasible_blunting_aborts() {
        // base=10, length=20 gives rho=25; tip_radius=30 >= rho.
        let params = ProfileParameters {
            ogive_length: Some(20.0),
            resolution: 100,
            ..ProfileParameters::new(10.0, 30.0)
        };
        let result = ProfileBuilder::new(params).build();
        assert!(matches!(
            result,
            Err(OgivalError::Geometry(
                GeometryDomainError::NegativeRadicand { .. }
            ))
        ));
    }

    #[test]
    fn bullet_with_all_rear_segments() {
        // M855-style profile in mm: straight body, cannelure, boat tail.
        let params = ProfileParameters {
            ogive_length: Some(12.35),
            straight_length: 6.83,
            cannelure_radius: 2.56,
            cannelure_length: 1.14,
            boat_tail_length: 2.79,
            boat_tail_radius: Some(2.28),
            resolution: 400,
            ..ProfileParameters::new(2.845, 0.37)
        };
        let built = ProfileBuilder::new(params).build().unwrap();
        assert!(built.profile.is_closed());
        assert!(is_x_non_decreasing(built.outer.points(), 1e-9));
        // Rear of the boat tail sits at the requested radius.
        let last = built.outer.last().unwrap();
        assert!((last.y - 2.28).abs() < 1e-9);
    }
}
