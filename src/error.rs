use thiserror::Error;

/// Top-level error type for the ogival profile kernel.
#[derive(Debug, Error)]
pub enum OgivalError {
    #[error(transparent)]
    Geometry(#[from] GeometryDomainError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatchError),
}

/// The requested shape has no valid geometric solution.
///
/// Never retried: the pipeline is deterministic, so identical inputs
/// reproduce the same failure.
#[derive(Debug, Error)]
pub enum GeometryDomainError {
    #[error(
        "negative radicand in tangent-circle solve: base_radius={base_radius}, \
         tip_radius={tip_radius}, ogive_length={ogive_length}, ogive_radius={ogive_radius}"
    )]
    NegativeRadicand {
        base_radius: f64,
        tip_radius: f64,
        ogive_length: f64,
        ogive_radius: f64,
    },

    #[error("wall offset produced invalid topology: {0}")]
    OffsetTopology(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Mutually exclusive, missing, or out-of-range input parameters.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("parameter {parameter} = {value} must be non-negative")]
    NegativeParameter { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} must be positive")]
    NonPositiveParameter { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is not finite")]
    NonFiniteParameter { parameter: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("resolution {0} is too low; at least 2 samples are required")]
    ResolutionTooLow(u32),

    #[error("boat tail accepts either a radius or an angle, not both")]
    BoatTailOverconstrained,

    #[error("boat tail length is nonzero but neither radius nor angle was supplied")]
    BoatTailUnderconstrained,

    #[error("either ogive_length or aspect_ratio must be supplied")]
    MissingOgiveLength,
}

/// A collaborator received a point matrix that is not N×2.
#[derive(Debug, Error)]
#[error("point row {row} has {width} columns, expected 2")]
pub struct ShapeMismatchError {
    pub row: usize,
    pub width: usize,
}

/// Convenience type alias for results using [`OgivalError`].
pub type Result<T> = std::result::Result<T, OgivalError>;
