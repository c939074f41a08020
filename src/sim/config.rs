use serde::{Deserialize, Serialize};

/// Sampling mode for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalcMode {
    /// One work-plane grid spanning the whole floor.
    Floor,
    /// Top and west-side grids of the inspected body.
    Body,
}

/// Contribution formula used by the photometric evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotometricModel {
    /// Inverse-square with emission and incidence cosine correction and a
    /// peak intensity of lumens / pi (hemispherical Lambertian emitter).
    #[default]
    DualCosine,
    /// Deprecated. Incidence cosine only, intensity lumens / (4 pi), with an
    /// empirical x10 multiplier. Reproduces figures from older project
    /// revisions; do not use for new work and do not mix with `DualCosine`.
    LegacySingleCosine,
}
