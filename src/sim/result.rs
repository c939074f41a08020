use std::collections::BTreeMap;

use crate::sim::grid::{SamplePoint, SampleSurface};

/// A sample point with its computed illuminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldResult {
    pub point: SamplePoint,
    /// Illuminance in lux.
    pub lux: f64,
}

/// Summary figures over one result set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    /// Mean illuminance over all results.
    pub main: f64,
    /// Mean over body-top samples; 0 when the subset is absent.
    pub top: f64,
    /// Mean over body-side samples; 0 when the subset is absent.
    pub side: f64,
    /// Maximum illuminance over all results.
    pub peak: f64,
}

impl Stats {
    pub fn from_results(results: &[FieldResult]) -> Self {
        let of = |surface: SampleSurface| {
            mean(
                results
                    .iter()
                    .filter(|r| r.point.surface == surface)
                    .map(|r| r.lux),
            )
        };
        Self {
            main: mean(results.iter().map(|r| r.lux)),
            top: of(SampleSurface::BodyTop),
            side: of(SampleSurface::BodySide),
            peak: results.iter().map(|r| r.lux).fold(0.0, f64::max),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Column means of the floor grid along the width axis, keyed by the x
/// coordinate rounded to the nearest centimeter. Backs the section view.
pub fn floor_profile(results: &[FieldResult]) -> Vec<(f64, f64)> {
    profile(results, SampleSurface::Floor, |p| p.position.x)
}

/// Row means of the body-side grid along the height axis, keyed by the y
/// coordinate rounded to the nearest centimeter.
pub fn side_profile(results: &[FieldResult]) -> Vec<(f64, f64)> {
    profile(results, SampleSurface::BodySide, |p| p.position.y)
}

fn profile(
    results: &[FieldResult],
    surface: SampleSurface,
    coord: impl Fn(&SamplePoint) -> f64,
) -> Vec<(f64, f64)> {
    let mut bins: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for r in results.iter().filter(|r| r.point.surface == surface) {
        let key = (coord(&r.point) * 100.0).round() as i64;
        let bin = bins.entry(key).or_insert((0.0, 0));
        bin.0 += r.lux;
        bin.1 += 1;
    }
    bins.into_iter()
        .map(|(key, (sum, n))| (key as f64 / 100.0, sum / n as f64))
        .collect()
}
