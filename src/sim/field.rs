use std::f64::consts::PI;

use anyhow::Result;
use log::debug;
use rayon::prelude::*;

use crate::Vector;
use crate::geom::room::RoomConfig;
use crate::sim::config::{CalcMode, PhotometricModel};
use crate::sim::fixture::{Fixture, LightInstance};
use crate::sim::grid::{SamplePoint, build_grid};
use crate::sim::result::{FieldResult, Stats};

/// Instances closer than this to a sample point are skipped, keeping the
/// field finite while fixtures and points coincide transiently during
/// editing.
pub const MIN_SOURCE_DISTANCE: f64 = 0.05;

/// Full output of one field computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutput {
    pub results: Vec<FieldResult>,
    pub stats: Stats,
}

/// Computes the photometric field for one immutable input snapshot.
///
/// The single entry point the editing layer calls on any input change; all
/// derived data is rebuilt from scratch. Room and fixture contracts are
/// checked up front so structural errors surface before any math runs.
pub fn compute_field(
    room: &RoomConfig,
    fixtures: &[Fixture],
    mode: CalcMode,
) -> Result<FieldOutput> {
    room.validate()?;
    for fixture in fixtures {
        fixture.validate()?;
    }

    let instances: Vec<LightInstance> = fixtures.iter().flat_map(|f| f.expand(room)).collect();
    let points = build_grid(mode, room);
    debug!(
        "evaluating {} sample points against {} instances from {} fixtures",
        points.len(),
        instances.len(),
        fixtures.len()
    );

    let results = evaluate(&points, &instances, PhotometricModel::default());
    let stats = Stats::from_results(&results);
    Ok(FieldOutput { results, stats })
}

/// Sums the illuminance at every sample point over every light instance.
///
/// Cost is O(points x instances); small pitch values inflate the instance
/// count, so callers should expect this product to dominate runtime. Points
/// are evaluated in parallel. Each per-point sum runs over instances in slice
/// order, so totals do not depend on scheduling.
pub fn evaluate(
    points: &[SamplePoint],
    instances: &[LightInstance],
    model: PhotometricModel,
) -> Vec<FieldResult> {
    points
        .par_iter()
        .map(|point| FieldResult {
            point: *point,
            lux: illuminance_at(point, instances, model),
        })
        .collect()
}

/// Direct point-by-point summation: E = (flux / pi) * cos(theta) * cos(phi) / d^2.
fn illuminance_at(
    point: &SamplePoint,
    instances: &[LightInstance],
    model: PhotometricModel,
) -> f64 {
    let mut total = 0.0;
    for inst in instances {
        let d = Vector::from_points(inst.position, point.position);
        let dist = d.length();
        if dist < MIN_SOURCE_DISTANCE {
            continue;
        }
        let dist_sq = dist * dist;
        let light_to_point = d * (1.0 / dist);
        // Incidence cosine at the receiving surface.
        let cos_phi = (light_to_point * -1.0).dot(point.normal).max(0.0);
        total += match model {
            PhotometricModel::DualCosine => {
                // Lambertian emission cosine at the fixture.
                let cos_theta = light_to_point.dot(inst.normal).max(0.0);
                inst.lumens / PI * cos_theta * cos_phi / dist_sq
            }
            PhotometricModel::LegacySingleCosine => {
                inst.lumens / (4.0 * PI) * cos_phi / dist_sq * 10.0
            }
        };
    }
    total
}
