//! Field generation.

use ndarray::{Array3, s};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::pressure::PressurePoint;

/// One time step's scalar field on an S×S×S grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbulenceField {
    /// Time value the field was generated for.
    pub time_step: f64,
    /// Cell values indexed `[x, y, z]`.
    pub values: Array3<f64>,
}

impl TurbulenceField {
    /// Grid side length.
    pub fn size(&self) -> usize {
        self.values.shape()[0]
    }

    /// Flatten into coordinate and value lists, x slowest and z fastest.
    pub fn point_cloud(&self) -> PointCloud {
        let n = self.values.len();
        let mut cloud = PointCloud {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        };
        for ((x, y, z), &v) in self.values.indexed_iter() {
            cloud.x.push(x);
            cloud.y.push(y);
            cloud.z.push(z);
            cloud.values.push(v);
        }
        cloud
    }

    /// Minimum, maximum and mean of the cell values.
    pub fn stats(&self) -> FieldStats {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        FieldStats {
            min,
            max,
            mean: self.values.mean().unwrap_or(0.0),
        }
    }
}

/// Summary statistics of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

/// A field flattened for scatter plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// X indices.
    pub x: Vec<usize>,
    /// Y indices.
    pub y: Vec<usize>,
    /// Z indices.
    pub z: Vec<usize>,
    /// Cell values.
    pub values: Vec<f64>,
}

impl PointCloud {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generates noise fields and perturbs them around fixed pressure points.
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    size: usize,
    pressure_points: Vec<PressurePoint>,
}

impl FieldGenerator {
    /// Create a generator for an S×S×S grid.
    pub fn new(size: usize, pressure_points: Vec<PressurePoint>) -> Self {
        Self {
            size,
            pressure_points,
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The pressure points applied by [`perturb`](Self::perturb).
    pub fn pressure_points(&self) -> &[PressurePoint] {
        &self.pressure_points
    }

    /// Independent standard-normal samples, drawn in row-major order.
    pub fn noise<R: Rng + ?Sized>(&self, rng: &mut R) -> Array3<f64> {
        let s = self.size;
        Array3::from_shape_fn((s, s, s), |_| rng.sample(StandardNormal))
    }

    /// Add `intensity × time_step` to each pressure point's box.
    ///
    /// Boxes are clipped to the grid, overlapping boxes accumulate and
    /// out-of-range points are skipped silently.
    pub fn perturb(&self, values: &mut Array3<f64>, time_step: f64) {
        for p in &self.pressure_points {
            let [xr, yr, zr] = p.box_ranges(self.size);
            let delta = p.intensity * time_step;
            values
                .slice_mut(s![xr, yr, zr])
                .mapv_inplace(|v| v + delta);
        }
    }

    /// Generate the field for one time step.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn generate<R: Rng + ?Sized>(&self, time_step: f64, rng: &mut R) -> TurbulenceField {
        let mut values = self.noise(rng);
        self.perturb(&mut values, time_step);
        let field = TurbulenceField { time_step, values };
        debug!(stats = ?field.stats(), "generated field");
        field
    }
}
