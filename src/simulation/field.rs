//! Spacetime warp field sampled over a 2D lattice
//!
//! The warp at a point is a potential-like sum `-k * m / d` over all bodies.
//! Bodies within [`EXCLUSION_RADIUS`] of the query point contribute nothing.
//! Sampling only reads body state.

use crate::simulation::states::{Body, NVec2};

/// Bodies at or closer than this distance to a sample point are skipped
pub const EXCLUSION_RADIUS: f64 = 0.05;

/// One derived sample of the warp field; recomputed on demand, never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub point: NVec2,
    pub warp: f64,
}

/// Scalar warp field with scale constant `k`
#[derive(Debug, Clone, Copy)]
pub struct WarpField {
    pub scale: f64, // k
}

impl WarpField {
    /// Warp at `point` from every body not within the exclusion radius
    pub fn warp_at(&self, point: &NVec2, bodies: &[Body]) -> f64 {
        let mut warp = 0.0;
        for body in bodies {
            let d = (point - body.x).norm();
            // strict: a body at exactly the exclusion radius is skipped
            if d > EXCLUSION_RADIUS {
                warp += -self.scale * body.mass() / d;
            }
        }
        warp
    }

    pub fn sample(&self, point: NVec2, bodies: &[Body]) -> GridSample {
        GridSample {
            point,
            warp: self.warp_at(&point, bodies),
        }
    }
}

/// Square lattice over `[-extent, extent]^2` with `half_lines` lines on each
/// side of the axes, i.e. `2 * half_lines + 1` lines per direction
#[derive(Debug, Clone, Copy)]
pub struct SpacetimeGrid {
    pub half_lines: u32,
    pub extent: f64,
}

impl Default for SpacetimeGrid {
    fn default() -> Self {
        Self {
            half_lines: 20,
            extent: 1.0,
        }
    }
}

impl SpacetimeGrid {
    /// Coordinate of line `i` in `-half_lines..=half_lines`
    fn coord(&self, i: i64) -> f64 {
        if self.half_lines == 0 {
            return 0.0;
        }
        i as f64 * self.extent / self.half_lines as f64
    }

    fn line_indices(&self) -> impl Iterator<Item = i64> {
        let n = i64::from(self.half_lines);
        -n..=n
    }

    /// Number of lattice points
    pub fn point_count(&self) -> usize {
        let per_axis = 2 * self.half_lines as usize + 1;
        per_axis * per_axis
    }

    /// Lattice points, row by row from `(-extent, -extent)`
    pub fn points(&self) -> Vec<NVec2> {
        let mut points = Vec::with_capacity(self.point_count());
        for j in self.line_indices() {
            let y = self.coord(j);
            for i in self.line_indices() {
                points.push(NVec2::new(self.coord(i), y));
            }
        }
        points
    }

    /// Endpoint pairs of every vertical and horizontal grid line
    pub fn line_vertices(&self) -> Vec<(NVec2, NVec2)> {
        let e = self.extent;
        let mut lines = Vec::with_capacity(2 * (2 * self.half_lines as usize + 1));
        for i in self.line_indices() {
            let t = self.coord(i);
            // vertical line x = t
            lines.push((NVec2::new(t, -e), NVec2::new(t, e)));
            // horizontal line y = t
            lines.push((NVec2::new(-e, t), NVec2::new(e, t)));
        }
        lines
    }

    /// Warp at every lattice point
    pub fn sample(&self, bodies: &[Body], field: &WarpField) -> Vec<GridSample> {
        self.points()
            .into_iter()
            .map(|p| field.sample(p, bodies))
            .collect()
    }
}
