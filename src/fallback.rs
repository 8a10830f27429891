// Copyright 2025 Lars Brubaker
// License: MIT
//
// Nearest-boundary-edge fallback for points the sweep could not place.
//
// Each unresolved point is projected onto every boundary edge (clamped to the
// segment) and handed the triangle adjacent to the closest one. This is a
// brute-force scan over the boundary; boundaries are short and misses rare.

use tracing::{debug, warn};

use crate::geom::{segment_dist2, Edge, Real, Uv};

/// Suggested maximum fallback distance, in UV units.
pub const DEFAULT_FALLBACK_TOLERANCE: Real = 1.0;

/// Boundary edges in the form the distance scan wants: start point,
/// direction, squared length.
pub struct BoundaryEdges {
    starts: Vec<Uv>,
    dirs: Vec<Uv>,
    lens2: Vec<Real>,
}

impl BoundaryEdges {
    /// Edge vertex indices must be in range for `uvs`.
    pub fn new(uvs: &[Uv], edges: &[Edge]) -> Self {
        let mut starts = Vec::with_capacity(edges.len());
        let mut dirs = Vec::with_capacity(edges.len());
        let mut lens2 = Vec::with_capacity(edges.len());
        for e in edges {
            let a = uvs[e[0] as usize];
            let b = uvs[e[1] as usize];
            let d = [b[0] - a[0], b[1] - a[1]];
            starts.push(a);
            dirs.push(d);
            lens2.push(d[0] * d[0] + d[1] * d[1]);
        }
        BoundaryEdges {
            starts,
            dirs,
            lens2,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Index of the edge closest to `p` and its squared distance.
    /// Ties go to the lower index. Zero-length edges measure NaN and are
    /// never chosen over a real distance; if every edge is degenerate the
    /// result is edge 0 at `Real::MAX`. Returns `None` without edges.
    pub fn closest(&self, p: Uv) -> Option<(usize, Real)> {
        if self.is_empty() {
            return None;
        }
        let mut best = (0, Real::MAX);
        for i in 0..self.len() {
            let d2 = segment_dist2(p, self.starts[i], self.dirs[i], self.lens2[i]);
            if d2 < best.1 {
                best = (i, d2);
            }
        }
        Some(best)
    }
}

/// Assigns each point in `missing` the triangle across its nearest boundary
/// edge, writing into `triangles`.
///
/// With a `tolerance`, points farther than it from every edge are left as
/// they are and returned. Inputs must already be validated; `edges` must be
/// non-empty when `missing` is.
pub fn assign_nearest(
    query: &[Uv],
    edges: &BoundaryEdges,
    edge_to_tri: &[u32],
    missing: &[u32],
    triangles: &mut [u32],
    tolerance: Option<Real>,
) -> Vec<u32> {
    let limit2 = tolerance.map(|t| t * t);
    let mut rejected = Vec::new();

    for &q in missing {
        let Some((edge, d2)) = edges.closest(query[q as usize]) else {
            rejected.push(q);
            continue;
        };
        if limit2.is_some_and(|l| d2 > l) {
            rejected.push(q);
            continue;
        }
        triangles[q as usize] = edge_to_tri[edge];
    }

    debug!(
        missing = missing.len(),
        edges = edges.len(),
        assigned = missing.len() - rejected.len(),
        "Fallback complete"
    );
    if !rejected.is_empty() {
        warn!(
            count = rejected.len(),
            tolerance = tolerance.unwrap_or(Real::INFINITY),
            "Points left unresolved beyond fallback tolerance"
        );
    }
    rejected
}
