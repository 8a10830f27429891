// Copyright 2025 Lars Brubaker
// License: MIT
//
// Public entry points: validation, the sweep, and the boundary fallback.

use tracing::{debug, warn};

use crate::boundary::{boundary_edges, BoundaryEdgeSet};
use crate::error::{LocateError, LocateResult};
use crate::fallback::{assign_nearest, BoundaryEdges};
use crate::geom::{BarycentricTest, Edge, Real, TrianglePredicate, Uv};
use crate::sweep::{sweep, Location};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LocateOption {
    /// Run the nearest-boundary fallback on points the sweep missed (default on).
    ResolveMissing,
    /// Leave `Location::barycentrics` empty (default off).
    SkipBarycentrics,
}

// ─────────────────────────────── Validation ────────────────────────────────────

fn check_vertices(uvs: &[Uv]) -> LocateResult<()> {
    match uvs.iter().position(|p| !p[0].is_finite() || !p[1].is_finite()) {
        Some(index) => Err(LocateError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

fn check_queries(query: &[Uv]) -> LocateResult<()> {
    match query.iter().position(|p| !p[0].is_finite() || !p[1].is_finite()) {
        Some(index) => Err(LocateError::NonFiniteQuery { index }),
        None => Ok(()),
    }
}

fn check_indices<'a>(indices: impl IntoIterator<Item = &'a u32>, vertex_count: usize) -> LocateResult<()> {
    for &index in indices {
        if index as usize >= vertex_count {
            return Err(LocateError::VertexIndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

fn check_triangulation(uvs: &[Uv], triangles: &[u32]) -> LocateResult<()> {
    if triangles.len() % 3 != 0 {
        return Err(LocateError::TriangleIndexCount(triangles.len()));
    }
    check_indices(triangles, uvs.len())?;
    check_vertices(uvs)
}

fn check_edges(uvs: &[Uv], edges: &[Edge], edge_to_tri: &[u32]) -> LocateResult<()> {
    if edges.len() != edge_to_tri.len() {
        return Err(LocateError::EdgeTriangleMismatch {
            edges: edges.len(),
            triangles: edge_to_tri.len(),
        });
    }
    check_indices(edges.iter().flatten(), uvs.len())
}

// ─────────────────────────────── Free functions ────────────────────────────────

/// Finds the containing triangle and barycentrics of every query point.
///
/// `triangles` is a flat array of vertex index triples into `uvs`. Points no
/// triangle contains are listed in `Location::missing` and left
/// `UNRESOLVED`; pass them to [`resolve_missing`] for a best-effort answer.
pub fn locate_points(query: &[Uv], uvs: &[Uv], triangles: &[u32]) -> LocateResult<Location> {
    locate_points_with(query, uvs, triangles, &BarycentricTest::default())
}

/// [`locate_points`] with a caller-supplied containment predicate.
pub fn locate_points_with<P: TrianglePredicate + ?Sized>(
    query: &[Uv],
    uvs: &[Uv],
    triangles: &[u32],
    predicate: &P,
) -> LocateResult<Location> {
    check_triangulation(uvs, triangles)?;
    check_queries(query)?;
    Ok(sweep(query, uvs, triangles, predicate, true))
}

/// Gives every query point listed in `missing` the triangle adjacent to its
/// nearest boundary edge, updating `triangles_for_point` in place.
///
/// `edge_to_tri[i]` is the triangle on the inside of `edges[i]`. With a
/// `tolerance`, points farther than that from the boundary keep their old
/// entry and are returned; without one the returned list is always empty.
pub fn resolve_missing(
    query: &[Uv],
    uvs: &[Uv],
    edges: &[Edge],
    missing: &[u32],
    edge_to_tri: &[u32],
    triangles_for_point: &mut [u32],
    tolerance: Option<Real>,
) -> LocateResult<Vec<u32>> {
    if triangles_for_point.len() != query.len() {
        return Err(LocateError::OutputLength {
            expected: query.len(),
            actual: triangles_for_point.len(),
        });
    }
    check_edges(uvs, edges, edge_to_tri)?;
    check_vertices(uvs)?;
    for &index in missing {
        let Some(p) = query.get(index as usize) else {
            return Err(LocateError::QueryIndexOutOfRange {
                index,
                query_count: query.len(),
            });
        };
        if !p[0].is_finite() || !p[1].is_finite() {
            return Err(LocateError::NonFiniteQuery {
                index: index as usize,
            });
        }
    }
    if missing.is_empty() {
        return Ok(Vec::new());
    }
    if edges.is_empty() {
        return Err(LocateError::NoBoundaryEdges);
    }

    let boundary = BoundaryEdges::new(uvs, edges);
    Ok(assign_nearest(
        query,
        &boundary,
        edge_to_tri,
        missing,
        triangles_for_point,
        tolerance,
    ))
}

// ─────────────────────────────── Locator ───────────────────────────────────────

/// A triangulation prepared for repeated batch lookups.
///
/// Holds the vertices, triangles and boundary edges; every call to
/// [`Locator::locate`] runs a fresh sweep and, unless disabled, the boundary
/// fallback.
pub struct Locator<P = BarycentricTest> {
    uvs: Vec<Uv>,
    triangles: Vec<u32>,
    boundary: BoundaryEdgeSet,
    boundary_geom: BoundaryEdges,
    predicate: P,
    resolve_missing: bool,
    keep_barycentrics: bool,
    tolerance: Option<Real>,
}

impl Locator<BarycentricTest> {
    /// Validates the triangulation and extracts its boundary.
    pub fn new(uvs: Vec<Uv>, triangles: Vec<u32>) -> LocateResult<Self> {
        Self::with_predicate(uvs, triangles, BarycentricTest::default())
    }
}

impl<P: TrianglePredicate> Locator<P> {
    pub fn with_predicate(uvs: Vec<Uv>, triangles: Vec<u32>, predicate: P) -> LocateResult<Self> {
        check_triangulation(&uvs, &triangles)?;
        let boundary = boundary_edges(&triangles);
        let boundary_geom = BoundaryEdges::new(&uvs, &boundary.edges);
        debug!(
            vertices = uvs.len(),
            triangles = triangles.len() / 3,
            boundary_edges = boundary.len(),
            "Prepared locator"
        );
        Ok(Locator {
            uvs,
            triangles,
            boundary,
            boundary_geom,
            predicate,
            resolve_missing: true,
            keep_barycentrics: true,
            tolerance: None,
        })
    }

    /// Replaces the derived boundary with one supplied by the caller, e.g.
    /// seams of a UV layout that are not topological borders.
    pub fn with_boundary(mut self, edges: Vec<Edge>, edge_to_tri: Vec<u32>) -> LocateResult<Self> {
        check_edges(&self.uvs, &edges, &edge_to_tri)?;
        let triangle_count = self.triangle_count();
        if let Some(&index) = edge_to_tri.iter().find(|&&t| t as usize >= triangle_count) {
            return Err(LocateError::TriangleOutOfRange {
                index,
                triangle_count,
            });
        }
        self.boundary_geom = BoundaryEdges::new(&self.uvs, &edges);
        self.boundary = BoundaryEdgeSet { edges, edge_to_tri };
        Ok(self)
    }

    pub fn set_option(&mut self, option: LocateOption, value: bool) {
        match option {
            LocateOption::ResolveMissing => self.resolve_missing = value,
            LocateOption::SkipBarycentrics => self.keep_barycentrics = !value,
        }
    }

    /// Maximum distance the fallback may reach. `None` assigns every point.
    pub fn set_fallback_tolerance(&mut self, tolerance: Option<Real>) {
        self.tolerance = tolerance;
    }

    pub fn vertices(&self) -> &[Uv] {
        &self.uvs
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn boundary(&self) -> &BoundaryEdgeSet {
        &self.boundary
    }

    /// Locates a batch of query points.
    ///
    /// Missing points are assigned by the fallback when `ResolveMissing` is
    /// on. Those beyond the tolerance, or all of them when the triangulation
    /// has no boundary, are listed in `Location::unresolved`.
    pub fn locate(&self, query: &[Uv]) -> LocateResult<Location> {
        check_queries(query)?;
        let mut location = sweep(
            query,
            &self.uvs,
            &self.triangles,
            &self.predicate,
            self.keep_barycentrics,
        );
        if !self.resolve_missing || location.missing.is_empty() {
            return Ok(location);
        }

        if self.boundary_geom.is_empty() {
            warn!(
                count = location.missing.len(),
                "No boundary edges; missing points stay unresolved"
            );
            location.unresolved = location.missing.clone();
            return Ok(location);
        }

        location.unresolved = assign_nearest(
            query,
            &self.boundary_geom,
            &self.boundary.edge_to_tri,
            &location.missing,
            &mut location.triangles,
            self.tolerance,
        );
        Ok(location)
    }
}
