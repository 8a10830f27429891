// Copyright 2025 Lars Brubaker
// License: MIT
//
// Boundary edge extraction.
//
// An edge is on the boundary when exactly one triangle uses it. The fallback
// needs each such edge together with that triangle.

use hashbrown::HashMap;

use crate::geom::Edge;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryEdgeSet {
    /// Edges oriented as they appear in their triangle.
    pub edges: Vec<Edge>,
    /// The single triangle adjacent to each edge.
    pub edge_to_tri: Vec<u32>,
}

impl BoundaryEdgeSet {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Collects the boundary of a flat triangle index array, ordered by triangle
/// then by corner. Edges shared by two or more triangles are interior (or
/// non-manifold) and are left out.
pub fn boundary_edges(triangles: &[u32]) -> BoundaryEdgeSet {
    // undirected key -> (use count, first directed edge, its triangle)
    let mut uses: HashMap<(u32, u32), (u32, Edge, u32)> = HashMap::new();
    let mut order: Vec<(u32, u32)> = Vec::new();

    for (t, tri) in triangles.chunks_exact(3).enumerate() {
        for k in 0..3 {
            let e = [tri[k], tri[(k + 1) % 3]];
            let key = (e[0].min(e[1]), e[0].max(e[1]));
            uses.entry(key)
                .and_modify(|u| u.0 += 1)
                .or_insert_with(|| {
                    order.push(key);
                    (1, e, t as u32)
                });
        }
    }

    let mut out = BoundaryEdgeSet::default();
    for key in order {
        if let Some(&(1, e, t)) = uses.get(&key) {
            out.edges.push(e);
            out.edge_to_tri.push(t);
        }
    }
    out
}
