// Copyright 2025 Lars Brubaker
// Small hand-checked lookups: single triangle, shared edge, outside points.

mod helpers;

use approx::assert_relative_eq;
use uv_query::{
    boundary_edges, locate_points, resolve_missing, Locator, Uv, UNRESOLVED,
};

const UNIT_TRI: [Uv; 3] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];

#[test]
fn interior_point_in_single_triangle() {
    let loc = locate_points(&[[0.25, 0.25]], &UNIT_TRI, &[0, 1, 2]).unwrap();
    assert_eq!(loc.triangle(0), Some(0));
    assert!(loc.missing.is_empty());
    let w = loc.barycentric(0).unwrap();
    assert_relative_eq!(w[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(w[1], 0.25, epsilon = 1e-12);
    assert_relative_eq!(w[2], 0.25, epsilon = 1e-12);
}

#[test]
fn barycentrics_follow_vertex_order() {
    // Same triangle listed starting from (1, 0).
    let loc = locate_points(&[[0.25, 0.25]], &UNIT_TRI, &[1, 2, 0]).unwrap();
    let w = loc.barycentric(0).unwrap();
    assert_relative_eq!(w[0], 0.25, epsilon = 1e-12);
    assert_relative_eq!(w[1], 0.25, epsilon = 1e-12);
    assert_relative_eq!(w[2], 0.5, epsilon = 1e-12);
}

#[test]
fn outside_point_is_missing_then_resolved() {
    let query = [[2.0, 2.0]];
    let tris = [0, 1, 2];
    let mut loc = locate_points(&query, &UNIT_TRI, &tris).unwrap();
    assert_eq!(loc.missing, vec![0]);
    assert_eq!(loc.triangles, vec![UNRESOLVED]);
    assert!(loc.barycentric(0).is_none());

    let b = boundary_edges(&tris);
    let rejected = resolve_missing(
        &query,
        &UNIT_TRI,
        &b.edges,
        &loc.missing,
        &b.edge_to_tri,
        &mut loc.triangles,
        None,
    )
    .unwrap();
    assert!(rejected.is_empty());
    assert_eq!(loc.triangles, vec![0]);
}

#[test]
fn shared_edge_point_resolves_consistently() {
    // Two triangles share the edge (1,0)-(0,1). Both boxes open at x = 0, so
    // triangle 0 is activated first and wins the tie.
    let uvs = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let tris = [0, 1, 2, 1, 3, 2];
    let query = [[0.5, 0.5]];
    let first = locate_points(&query, &uvs, &tris).unwrap();
    assert_eq!(first.triangle(0), Some(0));
    for _ in 0..5 {
        assert_eq!(locate_points(&query, &uvs, &tris).unwrap(), first);
    }
}

#[test]
fn shared_edge_tie_goes_to_earlier_activation() {
    // Reversing the triangle order flips the winner.
    let uvs = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let tris = [1, 3, 2, 0, 1, 2];
    let loc = locate_points(&[[0.5, 0.5]], &uvs, &tris).unwrap();
    assert_eq!(loc.triangle(0), Some(0));
    assert_eq!(helpers::corners(&uvs, &tris, 0)[1], [1.0, 1.0]);
}

#[test]
fn points_on_vertices_resolve() {
    let (uvs, tris) = helpers::grid(2);
    let loc = locate_points(&uvs, &uvs, &tris).unwrap();
    assert!(loc.missing.is_empty(), "missing {:?}", loc.missing);
    for (i, &p) in uvs.iter().enumerate() {
        let t = loc.triangle(i).unwrap();
        assert!(helpers::contains(&uvs, &tris, t, p));
    }
}

#[test]
fn locator_runs_sweep_and_fallback() {
    let (uvs, tris) = helpers::grid(4);
    let locator = Locator::new(uvs.clone(), tris.clone()).unwrap();
    assert_eq!(locator.boundary().len(), 16);

    let query = [[0.3, 0.3], [-1.0, 0.1], [0.9, 2.0], [0.6, 0.7]];
    let loc = locator.locate(&query).unwrap();
    assert_eq!(loc.missing, vec![1, 2]);
    assert!(loc.unresolved.is_empty());

    // (-1, 0.1) is nearest the left edge of cell (0, 0): upper triangle 1.
    assert_eq!(loc.triangle(1), Some(1));
    // (0.9, 2) is nearest the top edge of cell (3, 3): upper triangle 31.
    assert_eq!(loc.triangle(2), Some(31));
    for i in [0, 3] {
        let t = loc.triangle(i).unwrap();
        helpers::verify_barycentric(&uvs, &tris, t, query[i], loc.barycentric(i).unwrap());
    }
}
