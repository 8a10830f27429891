// Copyright 2025 Lars Brubaker
// Shared test utilities for uv-query tests.

#![allow(dead_code)]

use uv_query::{BarycentricTest, Real, TrianglePredicate, Uv};

/// Unit square split into `n` x `n` cells, two triangles each.
/// Cell (i, j) yields triangles 2*(j*n + i) and 2*(j*n + i) + 1.
pub fn grid(n: u32) -> (Vec<Uv>, Vec<u32>) {
    let step = 1.0 / n as Real;
    let mut uvs = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
    for j in 0..=n {
        for i in 0..=n {
            uvs.push([i as Real * step, j as Real * step]);
        }
    }
    let mut tris = Vec::with_capacity((n * n * 6) as usize);
    let idx = |i: u32, j: u32| j * (n + 1) + i;
    for j in 0..n {
        for i in 0..n {
            let (v00, v10, v11, v01) = (idx(i, j), idx(i + 1, j), idx(i + 1, j + 1), idx(i, j + 1));
            tris.extend_from_slice(&[v00, v10, v11]);
            tris.extend_from_slice(&[v00, v11, v01]);
        }
    }
    (uvs, tris)
}

pub fn corners(uvs: &[Uv], tris: &[u32], t: u32) -> [Uv; 3] {
    let b = t as usize * 3;
    [
        uvs[tris[b] as usize],
        uvs[tris[b + 1] as usize],
        uvs[tris[b + 2] as usize],
    ]
}

/// True if the default predicate accepts `p` in triangle `t`.
pub fn contains(uvs: &[Uv], tris: &[u32], t: u32, p: Uv) -> bool {
    let [a, b, c] = corners(uvs, tris, t);
    BarycentricTest::default().barycentric(p, a, b, c).is_some()
}

/// O(N*M) reference: first triangle in index order containing each point.
pub fn brute_force(query: &[Uv], uvs: &[Uv], tris: &[u32]) -> Vec<Option<u32>> {
    let count = (tris.len() / 3) as u32;
    query
        .iter()
        .map(|&p| (0..count).find(|&t| contains(uvs, tris, t, p)))
        .collect()
}

/// Asserts the weights are a valid convex combination reproducing `p`.
pub fn verify_barycentric(uvs: &[Uv], tris: &[u32], t: u32, p: Uv, w: [Real; 3]) {
    let [a, b, c] = corners(uvs, tris, t);
    let sum = w[0] + w[1] + w[2];
    assert!((sum - 1.0).abs() < 1e-9, "weights {:?} sum to {}", w, sum);
    for &x in &w {
        assert!(x >= -1e-9, "negative weight in {:?} for {:?}", w, p);
    }
    let x = w[0] * a[0] + w[1] * b[0] + w[2] * c[0];
    let y = w[0] * a[1] + w[1] * b[1] + w[2] * c[1];
    assert!(
        (x - p[0]).abs() < 1e-9 && (y - p[1]).abs() < 1e-9,
        "weights {:?} reproduce ({}, {}) not {:?}",
        w,
        x,
        y,
        p
    );
}
