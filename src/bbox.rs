// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-triangle axis-aligned bounding boxes.

use crate::geom::{Real, Uv};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub xmin: Real,
    pub xmax: Real,
    pub ymin: Real,
    pub ymax: Real,
}

impl BoundingBox {
    pub fn of_triangle(a: Uv, b: Uv, c: Uv) -> Self {
        BoundingBox {
            xmin: a[0].min(b[0]).min(c[0]),
            xmax: a[0].max(b[0]).max(c[0]),
            ymin: a[1].min(b[1]).min(c[1]),
            ymax: a[1].max(b[1]).max(c[1]),
        }
    }

    /// True if `y` lies within [ymin, ymax].
    #[inline]
    pub fn spans_y(&self, y: Real) -> bool {
        self.ymin <= y && y <= self.ymax
    }
}

/// Boxes for every triangle in a flat index array, in triangle order.
/// Indices are assumed to be in range; `locate` validates them first.
pub fn triangle_boxes(uvs: &[Uv], triangles: &[u32]) -> Vec<BoundingBox> {
    triangles
        .chunks_exact(3)
        .map(|t| {
            BoundingBox::of_triangle(
                uvs[t[0] as usize],
                uvs[t[1] as usize],
                uvs[t[2] as usize],
            )
        })
        .collect()
}
