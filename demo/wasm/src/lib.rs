// Copyright 2025 Lars Brubaker
// WASM bindings for uv-query

use uv_query::{LocateOption, Locator, Uv};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

fn to_uvs(flat: &[f64]) -> Vec<Uv> {
    flat.chunks_exact(2).map(|c| [c[0], c[1]]).collect()
}

/// A triangulation prepared for repeated lookups.
#[wasm_bindgen]
pub struct LocatorJs {
    inner: Locator,
    triangles: Vec<u32>,
    missing: Vec<u32>,
    unresolved: Vec<u32>,
    barycentrics: Vec<f64>,
}

#[wasm_bindgen]
impl LocatorJs {
    /// `uvs` is flat [u0,v0, u1,v1, ...]; `triangles` is flat index triples.
    #[wasm_bindgen(constructor)]
    pub fn new(uvs: &[f64], triangles: &[u32]) -> Result<LocatorJs, JsError> {
        let inner = Locator::new(to_uvs(uvs), triangles.to_vec())?;
        Ok(LocatorJs {
            inner,
            triangles: Vec::new(),
            missing: Vec::new(),
            unresolved: Vec::new(),
            barycentrics: Vec::new(),
        })
    }

    /// Set an option (0 = ResolveMissing, 1 = SkipBarycentrics).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => LocateOption::ResolveMissing,
            1 => LocateOption::SkipBarycentrics,
            _ => return,
        };
        self.inner.set_option(opt, value);
    }

    /// Maximum fallback distance; pass a negative value to remove it.
    pub fn set_fallback_tolerance(&mut self, tolerance: f64) {
        self.inner
            .set_fallback_tolerance((tolerance >= 0.0).then_some(tolerance));
    }

    /// Locate flat [x0,y0, x1,y1, ...] query points. Returns the number located.
    pub fn locate(&mut self, query: &[f64]) -> Result<u32, JsError> {
        let loc = self.inner.locate(&to_uvs(query))?;
        self.barycentrics = loc.barycentrics.iter().flatten().copied().collect();
        self.missing = loc.missing;
        self.unresolved = loc.unresolved;
        self.triangles = loc.triangles;
        Ok(self.triangles.len() as u32)
    }

    /// Triangle per query point; 0xFFFFFFFF where unresolved.
    pub fn get_triangles(&self) -> Vec<u32> {
        self.triangles.clone()
    }

    pub fn get_missing(&self) -> Vec<u32> {
        self.missing.clone()
    }

    pub fn get_unresolved(&self) -> Vec<u32> {
        self.unresolved.clone()
    }

    /// Flat [w0,w1,w2, ...] per query point; NaN where the sweep missed.
    pub fn get_barycentrics(&self) -> Vec<f64> {
        self.barycentrics.clone()
    }
}

/// Convenience: one-shot lookup returning the triangle per query point.
#[wasm_bindgen]
pub fn locate_points(query: &[f64], uvs: &[f64], triangles: &[u32]) -> Vec<u32> {
    match LocatorJs::new(uvs, triangles) {
        Ok(mut l) => match l.locate(query) {
            Ok(_) => l.get_triangles(),
            Err(_) => Vec::new(),
        },
        Err(_) => Vec::new(),
    }
}
