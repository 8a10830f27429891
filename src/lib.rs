// uv-query: batch point location in planar triangulations
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod active;
pub mod bbox;
pub mod boundary;
pub mod error;
pub mod fallback;
pub mod geom;
pub mod locate;
pub mod rank;
pub mod sweep;

pub use boundary::{boundary_edges, BoundaryEdgeSet};
pub use error::{LocateError, LocateResult};
pub use fallback::DEFAULT_FALLBACK_TOLERANCE;
pub use geom::{BarycentricTest, Edge, Real, TrianglePredicate, Uv};
pub use locate::{locate_points, locate_points_with, resolve_missing, LocateOption, Locator};
pub use sweep::{Location, SweepAction, SweepState, UNRESOLVED};
