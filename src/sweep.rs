// Copyright 2025 Lars Brubaker
// License: MIT
//
// Sweep-line point location.
//
// Query points and triangle bounding boxes are swept left to right along x.
// Three cursors walk three sorted views: query x, box xmin and box xmax.
// Each step advances exactly one of them:
//
//   Activate   - the next box opens before the next query and the next close
//   Test       - the next query comes before the next box closes
//   Deactivate - otherwise the next box closes
//
// A query is tested only against the triangles open at its x whose y-range
// also covers it, so the exact predicate runs on a handful of candidates.

use tracing::{debug, trace};

use crate::active::ActiveSet;
use crate::bbox::{triangle_boxes, BoundingBox};
use crate::geom::{Real, TrianglePredicate, Uv};
use crate::rank::argsort;

/// Marks a query point with no containing triangle.
pub const UNRESOLVED: u32 = u32::MAX;

/// Barycentrics stored for points that have none.
pub const NO_BARYCENTRIC: [Real; 3] = [Real::NAN; 3];

/// Per-query results, indexed by original query position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    /// Containing triangle per query point, or `UNRESOLVED`.
    pub triangles: Vec<u32>,
    /// Query points the sweep could not place, in sweep (ascending x) order.
    /// Stays populated after a fallback pass assigns them a triangle.
    pub missing: Vec<u32>,
    /// Weights for points resolved by the sweep; `NO_BARYCENTRIC` otherwise.
    /// Empty when barycentrics were not requested.
    pub barycentrics: Vec<[Real; 3]>,
    /// Missing points the fallback declined to assign (tolerance exceeded).
    pub unresolved: Vec<u32>,
}

impl Location {
    fn new(query_count: usize, keep_barycentrics: bool) -> Self {
        Location {
            triangles: vec![UNRESOLVED; query_count],
            missing: Vec::new(),
            barycentrics: if keep_barycentrics {
                vec![NO_BARYCENTRIC; query_count]
            } else {
                Vec::new()
            },
            unresolved: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangle assigned to query `i`, by the sweep or by the fallback.
    pub fn triangle(&self, i: usize) -> Option<u32> {
        match self.triangles.get(i) {
            Some(&t) if t != UNRESOLVED => Some(t),
            _ => None,
        }
    }

    /// Barycentric weights for query `i`, if the sweep located it.
    pub fn barycentric(&self, i: usize) -> Option<[Real; 3]> {
        self.barycentrics
            .get(i)
            .copied()
            .filter(|w| !w[0].is_nan())
    }
}

/// What a single `SweepState::step` did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SweepAction {
    /// The box of this triangle opened. Skipped triangles still report here
    /// but are not added to the active set.
    Activate(u32),
    /// This query point was tested; `hit` is the triangle that contains it.
    Test { query: u32, hit: Option<u32> },
    /// The box of this triangle closed.
    Deactivate(u32),
    /// Every query point has been consumed.
    Finished,
}

/// One sorted view of the inputs, walked front to back.
struct Cursor {
    keys: Vec<Real>,
    order: Vec<u32>,
    pos: usize,
}

impl Cursor {
    fn new(keys: Vec<Real>) -> Self {
        let order = argsort(&keys);
        Cursor {
            keys,
            order,
            pos: 0,
        }
    }

    #[inline]
    fn current(&self) -> Option<u32> {
        self.order.get(self.pos).copied()
    }

    /// The key at the cursor, or +inf once exhausted. The sentinel sorts after
    /// every finite coordinate so an exhausted cursor never wins a comparison.
    #[inline]
    fn value(&self) -> Real {
        match self.current() {
            Some(i) => self.keys[i as usize],
            None => Real::INFINITY,
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Explicit state of one sweep over a batch of query points.
pub struct SweepState<'a, P: ?Sized> {
    query: &'a [Uv],
    uvs: &'a [Uv],
    triangles: &'a [u32],
    predicate: &'a P,
    boxes: Vec<BoundingBox>,
    queries: Cursor,
    mins: Cursor,
    maxs: Cursor,
    skip: Vec<bool>,
    active: ActiveSet,
    location: Location,
}

impl<'a, P: TrianglePredicate + ?Sized> SweepState<'a, P> {
    /// Prepares the sweep. Triangle indices must already be validated
    /// against `uvs`.
    pub fn new(
        query: &'a [Uv],
        uvs: &'a [Uv],
        triangles: &'a [u32],
        predicate: &'a P,
        keep_barycentrics: bool,
    ) -> Self {
        let boxes = triangle_boxes(uvs, triangles);
        let queries = Cursor::new(query.iter().map(|p| p[0]).collect());
        let mins = Cursor::new(boxes.iter().map(|b| b.xmin).collect());
        let maxs = Cursor::new(boxes.iter().map(|b| b.xmax).collect());

        // Boxes closing before the leftmost query can never contain anything.
        let first = queries.value();
        let skip: Vec<bool> = boxes.iter().map(|b| first > b.xmax).collect();

        SweepState {
            query,
            uvs,
            triangles,
            predicate,
            active: ActiveSet::new(boxes.len()),
            boxes,
            queries,
            mins,
            maxs,
            skip,
            location: Location::new(query.len(), keep_barycentrics),
        }
    }

    /// Number of triangles currently open.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Open triangles in activation order.
    pub fn active(&self) -> impl Iterator<Item = u32> + '_ {
        self.active.iter()
    }

    pub fn is_skipped(&self, tri: u32) -> bool {
        self.skip[tri as usize]
    }

    /// Advances exactly one cursor.
    pub fn step(&mut self) -> SweepAction {
        let Some(q) = self.queries.current() else {
            return SweepAction::Finished;
        };
        let qp = self.queries.value();
        let mn = self.mins.value();
        let mx = self.maxs.value();

        if let Some(tri) = self.mins.current().filter(|_| mn <= mx && mn <= qp) {
            if !self.skip[tri as usize] {
                self.active.insert(tri);
            }
            self.mins.advance();
            trace!(tri, xmin = mn, "activate");
            return SweepAction::Activate(tri);
        }

        let closing = if qp <= mx { None } else { self.maxs.current() };
        match closing {
            Some(tri) => {
                if !self.skip[tri as usize] {
                    self.active.remove(tri);
                }
                self.maxs.advance();
                trace!(tri, xmax = mx, "deactivate");
                SweepAction::Deactivate(tri)
            }
            None => {
                let hit = self.test(q);
                self.queries.advance();
                trace!(query = q, ?hit, "test");
                SweepAction::Test { query: q, hit }
            }
        }
    }

    /// Runs the predicate on every open triangle whose y-range covers the
    /// point. The first hit in activation order wins.
    fn test(&mut self, q: u32) -> Option<u32> {
        let p = self.query[q as usize];
        let hit = self
            .active
            .iter()
            .filter(|&t| self.boxes[t as usize].spans_y(p[1]))
            .find_map(|t| {
                let [a, b, c] = self.corners(t);
                self.predicate.barycentric(p, a, b, c).map(|w| (t, w))
            });

        match hit {
            Some((t, w)) => {
                self.location.triangles[q as usize] = t;
                if let Some(slot) = self.location.barycentrics.get_mut(q as usize) {
                    *slot = w;
                }
                Some(t)
            }
            None => {
                self.location.missing.push(q);
                None
            }
        }
    }

    #[inline]
    fn corners(&self, tri: u32) -> [Uv; 3] {
        let base = tri as usize * 3;
        [
            self.uvs[self.triangles[base] as usize],
            self.uvs[self.triangles[base + 1] as usize],
            self.uvs[self.triangles[base + 2] as usize],
        ]
    }

    /// Steps until every query point has been consumed.
    pub fn run(mut self) -> Location {
        debug!(
            queries = self.query.len(),
            triangles = self.boxes.len(),
            skipped = self.skip.iter().filter(|&&s| s).count(),
            "Starting sweep"
        );
        let mut steps = 0usize;
        while self.step() != SweepAction::Finished {
            steps += 1;
        }
        debug!(
            steps,
            resolved = self.location.len() - self.location.missing.len(),
            missing = self.location.missing.len(),
            "Sweep complete"
        );
        self.location
    }
}

/// Locates every query point with a fresh sweep. Inputs are not validated.
pub fn sweep<P: TrianglePredicate + ?Sized>(
    query: &[Uv],
    uvs: &[Uv],
    triangles: &[u32],
    predicate: &P,
    keep_barycentrics: bool,
) -> Location {
    SweepState::new(query, uvs, triangles, predicate, keep_barycentrics).run()
}
