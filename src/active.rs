// Copyright 2025 Lars Brubaker
// License: MIT
//
// The active triangle set used by the sweep.
//
// A circular doubly-linked list threaded through a fixed node array, one node
// per triangle plus a head sentinel. Membership, insert and remove are O(1)
// by triangle index, and iteration follows insertion order so that the first
// matching triangle for a point on a shared edge is reproducible.

/// Marks a node that is not linked into the list.
pub const UNLINKED: u32 = u32::MAX;

/// Index of the head sentinel node. Triangle `t` lives at node `t + 1`.
const HEAD: u32 = 0;

#[derive(Copy, Clone, Debug)]
struct Link {
    next: u32,
    prev: u32,
}

impl Default for Link {
    fn default() -> Self {
        Link {
            next: UNLINKED,
            prev: UNLINKED,
        }
    }
}

pub struct ActiveSet {
    links: Vec<Link>,
    len: usize,
}

impl ActiveSet {
    /// An empty set able to hold triangles `0..triangle_count`.
    pub fn new(triangle_count: usize) -> Self {
        let mut links = vec![Link::default(); triangle_count + 1];
        links[HEAD as usize] = Link {
            next: HEAD,
            prev: HEAD,
        };
        ActiveSet { links, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, tri: u32) -> bool {
        self.links[(tri + 1) as usize].next != UNLINKED
    }

    /// Appends `tri` at the back. Returns false if it was already present.
    pub fn insert(&mut self, tri: u32) -> bool {
        if self.contains(tri) {
            return false;
        }
        let node = tri + 1;
        let last = self.links[HEAD as usize].prev;
        self.links[node as usize] = Link {
            next: HEAD,
            prev: last,
        };
        self.links[last as usize].next = node;
        self.links[HEAD as usize].prev = node;
        self.len += 1;
        true
    }

    /// Unlinks `tri`. Returns false if it was not present.
    pub fn remove(&mut self, tri: u32) -> bool {
        if !self.contains(tri) {
            return false;
        }
        let node = (tri + 1) as usize;
        let Link { next, prev } = self.links[node];
        self.links[next as usize].prev = prev;
        self.links[prev as usize].next = next;
        self.links[node] = Link::default();
        self.len -= 1;
        true
    }

    /// Triangles in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            links: &self.links,
            node: self.links[HEAD as usize].next,
        }
    }
}

pub struct Iter<'a> {
    links: &'a [Link],
    node: u32,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.node == HEAD {
            return None;
        }
        let tri = self.node - 1;
        self.node = self.links[self.node as usize].next;
        Some(tri)
    }
}
