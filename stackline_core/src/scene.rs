// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark set with enter/update/exit diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to the retained mark set.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// Bounds of the new payload.
        bounds: Option<Rect>,
        /// New mark.
        new: Box<Mark>,
    },
    /// A retained mark changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// New mark kind.
        kind: MarkKind,
        /// Bounds before the update.
        old_bounds: Option<Rect>,
        /// Bounds after the update.
        new_bounds: Option<Rect>,
        /// New mark.
        new: Box<Mark>,
    },
    /// A mark disappeared.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Kind of the removed mark.
        kind: MarkKind,
        /// Bounds of the removed mark.
        bounds: Option<Rect>,
    },
}

/// The retained set of marks from the previous render pass.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns a retained mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Replaces the retained set with `marks` and returns what changed.
    ///
    /// Marks whose payload, z-index and opacity are unchanged produce no diff. If `marks`
    /// contains an id twice, the later mark wins. Diffs are ordered by mark id.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::new();
        for m in marks {
            next.insert(m.id, m);
        }

        let mut diffs = Vec::new();
        let mut seen: HashSet<MarkId> = HashSet::new();

        for (id, new) in &next {
            seen.insert(*id);
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    kind: new.kind(),
                    z_index: new.z_index,
                    bounds: new.bounds(),
                    new: Box::new(new.clone()),
                }),
                Some(old) if old != new => diffs.push(MarkDiff::Update {
                    id: *id,
                    kind: new.kind(),
                    old_bounds: old.bounds(),
                    new_bounds: new.bounds(),
                    new: Box::new(new.clone()),
                }),
                Some(_) => {}
            }
        }

        for (id, old) in &self.marks {
            if !seen.contains(id) {
                diffs.push(MarkDiff::Exit {
                    id: *id,
                    kind: old.kind(),
                    bounds: old.bounds(),
                });
            }
        }

        diffs.sort_by_key(|d| match d {
            MarkDiff::Enter { id, .. } | MarkDiff::Update { id, .. } | MarkDiff::Exit { id, .. } => {
                *id
            }
        });

        self.marks = next;
        diffs
    }

    /// Returns retained marks in render order (`(z_index, id)`).
    pub fn sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Returns retained payloads in render order.
    pub fn payloads(&self) -> impl Iterator<Item = &MarkPayload> {
        self.sorted().into_iter().map(|m| &m.payload)
    }
}
