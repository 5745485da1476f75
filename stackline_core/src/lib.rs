// Copyright 2025 the Stackline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark model for `stackline` charts.
//!
//! A chart is rendered as a flat list of [`Mark`]s: rectangles, stroked/filled paths and
//! unshaped text runs, each with a stable [`MarkId`] and a z-index. Hosts either draw the list
//! directly or feed successive lists through a [`Scene`], which reports enter/update/exit
//! diffs so that only changed marks are touched.
//!
//! Hit regions ([`HitShape`]) are plain geometry; the chart layer decides what a hit means.

#![no_std]

extern crate alloc;

mod hit;
mod mark;
mod scene;

pub use hit::HitShape;
pub use mark::{
    Dash, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathBuilder, PathPayload, RectBuilder,
    RectPayload, TextAnchor, TextBaseline, TextBuilder, TextPayload,
};
pub use scene::{MarkDiff, Scene};
