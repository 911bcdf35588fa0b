//! Content-addressed memo of rendered grid views.
//!
//! The engine itself never caches. A caller that renders the same course
//! list many times can keep a [`GridMemo`] next to it and go through
//! [`GridMemo::render`]. Entries are keyed by a digest of the engine
//! configuration, the courses and the render sizes, so a changed course list
//! or a different engine simply misses; nothing ever needs invalidating.

use super::layout::GridLayoutEngine;
use super::render_grid;
use super::types::GridView;
use crate::records::CourseRecord;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Entries kept before the memo starts over.
pub const DEFAULT_MEMO_CAPACITY: usize = 64;

/// SHA-256 digest of everything a [`GridView`] is computed from.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ViewDigest([u8; 32]);

impl ViewDigest {
    /// Digests one render request.
    ///
    /// Course order matters, since it determines rectangle order. Strings
    /// are length-prefixed so that adjacent fields cannot run together.
    pub fn of(
        engine: &GridLayoutEngine,
        courses: &[CourseRecord],
        render_width: f32,
        time_column_width: f32,
        row_height: f32,
    ) -> Self {
        let mut hasher = Sha256::new();
        let grid = engine.grid();
        hasher.update(grid.base_hour.to_le_bytes());
        hasher.update(grid.default_last_hour.to_le_bytes());
        hasher.update(grid.inset.to_bits().to_le_bytes());
        hasher.update(grid.min_visible_height.to_bits().to_le_bytes());

        let palette = &engine.display().palette;
        hasher.update((palette.len() as u64).to_le_bytes());
        for color in palette {
            update_str(&mut hasher, color);
        }

        hasher.update((courses.len() as u64).to_le_bytes());
        for course in courses {
            update_str(&mut hasher, course.id.as_deref().unwrap_or_default());
            update_str(&mut hasher, course.schedule.as_deref().unwrap_or_default());
        }

        for size in [render_width, time_column_width, row_height] {
            hasher.update(size.to_bits().to_le_bytes());
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Self(digest)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Thread-safe memo of grid views, shareable between engines.
pub struct GridMemo {
    views: DashMap<ViewDigest, GridView>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl GridMemo {
    /// Creates a memo holding at most `capacity` views (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            views: DashMap::new(),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Same result as [`render_grid`], reusing an earlier view when the
    /// engine, courses and sizes are identical.
    pub fn render(
        &self,
        engine: &GridLayoutEngine,
        courses: &[CourseRecord],
        render_width: f32,
        time_column_width: f32,
        row_height: f32,
    ) -> GridView {
        let digest = ViewDigest::of(
            engine,
            courses,
            render_width,
            time_column_width,
            row_height,
        );
        if let Some(view) = self.views.get(&digest) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return view.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let view = render_grid(engine, courses, render_width, time_column_width, row_height);
        if self.views.len() >= self.capacity {
            debug!(capacity = self.capacity, "Grid memo full, starting over");
            self.views.clear();
        }
        self.views.insert(digest, view.clone());
        view
    }

    /// Drops every stored view. Counters are kept.
    pub fn clear(&self) {
        self.views.clear();
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Snapshot of the memo's counters.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            entries: self.views.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for GridMemo {
    fn default() -> Self {
        Self::new(DEFAULT_MEMO_CAPACITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
