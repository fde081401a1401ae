//! SpatialGrid - uniform bucket grid over the viewport
//!
//! Rebuilt from scratch every frame. With a cell at least as large as the link
//! distance, every particle within link range of `p` lives in the 3x3 block of
//! cells around `p`'s cell, so neighbor search is O(k) instead of O(n).
//!
//! Buckets keep their allocations between rebuilds; only a geometry change
//! (resize) reallocates.

use crate::core::math::Vec2;
use crate::domain::viewport::Viewport;

mod indexing;

pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    buckets: Vec<Vec<usize>>,
    indexed: usize,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: if cell_size.is_finite() { cell_size.max(1.0) } else { 1.0 },
            cols: 1,
            rows: 1,
            buckets: vec![Vec::new()],
            indexed: 0,
        }
    }

    /// Size the grid to cover `viewport`. Always at least one cell.
    pub fn configure(&mut self, viewport: &Viewport) {
        let cols = ((viewport.width() / self.cell_size).ceil() as usize).max(1);
        let rows = ((viewport.height() / self.cell_size).ceil() as usize).max(1);
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.buckets = vec![Vec::new(); cols * rows];
        self.indexed = 0;
    }

    /// Re-bucket every position; index `i` is the i-th item of `positions`.
    pub fn rebuild<I>(&mut self, viewport: &Viewport, positions: I)
    where
        I: IntoIterator<Item = Vec2>,
    {
        self.configure(viewport);
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        let mut n = 0;
        for (i, p) in positions.into_iter().enumerate() {
            let cell = self.cell_index_for(p);
            self.buckets[cell].push(i);
            n += 1;
        }
        self.indexed = n;
    }

    /// Indices in the 3x3 block of cells around `p`'s cell.
    ///
    /// A superset of everything within `cell_size` of `p`; callers still
    /// distance-test each candidate.
    pub fn neighbors_of(&self, p: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_coords(p);
        let rows = cy.saturating_sub(1)..=(cy + 1).min(self.rows - 1);
        rows.flat_map(move |row| {
            let cols = cx.saturating_sub(1)..=(cx + 1).min(self.cols - 1);
            cols.flat_map(move |col| self.buckets[row * self.cols + col].iter().copied())
        })
    }

    pub fn bucket(&self, index: usize) -> &[usize] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of indices placed by the last rebuild
    pub fn indexed(&self) -> usize {
        self.indexed
    }
}
