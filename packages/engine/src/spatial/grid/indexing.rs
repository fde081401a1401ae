use super::*;

impl SpatialGrid {
    // === Dimensions ===
    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn bucket_count(&self) -> usize { self.buckets.len() }

    // === Index conversion ===

    /// Cell of `p`, clamped so points slightly outside the viewport (mid-frame,
    /// before wrapping) still land in an edge cell.
    #[inline]
    pub fn cell_coords(&self, p: Vec2) -> (usize, usize) {
        (
            clamp_cell(p.x / self.cell_size, self.cols),
            clamp_cell(p.y / self.cell_size, self.rows),
        )
    }

    #[inline]
    pub fn cell_index(&self, col: usize, row: usize) -> usize {
        debug_assert!(
            col < self.cols && row < self.rows,
            "cell_index: out of bounds ({}, {}) for {}x{} grid",
            col,
            row,
            self.cols,
            self.rows
        );
        row * self.cols + col
    }

    #[inline]
    pub fn cell_index_for(&self, p: Vec2) -> usize {
        let (col, row) = self.cell_coords(p);
        self.cell_index(col, row)
    }
}

#[inline]
fn clamp_cell(v: f32, count: usize) -> usize {
    // NaN casts to 0; infinities saturate and then clamp.
    (v.floor() as isize).clamp(0, count as isize - 1) as usize
}
