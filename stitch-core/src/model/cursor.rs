//! ``src/model/cursor.rs``
//!
//! # Navigation Cursor
//!
//! The cursor only stores an index (and a scroll offset for single-column
//! views). Columns, rows and the visible page are recomputed from the
//! viewport on every render through [`GridLayout`].

/// Width of one grid column in terminal cells.
pub const COLUMN_WIDTH: u16 = 30;
pub const MAX_COLUMNS: usize = 4;
/// Rows taken by header, rules, status, mode and help lines.
pub const RESERVED_ROWS: u16 = 7;
/// Top and bottom border of a boxed list.
pub const FRAME_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Column/row geometry for the browse grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows_per_column: usize,
}

impl GridLayout {
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let columns = usize::from(viewport.cols / COLUMN_WIDTH).clamp(1, MAX_COLUMNS);
        let rows_per_column = usize::from(viewport.rows.saturating_sub(RESERVED_ROWS)).max(1);
        Self {
            columns,
            rows_per_column,
        }
    }

    #[must_use]
    pub fn single_column(viewport: Viewport) -> Self {
        Self {
            columns: 1,
            ..Self::for_viewport(viewport)
        }
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.columns * self.rows_per_column
    }

    #[must_use]
    pub const fn page_of(&self, index: usize) -> usize {
        index / self.per_page()
    }

    /// Never zero, even for an empty listing.
    #[must_use]
    pub const fn page_count(&self, count: usize) -> usize {
        if count == 0 {
            1
        } else {
            count.div_ceil(self.per_page())
        }
    }

    /// Half-open index range shown on `page`.
    #[must_use]
    pub fn page_bounds(&self, page: usize, count: usize) -> (usize, usize) {
        let start = (page * self.per_page()).min(count);
        let end = (start + self.per_page()).min(count);
        (start, end)
    }

    /// `(page, column, row)` of `index`.
    #[must_use]
    pub const fn placement(&self, index: usize) -> (usize, usize, usize) {
        let page = self.page_of(index);
        let within = index % self.per_page();
        (page, within / self.rows_per_column, within % self.rows_per_column)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    scroll_offset: usize,
}

impl Cursor {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Jump to `index`, clamped to the listing.
    pub fn set(&mut self, index: usize, count: usize) {
        self.index = index;
        self.clamp(count);
    }

    /// Restore `index < count` (or `0` for an empty listing).
    pub fn clamp(&mut self, count: usize) {
        self.index = match count {
            0 => 0,
            n => self.index.min(n - 1),
        };
        self.scroll_offset = self.scroll_offset.min(self.index);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if self.index + 1 < count {
            self.index += 1;
        }
    }

    pub fn move_left(&mut self, layout: &GridLayout) {
        self.index = self.index.saturating_sub(layout.rows_per_column);
    }

    pub fn move_right(&mut self, layout: &GridLayout, count: usize) {
        self.set(self.index + layout.rows_per_column, count);
    }

    pub fn top(&mut self) {
        self.index = 0;
    }

    pub fn bottom(&mut self, count: usize) {
        self.index = count.saturating_sub(1);
    }

    /// First index of the previous page; on the first page, index 0.
    pub fn page_up(&mut self, layout: &GridLayout) {
        let page = layout.page_of(self.index);
        self.index = page.saturating_sub(1) * layout.per_page();
    }

    /// First index of the next page; on the last page, the last index.
    pub fn page_down(&mut self, layout: &GridLayout, count: usize) {
        let next = (layout.page_of(self.index) + 1) * layout.per_page();
        if next < count {
            self.index = next;
        } else {
            self.bottom(count);
        }
    }

    /// The page containing the cursor.
    #[must_use]
    pub const fn page(&self, layout: &GridLayout) -> usize {
        layout.page_of(self.index)
    }

    /// Adjust the scroll offset of a single-column list so the cursor row is
    /// within `visible` rows.
    pub fn scroll_into_view(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.index < self.scroll_offset {
            self.scroll_offset = self.index;
        } else if self.index >= self.scroll_offset + visible {
            self.scroll_offset = self.index + 1 - visible;
        }
    }
}
