//! Boundary-clamped cursor
//!
//! The index pattern shared by slide carousels and project paging: a
//! position in `[0, len)` that stops at either end instead of wrapping.

/// Position inside a non-empty ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedCursor {
    index: usize,
    len: usize,
}

impl ClampedCursor {
    /// Cursor at the first item; `None` when there is nothing to point at
    pub fn new(len: usize) -> Option<Self> {
        Self::at(0, len)
    }

    /// Cursor at `index`; `None` when the index is out of range
    pub fn at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    /// Cursor at `index`, clamped into `[0, len)`
    pub fn clamped(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: index.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a cursor only exists over a non-empty sequence
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Step forward; returns whether the cursor moved
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back; returns whether the cursor moved
    pub fn previous(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move to `index`; out-of-range requests are ignored
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.index {
            return false;
        }
        self.index = index;
        true
    }
}
