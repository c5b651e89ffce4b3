//! Page layout planning for the favorites export.
//!
//! Layout is computed up front and independently of the PDF backend so
//! the pagination rule stays testable: one row per entry, top to
//! bottom, and a page break whenever the vertical cursor has moved past
//! the break threshold before the next row is drawn.

/// Export page geometry, in millimeters. A4 portrait by default.
#[derive(Debug, Clone)]
pub struct ExportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Vertical space consumed by the title block on the first page.
    pub title_height: f32,
    pub row_height: f32,
    pub poster_width: f32,
    pub poster_height: f32,
    /// A row whose cursor position exceeds this starts a new page.
    pub break_threshold: f32,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            title_height: 20.0,
            row_height: 36.0,
            poster_width: 20.0,
            poster_height: 30.0,
            break_threshold: 250.0,
        }
    }
}

/// Position of one entry row: page index and distance from the top of
/// that page to the row's upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSlot {
    pub page: usize,
    pub y: f32,
}

impl ExportLayout {
    /// Plan row slots for `count` entries.
    pub fn plan(&self, count: usize) -> Vec<RowSlot> {
        let mut slots = Vec::with_capacity(count);
        let mut page = 0;
        let mut y = self.margin + self.title_height;

        for _ in 0..count {
            if y > self.break_threshold {
                page += 1;
                y = self.margin;
            }
            slots.push(RowSlot { page, y });
            y += self.row_height;
        }

        slots
    }

    /// Number of rows the default cursor fits on the first page.
    pub fn rows_on_first_page(&self) -> usize {
        let mut count = 0;
        let mut y = self.margin + self.title_height;
        while y <= self.break_threshold {
            count += 1;
            y += self.row_height;
        }
        count
    }
}
