use serde::{Deserialize, Serialize};

/// Page geometry and typography for PDF export.
///
/// Lengths are millimetres, font size is points. Defaults give an A4 page
/// with 10 mm side margins, a 20 mm bottom margin and 10 mm line cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    /// Left, right and top margin.
    pub margin_mm: f32,

    /// Space kept free at the bottom before breaking to a new page.
    pub bottom_margin_mm: f32,

    /// Height of one wrapped line.
    pub line_height_mm: f32,

    pub font_size_pt: f32,
}

impl DocumentStyles {
    pub fn text_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Number of line cells that fit between the top and bottom margins.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height_mm - self.margin_mm - self.bottom_margin_mm;
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            bottom_margin_mm: 20.0,
            line_height_mm: 10.0,
            font_size_pt: 12.0,
        }
    }
}
