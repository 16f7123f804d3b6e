//! Static style configuration for the rendered execution sheet.
//!
//! Styles, column widths and row heights are data, not behavior: each cell
//! role maps to one immutable style record, and the serializer turns the
//! tables below into the styles part and the worksheet layout attributes.

/// Role of a cell within the fixed grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellRole {
    /// Blank separator cell, unstyled and borderless
    Spacer,
    /// Merged title cell on row 0
    Title,
    /// Merged objective cell on row 1
    Objective,
    /// Column header cell on row 3
    Header,
    /// Date/weekday cell in the first two data columns
    DayLabel,
    /// Task cell in the remaining data columns
    Task,
}

impl CellRole {
    /// Index of this role's cell format in the styles part.
    /// Index 0 is the mandatory default format used by spacer cells.
    pub(crate) fn style_index(self) -> usize {
        match self {
            CellRole::Spacer => 0,
            CellRole::Title => 1,
            CellRole::Objective => 2,
            CellRole::Header => 3,
            CellRole::DayLabel => 4,
            CellRole::Task => 5,
        }
    }
}

/// Immutable style record backing one cell format
pub(crate) struct CellStyle {
    /// Font size in points
    pub(crate) font_size: f64,
    pub(crate) bold: bool,
    /// Font color as ARGB hex
    pub(crate) color: &'static str,
    /// Whether the cell carries a thin border on all four sides
    pub(crate) bordered: bool,
}

/// Font family applied to every styled cell
pub(crate) const FONT_NAME: &str = "楷体";

pub(crate) const BLACK: &str = "FF000000";
pub(crate) const RED: &str = "FFFF0000";

/// Style records in `CellRole::style_index` order (index 1 onward)
pub(crate) const CELL_STYLES: [CellStyle; 5] = [
    // Title: large bold decorative font, no border
    CellStyle { font_size: 20.0, bold: true, color: BLACK, bordered: false },
    // Objective: smaller bold variant, no border
    CellStyle { font_size: 12.0, bold: true, color: BLACK, bordered: false },
    // Header: bold with border
    CellStyle { font_size: 16.0, bold: true, color: BLACK, bordered: true },
    // Date/weekday: bold red with border
    CellStyle { font_size: 12.0, bold: true, color: RED, bordered: true },
    // Task: plain black with border
    CellStyle { font_size: 12.0, bold: false, color: BLACK, bordered: true },
];

// Fixed row heights in points
pub(crate) const TITLE_ROW_HEIGHT: f64 = 51.0;
pub(crate) const OBJECTIVE_ROW_HEIGHT: f64 = 40.0;
pub(crate) const SPACER_ROW_HEIGHT: f64 = 15.0;
pub(crate) const HEADER_ROW_HEIGHT: f64 = 20.4;
pub(crate) const DATA_ROW_HEIGHT: f64 = 100.0;

/// Positional column-width overrides, tuned to the canonical
/// date/weekday/six-subject layout of the finished sheet
const COLUMN_WIDTH_OVERRIDES: [(usize, f64); 5] = [
    (0, 8.0),  // date
    (1, 8.43), // weekday (default width)
    (2, 40.0), // first wide subject
    (4, 40.0), // second wide subject
    (6, 35.0), // medium-wide subject
];

const DEFAULT_COLUMN_WIDTH: f64 = 30.0;

/// Returns the width for a column index, falling through to the default for
/// any index without an override regardless of the table's column count
pub(crate) fn column_width(index: usize) -> f64 {
    COLUMN_WIDTH_OVERRIDES
        .iter()
        .find(|(position, _)| *position == index)
        .map(|(_, width)| *width)
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_overrides_are_positional() {
        assert_eq!(column_width(0), 8.0);
        assert_eq!(column_width(1), 8.43);
        assert_eq!(column_width(2), 40.0);
        assert_eq!(column_width(4), 40.0);
        assert_eq!(column_width(6), 35.0);
    }

    #[test]
    fn other_indexes_fall_through_to_default() {
        assert_eq!(column_width(3), 30.0);
        assert_eq!(column_width(5), 30.0);
        assert_eq!(column_width(7), 30.0);
        assert_eq!(column_width(11), 30.0);
    }

    #[test]
    fn style_indexes_are_stable() {
        assert_eq!(CellRole::Spacer.style_index(), 0);
        assert_eq!(CellRole::Title.style_index(), 1);
        assert_eq!(CellRole::Task.style_index(), 5);
        // Every non-default role has a backing style record
        assert_eq!(CELL_STYLES.len(), 5);
    }
}
