//! Deterministic construction of the styled execution-sheet grid.
//!
//! The grid is laid out top-down: merged title row, merged objective row,
//! blank spacer row, header row, then one fixed-height row per schedule day.

use crate::parser::ParseResult;
use crate::workbook::style::column_width;
use crate::workbook::style::CellRole;
use crate::workbook::style::DATA_ROW_HEIGHT;
use crate::workbook::style::HEADER_ROW_HEIGHT;
use crate::workbook::style::OBJECTIVE_ROW_HEIGHT;
use crate::workbook::style::SPACER_ROW_HEIGHT;
use crate::workbook::style::TITLE_ROW_HEIGHT;
use once_cell::sync::Lazy;
use regex::Regex;

/// Inline break tag replaced with a literal newline in cell text
static BREAK_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Hardcode regex pattern"));

/// One positioned cell with its text and style role
pub(crate) struct GridCell {
    pub(crate) text: String,
    pub(crate) role: CellRole,
}

/// One grid row with a fixed height in points
pub(crate) struct GridRow {
    pub(crate) height: f64,
    pub(crate) cells: Vec<GridCell>,
}

/// Horizontal merge of one row across a column span
pub(crate) struct Merge {
    pub(crate) row: usize,
    pub(crate) col_lower: usize,
    pub(crate) col_upper: usize,
}

/// Complete layout of the sheet: rows, merged regions and column widths
pub(crate) struct Grid {
    pub(crate) rows: Vec<GridRow>,
    pub(crate) merges: Vec<Merge>,
    pub(crate) column_widths: Vec<f64>,
}

/// Builds the fixed five-region grid from a parse result.
///
/// The caller guarantees the result carries at least one column and one data
/// row; layout is a pure function of the result's fields.
pub(crate) fn build_grid(result: &ParseResult) -> Grid {
    let col_count = result.columns.len();
    let mut rows = Vec::<GridRow>::with_capacity(4 + result.data_rows.len());

    let title = if result.date_range.is_empty() {
        format!("{}日规划执行表", result.student_name)
    } else {
        format!("{}日规划（{}）执行表", result.student_name, result.date_range)
    };
    rows.push(banner_row(title, CellRole::Title, TITLE_ROW_HEIGHT, col_count));

    let objective = format!("本周核心目标：{}", result.core_target);
    rows.push(banner_row(objective, CellRole::Objective, OBJECTIVE_ROW_HEIGHT, col_count));

    rows.push(GridRow {
        height: SPACER_ROW_HEIGHT,
        cells: (0..col_count)
            .map(|_| GridCell {
                text: String::new(),
                role: CellRole::Spacer,
            })
            .collect(),
    });

    rows.push(GridRow {
        height: HEADER_ROW_HEIGHT,
        cells: result
            .columns
            .iter()
            .map(|column| GridCell {
                text: column.to_owned(),
                role: CellRole::Header,
            })
            .collect(),
    });

    for data_row in &result.data_rows {
        rows.push(GridRow {
            height: DATA_ROW_HEIGHT,
            cells: data_row
                .iter()
                .enumerate()
                .map(|(index, cell)| GridCell {
                    text: normalize_breaks(cell),
                    role: if index < 2 { CellRole::DayLabel } else { CellRole::Task },
                })
                .collect(),
        });
    }

    let merges = vec![
        Merge { row: 0, col_lower: 0, col_upper: col_count - 1 },
        Merge { row: 1, col_lower: 0, col_upper: col_count - 1 },
    ];
    let column_widths = (0..col_count).map(column_width).collect();

    Grid {
        rows,
        merges,
        column_widths,
    }
}

/// Builds a full-width banner row: text in the first cell, the remaining
/// cells empty but carrying the same style for the merged region
fn banner_row(text: String, role: CellRole, height: f64, col_count: usize) -> GridRow {
    let cells = (0..col_count)
        .map(|index| GridCell {
            text: if index == 0 { text.to_owned() } else { String::new() },
            role,
        })
        .collect();
    GridRow { height, cells }
}

/// Replaces inline break tags with literal newlines, uniformly in every column
fn normalize_breaks(text: &str) -> String {
    BREAK_TOKEN_PATTERN.replace_all(text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ParseResult {
        ParseResult {
            student_name: "张三".to_owned(),
            date_range: "1.13 - 1.18".to_owned(),
            core_target: "提升数学。".to_owned(),
            columns: vec!["日期".into(), "星期".into(), "数学".into()],
            data_rows: vec![vec!["1.13".into(), "周一".into(), "做题".into()]],
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn lays_out_five_regions() {
        let grid = build_grid(&sample_result());
        assert_eq!(grid.rows.len(), 5);
        assert_eq!(grid.rows[0].height, TITLE_ROW_HEIGHT);
        assert_eq!(grid.rows[1].height, OBJECTIVE_ROW_HEIGHT);
        assert_eq!(grid.rows[2].height, SPACER_ROW_HEIGHT);
        assert_eq!(grid.rows[3].height, HEADER_ROW_HEIGHT);
        assert_eq!(grid.rows[4].height, DATA_ROW_HEIGHT);
        for row in &grid.rows {
            assert_eq!(row.cells.len(), 3);
        }
    }

    #[test]
    fn title_includes_date_range_when_present() {
        let grid = build_grid(&sample_result());
        assert_eq!(grid.rows[0].cells[0].text, "张三日规划（1.13 - 1.18）执行表");

        let mut result = sample_result();
        result.date_range.clear();
        let grid = build_grid(&result);
        assert_eq!(grid.rows[0].cells[0].text, "张三日规划执行表");
    }

    #[test]
    fn objective_row_keeps_label_with_empty_target() {
        let mut result = sample_result();
        result.core_target.clear();
        let grid = build_grid(&result);
        assert_eq!(grid.rows[1].cells[0].text, "本周核心目标：");
    }

    #[test]
    fn banner_rows_merge_across_all_columns() {
        let grid = build_grid(&sample_result());
        assert_eq!(grid.merges.len(), 2);
        assert_eq!(grid.merges[0].row, 0);
        assert_eq!(grid.merges[0].col_lower, 0);
        assert_eq!(grid.merges[0].col_upper, 2);
        assert_eq!(grid.merges[1].row, 1);
    }

    #[test]
    fn first_two_data_columns_are_day_labels() {
        let mut result = sample_result();
        result.columns.push("英语".into());
        result.data_rows = vec![vec!["1.13".into(), "周一".into(), "做题".into(), "背词".into()]];
        let grid = build_grid(&result);
        let roles: Vec<CellRole> = grid.rows[4].cells.iter().map(|cell| cell.role).collect();
        assert_eq!(
            roles,
            vec![CellRole::DayLabel, CellRole::DayLabel, CellRole::Task, CellRole::Task]
        );
    }

    #[test]
    fn day_label_rule_holds_for_narrow_tables() {
        let mut result = sample_result();
        result.columns = vec!["日期".into(), "星期".into()];
        result.data_rows = vec![vec!["1.13".into(), "周一".into()]];
        let grid = build_grid(&result);
        assert!(grid.rows[4].cells.iter().all(|cell| cell.role == CellRole::DayLabel));
    }

    #[test]
    fn break_tokens_become_newlines_in_every_column() {
        let mut result = sample_result();
        result.data_rows = vec![vec![
            "1.13<br>补".into(),
            "周一<BR/>休".into(),
            "1. 做题<br />2. 复盘".into(),
        ]];
        let grid = build_grid(&result);
        assert_eq!(grid.rows[4].cells[0].text, "1.13\n补");
        assert_eq!(grid.rows[4].cells[1].text, "周一\n休");
        assert_eq!(grid.rows[4].cells[2].text, "1. 做题\n2. 复盘");
    }

    #[test]
    fn widths_follow_positional_policy_for_canonical_shape() {
        let mut result = sample_result();
        result.columns = (0..8).map(|index| format!("列{}", index)).collect();
        result.data_rows = vec![(0..8).map(|index| format!("值{}", index)).collect()];
        let grid = build_grid(&result);
        assert_eq!(grid.column_widths, vec![8.0, 8.43, 40.0, 30.0, 40.0, 30.0, 35.0, 30.0]);
    }
}
