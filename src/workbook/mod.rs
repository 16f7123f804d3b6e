//! # Execution-Sheet Rendering
//!
//! Consumes a [`ParseResult`] and produces the finished xlsx artifact: a
//! deterministic styled grid serialized into an OOXML package, plus the
//! output filename derived from the extracted name and date range.

pub(crate) mod grid;
pub(crate) mod style;
pub(crate) mod xlsx;

use crate::error::PlanSheetError;
use crate::parser::ParseResult;
use crate::parser::PLACEHOLDER_NAME;
use crate::workbook::grid::build_grid;
use crate::workbook::xlsx::write_package;
use thiserror::Error;

/// Sheet and filename stem of the rendered workbook
const SHEET_NAME: &str = "日规划执行表";

/// Conditions under which rendering is refused
#[derive(Error, Debug, PartialEq)]
pub enum WorkbookError {
    /// The parse result carries fatal errors
    #[error("Parse result contains errors and cannot be rendered")]
    ErrorsPresent,

    /// The parse result carries no usable table
    #[error("Parse result contains no table data")]
    EmptyTable,
}

/// Finished spreadsheet artifact: serialized bytes plus derived filename
#[derive(Debug)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Renders a parse result into an xlsx artifact.
///
/// The caller's gate is enforced here: a result with fatal errors, or without
/// columns and data rows, is rejected with a [`WorkbookError`]. Any failure
/// while constructing the package surfaces once as a [`PlanSheetError`]; no
/// partial artifact is produced.
pub fn render(result: &ParseResult) -> Result<Artifact, PlanSheetError> {
    if !result.errors.is_empty() {
        return Err(WorkbookError::ErrorsPresent.into());
    }
    if result.columns.is_empty() || result.data_rows.is_empty() {
        return Err(WorkbookError::EmptyTable.into());
    }

    let grid = build_grid(result);
    let bytes = write_package(&grid, SHEET_NAME)?;
    let filename = output_filename(&result.student_name, &result.date_range);
    Ok(Artifact { bytes, filename })
}

/// Derives the output filename from the student name and date range.
/// Alternate dash characters in the range are normalized to a plain hyphen
/// and all whitespace is stripped before it is appended as a suffix segment.
fn output_filename(student_name: &str, date_range: &str) -> String {
    let name = if student_name.is_empty() { PLACEHOLDER_NAME } else { student_name };
    if date_range.is_empty() {
        return format!("{}{}.xlsx", name, SHEET_NAME);
    }
    let range: String = date_range
        .chars()
        .filter(|character| !character.is_whitespace())
        .map(|character| match character {
            '–' | '—' => '-',
            other => other,
        })
        .collect();
    format!("{}{}_{}.xlsx", name, SHEET_NAME, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const FULL_DOCUMENT: &str = "\
**张三日规划（1.13 - 1.18）执行表**
**本周核心目标：** 提升数学。
| 日期 | 星期 | 数学 |
| --- | --- | --- |
| 1.13 | 周一 | 做题 |";

    #[test]
    fn renders_artifact_with_derived_filename() {
        let result = parse(FULL_DOCUMENT);
        let artifact = render(&result).unwrap();
        assert_eq!(artifact.filename, "张三日规划执行表_1.13-1.18.xlsx");
        // xlsx packages are zip archives
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[test]
    fn filename_omits_suffix_without_date_range() {
        assert_eq!(output_filename("张三", ""), "张三日规划执行表.xlsx");
    }

    #[test]
    fn filename_normalizes_dashes_and_whitespace() {
        assert_eq!(
            output_filename("张三", "1.13 – 1.18"),
            "张三日规划执行表_1.13-1.18.xlsx"
        );
        assert_eq!(
            output_filename("张三", "1月13日 — 1月18日"),
            "张三日规划执行表_1月13日-1月18日.xlsx"
        );
    }

    #[test]
    fn filename_falls_back_to_placeholder_name() {
        assert_eq!(output_filename("", "1.13 - 1.18"), "学生日规划执行表_1.13-1.18.xlsx");
    }

    #[test]
    fn erroring_result_is_rejected() {
        let result = parse("没有表格");
        let error = render(&result).unwrap_err();
        assert!(matches!(error, PlanSheetError::WorkbookError(WorkbookError::ErrorsPresent)));
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut result = parse(FULL_DOCUMENT);
        result.data_rows.clear();
        let error = render(&result).unwrap_err();
        assert!(matches!(error, PlanSheetError::WorkbookError(WorkbookError::EmptyTable)));
    }
}
