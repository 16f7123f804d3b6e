//! # Plan Document Parsing
//!
//! Turns a raw study-plan Markdown document into a structured [`ParseResult`].
//! Field extraction is heuristic and never fails: missing name, date range or
//! objective are recorded as warnings, while a missing or empty schedule table
//! is recorded as a fatal error. Parsing is a pure function of the input text.

pub(crate) mod header;
pub(crate) mod objective;
pub(crate) mod table;

use crate::parser::header::extract_title_fields;
use crate::parser::objective::extract_objective;
use crate::parser::table::parse_table;

/// Fallback student name when none can be extracted
pub(crate) const PLACEHOLDER_NAME: &str = "学生";

/// Fatal message for empty or whitespace-only input
const EMPTY_INPUT: &str = "输入内容为空";

// Advisory messages for extraction failures that do not block rendering
const NAME_NOT_FOUND: &str = "未能从标题中提取学生名字，将使用默认名称";
const DATE_RANGE_NOT_FOUND: &str = "未能从标题中提取日期范围";
const OBJECTIVE_NOT_FOUND: &str = "未能提取核心目标信息";

/// Structured result of parsing one plan document.
///
/// Produced fresh per invocation and consumed by the workbook renderer.
/// `errors` non-empty means the result is unusable for rendering; `warnings`
/// are advisory only. Every row in `data_rows` has exactly `columns.len()`
/// cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    /// Extracted student name; placeholder-substituted when unrecoverable
    pub student_name: String,
    /// Date range preserved verbatim in its source notation; may be empty
    pub date_range: String,
    /// Free-text weekly objective; may be empty
    pub core_target: String,
    /// Ordered column header labels
    pub columns: Vec<String>,
    /// Data rows in document order, one cell vector per day
    pub data_rows: Vec<Vec<String>>,
    /// Fatal conditions blocking rendering
    pub errors: Vec<String>,
    /// Advisory conditions that never block rendering
    pub warnings: Vec<String>,
}

/// Parses a plan document into a [`ParseResult`], never raising.
///
/// Empty input short-circuits with a single fatal error. Otherwise the title
/// line, objective lines and table are processed in turn, accumulating
/// warnings for recoverable absences and errors for fatal table conditions.
pub fn parse(markdown: &str) -> ParseResult {
    let mut result = ParseResult::default();

    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        result.errors.push(EMPTY_INPUT.to_owned());
        return result;
    }

    let lines: Vec<&str> = trimmed.lines().collect();

    let title = extract_title_fields(lines[0]);
    result.student_name = title.student_name;
    result.date_range = title.date_range;
    if result.student_name.is_empty() {
        result.warnings.push(NAME_NOT_FOUND.to_owned());
        result.student_name = PLACEHOLDER_NAME.to_owned();
    }
    if result.date_range.is_empty() {
        result.warnings.push(DATE_RANGE_NOT_FOUND.to_owned());
    }

    result.core_target = extract_objective(&lines);
    if result.core_target.is_empty() {
        result.warnings.push(OBJECTIVE_NOT_FOUND.to_owned());
    }

    match parse_table(trimmed) {
        Ok(table) => {
            result.columns = table.columns;
            result.data_rows = table.data_rows;
        }
        Err(error) => result.errors.push(error.to_string()),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = "\
**张三日规划（1.13 - 1.18）执行表**
**本周核心目标：** 提升数学。
| 日期 | 星期 | 数学 |
| --- | --- | --- |
| 1.13 | 周一 | 做题 |";

    #[test]
    fn parses_complete_document() {
        let result = parse(FULL_DOCUMENT);
        assert_eq!(result.student_name, "张三");
        assert_eq!(result.date_range, "1.13 - 1.18");
        assert_eq!(result.core_target, "提升数学。");
        assert_eq!(result.columns, vec!["日期", "星期", "数学"]);
        assert_eq!(result.data_rows, vec![vec!["1.13", "周一", "做题"]]);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_input_short_circuits() {
        let result = parse("   \n  ");
        assert_eq!(result.errors, vec![EMPTY_INPUT]);
        assert_eq!(result.student_name, "");
        assert_eq!(result.date_range, "");
        assert_eq!(result.core_target, "");
        assert!(result.columns.is_empty());
        assert!(result.data_rows.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn table_free_input_reports_header_error_only() {
        let result = parse("张三日规划（1.13 - 1.18）执行表\n本周核心目标：提升数学。");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("表头"));
        assert!(result.columns.is_empty());
        assert!(result.data_rows.is_empty());
        // Title extraction still worked
        assert_eq!(result.student_name, "张三");
    }

    #[test]
    fn missing_fields_become_warnings() {
        let text = "\
Weekly Plan
| 日期 | 星期 |
| --- | --- |
| 1.13 | 周一 |";
        let result = parse(text);
        assert!(result.errors.is_empty());
        assert_eq!(result.student_name, PLACEHOLDER_NAME);
        assert_eq!(
            result.warnings,
            vec![NAME_NOT_FOUND, DATE_RANGE_NOT_FOUND, OBJECTIVE_NOT_FOUND]
        );
    }

    #[test]
    fn name_warning_not_emitted_for_extractable_name() {
        let text = "\
张三
| 日期 | 星期 |
| --- | --- |
| 1.13 | 周一 |";
        let result = parse(text);
        assert_eq!(result.student_name, "张三");
        assert_eq!(result.warnings, vec![DATE_RANGE_NOT_FOUND, OBJECTIVE_NOT_FOUND]);
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse(FULL_DOCUMENT), parse(FULL_DOCUMENT));
        let degenerate = "标题\n无表格";
        assert_eq!(parse(degenerate), parse(degenerate));
    }
}
