//! Tolerant parsing of the pipe-delimited schedule table.
//!
//! The header row is located by a column-name heuristic rather than by
//! position, and malformed data rows are dropped without comment; only a
//! missing header or an empty surviving table is fatal.

use thiserror::Error;

/// Fatal table-parsing conditions.
/// Display texts are the user-facing messages collected into `ParseResult.errors`.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum TableError {
    /// No line qualifies as a table header
    #[error("在输入文件中未找到有效的Markdown表格表头（需要包含\"日期\"或\"星期\"列）")]
    HeaderNotFound,

    /// A header exists but no data row survives filtering
    #[error("未从表格中提取到任何数据行")]
    NoDataRows,
}

/// Column labels and data rows recovered from the table
#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) columns: Vec<String>,
    pub(crate) data_rows: Vec<Vec<String>>,
}

/// Parses the first recognizable table out of the raw document text.
///
/// The header is the first line containing a pipe and a 日期/星期 marker. Data
/// collection starts only after a separator line (pipe plus a dash run) has
/// been seen, wherever that line appears. Rows whose cell count differs from
/// the header, and rows whose cells are all blank, are silently dropped.
pub(crate) fn parse_table(markdown: &str) -> Result<Table, TableError> {
    let lines: Vec<&str> = markdown.trim().lines().collect();

    let header_line = lines
        .iter()
        .find(|line| line.contains('|') && (line.contains("日期") || line.contains("星期")))
        .ok_or(TableError::HeaderNotFound)?;
    let columns = split_cells(header_line);

    let mut data_rows = Vec::<Vec<String>>::new();
    let mut table_started = false;
    for line in &lines {
        if line.contains("---") && line.contains('|') {
            table_started = true;
            continue;
        }
        if !table_started || !line.contains('|') {
            continue;
        }
        let row = split_cells(line);
        if row.len() == columns.len() && row.iter().any(|cell| !cell.is_empty()) {
            data_rows.push(row);
        }
    }

    if data_rows.is_empty() {
        return Err(TableError::NoDataRows);
    }

    Ok(Table { columns, data_rows })
}

/// Splits a pipe-framed line into trimmed cells.
/// The segments before the first and after the last pipe are discarded, so a
/// line framed with pipes yields exactly its interior cells.
fn split_cells(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < 3 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_owned())
        .collect()
}
