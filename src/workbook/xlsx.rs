//! Serialization of a [`Grid`] into an OOXML (SpreadsheetML) package.
//!
//! The package carries the minimal set of parts for a single styled sheet:
//! content types, the two relationship parts, the workbook, the styles table
//! and one worksheet with inline strings. Everything is built in memory.

use crate::error::PlanSheetError;
use crate::helpers::xml::XmlError;
use crate::helpers::xml::XmlWriter;
use crate::workbook::grid::Grid;
use crate::workbook::style::CELL_STYLES;
use crate::workbook::style::FONT_NAME;
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

// OOXML namespaces and relationship/content types
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const CONTENT_TYPE_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CONTENT_TYPE_XML: &str = "application/xml";
const CONTENT_TYPE_WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const CONTENT_TYPE_WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const CONTENT_TYPE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Serializes the grid into a complete xlsx package and returns its bytes
pub(crate) fn write_package(grid: &Grid, sheet_name: &str) -> Result<Vec<u8>, PlanSheetError> {
    let mut package = ZipWriter::new(Cursor::new(Vec::new()));
    add_part(&mut package, "[Content_Types].xml", &content_types_part()?)?;
    add_part(&mut package, "_rels/.rels", &package_relationships_part()?)?;
    add_part(&mut package, "xl/workbook.xml", &workbook_part(sheet_name)?)?;
    add_part(&mut package, "xl/_rels/workbook.xml.rels", &workbook_relationships_part()?)?;
    add_part(&mut package, "xl/styles.xml", &styles_part()?)?;
    add_part(&mut package, "xl/worksheets/sheet1.xml", &worksheet_part(grid)?)?;
    let cursor = package.finish()?;
    Ok(cursor.into_inner())
}

/// Adds one deflate-compressed part to the package
fn add_part(
    package: &mut ZipWriter<Cursor<Vec<u8>>>,
    path: &str,
    content: &[u8],
) -> Result<(), PlanSheetError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    package.start_file(path, options)?;
    package.write_all(content)?;
    Ok(())
}

/// Converts zero-based row/column indexes to an A1-style cell reference
pub(crate) fn index_to_reference(row: usize, col: usize) -> String {
    let mut letters = String::new();
    let mut remainder = col;
    loop {
        letters.insert(0, (b'A' + (remainder % 26) as u8) as char);
        if remainder < 26 {
            break;
        }
        remainder = remainder / 26 - 1;
    }
    format!("{}{}", letters, row + 1)
}

fn content_types_part() -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    writer.empty(
        "Default",
        &[("Extension", "rels"), ("ContentType", CONTENT_TYPE_RELATIONSHIPS)],
    )?;
    writer.empty("Default", &[("Extension", "xml"), ("ContentType", CONTENT_TYPE_XML)])?;
    writer.empty(
        "Override",
        &[("PartName", "/xl/workbook.xml"), ("ContentType", CONTENT_TYPE_WORKBOOK)],
    )?;
    writer.empty(
        "Override",
        &[("PartName", "/xl/worksheets/sheet1.xml"), ("ContentType", CONTENT_TYPE_WORKSHEET)],
    )?;
    writer.empty(
        "Override",
        &[("PartName", "/xl/styles.xml"), ("ContentType", CONTENT_TYPE_STYLES)],
    )?;
    writer.end("Types")?;
    Ok(writer.finish())
}

fn package_relationships_part() -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("Relationships", &[("xmlns", NS_PACKAGE_RELATIONSHIPS)])?;
    writer.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", REL_OFFICE_DOCUMENT), ("Target", "xl/workbook.xml")],
    )?;
    writer.end("Relationships")?;
    Ok(writer.finish())
}

fn workbook_part(sheet_name: &str) -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("workbook", &[("xmlns", NS_MAIN), ("xmlns:r", NS_RELATIONSHIPS)])?;
    writer.start("sheets", &[])?;
    writer.empty(
        "sheet",
        &[("name", sheet_name), ("sheetId", "1"), ("r:id", "rId1")],
    )?;
    writer.end("sheets")?;
    writer.end("workbook")?;
    Ok(writer.finish())
}

fn workbook_relationships_part() -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("Relationships", &[("xmlns", NS_PACKAGE_RELATIONSHIPS)])?;
    writer.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", REL_WORKSHEET), ("Target", "worksheets/sheet1.xml")],
    )?;
    writer.empty(
        "Relationship",
        &[("Id", "rId2"), ("Type", REL_STYLES), ("Target", "styles.xml")],
    )?;
    writer.end("Relationships")?;
    Ok(writer.finish())
}

/// Writes the styles part from the static style configuration.
///
/// The first font, the two fills, the empty border and cell format 0 are the
/// defaults Excel requires; the role styles follow in `style_index` order so
/// the worksheet can reference them positionally.
fn styles_part() -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("styleSheet", &[("xmlns", NS_MAIN)])?;

    let font_count = (CELL_STYLES.len() + 1).to_string();
    writer.start("fonts", &[("count", &font_count)])?;
    writer.start("font", &[])?;
    writer.empty("sz", &[("val", "11")])?;
    writer.empty("name", &[("val", "Calibri")])?;
    writer.end("font")?;
    for style in &CELL_STYLES {
        writer.start("font", &[])?;
        if style.bold {
            writer.empty("b", &[])?;
        }
        writer.empty("sz", &[("val", &format_number(style.font_size))])?;
        writer.empty("color", &[("rgb", style.color)])?;
        writer.empty("name", &[("val", FONT_NAME)])?;
        writer.end("font")?;
    }
    writer.end("fonts")?;

    writer.start("fills", &[("count", "2")])?;
    for pattern in ["none", "gray125"] {
        writer.start("fill", &[])?;
        writer.empty("patternFill", &[("patternType", pattern)])?;
        writer.end("fill")?;
    }
    writer.end("fills")?;

    writer.start("borders", &[("count", "2")])?;
    writer.start("border", &[])?;
    for side in ["left", "right", "top", "bottom", "diagonal"] {
        writer.empty(side, &[])?;
    }
    writer.end("border")?;
    writer.start("border", &[])?;
    for side in ["left", "right", "top", "bottom"] {
        writer.start(side, &[("style", "thin")])?;
        writer.empty("color", &[("rgb", "FF000000")])?;
        writer.end(side)?;
    }
    writer.empty("diagonal", &[])?;
    writer.end("border")?;
    writer.end("borders")?;

    writer.start("cellStyleXfs", &[("count", "1")])?;
    writer.empty(
        "xf",
        &[("numFmtId", "0"), ("fontId", "0"), ("fillId", "0"), ("borderId", "0")],
    )?;
    writer.end("cellStyleXfs")?;

    let format_count = (CELL_STYLES.len() + 1).to_string();
    writer.start("cellXfs", &[("count", &format_count)])?;
    writer.empty(
        "xf",
        &[("numFmtId", "0"), ("fontId", "0"), ("fillId", "0"), ("borderId", "0"), ("xfId", "0")],
    )?;
    for (index, style) in CELL_STYLES.iter().enumerate() {
        let font_id = (index + 1).to_string();
        let border_id = if style.bordered { "1" } else { "0" };
        let mut attributes = vec![
            ("numFmtId", "0"),
            ("fontId", font_id.as_str()),
            ("fillId", "0"),
            ("borderId", border_id),
            ("xfId", "0"),
            ("applyFont", "1"),
            ("applyAlignment", "1"),
        ];
        if style.bordered {
            attributes.push(("applyBorder", "1"));
        }
        writer.start("xf", &attributes)?;
        writer.empty(
            "alignment",
            &[("horizontal", "left"), ("vertical", "center"), ("wrapText", "1")],
        )?;
        writer.end("xf")?;
    }
    writer.end("cellXfs")?;

    writer.start("cellStyles", &[("count", "1")])?;
    writer.empty("cellStyle", &[("name", "Normal"), ("xfId", "0"), ("builtinId", "0")])?;
    writer.end("cellStyles")?;

    writer.end("styleSheet")?;
    Ok(writer.finish())
}

/// Writes the single worksheet: dimension, column widths, styled rows with
/// inline strings, and the merged banner regions
fn worksheet_part(grid: &Grid) -> Result<Vec<u8>, XmlError> {
    let mut writer = XmlWriter::new();
    writer.declaration()?;
    writer.start("worksheet", &[("xmlns", NS_MAIN), ("xmlns:r", NS_RELATIONSHIPS)])?;

    let last_row = grid.rows.len().saturating_sub(1);
    let last_col = grid.column_widths.len().saturating_sub(1);
    let dimension = format!("A1:{}", index_to_reference(last_row, last_col));
    writer.empty("dimension", &[("ref", &dimension)])?;

    writer.start("cols", &[])?;
    for (index, width) in grid.column_widths.iter().enumerate() {
        let position = (index + 1).to_string();
        writer.empty(
            "col",
            &[
                ("min", position.as_str()),
                ("max", position.as_str()),
                ("width", &format_number(*width)),
                ("customWidth", "1"),
            ],
        )?;
    }
    writer.end("cols")?;

    writer.start("sheetData", &[])?;
    for (row_index, row) in grid.rows.iter().enumerate() {
        let number = (row_index + 1).to_string();
        writer.start(
            "row",
            &[("r", number.as_str()), ("ht", &format_number(row.height)), ("customHeight", "1")],
        )?;
        for (col_index, cell) in row.cells.iter().enumerate() {
            let reference = index_to_reference(row_index, col_index);
            let style = cell.role.style_index().to_string();
            let mut attributes = vec![("r", reference.as_str())];
            if cell.role.style_index() != 0 {
                attributes.push(("s", style.as_str()));
            }
            if cell.text.is_empty() {
                writer.empty("c", &attributes)?;
                continue;
            }
            attributes.push(("t", "inlineStr"));
            writer.start("c", &attributes)?;
            writer.start("is", &[])?;
            if needs_space_preservation(&cell.text) {
                writer.start("t", &[("xml:space", "preserve")])?;
            } else {
                writer.start("t", &[])?;
            }
            writer.text(&cell.text)?;
            writer.end("t")?;
            writer.end("is")?;
            writer.end("c")?;
        }
        writer.end("row")?;
    }
    writer.end("sheetData")?;

    if !grid.merges.is_empty() {
        let count = grid.merges.len().to_string();
        writer.start("mergeCells", &[("count", &count)])?;
        for merge in &grid.merges {
            let reference = format!(
                "{}:{}",
                index_to_reference(merge.row, merge.col_lower),
                index_to_reference(merge.row, merge.col_upper)
            );
            writer.empty("mergeCell", &[("ref", &reference)])?;
        }
        writer.end("mergeCells")?;
    }

    writer.end("worksheet")?;
    Ok(writer.finish())
}

/// True when the text would lose whitespace under default XML handling
fn needs_space_preservation(text: &str) -> bool {
    text.contains('\n') || text != text.trim()
}

/// Formats a width or height without a trailing fractional part
fn format_number(value: f64) -> String {
    format!("{}", value)
}
