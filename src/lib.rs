//! # PlanSheet
//!
//! Converts a daily study-plan document written in lightweight Markdown into
//! a styled Excel execution sheet ready for printing or sharing.
//!
//! ## Pipeline
//!
//! - **Parsing** ([`parse`]): heuristic extraction of the student name and
//!   date range from the title line, the weekly objective from its marker
//!   line, and the per-day schedule from a pipe-delimited table. Recoverable
//!   absences become warnings; a missing or empty table is a fatal error.
//!   The result is a pure function of the input text.
//! - **Rendering** ([`render`]): deterministic construction of the fixed
//!   five-region grid (merged title, merged objective, spacer, header, data
//!   rows) with per-role fonts, colors, borders, widths and heights,
//!   serialized as a single-sheet xlsx package together with a filename
//!   derived from the extracted fields.

mod error;
mod helpers;
mod parser;
mod workbook;

pub use crate::error::PlanSheetError;
pub use crate::parser::parse;
pub use crate::parser::ParseResult;
pub use crate::workbook::render;
pub use crate::workbook::Artifact;
pub use crate::workbook::WorkbookError;
