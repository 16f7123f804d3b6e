use crate::helpers::xml::XmlError;
use thiserror::Error;

/// Main error type for the PlanSheet crate.
/// Aggregates failures from the standard library, dependencies and internal
/// modules; parsing itself never raises, so every variant belongs to the
/// rendering path.
#[derive(Error, Debug)]
pub enum PlanSheetError {
    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    // Helper module errors
    #[error("{0}")]
    XmlHelperError(String),

    // Workbook module errors
    #[error("{0}")]
    WorkbookError(#[from] crate::workbook::WorkbookError),
}

impl From<XmlError> for PlanSheetError {
    fn from(error: XmlError) -> Self {
        PlanSheetError::XmlHelperError(error.to_string())
    }
}
