pub mod export;
pub mod generate;
pub mod pin;
pub mod project;
pub mod rules;
pub mod schedule;
pub mod validate;

use skylt_core::error::SkyltError;

/// Convert a 1-based page number from the command line to a page index.
pub(crate) fn page_index(page: usize, count: usize) -> Result<usize, SkyltError> {
    if page == 0 || page > count {
        return Err(SkyltError::PageOutOfRange { page, count });
    }
    Ok(page - 1)
}

/// Convert a 1-based row number from the command line to a row index.
pub(crate) fn row_index(row: usize, len: usize) -> Result<usize, SkyltError> {
    if row == 0 || row > len {
        return Err(SkyltError::RowOutOfRange { index: row, len });
    }
    Ok(row - 1)
}
