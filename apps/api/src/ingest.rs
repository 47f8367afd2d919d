//! Spreadsheet Ingestor — turns uploaded workbook bytes into candidate records.
//!
//! Only the first worksheet is read. The first row is the header; every data
//! row becomes one `CandidateRecord` with keys normalized to
//! lowercase-with-underscores. A workbook that parses but holds zero data rows
//! is NOT a format error — the caller decides how to report an empty batch.

use std::collections::BTreeMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, DataType, Reader};
use thiserror::Error;

use crate::evaluation::models::CandidateRecord;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unable to open the workbook: {0}")]
    Workbook(String),

    #[error("the workbook does not contain any worksheets")]
    NoWorksheet,

    #[error("unable to read the worksheet data: {0}")]
    Worksheet(String),
}

/// Parses the first worksheet into an ordered sequence of candidate records.
///
/// Row numbering is 1-based over data rows (header excluded), and the
/// synthetic id is `candidate_<row_number>`. Blank or absent cells become the
/// empty string. Two headers that normalize to the same key overwrite in
/// column order — last wins.
pub fn parse_candidates(bytes: &[u8]) -> Result<Vec<CandidateRecord>, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| IngestError::Workbook(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::NoWorksheet)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or(IngestError::NoWorksheet)?
        .map_err(|e| IngestError::Worksheet(e.to_string()))?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell)))
            .collect(),
        // An entirely empty sheet has no header and therefore no candidates
        None => return Ok(Vec::new()),
    };

    let mut candidates = Vec::new();
    for (index, row) in rows.enumerate() {
        let row_number = (index + 1) as u32;
        let mut fields = BTreeMap::new();
        for (col, header) in headers.iter().enumerate() {
            let value = row.get(col).map(cell_to_string).unwrap_or_default();
            fields.insert(header.clone(), value);
        }
        candidates.push(CandidateRecord {
            id: format!("candidate_{row_number}"),
            row_number,
            fields,
        });
    }

    Ok(candidates)
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}
