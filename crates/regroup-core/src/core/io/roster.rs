//! Reading and writing the roster relationship grid.
//!
//! The grid is spreadsheet-shaped: the header row carries the student names
//! as column labels, every record carries a student name as its row label,
//! and only cells strictly above the diagonal are meaningful. A score for
//! the pair (row `i`, column `j`) with `j > i` lives at record `i`,
//! column `j`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster record {record} is missing its student name cell")]
    MissingName { record: usize },

    #[error("roster header is missing a student name in column {column}")]
    MissingHeader { column: usize },

    #[error("missing relationship score for pair '{row}' / '{column}'")]
    MissingCell { row: String, column: String },

    #[error(
        "relationship score for pair '{row}' / '{column}' is not a non-negative number: '{value}'"
    )]
    BadScore {
        row: String,
        column: String,
        value: String,
    },
}

/// One roster row: the row student's name plus `(column name, score)` pairs
/// for every column past the row's own diagonal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub name: String,
    pub scores: Vec<(String, u64)>,
}

/// The full roster grid, one row per student in sheet order.
pub type RosterTable = Vec<RosterRow>;

/// Loads an upper-triangular relationship grid from a CSV file.
///
/// Every cell above the diagonal is required; a blank or absent cell aborts
/// the load with a data-integrity error naming the pair. An entirely empty
/// file is a valid zero-student roster.
pub fn read_csv(path: &Path) -> Result<RosterTable, RosterError> {
    from_reader(File::open(path)?)
}

/// Same as [`read_csv`], from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<RosterTable, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // An empty input has no header row and means a zero-student roster.
    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    // Column labels start after the corner cell.
    let column_names: Vec<String> = headers.iter().skip(1).map(|s| s.trim().to_string()).collect();
    let total_columns = column_names.len();

    let mut table = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let name = record
            .get(0)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(RosterError::MissingName { record: index + 1 })?
            .to_string();

        let mut scores = Vec::new();
        for column in (index + 1)..total_columns {
            let column_name = &column_names[column];
            if column_name.is_empty() {
                return Err(RosterError::MissingHeader { column: column + 1 });
            }
            let cell = record
                .get(column + 1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| RosterError::MissingCell {
                    row: name.clone(),
                    column: column_name.clone(),
                })?;
            let score = coerce_score(cell).ok_or_else(|| RosterError::BadScore {
                row: name.clone(),
                column: column_name.clone(),
                value: cell.to_string(),
            })?;
            scores.push((column_name.clone(), score));
        }
        table.push(RosterRow { name, scores });
    }
    Ok(table)
}

/// Writes the grid back out in the same shape it is read in: corner cell,
/// column labels from the row order, blanks on and below the diagonal.
pub fn write_csv(path: &Path, table: &RosterTable) -> Result<(), RosterError> {
    let mut out = Vec::new();
    to_writer(&mut out, table)?;
    let mut file = File::create(path)?;
    file.write_all(&out)?;
    Ok(())
}

/// Same as [`write_csv`], to any writer.
pub fn to_writer<W: Write>(writer: W, table: &RosterTable) -> Result<(), RosterError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![String::new()];
    header.extend(table.iter().map(|row| row.name.clone()));
    csv_writer.write_record(&header)?;

    for (index, row) in table.iter().enumerate() {
        let mut record = vec![row.name.clone()];
        record.extend(std::iter::repeat_n(String::new(), index + 1));
        record.extend(row.scores.iter().map(|(_, score)| score.to_string()));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush().map_err(RosterError::Io)?;
    Ok(())
}

/// Numeric coercion for sheet cells: integers directly, or integral
/// floating-point renderings such as "3.0".
fn coerce_score(cell: &str) -> Option<u64> {
    if let Ok(score) = cell.parse::<u64>() {
        return Some(score);
    }
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Some(value as u64)
        }
        _ => None,
    }
}
