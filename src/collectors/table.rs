// Columnar report parsing: header row + data rows -> ColumnRecord

use thiserror::Error;

use crate::models::{ColumnRecord, DiskUsageRecord, ProcessList};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("report has no header line")]
    MissingHeader,

    #[error("report has no data line")]
    MissingRow,

    #[error("header has {headers} columns but row has {values}")]
    ColumnMismatch { headers: usize, values: usize },
}

/// `df` prints its last column title as two words; the column is keyed by the first.
const SPLIT_TRAILING_HEADER: [&str; 2] = ["Mounted", "on"];

/// Zips headers with values by position. Counts must match exactly.
pub fn pair_columns<H, V>(headers: &[H], values: &[V]) -> Result<ColumnRecord, TableError>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    if headers.len() != values.len() {
        return Err(TableError::ColumnMismatch {
            headers: headers.len(),
            values: values.len(),
        });
    }
    Ok(headers
        .iter()
        .zip(values)
        .map(|(h, v)| (h.as_ref(), v.as_ref()))
        .collect())
}

/// Splits `line` on whitespace into at most `max` fields. The last field keeps
/// the remainder of the line verbatim, inner and trailing whitespace included.
pub fn split_columns(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();
    while !rest.is_empty() && fields.len() < max {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }
    fields
}

fn disk_headers(line: &str) -> Vec<String> {
    let mut headers: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if let [.., first, second] = headers.as_slice()
        && [first.as_str(), second.as_str()] == SPLIT_TRAILING_HEADER
    {
        headers.pop();
    }
    headers
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|l| !l.trim().is_empty())
}

/// Pairs the first header line of a disk-usage report with its first data line.
pub fn parse_disk_report(text: &str) -> Result<DiskUsageRecord, TableError> {
    let mut lines = non_blank_lines(text);
    let headers = disk_headers(lines.next().ok_or(TableError::MissingHeader)?);
    let row = lines.next().ok_or(TableError::MissingRow)?;
    let values: Vec<&str> = row.split_whitespace().collect();
    pair_columns(&headers, &values)
}

/// One record per non-blank process line, in report order.
pub fn parse_process_report(text: &str) -> Result<ProcessList, TableError> {
    let mut lines = non_blank_lines(text);
    let headers: Vec<&str> = lines
        .next()
        .ok_or(TableError::MissingHeader)?
        .split_whitespace()
        .collect();
    Ok(lines
        .map(|line| {
            headers
                .iter()
                .copied()
                .zip(split_columns(line, headers.len()))
                .collect::<ColumnRecord>()
        })
        .collect())
}
