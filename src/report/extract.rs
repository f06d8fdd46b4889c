/// Project raw CSV rows into (group key, rating) pairs plus header labels.
use super::errors::ReportError;

/// First-cell marker identifying a row as column labels rather than data.
const HEADER_SENTINEL: &str = "NAME";

/// Display labels for the two projected columns, taken from a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPair {
    /// Label of the group-key column (e.g., "brand").
    pub key_label: String,
    /// Label of the value column (e.g., "rating").
    pub value_label: String,
}

/// Result of scanning the concatenated input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// One (group key, rating) pair per non-header row, in input order.
    pub pairs: Vec<(String, f64)>,
    /// Labels from the last-seen header row, or `None` if no source had one.
    ///
    /// When several sources each carry a header, the final one wins: every
    /// header row overwrites the previous capture. Callers short-circuit on
    /// empty `pairs` before reading this.
    pub header: Option<HeaderPair>,
}

/// Scan `rows` and project the cells at `key_index` and `value_index`.
///
/// A row whose first cell equals "NAME" case-insensitively is a header row
/// and contributes labels instead of a data pair.
///
/// # Errors
///
/// Returns [`ReportError::RowTooShort`] if any row is narrower than the
/// column mapping requires, and [`ReportError::InvalidRating`] if a value
/// cell does not parse as a decimal number. Both are fatal; no partial
/// recovery is attempted.
pub fn extract(
    rows: &[Vec<String>],
    key_index: usize,
    value_index: usize,
) -> Result<Extraction, ReportError> {
    let needed = key_index.max(value_index) + 1;
    let mut pairs = Vec::new();
    let mut header = None;

    for (i, row) in rows.iter().enumerate() {
        let line = i + 1;
        if row.len() < needed {
            return Err(ReportError::RowTooShort {
                line,
                width: row.len(),
                needed,
            });
        }
        let is_header = row
            .first()
            .is_some_and(|cell| cell.eq_ignore_ascii_case(HEADER_SENTINEL));
        if is_header {
            header = Some(HeaderPair {
                key_label: row[key_index].clone(),
                value_label: row[value_index].clone(),
            });
        } else {
            let value =
                row[value_index]
                    .parse::<f64>()
                    .map_err(|source| ReportError::InvalidRating {
                        line,
                        cell: row[value_index].clone(),
                        source,
                    })?;
            pairs.push((row[key_index].clone(), value));
        }
    }

    Ok(Extraction { pairs, header })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_owned()).collect()
    }

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            row(&["name", "brand", "price", "rating"]),
            row(&["iphone 15 pro", "apple", "999", "4.9"]),
            row(&["galaxy s23 ultra", "samsung", "1199", "4.8"]),
            row(&["redmi note 12", "xiaomi", "199", "4.6"]),
            row(&["iphone 14", "apple", "799", "4.7"]),
            row(&["galaxy a54", "samsung", "349", "4.2"]),
        ]
    }

    #[test]
    fn test_extract_projects_pairs_and_header() {
        let extraction = extract(&sample_rows(), 1, 3).unwrap();
        assert_eq!(
            extraction.pairs,
            vec![
                ("apple".to_owned(), 4.9),
                ("samsung".to_owned(), 4.8),
                ("xiaomi".to_owned(), 4.6),
                ("apple".to_owned(), 4.7),
                ("samsung".to_owned(), 4.2),
            ]
        );
        assert_eq!(
            extraction.header,
            Some(HeaderPair {
                key_label: "brand".to_owned(),
                value_label: "rating".to_owned(),
            })
        );
    }

    #[test]
    fn test_extract_empty_input() {
        let extraction = extract(&[], 1, 3).unwrap();
        assert!(extraction.pairs.is_empty());
        assert!(extraction.header.is_none());
    }

    #[test]
    fn test_extract_header_sentinel_is_case_insensitive() {
        let rows = vec![row(&["NaMe", "brand", "price", "rating"])];
        let extraction = extract(&rows, 1, 3).unwrap();
        assert!(extraction.pairs.is_empty());
        assert_eq!(extraction.header.unwrap().key_label, "brand");
    }

    #[test]
    fn test_extract_last_header_wins() {
        let mut rows = sample_rows();
        rows.push(row(&["name", "maker", "cost", "stars"]));
        let extraction = extract(&rows, 1, 3).unwrap();
        let header = extraction.header.unwrap();
        assert_eq!(header.key_label, "maker");
        assert_eq!(header.value_label, "stars");
        assert_eq!(extraction.pairs.len(), 5);
    }

    #[test]
    fn test_extract_short_row_is_fatal() {
        let rows = vec![row(&["iphone 14", "apple"])];
        let err = extract(&rows, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            ReportError::RowTooShort {
                line: 1,
                width: 2,
                needed: 4,
            }
        ));
    }

    #[test]
    fn test_extract_bad_rating_is_fatal() {
        let rows = vec![row(&["iphone 14", "apple", "799", "great"])];
        let err = extract(&rows, 1, 3).unwrap_err();
        match err {
            ReportError::InvalidRating { line, cell, .. } => {
                assert_eq!(line, 1);
                assert_eq!(cell, "great");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
