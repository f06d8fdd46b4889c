/// Input boundary: load raw CSV rows from the requested files.
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

use csv::ReaderBuilder;

use crate::report::ReportError;

/// Read and concatenate all rows from `paths`, in order.
///
/// A file that does not exist contributes zero rows; this is not an error.
/// Header detection is not done here — every row, header or data, is
/// returned as-is for the extractor to classify.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if a file exists but cannot be opened, and
/// [`ReportError::Csv`] on a CSV-level read failure (malformed quoting,
/// invalid UTF-8, I/O mid-read).
pub fn load_rows(paths: &[PathBuf]) -> Result<Vec<Vec<String>>, ReportError> {
    let mut rows = Vec::new();
    for path in paths {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(ReportError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_rows_reads_all_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "phones.csv",
            "name,brand,price,rating\niphone 14,apple,799,4.7\n",
        );
        let rows = load_rows(&[path]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["name", "brand", "price", "rating"]);
        assert_eq!(rows[1], vec!["iphone 14", "apple", "799", "4.7"]);
    }

    #[test]
    fn test_load_rows_missing_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let present = write_csv(&dir, "a.csv", "x,apple,1,4.0\n");
        let missing = dir.path().join("nope.csv");
        let rows = load_rows(&[missing, present]).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_load_rows_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_csv(&dir, "a.csv", "x,apple,1,4.0\n");
        let b = write_csv(&dir, "b.csv", "y,samsung,2,4.5\n");
        let rows = load_rows(&[a, b]).unwrap();
        assert_eq!(rows[0][1], "apple");
        assert_eq!(rows[1][1], "samsung");
    }

    #[test]
    fn test_load_rows_keeps_uneven_widths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "short.csv", "x,apple,1,4.0\nstub,apple\n");
        let rows = load_rows(&[path]).unwrap();
        assert_eq!(rows[1].len(), 2);
    }
}
