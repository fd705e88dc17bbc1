//! Plain-text matrix serialization
//!
//! The format is the row and column counts followed by the elements in
//! row-major order, all whitespace separated:
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 5 6
//! ```
//!
//! [`write_matrix`] emits one row per line; [`read_matrix`] accepts any
//! whitespace layout, so the two round-trip.

use crate::matrix::DenseMatrix;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a matrix from text
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid numeric token {token:?}")]
    Parse { token: String },
    #[error("truncated input: expected {expected} more values")]
    Truncated { expected: usize },
}

fn parse_usize(token: &str) -> Result<usize, ReadError> {
    token.parse().map_err(|_| ReadError::Parse {
        token: token.to_owned(),
    })
}

fn parse_f64(token: &str) -> Result<f64, ReadError> {
    token.parse().map_err(|_| ReadError::Parse {
        token: token.to_owned(),
    })
}

/// Read a matrix from a text stream
///
/// # Errors
///
/// Returns [`ReadError::Truncated`] when fewer values than `rows * cols` are
/// present and [`ReadError::Parse`] on a malformed token.
pub fn read_matrix<R: BufRead>(mut reader: R) -> Result<DenseMatrix, ReadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let rows = parse_usize(tokens.next().ok_or(ReadError::Truncated { expected: 2 })?)?;
    let cols = parse_usize(tokens.next().ok_or(ReadError::Truncated { expected: 1 })?)?;

    let mut matrix = DenseMatrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let remaining = rows * cols - (i * cols + j);
            let token = tokens.next().ok_or(ReadError::Truncated {
                expected: remaining,
            })?;
            matrix.set(i, j, parse_f64(token)?);
        }
    }
    Ok(matrix)
}

/// Read a matrix from a file
pub fn read_matrix_path<P: AsRef<Path>>(path: P) -> Result<DenseMatrix, ReadError> {
    read_matrix(BufReader::new(File::open(path)?))
}

/// Write a matrix to a text stream, one row per line
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &DenseMatrix) -> io::Result<()> {
    writeln!(writer, "{} {}", matrix.rows(), matrix.cols())?;
    for i in 0..matrix.rows() {
        let row: Vec<String> = matrix.row(i).iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Write a matrix to a file
pub fn write_matrix_path<P: AsRef<Path>>(path: P, matrix: &DenseMatrix) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_matrix(&mut writer, matrix)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_matrix() {
        let text = "2 3\n1 2 3\n4 5 6\n";
        let m = read_matrix(Cursor::new(text)).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
    }

    #[test]
    fn test_read_accepts_any_whitespace_layout() {
        let text = "2 2 1.5 -2 0.25 1e3";
        let m = read_matrix(Cursor::new(text)).unwrap();
        assert_eq!(m.get(0, 1), -2.0);
        assert_eq!(m.get(1, 1), 1000.0);
    }

    #[test]
    fn test_round_trip() {
        let original =
            DenseMatrix::from_rows(&[&[0.1, -2.25, 3.0], &[4.0, 5.5, -0.000625]]);
        let mut buffer = Vec::new();
        write_matrix(&mut buffer, &original).unwrap();

        let recovered = read_matrix(Cursor::new(buffer)).unwrap();
        assert_eq!(recovered, original);
    }

    #[test]
    fn test_truncated_input() {
        let result = read_matrix(Cursor::new("2 2 1 2 3"));
        assert!(matches!(result, Err(ReadError::Truncated { expected: 1 })));
    }

    #[test]
    fn test_malformed_token() {
        let result = read_matrix(Cursor::new("2 2 1 2 x 4"));
        assert!(matches!(result, Err(ReadError::Parse { token }) if token == "x"));
    }
}
