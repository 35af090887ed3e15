use super::error::{FileError, parse_float};
use super::tokens::{ColumnLayout, TokenizedFile};
use super::traits::{DataFile, WritableFile};
use crate::core::models::series::TimeSeries;
use nalgebra::Vector3;
use std::io::{BufRead, Write};

/// Column data file: one scalar or one `x y z` sample per line.
///
/// Read in column mode: a single-column first line makes a scalar series, three or more
/// columns make a vector series from the first three.
pub struct ColumnFile;

impl DataFile for ColumnFile {
    type Data = TimeSeries;

    fn read_from(reader: &mut impl BufRead) -> Result<TimeSeries, FileError> {
        let tokens = TokenizedFile::read_from(reader)?;
        let (layout, rows) = tokens.column_rows()?;
        match layout {
            ColumnLayout::Single => rows
                .iter()
                .map(|row| parse_float(&row.fields[0], row.line))
                .collect::<Result<Vec<_>, _>>()
                .map(TimeSeries::Scalar),
            ColumnLayout::Triple => rows
                .iter()
                .map(|row| {
                    Ok(Vector3::new(
                        parse_float(&row.fields[0], row.line)?,
                        parse_float(&row.fields[1], row.line)?,
                        parse_float(&row.fields[2], row.line)?,
                    ))
                })
                .collect::<Result<Vec<_>, FileError>>()
                .map(TimeSeries::Vector),
        }
    }
}

impl WritableFile for ColumnFile {
    fn write_to(series: &TimeSeries, writer: &mut impl Write) -> Result<(), FileError> {
        match series {
            TimeSeries::Scalar(values) => {
                for value in values {
                    writeln!(writer, "{:.6}", value)?;
                }
            }
            TimeSeries::Vector(values) => {
                for v in values {
                    writeln!(writer, "{:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::MalformedKind;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn read(content: &str) -> Result<TimeSeries, FileError> {
        ColumnFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn single_column_gives_scalar_series() {
        assert_eq!(
            read("1.0\n1.5\n2.0\n").unwrap(),
            TimeSeries::Scalar(vec![1.0, 1.5, 2.0])
        );
    }

    #[test]
    fn extra_columns_beyond_three_are_ignored() {
        assert_eq!(
            read("1 2 3 9\n4 5 6 9\n").unwrap(),
            TimeSeries::Vector(vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)])
        );
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        assert!(matches!(
            read("1.0\nnan?\n"),
            Err(FileError::MalformedInput {
                line: 2,
                kind: MalformedKind::InvalidFloat { .. }
            })
        ));
    }

    #[test]
    fn output_uses_six_decimals() {
        let mut buffer = Vec::new();
        ColumnFile::write_to(
            &TimeSeries::Vector(vec![Vector3::new(-1.0, 0.5, 2.0)]),
            &mut buffer,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "-1.000000 0.500000 2.000000\n");
    }

    #[test]
    fn write_to_path_creates_complete_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bond.txt");
        let series = TimeSeries::Scalar(vec![0.96, 0.97]);

        ColumnFile::write_to_path(&series, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.960000\n0.970000\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ColumnFile::read_from_path(dir.path().join("absent.txt")),
            Err(FileError::Io(_))
        ));
    }
}
