use super::error::{FileError, MalformedKind};
use std::io::BufRead;

/// Shape of a column data file, fixed by its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// One value per line.
    Single,
    /// At least three values per line; the first three form a vector.
    Triple,
}

impl ColumnLayout {
    pub fn from_column_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Single),
            n if n >= 3 => Some(Self::Triple),
            _ => None,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Triple => 3,
        }
    }
}

/// A row of a column file: the 1-based line it came from and its leading tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRow<'a> {
    pub line: usize,
    pub fields: &'a [String],
}

/// A text file split into lines of whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizedFile {
    lines: Vec<Vec<String>>,
}

impl TokenizedFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, FileError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            lines.push(line.split_whitespace().map(str::to_string).collect());
        }
        Ok(Self { lines })
    }

    /// All lines verbatim, blank lines included.
    pub fn raw_lines(&self) -> &[Vec<String>] {
        &self.lines
    }

    /// Lines without the blank lines trailing at the end of the file.
    pub fn trimmed_lines(&self) -> &[Vec<String>] {
        let end = self
            .lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        &self.lines[..end]
    }

    /// Column mode: non-blank lines cut to the width given by the first line.
    ///
    /// # Errors
    ///
    /// Fails with [`FileError::MalformedInput`] if the file is empty, the first line has an
    /// unsupported column count (2), or any later line has a different column count than
    /// the first.
    pub fn column_rows(&self) -> Result<(ColumnLayout, Vec<ColumnRow<'_>>), FileError> {
        let mut rows = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(i, tokens)| (i + 1, tokens));

        let (first_line, first) = rows
            .next()
            .ok_or(FileError::malformed(1, MalformedKind::Empty))?;
        let expected = first.len();
        let layout = ColumnLayout::from_column_count(expected).ok_or(FileError::malformed(
            first_line,
            MalformedKind::UnsupportedColumnCount { found: expected },
        ))?;

        let mut out = vec![ColumnRow {
            line: first_line,
            fields: &first[..layout.width()],
        }];
        for (line, tokens) in rows {
            if tokens.len() != expected {
                return Err(FileError::malformed(
                    line,
                    MalformedKind::ColumnCountMismatch {
                        expected,
                        found: tokens.len(),
                    },
                ));
            }
            out.push(ColumnRow {
                line,
                fields: &tokens[..layout.width()],
            });
        }
        Ok((layout, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokenize(content: &str) -> TokenizedFile {
        TokenizedFile::read_from(&mut Cursor::new(content)).unwrap()
    }

    #[test]
    fn trimmed_lines_keep_inner_blank_lines() {
        let file = tokenize("2\n\nH 0 0 0\n");
        assert_eq!(file.trimmed_lines().len(), 3);
        assert!(file.trimmed_lines()[1].is_empty());
        assert_eq!(file.trimmed_lines()[2], vec!["H", "0", "0", "0"]);
    }

    #[test]
    fn trimmed_lines_drop_only_trailing_blanks() {
        let file = tokenize("1\n\nH 0 0 0\n\n   \n");
        assert_eq!(file.trimmed_lines().len(), 3);
    }

    #[test]
    fn single_column_layout() {
        let file = tokenize("1.0\n2.0\n\n3.0\n");
        let (layout, rows) = file.column_rows().unwrap();
        assert_eq!(layout, ColumnLayout::Single);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].line, 4);
        assert_eq!(rows[2].fields, &["3.0".to_string()]);
    }

    #[test]
    fn wide_lines_are_cut_to_three_columns() {
        let file = tokenize("1 2 3 4\n5 6 7 8\n");
        let (layout, rows) = file.column_rows().unwrap();
        assert_eq!(layout, ColumnLayout::Triple);
        assert_eq!(rows[1].fields, &["5", "6", "7"].map(String::from));
    }

    #[test]
    fn two_columns_are_unsupported() {
        let err = tokenize("1 2\n").column_rows().unwrap_err();
        assert!(matches!(
            err,
            FileError::MalformedInput {
                line: 1,
                kind: MalformedKind::UnsupportedColumnCount { found: 2 }
            }
        ));
    }

    #[test]
    fn later_line_with_fewer_columns_is_rejected() {
        let err = tokenize("1 2 3\n4 5\n").column_rows().unwrap_err();
        assert!(matches!(
            err,
            FileError::MalformedInput {
                line: 2,
                kind: MalformedKind::ColumnCountMismatch {
                    expected: 3,
                    found: 2
                }
            }
        ));
    }

    #[test]
    fn empty_file_is_malformed() {
        let err = tokenize("\n\n").column_rows().unwrap_err();
        assert!(matches!(
            err,
            FileError::MalformedInput {
                kind: MalformedKind::Empty,
                ..
            }
        ));
    }
}
