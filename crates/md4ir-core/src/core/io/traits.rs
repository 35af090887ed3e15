use super::error::FileError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Common interface of the text formats.
pub trait DataFile {
    /// The value a file of this format holds.
    type Data;

    /// Parses a value from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::MalformedInput`] or [`FileError::InconsistentTrajectory`] when
    /// the content does not fit the format, and [`FileError::Io`] on read failures.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Data, FileError>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Data, FileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Formats md4ir produces as output.
pub trait WritableFile: DataFile {
    /// Serializes a value, one record per line.
    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), FileError>;

    /// Writes a value to `path` through a temporary file in the same directory, so the
    /// target either receives the complete content or is left untouched.
    fn write_to_path<P: AsRef<Path>>(data: &Self::Data, path: P) -> Result<(), FileError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            Self::write_to(data, &mut writer)?;
            writer.flush()?;
        }
        temp.persist(path).map_err(|e| FileError::Io(e.error))?;
        Ok(())
    }
}
