use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::dataset::Dataset;
use super::record::Record;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a behavior log to [`Dataset`].
/// Each non-blank line of the file has the form
/// ```text
/// coins_in_room close_to_char five_coins_since five_second_room Label
/// ```
/// where the first four fields are `0` or `1` and `Label` is one of
/// `Chase`, `CollectNearestCoin`, `RoamRoom`, `ChangeRoom`.
/// # Example
/// ```no_run
/// use id3tree::DatasetReader;
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data.txt")
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
}


impl<P> DatasetReader<P> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self { file: None }
    }
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns `std::io::Result<Dataset>`.
    /// Errors are prefixed with the file path.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Dataset> {
        let file = match self.file {
            Some(file) => file,
            None => panic!("The file name for the dataset is not set"),
        };
        let path = file.as_ref();
        File::open(path)
            .and_then(|file| Dataset::from_reader(BufReader::new(file)))
            .map_err(|err| {
                io::Error::new(err.kind(), format!("{}: {err}", path.display()))
            })
    }
}


impl Dataset {
    /// Reads records line by line. Blank lines are skipped.
    /// A malformed line fails with `io::ErrorKind::InvalidData`
    /// naming its (1-based) line number.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
        where R: BufRead,
    {
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let at_line = |err: io::Error| {
                io::Error::new(err.kind(), format!("line {}: {err}", i + 1))
            };

            let line = line.map_err(at_line)?;
            if line.trim().is_empty() { continue; }

            let record = line.parse::<Record>().map_err(at_line)?;
            records.push(record);
        }

        log::debug!("read {} records", records.len());
        Ok(Dataset::new(records))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Action;

    fn dataset(bytes: &[u8]) -> io::Result<Dataset> {
        Dataset::from_reader(bytes)
    }

    #[test]
    fn test_from_reader_01() {
        let bytes = b"1 0 0 0 CollectNearestCoin\n\
                      0 1 0 0 Chase\n\
                      \n\
                      0 0 1 1 ChangeRoom\n";
        let dataset = dataset(bytes).unwrap();
        assert_eq!(dataset.size(), 3);
        assert_eq!(dataset.get(1).unwrap().action(), Action::Chase);
        assert_eq!(dataset.get(2).unwrap().action(), Action::ChangeRoom);
        assert_eq!(dataset.filtered_on().count(), 0);
    }

    #[test]
    fn test_from_reader_empty() {
        let dataset = dataset(b"").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_from_reader_reports_line_number() {
        let bytes = b"1 0 0 0 Chase\n1 0 0 0 Sprint\n";
        let err = dataset(bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2:"), "got `{err}`");
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes = b"1 0 0 0 Chase\n0 1 0 0 \xff\xfe\n";
        let err = dataset(bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2:"), "got `{err}`");
    }

    #[test]
    fn test_read_names_the_file() {
        let path = "/nonexistent/behavior.txt";
        let err = DatasetReader::new()
            .file(path)
            .read()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with(path), "got `{err}`");
    }

    #[test]
    #[should_panic(expected = "not set")]
    fn test_read_without_file() {
        let _ = DatasetReader::<&str>::new().read();
    }
}
