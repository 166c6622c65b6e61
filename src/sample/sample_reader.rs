use std::path::Path;

use log::info;

use crate::error::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use miniid3::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("play")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// Each item of the column is a boolean such as
    /// `true/false`, `yes/no`, or `+1/-1`.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns [`Result<Sample>`](crate::Result).
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics if the file name or the target column is not set.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name for csv is not set");
        let target = self.target
            .expect(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );

        let file = file.as_ref();
        let sample = Sample::from_csv(file, self.has_header, target.as_ref())?;
        info!(
            "read {} examples over {} attributes from {}",
            sample.len(),
            sample.domain().len(),
            file.display(),
        );
        Ok(sample)
    }
}
