use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::BoostError;
use super::feature_struct::Feature;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use stumpboost::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
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
        Self::new()
    }
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false`.
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
    /// Set the column name that is used for the target label.
    /// Each item of the column takes a value in `{-1, +1}`.
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
    /// and returns `Result<Sample, BoostError>`.
    /// This method consumes `self`.
    ///
    /// # Errors
    /// - [`BoostError::Io`] if the file cannot be opened or read.
    /// - [`BoostError::Parse`] if some token is not a number.
    /// - [`BoostError::RaggedRow`] if a row has the wrong width.
    /// - [`BoostError::NoSuchFeature`] if the target column
    ///   does not appear in the file.
    /// - [`BoostError::EmptySample`] if the file has no data rows.
    pub fn read(self) -> Result<Sample, BoostError> {
        let file = self.file
            .expect("`SampleReader::file` is not specified");
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines().enumerate();

        let mut features: Vec<Feature> = Vec::new();
        if self.has_header {
            if let Some((_, line)) = lines.next() {
                features = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }

        let mut n_row = 0_usize;
        for (lineno, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|token| {
                    let token = token.trim();
                    token.parse::<f64>()
                        .map_err(|_| BoostError::Parse {
                            line: lineno + 1,
                            token: token.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            // If the header does not exist, construct a dummy one
            // from the first data row.
            if features.is_empty() {
                features = (1..=xs.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect::<Vec<_>>();
            }

            if xs.len() != features.len() {
                return Err(BoostError::RaggedRow {
                    index: n_row,
                    expected: features.len(),
                    got: xs.len(),
                });
            }

            for (feat, x) in features.iter_mut().zip(xs) {
                feat.append(x);
            }
            n_row += 1;
        }

        if n_row == 0 {
            return Err(BoostError::EmptySample);
        }

        let sample = Sample::from_parts(features, Vec::new());

        match self.target {
            Some(column) => sample.set_target(column),
            None => Ok(sample),
        }
    }
}
