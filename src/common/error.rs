//! This file defines [`BoostError`], the error type of this library.
use thiserror::Error;


/// Errors that abort training or inference.
///
/// All variants except [`BoostError::Io`] and [`BoostError::Parse`]
/// are contract violations:
/// the given input breaks an invariant the algorithms rely on,
/// so the call fails before producing a partial result.
#[derive(Debug, Error)]
pub enum BoostError {
    /// The sample has no examples or no features.
    #[error("the sample is empty (no examples or no features)")]
    EmptySample,


    /// A row of the feature matrix has the wrong number of features.
    #[error(
        "example {index} has {got} features, \
         while the sample has {expected} features per example"
    )]
    RaggedRow {
        /// Row index of the offending example.
        index: usize,
        /// Number of features every example must have.
        expected: usize,
        /// Number of features the offending example has.
        got: usize,
    },


    /// The number of target labels differs from the number of examples.
    #[error("got {got} target labels for {expected} examples")]
    TargetLength {
        /// Number of examples in the sample.
        expected: usize,
        /// Number of target labels given.
        got: usize,
    },


    /// A target label takes a value other than `-1.0` or `+1.0`.
    #[error("target label {value} of example {index} is not in {{-1, +1}}")]
    NonBinaryLabel {
        /// Row index of the offending example.
        index: usize,
        /// The offending label value.
        value: f64,
    },


    /// No target column was specified when reading a file.
    #[error("the target feature `{0}` does not exist")]
    NoSuchFeature(String),


    /// Failed to read a dataset file.
    #[error("failed to read the dataset file")]
    Io(#[from] std::io::Error),


    /// Failed to parse a value in a dataset file.
    #[error("failed to parse `{token}` at line {line} as a number")]
    Parse {
        /// Line number (1-origin) of the offending token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
}
