#![warn(missing_docs)]

//!
//! A crate that provides the AdaBoost algorithm
//! over decision stump weak learners.
//!
//! AdaBoost trains a sequence of weak binary classifiers
//! over weighted training examples
//! and combines them into a strong classifier
//! by iteratively re-weighting the examples it misclassifies.
//! The weak learner of this crate is the decision stump:
//! an axis-aligned threshold rule over a single feature,
//! fitted by an exhaustive search over a discretized threshold grid.
//!
//! The main entry points are:
//!
//! - [`Sample`] — the training/test examples,
//!   constructed from in-memory rows or a CSV file,
//! - [`DecisionStump`] — the weak learner,
//! - [`AdaBoost`] — the boosting algorithm,
//! - [`WeightedMajority`] — the combined classifier
//!   that training returns.

pub mod sample;
pub mod booster;
pub mod weak_learner;
pub mod hypothesis;
pub mod common;
pub mod research;

/// Exports the standard traits and structs of this crate.
pub mod prelude;


pub use sample::{Sample, SampleReader, Feature};

pub use booster::Booster;
pub use booster::AdaBoost;

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    NegativeSide,
    StumpClassifier,
};

pub use hypothesis::{Classifier, WeightedMajority};

pub use common::BoostError;
