//! Defines the decision stump weak learner and its classifier.

mod stump_algorithm;
mod stump_classifier;


pub use stump_algorithm::{DecisionStump, DEFAULT_NUM_STEPS};
pub use stump_classifier::{
    NegativeSide,
    StumpClassifier,
};
