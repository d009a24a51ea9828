//! The files in the `weak_learner/` directory define
//! the `WeakLearner` trait and the weak learners.

/// Provides the `WeakLearner` trait.
pub mod core;

/// Defines the decision stump.
pub mod decision_stump;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DecisionStump,
    NegativeSide,
    StumpClassifier,
};
