//! Exports the standard boosting items of this crate.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // The boosting algorithm
    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,

    // Decision stump
    DecisionStump,
    NegativeSide,
    StumpClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::common::BoostError;
