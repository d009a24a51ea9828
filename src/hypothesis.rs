//! Defines the hypothesis traits and the combined hypothesis.

mod hypothesis_traits;
mod weighted_majority;


pub use hypothesis_traits::Classifier;
pub use weighted_majority::WeightedMajority;
