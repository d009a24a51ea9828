mod adaboost_algorithm;

pub use adaboost_algorithm::{AdaBoost, DEFAULT_MAX_ROUNDS};
