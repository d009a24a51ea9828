//! This directory provides some features for research.
//! Measure the followings of the boosting algorithm per round:
//! - Running time
//! - Objective value
//! - Training loss
//! - Test loss

/// Defines a struct that runs a boosting algorithm with logging.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

/// Defines objective functions.
pub mod objective_functions;

/// Provides a train/test pair generator for cross validation.
pub mod cross_validation;

/// Renders a labeled sample as a 2-D scatter plot.
pub mod plot;


pub use logger::{Logger, Research};
pub use objective_functions::{
    ObjectiveFunction,
    ExponentialLoss,
};
pub use loss_functions::zero_one_loss;
pub use cross_validation::CrossValidation;
pub use plot::scatter_plot;
