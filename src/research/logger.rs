//! Runs a boosting algorithm while logging its behavior per round.
use colored::Colorize;

use crate::{
    Sample,
    Booster,
    WeakLearner,
    WeightedMajority,
    common::error::BoostError,
};
use super::objective_functions::ObjectiveFunction;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const HEADER: &str = "ObjectiveValue,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log the algorithm's behavior.
pub trait Research<H> {
    /// Returns the combined hypothesis at the current state.
    fn current_hypothesis(&self) -> WeightedMajority<H>;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each round of boosting.
pub struct Logger<'a, B, W, F, G> {
    booster: B,
    weak_learner: W,
    objective_func: F,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
}


impl<'a, B, W, F, G> Logger<'a, B, W, F, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        objective_func: F,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self { booster, weak_learner, loss_func, objective_func, train, test }
    }
}

impl<H, B, W, F, G> Logger<'_, B, W, F, G>
    where B: Booster<H> + Research<H>,
          W: WeakLearner<Hypothesis = H>,
          F: ObjectiveFunction<WeightedMajority<H>>,
          G: Fn(&Sample, &WeightedMajority<H>) -> f64,
{
    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`,
    /// measuring running time and losses per round on top of it.
    ///
    /// # Errors
    /// Contract violations of the training sample
    /// and failures while writing the log file.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<WeightedMajority<H>, BoostError>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        println!(
            "{} [{}, objective: {}]",
            "Running".bold().cyan(),
            self.weak_learner.name().bold(),
            self.objective_func.name().bold(),
        );


        // ------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess(&self.weak_learner)?;


        // Cumulative time (in milliseconds)
        let mut time_acc = 0;

        // ------------------------------------------------------------
        // Boosting step
        let _ = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            time_acc += now.elapsed().as_millis();

            let hypothesis = self.booster.current_hypothesis();

            let obj = self.objective_func.eval(self.train, &hypothesis);
            let train = (self.loss_func)(self.train, &hypothesis);
            let test = (self.loss_func)(self.test, &hypothesis);

            let line = format!("{obj},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())
                .expect("failed to write the log file");

            flow
        });

        let f = self.booster.postprocess(&self.weak_learner);

        let train = (self.loss_func)(self.train, &f);
        let test = (self.loss_func)(self.test, &f);
        println!(
            "{}    [train {}]    [test {}]",
            "Finished".bold().cyan(),
            format!("{train:>.5}").green(),
            format!("{test:>.5}").yellow(),
        );

        Ok(f)
    }
}
