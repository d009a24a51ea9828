//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use rayon::prelude::*;


use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,

    common::utils,
    common::error::BoostError,
    research::Research,
};

use std::ops::ControlFlow;


/// The default number of boosting rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 40;

/// Floor on the weighted error in the hypothesis-weight computation.
/// Keeps the weight finite when a stump classifies
/// every example correctly.
const ERROR_FLOOR: f64 = 1e-16;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// `AdaBoost` trains a weak learner once per round
/// on a distribution over the training examples,
/// weights the produced hypothesis by its accuracy,
/// and re-weights the distribution so that
/// misclassified examples gain mass and
/// correctly classified ones lose mass.
/// Training stops as soon as the combined hypothesis attains
/// zero training error, or after `max_rounds` rounds otherwise.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`](AdaBoost).
/// See also:
/// - [`DecisionStump`]
/// - [`StumpClassifier`]
/// - [`WeightedMajority<F>`]
/// - [`Sample`]
///
/// [`DecisionStump`]: crate::weak_learner::DecisionStump
/// [`StumpClassifier`]: crate::weak_learner::StumpClassifier
/// [`WeightedMajority<F>`]: crate::hypothesis::WeightedMajority
///
///
/// ```no_run
/// use stumpboost::prelude::*;
///
/// // Read the training sample from a CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Initialize `AdaBoost` with at most 40 boosting rounds.
/// let mut booster = AdaBoost::init(&sample)
///     .max_rounds(40);
///
/// // Set the weak learner.
/// let weak_learner = DecisionStump::new();
///
/// // Run `AdaBoost` and obtain the resulting hypothesis `f`.
/// let f: WeightedMajority<StumpClassifier> =
///     booster.run(&weak_learner).unwrap();
///
/// // Get the predictions on the training set.
/// let predictions: Vec<i64> = f.predict_all(&sample);
///
/// // Calculate the training loss.
/// let n_sample = sample.shape().0 as f64;
/// let training_loss = sample.target()
///     .iter()
///     .zip(predictions)
///     .map(|(&y, fx)| if y as i64 == fx { 0.0 } else { 1.0 })
///     .sum::<f64>()
///     / n_sample;
///
/// println!("Training Loss is: {training_loss}");
/// ```
pub struct AdaBoost<'a, F> {
    // Training sample
    sample: &'a Sample,

    // Distribution over the examples of `sample`.
    dist: Vec<f64>,

    // Cumulative weighted votes, one per example.
    // `scores[i]` is the sum of `weight * h(x_i)`
    // over the hypotheses obtained so far.
    scores: Vec<f64>,

    // Weights on hypotheses in `hypotheses`.
    weights: Vec<f64>,

    // Hypotheses obtained by the weak learner.
    hypotheses: Vec<F>,

    // Maximal number of boosting rounds.
    max_rounds: usize,

    // Fraction of training examples misclassified
    // by the current combined hypothesis.
    training_error: f64,

    // Terminated iteration.
    // AdaBoost terminates in an early step
    // if the training set is linearly separable by the current ensemble.
    terminated: usize,
}


impl<'a, F> AdaBoost<'a, F> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(sample: &'a Sample) -> Self {
        AdaBoost {
            sample,

            dist: Vec::new(),
            scores: Vec::new(),

            weights: Vec::new(),
            hypotheses: Vec::new(),

            max_rounds: DEFAULT_MAX_ROUNDS,
            training_error: 1.0,
            terminated: usize::MAX,
        }
    }


    /// Set the maximal number of boosting rounds.
    /// Default value is [`DEFAULT_MAX_ROUNDS`].
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        assert!(max_rounds > 0, "`AdaBoost` needs at least one round");
        self.max_rounds = max_rounds;
        self
    }


    /// The cumulative weighted votes over the training examples,
    /// updated after every round.
    /// The sign of `self.scores()[i]` is the current prediction
    /// on the i'th training example.
    pub fn scores(&self) -> &[f64] {
        &self.scores[..]
    }


    /// Fraction of training examples misclassified by
    /// the current combined hypothesis.
    pub fn training_error(&self) -> f64 {
        self.training_error
    }


    /// The round at which the boosting process stopped.
    pub fn terminated_at(&self) -> usize {
        self.terminated
    }


    /// Returns the weight on the new hypothesis:
    /// `0.5 * ln((1 - error) / error)`,
    /// with the error floored at a small positive constant
    /// so that a zero weighted error yields a large, finite weight.
    #[inline]
    fn hypothesis_weight(error: f64) -> f64 {
        0.5 * ((1.0 - error) / error.max(ERROR_FLOOR)).ln()
    }
}


impl<F> Booster<F> for AdaBoost<'_, F>
    where F: Classifier + Clone,
{
    fn preprocess<W>(
        &mut self,
        _weak_learner: &W,
    ) -> Result<(), BoostError>
        where W: WeakLearner<Hypothesis = F>
    {
        self.sample.is_valid_binary_instance()?;

        // Initialize parameters
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];
        self.scores = vec![0.0; n_sample];

        self.weights = Vec::new();
        self.hypotheses = Vec::new();

        self.training_error = 1.0;
        self.terminated = self.max_rounds;

        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = F>,
    {
        if self.max_rounds < iteration {
            return ControlFlow::Break(self.max_rounds);
        }

        let sample = self.sample;
        let target = sample.target();


        // Get a new hypothesis
        let h = weak_learner.produce(sample, &self.dist);
        let predictions = h.confidence_all(sample);


        // Each element in `margins` is the product of
        // the predicted value and the correct label.
        let margins = target.iter()
            .zip(&predictions)
            .map(|(y, hx)| y * hx)
            .collect::<Vec<_>>();


        // Weighted error: total mass of the misclassified examples.
        let error = margins.iter()
            .zip(&self.dist)
            .map(|(yh, d)| if *yh < 0.0 { *d } else { 0.0 })
            .sum::<f64>();


        // Compute the weight on the new hypothesis.
        let weight = Self::hypothesis_weight(error);
        self.weights.push(weight);
        self.hypotheses.push(h);


        // Update the distribution:
        // a misclassified example has a negative margin,
        // so its mass grows; a correct one shrinks.
        self.dist.par_iter_mut()
            .zip(&margins)
            .for_each(|(d, yh)| { *d *= (-weight * yh).exp(); });
        utils::normalize(&mut self.dist);


        // Update the cumulative weighted votes.
        self.scores.par_iter_mut()
            .zip(&predictions)
            .for_each(|(s, hx)| { *s += weight * hx; });


        // Training error of the current combined hypothesis.
        // A zero score counts as a `+1` prediction,
        // matching `Classifier::predict`.
        let n_sample = target.len() as f64;
        let misclassified = self.scores.iter()
            .zip(target)
            .filter(|(s, y)| {
                let fx = if **s >= 0.0 { 1.0 } else { -1.0 };
                fx != **y
            })
            .count() as f64;
        self.training_error = misclassified / n_sample;


        // The combined hypothesis classifies every example correctly,
        // so further rounds cannot improve the training error.
        if self.training_error == 0.0 {
            self.terminated = iteration;
            return ControlFlow::Break(iteration);
        }

        ControlFlow::Continue(())
    }


    fn postprocess<W>(
        &mut self,
        _weak_learner: &W,
    ) -> WeightedMajority<F>
        where W: WeakLearner<Hypothesis = F>
    {
        WeightedMajority::from_slices(&self.weights[..], &self.hypotheses[..])
    }
}


impl<H> Research<H> for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    fn current_hypothesis(&self) -> WeightedMajority<H> {
        WeightedMajority::from_slices(&self.weights[..], &self.hypotheses[..])
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::DecisionStump;

    fn toy_sample() -> Sample {
        let rows = vec![
            vec![1.0, 2.1],
            vec![1.5, 1.6],
            vec![1.3, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 1.0],
        ];
        let target = vec![1.0, 1.0, -1.0, -1.0, 1.0];
        Sample::from_rows(rows, target).unwrap()
    }


    #[test]
    fn dist_stays_a_distribution_after_every_round() {
        let sample = toy_sample();
        let weak_learner = DecisionStump::new();

        let mut booster = AdaBoost::init(&sample).max_rounds(10);
        booster.preprocess(&weak_learner).unwrap();

        for iteration in 1.. {
            let flow = booster.boost(&weak_learner, iteration);

            let sum = booster.dist.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1e-9);
            assert!(booster.dist.iter().all(|d| *d >= 0.0));

            if flow.is_break() { break; }
        }
    }


    #[test]
    fn preprocess_starts_uniform() {
        let sample = toy_sample();
        let weak_learner = DecisionStump::new();

        let mut booster = AdaBoost::init(&sample);
        booster.preprocess(&weak_learner).unwrap();

        assert_eq!(booster.dist, vec![0.2; 5]);
        assert_eq!(booster.scores, vec![0.0; 5]);
        assert!(booster.hypotheses.is_empty());
    }
}
