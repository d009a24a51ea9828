//! Provides the `Booster` trait.

use crate::{
    WeakLearner,
    WeightedMajority,
    common::error::BoostError,
};

use std::ops::ControlFlow;


/// The trait [`Booster`](Booster) defines the standard framework of Boosting.
///
/// You need to implement [`Booster::preprocess`](Booster::preprocess),
/// [`Booster::boost`](Booster::boost),
/// and [`Booster::postprocess`](Booster::postprocess)
/// to write a new boosting algorithm.
pub trait Booster<F> {
    /// A main function that runs the boosting algorithm.
    /// Fails fast: if the training sample violates an input contract,
    /// this method returns the error from
    /// [`Booster::preprocess`](Booster::preprocess)
    /// before any boosting round runs,
    /// so no partial combined hypothesis is ever returned.
    fn run<W>(
        &mut self,
        weak_learner: &W,
    ) -> Result<WeightedMajority<F>, BoostError>
        where W: WeakLearner<Hypothesis = F>
    {
        self.preprocess(weak_learner)?;

        let _ = (1..).try_for_each(|iter| {
            self.boost(weak_learner, iter)
        });

        Ok(self.postprocess(weak_learner))
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`](Booster::run),
    /// this method is called before the boosting process.
    /// Input-contract violations are reported here.
    fn preprocess<W>(
        &mut self,
        weak_learner: &W,
    ) -> Result<(), BoostError>
        where W: WeakLearner<Hypothesis = F>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` if the stopping criterion is not
    /// reached yet,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = F>;


    /// Post-processing.
    /// This method returns a [`WeightedMajority<F>`](WeightedMajority).
    fn postprocess<W>(
        &mut self,
        weak_learner: &W,
    ) -> WeightedMajority<F>
        where W: WeakLearner<Hypothesis = F>;
}
