use crate::*;

/// Monte Carlo estimator over a stochastic evaluator.
///
/// Calls the wrapped evaluator `samples` times with the same argument and
/// returns the arithmetic mean of the results.
pub struct Averaged<F> {
    evaluator: F,
    samples: usize,
}

impl<F> Averaged<F> {
    pub fn new(evaluator: F, samples: usize) -> Self {
        assert!(samples > 0, "averaging needs at least one sample");
        Self { evaluator, samples }
    }
    pub fn samples(&self) -> usize {
        self.samples
    }
    pub fn estimate<A>(&mut self, arg: A) -> Utility
    where
        A: Copy,
        F: FnMut(A) -> Utility,
    {
        let total = (0..self.samples)
            .map(|_| (self.evaluator)(arg))
            .sum::<Utility>();
        total / self.samples as Utility
    }
}
