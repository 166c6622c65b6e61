//! Defines the `Classifier` trait.
use crate::{Instance, Sample};
use crate::error::Result;


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts the label of `instance`.
    ///
    /// Fails if `instance` lacks an attribute the classifier needs,
    /// or takes a value it has never seen.
    fn classify(&self, instance: &Instance) -> Result<bool>;


    /// Predicts the labels of every example in `sample`.
    fn classify_all(&self, sample: &Sample) -> Result<Vec<bool>> {
        sample.examples()
            .iter()
            .map(|example| self.classify(example.instance()))
            .collect()
    }


    /// Fraction of examples in `sample` that are misclassified.
    /// Returns `0.0` for an empty sample.
    fn error_rate(&self, sample: &Sample) -> Result<f64> {
        if sample.is_empty() { return Ok(0.0); }

        let predictions = self.classify_all(sample)?;
        let n_miss = predictions.into_iter()
            .zip(sample.examples())
            .filter(|(p, example)| *p != example.label())
            .count();
        Ok(n_miss as f64 / sample.len() as f64)
    }
}
