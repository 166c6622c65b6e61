use log::info;

use crate::Sample;
use super::id3_algorithm::{build_tree, build_tree_par};
use super::id3_classifier::Id3Classifier;

use std::fmt;


/// How the tree is grown.
/// Both strategies produce the same tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Grow nodes one by one from an explicit work stack.
    #[default]
    Sequential,
    /// Grow the subtrees below each branch in parallel with `rayon`.
    Parallel,
}


impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequential => "Sequential",
            Self::Parallel => "Parallel (rayon)",
        };

        write!(f, "{name}")
    }
}


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for growing the tree.
///
/// # Example
///
/// ```no_run
/// use miniid3::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("weather.csv")
///     .has_header(true)
///     .target_feature("play")
///     .read()
///     .unwrap();
/// let id3 = Id3Builder::new(&sample)
///     .execution(Execution::Parallel)
///     .build();
/// let f = id3.fit();
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    sample: &'a Sample,
    execution: Execution,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// execution: Execution::Sequential,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, execution: Execution::default(), }
    }


    /// Set the execution strategy.
    /// Default value is `Execution::Sequential`.
    #[inline]
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3<'a> {
        Id3 { sample: self.sample, execution: self.execution }
    }
}


/// Grows an [`Id3Classifier`] from a [`Sample`].
pub struct Id3<'a> {
    sample: &'a Sample,
    execution: Execution,
}


impl Id3<'_> {
    /// Grow the tree over the whole sample and its global domain.
    /// The tree classifies every training example correctly
    /// unless two examples share all attribute values
    /// but disagree on the label.
    pub fn fit(&self) -> Id3Classifier {
        let examples = self.sample.examples()
            .iter()
            .collect::<Vec<_>>();
        let domain = self.sample.domain();

        info!(
            "growing an ID3 tree over {} examples and {} attributes [{}]",
            examples.len(),
            domain.len(),
            self.execution,
        );

        let root = match self.execution {
            Execution::Sequential => build_tree(&examples, domain),
            Execution::Parallel => build_tree_par(&examples, domain),
        };

        info!(
            "grown tree has depth {} and {} leaves",
            root.depth(),
            root.n_leaves(),
        );
        Id3Classifier::from(root)
    }


    /// The execution strategy.
    pub fn execution(&self) -> Execution {
        self.execution
    }
}
