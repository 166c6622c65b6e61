//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Instance,
    Example,
    Attribute,
    Domain,
    Sample,
    SampleReader,
};


pub use crate::id3::{
    // Learner
    Id3Builder,
    Id3,
    Execution,

    // Classifier
    Id3Classifier,
    Node,
    Edge,
};


pub use crate::classifier::Classifier;


pub use crate::error::{Error, Result};
