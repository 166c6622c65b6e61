//! Struct `Sample` represents the labeled training examples
//! and their attribute domain.

// Provides instance and example structs.
pub(crate) mod instance;
// Provides the attribute domain.
pub(crate) mod domain;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use instance::{Instance, Example};
pub use domain::{Attribute, Domain};
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
