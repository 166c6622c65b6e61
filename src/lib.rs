#![warn(missing_docs)]

//!
//! A crate that grows ID3 decision trees.
//!
//! A tree is grown from labeled examples over categorical attributes.
//! Each branch splits on the attribute with the highest information gain
//! and gets one edge per value of the attribute's global domain;
//! a node becomes a leaf once its examples share a label.
//!
//! ```no_run
//! use miniid3::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("weather.csv")
//!     .has_header(true)
//!     .target_feature("play")
//!     .read()
//!     .unwrap();
//! let f = Id3Builder::new(&sample)
//!     .build()
//!     .fit();
//!
//! let instance = Instance::new()
//!     .with("outlook", "sunny")
//!     .with("temperature", "mild")
//!     .with("humidity", "high")
//!     .with("wind", "weak");
//! println!("{}", f.classify(&instance).unwrap());
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod id3;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    Instance,
    Example,
    Attribute,
    Domain,
    Sample,
    SampleReader,
};

pub use classifier::Classifier;

pub use id3::{
    Id3Builder,
    Id3,
    Execution,
    Id3Classifier,
    Node,
    Edge,
};
