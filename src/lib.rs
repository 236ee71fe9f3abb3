pub use std::collections::BTreeMap as Map;
pub use std::collections::BTreeSet as Set;

pub mod current;
pub mod equation;
pub mod error;
pub mod factory;
pub mod model;
pub mod neuron;
pub mod param;
pub mod spec;

pub use error::{Error, Result};
