// src/lib.rs
pub mod cli;
pub mod domain;
pub mod evaluator;
pub mod money;

pub use domain::*;
pub use evaluator::*;
pub use money::*;
