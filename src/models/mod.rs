//! Model fitting and evaluation.

pub mod linear;
pub mod trainer;

pub use linear::{ModelError, PriceModel};
pub use trainer::{r_squared, train, train_test_split, TrainError, TrainReport};
