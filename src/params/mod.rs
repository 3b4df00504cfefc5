//! Run parameters: data structures, defaults, and JSON loading

mod data;
mod loader;

pub use data::{AccrualMode, ActivationRule, Parameters};
pub use loader::{load_parameters, parameters_from_reader};
