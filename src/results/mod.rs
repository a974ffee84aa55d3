pub mod error;
pub mod loader;
pub mod results_model;
