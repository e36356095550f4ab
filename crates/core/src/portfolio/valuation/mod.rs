pub mod history_generator;
pub mod valuation_calculator;
pub mod valuation_model;

pub use history_generator::*;
pub use valuation_calculator::*;
pub use valuation_model::*;
