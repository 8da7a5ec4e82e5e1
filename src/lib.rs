pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::PricingError;
