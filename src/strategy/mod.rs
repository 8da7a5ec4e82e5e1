pub mod revision;
pub mod thompson;
pub mod traits;
