pub mod catalog;
pub mod reporting;
pub mod tables;
