mod catalog;
mod summary;
pub mod views;

pub use summary::{ResultsMode, ResultsReport};
