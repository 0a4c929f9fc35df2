// File: crates/numdiff/src/lib.rs
// Summary: Library entry point; exports the experiment math and the dataset model.

pub mod dataset;
pub mod fdiff;
pub mod grid;
pub mod norms;
pub mod richardson;
pub mod task;

pub use dataset::{Dataset, DatasetError};
pub use fdiff::derivative;
pub use norms::Norms;
pub use richardson::RungeRefined;
pub use task::{ErrorTable, TaskParams};
