pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod reporting;
pub mod stream;
pub mod types;
pub mod writer;

pub use error::{Result, TallyError};
