pub mod app;
pub mod cli;
pub mod domain;
pub mod errors;
pub mod output;
pub mod store;
pub mod types;

pub use errors::TgsError;
pub use types::*;
