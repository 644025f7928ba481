pub mod payload;
pub mod runtime;
pub mod service;
pub mod service_types;
pub mod stdin;

pub use service::BoardService;
pub use service_types::*;
