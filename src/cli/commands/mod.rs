pub mod board;
pub mod meta;
