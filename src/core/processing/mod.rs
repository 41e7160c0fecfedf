pub mod ops;
pub mod parser;
pub mod pipeline;
pub mod registry;
