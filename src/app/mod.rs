pub mod export;

pub use export::{render, write_output, ExportRequest};
