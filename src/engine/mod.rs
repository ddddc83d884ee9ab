pub mod aggregate;
pub mod chunk;
pub mod generate;
pub mod reader;

pub use aggregate::{Aggregator, RenderedEntry, Tenths};
pub use chunk::process_chunk;
pub use generate::{GenerateOptions, write_measurements};
pub use reader::StreamingReader;
