//! Input layer: in-memory table and CSV/TSV loading.

mod parser;
mod source;

pub use parser::{Loader, LoaderConfig};
pub use source::{DataTable, SourceMetadata};
