//! I/O layer: the JSON `reader` for exported sound lists and the `writers`
//! that render tales as playlist text.
pub mod reader;
pub use reader::{Document, parse_document, read_document};

pub mod writers;
