//! Line-oriented edge-list input and component output.

pub mod reader;
pub mod writer;

pub use reader::EdgeListReader;
pub use writer::ComponentWriter;
