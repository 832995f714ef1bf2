//! All data types for the girvan-newman library.

pub mod edge;
pub mod error;

pub use edge::DirectedEdge;
pub use error::{GnError, GnResult};

/// Integer node identifier, as read from an edge list.
pub type NodeId = i64;

/// Default relative tolerance used when deciding which scores tie the maximum.
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-9;

/// Default number of components at which a split run stops.
pub const DEFAULT_TARGET_COMPONENTS: usize = 2;

/// Separator line written between components in the text output format.
pub const COMPONENT_SEPARATOR: &str = "--";
