//! Ports layer: trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the monitoring core and whatever produces its data.

mod source;

pub use source::{SampleSource, SourceError};
