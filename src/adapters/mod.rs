//! Adapters layer: concrete implementations of ports and outbound formats.
//!
//! - `synthetic`: seeded random vital-sign generator (stands in for a feed)
//! - `export`: delimited-text serialization of the retained history

pub mod export;
pub mod synthetic;

pub use synthetic::SyntheticVitals;
