//! Services layer (ports + adapters).
//!
//! - `ports`: wire contracts and settings types shared by the store and the adapters.
//! - `adapters`: network, filesystem and async runtime implementations.

pub mod adapters;
pub mod ports;
