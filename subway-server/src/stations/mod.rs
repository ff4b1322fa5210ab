//! Station registration.
//!
//! Stations must be registered here before any line can reference them.

mod registry;

pub use registry::StationRegistry;
