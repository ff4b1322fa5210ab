//! Named lines and the collection of lines on the network.

mod error;
mod registry;

pub use error::LineError;
pub use registry::{Line, LineRegistry};
