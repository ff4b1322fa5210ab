//! Subway map server.
//!
//! Keeps each line's stations in travel order and refuses any change that
//! would leave a line invalid: unregistered or repeated stations, insert
//! positions off either end, or lines shorter than two stations.

pub mod config;
pub mod domain;
pub mod lines;
pub mod network;
pub mod sections;
pub mod stations;
pub mod web;
