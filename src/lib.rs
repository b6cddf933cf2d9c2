//! Route queries over a directed, weighted network of single-letter stops.
//!
//! Build a [`Network`] with [`Network::add_route`] (or parse one from a graph
//! description such as `"AB5, BC4, CD8"`), then ask it for direct distances,
//! bounded trip counts and shortest routes.

pub mod command;
pub mod data;
pub mod error;
pub mod input;
pub mod network;
pub mod shortest;
pub mod trips;

pub use command::Command;
pub use data::{Distance, Route, Stop, StopId, Trip};
pub use error::{CommandError, InputError, NetworkError};
pub use input::RouteRecord;
pub use network::Network;
