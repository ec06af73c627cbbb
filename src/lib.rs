//! Replica write acknowledgments: building the reply a replica sends after applying a mutation,
//! and reading it back on the coordinator.

#[macro_use]
extern crate slog_global;

pub mod setup;

mod reply;
pub use reply::*;

pub use conf::{ClusterInfo, LocalNodeInfo};
pub use message::{Codec, LocalNode, Message, MessageError, Reply, Verb, WriteAck};
