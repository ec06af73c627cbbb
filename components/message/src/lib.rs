//! Wire messages a replica sends back to a coordinator.

#[macro_use]
extern crate quick_error;

mod errors;
pub use errors::*;

mod ack;
pub use ack::*;

pub mod codec;
pub use codec::Codec;

mod envelope;
pub use envelope::*;

#[cfg(test)]
mod test_ack;
