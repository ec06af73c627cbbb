use std::fmt;
use std::net::SocketAddr;

/// Verb tells a receiver how to handle a message body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Mutation,
    Response,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Mutation => "mutation",
            Verb::Response => "response",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message is the envelope exchanged between nodes.
/// `body` is an encoded request or reply, e.g., a `WriteAck`.
/// A reply keeps the `id` of the request it answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: u64,
    from: SocketAddr,
    verb: Verb,
    body: Vec<u8>,
}

impl Message {
    pub fn new(id: u64, from: SocketAddr, verb: Verb, body: Vec<u8>) -> Message {
        Message {
            id,
            from,
            verb,
            body,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// from returns the address of the node that sent this message.
    pub fn from(&self) -> SocketAddr {
        self.from
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// reply_to returns where a reply to this message should be sent.
    pub fn reply_to(&self) -> SocketAddr {
        self.from
    }
}

/// Reply builds a response to a received message.
pub trait Reply {
    type Output;

    /// reply makes a response carrying `body`, sent by `from` and addressed to the original
    /// sender.
    fn reply(&self, from: SocketAddr, body: Vec<u8>) -> Self::Output;
}

impl Reply for Message {
    type Output = Message;

    fn reply(&self, from: SocketAddr, body: Vec<u8>) -> Message {
        Message::new(self.id, from, Verb::Response, body)
    }
}

/// LocalNode provides the address of the node this process serves as.
pub trait LocalNode {
    fn local_addr(&self) -> SocketAddr;
}

impl LocalNode for SocketAddr {
    fn local_addr(&self) -> SocketAddr {
        *self
    }
}
