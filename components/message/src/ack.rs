use std::fmt;

use bytes::{Buf, BufMut};

use crate::codec::{read_bool, read_utf, utf_len, write_bool, write_utf, Codec};
use crate::MessageError;

/// WriteAck is sent back by a replica after handling a mutation.
/// It tells the coordinator whether the write to `key` in `table` is applied.
///
/// The fields are set once by `new` and never change.
/// No validation is done on `table` or `key`: the sender is responsible for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WriteAck {
    table: String,
    key: String,
    succeeded: bool,
}

impl WriteAck {
    pub fn new<T, K>(table: T, key: K, succeeded: bool) -> WriteAck
    where
        T: Into<String>,
        K: Into<String>,
    {
        WriteAck {
            table: table.into(),
            key: key.into(),
            succeeded,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// is_success returns true if the replica durably applied the write.
    pub fn is_success(&self) -> bool {
        self.succeeded
    }
}

impl fmt::Display for WriteAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = if self.succeeded { "ok" } else { "failed" };
        write!(f, "{}/{}:{}", self.table, self.key, st)
    }
}

/// Wire layout:
/// `[table_len:u16][table][key_len:u16][key][succeeded:u8]`
impl Codec for WriteAck {
    fn encoded_len(&self) -> usize {
        2 + utf_len(&self.table) + 2 + utf_len(&self.key) + 1
    }

    fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), MessageError> {
        write_utf(buf, "table", &self.table)?;
        write_utf(buf, "key", &self.key)?;
        write_bool(buf, self.succeeded);
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, MessageError> {
        let table = read_utf(buf, "table")?;
        let key = read_utf(buf, "key")?;
        let succeeded = read_bool(buf, "succeeded")?;
        Ok(WriteAck::new(table, key, succeeded))
    }
}

/// WriteAckSerializer converts a `WriteAck` to and from a reply body.
/// It has no state and can be copied or shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteAckSerializer;

impl WriteAckSerializer {
    pub fn serialize(&self, ack: &WriteAck) -> Result<Vec<u8>, MessageError> {
        ack.to_bytes()
    }

    pub fn deserialize(&self, body: &[u8]) -> Result<WriteAck, MessageError> {
        WriteAck::from_bytes(body)
    }
}

pub const fn write_ack_serializer() -> WriteAckSerializer {
    WriteAckSerializer
}
