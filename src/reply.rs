use message::{write_ack_serializer, LocalNode, Message, MessageError, Reply, Verb, WriteAck};

/// make_write_reply builds the reply a replica sends back for a mutation request `req`.
/// The reply carries the encoded `ack` and is sent from the local node.
///
/// # Examples
///
/// ```
/// use std::net::SocketAddr;
/// use rack::{make_write_reply, Message, Verb, WriteAck};
///
/// let coordinator: SocketAddr = "127.0.0.1:4441".parse().unwrap();
/// let local: SocketAddr = "127.0.0.1:4442".parse().unwrap();
///
/// let req = Message::new(3, coordinator, Verb::Mutation, vec![]);
/// let repl = make_write_reply(&req, &local, &WriteAck::new("users", "row42", true)).unwrap();
///
/// assert_eq!(3, repl.id());
/// assert_eq!(local, repl.from());
/// ```
pub fn make_write_reply<R, L>(req: &R, local: &L, ack: &WriteAck) -> Result<R::Output, MessageError>
where
    R: Reply,
    L: LocalNode + ?Sized,
{
    let body = write_ack_serializer().serialize(ack)?;
    let from = local.local_addr();

    debug!("make write reply";
        "table" => ack.table(),
        "key" => ack.key(),
        "succeeded" => ack.is_success(),
        "from" => %from,
    );

    Ok(req.reply(from, body))
}

/// parse_write_reply reads the `WriteAck` carried by a reply on the coordinator side.
pub fn parse_write_reply(msg: &Message) -> Result<WriteAck, MessageError> {
    if msg.verb() != Verb::Response {
        return Err(MessageError::UnexpectedVerb(
            Verb::Response.as_str(),
            msg.verb().as_str(),
        ));
    }

    write_ack_serializer().deserialize(msg.body()).map_err(|e| {
        warn!("malformed write reply";
            "id" => msg.id(),
            "from" => %msg.from(),
            "err" => %e,
        );
        e
    })
}
