use crate::{write_ack_serializer, Codec, MessageError, WriteAck, WriteAckSerializer};

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn test_write_ack_new() {
    let ack = WriteAck::new("users", "row42", true);
    assert_eq!("users", ack.table());
    assert_eq!("row42", ack.key());
    assert_eq!(true, ack.is_success());

    let ack = WriteAck::new(String::from(""), String::from(""), false);
    assert_eq!("", ack.table());
    assert_eq!("", ack.key());
    assert_eq!(false, ack.is_success());

    // no validation on text content
    let ack = WriteAck::new("a/b\0c", "\u{1F600}", true);
    assert_eq!("a/b\0c", ack.table());
    assert_eq!("\u{1F600}", ack.key());
}

#[test]
fn test_write_ack_display() {
    assert_eq!("users/row42:ok", WriteAck::new("users", "row42", true).to_string());
    assert_eq!("t/k:failed", WriteAck::new("t", "k", false).to_string());
}

#[test]
fn test_write_ack_codec() {
    let cases: Vec<(WriteAck, Vec<u8>)> = vec![
        (
            WriteAck::new("users", "row42", true),
            vec![
                0, 5, b'u', b's', b'e', b'r', b's', //
                0, 5, b'r', b'o', b'w', b'4', b'2', //
                1,
            ],
        ),
        (WriteAck::new("", "", false), vec![0, 0, 0, 0, 0]),
        (
            WriteAck::new("t\0", "\u{20AC}", false),
            vec![0, 3, b't', 0xc0, 0x80, 0, 3, 0xe2, 0x82, 0xac, 0],
        ),
    ];

    for (ack, want) in cases.iter() {
        let bs = ack.to_bytes().unwrap();
        assert_eq!(*want, bs, "encode {:?}", ack);
        assert_eq!(want.len(), ack.encoded_len());

        // same value, same bytes
        assert_eq!(bs, ack.to_bytes().unwrap());

        let got = WriteAck::from_bytes(&bs).unwrap();
        assert_eq!(*ack, got);
        assert_eq!(ack.table(), got.table());
        assert_eq!(ack.key(), got.key());
        assert_eq!(ack.is_success(), got.is_success());
    }
}

#[test]
fn test_write_ack_success_flag_distinct() {
    let ok = WriteAck::new("users", "row42", true).to_bytes().unwrap();
    let failed = WriteAck::new("users", "row42", false).to_bytes().unwrap();
    assert_ne!(ok, failed);

    assert_eq!(true, WriteAck::from_bytes(&ok).unwrap().is_success());
    assert_eq!(false, WriteAck::from_bytes(&failed).unwrap().is_success());
}

#[test]
fn test_write_ack_truncated() {
    let bs = WriteAck::new("users", "row42", true).to_bytes().unwrap();

    let cases = vec![
        (0, MessageError::truncated("table", 2, 0)),
        (1, MessageError::truncated("table", 2, 1)),
        (4, MessageError::truncated("table", 5, 2)),
        (8, MessageError::truncated("key", 2, 1)),
        (10, MessageError::truncated("key", 5, 1)),
        (14, MessageError::truncated("succeeded", 1, 0)),
    ];

    for (n, want) in cases.into_iter() {
        let rst = WriteAck::from_bytes(&bs[..n]);
        let err = rst.unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(want, err, "truncated at {}", n);
    }
}

#[test]
fn test_write_ack_swapped_text() {
    // table:"users", key:"k" with the text regions swapped and the length prefixes kept.
    let bs = vec![0, 5, b'k', 0, 1, b'u', b's', b'e', b'r', b's', 1];

    let err = WriteAck::from_bytes(&bs).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(MessageError::bad_text("table", 1, 0), err);
}

#[test]
fn test_write_ack_bad_bool() {
    let mut bs = WriteAck::new("t", "k", true).to_bytes().unwrap();
    let last = bs.len() - 1;

    for b in [2u8, 0x80, 0xff].iter() {
        bs[last] = *b;
        let err = WriteAck::from_bytes(&bs).unwrap_err();
        assert_eq!(MessageError::bad_bool("succeeded", *b), err);
    }

    assert_eq!(
        "malformed message: field:succeeded, invalid bool byte 0x02",
        MessageError::bad_bool("succeeded", 2).to_string()
    );
}

#[test]
fn test_write_ack_trailing() {
    let mut bs = WriteAck::new("t", "k", true).to_bytes().unwrap();
    bs.extend_from_slice(&[0, 0]);

    let err = WriteAck::from_bytes(&bs).unwrap_err();
    assert_eq!(MessageError::Trailing(2), err);
    assert!(err.is_malformed());
}

#[test]
fn test_write_ack_decode_stream() {
    let a = WriteAck::new("users", "row42", true);
    let b = WriteAck::new("orders", "", false);

    let mut bs = a.to_bytes().unwrap();
    b.encode(&mut bs).unwrap();

    let mut buf = &bs[..];
    assert_eq!(a, WriteAck::decode(&mut buf).unwrap());
    assert_eq!(b, WriteAck::decode(&mut buf).unwrap());
    assert_eq!(0, buf.len());
}

#[test]
fn test_write_ack_too_long() {
    let long = "x".repeat(u16::MAX as usize + 1);

    let ack = WriteAck::new(long.as_str(), "k", true);
    assert_eq!(
        MessageError::FieldTooLong("table", 65536),
        ack.to_bytes().unwrap_err()
    );

    let ack = WriteAck::new("t", long.as_str(), true);
    assert_eq!(
        MessageError::FieldTooLong("key", 65536),
        ack.to_bytes().unwrap_err()
    );

    let max = "x".repeat(u16::MAX as usize);
    let ack = WriteAck::new(max.as_str(), "", true);
    let bs = ack.to_bytes().unwrap();
    assert_eq!(2 + 65535 + 2 + 1, bs.len());
    assert_eq!(ack, WriteAck::from_bytes(&bs).unwrap());
}

#[test]
fn test_write_ack_serializer() {
    let s = write_ack_serializer();
    assert_eq!(WriteAckSerializer::default(), s);
    assert_eq!(0, std::mem::size_of::<WriteAckSerializer>());

    let ack = WriteAck::new("users", "row42", true);
    let body = s.serialize(&ack).unwrap();
    assert_eq!(ack.to_bytes().unwrap(), body);
    assert_eq!(ack, s.deserialize(&body).unwrap());

    assert!(s.deserialize(&body[..3]).unwrap_err().is_malformed());
}

#[test]
fn test_write_ack_serializer_shared() {
    static SERIALIZER: WriteAckSerializer = write_ack_serializer();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let ack = WriteAck::new(format!("t{}", i), format!("k{}", i), i % 2 == 0);
                let body = SERIALIZER.serialize(&ack).unwrap();
                assert_eq!(ack, SERIALIZER.deserialize(&body).unwrap());
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
