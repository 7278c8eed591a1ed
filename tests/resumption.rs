//! Property test for spec.md §8's resumption-equivalence invariant:
//! feeding a well-formed message in arbitrary fragments yields the
//! same final parse result as feeding it all at once.

use perch::{Kind, Message};
use proptest::prelude::*;

fn parse_in_one_shot(kind: Kind, buf: &[u8]) -> (usize, Message) {
    let mut msg = Message::new(kind);
    let n = perch::parse(&mut msg, buf, buf.len(), buf.len()).expect("well-formed input");
    (n, msg)
}

/// Feed `buf` to a fresh message one `filled_len` increment at a time,
/// returning the call that finally returns a positive result.
fn parse_incrementally(kind: Kind, buf: &[u8], step: usize) -> (usize, Message) {
    let step = step.max(1);
    let mut msg = Message::new(kind);
    let mut filled = step.min(buf.len());
    loop {
        match perch::parse(&mut msg, buf, filled, buf.len()) {
            Ok(0) => {
                assert!(filled < buf.len(), "ran out of input without completing");
                filled = (filled + step).min(buf.len());
            }
            Ok(n) => return (n, msg),
            Err(e) => panic!("unexpected parse error on well-formed input: {:?}", e),
        }
    }
}

fn request_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::sample::select(vec!["GET", "POST", "HEAD", "OPTIONS", "PUT"]),
        "[a-zA-Z0-9/._-]{1,20}",
        prop::sample::select(vec!["HTTP/1.0", "HTTP/1.1"]),
        prop::collection::vec(("[A-Za-z-]{1,15}", "[ -~]{0,20}"), 0..5),
    )
        .prop_map(|(method, uri, version, headers)| {
            let mut out = Vec::new();
            out.extend_from_slice(method.as_bytes());
            out.push(b' ');
            out.push(b'/');
            out.extend_from_slice(uri.as_bytes());
            out.push(b' ');
            out.extend_from_slice(version.as_bytes());
            out.extend_from_slice(b"\r\n");
            for (name, value) in headers {
                out.extend_from_slice(name.as_bytes());
                out.extend_from_slice(b": ");
                out.extend_from_slice(value.trim().as_bytes());
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(b"\r\n");
            out
        })
}

fn response_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::sample::select(vec!["HTTP/1.0", "HTTP/1.1"]),
        100u16..1000,
        "[ -~]{0,20}",
        prop::collection::vec(("[A-Za-z-]{1,15}", "[ -~]{0,20}"), 0..5),
    )
        .prop_map(|(version, status, reason, headers)| {
            let mut out = Vec::new();
            out.extend_from_slice(version.as_bytes());
            out.push(b' ');
            out.extend_from_slice(status.to_string().as_bytes());
            out.push(b' ');
            out.extend_from_slice(reason.as_bytes());
            out.extend_from_slice(b"\r\n");
            for (name, value) in headers {
                out.extend_from_slice(name.as_bytes());
                out.extend_from_slice(b": ");
                out.extend_from_slice(value.trim().as_bytes());
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(b"\r\n");
            out
        })
}

proptest! {
    #[test]
    fn request_resumption_matches_whole_buffer_parse(buf in request_strategy(), step in 1usize..12) {
        let (whole_n, whole_msg) = parse_in_one_shot(Kind::Request, &buf);
        let (n, msg) = parse_incrementally(Kind::Request, &buf, step);

        prop_assert_eq!(n, whole_n);
        prop_assert_eq!(msg.method(), whole_msg.method());
        prop_assert_eq!(msg.uri, whole_msg.uri);
        prop_assert_eq!(msg.version, whole_msg.version);
        prop_assert_eq!(msg.xheaders.len(), whole_msg.xheaders.len());
        for (a, b) in msg.xheaders.iter().zip(whole_msg.xheaders.iter()) {
            prop_assert_eq!(a.name, b.name);
            prop_assert_eq!(a.value, b.value);
        }
    }

    #[test]
    fn response_resumption_matches_whole_buffer_parse(buf in response_strategy(), step in 1usize..12) {
        let (whole_n, whole_msg) = parse_in_one_shot(Kind::Response, &buf);
        let (n, msg) = parse_incrementally(Kind::Response, &buf, step);

        prop_assert_eq!(n, whole_n);
        prop_assert_eq!(msg.status, whole_msg.status);
        prop_assert_eq!(msg.message, whole_msg.message);
        prop_assert_eq!(msg.version, whole_msg.version);
        prop_assert_eq!(msg.xheaders.len(), whole_msg.xheaders.len());
    }

    #[test]
    fn byte_by_byte_feed_matches_whole_buffer_feed(buf in request_strategy()) {
        let (whole_n, whole_msg) = parse_in_one_shot(Kind::Request, &buf);
        let (n, msg) = parse_incrementally(Kind::Request, &buf, 1);

        prop_assert_eq!(n, whole_n);
        prop_assert_eq!(msg.method(), whole_msg.method());
        prop_assert_eq!(msg.uri, whole_msg.uri);
    }
}
