use super::*;

#[test]
fn base64_encode_matches_known_vectors() {
    assert_eq!(base64_encode(b""), "");
    assert_eq!(base64_encode(b"f"), "Zg==");
    assert_eq!(base64_encode(b"fo"), "Zm8=");
    assert_eq!(base64_encode(b"foo"), "Zm9v");
    assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    assert_eq!(base64_encode("é".as_bytes()), "w6k=");
}

#[test]
fn plain_sequence_is_bel_terminated() {
    assert_eq!(
        build_sequence("hello", Multiplexer::None).unwrap(),
        "\x1b]52;c;aGVsbG8=\x07"
    );
}

#[test]
fn multiplexers_get_passthrough_wrapping() {
    assert_eq!(
        build_sequence("hi", Multiplexer::Tmux).unwrap(),
        "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\"
    );
    assert_eq!(
        build_sequence("hi", Multiplexer::Screen).unwrap(),
        "\x1bP\x1b]52;c;aGk=\x07\x1b\\"
    );
}

#[test]
fn multiplexer_detection() {
    assert_eq!(Multiplexer::from_env(true, "screen-256color"), Multiplexer::Tmux);
    assert_eq!(Multiplexer::from_env(false, "screen"), Multiplexer::Screen);
    assert_eq!(Multiplexer::from_env(false, "xterm-256color"), Multiplexer::None);
}

#[test]
fn osc52_rejects_large_payloads() {
    let big = "x".repeat(OSC52_MAX_BYTES + 1);
    let err = build_sequence(&big, Multiplexer::None).unwrap_err();
    assert!(matches!(err, Osc52Error::TooLarge { bytes } if bytes == OSC52_MAX_BYTES + 1));
}

#[test]
fn write_sequence_writes_to_sink() {
    let mut sink = Vec::new();
    write_sequence(&mut sink, "a", Multiplexer::None).unwrap();
    assert_eq!(sink, b"\x1b]52;c;YQ==\x07");
}
