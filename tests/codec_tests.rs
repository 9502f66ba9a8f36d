//! Encode/decode tests against the international table

use rust_morse_player::codec::SymbolCodec;
use rust_morse_player::error::ErrorKind;
use rust_morse_player::registry::TableRegistry;
use rust_morse_player::table::SymbolTable;

fn codec() -> SymbolCodec {
    SymbolCodec::international()
}

#[test]
fn test_encode_hello_world_literal() {
    assert_eq!(
        codec().encode("HELLO WORLD").unwrap(),
        ".... . .-.. .-.. ---     .-- --- .-. .-.. -.."
    );
}

#[test]
fn test_encode_is_case_insensitive() {
    assert_eq!(codec().encode("hello world").unwrap(), codec().encode("HELLO WORLD").unwrap());
}

#[test]
fn test_encode_digits_and_punctuation() {
    assert_eq!(
        codec().encode("1234567890").unwrap(),
        ".---- ..--- ...-- ....- ..... -.... --... ---.. ----. -----"
    );
    assert_eq!(codec().encode("!?.").unwrap(), "-.-.-- ..--.. .-.-.-");
}

#[test]
fn test_encode_skips_unknown_characters() {
    assert_eq!(codec().encode("S#O~S").unwrap(), "... --- ...");
    assert_eq!(codec().encode("###").unwrap(), "");
}

#[test]
fn test_encode_empty_is_input_error() {
    let err = codec().encode("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(err.to_string(), "Input Error: input_string cannot be empty");
}

#[test]
fn test_decode_sos() {
    assert_eq!(codec().decode("... --- ...").unwrap(), "SOS");
}

#[test]
fn test_decode_hello_world() {
    assert_eq!(
        codec().decode(".... . .-.. .-.. ---     .-- --- .-. .-.. -..").unwrap(),
        "HELLO WORLD"
    );
    assert_eq!(
        codec().decode(".... . .-.. .-.. ---   .-- --- .-. .-.. -..").unwrap(),
        "HELLO WORLD"
    );
}

#[test]
fn test_decode_empty_is_input_error() {
    assert_eq!(codec().decode("").unwrap_err().kind(), ErrorKind::Input);
}

#[test]
fn test_decode_names_invalid_character() {
    let err = codec().decode("... --- ... !").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(err.invalid(), &['!']);
    assert!(err.to_string().contains("'!'"));
}

#[test]
fn test_decode_enumerates_every_invalid_character() {
    let err = codec().decode("a.b-a_").unwrap_err();
    assert_eq!(err.invalid(), &['a', 'b', '_']);
}

#[test]
fn test_round_trip() {
    let samples = [
        "sos",
        "Hello World",
        "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
        "1234567890",
        "what? no! (yes) a/b = c + d",
        "mail@example.com $5",
        " leading",
        "trailing ",
        "two  spaces",
    ];
    let codec = codec();
    for text in samples {
        let morse = codec.encode(text).unwrap();
        assert_eq!(codec.decode(&morse).unwrap(), text.to_uppercase(), "{text:?} via {morse:?}");
    }
}

#[test]
fn test_custom_table_from_registry() {
    let table = SymbolTable::new([
        ("A", ".-"),
        ("B", "-..."),
        ("C", "-.-."),
        ("1", ".----"),
        ("2", "..---"),
        ("3", "...--"),
    ])
    .unwrap();

    let mut registry = TableRegistry::with_builtins();
    registry.register("custom", table).unwrap();
    let codec = registry.codec("custom").unwrap();

    assert_eq!(codec.variant(), "custom");
    assert_eq!(codec.encode("ab 12").unwrap(), ".- -...     .---- ..---");
    // Not in the custom table.
    assert_eq!(codec.encode("AZ").unwrap(), ".-");
    assert_eq!(codec.decode("-.-. ...--").unwrap(), "C3");
}
