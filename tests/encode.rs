mod fixtures;
use fixtures::*;

use pretty_assertions::assert_eq;
use properuri::encode::{encode_to_chars, encode_to_string};
use properuri::{encode_uri, encode_uri_component, encode_uri_utf16};
use properuri::{encode_uri_component_utf16, try_encode_uri_utf16};
use properuri::try_encode_uri_component_utf16;
use properuri::{EncodeError, Exception, ExceptionSet};
use rstest::rstest;

#[rstest]
#[case("https://www.example.com/", "https://www.example.com/")]
#[case("https://www.example.com", "https://www.example.com")]
#[case("https://www.example.com?foo=bar", "https://www.example.com?foo=bar")]
#[case("https://www.example.com#foobar", "https://www.example.com#foobar")]
#[case("https://www.example.com:8080/foo/bar", "https://www.example.com:8080/foo/bar")]
#[case(
    "https://www.example.com/AZaz09;,/?:@&=+$-_.!~*'()#",
    "https://www.example.com/AZaz09;,/?:@&=+$-_.!~*'()#"
)]
#[case(
    "https://www.example.com/azAZ\u{e4}\u{f6}\u{fc}\u{c4}\u{d6}\u{dc}\u{df}",
    "https://www.example.com/azAZ%C3%A4%C3%B6%C3%BC%C3%84%C3%96%C3%9C%C3%9F"
)]
#[case("\r", "%0D")]
#[case("\u{a9}", "%C2%A9")]
#[case("\u{29ed}", "%E2%A7%AD")]
#[case("\u{1f600}", "%F0%9F%98%80")]
#[case("a b%20", "a%20b%2520")]
/// Full URIs keep every reserved and unreserved character.
fn uri_scenarios(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(encode_uri(input), expected);
}

#[rstest]
#[case("AZaz09-_.!~*'()", "AZaz09-_.!~*'()")]
#[case(";,/?:@&=+$#", "%3B%2C%2F%3F%3A%40%26%3D%2B%24%23")]
#[case(
    "azAZ\u{e4}\u{f6}\u{fc}\u{c4}\u{d6}\u{dc}\u{df};,/?:@&=+$#",
    "azAZ%C3%A4%C3%B6%C3%BC%C3%84%C3%96%C3%9C%C3%9F%3B%2C%2F%3F%3A%40%26%3D%2B%24%23"
)]
#[case("[]", "%5B%5D")]
/// Components only keep the sub-delims `! ' ( ) *` and unreserved characters.
fn component_scenarios(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(encode_uri_component(input), expected);
}

#[test]
/// A missing input encodes to an empty string.
fn none_is_empty() {
    assert_eq!(encode_uri(None), "");
    assert_eq!(encode_uri_component(None), "");
    assert_eq!(encode_uri(""), "");
    assert_eq!(encode_uri_utf16(&[]), "");
}

#[test]
/// Surrogate pairs given as raw code units encode like the char they form.
fn surrogate_pair_units() {
    assert_eq!(encode_uri_utf16(&[0xd83d, 0xde00]), "%F0%9F%98%80");
    assert_eq!(encode_uri_component_utf16(&[0x41, 0xd83d, 0xde00]), "A%F0%9F%98%80");
}

#[rstest]
#[case(&[0xd83d], "%F0%9F%90%80")]
#[case(&[0xd83d, 0x41], "%F0%9F%91%81")]
#[case(&[0xde00, 0x41, 0x42], "%F2%90%81%81B")]
#[case(&[0xde00, 0x3a], "%F2%90%80%BA")]
#[case(&[0x61, 0xd83d, 0xde00, 0xd83d], "a%F0%9F%98%80%F0%9F%90%80")]
/// Malformed surrogate sequences are paired greedily and still encoded.
fn lenient_malformed_surrogates(#[case] units: &[u16], #[case] expected: &str) {
    assert_eq!(encode_uri_utf16(units), expected);
    // A pair never passes through, even when its second unit would.
    assert_eq!(encode_uri_component_utf16(units), expected);
}

#[rstest]
#[case(&[0xd83d], EncodeError::TruncatedSurrogate { offset: 0, unit: 0xd83d })]
#[case(
    &[0xd83d, 0x41],
    EncodeError::UnpairedHighSurrogate { offset: 0, unit: 0xd83d, next: 0x41 }
)]
#[case(&[0x61, 0xde00, 0x41], EncodeError::LoneLowSurrogate { offset: 1, unit: 0xde00 })]
/// Strict encoding names each kind of malformed surrogate sequence.
fn strict_malformed_surrogates(#[case] units: &[u16], #[case] expected: EncodeError) {
    assert_eq!(try_encode_uri_utf16(units), Err(expected));
    assert_eq!(try_encode_uri_component_utf16(units), Err(expected));
}

#[test]
/// Strict encoding accepts well-formed pairs.
fn strict_accepts_pairs() {
    let units = [0x2f, 0xd83d, 0xde00];
    assert_eq!(try_encode_uri_utf16(&units), Ok("/%F0%9F%98%80".to_string()));
    assert_eq!(
        try_encode_uri_component_utf16(&units),
        Ok("%2F%F0%9F%98%80".to_string()),
    );
}

#[test]
/// Every single-unit character is either passed through or escaped, never
/// both, and ASCII escapes are exactly `%XX`.
fn exhaustive_exclusivity() {
    (0..=0xffff_u32).filter_map(char::from_u32).for_each(|c| {
        let text = c.to_string();
        for (encoded, passes) in [
            (encode_uri(text.as_str()), passes_uri(c)),
            (encode_uri_component(text.as_str()), passes_component(c)),
        ] {
            if passes {
                assert_eq!(encoded, text);
            } else {
                assert_eq!(encoded, escape_all(c));
                if c.is_ascii() {
                    assert_eq!(encoded, format!("%{:02X}", u32::from(c)));
                }
            }
        }
    });
}

#[test]
/// The number of `%XX` triplets equals the UTF-8 length of the character.
fn triplet_count_matches_utf8_length() {
    (0x80..=0x10ffff_u32)
        .step_by(113)
        .chain([0x7f, 0x80, 0x7ff, 0x800, 0xffff, 0x10000, 0x10ffff])
        .filter_map(char::from_u32)
        .for_each(|c| {
            let encoded = encode_uri_component(c.to_string().as_str());
            assert_eq!(encoded.matches('%').count(), c.len_utf8(), "{:?}", c);
            assert_eq!(encoded, escape_all(c));
        });
}

#[test]
/// User-defined exception sets work with the generic encoders.
fn custom_exception_set() {
    let rules = [Exception::Range('a', 'f'), Exception::Literal(' ')];
    let set = ExceptionSet::new(&rules);
    let units: Vec<u16> = "abc xyz/\u{e9}".encode_utf16().collect();
    assert_eq!(
        encode_to_string(units.iter().copied(), &set),
        "abc %78%79%7A%2F%C3%A9",
    );
    assert!(encode_to_chars(units, &set).eq("abc %78%79%7A%2F%C3%A9".chars()));
}

#[test]
/// The encoders can be shared across threads.
fn concurrent_use() -> Result<(), Error> {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || encode_uri_component(format!("{} {}", i, i).as_str()))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let encoded = handle.join().map_err(|_| "thread panicked")?;
        assert_eq!(encoded, format!("{}%20{}", i, i));
    }
    Ok(())
}
