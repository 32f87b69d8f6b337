/*
 * parameter_lists.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * End-to-end tests for parameter list parsing and serialization through the public API,
 * using header values as real mailers send them.
 *
 * Run with:
 *   cargo test -p mimeparams_core --test parameter_lists
 */

use mimeparams_core::mime::{
    decode_encoded_words, decode_extended_value, parse_content_disposition, parse_content_type,
    ParameterList,
};
use mimeparams_core::{ParameterParseError, ParseOptions, SerializeOptions};

#[test]
fn outlook_style_encoded_word_filename() {
    let cd = parse_content_disposition(
        "attachment;\r\n filename=\"=?iso-8859-1?Q?R=E9sum=E9_2026.pdf?=\"",
    )
    .unwrap();
    assert_eq!(cd.get_filename(), Some("R\u{e9}sum\u{e9} 2026.pdf"));
}

#[test]
fn thunderbird_style_rfc2231_filename() {
    let cd = parse_content_disposition(
        "attachment;\r\n filename*0*=UTF-8''%D0%9E%D1%82%D1%87%D1%91%D1%82%20%D0%B7%D0%B0%20;\r\n filename*1*=%D0%BC%D0%B0%D1%80%D1%82.docx",
    )
    .unwrap();
    assert_eq!(cd.get_filename(), Some("\u{41e}\u{442}\u{447}\u{451}\u{442} \u{437}\u{430} \u{43c}\u{430}\u{440}\u{442}.docx"));
    let p = cd.parameters().parameter("filename").unwrap();
    assert_eq!(p.get_charset(), Some("UTF-8"));
}

#[test]
fn extended_value_matches_direct_utf8_decoding() {
    let bytes = "na\u{ef}ve caf\u{e9} \u{1f600}".as_bytes();
    let encoded: String = bytes.iter().map(|b| format!("%{:02X}", b)).collect();
    let (first, second) = encoded.split_at(encoded.len() / 2 / 3 * 3);
    let text = format!("; f*0*=utf-8''{}; f*1*={}", first, second);
    let pl = ParameterList::parse(&text).unwrap();
    assert_eq!(pl.get("f"), Some(std::str::from_utf8(bytes).unwrap()));
}

#[test]
fn encoded_word_alone_or_next_to_continuation() {
    let word = "=?utf-8?B?w6l0w6kudHh0?=";
    let direct = decode_encoded_words(word);
    assert_eq!(direct, "\u{e9}t\u{e9}.txt");

    let alone = ParameterList::parse(&format!("; name={}", word)).unwrap();
    assert_eq!(alone.get("name"), Some(direct.as_str()));

    let mixed = ParameterList::parse(&format!(
        "; name={}; name*0*=utf-8''%C3%A9t%C3%A9; name*1=.txt",
        word
    ))
    .unwrap();
    assert_eq!(mixed.get("name"), Some(direct.as_str()));
}

#[test]
fn content_type_round_trip_through_display() {
    let mut ct = parse_content_type("text/plain; charset=us-ascii").unwrap();
    let long = "A rather long description that will certainly not fit in a single segment";
    ct.parameters_mut().set("x-description", long);
    let rendered = ct.to_string();
    assert!(rendered.contains("x-description*0="));
    let reparsed = parse_content_type(&rendered).unwrap();
    assert_eq!(reparsed.get_parameter("x-description"), Some(long));
    assert_eq!(reparsed.get_parameter("charset"), Some("us-ascii"));
}

#[test]
fn idempotent_for_every_attribute() {
    let original = ParameterList::parse(
        "; boundary=\"----=_Part_0\"; title*=utf-8'en'%E2%9C%93%20done; name=\"a\\\\b\"; empty=\"\"",
    )
    .unwrap();
    let reparsed = ParameterList::parse(&original.serialize()).unwrap();
    for p in &original {
        assert_eq!(reparsed.get(p.get_name()), Some(p.get_value()), "{}", p.get_name());
    }
}

#[test]
fn custom_segment_length() {
    let mut pl = ParameterList::new();
    pl.set("p", "0123456789".repeat(3));
    let s = pl.serialize_with(&SerializeOptions {
        max_segment_length: 10,
    });
    assert_eq!(s, "; p*0=01234567; p*1=89012345; p*2=67890123; p*3=456789");
    assert_eq!(ParameterList::parse(&s).unwrap().get("p"), pl.get("p"));
}

#[test]
fn platform_filename_options() {
    let text = "; filename=\"C:\\\\Documents\\\\plan.txt\"; name=\"docs/plan.txt\"";
    let both = ParseOptions {
        windows_filenames: true,
        apple_filenames: true,
    };
    let pl = ParameterList::parse_with(text, &both).unwrap();
    assert_eq!(pl.get("filename"), Some("plan.txt"));
    assert_eq!(pl.get("name"), Some("plan.txt"));

    let pl = ParameterList::parse(text).unwrap();
    assert_eq!(pl.get("filename"), Some("C:\\Documents\\plan.txt"));
    assert_eq!(pl.get("name"), Some("docs/plan.txt"));
}

#[test]
fn windows_filenames_still_unescape_quotes() {
    let windows = ParseOptions {
        windows_filenames: true,
        ..ParseOptions::default()
    };
    let pl = ParameterList::parse_with(r#"; filename="my \"big\" report.txt""#, &windows).unwrap();
    assert_eq!(pl.get("filename"), Some(r#"my "big" report.txt"#));
    let pl = ParameterList::parse(r#"; filename="my \"big\" report.txt""#).unwrap();
    assert_eq!(pl.get("filename"), Some(r#"my "big" report.txt"#));
}

#[test]
fn lenient_values_never_fail() {
    let pl = ParameterList::parse(
        "; a*=utf-8''100%25%G; b*0*=x-unknown''caf%E9; c==?utf-8?Z?nope?=; d*99999999999=v",
    )
    .unwrap();
    assert_eq!(pl.get("a"), Some("100%%G"));
    assert_eq!(pl.get("b"), Some("caf\u{e9}"));
    assert_eq!(pl.get("c"), Some("=?utf-8?Z?nope?="));
    assert_eq!(pl.get("d*99999999999"), Some("v"));
    assert_eq!(decode_extended_value("utf-8''%41").0, "A");
}

#[test]
fn structural_errors() {
    assert!(matches!(
        ParameterList::parse("; a=\"x"),
        Err(ParameterParseError::UnterminatedQuotedString { .. })
    ));
    assert!(matches!(
        ParameterList::parse("; a; b=c"),
        Err(ParameterParseError::ExpectedEquals { .. })
    ));
}
