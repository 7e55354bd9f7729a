//! # Built-in Table Behaviour
//!
//! Exercises the public API against the built-in pattern table: lookups,
//! precondition errors, whole-string validation and the case asymmetry
//! between lookup and validation.

use zipcode::{
    compiled_for, compiled_map, is_valid, pattern_for, patterns_map, CountryCode,
    PatternRegistry, ZipCodeError, ZIP_CODE_PATTERN_COUNT,
};

const BLANK_COUNTRY: &str = "'countryCode' must not be null, empty or blank";
const BLANK_ZIP: &str = "'zipCode' must not be null, empty or blank";

// -- pattern_for --

#[test]
fn pattern_for_returns_source_for_country() {
    assert_eq!(
        pattern_for("AR").unwrap(),
        Some(r"((?:[A-HJ-NP-Z])?\d{4})([A-Z]{3})?")
    );
}

#[test]
fn pattern_for_folds_ascii_case() {
    assert_eq!(pattern_for("ar").unwrap(), pattern_for("AR").unwrap());
    assert_eq!(pattern_for("aR").unwrap(), pattern_for("AR").unwrap());
}

#[test]
fn pattern_for_unknown_is_none() {
    assert_eq!(pattern_for("ABC").unwrap(), None);
    assert_eq!(pattern_for("ZZ").unwrap(), None);
    assert_eq!(pattern_for("A").unwrap(), None);
}

#[test]
fn pattern_for_rejects_empty_and_blank() {
    for input in ["", "   ", "      ", "\t\n"] {
        let err = pattern_for(input).unwrap_err();
        assert_eq!(err.to_string(), BLANK_COUNTRY, "input {input:?}");
    }
}

#[test]
fn pattern_for_does_not_fold_non_ascii() {
    // U+0131 LATIN SMALL LETTER DOTLESS I must not become 'I'.
    assert_eq!(pattern_for("\u{131}t").unwrap(), None);
}

// -- compiled_for --

#[test]
fn compiled_for_returns_pattern_with_verbatim_source() {
    let pattern = compiled_for("XK").unwrap().unwrap();
    assert_eq!(pattern.source(), r"[1-7]\d{4}");
    assert_eq!(compiled_for("xk").unwrap(), Some(pattern));
}

#[test]
fn compiled_for_unknown_is_none() {
    assert!(compiled_for("XYZ").unwrap().is_none());
}

#[test]
fn compiled_for_rejects_empty_and_blank() {
    for input in ["", "      "] {
        assert_eq!(compiled_for(input).unwrap_err(), ZipCodeError::blank_country_code());
    }
}

// -- maps --

#[test]
fn maps_cover_the_whole_table() {
    assert_eq!(patterns_map().len(), ZIP_CODE_PATTERN_COUNT);
    assert_eq!(compiled_map().len(), ZIP_CODE_PATTERN_COUNT);
    assert!(patterns_map().keys().eq(compiled_map().keys()));
}

#[test]
fn maps_are_stable_across_calls() {
    assert_eq!(patterns_map(), patterns_map());
    assert!(std::ptr::eq(patterns_map(), patterns_map()));
}

#[test]
fn map_keys_are_uppercase_two_letter_codes() {
    for key in patterns_map().keys() {
        assert_eq!(key.len(), 2, "{key}");
        assert!(key.bytes().all(|b| b.is_ascii_uppercase()), "{key}");
    }
}

#[test]
fn copied_map_is_independent() {
    let mut copy = patterns_map().clone();
    copy.insert("QQ", r"\d+");
    copy.remove("DE");
    assert_eq!(pattern_for("QQ").unwrap(), None);
    assert_eq!(pattern_for("DE").unwrap(), Some(r"\d{5}"));
}

#[test]
fn table_excerpt_is_verbatim() {
    let map = patterns_map();
    assert_eq!(map["AC"], "ASCN 1ZZ");
    assert_eq!(map["AD"], r"AD[1-7]0\d");
    assert_eq!(map["BR"], r"\d{5}-?\d{3}");
    assert_eq!(
        map["CA"],
        r"[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d"
    );
    assert_eq!(map["DE"], r"\d{5}");
    assert_eq!(map["JP"], r"\d{3}-?\d{4}");
    assert_eq!(map["NL"], r"\d{4} ?[A-Z]{2}");
    assert_eq!(map["US"], r"(\d{5})(?:[ \-](\d{4}))?");
    assert_eq!(map["XK"], r"[1-7]\d{4}");
    assert!(map["GB"].starts_with("GIR ?0AA|(?:(?:AB|AL|B|BA|"));
    assert!(map["GB"].ends_with(r"|BFPO ?\d{1,4}"));
}

// -- is_valid --

#[test]
fn is_valid_germany() {
    assert!(is_valid("DE", "12345").unwrap());
    assert!(!is_valid("DE", "1234").unwrap());
    assert!(!is_valid("DE", "12345 ").unwrap());
    assert!(!is_valid("DE", " 12345").unwrap());
}

#[test]
fn is_valid_united_states() {
    assert!(is_valid("US", "90210").unwrap());
    assert!(is_valid("US", "90210-1234").unwrap());
    assert!(is_valid("US", "90210 1234").unwrap());
    assert!(!is_valid("US", "90210-12").unwrap());
    assert!(!is_valid("US", "9021").unwrap());
}

#[test]
fn is_valid_does_not_fold_case() {
    assert!(!is_valid("de", "12345").unwrap());
    assert!(!is_valid("De", "12345").unwrap());
}

#[test]
fn is_valid_unknown_country_is_false() {
    assert!(!is_valid("ZZ", "12345").unwrap());
    assert!(!is_valid("DEU", "12345").unwrap());
}

#[test]
fn is_valid_rejects_blank_arguments_in_order() {
    assert_eq!(is_valid("", "12345").unwrap_err().to_string(), BLANK_COUNTRY);
    assert_eq!(is_valid("  ", "").unwrap_err().to_string(), BLANK_COUNTRY);
    assert_eq!(is_valid("DE", "").unwrap_err().to_string(), BLANK_ZIP);
    assert_eq!(is_valid("DE", "   ").unwrap_err().to_string(), BLANK_ZIP);
    assert_eq!(is_valid("ZZ", "").unwrap_err().to_string(), BLANK_ZIP);
}

#[test]
fn is_valid_united_kingdom() {
    for zip in ["SW1A 1AA", "SW1A1AA", "EC1A 1BB", "M1 1AE", "GIR 0AA", "BFPO 1234"] {
        assert!(is_valid("GB", zip).unwrap(), "{zip}");
    }
    for zip in ["SW1A 1CA", "QQ1 1AA", "BFPO 12345", "sw1a 1aa"] {
        assert!(!is_valid("GB", zip).unwrap(), "{zip}");
    }
}

#[test]
fn is_valid_canada() {
    assert!(is_valid("CA", "K1A 0B1").unwrap());
    assert!(is_valid("CA", "K1A0B1").unwrap());
    assert!(!is_valid("CA", "D1A 0B1").unwrap());
    assert!(!is_valid("CA", "K1A  0B1").unwrap());
}

#[test]
fn is_valid_netherlands() {
    assert!(is_valid("NL", "1234 AB").unwrap());
    assert!(is_valid("NL", "1234AB").unwrap());
    assert!(!is_valid("NL", "1234 ab").unwrap());
    assert!(!is_valid("NL", "1234").unwrap());
}

#[test]
fn is_valid_brazil_and_japan() {
    assert!(is_valid("BR", "01310-100").unwrap());
    assert!(is_valid("BR", "01310100").unwrap());
    assert!(!is_valid("BR", "0131-0100").unwrap());
    assert!(is_valid("JP", "100-0001").unwrap());
    assert!(is_valid("JP", "1000001").unwrap());
    assert!(!is_valid("JP", "100 0001").unwrap());
}

#[test]
fn is_valid_argentina() {
    assert!(is_valid("AR", "C1425DKA").unwrap());
    assert!(is_valid("AR", "1425").unwrap());
    assert!(is_valid("AR", "C1425").unwrap());
    assert!(!is_valid("AR", "I1425").unwrap());
    assert!(!is_valid("AR", "c1425dka").unwrap());
}

#[test]
fn is_valid_alternations() {
    assert!(is_valid("PE", "LIMA 12").unwrap());
    assert!(is_valid("PE", "CALLAO 07").unwrap());
    assert!(is_valid("PE", "15001").unwrap());
    assert!(!is_valid("PE", "35001").unwrap());
    assert!(is_valid("LI", "9485").unwrap());
    assert!(is_valid("LI", "9498").unwrap());
    assert!(!is_valid("LI", "9499").unwrap());
    assert!(is_valid("CR", "10101").unwrap());
    assert!(is_valid("CR", "101-0101").unwrap());
}

#[test]
fn is_valid_fixed_literals() {
    assert!(is_valid("AC", "ASCN 1ZZ").unwrap());
    assert!(!is_valid("AC", "ASCN1ZZ").unwrap());
    assert!(is_valid("VA", "00120").unwrap());
    assert!(is_valid("SH", "STHL 1ZZ").unwrap());
}

#[test]
fn is_valid_kosovo() {
    assert!(is_valid("XK", "10000").unwrap());
    assert!(!is_valid("XK", "80000").unwrap());
    assert!(!is_valid("XK", "1000").unwrap());
}

// -- typed API --

#[test]
fn typed_lookup_matches_string_lookup() {
    let registry = PatternRegistry::builtin();
    let ie = CountryCode::new("ie").unwrap();
    assert_eq!(registry.pattern(ie), pattern_for("IE").unwrap());
    assert!(registry.compiled(ie).unwrap().is_match("D02 X285"));
    assert!(registry.supports(ie));
    assert!(!registry.supports(CountryCode::new("ZZ").unwrap()));
}

#[test]
fn us_captures_split_zip_and_plus_four() {
    let us = compiled_for("US").unwrap().unwrap();
    let caps = us.captures("90210-1234").unwrap();
    assert_eq!(caps[1], Some("90210"));
    assert_eq!(caps[2], Some("1234"));
}

// -- concurrency --

#[test]
fn concurrent_validation_is_consistent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                for _ in 0..200 {
                    assert!(is_valid("DE", "12345").unwrap());
                    assert!(!is_valid("DE", "1234").unwrap());
                    assert_eq!(pattern_for("xk").unwrap(), Some(r"[1-7]\d{4}"));
                }
                i
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
