// File: crates/pubstyle-core/tests/alignment.rs
// Purpose: Resolver maps every name pair to its ROOT code, accepts the codes back, rejects the rest.

use pubstyle_core::alignment::{resolve, ALIGNMENTS};
use pubstyle_core::{AlignSpec, Alignment, LayoutError};

const TABLE: [((&str, &str), i32); 9] = [
    (("left", "bottom"), 11),
    (("left", "center"), 12),
    (("left", "top"), 13),
    (("center", "bottom"), 21),
    (("center", "center"), 22),
    (("center", "top"), 23),
    (("right", "bottom"), 31),
    (("right", "center"), 32),
    (("right", "top"), 33),
];

#[test]
fn name_pairs_resolve_to_documented_codes() {
    for (pair, code) in TABLE {
        assert_eq!(resolve(&AlignSpec::from(pair)), Ok(code), "{pair:?}");
    }
}

#[test]
fn codes_resolve_to_themselves() {
    for (_, code) in TABLE {
        assert_eq!(resolve(&AlignSpec::Code(code)), Ok(code));
        assert_eq!(Alignment::from_code(code).map(Alignment::code), Ok(code));
    }
    assert_eq!(ALIGNMENTS.len(), TABLE.len());
}

#[test]
fn unknown_pairs_are_rejected() {
    for (h, v) in [("top", "left"), ("middle", "top"), ("left", ""), ("Left", "top")] {
        let err = resolve(&AlignSpec::names(h, v)).unwrap_err();
        assert!(matches!(err, LayoutError::UnrecognizedAlignment(_)), "{h} {v}");
    }
}

#[test]
fn out_of_table_codes_are_rejected() {
    for code in [0, 10, 14, 20, 34, 41, -11, 110] {
        assert_eq!(
            resolve(&AlignSpec::Code(code)),
            Err(LayoutError::UnrecognizedAlignment(code.to_string()))
        );
    }
}

#[test]
fn try_from_matches_resolver() {
    let a = Alignment::try_from(("right", "bottom")).expect("known pair");
    assert_eq!(a.code(), 31);
    assert_eq!(Alignment::try_from(23).expect("known code").to_string(), "(center, top)");
    assert!(Alignment::try_from(99).is_err());
}

#[test]
fn alignment_deserializes_from_pair_or_code() {
    let a: Alignment = serde_json::from_str(r#"["left", "top"]"#).expect("pair");
    assert_eq!(a.code(), 13);
    let b: Alignment = serde_json::from_str("32").expect("code");
    assert_eq!(b.code(), 32);
    let err = serde_json::from_str::<Alignment>("45").unwrap_err();
    assert!(err.to_string().contains("unrecognized text alignment"));
}
