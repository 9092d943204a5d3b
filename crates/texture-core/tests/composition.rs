// File: crates/texture-core/tests/composition.rs
// Purpose: Validation rules for (silt, sand, clay) percentages.

use texture_core::{validate, Component, Composition, InvalidComposition};

#[test]
fn accepts_exact_hundred() {
    let c = validate(40.0, 30.0, 30.0).expect("valid composition");
    assert_eq!((c.silt(), c.sand(), c.clay()), (40.0, 30.0, 30.0));
    assert_eq!(c.line_index(Component::Silt), 4.0);
}

#[test]
fn rejects_sum_off_by_one() {
    let err = validate(40.0, 30.0, 31.0).unwrap_err();
    assert_eq!(err, InvalidComposition::BadSum { sum: 101.0 });
}

#[test]
fn rejects_nan() {
    let err = validate(f64::NAN, 30.0, 70.0).unwrap_err();
    assert!(matches!(err, InvalidComposition::NotANumber { component: Component::Silt, .. }));
}

#[test]
fn rejects_infinite() {
    let err = validate(0.0, f64::INFINITY, 0.0).unwrap_err();
    assert!(matches!(err, InvalidComposition::NotANumber { component: Component::Sand, .. }));
}

#[test]
fn rejects_negative_even_when_sum_matches() {
    let err = validate(-10.0, 60.0, 50.0).unwrap_err();
    assert_eq!(err, InvalidComposition::OutOfRange { component: Component::Silt, value: -10.0 });
}

#[test]
fn rejects_fractional_scale() {
    // 0..1 fractions are not rescaled.
    assert!(matches!(validate(0.4, 0.3, 0.3), Err(InvalidComposition::BadSum { .. })));
}

#[test]
fn corners_are_valid() {
    for (s, a, c) in [(100.0, 0.0, 0.0), (0.0, 100.0, 0.0), (0.0, 0.0, 100.0)] {
        assert!(Composition::new(s, a, c).is_ok());
    }
}

#[test]
fn parse_trims_and_validates() {
    let c = Composition::parse(" 20", "20 ", "60").expect("parse");
    assert_eq!(c.clay(), 60.0);

    let err = Composition::parse("20", "abc", "60").unwrap_err();
    assert_eq!(err, InvalidComposition::NotANumber { component: Component::Sand, raw: "abc".into() });

    assert!(matches!(Composition::parse("", "50", "50"), Err(InvalidComposition::NotANumber { component: Component::Silt, .. })));
}

#[test]
fn error_messages_name_the_problem() {
    let msg = validate(40.0, 30.0, 31.0).unwrap_err().to_string();
    assert!(msg.contains("100"), "{msg}");
    let msg = validate(150.0, -50.0, 0.0).unwrap_err().to_string();
    assert!(msg.contains("silt"), "{msg}");
}

#[test]
fn fractional_sum_is_independent_of_argument_order() {
    let perms = [
        (33.3, 33.3, 33.4),
        (33.3, 33.4, 33.3),
        (33.4, 33.3, 33.3),
    ];
    for (silt, sand, clay) in perms {
        let c = validate(silt, sand, clay).unwrap_or_else(|e| panic!("{silt}/{sand}/{clay}: {e}"));
        assert_eq!(c.get(Component::Clay), clay);
    }
    for (silt, sand, clay) in [(0.1, 0.2, 99.7), (99.7, 0.2, 0.1), (0.2, 99.7, 0.1)] {
        assert!(validate(silt, sand, clay).is_ok(), "{silt}/{sand}/{clay}");
    }
}

#[test]
fn fractional_sum_off_by_a_tenth_is_rejected() {
    for (silt, sand, clay) in [(33.3, 33.3, 33.3), (33.3, 33.3, 33.5)] {
        assert!(matches!(validate(silt, sand, clay), Err(InvalidComposition::BadSum { .. })));
    }
}
