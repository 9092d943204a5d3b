// File: crates/texture-core/tests/labels.rs
// Purpose: Language parsing/fallback and label table contents.

use texture_core::labels::{UnknownLanguage, ENGLISH, PORTUGUESE, SPANISH};
use texture_core::{Component, LabelSet, Language, TextureClass};

#[test]
fn codes_parse_case_insensitively() {
    assert_eq!("en".parse::<Language>(), Ok(Language::En));
    assert_eq!("PT-BR".parse::<Language>(), Ok(Language::PtBr));
    assert_eq!(" sp ".parse::<Language>(), Ok(Language::Sp));
    assert_eq!("fr".parse::<Language>(), Err(UnknownLanguage("fr".into())));
}

#[test]
fn unknown_code_falls_back_to_english() {
    assert_eq!(Language::from_code("klingon"), Language::En);
    assert_eq!(Language::from_code("pt-br"), Language::PtBr);
}

#[test]
fn each_language_has_its_own_table() {
    for lang in Language::ALL {
        let set = LabelSet::for_language(lang);
        assert_eq!(set.language, lang);
        assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        for class in TextureClass::ALL {
            assert!(!set.class(class).is_empty());
        }
        for axis in Component::ALL {
            assert!(set.axis_title(axis).starts_with("% "));
        }
    }
    assert_eq!(ENGLISH.very_clayey, "Heavy Clay");
    assert_eq!(PORTUGUESE.class(TextureClass::SandyClayLoam), "Franco Argilo Arenoso");
    assert_eq!(SPANISH.axis_title(Component::Silt), "% Silicada");
    assert_eq!(LabelSet::default(), ENGLISH);
}
