//! Propiedades de la resolución de formas en todos los idiomas registrados.
//!
//! Ejecutar solo estos tests:  cargo test --test declension_properties

use concordancia::declension::SUPPORTED_LANGUAGES;
use concordancia::declension_for;
use concordancia::grammar::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePossessive,
    LanguageStartsWith,
};
use proptest::prelude::*;

fn language() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SUPPORTED_LANGUAGES.to_vec())
}

fn genderless_language() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .filter(|code| !declension_for(code).has_gender())
        .collect();
    prop::sample::select(codes)
}

fn number() -> impl Strategy<Value = LanguageNumber> {
    prop::sample::select(LanguageNumber::ALL.to_vec())
}

fn case() -> impl Strategy<Value = LanguageCase> {
    prop::sample::select(LanguageCase::ALL.to_vec())
}

fn gender() -> impl Strategy<Value = LanguageGender> {
    prop::sample::select(LanguageGender::ALL.to_vec())
}

fn starts_with() -> impl Strategy<Value = LanguageStartsWith> {
    prop::sample::select(LanguageStartsWith::ALL.to_vec())
}

fn article() -> impl Strategy<Value = LanguageArticle> {
    prop::sample::select(LanguageArticle::ALL.to_vec())
}

fn possessive() -> impl Strategy<Value = LanguagePossessive> {
    prop::sample::select(LanguagePossessive::ALL.to_vec())
}

#[test]
fn test_every_noun_form_resolves_to_itself() {
    for code in SUPPORTED_LANGUAGES {
        let decl = declension_for(code);
        for &form in decl.all_noun_forms() {
            let exact = decl.exact_noun_form(form.number(), form.case(), form.possessive(), form.article());
            assert_eq!(exact, Some(form), "{}: {}", code, form);
            let approximate =
                decl.approximate_noun_form(form.number(), form.case(), form.possessive(), form.article());
            assert_eq!(approximate, form, "{}: {}", code, form);
        }
    }
}

#[test]
fn test_every_adjective_form_resolves_to_itself() {
    for code in SUPPORTED_LANGUAGES {
        let decl = declension_for(code);
        for &form in decl.adjective_forms() {
            let approximate = decl.approximate_adjective_form(
                form.starts_with(),
                form.gender(),
                form.number(),
                form.case(),
                form.article(),
                form.possessive(),
            );
            assert_eq!(approximate, form, "{}: {}", code, form);
        }
    }
}

#[test]
fn test_default_forms_belong_to_the_language() {
    for code in SUPPORTED_LANGUAGES {
        let decl = declension_for(code);
        assert!(decl.all_noun_forms().contains(&decl.default_noun_form()), "{}", code);
        assert!(decl.adjective_forms().contains(&decl.default_adjective_form()), "{}", code);
        match decl.default_article_form() {
            Some(form) => assert!(decl.article_forms().contains(&form), "{}", code),
            None => assert!(!decl.has_article(), "{}", code),
        }
    }
}

proptest! {
    #[test]
    fn noun_resolution_is_total(
        code in language(),
        number in number(),
        case in case(),
        possessive in possessive(),
        article in article(),
    ) {
        let decl = declension_for(code);
        let form = decl.approximate_noun_form(number, case, possessive, article);
        // Las formas heredadas envuelven una forma real del idioma
        prop_assert!(decl.all_noun_forms().contains(&form.base()));
        if form.is_legacy_articled() {
            prop_assert!(decl.has_article());
            prop_assert!(!decl.has_article_in_noun_form());
        }
    }

    #[test]
    fn adjective_resolution_is_total(
        code in language(),
        starts_with in starts_with(),
        gender in gender(),
        number in number(),
        case in case(),
        article in article(),
        possessive in possessive(),
    ) {
        let decl = declension_for(code);
        let form = decl.approximate_adjective_form(starts_with, gender, number, case, article, possessive);
        prop_assert!(decl.adjective_forms().contains(&form));
    }

    #[test]
    fn article_resolution_stays_in_domain(
        code in language(),
        starts_with in starts_with(),
        gender in gender(),
        number in number(),
        case in case(),
    ) {
        let decl = declension_for(code);
        let form = decl.approximate_article_form(starts_with, gender, number, case);
        if let Some(form) = form {
            prop_assert!(decl.article_forms().contains(&form));
        }
        if !decl.has_article() {
            prop_assert!(form.is_none());
        }
    }

    #[test]
    fn gender_is_ignored_without_gender(
        code in genderless_language(),
        starts_with in starts_with(),
        gender in gender(),
        number in number(),
        case in case(),
    ) {
        let decl = declension_for(code);
        let default = decl.default_gender();
        let article = decl.default_article();
        let possessive = decl.default_possessive();
        prop_assert_eq!(
            decl.approximate_adjective_form(starts_with, gender, number, case, article, possessive),
            decl.approximate_adjective_form(starts_with, default, number, case, article, possessive)
        );
    }

    #[test]
    fn exact_noun_form_is_stable(
        code in language(),
        number in number(),
        case in case(),
        possessive in possessive(),
        article in article(),
    ) {
        let decl = declension_for(code);
        if let Some(form) = decl.exact_noun_form(number, case, possessive, article) {
            prop_assert_eq!(decl.approximate_noun_form(number, case, possessive, article), form);
            prop_assert_eq!(form.number(), number);
            prop_assert_eq!(form.case(), case);
        }
    }
}
