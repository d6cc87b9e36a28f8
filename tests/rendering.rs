//! Tests de integración del renderizado de etiquetas.
//!
//! Ejecutar solo estos tests:  cargo test --test rendering

use concordancia::{
    DictionaryLoader, EngineOptions, GrammarError, LabelParser, LanguageDictionary, Renameable,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const FRENCH: &str = "\
noun|account|f|c|entity|accounts|Account
value||compte
value|plural=y|comptes

noun|file|m|c|field
value||fichier
value|plural=y|fichiers

# Plantilla de las entidades del usuario
noun|entity|f|v|entity
value||{0}
value|plural=y|{0}

adjective|new|c|b
value||Nouvelle

adjective|big|c|b
value|gender=f|Grande
value|gender=m|Grand
value|gender=f plural=y|Grandes
value|gender=m plural=y|Grands
";

const ENGLISH: &str = "\
noun|account|n|v|entity|accounts|Account
value||Account
value|plural=y|Accounts

noun|team|n|c|other
value||R&D <team>

adjective|new|c|b
value||New

article|a|i
value||A
value|startsWith=v|An
";

const JAPANESE: &str = "\
noun|account|||entity|||件
value||アカウント

noun|file|||field
value||ファイル
";

fn dictionary(code: &str, terms: &str, options: EngineOptions) -> LanguageDictionary {
    init_logs();
    let mut dict = LanguageDictionary::new(code).with_options(options);
    DictionaryLoader::load_from_str(&mut dict, terms).unwrap();
    dict.freeze();
    dict
}

fn french() -> LanguageDictionary {
    dictionary("fr", FRENCH, EngineOptions::default())
}

fn render(dict: &LanguageDictionary, template: &str) -> String {
    render_with(dict, template, &[], &[])
}

fn render_with(
    dict: &LanguageDictionary,
    template: &str,
    entities: &[&dyn Renameable],
    vals: &[f64],
) -> String {
    let value = LabelParser::new(dict).parse(template).unwrap();
    dict.format(&value, entities, vals, false).unwrap()
}

struct CustomObject;

impl Renameable for CustomObject {
    fn name(&self) -> &str {
        "Invoice__c"
    }

    fn label(&self) -> &str {
        "Facture"
    }

    fn label_plural(&self) -> &str {
        "Factures"
    }

    fn has_standard_label(&self) -> bool {
        false
    }
}

struct StandardObject;

impl Renameable for StandardObject {
    fn name(&self) -> &str {
        "Account"
    }

    fn label(&self) -> &str {
        "Compte"
    }

    fn label_plural(&self) -> &str {
        "Comptes"
    }

    fn has_standard_label(&self) -> bool {
        true
    }
}

// ============================================================================
// Concordancia de modificadores
// ============================================================================

#[test]
fn test_adjective_falls_back_to_default_form() {
    let dict = french();
    assert_eq!(render(&dict, "<New/> <Account plural=\"y\"/>"), "Nouvelle comptes");
    assert_eq!(render(&dict, "<new/> <account plural=\"y\"/>"), "nouvelle comptes");
}

#[test]
fn test_adjective_agrees_with_gender_and_number() {
    let dict = french();
    assert_eq!(render(&dict, "<Big/> <Account/>"), "Grande compte");
    assert_eq!(render(&dict, "<Big/> <Accounts/>"), "Grandes comptes");
    assert_eq!(render(&dict, "<big/> <file/>"), "grand fichier");
    assert_eq!(render(&dict, "<big/> <file plural=\"y\"/>"), "grands fichiers");
}

#[test]
fn test_each_phrase_agrees_with_its_own_noun() {
    let dict = french();
    assert_eq!(
        render(&dict, "<Big/> <Account/> et <big/> <file/>"),
        "Grande compte et grand fichier"
    );
}

#[test]
fn test_english_article_follows_next_word() {
    let dict = dictionary("en", ENGLISH, EngineOptions::default());
    assert_eq!(render(&dict, "<a/> <account/>"), "an account");
    assert_eq!(render(&dict, "<A/> <New/> <Account/>"), "A New Account");
}

#[test]
fn test_english_legacy_article() {
    let dict = dictionary("en", ENGLISH, EngineOptions::default());
    assert_eq!(render(&dict, "<Account article=\"a\"/>"), "An account");
    assert_eq!(render(&dict, "<account article=\"the\"/>"), "the account");
}

#[test]
fn test_plural_flag_on_parser() {
    let dict = french();
    let value = LabelParser::new(&dict)
        .with_plural(true)
        .parse("<Big/> <Account/>")
        .unwrap();
    assert_eq!(dict.format(&value, &[], &[], false).unwrap(), "Grandes comptes");
}

// ============================================================================
// Entidades dinámicas
// ============================================================================

#[test]
fn test_custom_entity_fills_template() {
    let dict = french();
    let entities: [&dyn Renameable; 1] = [&CustomObject];
    assert_eq!(
        render_with(&dict, "<New/> <Entity entity=\"0\"/>", &entities, &[]),
        "Nouvelle Facture"
    );
    assert_eq!(
        render_with(&dict, "<Big/> <Entity entity=\"0\" plural=\"y\"/>", &entities, &[]),
        "Grandes Factures"
    );
}

#[test]
fn test_standard_entity_uses_its_own_noun() {
    let dict = french();
    let entities: [&dyn Renameable; 1] = [&StandardObject];
    assert_eq!(
        render_with(&dict, "<entity entity=\"0\" plural=\"y\"/>", &entities, &[]),
        "comptes"
    );
}

#[test]
fn test_missing_entity_placeholder() {
    let debug = dictionary(
        "fr",
        FRENCH,
        EngineOptions {
            label_debug: true,
            ..Default::default()
        },
    );
    assert_eq!(render(&debug, "<Entity entity=\"1\"/>"), "<Entity>");
    assert_eq!(render(&debug, "<Entity entity=\"1\" plural=\"y\"/>"), "<Entities>");

    // Sin depuración se registra el error y se usa igualmente el marcador
    let lenient = french();
    assert_eq!(render(&lenient, "<Entity entity=\"0\"/>"), "<Entity>");
}

#[test]
fn test_missing_entity_strict() {
    let dict = dictionary(
        "fr",
        FRENCH,
        EngineOptions {
            strict_rendering: true,
            ..Default::default()
        },
    );
    let value = LabelParser::new(&dict).parse("<Entity entity=\"0\"/>").unwrap();
    let err = dict.format(&value, &[], &[], false).unwrap_err();
    assert!(matches!(err, GrammarError::MissingTerm { .. }));
}

// ============================================================================
// Elecciones
// ============================================================================

#[test]
fn test_plural_choice_by_value() {
    let dict = dictionary("en", ENGLISH, EngineOptions::default());
    let template = "<plural val=\"0\"><zero>none</zero><one>one <account/></one>\
                    <other>several <account plural=\"y\"/></other></plural>";
    assert_eq!(render_with(&dict, template, &[], &[0.0]), "none");
    assert_eq!(render_with(&dict, template, &[], &[1.0]), "one account");
    assert_eq!(render_with(&dict, template, &[], &[3.0]), "several accounts");
    // Sin valor se usa la rama `other`
    assert_eq!(render_with(&dict, template, &[], &[]), "several accounts");
}

#[test]
fn test_gender_choice_follows_noun() {
    let dict = french();
    let template = "<gender><f>une</f><default>un</default></gender> <account/>";
    assert_eq!(render(&dict, template), "une compte");
    let template = "<gender><f>une</f><default>un</default></gender> <file/>";
    assert_eq!(render(&dict, template), "un fichier");
}

#[test]
fn test_counter_uses_classifier() {
    let dict = dictionary("ja", JAPANESE, EngineOptions::default());
    assert_eq!(render(&dict, "3<counter/>の<account/>"), "3件のアカウント");
    assert_eq!(render(&dict, "3<counter/>の<file/>"), "3つのファイル");
}

// ============================================================================
// Opciones de salida
// ============================================================================

#[test]
fn test_escape_html() {
    let plain = dictionary("en", ENGLISH, EngineOptions::default());
    assert_eq!(render(&plain, "<Team/>"), "R&D <team>");
    assert_eq!(render(&plain, "<Team escapeHtml=\"y\"/>"), "R&amp;D &lt;team&gt;");

    let escaped = dictionary(
        "en",
        ENGLISH,
        EngineOptions {
            escape_html: true,
            ..Default::default()
        },
    );
    assert_eq!(render(&escaped, "<Team/>"), "R&amp;D &lt;team&gt;");
}

#[test]
fn test_unknown_tag_stays_literal() {
    let dict = french();
    assert_eq!(render(&dict, "Voir <Widget/>"), "Voir <Widget/>");
}

// ============================================================================
// Artículos y casos
// ============================================================================

const NORWEGIAN: &str = "\
noun|account|m|c|entity
value||Konto
value|article=the|Kontoen
value|plural=y|Kontoer
value|plural=y article=the|Kontoene

adjective|new|c|b
value|gender=m|Ny
value|gender=m article=the|Nye

article|the|d
value|gender=m|Den
value|gender=n|Det
value|plural=y|De
";

const BULGARIAN: &str = "\
noun|account|f|c|entity
value||Сметка
value|article=the|Сметката
value|plural=y|Сметки
value|plural=y article=the|Сметките

adjective|new|c|b
value|gender=f|Нова
value|gender=f article=the|Новата
value|gender=m|Нов
value|gender=m article=the|Новия
";

const GERMAN: &str = "\
noun|customer|m|c|entity
value||Kunde
value|case=a|Kunden
value|case=g|Kunden
value|case=d|Kunden

noun|account|n|c|entity
value||Konto
value|case=a|Konto
value|case=g|Kontos
value|case=d|Konto

adjective|new|c|b
value|gender=m|Neuer
value|gender=m case=a|Neuen
value|gender=m case=d|Neuem
value|gender=m article=the|Neue
value|gender=m case=d article=the|Neuen
value|gender=n|Neues
value|gender=n case=g article=the|Neuen

article|the|d
value|gender=m|Der
value|gender=m case=a|Den
value|gender=m case=d|Dem
value|gender=n|Das
value|gender=n case=g|Des
";

#[test]
fn test_norwegian_definite_particle_marks_noun() {
    let dict = dictionary("no", NORWEGIAN, EngineOptions::default());
    assert_eq!(render(&dict, "<The/> <New/> <Account/>"), "Den Nye Kontoen");
    assert_eq!(render(&dict, "<the/> <new/> <account/>"), "den nye kontoen");
    // Sin partícula el sustantivo queda sin artículo
    assert_eq!(render(&dict, "<new/> <account/>"), "ny konto");
}

#[test]
fn test_bulgarian_article_moves_to_first_adjective() {
    let dict = dictionary("bg", BULGARIAN, EngineOptions::default());
    assert_eq!(render(&dict, "<account article=\"the\"/>"), "сметката");
    assert_eq!(render(&dict, "<new/> <account article=\"the\"/>"), "новата сметка");
    assert_eq!(render(&dict, "<new/> <account/>"), "нова сметка");
}

#[test]
fn test_german_case_agreement() {
    let dict = dictionary("de", GERMAN, EngineOptions::default());
    assert_eq!(render(&dict, "<The/> <New/> <Customer case=\"d\"/>"), "Dem Neuen Kunden");
    // Los sustantivos alemanes conservan la mayúscula
    assert_eq!(render(&dict, "<the/> <new/> <customer case=\"d\"/>"), "dem neuen Kunden");
    assert_eq!(render(&dict, "<new/> <customer case=\"a\"/>"), "neuen Kunden");
    assert_eq!(render(&dict, "<the/> <new/> <account case=\"g\"/>"), "des neuen Kontos");
    assert_eq!(render(&dict, "<the/> <customer/>"), "der Kunde");
}
