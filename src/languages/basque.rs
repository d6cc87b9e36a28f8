//! Euskera
//!
//! Lengua ergativa: el nominativo hace de absolutivo y el caso y la
//! definitud se marcan con sufijos al final del sintagma. El diccionario
//! solo necesita la raíz ("kontu"); el resto de formas se generan con la
//! tabla de sufijos, que distingue indefinido, definido singular y plural
//! según la raíz acabe en vocal o en consonante.

use crate::grammar::{LanguageArticle, LanguageCase, LanguageNumber, LanguagePosition, NounForm};
use crate::languages::Language;

use LanguageCase::*;

const CASES: &[LanguageCase] = &[
    Nominative,
    Ergative,
    Dative,
    Genitive,
    Inessive,
    Allative,
    Ablative,
    Instrumental,
    Comitative,
    Benefactive,
    Partitive,
    Locative,
];

/// Raíces acabadas en "r" que no la duplican ante sufijo vocálico
const UR_WORDS: &[&str] = &["ur", "paper", "plater"];

/// Sufijos de un caso: indefinido tras vocal y tras consonante, definido
/// singular tras vocal y tras consonante, y plural
struct Suffixes([&'static str; 5]);

fn suffixes(case: LanguageCase) -> Option<Suffixes> {
    let table = match case {
        Nominative => ["a", "a", "a", "a", "ak"],
        Ergative => ["k", "ek", "ak", "ak", "ek"],
        Dative => ["ri", "i", "ari", "ari", "ei"],
        Genitive => ["ren", "en", "aren", "aren", "en"],
        Locative => ["ko", "eko", "ko", "eko", "etako"],
        Inessive => ["tan", "etan", "an", "ean", "etan"],
        Allative => ["tara", "etara", "ra", "era", "etara"],
        Ablative => ["tatik", "etatik", "tik", "etik", "etatik"],
        Instrumental => ["z", "ez", "az", "az", "ez"],
        Comitative => ["rekin", "ekin", "arekin", "arekin", "ekin"],
        Benefactive => ["rentzat", "entzat", "arentzat", "arentzat", "entzat"],
        _ => return None,
    };
    Some(Suffixes(table))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Superficie de `stem` en el caso, número y definitud pedidos
pub(crate) fn render_surface(
    stem: &str,
    case: LanguageCase,
    number: LanguageNumber,
    article: LanguageArticle,
) -> Option<String> {
    let lower = stem.to_lowercase();
    let plural = number.is_plural();
    let indefinite = !plural && article != LanguageArticle::Definite;
    if case == Nominative && indefinite {
        return Some(stem.to_string());
    }

    // Una "h" final muda no cuenta para el tipo de raíz
    let mut tail = lower.chars().rev();
    let target = match (tail.next(), tail.next()) {
        (Some('h'), Some(previous)) => previous,
        (Some(last), _) => last,
        (None, _) => return None,
    };
    let vowel_end = is_vowel(target);

    let suffix = if case == Partitive {
        if vowel_end {
            "rik"
        } else {
            "ik"
        }
    } else {
        let Suffixes(table) = suffixes(case)?;
        match (plural, indefinite, vowel_end) {
            (true, _, _) => table[4],
            (false, true, true) => table[0],
            (false, true, false) => table[1],
            (false, false, true) => table[2],
            (false, false, false) => table[3],
        }
    };

    let vowel_suffix = suffix.starts_with(|c: char| c == 'a' || c == 'e');
    let mut word = stem.to_string();
    // La "a" final de la raíz se absorbe ante sufijo en "a" o "e"
    if target == 'a' && vowel_suffix && lower.ends_with('a') {
        word.pop();
    }
    if target == 'r' && suffix.starts_with(is_vowel) && !UR_WORDS.contains(&lower.as_str()) {
        word.push('r');
    }
    word.push_str(suffix);
    Some(word)
}

pub struct Basque;

impl Basque {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Basque {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Basque {
    fn code(&self) -> &str {
        "eu"
    }

    fn name(&self) -> &str {
        "Euskara"
    }

    fn has_article_in_noun_form(&self) -> bool {
        true
    }

    /// Solo el absolutivo es obligatorio; los demás casos se generan
    fn allowed_cases(&self) -> &'static [LanguageCase] {
        CASES
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        &[
            LanguageArticle::Zero,
            LanguageArticle::Indefinite,
            LanguageArticle::Definite,
        ]
    }

    /// La raíz desnuda es el absolutivo indefinido
    fn noun_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Indefinite, LanguageArticle::Definite]
    }

    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Indefinite]
    }

    fn default_article(&self) -> LanguageArticle {
        LanguageArticle::Indefinite
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Post
    }

    fn derive_noun_string(&self, stem: &str, form: NounForm) -> Option<String> {
        render_surface(stem, form.case(), form.number(), form.article())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(stem: &str, case: LanguageCase, number: LanguageNumber, article: LanguageArticle) -> String {
        render_surface(stem, case, number, article).unwrap_or_default()
    }

    #[test]
    fn test_absolutive() {
        use LanguageArticle::{Definite, Indefinite};
        use LanguageNumber::{Plural, Singular};
        assert_eq!(render("etxe", Nominative, Singular, Indefinite), "etxe");
        assert_eq!(render("etxe", Nominative, Singular, Definite), "etxea");
        assert_eq!(render("etxe", Nominative, Plural, Definite), "etxeak");
        // Absorción de la "a" final
        assert_eq!(render("neska", Nominative, Singular, Definite), "neska");
        assert_eq!(render("neska", Nominative, Plural, Definite), "neskak");
    }

    #[test]
    fn test_case_suffixes() {
        use LanguageArticle::{Definite, Indefinite};
        use LanguageNumber::{Plural, Singular};
        assert_eq!(render("etxe", Inessive, Singular, Definite), "etxean");
        assert_eq!(render("etxe", Inessive, Plural, Definite), "etxeetan");
        assert_eq!(render("mendi", Ergative, Singular, Definite), "mendiak");
        assert_eq!(render("lagun", Comitative, Singular, Definite), "lagunarekin");
        assert_eq!(render("lagun", Benefactive, Singular, Indefinite), "lagunentzat");
        assert_eq!(render("ur", Genitive, Singular, Indefinite), "uren");
        assert_eq!(render("txakur", Genitive, Singular, Indefinite), "txakurren");
        assert_eq!(render("ogi", Partitive, Singular, Indefinite), "ogirik");
        assert_eq!(render("etxe", Vocative, Singular, Definite), "");
    }

    #[test]
    fn test_defaults() {
        let eu = Basque::new();
        assert_eq!(eu.noun_article_types()[0], eu.default_article());
        assert_eq!(eu.allowed_cases()[0], eu.default_case());
        assert_eq!(eu.required_cases(), &[Nominative]);
    }
}
