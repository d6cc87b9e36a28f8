//! Turco: lengua aglutinante con armonía vocálica
//!
//! Los sustantivos tienen seis casos y posesivo de primera y segunda persona.
//! Como no es práctico almacenar todas las combinaciones, las formas que
//! faltan se generan a partir del nominativo singular:
//! raíz + plural + posesivo + caso.

use crate::grammar::{LanguageCase, LanguagePossessive, NounForm, PluralRule};
use crate::languages::Language;

const CASES: &[LanguageCase] = &[
    LanguageCase::Nominative,
    LanguageCase::Accusative,
    LanguageCase::Genitive,
    LanguageCase::Dative,
    LanguageCase::Locative,
    LanguageCase::Ablative,
];

const VOICELESS: &[char] = &['ç', 'f', 'h', 'k', 'p', 's', 'ş', 't'];

pub struct Turkish;

impl Turkish {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Turkish {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'ı' | 'i' | 'o' | 'ö' | 'u' | 'ü' | 'A' | 'E' | 'I' | 'İ' | 'O' | 'Ö' | 'U' | 'Ü'
    )
}

fn last_vowel(word: &str) -> char {
    word.chars()
        .rev()
        .find(|c| is_vowel(*c))
        .map(turkish_lower)
        .unwrap_or('e')
}

fn turkish_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Armonía de dos vías: e / a
fn harmony2(word: &str) -> char {
    match last_vowel(word) {
        'a' | 'ı' | 'o' | 'u' => 'a',
        _ => 'e',
    }
}

/// Armonía de cuatro vías: ı / i / u / ü
fn harmony4(word: &str) -> char {
    match last_vowel(word) {
        'a' | 'ı' => 'ı',
        'o' | 'u' => 'u',
        'ö' | 'ü' => 'ü',
        _ => 'i',
    }
}

fn ends_with_vowel(word: &str) -> bool {
    word.chars().last().is_some_and(is_vowel)
}

fn dental(word: &str) -> char {
    match word.chars().last() {
        Some(c) if VOICELESS.contains(&turkish_lower(c)) => 't',
        _ => 'd',
    }
}

impl Language for Turkish {
    fn code(&self) -> &str {
        "tr"
    }

    fn name(&self) -> &str {
        "Türkçe"
    }

    fn has_possessive(&self) -> bool {
        true
    }

    fn has_possessive_in_adjective(&self) -> bool {
        true
    }

    fn required_cases(&self) -> &'static [LanguageCase] {
        CASES
    }

    fn allowed_possessives(&self) -> &'static [LanguagePossessive] {
        &[
            LanguagePossessive::None,
            LanguagePossessive::First,
            LanguagePossessive::Second,
        ]
    }

    fn plural_rule(&self) -> PluralRule {
        PluralRule::None
    }

    fn derive_noun_string(&self, stem: &str, form: NounForm) -> Option<String> {
        if stem.is_empty() {
            return None;
        }
        let mut word = stem.to_string();
        if form.number().is_plural() {
            let vowel = harmony2(&word);
            word.push_str(if vowel == 'a' { "lar" } else { "ler" });
        }
        let possessive = match form.possessive() {
            LanguagePossessive::None => "",
            LanguagePossessive::First => "m",
            LanguagePossessive::Second => "n",
            LanguagePossessive::FirstPlural => "mIz",
            LanguagePossessive::SecondPlural => "nIz",
        };
        if !possessive.is_empty() {
            let high = harmony4(&word);
            if !ends_with_vowel(&word) {
                word.push(high);
            }
            for c in possessive.chars() {
                word.push(if c == 'I' { high } else { c });
            }
        }
        let vowel_end = ends_with_vowel(&word);
        let high = harmony4(&word);
        let low = harmony2(&word);
        match form.case() {
            LanguageCase::Nominative => {}
            LanguageCase::Accusative => {
                if vowel_end {
                    word.push('y');
                }
                word.push(high);
            }
            LanguageCase::Genitive => {
                if vowel_end {
                    word.push('n');
                }
                word.push(high);
                word.push('n');
            }
            LanguageCase::Dative => {
                if vowel_end {
                    word.push('y');
                }
                word.push(low);
            }
            LanguageCase::Locative => {
                let d = dental(&word);
                word.push(d);
                word.push(low);
            }
            LanguageCase::Ablative => {
                let d = dental(&word);
                word.push(d);
                word.push(low);
                word.push('n');
            }
            _ => return None,
        }
        Some(word)
    }

    /// "I" sin punto y "İ" con punto tienen minúsculas propias
    fn lowercase_noun(&self, value: &str, _form: NounForm) -> String {
        value.chars().map(turkish_lower).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{LanguageArticle, LanguageNumber};

    fn form(number: LanguageNumber, case: LanguageCase, possessive: LanguagePossessive) -> NounForm {
        NounForm::new(number, case, possessive, LanguageArticle::Zero)
    }

    #[test]
    fn test_plural_harmony() {
        let tr = Turkish::new();
        let plural = form(LanguageNumber::Plural, LanguageCase::Nominative, LanguagePossessive::None);
        assert_eq!(tr.derive_noun_string("hesap", plural).as_deref(), Some("hesaplar"));
        assert_eq!(tr.derive_noun_string("kişi", plural).as_deref(), Some("kişiler"));
    }

    #[test]
    fn test_case_suffixes() {
        let tr = Turkish::new();
        let sg = |case| form(LanguageNumber::Singular, case, LanguagePossessive::None);
        assert_eq!(tr.derive_noun_string("kişi", sg(LanguageCase::Accusative)).as_deref(), Some("kişiyi"));
        assert_eq!(tr.derive_noun_string("ev", sg(LanguageCase::Genitive)).as_deref(), Some("evin"));
        assert_eq!(tr.derive_noun_string("kişi", sg(LanguageCase::Dative)).as_deref(), Some("kişiye"));
        assert_eq!(tr.derive_noun_string("hesap", sg(LanguageCase::Locative)).as_deref(), Some("hesapta"));
        assert_eq!(tr.derive_noun_string("ev", sg(LanguageCase::Ablative)).as_deref(), Some("evden"));
        assert_eq!(tr.derive_noun_string("ev", sg(LanguageCase::Instrumental)), None);
    }

    #[test]
    fn test_possessive_suffixes() {
        let tr = Turkish::new();
        let mine = form(LanguageNumber::Singular, LanguageCase::Nominative, LanguagePossessive::First);
        assert_eq!(tr.derive_noun_string("ev", mine).as_deref(), Some("evim"));
        assert_eq!(tr.derive_noun_string("kişi", mine).as_deref(), Some("kişim"));
        let yours_pl = form(LanguageNumber::Plural, LanguageCase::Dative, LanguagePossessive::Second);
        assert_eq!(tr.derive_noun_string("ev", yours_pl).as_deref(), Some("evlerine"));
    }

    #[test]
    fn test_turkish_lowercase() {
        let tr = Turkish::new();
        let sg = form(LanguageNumber::Singular, LanguageCase::Nominative, LanguagePossessive::None);
        assert_eq!(tr.lowercase_noun("IRMAK", sg), "ırmak");
        assert_eq!(tr.lowercase_noun("İl", sg), "il");
    }
}
