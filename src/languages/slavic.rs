//! Lenguas eslavas: muchos casos y tres géneros, sin artículos.
//!
//! El búlgaro es la excepción: perdió los casos pero une el artículo
//! definido a la primera palabra del sintagma ("новата сметка"), de modo que
//! la flexión del sustantivo pasa a su primer modificador.

use crate::grammar::{LanguageArticle, LanguageCase, LanguageGender, PluralRule};
use crate::languages::Language;

const GENDERS: &[LanguageGender] = &[
    LanguageGender::Masculine,
    LanguageGender::Feminine,
    LanguageGender::Neuter,
];

/// Polaco y checo distinguen el masculino animado ("nowego klienta")
const WEST_SLAVIC_GENDERS: &[LanguageGender] = &[
    LanguageGender::Masculine,
    LanguageGender::Feminine,
    LanguageGender::Neuter,
    LanguageGender::AnimateMasculine,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlavicLanguage {
    Russian,
    Ukrainian,
    Polish,
    Czech,
}

pub struct Slavic {
    variant: SlavicLanguage,
}

impl Slavic {
    pub fn new(variant: SlavicLanguage) -> Self {
        Self { variant }
    }
}

impl Language for Slavic {
    fn code(&self) -> &str {
        match self.variant {
            SlavicLanguage::Russian => "ru",
            SlavicLanguage::Ukrainian => "uk",
            SlavicLanguage::Polish => "pl",
            SlavicLanguage::Czech => "cs",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            SlavicLanguage::Russian => "Русский",
            SlavicLanguage::Ukrainian => "Українська",
            SlavicLanguage::Polish => "Polski",
            SlavicLanguage::Czech => "Čeština",
        }
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn required_cases(&self) -> &'static [LanguageCase] {
        match self.variant {
            SlavicLanguage::Russian => &[
                LanguageCase::Nominative,
                LanguageCase::Accusative,
                LanguageCase::Genitive,
                LanguageCase::Dative,
                LanguageCase::Instrumental,
                LanguageCase::Prepositional,
            ],
            _ => &[
                LanguageCase::Nominative,
                LanguageCase::Accusative,
                LanguageCase::Genitive,
                LanguageCase::Dative,
                LanguageCase::Instrumental,
                LanguageCase::Locative,
                LanguageCase::Vocative,
            ],
        }
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        match self.variant {
            SlavicLanguage::Polish | SlavicLanguage::Czech => WEST_SLAVIC_GENDERS,
            _ => GENDERS,
        }
    }

    fn plural_rule(&self) -> PluralRule {
        match self.variant {
            SlavicLanguage::Russian | SlavicLanguage::Ukrainian => PluralRule::EastSlavic,
            SlavicLanguage::Polish => PluralRule::Polish,
            SlavicLanguage::Czech => PluralRule::Czech,
        }
    }
}

/// Búlgaro
pub struct Bulgarian;

impl Bulgarian {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Bulgarian {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Bulgarian {
    fn code(&self) -> &str {
        "bg"
    }

    fn name(&self) -> &str {
        "Български"
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn has_article(&self) -> bool {
        true
    }

    fn has_article_in_noun_form(&self) -> bool {
        true
    }

    /// El objetivo solo existe para la forma definida completa del masculino
    fn allowed_cases(&self) -> &'static [LanguageCase] {
        &[LanguageCase::Nominative, LanguageCase::Objective]
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        GENDERS
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn noun_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn move_noun_inflection_to_first_modifier(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slavic_cases() {
        assert_eq!(Slavic::new(SlavicLanguage::Russian).required_cases().len(), 6);
        assert_eq!(Slavic::new(SlavicLanguage::Polish).required_cases().len(), 7);
        assert!(!Slavic::new(SlavicLanguage::Czech).has_article());
        assert_eq!(
            Slavic::new(SlavicLanguage::Russian).default_gender(),
            LanguageGender::Masculine
        );
    }

    #[test]
    fn test_animate_masculine_only_in_west_slavic() {
        let animate = LanguageGender::AnimateMasculine;
        assert!(Slavic::new(SlavicLanguage::Polish).required_genders().contains(&animate));
        assert!(Slavic::new(SlavicLanguage::Czech).required_genders().contains(&animate));
        assert!(!Slavic::new(SlavicLanguage::Russian).required_genders().contains(&animate));
    }

    #[test]
    fn test_bulgarian_moves_inflection() {
        let bg = Bulgarian::new();
        assert!(bg.move_noun_inflection_to_first_modifier());
        assert_eq!(bg.required_cases(), &[LanguageCase::Nominative]);
        assert_eq!(bg.allowed_cases().len(), 2);
    }
}
