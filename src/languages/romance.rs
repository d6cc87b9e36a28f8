//! Lenguas romances: femenino y masculino, adjetivos pospuestos y artículos
//! como palabra aparte (salvo el rumano, que los une al sustantivo).
//!
//! El francés distingue consonante y vocal inicial ("le"/"l'"); el italiano
//! añade la "s impura" ("lo studio").

use crate::grammar::{
    ArticleForm, LanguageArticle, LanguageGender, LanguagePosition, LanguageStartsWith,
    PluralRule,
};
use crate::languages::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanceLanguage {
    Spanish,
    Portuguese,
    Catalan,
    Italian,
    French,
    Romanian,
}

pub struct Romance {
    variant: RomanceLanguage,
}

impl Romance {
    pub fn new(variant: RomanceLanguage) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> RomanceLanguage {
        self.variant
    }
}

const GENDERS: &[LanguageGender] = &[LanguageGender::Feminine, LanguageGender::Masculine];

impl Language for Romance {
    fn code(&self) -> &str {
        match self.variant {
            RomanceLanguage::Spanish => "es",
            RomanceLanguage::Portuguese => "pt",
            RomanceLanguage::Catalan => "ca",
            RomanceLanguage::Italian => "it",
            RomanceLanguage::French => "fr",
            RomanceLanguage::Romanian => "ro",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            RomanceLanguage::Spanish => "Español",
            RomanceLanguage::Portuguese => "Português",
            RomanceLanguage::Catalan => "Català",
            RomanceLanguage::Italian => "Italiano",
            RomanceLanguage::French => "Français",
            RomanceLanguage::Romanian => "Română",
        }
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn has_article(&self) -> bool {
        true
    }

    fn has_article_in_noun_form(&self) -> bool {
        self.variant == RomanceLanguage::Romanian
    }

    fn has_starts_with(&self) -> bool {
        matches!(
            self.variant,
            RomanceLanguage::French | RomanceLanguage::Italian
        )
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        GENDERS
    }

    fn required_starts_with(&self) -> &'static [LanguageStartsWith] {
        match self.variant {
            RomanceLanguage::French => &[LanguageStartsWith::Consonant, LanguageStartsWith::Vowel],
            RomanceLanguage::Italian => &[
                LanguageStartsWith::Consonant,
                LanguageStartsWith::Vowel,
                LanguageStartsWith::Special,
            ],
            _ => &[LanguageStartsWith::Consonant],
        }
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        &[
            LanguageArticle::Zero,
            LanguageArticle::Indefinite,
            LanguageArticle::Definite,
        ]
    }

    fn noun_article_types(&self) -> &'static [LanguageArticle] {
        match self.variant {
            RomanceLanguage::Romanian => &[LanguageArticle::Zero, LanguageArticle::Definite],
            _ => &[LanguageArticle::Zero],
        }
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Post
    }

    fn plural_rule(&self) -> PluralRule {
        match self.variant {
            RomanceLanguage::French => PluralRule::French,
            _ => PluralRule::English,
        }
    }

    fn default_article_string(
        &self,
        form: ArticleForm,
        article: LanguageArticle,
    ) -> Option<&'static str> {
        let feminine = form.gender() == LanguageGender::Feminine;
        let plural = form.number().is_plural();
        let sound = form.starts_with();
        match (self.variant, article) {
            (RomanceLanguage::Spanish, LanguageArticle::Definite) => Some(match (plural, feminine) {
                (false, true) => "La",
                (false, false) => "El",
                (true, true) => "Las",
                (true, false) => "Los",
            }),
            (RomanceLanguage::Spanish, LanguageArticle::Indefinite) => {
                Some(match (plural, feminine) {
                    (false, true) => "Una",
                    (false, false) => "Un",
                    (true, true) => "Unas",
                    (true, false) => "Unos",
                })
            }
            (RomanceLanguage::Portuguese, LanguageArticle::Definite) => {
                Some(match (plural, feminine) {
                    (false, true) => "A",
                    (false, false) => "O",
                    (true, true) => "As",
                    (true, false) => "Os",
                })
            }
            (RomanceLanguage::Portuguese, LanguageArticle::Indefinite) => {
                Some(match (plural, feminine) {
                    (false, true) => "Uma",
                    (false, false) => "Um",
                    (true, true) => "Umas",
                    (true, false) => "Uns",
                })
            }
            (RomanceLanguage::Catalan, LanguageArticle::Definite) => Some(match (plural, feminine) {
                (false, true) => "La",
                (false, false) => "El",
                (true, true) => "Les",
                (true, false) => "Els",
            }),
            (RomanceLanguage::Catalan, LanguageArticle::Indefinite) => {
                Some(match (plural, feminine) {
                    (false, true) => "Una",
                    (false, false) => "Un",
                    (true, true) => "Unes",
                    (true, false) => "Uns",
                })
            }
            (RomanceLanguage::French, LanguageArticle::Definite) => Some(match (plural, feminine) {
                (true, _) => "Les",
                (false, _) if sound == LanguageStartsWith::Vowel => "L'",
                (false, true) => "La",
                (false, false) => "Le",
            }),
            (RomanceLanguage::French, LanguageArticle::Indefinite) => {
                Some(match (plural, feminine) {
                    (true, _) => "Des",
                    (false, true) => "Une",
                    (false, false) => "Un",
                })
            }
            (RomanceLanguage::Italian, LanguageArticle::Definite) => {
                Some(match (plural, feminine, sound) {
                    (false, _, LanguageStartsWith::Vowel) => "L'",
                    (false, true, _) => "La",
                    (false, false, LanguageStartsWith::Special) => "Lo",
                    (false, false, _) => "Il",
                    (true, true, _) => "Le",
                    (true, false, LanguageStartsWith::Consonant) => "I",
                    (true, false, _) => "Gli",
                })
            }
            (RomanceLanguage::Italian, LanguageArticle::Indefinite) if !plural => {
                Some(match (feminine, sound) {
                    (true, LanguageStartsWith::Vowel) => "Un'",
                    (true, _) => "Una",
                    (false, LanguageStartsWith::Special) => "Uno",
                    (false, _) => "Un",
                })
            }
            _ => None,
        }
    }
}
