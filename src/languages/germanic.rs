//! Lenguas germánicas (salvo el inglés)
//!
//! - Alemán: cuatro casos, tres géneros y adjetivos con declinación fuerte
//!   o débil según el artículo que los precede.
//! - Neerlandés: género común y neutro ("de"/"het").
//! - Escandinavas: el artículo definido o indefinido va en la forma del
//!   sustantivo ("kontot"); noruego e islandés lo deducen de la partícula.

use crate::grammar::{
    ArticleForm, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, NounForm,
};
use crate::languages::{lowercase_first, Language};

const ARTICLES: &[LanguageArticle] = &[
    LanguageArticle::Zero,
    LanguageArticle::Indefinite,
    LanguageArticle::Definite,
];

const GERMAN_CASES: &[LanguageCase] = &[
    LanguageCase::Nominative,
    LanguageCase::Accusative,
    LanguageCase::Genitive,
    LanguageCase::Dative,
];

/// Alemán
pub struct German;

impl German {
    pub fn new() -> Self {
        Self
    }
}

impl Default for German {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for German {
    fn code(&self) -> &str {
        "de"
    }

    fn name(&self) -> &str {
        "Deutsch"
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn has_article(&self) -> bool {
        true
    }

    fn required_cases(&self) -> &'static [LanguageCase] {
        GERMAN_CASES
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        &[
            LanguageGender::Neuter,
            LanguageGender::Feminine,
            LanguageGender::Masculine,
        ]
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        ARTICLES
    }

    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn default_article_string(
        &self,
        form: ArticleForm,
        article: LanguageArticle,
    ) -> Option<&'static str> {
        use LanguageCase::{Accusative, Dative, Genitive, Nominative};
        use LanguageGender::{Feminine, Masculine};

        let plural = form.number() != LanguageNumber::Singular;
        let gender = form.gender();
        match article {
            LanguageArticle::Definite => Some(match (form.case(), plural, gender) {
                (Nominative, true, _) | (Accusative, true, _) => "Die",
                (Genitive, true, _) => "Der",
                (Dative, true, _) => "Den",
                (Nominative, _, Feminine) | (Accusative, _, Feminine) => "Die",
                (Genitive, _, Feminine) | (Dative, _, Feminine) => "Der",
                (Nominative, _, Masculine) => "Der",
                (Accusative, _, Masculine) => "Den",
                (Genitive, _, _) => "Des",
                (Dative, _, _) => "Dem",
                _ => "Das",
            }),
            LanguageArticle::Indefinite if !plural => Some(match (form.case(), gender) {
                (Nominative, Feminine) | (Accusative, Feminine) => "Eine",
                (Genitive, Feminine) | (Dative, Feminine) => "Einer",
                (Accusative, Masculine) => "Einen",
                (Genitive, _) => "Eines",
                (Dative, _) => "Einem",
                _ => "Ein",
            }),
            _ => None,
        }
    }

    /// Los sustantivos alemanes van siempre con mayúscula: solo se baja la
    /// primera letra cuando la forma incluye el artículo
    fn lowercase_noun(&self, value: &str, form: NounForm) -> String {
        if form.article() != LanguageArticle::Zero {
            lowercase_first(value)
        } else {
            value.to_string()
        }
    }
}

/// Neerlandés
pub struct Dutch;

impl Dutch {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Dutch {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Dutch {
    fn code(&self) -> &str {
        "nl"
    }

    fn name(&self) -> &str {
        "Nederlands"
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn has_article(&self) -> bool {
        true
    }

    /// El género común se guarda como femenino
    fn required_genders(&self) -> &'static [LanguageGender] {
        &[LanguageGender::Feminine, LanguageGender::Neuter]
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        ARTICLES
    }

    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn default_article_string(
        &self,
        form: ArticleForm,
        article: LanguageArticle,
    ) -> Option<&'static str> {
        let plural = form.number() != LanguageNumber::Singular;
        match article {
            LanguageArticle::Definite if !plural && form.gender() == LanguageGender::Neuter => {
                Some("Het")
            }
            LanguageArticle::Definite => Some("De"),
            LanguageArticle::Indefinite if !plural => Some("Een"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NordicLanguage {
    Swedish,
    Danish,
    Norwegian,
    Icelandic,
}

/// Sueco, danés, noruego e islandés
pub struct Nordic {
    variant: NordicLanguage,
}

impl Nordic {
    pub fn new(variant: NordicLanguage) -> Self {
        Self { variant }
    }
}

impl Language for Nordic {
    fn code(&self) -> &str {
        match self.variant {
            NordicLanguage::Swedish => "sv",
            NordicLanguage::Danish => "da",
            NordicLanguage::Norwegian => "no",
            NordicLanguage::Icelandic => "is",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            NordicLanguage::Swedish => "Svenska",
            NordicLanguage::Danish => "Dansk",
            NordicLanguage::Norwegian => "Norsk",
            NordicLanguage::Icelandic => "Íslenska",
        }
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

    fn required_cases(&self) -> &'static [LanguageCase] {
        match self.variant {
            NordicLanguage::Icelandic => GERMAN_CASES,
            _ => &[LanguageCase::Nominative],
        }
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        match self.variant {
            // Utrum (común) y neutro
            NordicLanguage::Swedish | NordicLanguage::Danish => {
                &[LanguageGender::Feminine, LanguageGender::Neuter]
            }
            NordicLanguage::Norwegian | NordicLanguage::Icelandic => &[
                LanguageGender::Masculine,
                LanguageGender::Feminine,
                LanguageGender::Neuter,
            ],
        }
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        ARTICLES
    }

    fn noun_article_types(&self) -> &'static [LanguageArticle] {
        match self.variant {
            NordicLanguage::Icelandic => &[LanguageArticle::Zero, LanguageArticle::Definite],
            _ => ARTICLES,
        }
    }

    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero, LanguageArticle::Definite]
    }

    fn should_infer_noun_def_article_from_particle(&self) -> bool {
        matches!(
            self.variant,
            NordicLanguage::Norwegian | NordicLanguage::Icelandic
        )
    }
}
