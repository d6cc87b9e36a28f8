//! Lenguas urálicas: finés, estonio y húngaro
//!
//! Sin género y con muchos casos locativos. El finés y el húngaro marcan
//! además el posesivo en el sustantivo ("tilini", "számlám"); el húngaro
//! tiene artículos sueltos que dependen del sonido inicial ("a"/"az").

use crate::grammar::{ArticleForm, LanguageArticle, LanguageCase, LanguagePossessive, LanguageStartsWith};
use crate::languages::Language;

use LanguageCase::*;

const FINNISH_CASES: &[LanguageCase] = &[
    Nominative,
    Genitive,
    Partitive,
    Inessive,
    Elative,
    Illative,
    Adessive,
    Ablative,
    Allative,
    Essive,
    Translative,
];

const ESTONIAN_CASES: &[LanguageCase] = &[
    Nominative,
    Genitive,
    Partitive,
    Illative,
    Inessive,
    Elative,
    Allative,
    Adessive,
    Ablative,
    Translative,
    Terminative,
    Essive,
    Abessive,
    Comitative,
];

const HUNGARIAN_CASES: &[LanguageCase] = &[
    Nominative,
    Accusative,
    Illative,
    Inessive,
    Elative,
    Sublative,
    Superessive,
    Delative,
    Allative,
    Ablative,
    Dative,
    Instrumental,
    Translative,
    CausalFinal,
    EssiveFormal,
    Terminative,
    Distributive,
];

const POSSESSIVES: &[LanguagePossessive] = &[
    LanguagePossessive::None,
    LanguagePossessive::First,
    LanguagePossessive::Second,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UralicLanguage {
    Finnish,
    Estonian,
    Hungarian,
}

pub struct Uralic {
    variant: UralicLanguage,
}

impl Uralic {
    pub fn new(variant: UralicLanguage) -> Self {
        Self { variant }
    }

    fn is_hungarian(&self) -> bool {
        self.variant == UralicLanguage::Hungarian
    }
}

impl Language for Uralic {
    fn code(&self) -> &str {
        match self.variant {
            UralicLanguage::Finnish => "fi",
            UralicLanguage::Estonian => "et",
            UralicLanguage::Hungarian => "hu",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            UralicLanguage::Finnish => "Suomi",
            UralicLanguage::Estonian => "Eesti",
            UralicLanguage::Hungarian => "Magyar",
        }
    }

    fn has_article(&self) -> bool {
        self.is_hungarian()
    }

    fn has_starts_with(&self) -> bool {
        self.is_hungarian()
    }

    /// El estonio no marca el posesivo en el sustantivo
    fn has_possessive(&self) -> bool {
        self.variant != UralicLanguage::Estonian
    }

    fn required_cases(&self) -> &'static [LanguageCase] {
        match self.variant {
            UralicLanguage::Finnish => FINNISH_CASES,
            UralicLanguage::Estonian => ESTONIAN_CASES,
            UralicLanguage::Hungarian => HUNGARIAN_CASES,
        }
    }

    fn required_starts_with(&self) -> &'static [LanguageStartsWith] {
        if self.is_hungarian() {
            &[LanguageStartsWith::Consonant, LanguageStartsWith::Vowel]
        } else {
            &[LanguageStartsWith::Consonant]
        }
    }

    fn allowed_possessives(&self) -> &'static [LanguagePossessive] {
        if self.has_possessive() {
            POSSESSIVES
        } else {
            &[LanguagePossessive::None]
        }
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        if self.is_hungarian() {
            &[
                LanguageArticle::Zero,
                LanguageArticle::Indefinite,
                LanguageArticle::Definite,
            ]
        } else {
            &[LanguageArticle::Zero]
        }
    }

    /// "Egy" solo en singular; "Az" ante vocal
    fn default_article_string(
        &self,
        form: ArticleForm,
        article: LanguageArticle,
    ) -> Option<&'static str> {
        if !self.is_hungarian() {
            return None;
        }
        match article {
            LanguageArticle::Indefinite if form.number().is_plural() => None,
            LanguageArticle::Indefinite => Some("Egy"),
            LanguageArticle::Definite => match form.starts_with() {
                LanguageStartsWith::Vowel => Some("Az"),
                _ => Some("A"),
            },
            _ => None,
        }
    }

    fn derive_starts_with(&self, value: &str) -> Option<LanguageStartsWith> {
        if !self.is_hungarian() {
            return None;
        }
        let first = value.trim_start().chars().next()?;
        let vowel = "aáeéiíoóöőuúüűAÁEÉIÍOÓÖŐUÚÜŰ".contains(first);
        Some(if vowel {
            LanguageStartsWith::Vowel
        } else {
            LanguageStartsWith::Consonant
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{LanguageGender, LanguageNumber};

    #[test]
    fn test_case_inventories() {
        assert_eq!(Uralic::new(UralicLanguage::Finnish).required_cases().len(), 11);
        assert_eq!(Uralic::new(UralicLanguage::Estonian).required_cases().len(), 14);
        assert_eq!(Uralic::new(UralicLanguage::Hungarian).required_cases().len(), 17);
        assert!(!Uralic::new(UralicLanguage::Estonian).has_possessive());
    }

    #[test]
    fn test_hungarian_articles() {
        let hu = Uralic::new(UralicLanguage::Hungarian);
        let form = |starts_with, number| {
            ArticleForm::new(starts_with, LanguageGender::Neuter, number, LanguageCase::Nominative)
        };
        let vowel = form(LanguageStartsWith::Vowel, LanguageNumber::Singular);
        let consonant = form(LanguageStartsWith::Consonant, LanguageNumber::Plural);
        assert_eq!(hu.default_article_string(vowel, LanguageArticle::Definite), Some("Az"));
        assert_eq!(hu.default_article_string(consonant, LanguageArticle::Definite), Some("A"));
        assert_eq!(hu.default_article_string(vowel, LanguageArticle::Indefinite), Some("Egy"));
        assert_eq!(hu.default_article_string(consonant, LanguageArticle::Indefinite), None);
        assert_eq!(hu.derive_starts_with("Ügyfél"), Some(LanguageStartsWith::Vowel));
        assert_eq!(hu.derive_starts_with("számla"), Some(LanguageStartsWith::Consonant));
        assert_eq!(Uralic::new(UralicLanguage::Finnish).derive_starts_with("asiakas"), None);
    }
}
