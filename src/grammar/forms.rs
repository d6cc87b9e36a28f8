//! Formas gramaticales
//!
//! Una forma es una combinación de valores de categoría que selecciona una
//! cadena almacenada en un término. Los constructores son privados al crate:
//! las formas válidas solo se obtienen de una [`Declension`](crate::declension::Declension).

use std::fmt;

use super::categories::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePossessive,
    LanguageStartsWith,
};

/// Forma de sustantivo: número, caso, posesivo y artículo.
///
/// Una forma "heredada con artículo" envuelve una forma base sin artículo y
/// recuerda el artículo pedido, para idiomas que tienen artículos pero no los
/// flexionan en el sustantivo (`<account article="a"/>` en inglés).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NounForm {
    number: LanguageNumber,
    case: LanguageCase,
    possessive: LanguagePossessive,
    article: LanguageArticle,
    legacy_article: Option<LanguageArticle>,
}

impl NounForm {
    pub(crate) fn new(
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Self {
        Self {
            number,
            case,
            possessive,
            article,
            legacy_article: None,
        }
    }

    pub(crate) fn legacy(base: NounForm, article: LanguageArticle) -> Self {
        Self {
            legacy_article: Some(article),
            ..base.base()
        }
    }

    pub fn number(&self) -> LanguageNumber {
        self.number
    }

    pub fn case(&self) -> LanguageCase {
        self.case
    }

    pub fn possessive(&self) -> LanguagePossessive {
        self.possessive
    }

    /// Artículo pedido; en una forma heredada es el artículo que se antepone
    pub fn article(&self) -> LanguageArticle {
        self.legacy_article.unwrap_or(self.article)
    }

    pub fn is_legacy_articled(&self) -> bool {
        self.legacy_article.is_some()
    }

    /// Forma almacenada que hay debajo (la propia si no es heredada)
    pub fn base(&self) -> NounForm {
        NounForm {
            legacy_article: None,
            ..*self
        }
    }

    pub fn key(&self) -> String {
        let base = format!(
            "{}-{}-{}-{}",
            self.number.db_value(),
            self.case.db_value(),
            self.possessive.db_value(),
            self.article.db_value()
        );
        match self.legacy_article {
            Some(article) => format!("{}~{}", article.db_value(), base),
            None => base,
        }
    }
}

impl fmt::Display for NounForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Forma de adjetivo: la de modificador más artículo y posesivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdjectiveForm {
    starts_with: LanguageStartsWith,
    gender: LanguageGender,
    number: LanguageNumber,
    case: LanguageCase,
    article: LanguageArticle,
    possessive: LanguagePossessive,
}

impl AdjectiveForm {
    pub(crate) fn new(
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> Self {
        Self {
            starts_with,
            gender,
            number,
            case,
            article,
            possessive,
        }
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn gender(&self) -> LanguageGender {
        self.gender
    }

    pub fn number(&self) -> LanguageNumber {
        self.number
    }

    pub fn case(&self) -> LanguageCase {
        self.case
    }

    pub fn article(&self) -> LanguageArticle {
        self.article
    }

    pub fn possessive(&self) -> LanguagePossessive {
        self.possessive
    }

    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}-{}",
            self.starts_with.db_value(),
            self.gender.db_value(),
            self.number.db_value(),
            self.case.db_value(),
            self.article.db_value(),
            self.possessive.db_value()
        )
    }
}

impl fmt::Display for AdjectiveForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Forma de artículo: la de modificador (sonido, género, número, caso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleForm {
    starts_with: LanguageStartsWith,
    gender: LanguageGender,
    number: LanguageNumber,
    case: LanguageCase,
}

impl ArticleForm {
    pub(crate) fn new(
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Self {
        Self {
            starts_with,
            gender,
            number,
            case,
        }
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn gender(&self) -> LanguageGender {
        self.gender
    }

    pub fn number(&self) -> LanguageNumber {
        self.number
    }

    pub fn case(&self) -> LanguageCase {
        self.case
    }

    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.starts_with.db_value(),
            self.gender.db_value(),
            self.number.db_value(),
            self.case.db_value()
        )
    }
}

impl fmt::Display for ArticleForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
