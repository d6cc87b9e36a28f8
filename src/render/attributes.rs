//! Atributos gramaticales de una etiqueta de término

use crate::error::{GrammarError, Result};
use crate::grammar::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguagePossessive, LanguageStartsWith, NounForm,
};

/// Categorías pedidas explícitamente en una etiqueta; `None` hereda del
/// sustantivo asociado
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TermAttributes {
    pub number: Option<LanguageNumber>,
    pub case: Option<LanguageCase>,
    pub article: Option<LanguageArticle>,
    pub possessive: Option<LanguagePossessive>,
    pub gender: Option<LanguageGender>,
    pub starts_with: Option<LanguageStartsWith>,
    pub position: Option<LanguagePosition>,
}

impl TermAttributes {
    /// Interpreta los pares `clave=valor` de una etiqueta.
    ///
    /// Las claves que no son categorías (`entity`, `val`, `escapehtml`…) se
    /// ignoran. Un valor no reconocido es un error de sintaxis, y dar
    /// `startsWith` y `endsWith` a la vez repite la categoría.
    pub fn parse(tag: &str, pairs: &[(String, String)], line: usize) -> Result<Self> {
        let mut attrs = TermAttributes::default();
        for (key, value) in pairs {
            let invalid =
                || GrammarError::parse(line, format!("valor '{}' no válido para {} en <{}>", value, key, tag));
            match key.as_str() {
                "plural" => {
                    attrs.number = Some(LanguageNumber::from_label_value(value).ok_or_else(invalid)?)
                }
                "case" => attrs.case = Some(LanguageCase::from_label_value(value).ok_or_else(invalid)?),
                "article" => {
                    attrs.article = Some(LanguageArticle::from_label_value(value).ok_or_else(invalid)?)
                }
                "poss" | "possessive" => {
                    attrs.possessive =
                        Some(LanguagePossessive::from_label_value(value).ok_or_else(invalid)?)
                }
                "gender" => {
                    attrs.gender = Some(LanguageGender::from_label_value(value).ok_or_else(invalid)?)
                }
                "startswith" | "endswith" => {
                    if attrs.starts_with.is_some() {
                        return Err(GrammarError::DuplicateCategory {
                            tag: tag.to_string(),
                            attribute: key.clone(),
                        });
                    }
                    attrs.starts_with =
                        Some(LanguageStartsWith::from_label_value(value).ok_or_else(invalid)?)
                }
                "position" => {
                    attrs.position = Some(LanguagePosition::from_label_value(value).ok_or_else(invalid)?)
                }
                _ => {}
            }
        }
        Ok(attrs)
    }

    /// Sustituye caso, artículo y posesivo por los de la forma del sustantivo
    pub fn override_from_noun_form(self, form: NounForm) -> Self {
        Self {
            case: Some(form.case()),
            article: Some(form.article()),
            possessive: Some(form.possessive()),
            ..self
        }
    }

    /// Añade el artículo solo si la etiqueta no pedía uno
    pub fn with_default_article(self, article: Option<LanguageArticle>) -> Self {
        Self {
            article: self.article.or(article),
            ..self
        }
    }
}
