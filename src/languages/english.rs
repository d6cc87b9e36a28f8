//! Inglés: sin género ni casos, artículos como palabra aparte y "a"/"an"
//! según el sonido inicial de la palabra siguiente.

use crate::grammar::{ArticleForm, LanguageArticle, LanguageStartsWith};
use crate::languages::Language;

pub struct English;

impl English {
    pub fn new() -> Self {
        Self
    }
}

impl Default for English {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for English {
    fn code(&self) -> &str {
        "en"
    }

    fn name(&self) -> &str {
        "English"
    }

    fn has_article(&self) -> bool {
        true
    }

    fn has_starts_with(&self) -> bool {
        true
    }

    fn required_starts_with(&self) -> &'static [LanguageStartsWith] {
        &[LanguageStartsWith::Consonant, LanguageStartsWith::Vowel]
    }

    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        &[
            LanguageArticle::Zero,
            LanguageArticle::Indefinite,
            LanguageArticle::Definite,
        ]
    }

    fn default_article_string(
        &self,
        form: ArticleForm,
        article: LanguageArticle,
    ) -> Option<&'static str> {
        match article {
            LanguageArticle::Definite => Some("The"),
            LanguageArticle::Indefinite if form.number().is_plural() => None,
            LanguageArticle::Indefinite => match form.starts_with() {
                LanguageStartsWith::Vowel => Some("An"),
                _ => Some("A"),
            },
            _ => None,
        }
    }
}
