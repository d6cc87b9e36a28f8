//! Árabe: número dual, masculino y femenino, artículo definido unido al
//! sustantivo ("الحساب") y adjetivos pospuestos que concuerdan en
//! definitud.

use crate::grammar::{LanguageArticle, LanguageGender, LanguagePosition, PluralRule};
use crate::languages::Language;

pub struct Arabic;

impl Arabic {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Arabic {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Arabic {
    fn code(&self) -> &str {
        "ar"
    }

    fn name(&self) -> &str {
        "العربية"
    }

    fn has_gender(&self) -> bool {
        true
    }

    fn has_dual(&self) -> bool {
        true
    }

    fn has_article(&self) -> bool {
        true
    }

    fn has_article_in_noun_form(&self) -> bool {
        true
    }

    fn has_capitalization(&self) -> bool {
        false
    }

    fn required_genders(&self) -> &'static [LanguageGender] {
        &[LanguageGender::Masculine, LanguageGender::Feminine]
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

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Post
    }

    fn plural_rule(&self) -> PluralRule {
        PluralRule::Arabic
    }
}
