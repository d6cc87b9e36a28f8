//! Artículo

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::config::ValidationPolicy;
use crate::declension::Declension;
use crate::error::{GrammarError, Result};
use crate::grammar::{ArticleForm, LanguageArticle, TermType};
use crate::terms::adjective::fill_from_neighbors;
use crate::terms::{ensure_writable, report_unfilled, values_to_json, GrammaticalTerm};

#[derive(Debug, Clone)]
pub struct Article {
    declension: &'static Declension,
    name: String,
    article_type: LanguageArticle,
    copied_from_default: bool,
    values: BTreeMap<ArticleForm, String>,
    frozen: bool,
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.declension.code() == other.declension.code()
            && self.name == other.name
            && self.values == other.values
    }
}

impl Article {
    pub(crate) fn new(
        declension: &'static Declension,
        name: &str,
        article_type: LanguageArticle,
    ) -> Self {
        Self {
            declension,
            name: name.trim().to_lowercase(),
            article_type,
            copied_from_default: false,
            values: BTreeMap::new(),
            frozen: false,
        }
    }

    pub fn with_copied_from_default(mut self, copied: bool) -> Self {
        self.copied_from_default = copied;
        self
    }

    pub fn article_type(&self) -> LanguageArticle {
        self.article_type
    }

    pub fn values(&self) -> impl Iterator<Item = (&ArticleForm, &String)> {
        self.values.iter()
    }

    pub fn set_string(&mut self, form: ArticleForm, value: &str) -> Result<()> {
        ensure_writable(self.frozen, "el artículo", &self.name)?;
        if !self.declension.article_forms().contains(&form) {
            return Err(GrammarError::invalid_form(&self.name, form));
        }
        self.values.insert(form, value.to_string());
        Ok(())
    }

    pub fn get_string(&self, form: ArticleForm) -> Option<&str> {
        self.values.get(&form).map(String::as_str)
    }

    pub fn get_close_string(&self, form: ArticleForm) -> Option<&str> {
        self.get_string(form)
            .or_else(|| {
                self.declension
                    .article_neighbors(form)
                    .into_iter()
                    .find_map(|f| self.get_string(f))
            })
            .or_else(|| {
                self.declension
                    .default_article_form()
                    .and_then(|f| self.get_string(f))
            })
    }
}

impl GrammaticalTerm for Article {
    fn name(&self) -> &str {
        &self.name
    }

    fn term_type(&self) -> TermType {
        TermType::Article
    }

    fn declension(&self) -> &'static Declension {
        self.declension
    }

    fn is_copied_from_default(&self) -> bool {
        self.copied_from_default
    }

    fn validate(&mut self, policy: ValidationPolicy) -> Result<()> {
        ensure_writable(self.frozen, "el artículo", &self.name)?;
        fill_from_neighbors(
            &mut self.values,
            self.declension.article_forms(),
            |f| self.declension.article_neighbors(f),
        );
        let fallback = self
            .declension
            .default_article_form()
            .and_then(|f| self.get_string(f))
            .map(str::to_string);
        for &form in self.declension.article_forms() {
            if self.values.contains_key(&form) {
                continue;
            }
            match &fallback {
                Some(value) => {
                    self.values.insert(form, value.clone());
                }
                None => report_unfilled(policy, &self.name, form)?,
            }
        }
        Ok(())
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn to_json(&self) -> Value {
        json!({
            "t": TermType::Article.char_id().to_string(),
            "l": self.name,
            "a": self.article_type.db_value(),
            "v": values_to_json(self.values.iter()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declension::declension_for;
    use crate::grammar::{LanguageCase, LanguageGender, LanguageNumber, LanguageStartsWith};

    fn english_a() -> Article {
        let en = declension_for("en");
        let mut article = en.create_article("a", LanguageArticle::Indefinite).unwrap();
        let vowel = en
            .exact_article_form(
                LanguageStartsWith::Vowel,
                LanguageGender::Neuter,
                LanguageNumber::Singular,
                LanguageCase::Nominative,
            )
            .unwrap();
        article
            .set_string(en.default_article_form().unwrap(), "a")
            .unwrap();
        article.set_string(vowel, "an").unwrap();
        article
    }

    #[test]
    fn test_article_close_string() {
        let en = declension_for("en");
        let article = english_a();
        let plural_vowel = en
            .approximate_article_form(
                LanguageStartsWith::Vowel,
                LanguageGender::Neuter,
                LanguageNumber::Plural,
                LanguageCase::Nominative,
            )
            .unwrap();
        assert_eq!(article.get_string(plural_vowel), None);
        assert_eq!(article.get_close_string(plural_vowel), Some("an"));
    }

    #[test]
    fn test_article_validate_and_json() {
        let en = declension_for("en");
        let mut article = english_a();
        article.validate(ValidationPolicy::Strict).unwrap();
        assert_eq!(article.values().count(), en.article_forms().len());
        let doc = article.to_json();
        assert_eq!(doc["t"], "d");
        assert_eq!(doc["a"], "i");
        assert_eq!(doc["v"]["v-n-0-n"], "an");
        assert_eq!(doc["v"]["v-n-1-n"], "an");
    }
}
