//! Sustantivo

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::config::ValidationPolicy;
use crate::declension::Declension;
use crate::error::{GrammarError, Result};
use crate::grammar::{
    LanguageGender, LanguageNumber, LanguageStartsWith, NounForm, NounType, TermType,
};
use crate::terms::{ensure_writable, report_unfilled, values_to_json, GrammaticalTerm};

/// Sustantivo con su género, su sonido inicial y una cadena por forma
#[derive(Debug, Clone)]
pub struct Noun {
    declension: &'static Declension,
    name: String,
    entity: Option<String>,
    plural_alias: Option<String>,
    gender: LanguageGender,
    starts_with: LanguageStartsWith,
    access: Option<String>,
    noun_type: NounType,
    standard_field: bool,
    classifier: Option<String>,
    copied_from_default: bool,
    values: BTreeMap<NounForm, String>,
    frozen: bool,
}

impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        self.declension.code() == other.declension.code()
            && self.name == other.name
            && self.values == other.values
    }
}

impl Noun {
    pub(crate) fn new(
        declension: &'static Declension,
        name: &str,
        noun_type: NounType,
        entity: Option<&str>,
        gender: LanguageGender,
        starts_with: LanguageStartsWith,
    ) -> Self {
        Self {
            declension,
            name: name.trim().to_lowercase(),
            entity: entity.map(|e| e.to_string()),
            plural_alias: None,
            gender,
            starts_with,
            access: None,
            noun_type,
            standard_field: false,
            classifier: None,
            copied_from_default: false,
            values: BTreeMap::new(),
            frozen: false,
        }
    }

    pub fn with_plural_alias(mut self, alias: &str) -> Self {
        let alias = alias.trim();
        self.plural_alias = (!alias.is_empty()).then(|| alias.to_lowercase());
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        let classifier = classifier.trim();
        self.classifier = (!classifier.is_empty()).then(|| classifier.to_string());
        self
    }

    pub fn with_access(mut self, access: &str) -> Self {
        self.access = Some(access.to_string());
        self
    }

    pub fn with_standard_field(mut self, standard_field: bool) -> Self {
        self.standard_field = standard_field;
        self
    }

    pub fn with_copied_from_default(mut self, copied: bool) -> Self {
        self.copied_from_default = copied;
        self
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn plural_alias(&self) -> Option<&str> {
        self.plural_alias.as_deref()
    }

    pub fn gender(&self) -> LanguageGender {
        self.gender
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn access(&self) -> Option<&str> {
        self.access.as_deref()
    }

    pub fn noun_type(&self) -> NounType {
        self.noun_type
    }

    pub fn is_standard_field(&self) -> bool {
        self.standard_field
    }

    /// Clasificador propio para `<counter/>`
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn values(&self) -> impl Iterator<Item = (&NounForm, &String)> {
        self.values.iter()
    }

    pub fn set_string(&mut self, form: NounForm, value: &str) -> Result<()> {
        ensure_writable(self.frozen, "el sustantivo", &self.name)?;
        if !self.declension.all_noun_forms().contains(&form) {
            return Err(GrammarError::invalid_form(&self.name, form));
        }
        self.values.insert(form, value.to_string());
        Ok(())
    }

    /// Valor almacenado; una forma heredada lee su forma base
    pub fn get_string(&self, form: NounForm) -> Option<&str> {
        self.values.get(&form.base()).map(String::as_str)
    }

    /// Valor de la forma vecina más cercana, cambiando un solo eje
    pub fn get_close_but_no_cigar_string(&self, form: NounForm) -> Option<&str> {
        self.declension
            .noun_neighbors(form.base())
            .into_iter()
            .find_map(|f| self.values.get(&f))
            .map(String::as_str)
    }

    /// Valor de la forma por defecto del número indicado
    pub fn get_default_string(&self, plural: bool) -> Option<&str> {
        let number = if plural && self.declension.has_plural() {
            LanguageNumber::Plural
        } else {
            LanguageNumber::Singular
        };
        let form = self
            .declension
            .noun_form(number, self.declension.default_article());
        self.get_string(form)
    }

    /// Valor de la forma con el artículo antepuesto si la forma es heredada.
    ///
    /// Solo las entidades reciben el artículo; el resto devuelve la forma base.
    pub fn get_articled_string(&self, form: NounForm) -> Option<String> {
        let base = self.get_string(form)?;
        if !form.is_legacy_articled() || self.noun_type != NounType::Entity {
            return Some(base.to_string());
        }
        let article =
            self.declension
                .default_article_string(form, self.starts_with, self.gender);
        Some(match article {
            Some(article) => {
                let lowered = self.declension.lowercase_noun(base, form.base());
                if article.ends_with('\'') {
                    format!("{}{}", article, lowered)
                } else {
                    format!("{} {}", article, lowered)
                }
            }
            None => base.to_string(),
        })
    }

    /// Cadena para renderizar: valor almacenado, superficie generada, forma
    /// vecina y, por último, la forma por defecto del mismo número o la otra
    pub fn resolve_string(&self, form: NounForm, lowercase: bool) -> Option<String> {
        let value = self.get_articled_string(form).or_else(|| {
            log::info!("'{}' no define la forma {}", self.name, form);
            let derived = self
                .get_default_string(false)
                .and_then(|stem| self.declension.derive_noun_string(stem, form.base()));
            let plural = form.number().is_plural();
            derived.or_else(|| {
                self.get_close_but_no_cigar_string(form)
                    .or_else(|| self.get_default_string(plural))
                    .or_else(|| self.get_default_string(!plural))
                    .map(str::to_string)
            })
        })?;
        Some(if lowercase {
            self.declension.lowercase_noun(&value, form)
        } else {
            value
        })
    }

    /// Copia sin congelar con otro género, otro sonido o valores sustituidos
    pub fn clone_with(
        &self,
        gender: Option<LanguageGender>,
        starts_with: Option<LanguageStartsWith>,
        overrides: impl IntoIterator<Item = (NounForm, String)>,
    ) -> Noun {
        let mut copy = self.clone();
        copy.frozen = false;
        if let Some(gender) = gender {
            copy.gender = gender;
        }
        if let Some(starts_with) = starts_with {
            copy.starts_with = starts_with;
        }
        for (form, value) in overrides {
            if let Err(e) = copy.set_string(form, &value) {
                log::warn!("{}", e);
            }
        }
        copy
    }
}

impl GrammaticalTerm for Noun {
    fn name(&self) -> &str {
        &self.name
    }

    fn term_type(&self) -> TermType {
        TermType::Noun
    }

    fn declension(&self) -> &'static Declension {
        self.declension
    }

    fn is_copied_from_default(&self) -> bool {
        self.copied_from_default
    }

    fn validate(&mut self, policy: ValidationPolicy) -> Result<()> {
        ensure_writable(self.frozen, "el sustantivo", &self.name)?;
        let gender = self.declension.normalize_gender(self.gender);
        if gender != self.gender {
            log::debug!(
                "{}: género {:?} no válido para '{}', se usa {:?}",
                self.declension.code(),
                self.gender,
                self.name,
                gender
            );
            self.gender = gender;
        }
        if let Some(derived) = self
            .get_default_string(false)
            .and_then(|v| self.declension.derive_starts_with(v))
        {
            self.starts_with = derived;
        }

        let stem = self.get_default_string(false).map(str::to_string);
        for &form in self.declension.all_noun_forms() {
            if self.values.contains_key(&form) {
                continue;
            }
            let filled = stem
                .as_deref()
                .and_then(|s| self.declension.derive_noun_string(s, form))
                .or_else(|| self.get_close_but_no_cigar_string(form).map(str::to_string))
                .or_else(|| stem.clone());
            match filled {
                Some(value) => {
                    log::trace!("'{}': {} <- {}", self.name, form, value);
                    self.values.insert(form, value);
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
        let mut doc = json!({
            "t": TermType::Noun.char_id().to_string(),
            "l": self.name,
            "v": values_to_json(self.values.iter()),
        });
        if self.declension.has_gender() {
            doc["g"] = json!(self.gender.db_value());
        }
        if self.declension.has_starts_with() || self.declension.has_ends_with() {
            doc["s"] = json!(self.starts_with.db_value());
        }
        if let Some(classifier) = &self.classifier {
            doc["c"] = json!(classifier);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declension::declension_for;
    use crate::grammar::{LanguageArticle, LanguageCase, LanguagePossessive};

    fn french_account() -> Noun {
        let fr = declension_for("fr");
        let mut noun = fr.create_noun(
            "account",
            NounType::Entity,
            Some("account"),
            LanguageGender::Masculine,
            LanguageStartsWith::Consonant,
        );
        noun.set_string(fr.noun_form(LanguageNumber::Singular, LanguageArticle::Zero), "compte")
            .unwrap();
        noun.set_string(fr.noun_form(LanguageNumber::Plural, LanguageArticle::Zero), "comptes")
            .unwrap();
        noun
    }

    #[test]
    fn test_set_then_get() {
        let noun = french_account();
        let fr = declension_for("fr");
        assert_eq!(
            noun.get_string(fr.noun_form(LanguageNumber::Plural, LanguageArticle::Zero)),
            Some("comptes")
        );
        assert_eq!(noun.get_default_string(false), Some("compte"));
    }

    #[test]
    fn test_frozen_noun_rejects_writes() {
        let mut noun = french_account();
        noun.freeze();
        let fr = declension_for("fr");
        let err = noun
            .set_string(fr.default_noun_form(), "autre")
            .unwrap_err();
        assert!(matches!(err, GrammarError::Frozen { .. }));
        assert!(noun.validate(ValidationPolicy::Lenient).is_err());
    }

    #[test]
    fn test_foreign_form_is_invalid() {
        let mut noun = french_account();
        let de = declension_for("de");
        let genitive = de
            .exact_noun_form(
                LanguageNumber::Singular,
                LanguageCase::Genitive,
                LanguagePossessive::None,
                LanguageArticle::Zero,
            )
            .unwrap();
        assert!(matches!(
            noun.set_string(genitive, "x"),
            Err(GrammarError::InvalidForm { .. })
        ));
    }

    #[test]
    fn test_validate_fills_from_neighbor() {
        let de = declension_for("de");
        let mut noun = de.create_noun(
            "account",
            NounType::Entity,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Consonant,
        );
        noun.set_string(de.noun_form(LanguageNumber::Singular, LanguageArticle::Zero), "Konto")
            .unwrap();
        noun.set_string(de.noun_form(LanguageNumber::Plural, LanguageArticle::Zero), "Konten")
            .unwrap();
        noun.validate(ValidationPolicy::Strict).unwrap();
        let dative_plural = de
            .exact_noun_form(
                LanguageNumber::Plural,
                LanguageCase::Dative,
                LanguagePossessive::None,
                LanguageArticle::Zero,
            )
            .unwrap();
        assert_eq!(noun.get_string(dative_plural), Some("Konten"));
        assert_eq!(noun.values().count(), de.all_noun_forms().len());
    }

    #[test]
    fn test_validate_strict_fails_without_values() {
        let fr = declension_for("fr");
        let mut empty = fr.create_noun(
            "ghost",
            NounType::Other,
            None,
            LanguageGender::Feminine,
            LanguageStartsWith::Consonant,
        );
        assert!(matches!(
            empty.validate(ValidationPolicy::Strict),
            Err(GrammarError::InvalidForm { .. })
        ));
        assert!(empty.validate(ValidationPolicy::Lenient).is_ok());
    }

    #[test]
    fn test_validate_resets_neuter_in_romance() {
        let fr = declension_for("fr");
        let mut noun = fr.create_noun(
            "case",
            NounType::Entity,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Consonant,
        );
        noun.set_string(fr.default_noun_form(), "requête").unwrap();
        noun.validate(ValidationPolicy::Lenient).unwrap();
        assert_eq!(noun.gender(), LanguageGender::Feminine);
    }

    #[test]
    fn test_korean_starts_with_is_derived() {
        let ko = declension_for("ko");
        let mut noun = ko.create_noun(
            "file",
            NounType::Other,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Consonant,
        );
        noun.set_string(ko.default_noun_form(), "파일").unwrap();
        noun.validate(ValidationPolicy::Strict).unwrap();
        assert_eq!(noun.starts_with(), LanguageStartsWith::Special);
    }

    #[test]
    fn test_turkish_forms_are_generated() {
        let tr = declension_for("tr");
        let mut noun = tr.create_noun(
            "house",
            NounType::Other,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Consonant,
        );
        noun.set_string(tr.default_noun_form(), "ev").unwrap();
        let ablative = tr
            .exact_noun_form(
                LanguageNumber::Singular,
                LanguageCase::Ablative,
                LanguagePossessive::None,
                LanguageArticle::Zero,
            )
            .unwrap();
        assert_eq!(noun.get_string(ablative), None);
        assert_eq!(noun.resolve_string(ablative, false).as_deref(), Some("evden"));
        noun.validate(ValidationPolicy::Strict).unwrap();
        assert_eq!(noun.get_string(ablative), Some("evden"));
    }

    #[test]
    fn test_clone_with_overrides() {
        let noun = french_account();
        let fr = declension_for("fr");
        let renamed = noun.clone_with(
            Some(LanguageGender::Feminine),
            None,
            vec![(fr.default_noun_form(), "fiche".to_string())],
        );
        assert_eq!(renamed.gender(), LanguageGender::Feminine);
        assert_eq!(renamed.get_default_string(false), Some("fiche"));
        assert_eq!(renamed.get_default_string(true), Some("comptes"));
        assert_ne!(renamed, noun);
    }

    #[test]
    fn test_noun_json() {
        let noun = french_account().with_classifier("pièce");
        let doc = noun.to_json();
        assert_eq!(doc["t"], "n");
        assert_eq!(doc["l"], "account");
        assert_eq!(doc["g"], "m");
        assert_eq!(doc["s"], "c");
        assert_eq!(doc["c"], "pièce");
        assert_eq!(doc["v"]["1-n-n-n"], "comptes");
    }

    #[test]
    fn test_legacy_article_is_prepended_for_entities() {
        let en = declension_for("en");
        let mut noun = en.create_noun(
            "account",
            NounType::Entity,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Vowel,
        );
        noun.set_string(en.default_noun_form(), "Account").unwrap();
        let form = en.approximate_noun_form(
            LanguageNumber::Singular,
            LanguageCase::Nominative,
            LanguagePossessive::None,
            LanguageArticle::Indefinite,
        );
        assert_eq!(noun.get_articled_string(form).as_deref(), Some("An account"));
        assert_eq!(noun.resolve_string(form, true).as_deref(), Some("an account"));

        let field = noun.clone_with(None, None, Vec::new());
        let field = Noun {
            noun_type: NounType::Field,
            ..field
        };
        assert_eq!(field.get_articled_string(form).as_deref(), Some("Account"));
    }
}
