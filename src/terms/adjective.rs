//! Adjetivo

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::config::ValidationPolicy;
use crate::declension::Declension;
use crate::error::{GrammarError, Result};
use crate::grammar::{AdjectiveForm, LanguagePosition, LanguageStartsWith, TermType};
use crate::terms::{ensure_writable, report_unfilled, values_to_json, GrammaticalTerm};

/// Modificador con una cadena por forma de adjetivo
#[derive(Debug, Clone)]
pub struct Adjective {
    declension: &'static Declension,
    name: String,
    starts_with: LanguageStartsWith,
    position: LanguagePosition,
    copied_from_default: bool,
    values: BTreeMap<AdjectiveForm, String>,
    frozen: bool,
}

impl PartialEq for Adjective {
    fn eq(&self, other: &Self) -> bool {
        self.declension.code() == other.declension.code()
            && self.name == other.name
            && self.values == other.values
    }
}

impl Adjective {
    pub(crate) fn new(
        declension: &'static Declension,
        name: &str,
        starts_with: LanguageStartsWith,
        position: LanguagePosition,
    ) -> Self {
        Self {
            declension,
            name: name.trim().to_lowercase(),
            starts_with,
            position,
            copied_from_default: false,
            values: BTreeMap::new(),
            frozen: false,
        }
    }

    pub fn with_copied_from_default(mut self, copied: bool) -> Self {
        self.copied_from_default = copied;
        self
    }

    /// Sonido inicial del propio adjetivo, para el modificador que lo precede
    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn position(&self) -> LanguagePosition {
        self.position
    }

    pub fn values(&self) -> impl Iterator<Item = (&AdjectiveForm, &String)> {
        self.values.iter()
    }

    pub fn set_string(&mut self, form: AdjectiveForm, value: &str) -> Result<()> {
        ensure_writable(self.frozen, "el adjetivo", &self.name)?;
        if !self.declension.adjective_forms().contains(&form) {
            return Err(GrammarError::invalid_form(&self.name, form));
        }
        self.values.insert(form, value.to_string());
        Ok(())
    }

    pub fn get_string(&self, form: AdjectiveForm) -> Option<&str> {
        self.values.get(&form).map(String::as_str)
    }

    /// Valor de la forma pedida, de una vecina o de la forma por defecto
    pub fn get_close_string(&self, form: AdjectiveForm) -> Option<&str> {
        self.get_string(form)
            .or_else(|| {
                self.declension
                    .adjective_neighbors(form)
                    .into_iter()
                    .find_map(|f| self.get_string(f))
            })
            .or_else(|| self.get_string(self.declension.default_adjective_form()))
    }
}

impl GrammaticalTerm for Adjective {
    fn name(&self) -> &str {
        &self.name
    }

    fn term_type(&self) -> TermType {
        TermType::Adjective
    }

    fn declension(&self) -> &'static Declension {
        self.declension
    }

    fn is_copied_from_default(&self) -> bool {
        self.copied_from_default
    }

    fn validate(&mut self, policy: ValidationPolicy) -> Result<()> {
        ensure_writable(self.frozen, "el adjetivo", &self.name)?;
        if let Some(derived) = self
            .get_string(self.declension.default_adjective_form())
            .and_then(|v| self.declension.derive_starts_with(v))
        {
            self.starts_with = derived;
        }
        fill_from_neighbors(
            &mut self.values,
            self.declension.adjective_forms(),
            |f| self.declension.adjective_neighbors(f),
        );
        let fallback = self
            .get_string(self.declension.default_adjective_form())
            .map(str::to_string);
        for &form in self.declension.adjective_forms() {
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
        let mut doc = json!({
            "t": TermType::Adjective.char_id().to_string(),
            "l": self.name,
            "p": self.position.db_value(),
            "v": values_to_json(self.values.iter()),
        });
        if self.declension.has_starts_with() || self.declension.has_ends_with() {
            doc["s"] = json!(self.starts_with.db_value());
        }
        doc
    }
}

/// Copia en cada forma que falta el valor de su primera vecina definida.
///
/// Una sola vuelta: las vecinas difieren en un eje y solo cuentan los
/// valores que había al empezar, así que ninguna forma se rellena a más de
/// un eje de distancia. Lo que siga faltando se queda sin valor.
pub(crate) fn fill_from_neighbors<F: Copy + Ord + std::fmt::Display>(
    values: &mut BTreeMap<F, String>,
    forms: &[F],
    neighbors: impl Fn(F) -> Vec<F>,
) {
    let filled: Vec<(F, String)> = forms
        .iter()
        .filter(|form| !values.contains_key(form))
        .filter_map(|&form| {
            neighbors(form)
                .into_iter()
                .find_map(|n| values.get(&n).cloned())
                .map(|value| (form, value))
        })
        .collect();
    for (form, value) in filled {
        log::trace!("{} <- {}", form, value);
        values.insert(form, value);
    }
}
