//! Términos del diccionario: sustantivos, adjetivos y artículos
//!
//! Un término guarda una cadena por forma. Se carga y valida en una fase de
//! escritura; después se congela y cualquier escritura falla con
//! [`GrammarError::Frozen`].

pub mod adjective;
pub mod article;
pub mod noun;

pub use adjective::Adjective;
pub use article::Article;
pub use noun::Noun;

use std::fmt;
use std::sync::Arc;

use crate::config::ValidationPolicy;
use crate::declension::Declension;
use crate::error::{GrammarError, Result};
use crate::grammar::TermType;

/// Comportamiento común a los tres tipos de término
pub trait GrammaticalTerm {
    fn name(&self) -> &str;

    fn term_type(&self) -> TermType;

    fn declension(&self) -> &'static Declension;

    /// ¿Se copió del idioma por defecto al faltar la traducción?
    fn is_copied_from_default(&self) -> bool;

    /// Rellena las formas que faltan con la forma vecina más cercana
    fn validate(&mut self, policy: ValidationPolicy) -> Result<()>;

    fn freeze(&mut self);

    fn is_frozen(&self) -> bool;

    /// Documento JSON para el renderizador externo
    fn to_json(&self) -> serde_json::Value;
}

/// Término de cualquiera de los tres tipos
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Noun(Arc<Noun>),
    Adjective(Arc<Adjective>),
    Article(Arc<Article>),
}

impl Term {
    fn inner(&self) -> &dyn GrammaticalTerm {
        match self {
            Term::Noun(n) => n.as_ref(),
            Term::Adjective(a) => a.as_ref(),
            Term::Article(a) => a.as_ref(),
        }
    }

    pub fn name(&self) -> &str {
        self.inner().name()
    }

    pub fn term_type(&self) -> TermType {
        self.inner().term_type()
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.inner().to_json()
    }
}

pub(crate) fn ensure_writable(frozen: bool, kind: &str, name: &str) -> Result<()> {
    if frozen {
        Err(GrammarError::frozen(format!("{} '{}'", kind, name)))
    } else {
        Ok(())
    }
}

/// Forma que no se pudo rellenar: error en modo estricto, aviso en el laxo
pub(crate) fn report_unfilled(
    policy: ValidationPolicy,
    name: &str,
    form: impl fmt::Display,
) -> Result<()> {
    match policy {
        ValidationPolicy::Strict => Err(GrammarError::invalid_form(name, form)),
        ValidationPolicy::Lenient => {
            log::warn!("'{}' no tiene valor para la forma {}", name, form);
            Ok(())
        }
    }
}

/// Mapa de valores con las claves de forma como texto, ordenado
pub(crate) fn values_to_json<'a, F: fmt::Display + 'a>(
    values: impl Iterator<Item = (&'a F, &'a String)>,
) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = values
        .map(|(form, value)| (form.to_string(), serde_json::Value::String(value.clone())))
        .collect();
    serde_json::Value::Object(map)
}
