//! Puntos de extensión para entidades renombrables
//!
//! El motor consulta estos traits pero no los implementa: la aplicación que
//! lo usa sabe qué objetos ha renombrado el usuario y con qué etiqueta.

use std::fmt;
use std::sync::Arc;

use crate::terms::Noun;

/// Proveedor de sustantivos renombrados y de la versión de etiquetas
pub trait RenamingProvider: Send + Sync + fmt::Debug {
    /// ¿Se deben consultar los sustantivos renombrados?
    fn use_renamed_nouns(&self) -> bool {
        false
    }

    /// Sustantivo renombrado por el usuario para `key`
    fn renamed_noun(&self, _language: &str, _key: &str) -> Option<Arc<Noun>> {
        None
    }

    /// Sustantivo original empaquetado para `key`
    fn packaged_noun(&self, _language: &str, _key: &str) -> Option<Arc<Noun>> {
        None
    }

    /// Versión de etiquetas en curso, para las sustituciones por versión
    fn label_version(&self) -> Option<f64> {
        None
    }
}

/// Proveedor sin renombrados; opcionalmente fija una versión de etiquetas
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenamingProvider {
    label_version: Option<f64>,
}

impl DefaultRenamingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_version(version: f64) -> Self {
        Self {
            label_version: Some(version),
        }
    }
}

impl RenamingProvider for DefaultRenamingProvider {
    fn label_version(&self) -> Option<f64> {
        self.label_version
    }
}

/// Objeto externo cuyo nombre visible puede cambiar el usuario
pub trait Renameable {
    /// Identificador estable del objeto
    fn name(&self) -> &str;

    /// Etiqueta en singular
    fn label(&self) -> &str;

    fn label_plural(&self) -> &str;

    /// `false` para objetos creados por el usuario
    fn has_standard_label(&self) -> bool;

    /// Clave con la que se busca el sustantivo de este objeto: para la clave
    /// genérica "entity" de un objeto "account" devuelve "account"
    fn entity_specific_key(&self, label_key: &str) -> String {
        if label_key.eq_ignore_ascii_case("entity") {
            self.name().to_lowercase()
        } else {
            label_key.to_lowercase()
        }
    }

    /// Etiqueta de un campo estándar del objeto, si `label_key` es uno
    fn standard_field_label(&self, _language: &str, _label_key: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Custom;

    impl Renameable for Custom {
        fn name(&self) -> &str {
            "Invoice__c"
        }

        fn label(&self) -> &str {
            "Invoice"
        }

        fn label_plural(&self) -> &str {
            "Invoices"
        }

        fn has_standard_label(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_default_provider_returns_nothing() {
        let provider = DefaultRenamingProvider::new();
        assert!(!provider.use_renamed_nouns());
        assert!(provider.renamed_noun("fr", "account").is_none());
        assert!(provider.packaged_noun("fr", "account").is_none());
        assert_eq!(provider.label_version(), None);
        assert_eq!(
            DefaultRenamingProvider::with_label_version(150.0).label_version(),
            Some(150.0)
        );
    }

    #[test]
    fn test_entity_specific_key() {
        assert_eq!(Custom.entity_specific_key("Entity"), "invoice__c");
        assert_eq!(Custom.entity_specific_key("Record"), "record");
        assert_eq!(Custom.standard_field_label("fr", "name"), None);
    }
}
