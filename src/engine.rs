//! Motor principal: diccionario congelado, etiquetas y renderizado

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::declension::try_declension_for;
use crate::dictionary::{DefaultRenamingProvider, DictionaryLoader, LanguageDictionary};
use crate::error::Result;
use crate::labels::{LabelParser, LabelSet};
use crate::render::{label_to_json, LabelValue};

/// Motor de concordancia para un idioma
#[derive(Debug)]
pub struct Engine {
    dictionary: Arc<LanguageDictionary>,
    labels: Option<LabelSet>,
    plural: bool,
}

impl Engine {
    /// Carga, valida y congela el diccionario; después carga las etiquetas
    pub fn new(config: &Config) -> Result<Self> {
        if let Err(e) = try_declension_for(&config.language) {
            log::warn!("{}; se usa la declinación simple", e);
        }

        let mut dictionary =
            LanguageDictionary::new(&config.language).with_options(config.engine_options());
        if let Some(version) = config.label_version {
            dictionary = dictionary.with_renaming_provider(Arc::new(
                DefaultRenamingProvider::with_label_version(version),
            ));
        }

        if let Some(ref path) = config.dictionary_file {
            let count = DictionaryLoader::load_from_file(&mut dictionary, path)?;
            log::info!("{}: {} términos cargados de '{}'", dictionary.code(), count, path);
        }

        dictionary.validate(config.validation)?;
        dictionary.freeze();
        let dictionary = Arc::new(dictionary);

        let labels = match config.labels_file {
            Some(ref path) => {
                let mut labels = LabelSet::new(Arc::clone(&dictionary));
                let count = labels.load_from_file(path)?;
                log::info!("{} etiquetas cargadas de '{}'", count, path);
                Some(labels)
            }
            None => None,
        };

        Ok(Self {
            dictionary,
            labels,
            plural: config.plural,
        })
    }

    pub fn dictionary(&self) -> &LanguageDictionary {
        &self.dictionary
    }

    pub fn labels(&self) -> Option<&LabelSet> {
        self.labels.as_ref()
    }

    /// `sección.clave` de una etiqueta cargada, si `input` lo es
    fn label_reference<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let labels = self.labels.as_ref()?;
        if input.contains('<') {
            return None;
        }
        let (section, key) = input.trim().split_once('.')?;
        labels.contains(section, key).then_some((section, key))
    }

    /// Analiza una plantilla o resuelve una etiqueta cargada
    pub fn parse(&self, input: &str) -> Result<LabelValue> {
        if let (Some((section, key)), Some(labels)) = (self.label_reference(input), &self.labels) {
            return labels.resolve(section, key).cloned();
        }
        LabelParser::new(&self.dictionary)
            .with_plural(self.plural)
            .parse(input)
    }

    /// Texto final de una plantilla, sin entidades dinámicas
    pub fn render(&self, input: &str) -> Result<String> {
        let value = self.parse(input)?;
        self.dictionary.format(&value, &[], &[], false)
    }

    /// Lista JSON de una plantilla para el renderizador externo
    pub fn render_json(&self, input: &str) -> Result<Value> {
        let value = self.parse(input)?;
        Ok(label_to_json(&self.dictionary, &value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrammarError;

    #[test]
    fn test_engine_without_files() {
        let config = Config {
            language: "es".to_string(),
            ..Config::default()
        };
        let engine = Engine::new(&config).unwrap();
        assert!(engine.dictionary().is_frozen());
        assert!(engine.labels().is_none());
        assert_eq!(engine.render("Hola, mundo").unwrap(), "Hola, mundo");
    }

    #[test]
    fn test_missing_dictionary_file() {
        let config = Config {
            dictionary_file: Some("/no/existe/terms.txt".to_string()),
            ..Config::default()
        };
        assert!(matches!(Engine::new(&config), Err(GrammarError::Io(_))));
    }
}
