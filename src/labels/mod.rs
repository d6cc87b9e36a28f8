//! Conjunto de etiquetas por sección y clave
//!
//! Formato de archivo, separado por `|`:
//!
//! ```text
//! label|sección|clave|plantilla
//! alias|sección|clave|secciónDestino|claveDestino
//! ```

pub mod parser;
pub mod phrase;

pub use parser::LabelParser;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::dictionary::{LanguageDictionary, Renameable};
use crate::error::{GrammarError, Result};
use crate::render::{label_to_json, LabelValue};

/// Entrada de una etiqueta: valor analizado o alias de otra
#[derive(Debug, Clone, PartialEq)]
enum LabelEntry {
    Value(LabelValue),
    Alias { section: String, key: String },
}

/// Etiquetas de un idioma sobre un diccionario congelado
#[derive(Debug)]
pub struct LabelSet {
    dictionary: Arc<LanguageDictionary>,
    labels: HashMap<(String, String), LabelEntry>,
}

fn label_key(section: &str, key: &str) -> (String, String) {
    (section.trim().to_lowercase(), key.trim().to_lowercase())
}

impl LabelSet {
    pub fn new(dictionary: Arc<LanguageDictionary>) -> Self {
        Self {
            dictionary,
            labels: HashMap::new(),
        }
    }

    pub fn dictionary(&self) -> &LanguageDictionary {
        &self.dictionary
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.labels.contains_key(&label_key(section, key))
    }

    /// Analiza y guarda una plantilla
    pub fn put(&mut self, section: &str, key: &str, template: &str) -> Result<()> {
        let context = format!("{}.{}", section, key);
        let value = LabelParser::new(&self.dictionary).parse_with_context(template, &context)?;
        self.put_value(section, key, value);
        Ok(())
    }

    pub fn put_value(&mut self, section: &str, key: &str, value: LabelValue) {
        self.labels
            .insert(label_key(section, key), LabelEntry::Value(value));
    }

    pub fn put_alias(&mut self, section: &str, key: &str, target_section: &str, target_key: &str) {
        let (section_t, key_t) = label_key(target_section, target_key);
        self.labels.insert(
            label_key(section, key),
            LabelEntry::Alias {
                section: section_t,
                key: key_t,
            },
        );
    }

    /// Valor de una etiqueta siguiendo los alias
    pub fn resolve(&self, section: &str, key: &str) -> Result<&LabelValue> {
        let mut current = label_key(section, key);
        let mut chain: Vec<String> = Vec::new();
        loop {
            let name = format!("{}.{}", current.0, current.1);
            if chain.contains(&name) {
                chain.push(name);
                return Err(GrammarError::CircularAlias { chain });
            }
            chain.push(name);
            match self.labels.get(&current) {
                None => {
                    return Err(GrammarError::missing_term(chain.last().map(String::as_str).unwrap_or("")))
                }
                Some(LabelEntry::Value(value)) => return Ok(value),
                Some(LabelEntry::Alias { section, key }) => {
                    current = (section.clone(), key.clone());
                }
            }
        }
    }

    /// Renderiza una etiqueta
    pub fn get(
        &self,
        section: &str,
        key: &str,
        entities: &[&dyn Renameable],
        vals: &[f64],
    ) -> Result<String> {
        let value = self.resolve(section, key)?;
        self.dictionary.format(value, entities, vals, false)
    }

    /// Lista JSON de una etiqueta para el renderizador externo
    pub fn get_json(&self, section: &str, key: &str) -> Result<serde_json::Value> {
        let value = self.resolve(section, key)?;
        Ok(label_to_json(&self.dictionary, value))
    }

    /// Carga un archivo de etiquetas; devuelve cuántas entradas se leyeron
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = fs::read_to_string(path.as_ref())?;
        self.load_from_str(&content)
    }

    pub fn load_from_str(&mut self, content: &str) -> Result<usize> {
        let mut count = 0;
        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();

            // Ignorar líneas vacías y comentarios
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(4, '|').collect();
            match parts.as_slice() {
                ["label", section, key, template] => {
                    self.put(section, key, template).map_err(|e| match e {
                        GrammarError::Parse { line, message } => {
                            GrammarError::parse(line_num + line - 1, message)
                        }
                        other => other,
                    })?;
                }
                ["alias", section, key, target] => {
                    let (target_section, target_key) = target.split_once('|').ok_or_else(|| {
                        GrammarError::parse(line_num, "alias sin clave de destino")
                    })?;
                    self.put_alias(section, key, target_section, target_key);
                }
                _ => {
                    return Err(GrammarError::parse(
                        line_num,
                        format!("línea de etiqueta no válida: '{}'", line),
                    ))
                }
            }
            count += 1;
        }
        log::debug!("{}: cargadas {} etiquetas", self.dictionary.code(), count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> LabelSet {
        let mut dict = LanguageDictionary::new("en");
        dict.freeze();
        LabelSet::new(Arc::new(dict))
    }

    #[test]
    fn test_alias_resolution() {
        let mut labels = set();
        labels
            .load_from_str("label|Page|Title|Hola\nalias|Page|Header|page|title\n")
            .unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("page", "header", &[], &[]).unwrap(), "Hola");
    }

    #[test]
    fn test_circular_alias() {
        let mut labels = set();
        labels.put_alias("a", "x", "a", "y");
        labels.put_alias("a", "y", "a", "x");
        match labels.resolve("a", "x").unwrap_err() {
            GrammarError::CircularAlias { chain } => {
                assert_eq!(chain, vec!["a.x", "a.y", "a.x"]);
            }
            other => panic!("se esperaba un alias circular, no {:?}", other),
        }
    }

    #[test]
    fn test_missing_label() {
        let labels = set();
        assert!(matches!(
            labels.resolve("page", "none"),
            Err(GrammarError::MissingTerm { .. })
        ));
    }

    #[test]
    fn test_bad_line() {
        let mut labels = set();
        let err = labels.load_from_str("# comentario\nlabel|solo").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 2, .. }));
    }
}
