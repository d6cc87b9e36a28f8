//! Concordancia - Motor de concordancia gramatical multilingüe
//!
//! Renderiza etiquetas de interfaz que hacen referencia a sustantivos y a sus
//! modificadores (artículos, adjetivos, clasificadores, elecciones por género
//! o por número), de modo que concuerden en género, número y caso con un
//! sustantivo que el usuario puede haber renombrado.

pub mod config;
pub mod declension;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod json;
pub mod labels;
pub mod languages;
pub mod render;
pub mod terms;

pub use config::{Config, EngineOptions, ValidationPolicy};
pub use declension::{declension_for, try_declension_for, Declension};
pub use dictionary::{
    DefaultRenamingProvider, DictionaryLoader, LanguageDictionary, Renameable, RenamingProvider,
};
pub use engine::Engine;
pub use error::{GrammarError, Result};
pub use labels::{LabelParser, LabelSet};
pub use render::{LabelToken, LabelValue};
pub use terms::{Adjective, Article, GrammaticalTerm, Noun, Term};
