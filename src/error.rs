//! Errores del motor de concordancia

use thiserror::Error;

/// Error de la biblioteca.
///
/// La carga y la validación pueden ser estrictas; el renderizado degrada a
/// una cadena visible siempre que la configuración no pida lo contrario.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// Forma pedida que no existe en la declinación o que no se pudo rellenar
    #[error("forma inválida {form} para '{term}'")]
    InvalidForm { term: String, form: String },

    /// Término referenciado que no está en el diccionario
    #[error("término desconocido: '{name}'")]
    MissingTerm { name: String },

    /// Cadena de alias de etiquetas que vuelve sobre sí misma
    #[error("alias circular: {}", chain.join(" -> "))]
    CircularAlias { chain: Vec<String> },

    /// Atributo de categoría repetido en una misma etiqueta
    #[error("atributo '{attribute}' repetido en <{tag}>")]
    DuplicateCategory { tag: String, attribute: String },

    /// Escritura después de congelar el diccionario o el término
    #[error("{what} está congelado y no admite cambios")]
    Frozen { what: String },

    #[error("idioma no soportado: {code}")]
    UnsupportedLanguage { code: String },

    #[error("línea {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrammarError>;

impl GrammarError {
    pub(crate) fn invalid_form(term: &str, form: impl std::fmt::Display) -> Self {
        GrammarError::InvalidForm {
            term: term.to_string(),
            form: form.to_string(),
        }
    }

    pub(crate) fn missing_term(name: &str) -> Self {
        GrammarError::MissingTerm {
            name: name.to_string(),
        }
    }

    pub(crate) fn frozen(what: impl Into<String>) -> Self {
        GrammarError::Frozen { what: what.into() }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GrammarError::Parse {
            line,
            message: message.into(),
        }
    }
}
