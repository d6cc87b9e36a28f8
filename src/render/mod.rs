//! Referencias a términos y renderizado de etiquetas
//!
//! El analizador de etiquetas produce un [`LabelValue`] con las referencias
//! ya agrupadas en frases. En cada petición se recorre contra un diccionario
//! congelado y las entidades dinámicas de la llamada.

pub mod attributes;
pub mod interner;
pub mod tags;

pub use attributes::TermAttributes;
pub use interner::Interner;
pub use tags::{
    CounterRefTag, GenderRefTag, LabelToken, LabelValue, ModifierForm, ModifierKind,
    ModifierRefTag, NounRefTag, PluralRefTag,
};

use crate::dictionary::{LanguageDictionary, Renameable};
use crate::error::Result;

/// Datos de una petición de renderizado
pub struct RenderContext<'a> {
    pub dictionary: &'a LanguageDictionary,
    /// Entidades dinámicas, por el índice de `entity="N"`
    pub entities: &'a [&'a dyn Renameable],
    /// Valores numéricos para `<plural val="N">`
    pub vals: &'a [f64],
    /// Recalcular las formas en la declinación del diccionario
    pub override_forms: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(dictionary: &'a LanguageDictionary) -> Self {
        Self {
            dictionary,
            entities: &[],
            vals: &[],
            override_forms: false,
        }
    }
}

/// Concatena el resultado de cada token
pub(crate) fn render_tokens(tokens: &[LabelToken], ctx: &RenderContext<'_>) -> Result<String> {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.render(tokens, ctx)?);
    }
    Ok(out)
}

/// Lista JSON de una etiqueta para el renderizador externo
pub fn label_to_json(dictionary: &LanguageDictionary, value: &LabelValue) -> serde_json::Value {
    value.to_json(&RenderContext::new(dictionary))
}
