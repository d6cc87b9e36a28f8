//! Exportación JSON para el renderizador externo

use serde_json::{Map, Value};

use crate::terms::GrammaticalTerm;

fn by_name<'a>(terms: impl Iterator<Item = &'a dyn GrammaticalTerm>) -> Value {
    let map: Map<String, Value> = terms
        .map(|term| (term.name().to_string(), term.to_json()))
        .collect();
    Value::Object(map)
}

/// Documento con todos los términos, agrupados por tipo y ordenados por nombre
pub fn terms_to_json<'a>(
    nouns: impl Iterator<Item = &'a dyn GrammaticalTerm>,
    adjectives: impl Iterator<Item = &'a dyn GrammaticalTerm>,
    articles: impl Iterator<Item = &'a dyn GrammaticalTerm>,
) -> Value {
    serde_json::json!({
        "n": by_name(nouns),
        "a": by_name(adjectives),
        "d": by_name(articles),
    })
}

/// Serializa un documento en una línea o con sangría
pub fn to_string(value: &Value, pretty: bool) -> crate::error::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::LanguageDictionary;
    use crate::grammar::{LanguagePosition, LanguageStartsWith};

    #[test]
    fn test_terms_document_is_sorted() {
        let mut dict = LanguageDictionary::new("en");
        let decl = dict.declension();
        for name in ["zeta", "alpha"] {
            let mut adj = dict.create_adjective(name, LanguageStartsWith::Consonant, LanguagePosition::Pre);
            adj.set_string(decl.default_adjective_form(), name).unwrap();
            dict.put_adjective(adj).unwrap();
        }
        let doc = dict.terms_to_json();
        let names: Vec<&String> = doc["a"].as_object().unwrap().keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(doc["n"].as_object().unwrap().is_empty());

        let text = to_string(&doc, false).unwrap();
        assert!(text.starts_with("{\"a\":{\"alpha\""));
    }
}
