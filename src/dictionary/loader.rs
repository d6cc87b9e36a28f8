//! Cargador de diccionarios de términos desde archivos
//!
//! Formato por líneas, separado por `|`:
//!
//! ```text
//! noun|nombre|género|inicial|tipo|aliasPlural|entidad|clasificador
//! value|atributos|texto
//! version|desde
//! adjective|nombre|inicial|posición
//! article|nombre|tipo
//! ```
//!
//! Las líneas `value` se aplican al último término declarado; tras una
//! línea `version` se aplican a la sustitución de esa versión. Los
//! atributos usan los nombres de las plantillas (`plural="y" case="g"`).

use std::fs;
use std::path::Path;

use super::LanguageDictionary;
use crate::error::{GrammarError, Result};
use crate::grammar::{
    LanguageArticle, LanguageGender, LanguageNumber, LanguagePosition, LanguageStartsWith,
    NounType,
};
use crate::render::TermAttributes;
use crate::terms::{Adjective, Article, GrammaticalTerm, Noun};

/// Término en construcción, pendiente de guardar
enum Pending {
    Noun(Noun),
    Version { at_least: f64, noun: Noun },
    Adjective(Adjective),
    Article(Article),
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Carga un archivo de términos en el diccionario
    pub fn load_from_file<P: AsRef<Path>>(dict: &mut LanguageDictionary, path: P) -> Result<usize> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::load_from_str(dict, &content)
    }

    /// Carga términos desde texto; devuelve cuántos se guardaron
    pub fn load_from_str(dict: &mut LanguageDictionary, content: &str) -> Result<usize> {
        let mut pending: Option<Pending> = None;
        // Último sustantivo base, para clonar sus versiones
        let mut last_noun: Option<Noun> = None;
        let mut count = 0;

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();

            // Ignorar líneas vacías y comentarios
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            let field = |i: usize| parts.get(i).copied().unwrap_or("");

            match parts[0].to_lowercase().as_str() {
                "noun" => {
                    count += flush(dict, pending.take(), &mut last_noun)?;
                    pending = Some(Pending::Noun(parse_noun(dict, &parts, line_num)?));
                }
                "adjective" => {
                    count += flush(dict, pending.take(), &mut last_noun)?;
                    let decl = dict.declension();
                    let name = required(field(1), "adjective", line_num)?;
                    let starts_with = optional(field(2), LanguageStartsWith::from_label_value, line_num)?
                        .unwrap_or_else(|| decl.default_starts_with());
                    let position = optional(field(3), LanguagePosition::from_label_value, line_num)?
                        .unwrap_or_else(|| decl.default_adjective_position());
                    pending = Some(Pending::Adjective(dict.create_adjective(
                        name,
                        starts_with,
                        position,
                    )));
                }
                "article" => {
                    count += flush(dict, pending.take(), &mut last_noun)?;
                    let name = required(field(1), "article", line_num)?;
                    let article_type = optional(field(2), LanguageArticle::from_label_value, line_num)?
                        .unwrap_or(LanguageArticle::Definite);
                    let article = dict
                        .create_article(name, article_type)
                        .map_err(|e| GrammarError::parse(line_num, e.to_string()))?;
                    pending = Some(Pending::Article(article));
                }
                "version" => {
                    count += flush(dict, pending.take(), &mut last_noun)?;
                    let at_least: f64 = field(1).parse().map_err(|_| {
                        GrammarError::parse(line_num, format!("versión no válida: '{}'", field(1)))
                    })?;
                    let base = last_noun.as_ref().ok_or_else(|| {
                        GrammarError::parse(line_num, "'version' sin sustantivo previo")
                    })?;
                    pending = Some(Pending::Version {
                        at_least,
                        noun: base.clone_with(None, None, Vec::new()),
                    });
                }
                "value" => {
                    let attributes = TermAttributes::parse(
                        "value",
                        &split_attributes(field(1), line_num)?,
                        line_num,
                    )?;
                    let text = parts.get(2..).map(|p| p.join("|")).unwrap_or_default();
                    match pending.as_mut() {
                        Some(Pending::Noun(noun)) | Some(Pending::Version { noun, .. }) => {
                            set_noun_value(dict, noun, &attributes, &text, line_num)?
                        }
                        Some(Pending::Adjective(adjective)) => {
                            set_adjective_value(dict, adjective, &attributes, &text, line_num)?
                        }
                        Some(Pending::Article(article)) => {
                            set_article_value(dict, article, &attributes, &text, line_num)?
                        }
                        None => {
                            return Err(GrammarError::parse(line_num, "'value' sin término previo"))
                        }
                    }
                }
                other => {
                    return Err(GrammarError::parse(
                        line_num,
                        format!("tipo de línea desconocido: '{}'", other),
                    ))
                }
            }
        }

        count += flush(dict, pending, &mut last_noun)?;
        log::debug!("{}: cargados {} términos", dict.code(), count);
        Ok(count)
    }
}

fn flush(
    dict: &mut LanguageDictionary,
    pending: Option<Pending>,
    last_noun: &mut Option<Noun>,
) -> Result<usize> {
    match pending {
        None => return Ok(0),
        Some(Pending::Noun(noun)) => {
            *last_noun = Some(noun.clone());
            dict.put_noun(noun)?;
        }
        Some(Pending::Version { at_least, noun }) => {
            let name = noun.name().to_string();
            dict.set_noun_override(&name, noun, at_least)?;
            return Ok(0);
        }
        Some(Pending::Adjective(adjective)) => dict.put_adjective(adjective)?,
        Some(Pending::Article(article)) => dict.put_article(article)?,
    }
    Ok(1)
}

fn parse_noun(dict: &LanguageDictionary, parts: &[&str], line_num: usize) -> Result<Noun> {
    let field = |i: usize| parts.get(i).copied().unwrap_or("");
    let decl = dict.declension();
    let name = required(field(1), "noun", line_num)?;
    let gender = optional(field(2), LanguageGender::from_label_value, line_num)?
        .unwrap_or_else(|| decl.default_gender());
    let starts_with = optional(field(3), LanguageStartsWith::from_label_value, line_num)?
        .unwrap_or_else(|| decl.default_starts_with());
    let noun_type = NounType::from_str(field(4));
    let entity = Some(field(6)).filter(|e| !e.is_empty());

    let mut noun = dict.create_noun(name, noun_type, entity, gender, starts_with);
    if !field(5).is_empty() {
        noun = noun.with_plural_alias(field(5));
    }
    if !field(7).is_empty() {
        noun = noun.with_classifier(field(7));
    }
    Ok(noun)
}

fn required<'a>(value: &'a str, kind: &str, line_num: usize) -> Result<&'a str> {
    if value.is_empty() {
        Err(GrammarError::parse(line_num, format!("'{}' sin nombre", kind)))
    } else {
        Ok(value)
    }
}

/// Campo opcional: vacío es `None`, un valor no reconocido es error
fn optional<T>(value: &str, parse: impl Fn(&str) -> Option<T>, line_num: usize) -> Result<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value)
        .map(Some)
        .ok_or_else(|| GrammarError::parse(line_num, format!("valor no reconocido: '{}'", value)))
}

/// Pares `clave=valor` separados por espacios o comas
fn split_attributes(text: &str, line_num: usize) -> Result<Vec<(String, String)>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                GrammarError::parse(line_num, format!("atributo sin valor: '{}'", pair))
            })?;
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            Ok((key.trim().to_lowercase(), value.to_string()))
        })
        .collect()
}

fn missing_form(dict: &LanguageDictionary, name: &str, line_num: usize) -> GrammarError {
    GrammarError::parse(
        line_num,
        format!("forma no válida en '{}' para el idioma {}", name, dict.code()),
    )
}

fn set_noun_value(
    dict: &LanguageDictionary,
    noun: &mut Noun,
    attrs: &TermAttributes,
    text: &str,
    line_num: usize,
) -> Result<()> {
    let decl = dict.declension();
    let form = decl
        .exact_noun_form(
            attrs.number.unwrap_or(LanguageNumber::Singular),
            attrs.case.unwrap_or_else(|| decl.default_case()),
            attrs.possessive.unwrap_or_else(|| decl.default_possessive()),
            attrs.article.unwrap_or_else(|| decl.default_article()),
        )
        .ok_or_else(|| missing_form(dict, noun.name(), line_num))?;
    noun.set_string(form, text)
}

fn set_adjective_value(
    dict: &LanguageDictionary,
    adjective: &mut Adjective,
    attrs: &TermAttributes,
    text: &str,
    line_num: usize,
) -> Result<()> {
    let decl = dict.declension();
    let default = decl.default_adjective_form();
    let form = decl
        .exact_adjective_form(
            attrs.starts_with.unwrap_or(default.starts_with()),
            attrs.gender.unwrap_or(default.gender()),
            attrs.number.unwrap_or(default.number()),
            attrs.case.unwrap_or(default.case()),
            attrs.article.unwrap_or(default.article()),
            attrs.possessive.unwrap_or(default.possessive()),
        )
        .ok_or_else(|| missing_form(dict, adjective.name(), line_num))?;
    adjective.set_string(form, text)
}

fn set_article_value(
    dict: &LanguageDictionary,
    article: &mut Article,
    attrs: &TermAttributes,
    text: &str,
    line_num: usize,
) -> Result<()> {
    let decl = dict.declension();
    let default = decl
        .default_article_form()
        .ok_or_else(|| missing_form(dict, article.name(), line_num))?;
    let form = decl
        .exact_article_form(
            attrs.starts_with.unwrap_or(default.starts_with()),
            attrs.gender.unwrap_or(default.gender()),
            attrs.number.unwrap_or(default.number()),
            attrs.case.unwrap_or(default.case()),
        )
        .ok_or_else(|| missing_form(dict, article.name(), line_num))?;
    article.set_string(form, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DefaultRenamingProvider;
    use crate::grammar::{LanguageCase, LanguagePossessive};
    use std::sync::Arc;

    const GERMAN: &str = "\
# Sustantivos
noun|account|m|c|entity|accounts|Account
value||Account
value|plural=y|Accounts
value|case=d plural=y|Accounts

adjective|new|c|b
value|gender=m|neuer
value|gender=n|neues
";

    #[test]
    fn test_load_german_terms() {
        let mut dict = LanguageDictionary::new("de");
        let count = DictionaryLoader::load_from_str(&mut dict, GERMAN).unwrap();
        assert_eq!(count, 2);

        let account = dict.get_noun("account", false).unwrap();
        assert_eq!(account.gender(), LanguageGender::Masculine);
        assert_eq!(account.noun_type(), NounType::Entity);
        assert_eq!(account.entity(), Some("Account"));
        let decl = dict.declension();
        let dative = decl
            .exact_noun_form(
                LanguageNumber::Plural,
                LanguageCase::Dative,
                LanguagePossessive::None,
                LanguageArticle::Zero,
            )
            .unwrap();
        assert_eq!(account.get_string(dative), Some("Accounts"));
        assert!(dict.get_noun_by_plural_alias("accounts", false).is_some());

        let new = dict.get_adjective("new").unwrap();
        assert_eq!(new.position(), LanguagePosition::Pre);
        assert_eq!(new.values().count(), 2);
    }

    #[test]
    fn test_versions() {
        let text = "\
noun|account|m|c|entity
value||compte
version|200
value||client
";
        let mut dict = LanguageDictionary::new("fr")
            .with_renaming_provider(Arc::new(DefaultRenamingProvider::with_label_version(210.0)));
        assert_eq!(DictionaryLoader::load_from_str(&mut dict, text).unwrap(), 1);
        let noun = dict.get_noun("account", false).unwrap();
        assert_eq!(noun.get_default_string(false), Some("client"));
    }

    #[test]
    fn test_errors_carry_line_number() {
        let mut dict = LanguageDictionary::new("en");
        let err = DictionaryLoader::load_from_str(&mut dict, "noun|x\nvalue|case=g|x's").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 2, .. }));

        let err = DictionaryLoader::load_from_str(&mut dict, "\n\nvalue||x").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 3, .. }));

        let err = DictionaryLoader::load_from_str(&mut dict, "verb|run").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_article_requires_articles() {
        let mut dict = LanguageDictionary::new("ru");
        let err = DictionaryLoader::load_from_str(&mut dict, "article|the|d").unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 1, .. }));

        let mut dict = LanguageDictionary::new("en");
        let text = "article|a|i\nvalue||a\nvalue|startsWith=v|an";
        assert_eq!(DictionaryLoader::load_from_str(&mut dict, text).unwrap(), 1);
        assert_eq!(dict.get_article("a").unwrap().article_type(), LanguageArticle::Indefinite);
    }

    #[test]
    fn test_missing_file() {
        let mut dict = LanguageDictionary::new("en");
        let err = DictionaryLoader::load_from_file(&mut dict, "/no/existe/terms.txt").unwrap_err();
        assert!(matches!(err, GrammarError::Io(_)));
    }
}
