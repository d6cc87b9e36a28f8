//! Analizador de plantillas de etiqueta
//!
//! Clasifica cada etiqueta del tokenizador contra el diccionario y agrupa
//! las referencias en frases nominales.

use crate::dictionary::LanguageDictionary;
use crate::error::{GrammarError, Result};
use crate::grammar::{
    LanguageGender, LanguageNumber, PluralCategory, Token, TokenType, Tokenizer,
};
use crate::labels::phrase::assign_noun_phrases;
use crate::render::{
    CounterRefTag, GenderRefTag, LabelToken, LabelValue, ModifierKind, ModifierRefTag,
    NounRefTag, PluralRefTag, TermAttributes,
};
use crate::terms::GrammaticalTerm;

/// Nombre de la referencia a una entidad dinámica genérica
const ENTITY: &str = "entity";
const COUNTER: &str = "counter";
const DEFAULT_BRANCH: &str = "default";
/// Artículos que las etiquetas en inglés usan como término
const ARTICLE_NAMES: &[&str] = &["a", "an", "the"];

/// Analizador ligado a un diccionario
pub struct LabelParser<'a> {
    dictionary: &'a LanguageDictionary,
    tokenizer: Tokenizer,
    plural: bool,
}

impl<'a> LabelParser<'a> {
    pub fn new(dictionary: &'a LanguageDictionary) -> Self {
        Self {
            dictionary,
            tokenizer: Tokenizer::new(),
            plural: false,
        }
    }

    /// Los sustantivos sin atributo `plural` se piden en plural
    pub fn with_plural(mut self, plural: bool) -> Self {
        self.plural = plural;
        self
    }

    pub fn parse(&self, text: &str) -> Result<LabelValue> {
        self.parse_with_context(text, "etiqueta")
    }

    /// Analiza una plantilla; `context` identifica la etiqueta en los logs
    pub fn parse_with_context(&self, text: &str, context: &str) -> Result<LabelValue> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.build(text, &tokens, context)
    }

    fn build(&self, source: &str, tokens: &[Token], context: &str) -> Result<LabelValue> {
        let mut out: Vec<LabelToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(item) = self.classify(source, token, context)? {
                push_token(&mut out, item);
            }
        }
        Ok(LabelValue::new(assign_noun_phrases(
            self.dictionary,
            out,
            context,
        )))
    }

    fn classify(&self, source: &str, token: &Token, context: &str) -> Result<Option<LabelToken>> {
        let dict = self.dictionary;
        let decl = dict.declension();
        let line = line_of(source, token.start);
        let name = token.name();

        match token.token_type {
            TokenType::Text => return Ok(Some(LabelToken::Text(token.text.clone()))),
            TokenType::Choice if name == "plural" => {
                return self.plural_choice(source, token, context, line).map(Some)
            }
            TokenType::Choice => return self.gender_choice(source, token, context, line).map(Some),
            TokenType::Tag => {}
        }

        let attributes = TermAttributes::parse(&token.text, &token.attributes, line)?;
        let capital = token.is_capitalized();

        if name == ENTITY || token.attribute(ENTITY).is_some() {
            let index = match token.attribute(ENTITY) {
                Some(value) => value.trim().parse::<usize>().map_err(|_| {
                    GrammarError::parse(line, format!("índice de entidad no válido: '{}'", value))
                })?,
                None => 0,
            };
            return Ok(Some(self.noun_token(token, &name, attributes, false, Some(index))));
        }
        if dict.get_adjective(&name).is_some() {
            return Ok(Some(LabelToken::Modifier(ModifierRefTag::new(
                ModifierKind::Adjective,
                &name,
                capital,
                attributes,
            ))));
        }
        if dict.get_article(&name).is_some() {
            return Ok(Some(LabelToken::Modifier(ModifierRefTag::new(
                ModifierKind::Article,
                &name,
                capital,
                attributes,
            ))));
        }
        if !decl.has_article() && ARTICLE_NAMES.contains(&name.as_str()) {
            log::debug!("{}: <{}/> se omite en {}", context, name, decl.code());
            return Ok(None);
        }
        if name == COUNTER {
            return Ok(Some(LabelToken::Counter(CounterRefTag::default())));
        }
        if let Some(noun) = dict.get_noun_by_plural_alias(&name, false) {
            let noun_name = noun.name().to_string();
            return Ok(Some(self.noun_token(token, &noun_name, attributes, true, None)));
        }
        if dict.get_noun(&name, false).is_some() {
            return Ok(Some(self.noun_token(token, &name, attributes, false, None)));
        }

        if dict.options().strict_rendering {
            return Err(GrammarError::missing_term(&name));
        }
        log::warn!("{}: término desconocido <{}>; se deja como texto", context, token.text);
        let literal = source.get(token.start..token.end).unwrap_or(&token.text);
        Ok(Some(LabelToken::Text(literal.to_string())))
    }

    fn noun_token(
        &self,
        token: &Token,
        name: &str,
        attributes: TermAttributes,
        from_plural_alias: bool,
        entity: Option<usize>,
    ) -> LabelToken {
        let decl = self.dictionary.declension();
        let number = attributes.number.unwrap_or(if from_plural_alias || self.plural {
            LanguageNumber::Plural
        } else {
            LanguageNumber::Singular
        });
        let form = decl.approximate_noun_form(
            number,
            attributes.case.unwrap_or_else(|| decl.default_case()),
            attributes.possessive.unwrap_or_else(|| decl.default_possessive()),
            attributes.article.unwrap_or_else(|| decl.default_article()),
        );
        let escape_html = self.dictionary.options().escape_html
            || token
                .attribute("escapehtml")
                .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "y" | "yes" | "true"));
        LabelToken::Noun(NounRefTag::new(
            name,
            form,
            token.is_capitalized(),
            escape_html,
            entity,
        ))
    }

    fn plural_choice(
        &self,
        source: &str,
        token: &Token,
        context: &str,
        line: usize,
    ) -> Result<LabelToken> {
        let index = token
            .attribute("val")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .ok_or_else(|| GrammarError::parse(line, "<plural> necesita val=\"N\""))?;
        let mut branches = Vec::new();
        let mut default = None;
        for (branch, content) in &token.branches {
            let value = self.build(source, content, context)?;
            if branch == DEFAULT_BRANCH {
                default = Some(value);
                continue;
            }
            let category = PluralCategory::from_str(branch).ok_or_else(|| {
                GrammarError::parse(line, format!("categoría plural desconocida: <{}>", branch))
            })?;
            branches.push((category, value));
        }
        // Sin rama por defecto se usa `other`, como en las reglas CLDR
        let default = default
            .or_else(|| {
                branches
                    .iter()
                    .find(|(c, _)| *c == PluralCategory::Other)
                    .map(|(_, v)| v.clone())
            })
            .unwrap_or_default();
        Ok(LabelToken::Plural(PluralRefTag {
            index,
            branches,
            default,
        }))
    }

    fn gender_choice(
        &self,
        source: &str,
        token: &Token,
        context: &str,
        line: usize,
    ) -> Result<LabelToken> {
        let mut branches = Vec::new();
        let mut default = LabelValue::default();
        for (branch, content) in &token.branches {
            let value = self.build(source, content, context)?;
            if branch == DEFAULT_BRANCH {
                default = value;
                continue;
            }
            let gender = LanguageGender::from_label_value(branch).ok_or_else(|| {
                GrammarError::parse(line, format!("género desconocido: <{}>", branch))
            })?;
            branches.push((gender, value));
        }
        Ok(LabelToken::Gender(GenderRefTag {
            noun: None,
            branches,
            default,
        }))
    }
}

/// Une el texto contiguo que deja una etiqueta omitida
fn push_token(out: &mut Vec<LabelToken>, item: LabelToken) {
    if let (Some(LabelToken::Text(last)), LabelToken::Text(text)) = (out.last_mut(), &item) {
        last.push_str(text);
        return;
    }
    out.push(item);
}

fn line_of(source: &str, offset: usize) -> usize {
    source
        .get(..offset)
        .map(|s| s.matches('\n').count() + 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineOptions;
    use crate::grammar::{LanguagePosition, LanguageStartsWith, NounType};

    fn english() -> LanguageDictionary {
        let mut dict = LanguageDictionary::new("en");
        let decl = dict.declension();
        let mut account = dict
            .create_noun(
                "account",
                NounType::Entity,
                Some("Account"),
                LanguageGender::Neuter,
                LanguageStartsWith::Vowel,
            )
            .with_plural_alias("accounts");
        account
            .set_string(decl.noun_form(LanguageNumber::Singular, decl.default_article()), "Account")
            .unwrap();
        account
            .set_string(decl.noun_form(LanguageNumber::Plural, decl.default_article()), "Accounts")
            .unwrap();
        dict.put_noun(account).unwrap();
        let mut new = dict.create_adjective("new", LanguageStartsWith::Consonant, LanguagePosition::Pre);
        new.set_string(decl.default_adjective_form(), "New").unwrap();
        dict.put_adjective(new).unwrap();
        dict
    }

    #[test]
    fn test_classification() {
        let dict = english();
        let value = LabelParser::new(&dict).parse("<New/> <Accounts/> en <b>total</b>").unwrap();
        let tokens = value.tokens();
        assert_eq!(tokens.len(), 4);
        let adjective = tokens[0].as_modifier().unwrap();
        assert_eq!(adjective.kind(), ModifierKind::Adjective);
        assert_eq!(adjective.noun_index(), Some(2));
        let noun = tokens[2].as_noun().unwrap();
        assert_eq!(noun.name(), "account");
        assert!(noun.form().number().is_plural());
        assert_eq!(tokens[3], LabelToken::Text(" en <b>total</b>".to_string()));
    }

    #[test]
    fn test_unknown_tag_lenient_and_strict() {
        let dict = english();
        let value = LabelParser::new(&dict).parse("Ver <Widget plural=\"y\"/>").unwrap();
        assert_eq!(
            value.tokens(),
            &[LabelToken::Text("Ver <Widget plural=\"y\"/>".to_string())]
        );

        let strict = english().with_options(EngineOptions {
            strict_rendering: true,
            ..Default::default()
        });
        let err = LabelParser::new(&strict).parse("Ver <Widget/>").unwrap_err();
        assert!(matches!(err, GrammarError::MissingTerm { .. }));
    }

    #[test]
    fn test_entity_reference() {
        let dict = english();
        let value = LabelParser::new(&dict).parse("<Entity entity=\"1\"/>").unwrap();
        let noun = value.tokens()[0].as_noun().unwrap();
        assert_eq!(noun.entity(), Some(1));
        assert_eq!(noun.name(), ENTITY);
    }

    #[test]
    fn test_plural_default_flag() {
        let dict = english();
        let value = LabelParser::new(&dict).with_plural(true).parse("<account/>").unwrap();
        assert!(value.tokens()[0].as_noun().unwrap().form().number().is_plural());
        let value = LabelParser::new(&dict)
            .with_plural(true)
            .parse("<account plural=\"n\"/>")
            .unwrap();
        assert!(!value.tokens()[0].as_noun().unwrap().form().number().is_plural());
    }

    #[test]
    fn test_articles_dropped_without_article_support() {
        let dict = LanguageDictionary::new("ru");
        let value = LabelParser::new(&dict).parse("x <the/> y").unwrap();
        assert_eq!(value.tokens(), &[LabelToken::Text("x  y".to_string())]);
    }

    #[test]
    fn test_plural_choice_requires_index() {
        let dict = english();
        let err = LabelParser::new(&dict)
            .parse("<plural><one>uno</one></plural>")
            .unwrap_err();
        assert!(matches!(err, GrammarError::Parse { line: 1, .. }));

        let value = LabelParser::new(&dict)
            .parse("<plural val=\"0\"><one>uno</one><other>varios</other></plural>")
            .unwrap();
        match &value.tokens()[0] {
            LabelToken::Plural(tag) => {
                assert_eq!(tag.branches.len(), 2);
                assert_eq!(tag.default.tokens(), &[LabelToken::Text("varios".to_string())]);
            }
            other => panic!("se esperaba <plural>, no {:?}", other),
        }
    }
}
