//! Referencias a términos dentro de una etiqueta analizada
//!
//! Las referencias de modificador apuntan a su sustantivo y al término
//! contiguo por posición dentro de la misma lista de tokens, de modo que una
//! etiqueta es un grafo de índices sin punteros entre tokens.

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use serde_json::{json, Value};

use super::{render_tokens, Interner, RenderContext, TermAttributes};
use crate::declension::Declension;
use crate::error::{GrammarError, Result};
use crate::grammar::{
    AdjectiveForm, ArticleForm, LanguageArticle, LanguageGender, NounForm, PluralCategory,
    TermType,
};
use crate::terms::Noun;

fn noun_refs() -> &'static Interner<NounRefTag> {
    static POOL: OnceLock<Interner<NounRefTag>> = OnceLock::new();
    POOL.get_or_init(Interner::new)
}

fn modifier_refs() -> &'static Interner<ModifierRefTag> {
    static POOL: OnceLock<Interner<ModifierRefTag>> = OnceLock::new();
    POOL.get_or_init(Interner::new)
}

/// Referencia a un sustantivo en una forma concreta
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NounRefTag {
    name: String,
    form: NounForm,
    capital: bool,
    escape_html: bool,
    /// Índice de la entidad dinámica que aporta la etiqueta
    entity: Option<usize>,
}

impl NounRefTag {
    pub fn new(
        name: &str,
        form: NounForm,
        capital: bool,
        escape_html: bool,
        entity: Option<usize>,
    ) -> Arc<Self> {
        noun_refs().unique(Self {
            name: name.to_lowercase(),
            form,
            capital,
            escape_html,
            entity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn form(&self) -> NounForm {
        self.form
    }

    pub fn is_capital(&self) -> bool {
        self.capital
    }

    pub fn escape_html(&self) -> bool {
        self.escape_html
    }

    pub fn entity(&self) -> Option<usize> {
        self.entity
    }

    pub fn is_dynamic(&self) -> bool {
        self.entity.is_some()
    }

    /// Forma a usar; con `override_forms` se recalcula en la declinación del
    /// diccionario, por si la etiqueta se analizó con otro idioma
    pub fn form_in(&self, declension: &Declension, override_forms: bool) -> NounForm {
        if !override_forms {
            return self.form;
        }
        declension.approximate_noun_form(
            self.form.number(),
            self.form.case(),
            self.form.possessive(),
            self.form.article(),
        )
    }

    /// Conserva el número y quita caso, artículo y posesivo
    pub fn make_uninflected(&self, declension: &Declension) -> Arc<Self> {
        let form = declension.noun_form(self.form.number(), LanguageArticle::Zero);
        Self::new(&self.name, form, self.capital, self.escape_html, self.entity)
    }

    pub fn make_articled(&self, declension: &Declension, article: LanguageArticle) -> Arc<Self> {
        let form = declension.approximate_noun_form(
            self.form.number(),
            self.form.case(),
            self.form.possessive(),
            article,
        );
        Self::new(&self.name, form, self.capital, self.escape_html, self.entity)
    }

    /// Sustantivo vivo: estático por nombre o dinámico por entidad
    pub(crate) fn resolve_noun(&self, ctx: &RenderContext<'_>, do_format: bool) -> Option<Arc<Noun>> {
        match self.entity.and_then(|i| ctx.entities.get(i)) {
            Some(entity) => ctx
                .dictionary
                .get_dynamic_noun(&self.name, *entity, true, do_format),
            None => ctx.dictionary.get_noun(&self.name, true),
        }
    }

    pub(crate) fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let decl = ctx.dictionary.declension();
        let options = ctx.dictionary.options();
        let form = self.form_in(decl, ctx.override_forms);
        let plural = form.number().is_plural();

        let value = match self.entity {
            Some(index) => match ctx.entities.get(index) {
                None => {
                    if !options.label_debug {
                        log::error!(
                            "'{}' usa la entidad {} y la llamada no la aporta",
                            self.name,
                            index
                        );
                        if options.strict_rendering {
                            return Err(GrammarError::missing_term(&self.name));
                        }
                    }
                    let placeholder = if plural { "<Entities>" } else { "<Entity>" };
                    Some(self.fold(decl, placeholder.to_string(), form))
                }
                Some(entity) => match self.resolve_noun(ctx, true) {
                    Some(noun) => noun.resolve_string(form, !self.capital),
                    None if entity.has_standard_label() => {
                        let label = if plural {
                            entity.label_plural()
                        } else {
                            entity.label()
                        };
                        Some(self.fold(decl, label.to_string(), form))
                    }
                    None => None,
                },
            },
            None => self
                .resolve_noun(ctx, true)
                .and_then(|noun| noun.resolve_string(form, !self.capital)),
        };

        let value = match value {
            Some(value) => value,
            None if options.strict_rendering => {
                return Err(GrammarError::missing_term(&self.name))
            }
            None => {
                log::error!("{}: no hay cadena para '{}' en {}", decl.code(), self.name, form);
                String::new()
            }
        };

        Ok(if self.escape_html {
            html_escape::encode_text(&value).into_owned()
        } else {
            value
        })
    }

    fn fold(&self, decl: &Declension, value: String, form: NounForm) -> String {
        if self.capital {
            value
        } else {
            decl.lowercase_noun(&value, form)
        }
    }

    pub(crate) fn to_json(&self, decl: &Declension) -> Value {
        if self.form.is_legacy_articled() {
            log::error!(
                "'{}' usa un artículo heredado (`article=`), que el renderizador externo no admite",
                self.name
            );
        }
        let mut value = json!({
            "t": TermType::Noun.char_id().to_string(),
            "l": self.name,
            "f": self.form_in(decl, true).key(),
            "c": self.capital,
        });
        if let Some(index) = self.entity {
            value["i"] = json!(index);
        }
        value
    }
}

/// Tipo de modificador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Adjective,
    Article,
}

impl ModifierKind {
    fn term_type(self) -> TermType {
        match self {
            ModifierKind::Adjective => TermType::Adjective,
            ModifierKind::Article => TermType::Article,
        }
    }
}

/// Forma resuelta de un modificador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierForm {
    Adjective(AdjectiveForm),
    Article(ArticleForm),
}

impl ModifierForm {
    pub fn key(&self) -> String {
        match self {
            ModifierForm::Adjective(form) => form.key(),
            ModifierForm::Article(form) => form.key(),
        }
    }
}

/// Referencia a un adjetivo o artículo, con su sustantivo y el término
/// contiguo que decide la concordancia fonética
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModifierRefTag {
    kind: ModifierKind,
    name: String,
    capital: bool,
    attributes: TermAttributes,
    /// Posición del sustantivo asociado en la lista de tokens
    noun: Option<usize>,
    /// Posición del término contiguo
    next: Option<usize>,
}

impl ModifierRefTag {
    /// Modificador aún sin sustantivo
    pub fn new(kind: ModifierKind, name: &str, capital: bool, attributes: TermAttributes) -> Arc<Self> {
        modifier_refs().unique(Self {
            kind,
            name: name.to_lowercase(),
            capital,
            attributes,
            noun: None,
            next: None,
        })
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_capital(&self) -> bool {
        self.capital
    }

    pub fn attributes(&self) -> TermAttributes {
        self.attributes
    }

    pub fn noun_index(&self) -> Option<usize> {
        self.noun
    }

    pub fn next_index(&self) -> Option<usize> {
        self.next
    }

    /// Copia ligada a su sustantivo y a su término contiguo.
    ///
    /// Un adjetivo hereda `article` de su frase si la etiqueta no lo fijaba.
    pub fn attached(&self, noun: usize, next: usize, article: Option<LanguageArticle>) -> Arc<Self> {
        let attributes = match self.kind {
            ModifierKind::Adjective => self.attributes.with_default_article(article),
            ModifierKind::Article => self.attributes,
        };
        modifier_refs().unique(Self {
            attributes,
            noun: Some(noun),
            next: Some(next),
            ..self.clone()
        })
    }

    pub fn with_attributes(&self, attributes: TermAttributes) -> Arc<Self> {
        modifier_refs().unique(Self {
            attributes,
            ..self.clone()
        })
    }

    /// Forma del modificador según su sustantivo y su término contiguo
    pub(crate) fn resolve_form(
        &self,
        tokens: &[LabelToken],
        ctx: &RenderContext<'_>,
    ) -> Option<ModifierForm> {
        let dict = ctx.dictionary;
        let decl = dict.declension();
        let noun_tag = self.noun.and_then(|i| tokens.get(i)).and_then(LabelToken::as_noun)?;
        let noun_form = noun_tag.form_in(decl, ctx.override_forms);
        let noun = noun_tag.resolve_noun(ctx, false);

        let next_starts_with = match self.next.and_then(|i| tokens.get(i)) {
            Some(LabelToken::Modifier(next)) if next.kind == ModifierKind::Adjective => {
                dict.get_adjective(&next.name).map(|a| a.starts_with())
            }
            _ => None,
        };
        let starts_with = next_starts_with
            .or_else(|| noun.as_ref().map(|n| n.starts_with()))
            .unwrap_or_else(|| decl.default_starts_with());
        let gender = self
            .attributes
            .gender
            .or_else(|| noun.as_ref().map(|n| n.gender()))
            .unwrap_or_else(|| decl.default_gender());
        let number = self.attributes.number.unwrap_or(noun_form.number());
        let case = self.attributes.case.unwrap_or(noun_form.case());

        match self.kind {
            ModifierKind::Adjective => Some(ModifierForm::Adjective(decl.approximate_adjective_form(
                starts_with,
                gender,
                number,
                case,
                self.attributes.article.unwrap_or(noun_form.article()),
                self.attributes.possessive.unwrap_or(noun_form.possessive()),
            ))),
            ModifierKind::Article => decl
                .approximate_article_form(starts_with, gender, number, case)
                .map(ModifierForm::Article),
        }
    }

    pub(crate) fn render(&self, tokens: &[LabelToken], ctx: &RenderContext<'_>) -> Result<String> {
        let dict = ctx.dictionary;
        let exists = match self.kind {
            ModifierKind::Adjective => dict.get_adjective(&self.name).is_some(),
            ModifierKind::Article => dict.get_article(&self.name).is_some(),
        };
        if !exists {
            log::info!("falta el modificador '{}' en {}", self.name, dict.code());
            return Ok(String::new());
        }

        let value = match self.resolve_form(tokens, ctx) {
            Some(ModifierForm::Adjective(form)) => dict
                .get_adjective(&self.name)
                .and_then(|a| a.get_close_string(form).map(str::to_string)),
            Some(ModifierForm::Article(form)) => dict
                .get_article(&self.name)
                .and_then(|a| a.get_close_string(form).map(str::to_string)),
            None => return Ok(String::new()),
        };

        let Some(value) = value else {
            log::warn!("'{}' no tiene valor en {} para esta forma", self.name, dict.code());
            return Ok(String::new());
        };
        Ok(if self.capital {
            value
        } else {
            dict.declension().lowercase(&value)
        })
    }

    pub(crate) fn to_json(&self, tokens: &[LabelToken], ctx: &RenderContext<'_>) -> Value {
        let decl = ctx.dictionary.declension();
        if self.kind == ModifierKind::Article && !decl.has_article() {
            return json!("");
        }
        let form = self
            .resolve_form(tokens, ctx)
            .map(|f| f.key())
            .unwrap_or_default();
        let mut value = json!({
            "t": self.kind.term_type().char_id().to_string(),
            "l": self.name,
            "f": form,
            "c": self.capital,
        });
        if let Some(noun) = self.noun {
            value["an"] = json!(noun);
        }
        if let Some(next) = self.next {
            value["nt"] = json!(next);
        }
        value
    }
}

/// Clasificador del sustantivo asociado (`<counter/>`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterRefTag {
    pub noun: Option<usize>,
}

impl CounterRefTag {
    pub(crate) fn render(&self, tokens: &[LabelToken], ctx: &RenderContext<'_>) -> String {
        let default = || {
            ctx.dictionary
                .declension()
                .default_classifier()
                .unwrap_or("")
                .to_string()
        };
        let Some(tag) = self.noun.and_then(|i| tokens.get(i)).and_then(LabelToken::as_noun) else {
            return default();
        };
        tag.resolve_noun(ctx, true)
            .and_then(|noun| noun.classifier().map(str::to_string))
            .unwrap_or_else(default)
    }
}

/// Elección por el género del sustantivo asociado
#[derive(Debug, Clone, PartialEq)]
pub struct GenderRefTag {
    pub noun: Option<usize>,
    pub branches: Vec<(LanguageGender, LabelValue)>,
    pub default: LabelValue,
}

impl GenderRefTag {
    fn branch(&self, tokens: &[LabelToken], ctx: &RenderContext<'_>) -> &LabelValue {
        let gender = self
            .noun
            .and_then(|i| tokens.get(i))
            .and_then(LabelToken::as_noun)
            .and_then(|tag| tag.resolve_noun(ctx, true))
            .map(|noun| noun.gender());
        gender
            .and_then(|g| self.branches.iter().find(|(b, _)| *b == g))
            .map(|(_, value)| value)
            .unwrap_or(&self.default)
    }
}

/// Elección por la categoría plural de un valor numérico de la llamada
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRefTag {
    pub index: usize,
    pub branches: Vec<(PluralCategory, LabelValue)>,
    pub default: LabelValue,
}

impl PluralRefTag {
    pub fn category(&self, declension: &Declension, value: f64) -> PluralCategory {
        let has_zero = self.branches.iter().any(|(c, _)| *c == PluralCategory::Zero);
        if value == 0.0 && has_zero {
            PluralCategory::Zero
        } else {
            declension.plural_rule().categorize(value)
        }
    }

    fn branch(&self, ctx: &RenderContext<'_>) -> &LabelValue {
        let Some(&value) = ctx.vals.get(self.index) else {
            log::debug!("sin valor {} para <plural>; se usa la rama por defecto", self.index);
            return &self.default;
        };
        let category = self.category(ctx.dictionary.declension(), value);
        self.branches
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| v)
            .unwrap_or(&self.default)
    }
}

/// Elemento de una etiqueta analizada
#[derive(Debug, Clone, PartialEq)]
pub enum LabelToken {
    Text(String),
    Noun(Arc<NounRefTag>),
    Modifier(Arc<ModifierRefTag>),
    Counter(CounterRefTag),
    Gender(GenderRefTag),
    Plural(PluralRefTag),
}

impl LabelToken {
    pub fn as_noun(&self) -> Option<&Arc<NounRefTag>> {
        match self {
            LabelToken::Noun(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_modifier(&self) -> Option<&Arc<ModifierRefTag>> {
        match self {
            LabelToken::Modifier(tag) => Some(tag),
            _ => None,
        }
    }

    pub(crate) fn render(
        &self,
        tokens: &[LabelToken],
        ctx: &RenderContext<'_>,
    ) -> Result<String> {
        match self {
            LabelToken::Text(text) => Ok(text.clone()),
            LabelToken::Noun(tag) => tag.render(ctx),
            LabelToken::Modifier(tag) => tag.render(tokens, ctx),
            LabelToken::Counter(tag) => Ok(tag.render(tokens, ctx)),
            LabelToken::Gender(tag) => render_tokens(tag.branch(tokens, ctx).tokens(), ctx),
            LabelToken::Plural(tag) => render_tokens(tag.branch(ctx).tokens(), ctx),
        }
    }

    pub(crate) fn to_json(&self, tokens: &[LabelToken], ctx: &RenderContext<'_>) -> Value {
        match self {
            LabelToken::Text(text) => json!(text),
            LabelToken::Noun(tag) => tag.to_json(ctx.dictionary.declension()),
            LabelToken::Modifier(tag) => tag.to_json(tokens, ctx),
            LabelToken::Counter(tag) => json!({ "t": "c", "an": tag.noun }),
            LabelToken::Gender(tag) => {
                let branches: serde_json::Map<String, Value> = tag
                    .branches
                    .iter()
                    .map(|(g, v)| (g.db_value().to_string(), v.to_json(ctx)))
                    .collect();
                json!({
                    "t": "g",
                    "an": tag.noun,
                    "def": tag.default.to_json(ctx),
                    "v": branches,
                })
            }
            LabelToken::Plural(tag) => {
                let branches: serde_json::Map<String, Value> = tag
                    .branches
                    .iter()
                    .map(|(c, v)| (c.cldr_value().to_string(), v.to_json(ctx)))
                    .collect();
                json!({
                    "t": "p",
                    "i": tag.index,
                    "def": tag.default.to_json(ctx),
                    "v": branches,
                })
            }
        }
    }
}

/// Etiqueta analizada: texto literal y referencias ya agrupadas en frases
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelValue {
    tokens: Vec<LabelToken>,
}

impl LabelValue {
    pub fn new(tokens: Vec<LabelToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[LabelToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// ¿Es solo texto, sin referencias?
    pub fn is_plain(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, LabelToken::Text(_)))
    }

    /// Lista JSON para el renderizador externo
    pub(crate) fn to_json(&self, ctx: &RenderContext<'_>) -> Value {
        Value::Array(
            self.tokens
                .iter()
                .map(|t| t.to_json(&self.tokens, ctx))
                .collect(),
        )
    }

    /// Nombres de los términos que usa la etiqueta, incluidas sus ramas
    pub fn terms_in_use(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_terms(&mut names);
        names
    }

    fn collect_terms(&self, names: &mut BTreeSet<String>) {
        for token in &self.tokens {
            match token {
                LabelToken::Noun(tag) => {
                    names.insert(tag.name().to_string());
                }
                LabelToken::Modifier(tag) => {
                    names.insert(tag.name().to_string());
                }
                LabelToken::Gender(tag) => {
                    tag.default.collect_terms(names);
                    for (_, branch) in &tag.branches {
                        branch.collect_terms(names);
                    }
                }
                LabelToken::Plural(tag) => {
                    tag.default.collect_terms(names);
                    for (_, branch) in &tag.branches {
                        branch.collect_terms(names);
                    }
                }
                LabelToken::Text(_) | LabelToken::Counter(_) => {}
            }
        }
    }
}
