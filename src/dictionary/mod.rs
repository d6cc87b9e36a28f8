//! Diccionario de términos de un idioma
//!
//! Se llena en una fase de escritura (carga y validación) y se congela
//! antes de publicarse. Congelado, todas las operaciones son lecturas y se
//! puede compartir entre hilos sin bloqueo.

pub mod loader;
pub mod renaming;

pub use loader::DictionaryLoader;
pub use renaming::{DefaultRenamingProvider, Renameable, RenamingProvider};

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::config::{EngineOptions, ValidationPolicy};
use crate::declension::{declension_for, Declension};
use crate::error::{GrammarError, Result};
use crate::grammar::{
    LanguageArticle, LanguageGender, LanguagePosition, LanguageStartsWith, NounType,
};
use crate::render::{self, LabelValue, RenderContext};
use crate::terms::{Adjective, Article, GrammaticalTerm, Noun, Term};

/// Términos de un idioma con sus índices por alias plural y por entidad
pub struct LanguageDictionary {
    declension: &'static Declension,
    nouns: HashMap<String, Arc<Noun>>,
    nouns_by_plural_alias: HashMap<String, String>,
    nouns_by_entity: HashMap<String, BTreeSet<String>>,
    noun_versions: HashMap<String, Vec<(f64, Arc<Noun>)>>,
    adjectives: HashMap<String, Arc<Adjective>>,
    articles: HashMap<String, Arc<Article>>,
    renaming: Arc<dyn RenamingProvider>,
    options: EngineOptions,
    frozen: bool,
}

impl fmt::Debug for LanguageDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageDictionary")
            .field("language", &self.declension.code())
            .field("nouns", &self.nouns.len())
            .field("adjectives", &self.adjectives.len())
            .field("articles", &self.articles.len())
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl LanguageDictionary {
    pub fn new(language: &str) -> Self {
        Self {
            declension: declension_for(language),
            nouns: HashMap::new(),
            nouns_by_plural_alias: HashMap::new(),
            nouns_by_entity: HashMap::new(),
            noun_versions: HashMap::new(),
            adjectives: HashMap::new(),
            articles: HashMap::new(),
            renaming: Arc::new(DefaultRenamingProvider::new()),
            options: EngineOptions::default(),
            frozen: false,
        }
    }

    pub fn with_renaming_provider(mut self, provider: Arc<dyn RenamingProvider>) -> Self {
        self.renaming = provider;
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn declension(&self) -> &'static Declension {
        self.declension
    }

    pub fn code(&self) -> &str {
        self.declension.code()
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn renaming_provider(&self) -> &dyn RenamingProvider {
        self.renaming.as_ref()
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.frozen {
            Err(GrammarError::frozen(format!("el diccionario '{}'", self.code())))
        } else {
            Ok(())
        }
    }

    // Fábricas

    pub fn create_noun(
        &self,
        name: &str,
        noun_type: NounType,
        entity: Option<&str>,
        gender: LanguageGender,
        starts_with: LanguageStartsWith,
    ) -> Noun {
        self.declension
            .create_noun(name, noun_type, entity, gender, starts_with)
    }

    pub fn create_adjective(
        &self,
        name: &str,
        starts_with: LanguageStartsWith,
        position: LanguagePosition,
    ) -> Adjective {
        self.declension.create_adjective(name, starts_with, position)
    }

    pub fn create_article(&self, name: &str, article_type: LanguageArticle) -> Result<Article> {
        self.declension.create_article(name, article_type)
    }

    // Escritura

    pub fn put_noun(&mut self, noun: Noun) -> Result<()> {
        self.ensure_writable()?;
        let name = noun.name().to_string();
        if let Some(alias) = noun.plural_alias() {
            self.nouns_by_plural_alias
                .insert(alias.to_string(), name.clone());
        }
        if let Some(entity) = noun.entity() {
            self.nouns_by_entity
                .entry(entity.to_lowercase())
                .or_default()
                .insert(name.clone());
        }
        if self.nouns.insert(name.clone(), Arc::new(noun)).is_some() {
            log::debug!("{}: sustantivo '{}' redefinido", self.code(), name);
        }
        Ok(())
    }

    pub fn put_adjective(&mut self, adjective: Adjective) -> Result<()> {
        self.ensure_writable()?;
        self.adjectives
            .insert(adjective.name().to_string(), Arc::new(adjective));
        Ok(())
    }

    pub fn put_article(&mut self, article: Article) -> Result<()> {
        self.ensure_writable()?;
        self.articles
            .insert(article.name().to_string(), Arc::new(article));
        Ok(())
    }

    pub fn put_term(&mut self, term: Term) -> Result<()> {
        match term {
            Term::Noun(n) => self.put_noun(Arc::unwrap_or_clone(n)),
            Term::Adjective(a) => self.put_adjective(Arc::unwrap_or_clone(a)),
            Term::Article(a) => self.put_article(Arc::unwrap_or_clone(a)),
        }
    }

    pub fn put_all(&mut self, terms: impl IntoIterator<Item = Term>) -> Result<()> {
        for term in terms {
            self.put_term(term)?;
        }
        Ok(())
    }

    /// Define el sustantivo visible a partir de la versión `at_least`
    pub fn set_noun_override(&mut self, name: &str, noun: Noun, at_least: f64) -> Result<()> {
        self.ensure_writable()?;
        let overrides = self.noun_versions.entry(name.to_lowercase()).or_default();
        overrides.retain(|(v, _)| *v != at_least);
        overrides.push((at_least, Arc::new(noun)));
        overrides.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(())
    }

    // Lectura

    /// Sustitución con el mayor `at_least` que no supera `version`
    fn versioned_noun(&self, name: &str, version: f64) -> Option<Arc<Noun>> {
        self.noun_versions
            .get(name)?
            .iter()
            .rev()
            .find(|(at_least, _)| *at_least <= version)
            .map(|(_, noun)| Arc::clone(noun))
    }

    /// Sustantivo por nombre; con `renamed` se consulta antes el proveedor
    pub fn get_noun(&self, name: &str, renamed: bool) -> Option<Arc<Noun>> {
        let name = name.to_lowercase();
        if renamed && self.renaming.use_renamed_nouns() {
            if let Some(noun) = self.renaming.renamed_noun(self.code(), &name) {
                return Some(noun);
            }
        }
        if let Some(version) = self.renaming.label_version() {
            if let Some(noun) = self.versioned_noun(&name, version) {
                return Some(noun);
            }
        }
        self.nouns.get(&name).cloned()
    }

    pub fn get_noun_by_plural_alias(&self, alias: &str, renamed: bool) -> Option<Arc<Noun>> {
        let name = self.nouns_by_plural_alias.get(&alias.to_lowercase())?;
        self.get_noun(name, renamed)
    }

    pub fn get_adjective(&self, name: &str) -> Option<Arc<Adjective>> {
        self.adjectives.get(&name.to_lowercase()).cloned()
    }

    pub fn get_article(&self, name: &str) -> Option<Arc<Article>> {
        self.articles.get(&name.to_lowercase()).cloned()
    }

    pub fn get_term(&self, name: &str) -> Option<Term> {
        self.get_noun(name, false)
            .map(Term::Noun)
            .or_else(|| self.get_adjective(name).map(Term::Adjective))
            .or_else(|| self.get_article(name).map(Term::Article))
    }

    pub fn nouns_by_entity(&self, entity: &str) -> Vec<Arc<Noun>> {
        self.nouns_by_entity
            .get(&entity.to_lowercase())
            .map(|names| names.iter().filter_map(|n| self.nouns.get(n).cloned()).collect())
            .unwrap_or_default()
    }

    pub fn noun_names(&self) -> BTreeSet<&str> {
        self.nouns.keys().map(String::as_str).collect()
    }

    /// Sustantivo de una entidad dinámica.
    ///
    /// Orden: renombrado, o empaquetado y después renombrado si el objeto es
    /// del usuario. Si no hay ninguno, un objeto del usuario copia la plantilla
    /// `name` y la rellena con su etiqueta (`{0}` se sustituye por ella); un
    /// objeto estándar usa el sustantivo de su propia clave.
    pub fn get_dynamic_noun(
        &self,
        name: &str,
        entity: &dyn Renameable,
        renamed: bool,
        do_format: bool,
    ) -> Option<Arc<Noun>> {
        let key = entity.entity_specific_key(name);
        let code = self.code();
        if renamed {
            if let Some(noun) = self.renaming.renamed_noun(code, &key) {
                return Some(noun);
            }
        } else if !entity.has_standard_label() {
            if let Some(noun) = self
                .renaming
                .packaged_noun(code, &key)
                .or_else(|| self.renaming.renamed_noun(code, &key))
            {
                return Some(noun);
            }
        }

        if entity.has_standard_label() {
            return self.get_noun(&key, false);
        }

        let template = self.get_noun(name, false)?;
        let mut noun = template.clone_with(None, None, Vec::new());
        if let Some(label) = entity.standard_field_label(code, name) {
            for &form in self.declension.all_noun_forms() {
                fill(&mut noun, form, &label);
            }
        } else if do_format {
            let forms = if noun.noun_type() == NounType::Entity {
                self.declension.all_noun_forms()
            } else {
                self.declension.field_forms()
            };
            for &form in forms {
                let label = if form.number().is_plural() {
                    entity.label_plural()
                } else {
                    entity.label()
                };
                let value = match noun.get_string(form) {
                    Some(pattern) => pattern.replace("{0}", label),
                    None => label.to_string(),
                };
                fill(&mut noun, form, &value);
            }
        }
        Some(Arc::new(noun))
    }

    // Validación y congelado

    /// Rellena las formas que faltan en todos los términos
    pub fn validate(&mut self, policy: ValidationPolicy) -> Result<()> {
        self.ensure_writable()?;
        let mut names: Vec<&String> = self.nouns.keys().collect();
        names.sort();
        let names: Vec<String> = names.into_iter().cloned().collect();
        for name in names {
            if let Some(noun) = self.nouns.get_mut(&name) {
                Arc::make_mut(noun).validate(policy)?;
            }
        }
        for overrides in self.noun_versions.values_mut() {
            for (_, noun) in overrides.iter_mut() {
                Arc::make_mut(noun).validate(policy)?;
            }
        }
        for adjective in self.adjectives.values_mut() {
            Arc::make_mut(adjective).validate(policy)?;
        }
        for article in self.articles.values_mut() {
            Arc::make_mut(article).validate(policy)?;
        }
        log::debug!(
            "{}: validados {} sustantivos, {} adjetivos y {} artículos",
            self.code(),
            self.nouns.len(),
            self.adjectives.len(),
            self.articles.len()
        );
        Ok(())
    }

    /// Pasa a la fase de lectura; cualquier escritura posterior falla
    pub fn freeze(&mut self) {
        for noun in self.nouns.values_mut() {
            Arc::make_mut(noun).freeze();
        }
        for overrides in self.noun_versions.values_mut() {
            for (_, noun) in overrides.iter_mut() {
                Arc::make_mut(noun).freeze();
            }
        }
        for adjective in self.adjectives.values_mut() {
            Arc::make_mut(adjective).freeze();
        }
        for article in self.articles.values_mut() {
            Arc::make_mut(article).freeze();
        }
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // Salida

    /// Documento JSON con todos los términos
    pub fn terms_to_json(&self) -> serde_json::Value {
        crate::json::terms_to_json(
            self.nouns.values().map(|n| n.as_ref() as &dyn GrammaticalTerm),
            self.adjectives.values().map(|a| a.as_ref() as &dyn GrammaticalTerm),
            self.articles.values().map(|a| a.as_ref() as &dyn GrammaticalTerm),
        )
    }

    /// Renderiza una etiqueta con las entidades dinámicas y los valores
    /// numéricos de la llamada
    pub fn format(
        &self,
        value: &LabelValue,
        entities: &[&dyn Renameable],
        vals: &[f64],
        override_forms: bool,
    ) -> Result<String> {
        let ctx = RenderContext {
            dictionary: self,
            entities,
            vals,
            override_forms,
        };
        render::render_tokens(value.tokens(), &ctx)
    }
}

fn fill(noun: &mut Noun, form: crate::grammar::NounForm, value: &str) {
    if let Err(e) = noun.set_string(form, value) {
        log::warn!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::LanguageNumber;

    fn french() -> LanguageDictionary {
        let mut dict = LanguageDictionary::new("fr");
        let d = dict.declension();
        let mut account = dict
            .create_noun(
                "account",
                NounType::Entity,
                Some("Account"),
                LanguageGender::Masculine,
                LanguageStartsWith::Consonant,
            )
            .with_plural_alias("accounts");
        account
            .set_string(d.noun_form(LanguageNumber::Singular, LanguageArticle::Zero), "compte")
            .unwrap();
        account
            .set_string(d.noun_form(LanguageNumber::Plural, LanguageArticle::Zero), "comptes")
            .unwrap();
        dict.put_noun(account).unwrap();

        let mut name = dict.create_noun(
            "account_name",
            NounType::Field,
            Some("account"),
            LanguageGender::Masculine,
            LanguageStartsWith::Consonant,
        );
        name.set_string(d.default_noun_form(), "nom du compte").unwrap();
        dict.put_noun(name).unwrap();

        let mut new = dict.create_adjective("new", LanguageStartsWith::Consonant, LanguagePosition::Pre);
        new.set_string(d.default_adjective_form(), "nouvelle").unwrap();
        dict.put_adjective(new).unwrap();
        dict
    }

    struct Custom {
        standard: bool,
    }

    impl Renameable for Custom {
        fn name(&self) -> &str {
            "Invoice__c"
        }

        fn label(&self) -> &str {
            "Facture"
        }

        fn label_plural(&self) -> &str {
            "Factures"
        }

        fn has_standard_label(&self) -> bool {
            self.standard
        }
    }

    #[test]
    fn test_lookups() {
        let dict = french();
        assert!(dict.get_noun("Account", false).is_some());
        assert_eq!(
            dict.get_noun_by_plural_alias("Accounts", false).map(|n| n.name().to_string()),
            Some("account".to_string())
        );
        assert!(dict.get_adjective("NEW").is_some());
        assert!(dict.get_article("new").is_none());
        assert_eq!(dict.get_term("new").map(|t| t.term_type()), Some(crate::grammar::TermType::Adjective));
        let names: Vec<String> = dict
            .nouns_by_entity("account")
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(names, vec!["account", "account_name"]);
    }

    #[test]
    fn test_freeze_blocks_writes() {
        let mut dict = french();
        dict.validate(ValidationPolicy::Strict).unwrap();
        dict.freeze();
        assert!(dict.is_frozen());
        assert!(dict.get_noun("account", false).is_some_and(|n| n.is_frozen()));
        let adj = dict.create_adjective("old", LanguageStartsWith::Consonant, LanguagePosition::Pre);
        assert!(matches!(dict.put_adjective(adj), Err(GrammarError::Frozen { .. })));
        assert!(dict.validate(ValidationPolicy::Lenient).is_err());
    }

    #[test]
    fn test_version_override() {
        let build = |version: f64| {
            let mut dict = french()
                .with_renaming_provider(Arc::new(DefaultRenamingProvider::with_label_version(version)));
            let base = dict.get_noun("account", false).unwrap();
            let form = dict.declension().default_noun_form();
            let old = base.clone_with(None, None, vec![(form, "OldName".to_string())]);
            let new = base.clone_with(None, None, vec![(form, "NewName".to_string())]);
            dict.set_noun_override("account", new, 200.0).unwrap();
            dict.set_noun_override("account", old, 100.0).unwrap();
            dict
        };
        let value = |dict: &LanguageDictionary| {
            let noun = dict.get_noun("account", false).unwrap();
            noun.get_default_string(false).map(str::to_string)
        };
        assert_eq!(value(&build(150.0)).as_deref(), Some("OldName"));
        assert_eq!(value(&build(250.0)).as_deref(), Some("NewName"));
        assert_eq!(value(&build(50.0)).as_deref(), Some("compte"));
    }

    #[test]
    fn test_dynamic_noun_from_template() {
        let mut dict = french();
        let d = dict.declension();
        let mut entity = dict.create_noun(
            "entity",
            NounType::Entity,
            None,
            LanguageGender::Feminine,
            LanguageStartsWith::Consonant,
        );
        entity.set_string(d.default_noun_form(), "{0}").unwrap();
        dict.put_noun(entity).unwrap();

        let custom = Custom { standard: false };
        let noun = dict.get_dynamic_noun("entity", &custom, true, true).unwrap();
        assert_eq!(noun.get_default_string(false), Some("Facture"));
        assert_eq!(noun.get_default_string(true), Some("Factures"));
        assert_eq!(noun.gender(), LanguageGender::Feminine);

        // Sin formatear se conserva la plantilla
        let raw = dict.get_dynamic_noun("entity", &custom, true, false).unwrap();
        assert_eq!(raw.get_default_string(false), Some("{0}"));
    }

    #[test]
    fn test_dynamic_noun_for_standard_entity() {
        let dict = french();
        let standard = Custom { standard: true };
        // La clave específica de "entity" es el nombre del objeto
        assert!(dict.get_dynamic_noun("entity", &standard, true, true).is_none());
        let account = dict.get_dynamic_noun("account", &standard, true, true).unwrap();
        assert_eq!(account.get_default_string(false), Some("compte"));
    }

    #[test]
    fn test_validate_strict_reports_missing_forms() {
        let mut dict = LanguageDictionary::new("de");
        let empty = dict.create_noun(
            "ghost",
            NounType::Other,
            None,
            LanguageGender::Neuter,
            LanguageStartsWith::Consonant,
        );
        dict.put_noun(empty).unwrap();
        let err = dict.validate(ValidationPolicy::Strict).unwrap_err();
        assert!(matches!(err, GrammarError::InvalidForm { .. }));
        assert!(dict.validate(ValidationPolicy::Lenient).is_ok());
    }
}
