//! Declinación por idioma
//!
//! Una [`Declension`] envuelve las reglas de un [`Language`] y precalcula el
//! conjunto cerrado de formas válidas de sustantivos, adjetivos y artículos.
//! Es el único sitio donde se construyen formas: la búsqueda exacta devuelve
//! `None` si la combinación no existe y la aproximada siempre devuelve una
//! forma del conjunto.
//!
//! Las declinaciones se crean una sola vez por idioma y se comparten como
//! `&'static Declension` desde [`declension_for`].

pub mod resolution;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{GrammarError, Result};
use crate::grammar::{
    AdjectiveForm, ArticleForm, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber,
    LanguagePosition, LanguagePossessive, LanguageStartsWith, NounForm, NounType, PluralRule,
};
use crate::languages::{canonical_code, get_language, simple::Simple, Language};
use crate::terms::{Adjective, Article, Noun};

use resolution::{Axis, Candidate, DropRule};

/// Idiomas con declinación propia
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "pt", "ca", "it", "fr", "ro", "de", "nl", "sv", "da", "no", "is", "ru", "uk",
    "pl", "cs", "bg", "tr", "fi", "et", "hu", "eu", "sw", "zu", "xh", "ar", "ko", "ja", "zh",
    "zh_TW", "vi", "ms", "id", "th",
];

/// Código usado por la declinación simple de idiomas desconocidos
pub const UNDETERMINED: &str = "und";

/// Valores admitidos en cada eje para un tipo de término; el primero de
/// cada lista es el valor por defecto
#[derive(Debug, Clone)]
struct AxisDomain {
    starts_with: Vec<LanguageStartsWith>,
    genders: Vec<LanguageGender>,
    numbers: Vec<LanguageNumber>,
    cases: Vec<LanguageCase>,
    articles: Vec<LanguageArticle>,
    possessives: Vec<LanguagePossessive>,
}

fn default_first<T: Copy + PartialEq>(default: T, values: &[T]) -> Vec<T> {
    let mut result = vec![default];
    for value in values {
        if !result.contains(value) {
            result.push(*value);
        }
    }
    result
}

impl AxisDomain {
    fn defaults(&self) -> Candidate {
        Candidate {
            starts_with: self.starts_with[0],
            gender: self.genders[0],
            number: self.numbers[0],
            case: self.cases[0],
            article: self.articles[0],
            possessive: self.possessives[0],
        }
    }

    fn supports(&self, axis: Axis) -> bool {
        let len = match axis {
            Axis::StartsWith => self.starts_with.len(),
            Axis::Gender => self.genders.len(),
            Axis::Number => self.numbers.len(),
            Axis::Case => self.cases.len(),
            Axis::Article => self.articles.len(),
            Axis::Possessive => self.possessives.len(),
        };
        len > 1
    }

    fn contains(&self, c: &Candidate) -> bool {
        self.starts_with.contains(&c.starts_with)
            && self.genders.contains(&c.gender)
            && self.numbers.contains(&c.number)
            && self.cases.contains(&c.case)
            && self.articles.contains(&c.article)
            && self.possessives.contains(&c.possessive)
    }

    /// Sustituye por el valor por defecto todo valor fuera del dominio
    fn clamp(&self, c: Candidate) -> Candidate {
        let d = self.defaults();
        Candidate {
            starts_with: if self.starts_with.contains(&c.starts_with) { c.starts_with } else { d.starts_with },
            gender: if self.genders.contains(&c.gender) { c.gender } else { d.gender },
            number: if self.numbers.contains(&c.number) { c.number } else { d.number },
            case: if self.cases.contains(&c.case) { c.case } else { d.case },
            article: if self.articles.contains(&c.article) { c.article } else { d.article },
            possessive: if self.possessives.contains(&c.possessive) { c.possessive } else { d.possessive },
        }
    }

    /// Producto cartesiano, con la combinación por defecto en primer lugar
    fn candidates(&self) -> Vec<Candidate> {
        let mut result = Vec::new();
        for &number in &self.numbers {
            for &case in &self.cases {
                for &possessive in &self.possessives {
                    for &article in &self.articles {
                        for &gender in &self.genders {
                            for &starts_with in &self.starts_with {
                                result.push(Candidate {
                                    starts_with,
                                    gender,
                                    number,
                                    case,
                                    article,
                                    possessive,
                                });
                            }
                        }
                    }
                }
            }
        }
        result
    }
}

/// Reglas gramaticales de un idioma con sus formas precalculadas
pub struct Declension {
    language: Box<dyn Language>,
    noun_domain: AxisDomain,
    adjective_domain: AxisDomain,
    article_domain: AxisDomain,
    noun_forms: Vec<NounForm>,
    field_forms: Vec<NounForm>,
    adjective_forms: Vec<AdjectiveForm>,
    article_forms: Vec<ArticleForm>,
}

impl fmt::Debug for Declension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declension")
            .field("code", &self.code())
            .field("noun_forms", &self.noun_forms.len())
            .field("adjective_forms", &self.adjective_forms.len())
            .field("article_forms", &self.article_forms.len())
            .finish()
    }
}

impl PartialEq for Declension {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Declension {}

impl Declension {
    pub fn new(language: Box<dyn Language>) -> Self {
        let lang = language.as_ref();
        let numbers = if !lang.has_plural() {
            vec![LanguageNumber::Singular]
        } else if lang.has_dual() {
            LanguageNumber::ALL.to_vec()
        } else {
            vec![LanguageNumber::Singular, LanguageNumber::Plural]
        };
        let cases = default_first(lang.default_case(), lang.allowed_cases());
        let genders = if lang.has_gender() {
            default_first(lang.default_gender(), lang.required_genders())
        } else {
            vec![lang.default_gender()]
        };
        let starts_with = if lang.has_starts_with() || lang.has_ends_with() {
            default_first(lang.default_starts_with(), lang.required_starts_with())
        } else {
            vec![lang.default_starts_with()]
        };
        let possessives = default_first(lang.default_possessive(), lang.allowed_possessives());
        let single_possessive = vec![lang.default_possessive()];
        let single_article = vec![lang.default_article()];

        let noun_domain = AxisDomain {
            starts_with: vec![lang.default_starts_with()],
            genders: vec![lang.default_gender()],
            numbers: numbers.clone(),
            cases: cases.clone(),
            articles: if lang.has_article_in_noun_form() {
                default_first(lang.default_article(), lang.noun_article_types())
            } else {
                single_article.clone()
            },
            possessives: if lang.has_possessive() {
                possessives.clone()
            } else {
                single_possessive.clone()
            },
        };
        let adjective_domain = AxisDomain {
            starts_with: starts_with.clone(),
            genders: genders.clone(),
            numbers: numbers.clone(),
            cases: cases.clone(),
            articles: default_first(lang.default_article(), lang.adjective_article_types()),
            possessives: if lang.has_possessive_in_adjective() {
                possessives
            } else {
                single_possessive.clone()
            },
        };
        let article_domain = AxisDomain {
            starts_with,
            genders,
            numbers,
            cases,
            articles: single_article,
            possessives: single_possessive,
        };

        let noun_forms: Vec<NounForm> = noun_domain
            .candidates()
            .iter()
            .map(Candidate::noun_form)
            .collect();
        let defaults = noun_domain.defaults();
        let field_forms = noun_forms
            .iter()
            .copied()
            .filter(|f| f.possessive() == defaults.possessive && f.article() == defaults.article)
            .collect();
        let adjective_forms: Vec<AdjectiveForm> = adjective_domain
            .candidates()
            .iter()
            .map(Candidate::adjective_form)
            .collect();
        let article_forms: Vec<ArticleForm> = if lang.has_article() {
            article_domain
                .candidates()
                .iter()
                .map(Candidate::article_form)
                .collect()
        } else {
            Vec::new()
        };

        log::debug!(
            "declinación {}: {} formas de sustantivo, {} de adjetivo, {} de artículo",
            lang.code(),
            noun_forms.len(),
            adjective_forms.len(),
            article_forms.len()
        );

        Self {
            language,
            noun_domain,
            adjective_domain,
            article_domain,
            noun_forms,
            field_forms,
            adjective_forms,
            article_forms,
        }
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn code(&self) -> &str {
        self.language.code()
    }

    pub fn name(&self) -> &str {
        self.language.name()
    }

    // Categorías activas

    pub fn has_gender(&self) -> bool {
        self.language.has_gender()
    }

    pub fn has_plural(&self) -> bool {
        self.language.has_plural()
    }

    pub fn has_dual(&self) -> bool {
        self.language.has_dual()
    }

    pub fn has_article(&self) -> bool {
        self.language.has_article()
    }

    pub fn has_article_in_noun_form(&self) -> bool {
        self.language.has_article_in_noun_form()
    }

    pub fn has_starts_with(&self) -> bool {
        self.language.has_starts_with()
    }

    pub fn has_ends_with(&self) -> bool {
        self.language.has_ends_with()
    }

    pub fn has_possessive(&self) -> bool {
        self.language.has_possessive()
    }

    pub fn has_possessive_in_adjective(&self) -> bool {
        self.language.has_possessive_in_adjective()
    }

    pub fn has_capitalization(&self) -> bool {
        self.language.has_capitalization()
    }

    pub fn has_classifiers(&self) -> bool {
        self.language.default_classifier().is_some()
    }

    /// ¿Hay más de un caso obligatorio?
    pub fn has_required_cases(&self) -> bool {
        self.language.required_cases().len() > 1
    }

    /// ¿Hay más de un caso en las formas?
    pub fn has_allowed_cases(&self) -> bool {
        self.noun_domain.cases.len() > 1
    }

    /// ¿Distingue alguna categoría además del número?
    pub fn is_inflected(&self) -> bool {
        self.has_gender()
            || self.has_allowed_cases()
            || self.has_article_in_noun_form()
            || self.has_possessive()
            || self.has_starts_with()
            || self.has_ends_with()
    }

    pub fn required_cases(&self) -> &'static [LanguageCase] {
        self.language.required_cases()
    }

    pub fn allowed_cases(&self) -> &[LanguageCase] {
        &self.noun_domain.cases
    }

    /// Géneros efectivos: solo el de por defecto si el idioma no tiene género
    pub fn required_genders(&self) -> &[LanguageGender] {
        &self.article_domain.genders
    }

    pub fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        self.language.allowed_article_types()
    }

    pub fn required_starts_with(&self) -> &[LanguageStartsWith] {
        &self.article_domain.starts_with
    }

    /// Distancia máxima entre un modificador y su sustantivo
    pub fn max_distance_for_modifiers(&self) -> usize {
        if self.is_inflected() || !self.language.has_word_spaces() {
            0
        } else {
            5
        }
    }

    // Valores por defecto

    pub fn default_gender(&self) -> LanguageGender {
        self.language.default_gender()
    }

    pub fn default_starts_with(&self) -> LanguageStartsWith {
        self.language.default_starts_with()
    }

    pub fn default_case(&self) -> LanguageCase {
        self.language.default_case()
    }

    pub fn default_article(&self) -> LanguageArticle {
        self.language.default_article()
    }

    pub fn default_possessive(&self) -> LanguagePossessive {
        self.language.default_possessive()
    }

    pub fn default_adjective_position(&self) -> LanguagePosition {
        self.language.default_adjective_position()
    }

    pub fn default_classifier(&self) -> Option<&'static str> {
        self.language.default_classifier()
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.language.plural_rule()
    }

    pub fn should_infer_noun_def_article_from_particle(&self) -> bool {
        self.language.should_infer_noun_def_article_from_particle()
    }

    pub fn move_noun_inflection_to_first_modifier(&self) -> bool {
        self.language.move_noun_inflection_to_first_modifier()
    }

    pub fn default_noun_form(&self) -> NounForm {
        self.noun_domain.defaults().noun_form()
    }

    pub fn default_adjective_form(&self) -> AdjectiveForm {
        self.adjective_domain.defaults().adjective_form()
    }

    pub fn default_article_form(&self) -> Option<ArticleForm> {
        self.has_article()
            .then(|| self.article_domain.defaults().article_form())
    }

    // Formas

    pub fn all_noun_forms(&self) -> &[NounForm] {
        &self.noun_forms
    }

    /// Formas sin artículo ni posesivo: las que necesita un campo
    pub fn field_forms(&self) -> &[NounForm] {
        &self.field_forms
    }

    pub fn adjective_forms(&self) -> &[AdjectiveForm] {
        &self.adjective_forms
    }

    pub fn article_forms(&self) -> &[ArticleForm] {
        &self.article_forms
    }

    /// Valores que se intentan conservar al aproximar: lo que el dominio no
    /// admite pasa al valor por defecto, el dual sin formas propias pasa al
    /// plural y el caso solo se conserva si el idioma exige casos.
    fn clamp_request(&self, domain: &AxisDomain, request: Candidate) -> Candidate {
        let number = match request.number {
            LanguageNumber::Dual
                if !domain.numbers.contains(&LanguageNumber::Dual)
                    && domain.numbers.contains(&LanguageNumber::Plural) =>
            {
                LanguageNumber::Plural
            }
            number => number,
        };
        let mut clamped = domain.clamp(Candidate { number, ..request });
        if !self.has_required_cases() {
            clamped.case = domain.defaults().case;
        }
        clamped
    }

    fn noun_candidate(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Candidate {
        Candidate {
            number,
            case,
            possessive,
            article,
            ..self.noun_domain.defaults()
        }
    }

    pub fn exact_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Option<NounForm> {
        let candidate = self.noun_candidate(number, case, possessive, article);
        self.noun_domain
            .contains(&candidate)
            .then(|| candidate.noun_form())
    }

    /// Forma de sustantivo más cercana a la pedida.
    ///
    /// En un idioma con artículos que no flexiona el sustantivo, pedir un
    /// artículo devuelve una forma heredada que envuelve la forma sin artículo.
    pub fn approximate_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> NounForm {
        if let Some(form) = self.exact_noun_form(number, case, possessive, article) {
            return form;
        }
        let default_article = self.default_article();
        if !self.has_article_in_noun_form() && article != default_article {
            let base = self.approximate_noun_form(number, case, possessive, default_article);
            return if self.has_article() && self.allowed_article_types().contains(&article) {
                NounForm::legacy(base, article)
            } else {
                base
            };
        }
        let request = self.noun_candidate(number, case, possessive, article);
        let domain = &self.noun_domain;
        let resolved = resolution::resolve(
            self.clamp_request(domain, request),
            &domain.defaults(),
            resolution::NOUN_DROP_RULES,
            |axis| domain.supports(axis),
            |c| domain.contains(c).then(|| c.noun_form()),
        );
        self.checked(resolved, "sustantivo", &request, self.default_noun_form())
    }

    /// Forma con el caso y el posesivo por defecto
    pub fn noun_form(&self, number: LanguageNumber, article: LanguageArticle) -> NounForm {
        self.approximate_noun_form(number, self.default_case(), self.default_possessive(), article)
    }

    pub fn exact_adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> Option<AdjectiveForm> {
        let candidate = Candidate {
            starts_with,
            gender,
            number,
            case,
            article,
            possessive,
        };
        self.adjective_domain
            .contains(&candidate)
            .then(|| candidate.adjective_form())
    }

    pub fn approximate_adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> AdjectiveForm {
        let request = Candidate {
            starts_with,
            gender,
            number,
            case,
            article,
            possessive,
        };
        let domain = &self.adjective_domain;
        if domain.contains(&request) {
            return request.adjective_form();
        }
        let resolved = resolution::resolve(
            self.clamp_request(domain, request),
            &domain.defaults(),
            resolution::ADJECTIVE_DROP_RULES,
            |axis| domain.supports(axis),
            |c| domain.contains(c).then(|| c.adjective_form()),
        );
        self.checked(resolved, "adjetivo", &request, self.default_adjective_form())
    }

    pub fn exact_article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        if !self.has_article() {
            return None;
        }
        let candidate = Candidate {
            starts_with,
            gender,
            number,
            case,
            ..self.article_domain.defaults()
        };
        self.article_domain
            .contains(&candidate)
            .then(|| candidate.article_form())
    }

    /// Forma de artículo: fuera de los ejes que el idioma no distingue, solo
    /// se renuncia al sonido inicial. `None` si tampoco así existe.
    pub fn approximate_article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        if !self.has_article() {
            return None;
        }
        let domain = &self.article_domain;
        let request = domain.clamp(Candidate {
            starts_with,
            gender,
            number,
            case,
            ..domain.defaults()
        });
        resolution::resolve(
            request,
            &domain.defaults(),
            resolution::ARTICLE_DROP_RULES,
            |axis| domain.supports(axis),
            |c| domain.contains(c).then(|| c.article_form()),
        )
    }

    fn checked<F: fmt::Display>(
        &self,
        resolved: Option<F>,
        kind: &str,
        request: &Candidate,
        fallback: F,
    ) -> F {
        debug_assert!(
            resolved.is_some(),
            "{}: la tabla de sustitución de {} no cubre {:?}",
            self.code(),
            kind,
            request
        );
        resolved.unwrap_or_else(|| {
            log::error!(
                "{}: ninguna forma de {} para {:?}; se usa {}",
                self.code(),
                kind,
                request,
                fallback
            );
            fallback
        })
    }

    // Tablas de sustitución

    pub fn noun_drop_rules(&self) -> &'static [DropRule] {
        resolution::NOUN_DROP_RULES
    }

    pub fn adjective_drop_rules(&self) -> &'static [DropRule] {
        resolution::ADJECTIVE_DROP_RULES
    }

    pub fn article_drop_rules(&self) -> &'static [DropRule] {
        resolution::ARTICLE_DROP_RULES
    }

    pub fn noun_defaulting_rules(&self) -> &'static [DropRule] {
        resolution::NOUN_DEFAULTING_RULES
    }

    pub fn adjective_defaulting_rules(&self) -> &'static [DropRule] {
        resolution::ADJECTIVE_DEFAULTING_RULES
    }

    pub fn article_defaulting_rules(&self) -> &'static [DropRule] {
        resolution::ARTICLE_DEFAULTING_RULES
    }

    /// Formas vecinas de una forma de sustantivo que falta, por prioridad
    pub(crate) fn noun_neighbors(&self, form: NounForm) -> Vec<NounForm> {
        let domain = &self.noun_domain;
        let missing = Candidate {
            starts_with: domain.defaults().starts_with,
            gender: domain.defaults().gender,
            ..Candidate::from(form)
        };
        resolution::neighbors(missing, &domain.defaults(), self.noun_defaulting_rules(), |axis| {
            domain.supports(axis)
        })
        .into_iter()
        .filter(|c| domain.contains(c))
        .map(|c| c.noun_form())
        .collect()
    }

    pub(crate) fn adjective_neighbors(&self, form: AdjectiveForm) -> Vec<AdjectiveForm> {
        let domain = &self.adjective_domain;
        resolution::neighbors(
            Candidate::from(form),
            &domain.defaults(),
            self.adjective_defaulting_rules(),
            |axis| domain.supports(axis),
        )
        .into_iter()
        .filter(|c| domain.contains(c))
        .map(|c| c.adjective_form())
        .collect()
    }

    pub(crate) fn article_neighbors(&self, form: ArticleForm) -> Vec<ArticleForm> {
        let domain = &self.article_domain;
        resolution::neighbors(
            Candidate::from(form),
            &domain.defaults(),
            self.article_defaulting_rules(),
            |axis| domain.supports(axis),
        )
        .into_iter()
        .filter(|c| domain.contains(c))
        .map(|c| c.article_form())
        .collect()
    }

    // Superficie

    /// Artículo que precede a un sustantivo en forma heredada
    pub fn default_article_string(
        &self,
        form: NounForm,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
    ) -> Option<&'static str> {
        let article_form =
            self.approximate_article_form(starts_with, gender, form.number(), form.case())?;
        self.language
            .default_article_string(article_form, form.article())
    }

    pub fn derive_starts_with(&self, value: &str) -> Option<LanguageStartsWith> {
        self.language.derive_starts_with(value)
    }

    pub fn derive_noun_string(&self, stem: &str, form: NounForm) -> Option<String> {
        self.language.derive_noun_string(stem, form)
    }

    pub fn lowercase_noun(&self, value: &str, form: NounForm) -> String {
        self.language.lowercase_noun(value, form)
    }

    /// Minúsculas para modificadores y textos sin forma de sustantivo
    pub fn lowercase(&self, value: &str) -> String {
        if self.has_capitalization() {
            value.to_lowercase()
        } else {
            value.to_string()
        }
    }

    /// Género válido para un sustantivo: el de por defecto si no existe
    pub fn normalize_gender(&self, gender: LanguageGender) -> LanguageGender {
        if self.required_genders().contains(&gender) {
            gender
        } else {
            self.default_gender()
        }
    }

    // Fábricas de términos

    pub fn create_noun(
        &'static self,
        name: &str,
        noun_type: NounType,
        entity: Option<&str>,
        gender: LanguageGender,
        starts_with: LanguageStartsWith,
    ) -> Noun {
        Noun::new(self, name, noun_type, entity, gender, starts_with)
    }

    pub fn create_adjective(
        &'static self,
        name: &str,
        starts_with: LanguageStartsWith,
        position: LanguagePosition,
    ) -> Adjective {
        Adjective::new(self, name, starts_with, position)
    }

    pub fn create_article(
        &'static self,
        name: &str,
        article_type: LanguageArticle,
    ) -> Result<Article> {
        if !self.has_article() {
            return Err(GrammarError::UnsupportedLanguage {
                code: format!("{} (sin artículos)", self.code()),
            });
        }
        Ok(Article::new(self, name, article_type))
    }
}

fn registry() -> &'static HashMap<String, Declension> {
    static REGISTRY: OnceLock<HashMap<String, Declension>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        for code in SUPPORTED_LANGUAGES {
            if let Some(language) = get_language(code) {
                map.insert(code.to_string(), Declension::new(language));
            }
        }
        map
    })
}

/// Declinación registrada para un idioma o locale
pub fn try_declension_for(code: &str) -> Result<&'static Declension> {
    registry()
        .get(&canonical_code(code))
        .ok_or_else(|| GrammarError::UnsupportedLanguage {
            code: code.to_string(),
        })
}

/// Declinación para un idioma o locale; los desconocidos usan la simple
pub fn declension_for(code: &str) -> &'static Declension {
    try_declension_for(code).unwrap_or_else(|_| {
        log::debug!("idioma '{}' sin declinación propia; se usa la simple", code);
        simple_declension()
    })
}

fn simple_declension() -> &'static Declension {
    static SIMPLE: OnceLock<Declension> = OnceLock::new();
    SIMPLE.get_or_init(|| Declension::new(Box::new(Simple::new(UNDETERMINED))))
}
