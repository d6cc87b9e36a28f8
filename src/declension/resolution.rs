//! Tablas de sustitución de categorías
//!
//! Cuando una combinación de categorías no existe, se sustituye un eje por
//! su valor por defecto y se vuelve a buscar; solo si ningún eje suelto
//! basta se sustituyen varios a la vez. El orden de los ejes es un
//! dato de cada tipo de término y se recorre con [`resolve`]; la validación
//! usa las tablas de vecinos con [`neighbors`], que cambian un solo eje a la
//! vez respecto a la forma que falta.

use crate::grammar::{
    AdjectiveForm, ArticleForm, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber,
    LanguagePossessive, LanguageStartsWith, NounForm,
};

/// Eje gramatical de una forma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    StartsWith,
    Gender,
    Number,
    Case,
    Article,
    Possessive,
}

/// Paso de una tabla de sustitución
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRule {
    /// Pone el valor por defecto en un eje que el tipo de término no distingue
    Unsupported(Axis),
    /// Pone el valor por defecto en un eje que sí distingue
    Supported(Axis),
    /// Cambia el número pedido
    Number {
        from: LanguageNumber,
        to: LanguageNumber,
    },
}

/// Combinación completa de valores que se está probando
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub starts_with: LanguageStartsWith,
    pub gender: LanguageGender,
    pub number: LanguageNumber,
    pub case: LanguageCase,
    pub article: LanguageArticle,
    pub possessive: LanguagePossessive,
}

impl Candidate {
    /// Copia el valor de `axis` desde `other`
    pub fn with_axis_from(mut self, axis: Axis, other: &Candidate) -> Candidate {
        match axis {
            Axis::StartsWith => self.starts_with = other.starts_with,
            Axis::Gender => self.gender = other.gender,
            Axis::Number => self.number = other.number,
            Axis::Case => self.case = other.case,
            Axis::Article => self.article = other.article,
            Axis::Possessive => self.possessive = other.possessive,
        }
        self
    }

    pub fn differs(&self, axis: Axis, other: &Candidate) -> bool {
        match axis {
            Axis::StartsWith => self.starts_with != other.starts_with,
            Axis::Gender => self.gender != other.gender,
            Axis::Number => self.number != other.number,
            Axis::Case => self.case != other.case,
            Axis::Article => self.article != other.article,
            Axis::Possessive => self.possessive != other.possessive,
        }
    }

    pub(crate) fn noun_form(&self) -> NounForm {
        NounForm::new(self.number, self.case, self.possessive, self.article)
    }

    pub(crate) fn adjective_form(&self) -> AdjectiveForm {
        AdjectiveForm::new(
            self.starts_with,
            self.gender,
            self.number,
            self.case,
            self.article,
            self.possessive,
        )
    }

    pub(crate) fn article_form(&self) -> ArticleForm {
        ArticleForm::new(self.starts_with, self.gender, self.number, self.case)
    }
}

impl From<NounForm> for Candidate {
    fn from(form: NounForm) -> Self {
        let base = form.base();
        Candidate {
            starts_with: LanguageStartsWith::Consonant,
            gender: LanguageGender::Neuter,
            number: base.number(),
            case: base.case(),
            article: base.article(),
            possessive: base.possessive(),
        }
    }
}

impl From<AdjectiveForm> for Candidate {
    fn from(form: AdjectiveForm) -> Self {
        Candidate {
            starts_with: form.starts_with(),
            gender: form.gender(),
            number: form.number(),
            case: form.case(),
            article: form.article(),
            possessive: form.possessive(),
        }
    }
}

impl From<ArticleForm> for Candidate {
    fn from(form: ArticleForm) -> Self {
        Candidate {
            starts_with: form.starts_with(),
            gender: form.gender(),
            number: form.number(),
            case: form.case(),
            article: LanguageArticle::Zero,
            possessive: LanguagePossessive::None,
        }
    }
}

use Axis::*;
use LanguageNumber::{Dual, Plural, Singular};

/// Sustantivos: primero los ejes que no se distinguen, después los que sí,
/// y al final el número
pub const NOUN_DROP_RULES: &[DropRule] = &[
    DropRule::Unsupported(Number),
    DropRule::Unsupported(Possessive),
    DropRule::Unsupported(Article),
    DropRule::Unsupported(Case),
    DropRule::Supported(Possessive),
    DropRule::Supported(Article),
    DropRule::Supported(Case),
    DropRule::Number { from: Dual, to: Plural },
    DropRule::Number { from: Plural, to: Singular },
];

/// Adjetivos: el caso se abandona antes que el género (alemán)
pub const ADJECTIVE_DROP_RULES: &[DropRule] = &[
    DropRule::Unsupported(Number),
    DropRule::Unsupported(Possessive),
    DropRule::Unsupported(Article),
    DropRule::Unsupported(StartsWith),
    DropRule::Unsupported(Gender),
    DropRule::Unsupported(Case),
    DropRule::Supported(Possessive),
    DropRule::Supported(Article),
    DropRule::Supported(StartsWith),
    DropRule::Supported(Gender),
    DropRule::Supported(Case),
    DropRule::Number { from: Dual, to: Plural },
    DropRule::Number { from: Plural, to: Singular },
];

/// Artículos: fuera de los ejes no distinguidos, solo cede el sonido
pub const ARTICLE_DROP_RULES: &[DropRule] = &[
    DropRule::Unsupported(Number),
    DropRule::Unsupported(Gender),
    DropRule::Unsupported(Case),
    DropRule::Unsupported(StartsWith),
    DropRule::Supported(StartsWith),
];

pub const NOUN_DEFAULTING_RULES: &[DropRule] = &[
    DropRule::Supported(Possessive),
    DropRule::Supported(Article),
    DropRule::Supported(Case),
    DropRule::Number { from: Plural, to: Singular },
    DropRule::Number { from: Dual, to: Plural },
    DropRule::Number { from: Singular, to: Plural },
];

pub const ADJECTIVE_DEFAULTING_RULES: &[DropRule] = &[
    DropRule::Supported(Article),
    DropRule::Supported(StartsWith),
    DropRule::Supported(Case),
    DropRule::Supported(Possessive),
    DropRule::Supported(Gender),
    DropRule::Number { from: Plural, to: Singular },
    DropRule::Number { from: Dual, to: Plural },
];

pub const ARTICLE_DEFAULTING_RULES: &[DropRule] = &[
    DropRule::Supported(StartsWith),
    DropRule::Supported(Gender),
    DropRule::Supported(Case),
    DropRule::Number { from: Plural, to: Singular },
    DropRule::Number { from: Dual, to: Singular },
];

/// Aplica un paso a `current`; `None` si el paso no corresponde
fn apply(
    rule: DropRule,
    current: &Candidate,
    defaults: &Candidate,
    supports: &impl Fn(Axis) -> bool,
) -> Option<Candidate> {
    let next = match rule {
        DropRule::Unsupported(axis) if !supports(axis) => current.with_axis_from(axis, defaults),
        DropRule::Supported(axis) if supports(axis) => current.with_axis_from(axis, defaults),
        DropRule::Number { from, to } if current.number == from => Candidate {
            number: to,
            ..*current
        },
        _ => return None,
    };
    (next != *current).then_some(next)
}

/// Búsqueda de `request` ya recortado al dominio.
///
/// Primero se prueba cada paso de `rules` por separado sobre la petición,
/// de modo que solo se pierde un eje. Si ninguno basta, los pasos se
/// acumulan en el mismo orden; una tabla que pasa por todos los ejes
/// termina en la forma por defecto.
pub fn resolve<T>(
    request: Candidate,
    defaults: &Candidate,
    rules: &[DropRule],
    supports: impl Fn(Axis) -> bool,
    lookup: impl Fn(&Candidate) -> Option<T>,
) -> Option<T> {
    if let Some(found) = lookup(&request) {
        return Some(found);
    }
    for rule in rules {
        if let Some(next) = apply(*rule, &request, defaults, &supports) {
            if let Some(found) = lookup(&next) {
                log::trace!("{:?}: {:?} -> {:?}", rule, request, next);
                return Some(found);
            }
        }
    }
    let mut current = request;
    for rule in rules {
        if let Some(next) = apply(*rule, &current, defaults, &supports) {
            log::trace!("{:?}: {:?} -> {:?} (acumulado)", rule, current, next);
            current = next;
            if let Some(found) = lookup(&current) {
                return Some(found);
            }
        }
    }
    None
}

/// Vecinos de `missing` que difieren en un único eje, en el orden de `rules`
pub fn neighbors(
    missing: Candidate,
    defaults: &Candidate,
    rules: &[DropRule],
    supports: impl Fn(Axis) -> bool,
) -> Vec<Candidate> {
    let mut result = Vec::new();
    for rule in rules {
        if let Some(next) = apply(*rule, &missing, defaults, &supports) {
            if !result.contains(&next) {
                result.push(next);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Candidate {
        Candidate {
            starts_with: LanguageStartsWith::Consonant,
            gender: LanguageGender::Feminine,
            number: Singular,
            case: LanguageCase::Nominative,
            article: LanguageArticle::Zero,
            possessive: LanguagePossessive::None,
        }
    }

    #[test]
    fn test_resolve_drops_cumulatively() {
        let request = Candidate {
            case: LanguageCase::Genitive,
            possessive: LanguagePossessive::First,
            number: Plural,
            ..defaults()
        };
        // Solo existe la forma por defecto
        let found = resolve(request, &defaults(), NOUN_DROP_RULES, |_| true, |c| {
            (*c == defaults()).then_some("ok")
        });
        assert_eq!(found, Some("ok"));
    }

    #[test]
    fn test_resolve_stops_at_first_match() {
        let request = Candidate {
            case: LanguageCase::Genitive,
            possessive: LanguagePossessive::First,
            ..defaults()
        };
        let tried = std::cell::RefCell::new(Vec::new());
        let found = resolve(request, &defaults(), NOUN_DROP_RULES, |_| true, |c| {
            tried.borrow_mut().push(*c);
            (c.possessive == LanguagePossessive::None).then_some(c.case)
        });
        // El posesivo cae antes que el caso
        assert_eq!(found, Some(LanguageCase::Genitive));
        assert_eq!(tried.borrow().len(), 2);
    }

    #[test]
    fn test_single_axis_before_cumulative() {
        let request = Candidate {
            case: LanguageCase::Genitive,
            possessive: LanguagePossessive::First,
            ..defaults()
        };
        // Existen el nominativo con posesivo y la forma por defecto
        let found = resolve(request, &defaults(), NOUN_DROP_RULES, |_| true, |c| {
            (c.case == LanguageCase::Nominative).then_some(c.possessive)
        });
        assert_eq!(found, Some(LanguagePossessive::First));
    }

    #[test]
    fn test_unsupported_axes_drop_first() {
        let request = Candidate {
            gender: LanguageGender::Masculine,
            case: LanguageCase::Dative,
            ..defaults()
        };
        let supports = |axis| axis == Case;
        let found = resolve(request, &defaults(), ADJECTIVE_DROP_RULES, supports, |c| {
            (c.gender == LanguageGender::Feminine).then_some(c.case)
        });
        assert_eq!(found, Some(LanguageCase::Dative));
    }

    #[test]
    fn test_article_rules_only_drop_sound() {
        let request = Candidate {
            starts_with: LanguageStartsWith::Vowel,
            case: LanguageCase::Dative,
            ..defaults()
        };
        let found = resolve(request, &defaults(), ARTICLE_DROP_RULES, |_| true, |c| {
            (c.case == LanguageCase::Nominative).then_some(())
        });
        assert_eq!(found, None);
    }

    #[test]
    fn test_neighbors_change_one_axis() {
        let missing = Candidate {
            number: Plural,
            case: LanguageCase::Genitive,
            ..defaults()
        };
        let list = neighbors(missing, &defaults(), NOUN_DEFAULTING_RULES, |_| true);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].case, LanguageCase::Nominative);
        assert_eq!(list[0].number, Plural);
        assert_eq!(list[1].number, Singular);
        assert_eq!(list[1].case, LanguageCase::Genitive);
    }
}
