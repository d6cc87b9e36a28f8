//! Agrupación en frases nominales
//!
//! Una frase es `[artículo] [adjetivo]* sustantivo [adjetivo]*`. Se recorre
//! la lista de izquierda a derecha para delimitar las frases y después se
//! liga cada modificador a su sustantivo y al término contiguo que decide
//! su concordancia fonética: el siguiente en los idiomas que miran la
//! inicial, el anterior en los que miran la terminación.

use std::mem;

use crate::dictionary::LanguageDictionary;
use crate::grammar::{LanguageArticle, LanguageCase, LanguagePosition};
use crate::render::{LabelToken, ModifierKind, ModifierRefTag};
use crate::terms::GrammaticalTerm;

/// Posiciones de una frase dentro de la lista de tokens
#[derive(Debug, Default)]
struct NounPhrase {
    noun: Option<usize>,
    article: Option<usize>,
    adjectives: Vec<usize>,
    choices: Vec<usize>,
}

impl NounPhrase {
    fn has_noun(&self) -> bool {
        self.noun.is_some()
    }
}

/// Cierra la frase en curso si ya tiene sustantivo
fn demarcate(phrases: &mut Vec<NounPhrase>, current: &mut NounPhrase) {
    if current.has_noun() {
        phrases.push(mem::take(current));
    }
}

/// Liga artículos, adjetivos y elecciones al sustantivo de su frase.
///
/// Una lista de un solo token no se toca. Si ningún token es un sustantivo,
/// los modificadores quedan sin ligar y se renderizan vacíos.
pub(crate) fn assign_noun_phrases(
    dict: &LanguageDictionary,
    mut tokens: Vec<LabelToken>,
    context: &str,
) -> Vec<LabelToken> {
    if tokens.len() < 2 {
        return tokens;
    }
    let decl = dict.declension();

    let mut phrases: Vec<NounPhrase> = Vec::new();
    let mut current = NounPhrase::default();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            LabelToken::Noun(_) => {
                demarcate(&mut phrases, &mut current);
                current.noun = Some(i);
            }
            LabelToken::Modifier(tag) if tag.kind() == ModifierKind::Article => {
                demarcate(&mut phrases, &mut current);
                current.article = Some(i);
            }
            LabelToken::Modifier(tag) => {
                let adjective = dict.get_adjective(tag.name());
                let position = tag
                    .attributes()
                    .position
                    .or_else(|| adjective.as_ref().map(|a| a.position()))
                    .unwrap_or_else(|| decl.default_adjective_position());
                if position == LanguagePosition::Pre {
                    demarcate(&mut phrases, &mut current);
                }
                if adjective.is_some_and(|a| a.is_copied_from_default()) {
                    log::warn!(
                        "{}: el adjetivo '{}' se copió del idioma por defecto",
                        context,
                        tag.name()
                    );
                }
                current.adjectives.push(i);
            }
            LabelToken::Counter(_) | LabelToken::Gender(_) => {
                demarcate(&mut phrases, &mut current);
                current.choices.push(i);
            }
            LabelToken::Text(_) | LabelToken::Plural(_) => {}
        }
    }

    if current.has_noun() {
        phrases.push(current);
    } else {
        let count = phrases.len();
        let Some(last) = phrases.last_mut() else {
            log::warn!("{}: modificador sin sustantivo", context);
            return tokens;
        };
        // Adjetivo colgante, como en `<Tasks/> (<Open/>)`
        if count > 1 {
            log::warn!(
                "{}: adjetivo antepuesto usado tras el sustantivo; se liga al último",
                context
            );
        }
        last.adjectives.extend(current.adjectives);
        last.choices.extend(current.choices);
    }

    let ends_with = decl.has_ends_with();
    for phrase in &phrases {
        fix_phrase(dict, &mut tokens, phrase, ends_with);
    }
    tokens
}

fn modifier_at(tokens: &[LabelToken], index: usize) -> Option<&ModifierRefTag> {
    tokens.get(index).and_then(LabelToken::as_modifier).map(|m| m.as_ref())
}

/// Sustituye el modificador en `index` si aún no estaba ligado
fn attach(
    tokens: &mut [LabelToken],
    index: usize,
    noun: usize,
    next: usize,
    article: Option<LanguageArticle>,
) {
    if let Some(tag) = modifier_at(tokens, index) {
        if tag.noun_index().is_none() {
            let fixed = tag.attached(noun, next, article);
            tokens[index] = LabelToken::Modifier(fixed);
        }
    }
}

fn fix_phrase(
    dict: &LanguageDictionary,
    tokens: &mut [LabelToken],
    phrase: &NounPhrase,
    ends_with: bool,
) {
    let decl = dict.declension();
    let Some(noun) = phrase.noun else {
        return;
    };
    let adjectives = &phrase.adjectives;

    // Artículo
    let mut article_type = None;
    if let Some(article_index) = phrase.article {
        article_type = modifier_at(tokens, article_index)
            .and_then(|tag| dict.get_article(tag.name()))
            .map(|a| a.article_type());

        if decl.should_infer_noun_def_article_from_particle()
            && article_type == Some(LanguageArticle::Definite)
        {
            if let Some(tag) = tokens[noun].as_noun() {
                let articled = tag.make_articled(decl, LanguageArticle::Definite);
                tokens[noun] = LabelToken::Noun(articled);
            }
        }

        let nearest = if ends_with {
            adjectives.last()
        } else {
            adjectives.first()
        };
        let next = match nearest {
            Some(&adjective) if adjective < noun => adjective,
            _ => noun,
        };
        attach(tokens, article_index, noun, next, None);
    }

    // Flexión del sustantivo trasladada al primer modificador
    if decl.move_noun_inflection_to_first_modifier() {
        if let (Some(&first), Some(tag)) = (adjectives.first(), tokens[noun].as_noun().cloned()) {
            let form = tag.form();
            if form.article() != LanguageArticle::Zero || form.case() != LanguageCase::Nominative {
                tokens[noun] = LabelToken::Noun(tag.make_uninflected(decl));
                if let Some(adjective) = modifier_at(tokens, first) {
                    if adjective.noun_index().is_none() {
                        let moved = adjective
                            .with_attributes(adjective.attributes().override_from_noun_form(form))
                            .attached(noun, noun, None);
                        tokens[first] = LabelToken::Modifier(moved);
                    }
                }
            }
        }
    }

    // Adjetivos
    let count = adjectives.len();
    for step in 0..count {
        let i = if ends_with { count - 1 - step } else { step };
        let next = if ends_with {
            match i.checked_sub(1).map(|p| adjectives[p]) {
                Some(previous) if previous > noun => previous,
                _ => noun,
            }
        } else {
            match adjectives.get(i + 1) {
                Some(&following) if following < noun => following,
                _ => noun,
            }
        };
        attach(tokens, adjectives[i], noun, next, article_type);
    }

    // Elecciones
    for &choice in &phrase.choices {
        match &mut tokens[choice] {
            LabelToken::Counter(tag) => tag.noun = Some(noun),
            LabelToken::Gender(tag) => tag.noun = Some(noun),
            _ => {}
        }
    }
}
