//! Coreano
//!
//! Las partículas se tratan como adjetivos pospuestos cuya forma depende de
//! cómo termina la palabra anterior: sílaba abierta (vocal), con batchim
//! (consonante) o con batchim ㄹ (especial), p. ej. 을/를, 으로/로.

use crate::grammar::{LanguagePosition, LanguageStartsWith, PluralRule};
use crate::languages::Language;

const HANGUL_FIRST: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const FINAL_CONSONANTS: u32 = 28;
/// Índice del batchim ㄹ dentro de la sílaba
const FINAL_RIEUL: u32 = 8;

pub struct Korean;

impl Korean {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Korean {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Korean {
    fn code(&self) -> &str {
        "ko"
    }

    fn name(&self) -> &str {
        "한국어"
    }

    fn has_plural(&self) -> bool {
        false
    }

    fn has_ends_with(&self) -> bool {
        true
    }

    fn has_capitalization(&self) -> bool {
        false
    }

    fn required_starts_with(&self) -> &'static [LanguageStartsWith] {
        &[
            LanguageStartsWith::Consonant,
            LanguageStartsWith::Vowel,
            LanguageStartsWith::Special,
        ]
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Post
    }

    fn default_classifier(&self) -> Option<&'static str> {
        Some("개")
    }

    fn plural_rule(&self) -> PluralRule {
        PluralRule::None
    }

    /// Clasifica la última sílaba (o jamo) del texto
    fn derive_starts_with(&self, value: &str) -> Option<LanguageStartsWith> {
        let last = value.trim_end().chars().last()? as u32;
        match last {
            HANGUL_FIRST..=HANGUL_LAST => Some(match (last - HANGUL_FIRST) % FINAL_CONSONANTS {
                0 => LanguageStartsWith::Vowel,
                FINAL_RIEUL => LanguageStartsWith::Special,
                _ => LanguageStartsWith::Consonant,
            }),
            // Jamo de vocal medial
            0x1161..=0x11A2 => Some(LanguageStartsWith::Vowel),
            0x11AF => Some(LanguageStartsWith::Special),
            0x11A8..=0x11FF => Some(LanguageStartsWith::Consonant),
            _ => None,
        }
    }
}
