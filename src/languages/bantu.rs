//! Lenguas bantúes: suajili, zulú y xhosa
//!
//! El género es la clase nominal. Cada clase agrupa el singular y su
//! plural, de modo que `<value gender="Ki-vi" plural="y">` es la forma
//! plural de la clase VII ("vi-"). Los adjetivos concuerdan en clase y
//! número; no hay casos ni artículos.

use crate::grammar::{LanguageGender, LanguagePosition};
use crate::languages::Language;

use LanguageGender::*;

const SWAHILI_CLASSES: &[LanguageGender] = &[
    ClassI, ClassIII, ClassV, ClassVII, ClassIX, ClassXI, ClassXVI, ClassXVII, ClassXVIII,
];

const NGUNI_CLASSES: &[LanguageGender] = &[
    ClassI, ClassIII, ClassV, ClassVII, ClassIX, ClassXI, ClassXIV, ClassXV, ClassXVII,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BantuLanguage {
    Swahili,
    Zulu,
    Xhosa,
}

pub struct Bantu {
    variant: BantuLanguage,
}

impl Bantu {
    pub fn new(variant: BantuLanguage) -> Self {
        Self { variant }
    }
}

impl Language for Bantu {
    fn code(&self) -> &str {
        match self.variant {
            BantuLanguage::Swahili => "sw",
            BantuLanguage::Zulu => "zu",
            BantuLanguage::Xhosa => "xh",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            BantuLanguage::Swahili => "Kiswahili",
            BantuLanguage::Zulu => "isiZulu",
            BantuLanguage::Xhosa => "isiXhosa",
        }
    }

    fn has_gender(&self) -> bool {
        true
    }

    /// Las nguni (zulú y xhosa) usan las clases XIV y XV en lugar de XVI y XVIII
    fn required_genders(&self) -> &'static [LanguageGender] {
        match self.variant {
            BantuLanguage::Swahili => SWAHILI_CLASSES,
            BantuLanguage::Zulu | BantuLanguage::Xhosa => NGUNI_CLASSES,
        }
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_classes() {
        let sw = Bantu::new(BantuLanguage::Swahili);
        assert_eq!(sw.default_gender(), ClassI);
        assert!(sw.required_genders().contains(&ClassXVIII));
        let zu = Bantu::new(BantuLanguage::Zulu);
        assert!(zu.required_genders().contains(&ClassXIV));
        assert!(!zu.required_genders().contains(&ClassXVI));
        assert_eq!(LanguageGender::from_label_value("Ki-vi"), Some(ClassVII));
    }
}
