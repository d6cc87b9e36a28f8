//! Lenguas con clasificadores: sin plural gramatical, el recuento lleva un
//! clasificador ("3つ", "3个").

use crate::grammar::PluralRule;
use crate::languages::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierLanguage {
    Japanese,
    ChineseSimplified,
    ChineseTraditional,
    Vietnamese,
    Malay,
    Indonesian,
    Thai,
}

pub struct Classifier {
    variant: ClassifierLanguage,
}

impl Classifier {
    pub fn new(variant: ClassifierLanguage) -> Self {
        Self { variant }
    }

    fn uses_latin_script(&self) -> bool {
        matches!(
            self.variant,
            ClassifierLanguage::Vietnamese | ClassifierLanguage::Malay | ClassifierLanguage::Indonesian
        )
    }
}

impl Language for Classifier {
    fn code(&self) -> &str {
        match self.variant {
            ClassifierLanguage::Japanese => "ja",
            ClassifierLanguage::ChineseSimplified => "zh",
            ClassifierLanguage::ChineseTraditional => "zh_TW",
            ClassifierLanguage::Vietnamese => "vi",
            ClassifierLanguage::Malay => "ms",
            ClassifierLanguage::Indonesian => "id",
            ClassifierLanguage::Thai => "th",
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            ClassifierLanguage::Japanese => "日本語",
            ClassifierLanguage::ChineseSimplified => "简体中文",
            ClassifierLanguage::ChineseTraditional => "繁體中文",
            ClassifierLanguage::Vietnamese => "Tiếng Việt",
            ClassifierLanguage::Malay => "Bahasa Melayu",
            ClassifierLanguage::Indonesian => "Bahasa Indonesia",
            ClassifierLanguage::Thai => "ไทย",
        }
    }

    fn has_plural(&self) -> bool {
        false
    }

    fn has_capitalization(&self) -> bool {
        self.uses_latin_script()
    }

    fn has_word_spaces(&self) -> bool {
        self.uses_latin_script()
    }

    fn default_classifier(&self) -> Option<&'static str> {
        Some(match self.variant {
            ClassifierLanguage::Japanese => "つ",
            ClassifierLanguage::ChineseSimplified => "个",
            ClassifierLanguage::ChineseTraditional => "個",
            ClassifierLanguage::Vietnamese => "cái",
            ClassifierLanguage::Malay | ClassifierLanguage::Indonesian => "buah",
            ClassifierLanguage::Thai => "อัน",
        })
    }

    fn plural_rule(&self) -> PluralRule {
        PluralRule::None
    }
}
