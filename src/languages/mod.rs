//! Soporte para múltiples idiomas
//!
//! Cada idioma describe qué categorías gramaticales distingue y cuáles son
//! sus valores por defecto. Los métodos por defecto del trait corresponden a
//! un idioma "simple": sin género, sin casos, con plural, solo nominativo,
//! adjetivos antepuestos y con mayúsculas.

pub mod arabic;
pub mod bantu;
pub mod basque;
pub mod classifier;
pub mod english;
pub mod germanic;
pub mod korean;
pub mod romance;
pub mod simple;
pub mod slavic;
pub mod turkish;
pub mod uralic;

use crate::grammar::{
    ArticleForm, LanguageArticle, LanguageCase, LanguageGender, LanguagePosition,
    LanguagePossessive, LanguageStartsWith, NounForm, PluralRule,
};

/// Trait que define las capacidades gramaticales de un idioma
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "fr", "zh_TW")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    fn has_gender(&self) -> bool {
        false
    }

    fn has_plural(&self) -> bool {
        true
    }

    fn has_dual(&self) -> bool {
        false
    }

    /// ¿Tiene artículos (en el sustantivo o como palabra aparte)?
    fn has_article(&self) -> bool {
        false
    }

    /// ¿Flexiona el sustantivo según el artículo (sueco "kontot")?
    fn has_article_in_noun_form(&self) -> bool {
        false
    }

    /// ¿Los modificadores dependen del sonido inicial de la palabra siguiente?
    fn has_starts_with(&self) -> bool {
        false
    }

    /// ¿Los modificadores dependen del sonido final de la palabra anterior?
    fn has_ends_with(&self) -> bool {
        false
    }

    fn has_possessive(&self) -> bool {
        false
    }

    fn has_possessive_in_adjective(&self) -> bool {
        false
    }

    fn has_capitalization(&self) -> bool {
        true
    }

    /// ¿Separa las palabras con espacios?
    fn has_word_spaces(&self) -> bool {
        true
    }

    /// Casos que todo sustantivo debe definir
    fn required_cases(&self) -> &'static [LanguageCase] {
        &[LanguageCase::Nominative]
    }

    /// Casos admitidos en las formas; el primero es el caso por defecto
    fn allowed_cases(&self) -> &'static [LanguageCase] {
        self.required_cases()
    }

    /// Géneros admitidos; el primero es el género por defecto
    fn required_genders(&self) -> &'static [LanguageGender] {
        &[LanguageGender::Neuter]
    }

    fn required_starts_with(&self) -> &'static [LanguageStartsWith] {
        &[LanguageStartsWith::Consonant]
    }

    fn allowed_possessives(&self) -> &'static [LanguagePossessive] {
        &[LanguagePossessive::None]
    }

    /// Artículos que se pueden pedir en una plantilla
    fn allowed_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero]
    }

    /// Artículos que forman parte de la forma del sustantivo
    fn noun_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero]
    }

    /// Artículos que cambian la forma del adjetivo (alemán: fuerte/débil)
    fn adjective_article_types(&self) -> &'static [LanguageArticle] {
        &[LanguageArticle::Zero]
    }

    fn default_gender(&self) -> LanguageGender {
        self.required_genders()
            .first()
            .copied()
            .unwrap_or(LanguageGender::Neuter)
    }

    fn default_starts_with(&self) -> LanguageStartsWith {
        LanguageStartsWith::Consonant
    }

    fn default_case(&self) -> LanguageCase {
        LanguageCase::Nominative
    }

    fn default_article(&self) -> LanguageArticle {
        LanguageArticle::Zero
    }

    fn default_possessive(&self) -> LanguagePossessive {
        LanguagePossessive::None
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        LanguagePosition::Pre
    }

    /// Un artículo definido suelto marca al sustantivo como definido
    fn should_infer_noun_def_article_from_particle(&self) -> bool {
        false
    }

    /// La flexión del sustantivo pasa a su primer modificador (búlgaro)
    fn move_noun_inflection_to_first_modifier(&self) -> bool {
        false
    }

    /// Clasificador por defecto para `<counter/>`
    fn default_classifier(&self) -> Option<&'static str> {
        None
    }

    fn plural_rule(&self) -> PluralRule {
        PluralRule::English
    }

    /// Artículo que se antepone a un sustantivo con forma heredada
    fn default_article_string(
        &self,
        _form: ArticleForm,
        _article: LanguageArticle,
    ) -> Option<&'static str> {
        None
    }

    /// Clasificación fonética deducida del propio texto del sustantivo
    fn derive_starts_with(&self, _value: &str) -> Option<LanguageStartsWith> {
        None
    }

    /// Genera la superficie de una forma que no está almacenada a partir del
    /// nominativo singular
    fn derive_noun_string(&self, _stem: &str, _form: NounForm) -> Option<String> {
        None
    }

    /// Pasa a minúsculas un sustantivo escrito en minúscula en la plantilla
    fn lowercase_noun(&self, value: &str, _form: NounForm) -> String {
        if self.has_capitalization() {
            value.to_lowercase()
        } else {
            value.to_string()
        }
    }
}

/// Pasa a minúscula solo la primera letra
pub(crate) fn lowercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normaliza un código de idioma o de locale a la clave del registro:
/// "pt_BR" → "pt", "zh-TW" → "zh_TW"
pub fn canonical_code(code: &str) -> String {
    let normalized = code.trim().replace('-', "_");
    let mut parts = normalized.split('_');
    let base = parts.next().unwrap_or("").to_lowercase();
    let region = parts.next().map(|r| r.to_uppercase());
    match (base.as_str(), region.as_deref()) {
        ("zh", Some("TW" | "HK" | "MO" | "HANT")) => "zh_TW".to_string(),
        ("nb" | "nn", _) => "no".to_string(),
        ("in", _) => "id".to_string(),
        _ => base,
    }
}

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    use bantu::{Bantu, BantuLanguage};
    use classifier::{Classifier, ClassifierLanguage};
    use germanic::{Dutch, German, Nordic, NordicLanguage};
    use romance::{Romance, RomanceLanguage};
    use slavic::{Bulgarian, Slavic, SlavicLanguage};
    use uralic::{Uralic, UralicLanguage};

    let language: Box<dyn Language> = match canonical_code(code).as_str() {
        "en" => Box::new(english::English::new()),
        "es" => Box::new(Romance::new(RomanceLanguage::Spanish)),
        "pt" => Box::new(Romance::new(RomanceLanguage::Portuguese)),
        "ca" => Box::new(Romance::new(RomanceLanguage::Catalan)),
        "it" => Box::new(Romance::new(RomanceLanguage::Italian)),
        "fr" => Box::new(Romance::new(RomanceLanguage::French)),
        "ro" => Box::new(Romance::new(RomanceLanguage::Romanian)),
        "de" => Box::new(German::new()),
        "nl" => Box::new(Dutch::new()),
        "sv" => Box::new(Nordic::new(NordicLanguage::Swedish)),
        "da" => Box::new(Nordic::new(NordicLanguage::Danish)),
        "no" => Box::new(Nordic::new(NordicLanguage::Norwegian)),
        "is" => Box::new(Nordic::new(NordicLanguage::Icelandic)),
        "ru" => Box::new(Slavic::new(SlavicLanguage::Russian)),
        "uk" => Box::new(Slavic::new(SlavicLanguage::Ukrainian)),
        "pl" => Box::new(Slavic::new(SlavicLanguage::Polish)),
        "cs" => Box::new(Slavic::new(SlavicLanguage::Czech)),
        "bg" => Box::new(Bulgarian::new()),
        "tr" => Box::new(turkish::Turkish::new()),
        "fi" => Box::new(Uralic::new(UralicLanguage::Finnish)),
        "et" => Box::new(Uralic::new(UralicLanguage::Estonian)),
        "hu" => Box::new(Uralic::new(UralicLanguage::Hungarian)),
        "eu" => Box::new(basque::Basque::new()),
        "sw" => Box::new(Bantu::new(BantuLanguage::Swahili)),
        "zu" => Box::new(Bantu::new(BantuLanguage::Zulu)),
        "xh" => Box::new(Bantu::new(BantuLanguage::Xhosa)),
        "ar" => Box::new(arabic::Arabic::new()),
        "ko" => Box::new(korean::Korean::new()),
        "ja" => Box::new(Classifier::new(ClassifierLanguage::Japanese)),
        "zh" => Box::new(Classifier::new(ClassifierLanguage::ChineseSimplified)),
        "zh_TW" => Box::new(Classifier::new(ClassifierLanguage::ChineseTraditional)),
        "vi" => Box::new(Classifier::new(ClassifierLanguage::Vietnamese)),
        "ms" => Box::new(Classifier::new(ClassifierLanguage::Malay)),
        "id" => Box::new(Classifier::new(ClassifierLanguage::Indonesian)),
        "th" => Box::new(Classifier::new(ClassifierLanguage::Thai)),
        _ => return None,
    };
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_code() {
        assert_eq!(canonical_code("pt_BR"), "pt");
        assert_eq!(canonical_code("fr-CA"), "fr");
        assert_eq!(canonical_code("zh_tw"), "zh_TW");
        assert_eq!(canonical_code("zh-HK"), "zh_TW");
        assert_eq!(canonical_code("zh_CN"), "zh");
        assert_eq!(canonical_code("nb"), "no");
        assert_eq!(canonical_code(" DE "), "de");
    }

    #[test]
    fn test_get_language_known_and_unknown() {
        assert_eq!(get_language("fr_CA").map(|l| l.code().to_string()), Some("fr".to_string()));
        assert!(get_language("xx").is_none());
        assert!(get_language("ko").is_some_and(|l| l.has_ends_with()));
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("Konto"), "konto");
        assert_eq!(lowercase_first("Élan Vital"), "élan Vital");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_defaults_come_first() {
        for code in [
            "en", "fr", "de", "sv", "ru", "bg", "tr", "ar", "ko", "ja", "fi", "hu", "eu", "sw",
        ] {
            let lang = get_language(code).expect("idioma registrado");
            assert_eq!(lang.allowed_cases()[0], lang.default_case(), "{}", code);
            assert_eq!(lang.required_genders()[0], lang.default_gender(), "{}", code);
            assert_eq!(
                lang.required_starts_with()[0],
                lang.default_starts_with(),
                "{}",
                code
            );
            assert_eq!(lang.noun_article_types()[0], lang.default_article(), "{}", code);
        }
    }
}
