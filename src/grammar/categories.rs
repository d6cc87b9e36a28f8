//! Categorías gramaticales
//!
//! Conjuntos cerrados (número, caso, género, sonido inicial, artículo,
//! posesivo, posición) con su código corto de base de datos y su nombre de API.
//! Los códigos cortos son los que aparecen en los ficheros de términos, en los
//! atributos de las plantillas y en el JSON exportado.

use std::fmt;

/// Número gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageNumber {
    Singular,
    Plural,
    Dual,
}

impl LanguageNumber {
    pub const ALL: [LanguageNumber; 3] = [
        LanguageNumber::Singular,
        LanguageNumber::Plural,
        LanguageNumber::Dual,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguageNumber::Singular => "0",
            LanguageNumber::Plural => "1",
            LanguageNumber::Dual => "2",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguageNumber::Singular => "Singular",
            LanguageNumber::Plural => "Plural",
            LanguageNumber::Dual => "Dual",
        }
    }

    /// El dual cuenta como plural para elegir entre etiqueta singular y plural
    pub fn is_plural(self) -> bool {
        self != LanguageNumber::Singular
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(LanguageNumber::Singular),
            "1" => Some(LanguageNumber::Plural),
            "2" => Some(LanguageNumber::Dual),
            _ => None,
        }
    }

    /// Valor del atributo `plural` en una plantilla: "y", "n" o "d"
    pub fn from_label_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" | "true" | "1" | "plural" => Some(LanguageNumber::Plural),
            "n" | "no" | "false" | "0" | "singular" => Some(LanguageNumber::Singular),
            "d" | "2" | "dual" => Some(LanguageNumber::Dual),
            _ => None,
        }
    }
}

/// Caso gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCase {
    Nominative,
    Accusative,
    Genitive,
    Dative,
    Inessive,
    Elative,
    Illative,
    Adessive,
    Ablative,
    Allative,
    Essive,
    Translative,
    Partitive,
    Objective,
    Instrumental,
    Prepositional,
    Locative,
    Vocative,
    Sublative,
    Superessive,
    Delative,
    CausalFinal,
    EssiveFormal,
    Terminative,
    Distributive,
    Ergative,
    Abessive,
    Comitative,
    Benefactive,
}

impl LanguageCase {
    pub const ALL: [LanguageCase; 29] = [
        LanguageCase::Nominative,
        LanguageCase::Accusative,
        LanguageCase::Genitive,
        LanguageCase::Dative,
        LanguageCase::Inessive,
        LanguageCase::Elative,
        LanguageCase::Illative,
        LanguageCase::Adessive,
        LanguageCase::Ablative,
        LanguageCase::Allative,
        LanguageCase::Essive,
        LanguageCase::Translative,
        LanguageCase::Partitive,
        LanguageCase::Objective,
        LanguageCase::Instrumental,
        LanguageCase::Prepositional,
        LanguageCase::Locative,
        LanguageCase::Vocative,
        LanguageCase::Sublative,
        LanguageCase::Superessive,
        LanguageCase::Delative,
        LanguageCase::CausalFinal,
        LanguageCase::EssiveFormal,
        LanguageCase::Terminative,
        LanguageCase::Distributive,
        LanguageCase::Ergative,
        LanguageCase::Abessive,
        LanguageCase::Comitative,
        LanguageCase::Benefactive,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguageCase::Nominative => "n",
            LanguageCase::Accusative => "a",
            LanguageCase::Genitive => "g",
            LanguageCase::Dative => "d",
            LanguageCase::Inessive => "ines",
            LanguageCase::Elative => "el",
            LanguageCase::Illative => "il",
            LanguageCase::Adessive => "ad",
            LanguageCase::Ablative => "abl",
            LanguageCase::Allative => "al",
            LanguageCase::Essive => "es",
            LanguageCase::Translative => "tra",
            LanguageCase::Partitive => "par",
            LanguageCase::Objective => "o",
            LanguageCase::Instrumental => "in",
            LanguageCase::Prepositional => "pr",
            LanguageCase::Locative => "l",
            LanguageCase::Vocative => "v",
            LanguageCase::Sublative => "sub",
            LanguageCase::Superessive => "sup",
            LanguageCase::Delative => "del",
            LanguageCase::CausalFinal => "cf",
            LanguageCase::EssiveFormal => "ef",
            LanguageCase::Terminative => "t",
            LanguageCase::Distributive => "di",
            LanguageCase::Ergative => "er",
            LanguageCase::Abessive => "abe",
            LanguageCase::Comitative => "com",
            LanguageCase::Benefactive => "be",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguageCase::Nominative => "Nominative",
            LanguageCase::Accusative => "Accusative",
            LanguageCase::Genitive => "Genitive",
            LanguageCase::Dative => "Dative",
            LanguageCase::Inessive => "Inessive",
            LanguageCase::Elative => "Elative",
            LanguageCase::Illative => "Illative",
            LanguageCase::Adessive => "Adessive",
            LanguageCase::Ablative => "Ablative",
            LanguageCase::Allative => "Allative",
            LanguageCase::Essive => "Essive",
            LanguageCase::Translative => "Translative",
            LanguageCase::Partitive => "Partitive",
            LanguageCase::Objective => "Objective",
            LanguageCase::Instrumental => "Instrumental",
            LanguageCase::Prepositional => "Prepositional",
            LanguageCase::Locative => "Locative",
            LanguageCase::Vocative => "Vocative",
            LanguageCase::Sublative => "Sublative",
            LanguageCase::Superessive => "Superessive",
            LanguageCase::Delative => "Delative",
            LanguageCase::CausalFinal => "Causalfinal",
            LanguageCase::EssiveFormal => "Essiveformal",
            // El nombre publicado en la API lleva esta errata
            LanguageCase::Terminative => "Termanative",
            LanguageCase::Distributive => "Distributive",
            LanguageCase::Ergative => "Ergative",
            LanguageCase::Abessive => "Abessive",
            LanguageCase::Comitative => "Comitative",
            LanguageCase::Benefactive => "Benefactive",
        }
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        let s = s.trim();
        LanguageCase::ALL.iter().copied().find(|c| c.db_value() == s)
    }

    /// Acepta el código corto o el nombre de API sin distinguir mayúsculas
    pub fn from_label_value(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        LanguageCase::from_db_value(&lower).or_else(|| {
            LanguageCase::ALL
                .iter()
                .copied()
                .find(|c| c.api_value().to_lowercase() == lower)
        })
    }
}

/// Género gramatical, incluidas las clases nominales bantúes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageGender {
    Neuter,
    Feminine,
    Masculine,
    AnimateMasculine,
    ClassI,
    ClassIII,
    ClassV,
    ClassVII,
    ClassIX,
    ClassXI,
    ClassXIV,
    ClassXV,
    ClassXVI,
    ClassXVII,
    ClassXVIII,
}

impl LanguageGender {
    pub const ALL: [LanguageGender; 15] = [
        LanguageGender::Neuter,
        LanguageGender::Feminine,
        LanguageGender::Masculine,
        LanguageGender::AnimateMasculine,
        LanguageGender::ClassI,
        LanguageGender::ClassIII,
        LanguageGender::ClassV,
        LanguageGender::ClassVII,
        LanguageGender::ClassIX,
        LanguageGender::ClassXI,
        LanguageGender::ClassXIV,
        LanguageGender::ClassXV,
        LanguageGender::ClassXVI,
        LanguageGender::ClassXVII,
        LanguageGender::ClassXVIII,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguageGender::Neuter => "n",
            LanguageGender::Feminine => "f",
            LanguageGender::Masculine => "m",
            LanguageGender::AnimateMasculine => "a",
            LanguageGender::ClassI => "1",
            LanguageGender::ClassIII => "3",
            LanguageGender::ClassV => "5",
            LanguageGender::ClassVII => "7",
            LanguageGender::ClassIX => "9",
            LanguageGender::ClassXI => "U",
            LanguageGender::ClassXIV => "B",
            LanguageGender::ClassXV => "S",
            LanguageGender::ClassXVI => "P",
            LanguageGender::ClassXVII => "K",
            LanguageGender::ClassXVIII => "M",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguageGender::Neuter => "Neuter",
            LanguageGender::Feminine => "Feminine",
            LanguageGender::Masculine => "Masculine",
            LanguageGender::AnimateMasculine => "AnimateMasculine",
            LanguageGender::ClassI => "ClassI",
            LanguageGender::ClassIII => "ClassIII",
            LanguageGender::ClassV => "ClassV",
            LanguageGender::ClassVII => "ClassVII",
            LanguageGender::ClassIX => "ClassIX",
            LanguageGender::ClassXI => "ClassXI",
            LanguageGender::ClassXIV => "ClassXIV",
            LanguageGender::ClassXV => "ClassXV",
            LanguageGender::ClassXVI => "ClassXVI",
            LanguageGender::ClassXVII => "ClassXVII",
            LanguageGender::ClassXVIII => "ClassXVIII",
        }
    }

    /// Alias históricos: "c" (común neerlandés) y "e" (utrum sueco) son femenino
    fn aliases(self) -> &'static [&'static str] {
        match self {
            LanguageGender::Feminine => &["c", "e"],
            LanguageGender::ClassI => &["M-wa", "I"],
            LanguageGender::ClassIII => &["M-mi", "III"],
            LanguageGender::ClassV => &["Ma", "V"],
            LanguageGender::ClassVII => &["Ki-vi", "VII"],
            LanguageGender::ClassIX => &["N", "IX"],
            LanguageGender::ClassXI => &["XI"],
            LanguageGender::ClassXIV => &["XIV"],
            LanguageGender::ClassXV => &["XV"],
            LanguageGender::ClassXVI => &["Pa", "XVI"],
            LanguageGender::ClassXVII => &["Ku", "XVII"],
            LanguageGender::ClassXVIII => &["Mu", "XVIII"],
            _ => &[],
        }
    }

    /// Los códigos distinguen mayúsculas: "m" es masculino y "M" la clase XVIII
    pub fn from_db_value(s: &str) -> Option<Self> {
        let s = s.trim();
        LanguageGender::ALL
            .iter()
            .copied()
            .find(|g| g.db_value() == s)
            .or_else(|| {
                LanguageGender::ALL
                    .iter()
                    .copied()
                    .find(|g| g.aliases().contains(&s))
            })
    }

    pub fn from_label_value(s: &str) -> Option<Self> {
        if let Some(g) = LanguageGender::from_db_value(s) {
            return Some(g);
        }
        let lower = s.trim().to_lowercase();
        LanguageGender::ALL
            .iter()
            .copied()
            .find(|g| g.api_value().to_lowercase() == lower)
    }
}

/// Clasificación fonética de la palabra contigua (inicial o final según idioma)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageStartsWith {
    Consonant,
    Vowel,
    Special,
}

impl LanguageStartsWith {
    pub const ALL: [LanguageStartsWith; 3] = [
        LanguageStartsWith::Consonant,
        LanguageStartsWith::Vowel,
        LanguageStartsWith::Special,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguageStartsWith::Consonant => "c",
            LanguageStartsWith::Vowel => "v",
            LanguageStartsWith::Special => "s",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguageStartsWith::Consonant => "Consonant",
            LanguageStartsWith::Vowel => "Vowel",
            LanguageStartsWith::Special => "Special",
        }
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "consonant" => Some(LanguageStartsWith::Consonant),
            "v" | "vowel" => Some(LanguageStartsWith::Vowel),
            "s" | "special" => Some(LanguageStartsWith::Special),
            _ => None,
        }
    }

    pub fn from_label_value(s: &str) -> Option<Self> {
        LanguageStartsWith::from_db_value(s)
    }
}

/// Tipo de artículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageArticle {
    Zero,
    Indefinite,
    Definite,
    Partitive,
}

impl LanguageArticle {
    pub const ALL: [LanguageArticle; 4] = [
        LanguageArticle::Zero,
        LanguageArticle::Indefinite,
        LanguageArticle::Definite,
        LanguageArticle::Partitive,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguageArticle::Zero => "n",
            LanguageArticle::Indefinite => "i",
            LanguageArticle::Definite => "d",
            LanguageArticle::Partitive => "p",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguageArticle::Zero => "None",
            LanguageArticle::Indefinite => "A",
            LanguageArticle::Definite => "The",
            LanguageArticle::Partitive => "Mass",
        }
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        let s = s.trim();
        LanguageArticle::ALL.iter().copied().find(|a| a.db_value() == s)
    }

    /// Valor del atributo `article`: "a", "the", "mass" o el código corto
    pub fn from_label_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "none" | "zero" => Some(LanguageArticle::Zero),
            "i" | "a" | "an" | "indefinite" => Some(LanguageArticle::Indefinite),
            "d" | "the" | "definite" => Some(LanguageArticle::Definite),
            "p" | "mass" | "partitive" => Some(LanguageArticle::Partitive),
            _ => None,
        }
    }
}

/// Posesivo marcado en la forma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguagePossessive {
    None,
    First,
    Second,
    FirstPlural,
    SecondPlural,
}

impl LanguagePossessive {
    pub const ALL: [LanguagePossessive; 5] = [
        LanguagePossessive::None,
        LanguagePossessive::First,
        LanguagePossessive::Second,
        LanguagePossessive::FirstPlural,
        LanguagePossessive::SecondPlural,
    ];

    pub fn db_value(self) -> &'static str {
        match self {
            LanguagePossessive::None => "n",
            LanguagePossessive::First => "f",
            LanguagePossessive::Second => "s",
            LanguagePossessive::FirstPlural => "F",
            LanguagePossessive::SecondPlural => "S",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguagePossessive::None => "None",
            LanguagePossessive::First => "FirstPerson",
            LanguagePossessive::Second => "SecondPerson",
            LanguagePossessive::FirstPlural => "FirstPersonPlural",
            LanguagePossessive::SecondPlural => "SecondPersonPlural",
        }
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        let s = s.trim();
        LanguagePossessive::ALL
            .iter()
            .copied()
            .find(|p| p.db_value() == s)
    }

    pub fn from_label_value(s: &str) -> Option<Self> {
        if let Some(p) = LanguagePossessive::from_db_value(s) {
            return Some(p);
        }
        match s.trim().to_lowercase().as_str() {
            "fpl" => Some(LanguagePossessive::FirstPlural),
            "spl" => Some(LanguagePossessive::SecondPlural),
            "none" => Some(LanguagePossessive::None),
            "first" => Some(LanguagePossessive::First),
            "second" => Some(LanguagePossessive::Second),
            _ => None,
        }
    }
}

/// Posición del modificador respecto al sustantivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguagePosition {
    Pre,
    Post,
}

impl LanguagePosition {
    pub fn db_value(self) -> &'static str {
        match self {
            LanguagePosition::Pre => "b",
            LanguagePosition::Post => "a",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            LanguagePosition::Pre => "Pre",
            LanguagePosition::Post => "Post",
        }
    }

    pub fn from_db_value(s: &str) -> Option<Self> {
        match s.trim() {
            "b" => Some(LanguagePosition::Pre),
            "a" => Some(LanguagePosition::Post),
            _ => None,
        }
    }

    pub fn from_label_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "pre" | "before" => Some(LanguagePosition::Pre),
            "a" | "post" | "after" => Some(LanguagePosition::Post),
            _ => None,
        }
    }
}

/// Tipo de término del diccionario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermType {
    Noun,
    Adjective,
    Article,
}

impl TermType {
    pub fn char_id(self) -> char {
        match self {
            TermType::Noun => 'n',
            TermType::Adjective => 'a',
            TermType::Article => 'd',
        }
    }
}

/// Uso del sustantivo: entidad renombrable, campo u otro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NounType {
    Entity,
    Field,
    #[default]
    Other,
}

impl NounType {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "entity" => NounType::Entity,
            "field" => NounType::Field,
            _ => NounType::Other,
        }
    }

    pub fn api_value(self) -> Option<&'static str> {
        match self {
            NounType::Entity => Some("entity"),
            NounType::Field => Some("field"),
            NounType::Other => None,
        }
    }
}

macro_rules! display_db_value {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.db_value())
                }
            }
        )*
    };
}

display_db_value!(
    LanguageNumber,
    LanguageCase,
    LanguageGender,
    LanguageStartsWith,
    LanguageArticle,
    LanguagePossessive,
    LanguagePosition
);
