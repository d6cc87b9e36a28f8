//! Categorías gramaticales, formas y tokenizador de plantillas

pub mod categories;
pub mod forms;
pub mod plural;
pub mod tokenizer;

pub use categories::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguagePossessive, LanguageStartsWith, NounType, TermType,
};
pub use forms::{AdjectiveForm, ArticleForm, NounForm};
pub use plural::{PluralCategory, PluralRule};
pub use tokenizer::{Token, TokenType, Tokenizer};
