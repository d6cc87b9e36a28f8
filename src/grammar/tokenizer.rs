//! Tokenizador de plantillas de etiqueta
//!
//! Separa el texto literal de las etiquetas de término. Una etiqueta es
//! autocerrada (`<Account plural="y"/>`) o un bloque de elección con ramas
//! (`<plural val="0"><one>…</one><other>…</other></plural>`,
//! `<gender><f>…</f><default>…</default></gender>`). Una etiqueta que no
//! encaja en ninguno de los dos casos (`<b>`, `a < b`) queda como texto.

use crate::error::{GrammarError, Result};

/// Nombres de bloque con ramas
const CHOICE_TAGS: &[&str] = &["plural", "gender"];

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Text,
    Tag,
    Choice,
}

/// Token individual
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Texto literal, o el nombre de la etiqueta tal como se escribió
    pub text: String,
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
    /// Atributos con la clave en minúsculas, en orden de aparición
    pub attributes: Vec<(String, String)>,
    /// Ramas de un bloque de elección: nombre de rama y contenido
    pub branches: Vec<(String, Vec<Token>)>,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        Self {
            text,
            token_type,
            start,
            end,
            attributes: Vec::new(),
            branches: Vec::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.token_type == TokenType::Text
    }

    /// Nombre de la etiqueta en minúsculas
    pub fn name(&self) -> String {
        self.text.to_lowercase()
    }

    /// ¿La etiqueta empieza por mayúscula? (`<Account/>` frente a `<account/>`)
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Tokenizador de plantillas
pub struct Tokenizer;

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza una plantilla en texto y etiquetas
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer { src: text, pos: 0 };
        lexer.sequence(None)
    }
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn error(&self, message: impl Into<String>) -> GrammarError {
        let line = self.src[..self.pos].matches('\n').count() + 1;
        GrammarError::parse(line, message)
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    /// Lee un identificador de etiqueta o de atributo
    fn identifier(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_' || c == '.' || c == '-'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Tokens hasta el final o hasta `</closing>`
    fn sequence(&mut self, closing: Option<&str>) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut text = String::new();
        let mut text_start = self.pos;

        loop {
            let rest = self.rest();
            if rest.is_empty() {
                if let Some(name) = closing {
                    return Err(self.error(format!("falta </{}>", name)));
                }
                break;
            }
            if let (Some(name), true) = (closing, rest.starts_with("</")) {
                let start = self.pos;
                self.pos += 2;
                let found = self.identifier();
                self.skip_whitespace();
                if found.eq_ignore_ascii_case(name) && self.rest().starts_with('>') {
                    self.pos += 1;
                    flush_text(&mut tokens, &mut text, text_start, start);
                    return Ok(tokens);
                }
                // Cierre de otra etiqueta (`</b>`): es texto
                self.pos = start;
            } else if rest.starts_with('<') {
                let start = self.pos;
                if let Some(token) = self.tag()? {
                    flush_text(&mut tokens, &mut text, text_start, start);
                    tokens.push(token);
                    text_start = self.pos;
                    continue;
                }
                self.pos = start;
            }
            // Texto literal hasta el siguiente '<'
            let first = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            let len = rest[first..]
                .find('<')
                .map(|i| i + first)
                .unwrap_or(rest.len());
            if text.is_empty() {
                text_start = self.pos;
            }
            text.push_str(&rest[..len]);
            self.pos += len;
        }

        let end = self.pos;
        flush_text(&mut tokens, &mut text, text_start, end);
        Ok(tokens)
    }

    /// Etiqueta en la posición actual; `None` si no es una etiqueta de término
    fn tag(&mut self) -> Result<Option<Token>> {
        let start = self.pos;
        self.pos += 1;
        let name = self.identifier();
        if name.is_empty() || !name.starts_with(|c: char| c.is_alphabetic()) {
            return Ok(None);
        }
        let mut token = Token::new(name.to_string(), TokenType::Tag, start, start);

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.starts_with("/>") {
                self.pos += 2;
                token.end = self.pos;
                return Ok(Some(token));
            }
            if rest.starts_with('>') {
                self.pos += 1;
                if !CHOICE_TAGS.contains(&token.name().as_str()) {
                    return Ok(None);
                }
                token.token_type = TokenType::Choice;
                token.branches = self.branches(&token.name())?;
                token.end = self.pos;
                return Ok(Some(token));
            }
            let key = self.identifier();
            if key.is_empty() {
                return Ok(None);
            }
            let key = key.to_lowercase();
            self.skip_whitespace();
            if !self.rest().starts_with('=') {
                return Ok(None);
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = match self.quoted() {
                Some(value) => value,
                None => return Err(self.error(format!("valor sin comillas en <{}>", name))),
            };
            if token.attribute(&key).is_some() {
                return Err(GrammarError::DuplicateCategory {
                    tag: name.to_string(),
                    attribute: key,
                });
            }
            token.attributes.push((key, value.to_string()));
        }
    }

    fn quoted(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let quote = rest.chars().next().filter(|&c| c == '"' || c == '\'')?;
        let close = rest[1..].find(quote)?;
        self.pos += close + 2;
        Some(&rest[1..close + 1])
    }

    /// Ramas `<rama>…</rama>` hasta `</block>`
    fn branches(&mut self, block: &str) -> Result<Vec<(String, Vec<Token>)>> {
        let mut branches = Vec::new();
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(self.error(format!("falta </{}>", block)));
            }
            if rest.starts_with("</") {
                self.pos += 2;
                let found = self.identifier();
                self.skip_whitespace();
                if !found.eq_ignore_ascii_case(block) || !self.rest().starts_with('>') {
                    return Err(self.error(format!("se esperaba </{}>", block)));
                }
                self.pos += 1;
                return Ok(branches);
            }
            if !rest.starts_with('<') {
                return Err(self.error(format!("texto fuera de rama en <{}>", block)));
            }
            self.pos += 1;
            let branch = self.identifier().to_lowercase();
            self.skip_whitespace();
            if branch.is_empty() || !self.rest().starts_with('>') {
                return Err(self.error(format!("rama no válida en <{}>", block)));
            }
            self.pos += 1;
            let content = self.sequence(Some(&branch))?;
            branches.push((branch, content));
        }
    }
}

fn flush_text(tokens: &mut Vec<Token>, text: &mut String, start: usize, end: usize) {
    if !text.is_empty() {
        tokens.push(Token::new(std::mem::take(text), TokenType::Text, start, end));
    }
}
