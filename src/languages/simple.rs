//! Idioma sin declinación registrada: singular y plural en nominativo.

use crate::languages::Language;

pub struct Simple {
    code: String,
}

impl Simple {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

impl Language for Simple {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.code
    }
}
