//! Reglas de plural para las elecciones `<plural>`.
//!
//! Subconjunto de las reglas CLDR suficiente para las familias de idiomas
//! con declinación propia; las tablas completas viven fuera del motor.

use std::fmt;

/// Categoría de plural CLDR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn cldr_value(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cldr_value())
    }
}

/// Regla que asigna una categoría a una cantidad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// "one" para 1, "other" para el resto
    English,
    /// "one" para 0 y 1 (y fracciones menores que 2)
    French,
    /// Ruso, ucraniano: one / few / many según las dos últimas cifras
    EastSlavic,
    Polish,
    /// Checo y eslovaco: one / few (2-4) / other
    Czech,
    Arabic,
    /// Sin distinción de número
    None,
}

impl PluralRule {
    pub fn categorize(self, value: f64) -> PluralCategory {
        let abs = value.abs();
        if abs.fract() != 0.0 {
            return match self {
                PluralRule::French if abs < 2.0 => PluralCategory::One,
                PluralRule::None => PluralCategory::Other,
                PluralRule::Czech | PluralRule::Polish => PluralCategory::Many,
                _ => PluralCategory::Other,
            };
        }
        let n = abs as u64;
        match self {
            PluralRule::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::EastSlavic => {
                let mod10 = n % 10;
                let mod100 = n % 100;
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Polish => {
                let mod10 = n % 10;
                let mod100 = n % 100;
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Czech => match n {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            PluralRule::Arabic => {
                let mod100 = n % 100;
                match n {
                    0 => PluralCategory::Zero,
                    1 => PluralCategory::One,
                    2 => PluralCategory::Two,
                    _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                    _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                    _ => PluralCategory::Other,
                }
            }
            PluralRule::None => PluralCategory::Other,
        }
    }
}
