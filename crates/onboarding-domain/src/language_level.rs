// language_level.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nivel de idioma árabe declarado por el visitante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageLevel {
  #[serde(rename = "excellent")]
  Excellent,
  #[serde(rename = "good")]
  Good,
  #[serde(rename = "weak")]
  Weak,
  #[serde(rename = "none")]
  NoKnowledge,
}

impl LanguageLevel {
  pub const ALL: [LanguageLevel; 4] =
    [LanguageLevel::Excellent, LanguageLevel::Good, LanguageLevel::Weak, LanguageLevel::NoKnowledge];

  pub fn key(&self) -> &'static str {
    match self {
      LanguageLevel::Excellent => "excellent",
      LanguageLevel::Good => "good",
      LanguageLevel::Weak => "weak",
      LanguageLevel::NoKnowledge => "none",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      LanguageLevel::Excellent => "عالی",
      LanguageLevel::Good => "خوب",
      LanguageLevel::Weak => "ضعیف",
      LanguageLevel::NoKnowledge => "بلد نیستم",
    }
  }
}

impl fmt::Display for LanguageLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.key())
  }
}

impl FromStr for LanguageLevel {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    LanguageLevel::ALL.into_iter()
                      .find(|l| l.key() == wanted)
                      .ok_or_else(|| DomainError::ValidationError(format!("nivel de idioma desconocido: {}", s)))
  }
}
