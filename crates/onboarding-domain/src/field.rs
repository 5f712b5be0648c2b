// field.rs
use crate::DomainError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Valor de un campo del formulario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Flag(bool),
  Number(i64),
  Text(String),
}

impl FieldValue {
  pub fn kind(&self) -> FieldKind {
    match self {
      FieldValue::Flag(_) => FieldKind::Flag,
      FieldValue::Number(_) => FieldKind::Number,
      FieldValue::Text(_) => FieldKind::Text,
    }
  }

  /// Equivalente a la "veracidad" del formulario original: texto no vacío,
  /// casilla marcada, número distinto de cero.
  pub fn is_present(&self) -> bool {
    match self {
      FieldValue::Flag(b) => *b,
      FieldValue::Number(n) => *n != 0,
      FieldValue::Text(s) => !s.trim().is_empty(),
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      FieldValue::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_flag(&self) -> Option<bool> {
    match self {
      FieldValue::Flag(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<i64> {
    match self {
      FieldValue::Number(n) => Some(*n),
      _ => None,
    }
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self {
    FieldValue::Text(s.to_string())
  }
}

impl From<String> for FieldValue {
  fn from(s: String) -> Self {
    FieldValue::Text(s)
  }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self {
    FieldValue::Flag(b)
  }
}

impl From<i64> for FieldValue {
  fn from(n: i64) -> Self {
    FieldValue::Number(n)
  }
}

impl fmt::Display for FieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldValue::Flag(b) => write!(f, "{}", b),
      FieldValue::Number(n) => write!(f, "{}", n),
      FieldValue::Text(s) => write!(f, "{}", s),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
  Text,
  Flag,
  Number,
}

impl fmt::Display for FieldKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      FieldKind::Text => "text",
      FieldKind::Flag => "flag",
      FieldKind::Number => "number",
    };
    write!(f, "{}", s)
  }
}

/// Valor inicial de un campo al crear el borrador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
  /// Texto vacío, `false` o `0` según el tipo.
  Blank,
  /// Fecha UTC de hoy en formato `YYYY-MM-DD` (sólo texto).
  Today,
}

/// Declaración estática de un campo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
  pub name: &'static str,
  pub kind: FieldKind,
  pub default: FieldDefault,
}

impl FieldSpec {
  pub const fn text(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Text, default: FieldDefault::Blank }
  }

  pub const fn flag(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Flag, default: FieldDefault::Blank }
  }

  pub const fn number(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Number, default: FieldDefault::Blank }
  }

  pub const fn today(name: &'static str) -> Self {
    Self { name, kind: FieldKind::Text, default: FieldDefault::Today }
  }

  pub fn default_value(&self) -> FieldValue {
    match (self.kind, self.default) {
      (FieldKind::Text, FieldDefault::Today) => FieldValue::Text(Utc::now().format("%Y-%m-%d").to_string()),
      (FieldKind::Text, _) => FieldValue::Text(String::new()),
      (FieldKind::Flag, _) => FieldValue::Flag(false),
      (FieldKind::Number, _) => FieldValue::Number(0),
    }
  }

  /// Convierte un valor JSON (perfil previo) al tipo del campo. `null`
  /// devuelve `None` para que el llamador use el valor por defecto.
  pub fn coerce_json(&self, value: &JsonValue) -> Result<Option<FieldValue>, DomainError> {
    let mismatch = || DomainError::FieldKindMismatch { field: self.name.to_string(), expected: self.kind };
    match (self.kind, value) {
      (_, JsonValue::Null) => Ok(None),
      (FieldKind::Text, JsonValue::String(s)) => Ok(Some(FieldValue::Text(s.clone()))),
      (FieldKind::Text, JsonValue::Number(n)) => Ok(Some(FieldValue::Text(n.to_string()))),
      (FieldKind::Flag, JsonValue::Bool(b)) => Ok(Some(FieldValue::Flag(*b))),
      (FieldKind::Number, JsonValue::Number(n)) => n.as_i64().map(|n| Some(FieldValue::Number(n))).ok_or_else(mismatch),
      _ => Err(mismatch()),
    }
  }

  /// Interpreta texto libre (por ejemplo desde la CLI) según el tipo.
  pub fn parse_input(&self, raw: &str) -> Result<FieldValue, DomainError> {
    let mismatch = || DomainError::FieldKindMismatch { field: self.name.to_string(), expected: self.kind };
    match self.kind {
      FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
      FieldKind::Number => raw.trim().parse::<i64>().map(FieldValue::Number).map_err(|_| mismatch()),
      FieldKind::Flag => match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "بله" => Ok(FieldValue::Flag(true)),
        "false" | "0" | "no" | "n" | "خیر" | "" => Ok(FieldValue::Flag(false)),
        _ => Err(mismatch()),
      },
    }
  }
}

/// Esquema estático de un formulario: conjunto fijo de claves y si el
/// formulario lleva lista de productos.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSchema {
  pub name: &'static str,
  pub fields: &'static [FieldSpec],
  pub has_products: bool,
}

impl FieldSchema {
  pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
    self.fields.iter().find(|f| f.name == name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.spec(name).is_some()
  }
}
