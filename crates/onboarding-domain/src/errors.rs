// errors.rs
use crate::field::FieldKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
  #[error("Campo desconocido: {0}")]
  UnknownField(String),
  #[error("Tipo incorrecto para el campo {field}: se esperaba {expected}")]
  FieldKindMismatch { field: String, expected: FieldKind },
  #[error("Índice de producto fuera de rango: {0}")]
  ProductIndex(usize),
  #[error("Debe quedar al menos un producto")]
  LastProduct,
  #[error("Campo de producto desconocido: {0}")]
  UnknownProductField(String),
  #[error("El formulario {0} no admite productos")]
  NoProducts(String),
  #[error("Error de validación: {0}")]
  ValidationError(String),
  #[error("Error de serialización: {0}")]
  SerializationError(String),
}

impl From<serde_json::Error> for DomainError {
  fn from(e: serde_json::Error) -> Self {
    Self::SerializationError(e.to_string())
  }
}
