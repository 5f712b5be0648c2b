// product.rs
use crate::{DomainError, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Producto ofrecido por un proveedor. Pertenece en exclusiva al borrador
/// que lo contiene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
  pub product_name: String,
  /// Clave de `ProductType` tal como la envía el formulario.
  pub product_type: String,
  pub description: String,
  pub needs_export_license: bool,
  pub required_license_type: String,
  pub monthly_production_min: String,
}

impl Product {
  pub const FIELDS: [&'static str; 6] = ["product_name",
                                         "product_type",
                                         "description",
                                         "needs_export_license",
                                         "required_license_type",
                                         "monthly_production_min"];

  /// Actualiza un campo por nombre. El tipo del valor debe coincidir.
  pub fn set(&mut self, field: &str, value: FieldValue) -> Result<(), DomainError> {
    let mismatch = |expected| DomainError::FieldKindMismatch { field: field.to_string(), expected };
    match (field, value) {
      ("needs_export_license", FieldValue::Flag(b)) => self.needs_export_license = b,
      ("needs_export_license", _) => return Err(mismatch(crate::FieldKind::Flag)),
      (name, FieldValue::Text(s)) => match name {
        "product_name" => self.product_name = s,
        "product_type" => self.product_type = s,
        "description" => self.description = s,
        "required_license_type" => self.required_license_type = s,
        "monthly_production_min" => self.monthly_production_min = s,
        other => return Err(DomainError::UnknownProductField(other.to_string())),
      },
      (name, FieldValue::Number(n)) if name == "monthly_production_min" => self.monthly_production_min = n.to_string(),
      (name, _) if Self::FIELDS.contains(&name) => return Err(mismatch(crate::FieldKind::Text)),
      (other, _) => return Err(DomainError::UnknownProductField(other.to_string())),
    }
    Ok(())
  }

  pub fn kind(&self) -> Option<ProductType> {
    self.product_type.parse().ok()
  }
}

/// Catálogo de tipos de producto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
  Food,
  Herbal,
  Health,
  Handicraft,
  Industrial,
  Home,
  Other,
}

impl ProductType {
  pub const ALL: [ProductType; 7] = [ProductType::Food,
                                     ProductType::Herbal,
                                     ProductType::Health,
                                     ProductType::Handicraft,
                                     ProductType::Industrial,
                                     ProductType::Home,
                                     ProductType::Other];

  pub fn key(&self) -> &'static str {
    match self {
      ProductType::Food => "food",
      ProductType::Herbal => "herbal",
      ProductType::Health => "health",
      ProductType::Handicraft => "handicraft",
      ProductType::Industrial => "industrial",
      ProductType::Home => "home",
      ProductType::Other => "other",
    }
  }

  /// Etiqueta en persa mostrada en el formulario.
  pub fn label(&self) -> &'static str {
    match self {
      ProductType::Food => "غذایی",
      ProductType::Herbal => "گیاهی",
      ProductType::Health => "بهداشتی",
      ProductType::Handicraft => "دستی",
      ProductType::Industrial => "صنعتی",
      ProductType::Home => "خانگی",
      ProductType::Other => "سایر",
    }
  }
}

impl fmt::Display for ProductType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.key())
  }
}

impl FromStr for ProductType {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    ProductType::ALL.into_iter()
                    .find(|t| t.key() == wanted)
                    .ok_or_else(|| DomainError::ValidationError(format!("tipo de producto desconocido: {}", s)))
  }
}
