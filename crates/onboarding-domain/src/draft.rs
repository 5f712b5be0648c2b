// draft.rs
use crate::{DomainError, FieldSchema, FieldValue, Product};
use indexmap::IndexMap;
use log::debug;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Borrador de registro: valores de los campos de un formulario (y su lista
/// de productos, si el esquema la tiene).
///
/// El conjunto de claves lo fija el `FieldSchema` estático; no se pueden
/// añadir claves nuevas. El orden de inserción es el del esquema y es el que
/// se usa al serializar el payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
  schema: &'static FieldSchema,
  values: IndexMap<String, FieldValue>,
  products: Vec<Product>,
}

impl RegistrationDraft {
  /// Borrador con los valores por defecto del esquema. Los formularios con
  /// productos empiezan con un producto en blanco.
  pub fn new(schema: &'static FieldSchema) -> Self {
    let values = schema.fields.iter().map(|f| (f.name.to_string(), f.default_value())).collect();
    let products = if schema.has_products { vec![Product::default()] } else { Vec::new() };
    Self { schema, values, products }
  }

  /// Rellena un borrador a partir de un perfil previo (objeto JSON). Las
  /// claves ausentes o `null` conservan el valor por defecto; las claves que
  /// no están en el esquema se ignoran.
  pub fn hydrate(schema: &'static FieldSchema, profile: &JsonValue) -> Result<Self, DomainError> {
    let mut draft = Self::new(schema);
    let obj = profile.as_object()
                     .ok_or_else(|| DomainError::SerializationError("el perfil debe ser un objeto JSON".into()))?;
    for spec in schema.fields {
      if let Some(raw) = obj.get(spec.name) {
        if let Some(value) = spec.coerce_json(raw)? {
          draft.values.insert(spec.name.to_string(), value);
        }
      }
    }
    if schema.has_products {
      if let Some(raw) = obj.get("products").filter(|v| !v.is_null()) {
        let products: Vec<Product> = serde_json::from_value(raw.clone())?;
        if !products.is_empty() {
          draft.products = products;
        }
      }
    }
    debug!("borrador '{}' rehidratado ({} productos)", schema.name, draft.products.len());
    Ok(draft)
  }

  pub fn schema(&self) -> &'static FieldSchema {
    self.schema
  }

  pub fn get(&self, name: &str) -> Option<&FieldValue> {
    self.values.get(name)
  }

  /// Texto del campo, o `""` si no es de texto.
  pub fn text(&self, name: &str) -> &str {
    self.values.get(name).and_then(FieldValue::as_text).unwrap_or("")
  }

  /// Casilla del campo, o `false` si no es una casilla.
  pub fn flag(&self, name: &str) -> bool {
    self.values.get(name).and_then(FieldValue::as_flag).unwrap_or(false)
  }

  pub fn is_present(&self, name: &str) -> bool {
    self.values.get(name).map(FieldValue::is_present).unwrap_or(false)
  }

  /// Actualiza un campo. Falla si la clave no es del esquema o el tipo no
  /// coincide.
  pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), DomainError> {
    let spec = self.schema.spec(name).ok_or_else(|| DomainError::UnknownField(name.to_string()))?;
    let value = value.into();
    if value.kind() != spec.kind {
      return Err(DomainError::FieldKindMismatch { field: name.to_string(), expected: spec.kind });
    }
    self.values.insert(name.to_string(), value);
    Ok(())
  }

  /// Actualiza un campo desde texto libre, interpretándolo según su tipo.
  pub fn set_from_input(&mut self, name: &str, raw: &str) -> Result<(), DomainError> {
    let spec = self.schema.spec(name).ok_or_else(|| DomainError::UnknownField(name.to_string()))?;
    let value = spec.parse_input(raw)?;
    self.values.insert(name.to_string(), value);
    Ok(())
  }

  pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
    self.values.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  fn require_products(&self) -> Result<(), DomainError> {
    if self.schema.has_products {
      Ok(())
    } else {
      Err(DomainError::NoProducts(self.schema.name.to_string()))
    }
  }

  /// Añade un producto en blanco al final y devuelve su índice.
  pub fn add_product(&mut self) -> Result<usize, DomainError> {
    self.require_products()?;
    self.products.push(Product::default());
    Ok(self.products.len() - 1)
  }

  /// Quita el producto `index`. No se permite quitar el último que queda.
  pub fn remove_product(&mut self, index: usize) -> Result<Product, DomainError> {
    self.require_products()?;
    if index >= self.products.len() {
      return Err(DomainError::ProductIndex(index));
    }
    if self.products.len() == 1 {
      return Err(DomainError::LastProduct);
    }
    Ok(self.products.remove(index))
  }

  pub fn update_product(&mut self, index: usize, field: &str, value: impl Into<FieldValue>) -> Result<(), DomainError> {
    self.require_products()?;
    let product = self.products.get_mut(index).ok_or(DomainError::ProductIndex(index))?;
    product.set(field, value.into())
  }

  /// Payload JSON para el colaborador de envío: campos en orden de esquema
  /// más `products` si aplica.
  pub fn to_payload(&self) -> Result<JsonValue, DomainError> {
    let mut obj = JsonMap::new();
    for (k, v) in &self.values {
      obj.insert(k.clone(), serde_json::to_value(v)?);
    }
    if self.schema.has_products {
      obj.insert("products".into(), serde_json::to_value(&self.products)?);
    }
    Ok(JsonValue::Object(obj))
  }
}
