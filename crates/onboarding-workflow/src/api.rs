// api.rs
//
// Contrato del colaborador REST. El crate no hace HTTP: quien lo usa
// inyecta una implementación (real o `stubs::InMemoryRegistrationApi`).
use crate::flow_kind::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;
use wizard::SubmissionError;

/// Error devuelto por el backend.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
  /// Mensaje del backend; puede venir vacío.
  pub message: String,
  pub status_code: Option<u16>,
}

impl ApiError {
  pub fn new(message: impl Into<String>, status_code: Option<u16>) -> Self {
    Self { message: message.into(), status_code }
  }
}

impl From<ApiError> for SubmissionError {
  fn from(err: ApiError) -> Self {
    SubmissionError::new(err.message, err.status_code)
  }
}

/// Respuesta correcta del backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
  pub message: Option<String>,
  #[serde(default)]
  pub body: JsonValue,
}

/// Operaciones del backend que usan los flujos de alta.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
  async fn register_visitor(&self, payload: JsonValue) -> Result<ApiResponse, ApiError>;

  async fn update_visitor(&self, payload: JsonValue) -> Result<ApiResponse, ApiError>;

  async fn register_supplier(&self, payload: JsonValue) -> Result<ApiResponse, ApiError>;

  async fn update_supplier(&self, payload: JsonValue) -> Result<ApiResponse, ApiError>;

  /// Perfil ya enviado del usuario actual para `role`, si existe.
  async fn fetch_profile(&self, role: Role) -> Result<Option<JsonValue>, ApiError>;
}
