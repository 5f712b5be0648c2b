// stubs.rs
//
// Backend en memoria para pruebas y para la CLI.
use crate::api::{ApiError, ApiResponse, RegistrationApi};
use crate::flow_kind::Role;
use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Operación recibida por el backend en memoria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
  RegisterVisitor,
  UpdateVisitor,
  RegisterSupplier,
  UpdateSupplier,
  FetchProfile,
}

impl ApiOperation {
  fn role(&self) -> Option<Role> {
    match self {
      ApiOperation::RegisterVisitor | ApiOperation::UpdateVisitor => Some(Role::Visitor),
      ApiOperation::RegisterSupplier | ApiOperation::UpdateSupplier => Some(Role::Supplier),
      ApiOperation::FetchProfile => None,
    }
  }

  fn success_message(&self) -> &'static str {
    match self {
      ApiOperation::RegisterVisitor | ApiOperation::RegisterSupplier => "ثبت‌نام با موفقیت انجام شد",
      ApiOperation::UpdateVisitor | ApiOperation::UpdateSupplier => "اطلاعات با موفقیت به‌روزرسانی شد",
      ApiOperation::FetchProfile => "",
    }
  }
}

/// Llamada registrada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiCall {
  pub operation: ApiOperation,
  pub payload: JsonValue,
}

/// Backend en memoria.
///
/// Registra cada llamada, puede fallar las próximas llamadas con errores
/// guionizados y guarda el último payload aceptado por rol, que luego
/// devuelve `fetch_profile`.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationApi {
  calls: Mutex<Vec<ApiCall>>,
  failures: Mutex<VecDeque<ApiError>>,
  profiles: Mutex<HashMap<Role, JsonValue>>,
}

impl InMemoryRegistrationApi {
  pub fn new() -> Self {
    Self::default()
  }

  /// Precarga un perfil para `role`.
  pub fn with_profile(self, role: Role, profile: JsonValue) -> Self {
    self.profiles.lock().unwrap_or_else(|e| e.into_inner()).insert(role, profile);
    self
  }

  /// La próxima llamada (de cualquier tipo) falla con `error`.
  pub fn fail_next(&self, error: ApiError) {
    self.failures.lock().unwrap_or_else(|e| e.into_inner()).push_back(error);
  }

  pub fn calls(&self) -> Vec<ApiCall> {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
  }

  /// Número de llamadas de envío (sin contar `fetch_profile`).
  pub fn submission_count(&self) -> usize {
    self.calls().iter().filter(|c| c.operation != ApiOperation::FetchProfile).count()
  }

  pub fn profile(&self, role: Role) -> Option<JsonValue> {
    self.profiles.lock().unwrap_or_else(|e| e.into_inner()).get(&role).cloned()
  }

  fn record(&self, operation: ApiOperation, payload: JsonValue) -> Result<(), ApiError> {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(ApiCall { operation, payload });
    match self.failures.lock().unwrap_or_else(|e| e.into_inner()).pop_front() {
      Some(err) => {
        debug!("api en memoria: {:?} falla con '{}'", operation, err);
        Err(err)
      }
      None => Ok(()),
    }
  }

  fn accept(&self, operation: ApiOperation, payload: JsonValue) -> Result<ApiResponse, ApiError> {
    self.record(operation, payload.clone())?;
    if let Some(role) = operation.role() {
      self.profiles.lock().unwrap_or_else(|e| e.into_inner()).insert(role, payload.clone());
    }
    debug!("api en memoria: {:?} aceptado", operation);
    Ok(ApiResponse { message: Some(operation.success_message().to_string()), body: payload })
  }
}

#[async_trait]
impl RegistrationApi for InMemoryRegistrationApi {
  async fn register_visitor(&self, payload: JsonValue) -> Result<ApiResponse, ApiError> {
    self.accept(ApiOperation::RegisterVisitor, payload)
  }

  async fn update_visitor(&self, payload: JsonValue) -> Result<ApiResponse, ApiError> {
    self.accept(ApiOperation::UpdateVisitor, payload)
  }

  async fn register_supplier(&self, payload: JsonValue) -> Result<ApiResponse, ApiError> {
    self.accept(ApiOperation::RegisterSupplier, payload)
  }

  async fn update_supplier(&self, payload: JsonValue) -> Result<ApiResponse, ApiError> {
    self.accept(ApiOperation::UpdateSupplier, payload)
  }

  async fn fetch_profile(&self, role: Role) -> Result<Option<JsonValue>, ApiError> {
    self.record(ApiOperation::FetchProfile, JsonValue::String(role.to_string()))?;
    Ok(self.profile(role))
  }
}
