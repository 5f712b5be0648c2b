use crate::api::ApiError;
use thiserror::Error;

// Errores comunes del flujo de alta.
//
// Los rechazos de validación del usuario no pasan por aquí: el controlador
// los devuelve como valores. Este enum cubre errores de esquema, de
// configuración y del colaborador de API fuera del envío.
#[derive(Error, Debug)]
pub enum WorkflowError {
  /// Errores del motor de pasos.
  #[error("Error del asistente: {0}")]
  Wizard(#[from] wizard::WizardError),

  /// Errores del dominio (campos desconocidos, productos, etc.).
  #[error("Error de dominio: {0}")]
  Domain(#[from] onboarding_domain::DomainError),

  /// Errores de serialización/deserialización JSON.
  #[error("Error de serialización: {0}")]
  Serialization(#[from] serde_json::Error),

  /// Errores devueltos por el colaborador de API (por ejemplo al cargar el
  /// perfil previo).
  #[error("Error de API: {0}")]
  Api(#[from] ApiError),

  /// Variables de entorno o ficheros de configuración inválidos.
  #[error("Error de configuración: {0}")]
  Config(String),

  /// Validaciones del propio workflow (por ejemplo cargar un perfil en un
  /// flujo de alta).
  #[error("Error de validación: {0}")]
  Validation(String),
}
