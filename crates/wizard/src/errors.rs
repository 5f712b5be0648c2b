// Archivo: errors.rs
// Propósito: definir los errores del motor de asistentes (wizard) y el alias
// Result<T> usado por las APIs del crate.
use thiserror::Error;

/// Errores del motor de pasos.
///
/// Los fallos de validación del usuario NO son errores: se devuelven como
/// valores (`Advance::Rejected`, `SubmitOutcome::Rejected`). Estas variantes
/// cubren sólo errores de programación o de configuración.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Índice de paso fuera de `[1, N]` o `N == 0`.
    #[error("Paso inválido: {0}")]
    InvalidStep(String),
    /// Otro tipo de error.
    #[error("Otro: {0}")]
    Other(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, WizardError>;
