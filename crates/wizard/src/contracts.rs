// Archivo: contracts.rs
// Propósito: definir los traits que el asistente usa en sus costuras:
// validación de pasos (`StepGate`), efecto de envío (`SubmissionEffect`)
// y salida de notificaciones (`Notifier`).
use crate::domain::{Notification, SubmissionError, ValidationResult};
use async_trait::async_trait;

/// Número de pasos de un asistente. Separado de `StepGate` para no atar la
/// construcción del controlador al tipo del borrador.
pub trait StepCount {
    /// Número total de pasos `N` (> 0).
    fn total_steps(&self) -> u32;
}

/// Decide si un paso del borrador `D` es válido.
///
/// Debe ser puro: no muta el borrador ni notifica. El controlador decide
/// cómo mostrar el rechazo.
pub trait StepGate<D>: StepCount + Send + Sync {
    /// Valida el paso `step`. Un índice desconocido es vacuamente válido.
    fn validate_step(&self, step: u32, draft: &D) -> ValidationResult;

    /// Condición de finalización evaluada en `submit`, además de
    /// `validate_step(N)`.
    fn validate_final(&self, _draft: &D) -> ValidationResult {
        ValidationResult::Valid
    }
}

/// Llamada de red única que finaliza un borrador completo.
#[async_trait]
pub trait SubmissionEffect<D>: Send + Sync
    where D: Sync
{
    /// Comprobante devuelto al terminar bien.
    type Receipt: Send;

    async fn submit(&self, draft: &D) -> Result<Self::Receipt, SubmissionError>;
}

/// Destino de las notificaciones tipo "toast".
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
