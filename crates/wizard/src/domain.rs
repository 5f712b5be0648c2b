// Archivo: domain.rs
// Propósito: tipos de dominio del asistente por pasos (índice de paso,
// resultado de validación, notificaciones y resultados de transición).
use crate::errors::{Result, WizardError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Índice de paso acotado a `[1, total]`.
///
/// Las únicas formas de moverlo son `forward` y `back`, que saturan en los
/// extremos; no existe salto arbitrario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepIndex {
    current: u32,
    total: u32,
}

impl StepIndex {
    /// Primer paso de un asistente con `total` pasos. `total` debe ser > 0.
    pub fn first(total: u32) -> Result<Self> {
        Self::at(1, total)
    }

    /// Construye un índice en una posición concreta (útil al rehidratar).
    pub fn at(current: u32, total: u32) -> Result<Self> {
        if total == 0 {
            return Err(WizardError::InvalidStep("el asistente necesita al menos un paso".into()));
        }
        if current == 0 || current > total {
            return Err(WizardError::InvalidStep(format!("{} fuera de [1, {}]", current, total)));
        }
        Ok(Self { current, total })
    }

    pub fn get(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// `min(current + 1, total)`.
    pub fn forward(self) -> Self {
        Self { current: (self.current + 1).min(self.total), ..self }
    }

    /// `max(current - 1, 1)`.
    pub fn back(self) -> Self {
        Self { current: self.current.saturating_sub(1).max(1), ..self }
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

/// Motivo de rechazo legible por el usuario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Campo que provocó el rechazo, si se conoce.
    pub field: Option<String>,
    /// Texto a mostrar al usuario.
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { field: None, reason: reason.into() }
    }

    pub fn for_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: Some(field.into()), reason: reason.into() }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Resultado transitorio de validar un paso. No se persiste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Rejection),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(r) => Some(r),
        }
    }

    /// Evalúa `next` sólo si `self` es válido (cortocircuito).
    pub fn and_then<F>(self, next: F) -> ValidationResult
        where F: FnOnce() -> ValidationResult
    {
        match self {
            ValidationResult::Valid => next(),
            invalid => invalid,
        }
    }
}

impl From<std::result::Result<(), Rejection>> for ValidationResult {
    fn from(r: std::result::Result<(), Rejection>) -> Self {
        match r {
            Ok(()) => ValidationResult::Valid,
            Err(rejection) => ValidationResult::Invalid(rejection),
        }
    }
}

/// Variante visual de una notificación tipo "toast".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Notificación transitoria emitida por el controlador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn build(title: impl Into<String>, description: impl Into<String>, variant: NotificationVariant) -> Self {
        Self { id: Uuid::new_v4(),
               title: title.into(),
               description: description.into(),
               variant,
               created_at: Utc::now() }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::build(title, description, NotificationVariant::Default)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::build(title, description, NotificationVariant::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fase del asistente respecto al envío.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    Editing,
    Submitting,
    Completed,
}

/// Resultado de `next()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// El paso actual validó. En el último paso `from == to`.
    Moved { from: u32, to: u32 },
    /// La validación falló; el índice no cambió.
    Rejected(Rejection),
}

/// Error devuelto por el colaborador de envío (red / API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionError {
    /// Mensaje legible; puede venir vacío del colaborador.
    pub message: String,
    pub status_code: Option<u16>,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self { message: message.into(), status_code }
    }

    /// Mensaje a mostrar: el del colaborador o `fallback` si viene vacío.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Resultado de `submit()`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    /// El efecto terminó bien; el asistente queda en `Completed`.
    Submitted(R),
    /// La validación final falló; no hubo llamada de red.
    Rejected(Rejection),
    /// El efecto falló; se puede reintentar.
    Failed(SubmissionError),
    /// Ya hay un envío en curso (o ya se completó): no-op.
    Ignored,
    /// `submit` sólo es accionable en el último paso.
    NotFinalStep,
}

impl<R> SubmitOutcome<R> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}
