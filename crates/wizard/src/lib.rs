//! Crate `wizard` — motor genérico de asistentes por pasos
//!
//! Define el índice de paso acotado (`StepIndex`), el resultado transitorio
//! de validación (`ValidationResult`), los contratos de las costuras
//! (`StepGate`, `SubmissionEffect`, `Notifier`) y el controlador
//! `WizardController`, que implementa la navegación secuencial
//! `next` / `prev` / `submit`.
//!
//! Diseño resumido:
//! - Avance condicionado: `next` sólo incrementa el índice si el paso actual
//!   valida; el retroceso es incondicional.
//! - Un envío a la vez: `SubmissionGate` es una bandera atómica con permiso
//!   RAII; un segundo `submit` con el primero en curso es un no-op.
//! - Los fallos de validación son valores, no errores.
//!
//! Ejemplo rápido:
//! ```rust
//! use std::sync::Arc;
//! use wizard::stubs::{RecordingNotifier, StaticGate};
//! use wizard::WizardController;
//! let notifier = Arc::new(RecordingNotifier::new());
//! let mut wizard = WizardController::new(StaticGate::new(3), notifier).unwrap();
//! wizard.next(&());
//! assert_eq!(wizard.current(), 2);
//! ```
pub mod contracts;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod gate;
pub mod stubs;

pub use contracts::*;
pub use domain::*;
pub use engine::*;
pub use errors::*;
pub use gate::*;
