//! onboarding-workflow: flujos de alta de visitantes y proveedores
//!
//! Une el motor genérico `wizard` con el dominio de `onboarding-domain`:
//! tablas de reglas por paso (`flows`), el validador de pasos
//! (`FlowStepValidator`), el efecto de envío sobre el colaborador
//! `RegistrationApi` y la fábrica de sesiones.

pub mod api;
pub mod config;
pub mod errors;
pub mod factory;
pub mod flow_kind;
pub mod flows;
pub mod rules;
pub mod session;
pub mod stubs;
pub mod submission;

pub use api::{ApiError, ApiResponse, RegistrationApi};
pub use config::WorkflowConfig;
pub use errors::WorkflowError;
pub use factory::OnboardingFactory;
pub use flow_kind::{FlowKind, Role};
pub use flows::{FlowDefinition, ProductRule, StepRule};
pub use rules::FlowStepValidator;
pub use session::{OnboardingSession, SessionView};
pub use submission::{RegistrationSubmitter, SubmissionReceipt};
