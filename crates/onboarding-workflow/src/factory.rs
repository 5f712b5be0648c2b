use crate::api::RegistrationApi;
use crate::config::WorkflowConfig;
use crate::errors::WorkflowError;
use crate::flow_kind::FlowKind;
use crate::rules::FlowStepValidator;
use crate::session::OnboardingSession;
use crate::submission::RegistrationSubmitter;
use log::info;
use onboarding_domain::RegistrationDraft;
use std::sync::Arc;
use wizard::{Notifier, WizardController};

/// Fábrica de sesiones de alta.
///
/// `create` arranca un borrador en blanco; `load` rehidrata el perfil ya
/// enviado (sólo flujos de edición).
pub struct OnboardingFactory;

impl OnboardingFactory {
  pub fn create(kind: FlowKind,
                config: &WorkflowConfig,
                api: Arc<dyn RegistrationApi>,
                notifier: Arc<dyn Notifier>)
                -> Result<OnboardingSession, WorkflowError> {
    let definition = kind.definition();
    let draft = RegistrationDraft::new(definition.schema);
    Self::assemble(kind, config, draft, api, notifier)
  }

  /// Carga el perfil del usuario con `fetch_profile` y lo usa como borrador
  /// inicial. Sin perfil previo el borrador queda con los valores por
  /// defecto.
  pub async fn load(kind: FlowKind,
                    config: &WorkflowConfig,
                    api: Arc<dyn RegistrationApi>,
                    notifier: Arc<dyn Notifier>)
                    -> Result<OnboardingSession, WorkflowError> {
    if !kind.is_edit() {
      return Err(WorkflowError::Validation(format!("{} no parte de un perfil existente", kind)));
    }
    let definition = kind.definition();
    let draft = match api.fetch_profile(kind.role()).await? {
      Some(profile) => RegistrationDraft::hydrate(definition.schema, &profile)?,
      None => {
        info!("{}: sin perfil previo, se usa un borrador vacío", kind);
        RegistrationDraft::new(definition.schema)
      }
    };
    Self::assemble(kind, config, draft, api, notifier)
  }

  fn assemble(kind: FlowKind,
              config: &WorkflowConfig,
              draft: RegistrationDraft,
              api: Arc<dyn RegistrationApi>,
              notifier: Arc<dyn Notifier>)
              -> Result<OnboardingSession, WorkflowError> {
    let definition = kind.definition();
    let validator = FlowStepValidator::new(definition, config.location_lists()?, config.delimiters);
    let controller = WizardController::new(validator, notifier.clone())?.with_messages(definition.messages());
    let submitter = RegistrationSubmitter::new(kind, api);
    info!("sesión {} creada para {} ({} pasos)", controller.id(), kind, controller.total());
    Ok(OnboardingSession::new(kind, draft, controller, submitter, notifier))
  }
}
