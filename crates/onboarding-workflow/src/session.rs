// session.rs
//
// Sesión de alta: dueña del borrador, del controlador y del efecto de
// envío. Es la superficie que usan la CLI y las pruebas.
use crate::errors::WorkflowError;
use crate::flow_kind::FlowKind;
use crate::rules::FlowStepValidator;
use crate::submission::{RegistrationSubmitter, SubmissionReceipt};
use log::info;
use onboarding_domain::{FieldValue, Product, RegistrationDraft};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use wizard::{Advance, Notifier, Rejection, StepIndex, SubmitOutcome, WizardController, WizardPhase};

pub const SUBMITTED_REASON: &str = "اطلاعات شما قبلا ارسال شده است";

/// Lo que debe mostrarse en cada momento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
  Step { current: u32, total: u32 },
  Submitting,
  /// Envío aceptado; navegar a la página de estado.
  PendingReview { status_path: String },
}

pub struct OnboardingSession {
  kind: FlowKind,
  draft: RegistrationDraft,
  controller: WizardController<FlowStepValidator>,
  submitter: RegistrationSubmitter,
  notifier: Arc<dyn Notifier>,
  receipt: Option<SubmissionReceipt>,
}

impl OnboardingSession {
  pub(crate) fn new(kind: FlowKind,
                    draft: RegistrationDraft,
                    controller: WizardController<FlowStepValidator>,
                    submitter: RegistrationSubmitter,
                    notifier: Arc<dyn Notifier>)
                    -> Self {
    Self { kind, draft, controller, submitter, notifier, receipt: None }
  }

  pub fn id(&self) -> Uuid {
    self.controller.id()
  }

  pub fn kind(&self) -> FlowKind {
    self.kind
  }

  pub fn draft(&self) -> &RegistrationDraft {
    &self.draft
  }

  pub fn step(&self) -> StepIndex {
    self.controller.step()
  }

  pub fn notifier(&self) -> &Arc<dyn Notifier> {
    &self.notifier
  }

  pub fn receipt(&self) -> Option<&SubmissionReceipt> {
    self.receipt.as_ref()
  }

  pub fn view(&self) -> SessionView {
    if let Some(receipt) = &self.receipt {
      return SessionView::PendingReview { status_path: receipt.status_path.clone() };
    }
    match self.controller.phase() {
      WizardPhase::Submitting => SessionView::Submitting,
      _ => SessionView::Step { current: self.controller.current(), total: self.controller.total() },
    }
  }

  fn editable(&self) -> Result<(), WorkflowError> {
    match self.receipt {
      Some(_) => Err(WorkflowError::Validation("la sesión ya fue enviada".into())),
      None => Ok(()),
    }
  }

  pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), WorkflowError> {
    self.editable()?;
    Ok(self.draft.set(name, value)?)
  }

  /// Actualiza un campo desde texto libre.
  pub fn set_input(&mut self, name: &str, raw: &str) -> Result<(), WorkflowError> {
    self.editable()?;
    Ok(self.draft.set_from_input(name, raw)?)
  }

  pub fn add_product(&mut self) -> Result<usize, WorkflowError> {
    self.editable()?;
    Ok(self.draft.add_product()?)
  }

  pub fn remove_product(&mut self, index: usize) -> Result<Product, WorkflowError> {
    self.editable()?;
    Ok(self.draft.remove_product(index)?)
  }

  pub fn update_product(&mut self,
                        index: usize,
                        field: &str,
                        value: impl Into<FieldValue>)
                        -> Result<(), WorkflowError> {
    self.editable()?;
    Ok(self.draft.update_product(index, field, value)?)
  }

  /// Tras un envío aceptado no hay navegación: devuelve un rechazo sin
  /// notificar y el paso no cambia.
  pub fn next(&mut self) -> Advance {
    if self.receipt.is_some() {
      return Advance::Rejected(Rejection::new(SUBMITTED_REASON));
    }
    self.controller.next(&self.draft)
  }

  /// No-op tras un envío aceptado.
  pub fn prev(&mut self) -> StepIndex {
    if self.receipt.is_some() {
      return self.controller.step();
    }
    self.controller.prev()
  }

  /// Envía desde el último paso. Si el backend acepta, el borrador se
  /// descarta y la vista pasa a `PendingReview`.
  pub async fn submit(&mut self) -> SubmitOutcome<SubmissionReceipt> {
    let outcome = self.controller.submit(&self.draft, &self.submitter).await;
    if let SubmitOutcome::Submitted(receipt) = &outcome {
      info!("sesión {} ({}): pendiente de revisión en {}", self.id(), self.kind, receipt.status_path);
      self.draft = RegistrationDraft::new(self.draft.schema());
      self.receipt = Some(receipt.clone());
    }
    outcome
  }
}
