// submission.rs
//
// Efecto de envío: serializa el borrador y llama a la operación del
// backend que corresponde al flujo.
use crate::api::RegistrationApi;
use crate::flow_kind::FlowKind;
use async_trait::async_trait;
use log::{debug, info};
use onboarding_domain::RegistrationDraft;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wizard::{SubmissionEffect, SubmissionError};

/// Comprobante de un envío aceptado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
  pub kind: FlowKind,
  /// Página de estado a la que navegar.
  pub status_path: String,
  /// Mensaje devuelto por el backend, si lo hubo.
  pub message: Option<String>,
}

pub struct RegistrationSubmitter {
  kind: FlowKind,
  api: Arc<dyn RegistrationApi>,
}

impl RegistrationSubmitter {
  pub fn new(kind: FlowKind, api: Arc<dyn RegistrationApi>) -> Self {
    Self { kind, api }
  }

  pub fn kind(&self) -> FlowKind {
    self.kind
  }
}

#[async_trait]
impl SubmissionEffect<RegistrationDraft> for RegistrationSubmitter {
  type Receipt = SubmissionReceipt;

  async fn submit(&self, draft: &RegistrationDraft) -> Result<SubmissionReceipt, SubmissionError> {
    let payload = draft.to_payload().map_err(|e| SubmissionError::new(e.to_string(), None))?;
    debug!("{}: payload con {} claves", self.kind, payload.as_object().map(|o| o.len()).unwrap_or(0));
    let response = match self.kind {
      FlowKind::VisitorRegistration => self.api.register_visitor(payload).await,
      FlowKind::VisitorEdit => self.api.update_visitor(payload).await,
      FlowKind::SupplierRegistration => self.api.register_supplier(payload).await,
      FlowKind::SupplierEdit => self.api.update_supplier(payload).await,
    }?;
    info!("{}: envío aceptado por el backend", self.kind);
    Ok(SubmissionReceipt { kind: self.kind,
                           status_path: self.kind.definition().status_path.to_string(),
                           message: response.message })
  }
}
