// Archivo: engine.rs
// Propósito: implementar `WizardController`, la máquina de estados del
// asistente por pasos (next / prev / submit).
//
// Nota: el controlador no es dueño del borrador. Lo recibe prestado en cada
// operación para que el mismo valor pueda editarse entre transiciones.
use crate::contracts::{Notifier, StepCount, StepGate, SubmissionEffect};
use crate::domain::{Advance, Notification, Rejection, StepIndex, SubmitOutcome, ValidationResult, WizardPhase};
use crate::errors::Result;
use crate::gate::SubmissionGate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Textos que el controlador muestra al usuario.
///
/// Los valores por defecto son los mensajes genéricos en persa; cada flujo
/// concreto puede sobreescribir los de éxito.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardMessages {
    /// Título del aviso cuando un paso no valida.
    pub incomplete_title: String,
    /// Descripción usada si el rechazo no trae motivo propio.
    pub incomplete_description: String,
    pub success_title: String,
    pub success_description: String,
    pub failure_title: String,
    /// Mensaje si el colaborador no devuelve ninguno.
    pub failure_fallback: String,
}

impl Default for WizardMessages {
    fn default() -> Self {
        Self { incomplete_title: "اطلاعات ناقص".into(),
               incomplete_description: "لطفا تمام فیلدهای الزامی را پر کنید".into(),
               success_title: "ثبت‌نام موفق".into(),
               success_description: "اطلاعات شما با موفقیت ارسال شد.".into(),
               failure_title: "خطا در ثبت‌نام".into(),
               failure_fallback: "خطا در ارسال اطلاعات".into() }
    }
}

/// Controlador del asistente.
///
/// Responsabilidades:
/// - Mantener el `StepIndex` dentro de `[1, N]`.
/// - Pedir al `StepGate` la validación antes de avanzar.
/// - Invocar el `SubmissionEffect` exactamente una vez por intento de envío,
///   protegido por `SubmissionGate`.
/// - Emitir una notificación en cada rechazo o fallo.
pub struct WizardController<G> {
    id: Uuid,
    gate: G,
    step: StepIndex,
    phase: WizardPhase,
    submission: SubmissionGate,
    notifier: Arc<dyn Notifier>,
    messages: WizardMessages,
}

impl<G> WizardController<G> {
    /// Crea un controlador en el paso 1. Falla si `gate.total_steps() == 0`.
    pub fn new(gate: G, notifier: Arc<dyn Notifier>) -> Result<Self>
        where G: StepCount
    {
        let step = StepIndex::first(gate.total_steps())?;
        Ok(Self { id: Uuid::new_v4(),
                  gate,
                  step,
                  phase: WizardPhase::Editing,
                  submission: SubmissionGate::new(),
                  notifier,
                  messages: WizardMessages::default() })
    }

    pub fn with_messages(mut self, messages: WizardMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current(&self) -> u32 {
        self.step.get()
    }

    pub fn total(&self) -> u32 {
        self.step.total()
    }

    pub fn step(&self) -> StepIndex {
        self.step
    }

    /// `Submitting` mientras haya un permiso de envío vivo.
    pub fn phase(&self) -> WizardPhase {
        match self.phase {
            WizardPhase::Completed => WizardPhase::Completed,
            _ if self.submission.is_busy() => WizardPhase::Submitting,
            _ => WizardPhase::Editing,
        }
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Handle compartido de la bandera de envío.
    pub fn submission_gate(&self) -> SubmissionGate {
        self.submission.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    /// Avanza un paso si el actual valida; si no, notifica y no cambia nada.
    pub fn next<D>(&mut self, draft: &D) -> Advance
        where G: StepGate<D>
    {
        let from = self.step.get();
        match self.gate.validate_step(from, draft) {
            ValidationResult::Valid => {
                self.step = self.step.forward();
                debug!("wizard {}: paso {} -> {}", self.id, from, self.step);
                Advance::Moved { from, to: self.step.get() }
            }
            ValidationResult::Invalid(rejection) => {
                self.reject(&rejection);
                Advance::Rejected(rejection)
            }
        }
    }

    /// Retrocede un paso sin validar.
    pub fn prev(&mut self) -> StepIndex {
        let from = self.step.get();
        self.step = self.step.back();
        debug!("wizard {}: paso {} -> {}", self.id, from, self.step);
        self.step
    }

    /// Envía el borrador desde el último paso.
    ///
    /// Revalida el paso `N` y la condición de finalización antes de llamar al
    /// efecto. La bandera de envío queda libre al volver, sea cual sea el
    /// resultado.
    pub async fn submit<D, E>(&mut self, draft: &D, effect: &E) -> SubmitOutcome<E::Receipt>
        where G: StepGate<D>,
              D: Sync,
              E: SubmissionEffect<D>
    {
        if !self.step.is_last() {
            debug!("wizard {}: submit ignorado en el paso {}", self.id, self.step);
            return SubmitOutcome::NotFinalStep;
        }
        if self.phase == WizardPhase::Completed {
            debug!("wizard {}: ya completado, submit ignorado", self.id);
            return SubmitOutcome::Ignored;
        }
        let _permit = match self.submission.try_acquire() {
            Some(permit) => permit,
            None => {
                info!("wizard {}: envío en curso, submit ignorado", self.id);
                return SubmitOutcome::Ignored;
            }
        };

        let gate = &self.gate;
        let verdict = gate.validate_step(self.step.get(), draft)
                          .and_then(|| gate.validate_final(draft));
        if let ValidationResult::Invalid(rejection) = verdict {
            self.reject(&rejection);
            return SubmitOutcome::Rejected(rejection);
        }

        let attempt = Uuid::new_v4();
        info!("wizard {}: enviando (intento {})", self.id, attempt);
        match effect.submit(draft).await {
            Ok(receipt) => {
                self.phase = WizardPhase::Completed;
                info!("wizard {}: intento {} aceptado", self.id, attempt);
                self.notifier.notify(Notification::success(self.messages.success_title.clone(),
                                                           self.messages.success_description.clone()));
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                warn!("wizard {}: intento {} falló: {}", self.id, attempt, err);
                let description = err.user_message(&self.messages.failure_fallback).to_string();
                self.notifier
                    .notify(Notification::destructive(self.messages.failure_title.clone(), description));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn reject(&self, rejection: &Rejection) {
        info!("wizard {}: paso {} rechazado: {}", self.id, self.step, rejection);
        let description = if rejection.reason.trim().is_empty() {
            self.messages.incomplete_description.clone()
        } else {
            rejection.reason.clone()
        };
        self.notifier
            .notify(Notification::destructive(self.messages.incomplete_title.clone(), description));
    }
}
