// Archivo: stubs.rs
// Propósito: implementaciones en memoria para pruebas y wiring rápido.
//
// Incluye un notificador que graba lo emitido, un validador de tabla fija y
// un efecto de envío con respuestas guionizadas. No están pensados para
// producción.
use crate::contracts::{Notifier, StepCount, StepGate, SubmissionEffect};
use crate::domain::{Notification, Rejection, SubmissionError, ValidationResult};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Notificador que guarda todas las notificaciones recibidas.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de todas las notificaciones, en orden de emisión.
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).push(notification);
    }
}

/// Validador de tabla fija: los pasos registrados en `failing` fallan con
/// su rechazo; el resto valida. Sirve para cualquier tipo de borrador.
#[derive(Debug, Clone)]
pub struct StaticGate {
    total: u32,
    failing: HashMap<u32, Rejection>,
    final_rejection: Option<Rejection>,
}

impl StaticGate {
    pub fn new(total: u32) -> Self {
        Self { total, failing: HashMap::new(), final_rejection: None }
    }

    pub fn failing_at(mut self, step: u32, rejection: Rejection) -> Self {
        self.failing.insert(step, rejection);
        self
    }

    pub fn failing_final(mut self, rejection: Rejection) -> Self {
        self.final_rejection = Some(rejection);
        self
    }

    /// Hace que `step` vuelva a validar.
    pub fn heal(&mut self, step: u32) {
        self.failing.remove(&step);
    }
}

impl StepCount for StaticGate {
    fn total_steps(&self) -> u32 {
        self.total
    }
}

impl<D> StepGate<D> for StaticGate {
    fn validate_step(&self, step: u32, _draft: &D) -> ValidationResult {
        match self.failing.get(&step) {
            Some(rejection) => ValidationResult::Invalid(rejection.clone()),
            None => ValidationResult::Valid,
        }
    }

    fn validate_final(&self, _draft: &D) -> ValidationResult {
        match &self.final_rejection {
            Some(rejection) => ValidationResult::Invalid(rejection.clone()),
            None => ValidationResult::Valid,
        }
    }
}

/// Efecto de envío con respuestas guionizadas.
///
/// Cada llamada consume la siguiente respuesta de la cola; con la cola vacía
/// responde `Ok(())`. Cuenta las llamadas recibidas.
#[derive(Debug, Default)]
pub struct ScriptedEffect {
    script: Mutex<VecDeque<Result<(), SubmissionError>>>,
    calls: AtomicUsize,
}

impl ScriptedEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encola un fallo para la próxima llamada.
    pub fn fail_next(&self, error: SubmissionError) {
        self.script.lock().unwrap_or_else(|e| e.into_inner()).push_back(Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<D> SubmissionEffect<D> for ScriptedEffect
    where D: Sync
{
    type Receipt = ();

    async fn submit(&self, _draft: &D) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        next.unwrap_or(Ok(()))
    }
}
