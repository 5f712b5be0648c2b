// Archivo: gate.rs
// Propósito: bandera "submitting" compartida que serializa los envíos.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bandera de envío en curso.
///
/// `try_acquire` devuelve un `SubmitPermit` sólo si no hay otro vivo; el
/// permiso libera la bandera al soltarse, en cualquier camino de salida.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    busy: Arc<AtomicBool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SubmitPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit { busy: self.busy.clone() })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Permiso exclusivo de envío. Libera la bandera en `Drop`.
#[derive(Debug)]
pub struct SubmitPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
