//! Definiciones estáticas de los flujos: esquema de campos, reglas por paso
//! y condición de finalización.
pub mod supplier;
pub mod visitor;

use crate::flow_kind::FlowKind;
use onboarding_domain::FieldSchema;

/// Regla de validación de un paso. Las reglas de un paso se evalúan en
/// orden y el primer fallo es el rechazo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRule {
  /// El campo debe tener valor (texto no vacío, casilla marcada).
  Required { field: &'static str, label: &'static str },
  /// Ubicación única validada por el validador geográfico.
  Location { field: &'static str, label: &'static str },
  /// Lista de ubicaciones: cada fragmento se valida por separado.
  LocationList { field: &'static str, label: &'static str },
  /// Formato «ciudad país»: al menos dos palabras. Un campo vacío pasa y
  /// queda para la regla de ubicación.
  Format { field: &'static str, reason: &'static str },
  /// Casillas de aceptación: todas deben estar marcadas.
  Agreements { fields: &'static [&'static str] },
  /// Nivel de idioma dentro del catálogo.
  LanguageLevel { field: &'static str, label: &'static str },
  /// Cada producto debe estar completo.
  Products(ProductRule),
  /// Debe existir al menos un producto.
  HasProducts,
}

/// Qué se exige a cada producto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRule {
  /// Exigir `monthly_production_min` (el alta lo pide, la edición no).
  pub require_monthly_production: bool,
}

/// Definición completa de un flujo.
#[derive(Debug)]
pub struct FlowDefinition {
  pub kind: FlowKind,
  pub schema: &'static FieldSchema,
  /// Reglas por paso; `steps[0]` es el paso 1.
  pub steps: &'static [&'static [StepRule]],
  /// Condición extra evaluada sólo al enviar.
  pub finalization: &'static [StepRule],
  /// Página de estado a la que se navega tras enviar.
  pub status_path: &'static str,
  pub success_title: &'static str,
  pub success_description: &'static str,
  pub failure_title: &'static str,
  pub failure_fallback: &'static str,
}

impl FlowDefinition {
  pub fn total_steps(&self) -> u32 {
    self.steps.len() as u32
  }

  /// Reglas del paso `step` (1-based); vacío si está fuera de rango.
  pub fn rules(&self, step: u32) -> &'static [StepRule] {
    step.checked_sub(1)
        .and_then(|i| self.steps.get(i as usize))
        .copied()
        .unwrap_or(&[])
  }

  pub fn messages(&self) -> wizard::WizardMessages {
    wizard::WizardMessages { success_title: self.success_title.into(),
                             success_description: self.success_description.into(),
                             failure_title: self.failure_title.into(),
                             failure_fallback: self.failure_fallback.into(),
                             ..Default::default() }
  }
}
