use crate::errors::WorkflowError;
use crate::flows::{self, FlowDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flujos de alta / edición que soporta el crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
  VisitorRegistration,
  VisitorEdit,
  SupplierRegistration,
  SupplierEdit,
}

/// Rol cuyo perfil edita un flujo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Visitor,
  Supplier,
}

impl FlowKind {
  pub const ALL: [FlowKind; 4] =
    [FlowKind::VisitorRegistration, FlowKind::VisitorEdit, FlowKind::SupplierRegistration, FlowKind::SupplierEdit];

  pub fn role(&self) -> Role {
    match self {
      FlowKind::VisitorRegistration | FlowKind::VisitorEdit => Role::Visitor,
      FlowKind::SupplierRegistration | FlowKind::SupplierEdit => Role::Supplier,
    }
  }

  /// Los flujos de edición parten de un perfil ya enviado.
  pub fn is_edit(&self) -> bool {
    matches!(self, FlowKind::VisitorEdit | FlowKind::SupplierEdit)
  }

  pub fn definition(&self) -> &'static FlowDefinition {
    match self {
      FlowKind::VisitorRegistration => &flows::visitor::REGISTRATION,
      FlowKind::VisitorEdit => &flows::visitor::EDIT,
      FlowKind::SupplierRegistration => &flows::supplier::REGISTRATION,
      FlowKind::SupplierEdit => &flows::supplier::EDIT,
    }
  }
}

impl fmt::Display for FlowKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      FlowKind::VisitorRegistration => "visitor_registration",
      FlowKind::VisitorEdit => "visitor_edit",
      FlowKind::SupplierRegistration => "supplier_registration",
      FlowKind::SupplierEdit => "supplier_edit",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for FlowKind {
  type Err = WorkflowError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase().replace('-', "_");
    FlowKind::ALL.into_iter()
                 .find(|k| k.to_string() == wanted)
                 .ok_or_else(|| WorkflowError::Validation(format!("flujo desconocido: {}", s)))
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Role::Visitor => write!(f, "visitor"),
      Role::Supplier => write!(f, "supplier"),
    }
  }
}
