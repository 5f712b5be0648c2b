// config.rs
//
// Configuración del workflow leída del entorno (con `.env` opcional).
use crate::errors::WorkflowError;
use log::info;
use onboarding_domain::{DelimiterClass, LocationLists, MatchMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DELIMITERS_VAR: &str = "ONBOARDING_DESTINATION_DELIMITERS";
pub const MATCH_VAR: &str = "ONBOARDING_LOCATION_MATCH";
pub const LOCATIONS_FILE_VAR: &str = "ONBOARDING_LOCATIONS_FILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
  /// Separadores del campo de ciudades de destino.
  pub delimiters: DelimiterClass,
  pub match_mode: MatchMode,
  /// Fichero JSON `{ "allow": [...], "deny": [...] }` que sustituye a las
  /// listas incorporadas.
  pub locations_file: Option<PathBuf>,
}

/// Formato del fichero de listas.
#[derive(Debug, Deserialize)]
struct LocationsFile {
  #[serde(default)]
  allow: Vec<String>,
  #[serde(default)]
  deny: Vec<String>,
}

impl WorkflowConfig {
  /// Lee la configuración del entorno. Carga `.env` si existe.
  pub fn from_env() -> Result<Self, WorkflowError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Igual que `from_env` pero con una función de búsqueda arbitraria.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, WorkflowError>
    where F: Fn(&str) -> Option<String>
  {
    let mut cfg = WorkflowConfig::default();
    if let Some(raw) = lookup(DELIMITERS_VAR).filter(|v| !v.trim().is_empty()) {
      cfg.delimiters = raw.parse().map_err(|e| WorkflowError::Config(format!("{}: {}", DELIMITERS_VAR, e)))?;
    }
    if let Some(raw) = lookup(MATCH_VAR).filter(|v| !v.trim().is_empty()) {
      cfg.match_mode = raw.parse().map_err(|e| WorkflowError::Config(format!("{}: {}", MATCH_VAR, e)))?;
    }
    cfg.locations_file = lookup(LOCATIONS_FILE_VAR).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
    Ok(cfg)
  }

  /// Listas de ubicaciones con el modo de coincidencia configurado.
  pub fn location_lists(&self) -> Result<LocationLists, WorkflowError> {
    let lists = match &self.locations_file {
      Some(path) => {
        let raw = std::fs::read_to_string(path).map_err(|e| {
                                                   WorkflowError::Config(format!("no se pudo leer {}: {}",
                                                                                 path.display(),
                                                                                 e))
                                                 })?;
        let file: LocationsFile = serde_json::from_str(&raw)?;
        info!("listas de ubicaciones cargadas de {} ({} permitidas, {} denegadas)",
              path.display(),
              file.allow.len(),
              file.deny.len());
        LocationLists::new(file.allow, file.deny)
      }
      None => LocationLists::default(),
    };
    Ok(lists.with_mode(self.match_mode))
  }
}
