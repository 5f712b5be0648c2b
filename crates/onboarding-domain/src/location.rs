// location.rs
//
// Validador geográfico: clasifica un texto libre de ubicación contra una
// lista de permitidos (países/ciudades árabes) y una de denegados (lugares
// iraníes). La lista de denegados se evalúa primero y corta la evaluación.
use crate::places::{ARABIC_PLACES, IRANIAN_PLACES};
use crate::DomainError;
use log::trace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

static BUILTIN: Lazy<LocationLists> = Lazy::new(|| LocationLists::new(ARABIC_PLACES, IRANIAN_PLACES));

/// Cómo se compara una entrada de lista con el texto normalizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
  /// La entrada aparece en cualquier posición del texto.
  #[default]
  Substring,
  /// La entrada coincide con una palabra completa (o una secuencia de
  /// palabras completas si la entrada tiene varias).
  ExactToken,
}

impl FromStr for MatchMode {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "substring" => Ok(MatchMode::Substring),
      "exact" | "exact_token" | "token" => Ok(MatchMode::ExactToken),
      other => Err(DomainError::ValidationError(format!("modo de coincidencia desconocido: {}", other))),
    }
  }
}

/// Clase de delimitadores para campos con varias ubicaciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterClass {
  /// `,` `،` `-` y cualquier secuencia de espacios. Parte los nombres de
  /// varias palabras: "امارات متحده عربی" se valida como tres fragmentos y
  /// "متحده" no está en la lista. Para aceptarlos, usar `Commas`.
  #[default]
  Broad,
  /// Sólo `,` y `،`; mantiene juntos nombres de varias palabras.
  Commas,
}

impl DelimiterClass {
  pub fn is_delimiter(&self, c: char) -> bool {
    match self {
      DelimiterClass::Broad => c == ',' || c == '،' || c == '-' || c.is_whitespace(),
      DelimiterClass::Commas => c == ',' || c == '،',
    }
  }
}

impl FromStr for DelimiterClass {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "broad" => Ok(DelimiterClass::Broad),
      "commas" | "comma" => Ok(DelimiterClass::Commas),
      other => Err(DomainError::ValidationError(format!("clase de delimitadores desconocida: {}", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationFault {
  /// Campo vacío o sólo espacios.
  Required,
  /// Contiene un lugar de la lista de denegados.
  Iranian,
  /// No contiene ningún lugar de la lista de permitidos.
  Unrecognized,
}

/// Rechazo de una ubicación, con la etiqueta del campo para el mensaje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRejection {
  pub fault: LocationFault,
  pub label: String,
  /// Fragmento concreto que falló en campos con varias ubicaciones.
  pub token: Option<String>,
}

impl LocationRejection {
  fn new(fault: LocationFault, label: &str) -> Self {
    Self { fault, label: label.to_string(), token: None }
  }

  /// Mensaje en persa para el usuario.
  pub fn reason(&self) -> String {
    match self.fault {
      LocationFault::Required => format!("{} الزامی است", self.label),
      LocationFault::Iranian => format!("{} نمی‌تواند شامل شهرها یا کشورهای ایرانی باشد", self.label),
      LocationFault::Unrecognized => format!("{} باید شامل نام یک شهر یا کشور عربی باشد", self.label),
    }
  }
}

/// Normaliza texto de ubicación: minúsculas, `ي`/`ى` → `ی`, `ك` → `ک`, sin
/// ZWNJ/ZWJ y con los espacios colapsados.
pub fn normalize_location(raw: &str) -> String {
  let mapped: String = raw.chars()
                          .filter(|c| *c != '\u{200C}' && *c != '\u{200D}')
                          .map(|c| match c {
                            'ي' | 'ى' => 'ی',
                            'ك' => 'ک',
                            other => other,
                          })
                          .collect::<String>()
                          .to_lowercase();
  mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn words(normalized: &str) -> Vec<&str> {
  normalized.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect()
}

/// Listas inmutables de permitidos y denegados, ya normalizadas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLists {
  allow: BTreeSet<String>,
  deny: BTreeSet<String>,
  mode: MatchMode,
}

impl Default for LocationLists {
  fn default() -> Self {
    BUILTIN.clone()
  }
}

impl LocationLists {
  /// Construye listas a partir de entradas arbitrarias (por ejemplo
  /// fixtures de prueba). Las entradas vacías se descartan.
  pub fn new<A, D>(allow: A, deny: D) -> Self
    where A: IntoIterator,
          A::Item: AsRef<str>,
          D: IntoIterator,
          D::Item: AsRef<str>
  {
    let norm = |e: &str| {
      let n = normalize_location(e);
      (!n.is_empty()).then_some(n)
    };
    Self { allow: allow.into_iter().filter_map(|e| norm(e.as_ref())).collect(),
           deny: deny.into_iter().filter_map(|e| norm(e.as_ref())).collect(),
           mode: MatchMode::default() }
  }

  /// Listas incorporadas.
  pub fn builtin() -> &'static LocationLists {
    &BUILTIN
  }

  pub fn with_mode(mut self, mode: MatchMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn mode(&self) -> MatchMode {
    self.mode
  }

  pub fn allow(&self) -> impl Iterator<Item = &str> {
    self.allow.iter().map(String::as_str)
  }

  pub fn deny(&self) -> impl Iterator<Item = &str> {
    self.deny.iter().map(String::as_str)
  }

  fn find<'a>(&self, set: &'a BTreeSet<String>, normalized: &str) -> Option<&'a str> {
    match self.mode {
      MatchMode::Substring => set.iter().find(|e| normalized.contains(e.as_str())).map(String::as_str),
      MatchMode::ExactToken => {
        let tokens = words(normalized);
        set.iter()
           .find(|e| {
             let entry = words(e);
             !entry.is_empty() && tokens.windows(entry.len()).any(|w| w == entry.as_slice())
           })
           .map(String::as_str)
      }
    }
  }

  /// Clasifica una ubicación ya normalizada y no vacía.
  fn classify(&self, normalized: &str) -> Result<(), LocationFault> {
    if let Some(hit) = self.find(&self.deny, normalized) {
      trace!("ubicación '{}' denegada por '{}'", normalized, hit);
      return Err(LocationFault::Iranian);
    }
    match self.find(&self.allow, normalized) {
      Some(hit) => {
        trace!("ubicación '{}' aceptada por '{}'", normalized, hit);
        Ok(())
      }
      None => Err(LocationFault::Unrecognized),
    }
  }
}

/// Valida una ubicación única. `label` es la etiqueta del campo usada en el
/// mensaje de rechazo.
pub fn validate_location(input: &str, label: &str, lists: &LocationLists) -> Result<(), LocationRejection> {
  let normalized = normalize_location(input);
  if normalized.is_empty() {
    return Err(LocationRejection::new(LocationFault::Required, label));
  }
  lists.classify(&normalized).map_err(|fault| LocationRejection::new(fault, label))
}

/// Separa un campo con varias ubicaciones en fragmentos no vacíos.
pub fn split_locations(raw: &str, delimiters: DelimiterClass) -> Vec<&str> {
  raw.split(|c: char| delimiters.is_delimiter(c))
     .map(str::trim)
     .filter(|t| !t.is_empty())
     .collect()
}

/// Valida un campo con varias ubicaciones: cada fragmento por separado; el
/// campo pasa sólo si pasan todos.
pub fn validate_location_list(raw: &str,
                              label: &str,
                              lists: &LocationLists,
                              delimiters: DelimiterClass)
                              -> Result<(), LocationRejection> {
  let tokens = split_locations(raw, delimiters);
  if tokens.is_empty() {
    return Err(LocationRejection::new(LocationFault::Required, label));
  }
  for token in tokens {
    if let Err(mut rejection) = validate_location(token, label, lists) {
      rejection.token = Some(token.to_string());
      return Err(rejection);
    }
  }
  Ok(())
}

impl fmt::Display for LocationRejection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.reason())
  }
}

impl std::error::Error for LocationRejection {}

impl fmt::Display for LocationFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      LocationFault::Required => "required",
      LocationFault::Iranian => "iranian",
      LocationFault::Unrecognized => "unrecognized",
    };
    write!(f, "{}", s)
  }
}
