// rules.rs
//
// Validador de pasos: evalúa las tablas de `StepRule` de un flujo sobre el
// borrador. Puro: no muta el borrador ni notifica.
use crate::flows::{FlowDefinition, ProductRule, StepRule};
use onboarding_domain::location::{validate_location, validate_location_list};
use onboarding_domain::{DelimiterClass, LanguageLevel, LocationLists, LocationRejection, Product, RegistrationDraft};
use wizard::{Rejection, StepCount, StepGate, ValidationResult};

pub const INCOMPLETE_REASON: &str = "لطفا تمام فیلدهای الزامی را پر کنید";
pub const AGREEMENTS_REASON: &str = "لطفا تمام توافق‌نامه‌ها را بپذیرید";
pub const LANGUAGE_REASON: &str = "سطح زبان انتخاب شده نامعتبر است";
pub const PRODUCTS_REASON: &str = "لطفا اطلاعات تمام محصولات را کامل کنید";
pub const PRODUCT_TYPE_REASON: &str = "نوع محصول انتخاب شده نامعتبر است";
pub const NO_PRODUCTS_REASON: &str = "حداقل یک محصول باید اضافه شود";

/// Validador de pasos de un flujo concreto.
#[derive(Debug, Clone)]
pub struct FlowStepValidator {
  definition: &'static FlowDefinition,
  lists: LocationLists,
  delimiters: DelimiterClass,
}

impl FlowStepValidator {
  pub fn new(definition: &'static FlowDefinition, lists: LocationLists, delimiters: DelimiterClass) -> Self {
    Self { definition, lists, delimiters }
  }

  pub fn definition(&self) -> &'static FlowDefinition {
    self.definition
  }

  pub fn lists(&self) -> &LocationLists {
    &self.lists
  }

  fn check_all(&self, rules: &[StepRule], draft: &RegistrationDraft) -> ValidationResult {
    rules.iter()
         .map(|rule| self.check(rule, draft))
         .find(|verdict| !verdict.is_valid())
         .unwrap_or(ValidationResult::Valid)
  }

  fn check(&self, rule: &StepRule, draft: &RegistrationDraft) -> ValidationResult {
    match *rule {
      StepRule::Required { field, .. } => require(draft.is_present(field), field, INCOMPLETE_REASON),
      StepRule::Location { field, label } => {
        validate_location(draft.text(field), label, &self.lists).map_err(|r| location_rejection(field, r))
                                                                .into()
      }
      StepRule::LocationList { field, label } => {
        validate_location_list(draft.text(field), label, &self.lists, self.delimiters)
          .map_err(|r| location_rejection(field, r))
          .into()
      }
      StepRule::Format { field, reason } => {
        let raw = draft.text(field).trim();
        require(raw.is_empty() || raw.contains(char::is_whitespace), field, reason)
      }
      StepRule::Agreements { fields } => match fields.iter().find(|f| !draft.flag(f)) {
        Some(field) => ValidationResult::Invalid(Rejection::for_field(*field, AGREEMENTS_REASON)),
        None => ValidationResult::Valid,
      },
      StepRule::LanguageLevel { field, .. } => {
        let raw = draft.text(field);
        if raw.trim().is_empty() {
          ValidationResult::Invalid(Rejection::for_field(field, INCOMPLETE_REASON))
        } else {
          require(raw.parse::<LanguageLevel>().is_ok(), field, LANGUAGE_REASON)
        }
      }
      StepRule::Products(rule) => self.check_products(rule, draft.products()),
      StepRule::HasProducts => require(!draft.products().is_empty(), "products", NO_PRODUCTS_REASON),
    }
  }

  fn check_products(&self, rule: ProductRule, products: &[Product]) -> ValidationResult {
    for (i, p) in products.iter().enumerate() {
      let missing = [("product_name", &p.product_name),
                     ("product_type", &p.product_type),
                     ("description", &p.description)].into_iter()
                                                    .chain(rule.require_monthly_production
                                                               .then_some(("monthly_production_min",
                                                                           &p.monthly_production_min)))
                                                    .find(|(_, v)| v.trim().is_empty());
      if let Some((field, _)) = missing {
        return ValidationResult::Invalid(Rejection::for_field(format!("products[{}].{}", i, field), PRODUCTS_REASON));
      }
      if p.kind().is_none() {
        return ValidationResult::Invalid(Rejection::for_field(format!("products[{}].product_type", i),
                                                              PRODUCT_TYPE_REASON));
      }
    }
    ValidationResult::Valid
  }
}

fn require(ok: bool, field: &str, reason: &str) -> ValidationResult {
  if ok {
    ValidationResult::Valid
  } else {
    ValidationResult::Invalid(Rejection::for_field(field, reason))
  }
}

fn location_rejection(field: &str, rejection: LocationRejection) -> Rejection {
  Rejection::for_field(field, rejection.reason())
}

impl StepCount for FlowStepValidator {
  fn total_steps(&self) -> u32 {
    self.definition.total_steps()
  }
}

impl StepGate<RegistrationDraft> for FlowStepValidator {
  fn validate_step(&self, step: u32, draft: &RegistrationDraft) -> ValidationResult {
    self.check_all(self.definition.rules(step), draft)
  }

  fn validate_final(&self, draft: &RegistrationDraft) -> ValidationResult {
    self.check_all(self.definition.finalization, draft)
  }
}
