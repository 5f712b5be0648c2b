use onboarding_domain::{DelimiterClass, LocationLists, RegistrationDraft};
use onboarding_workflow::{FlowKind, FlowStepValidator};
use wizard::{StepCount, StepGate, ValidationResult};

#[test]
fn out_of_range_steps_are_vacuously_valid() {
  for kind in FlowKind::ALL {
    let definition = kind.definition();
    let validator = FlowStepValidator::new(definition, LocationLists::default(), DelimiterClass::Broad);
    let draft = RegistrationDraft::new(definition.schema);
    let total = validator.total_steps();

    assert_eq!(validator.validate_step(0, &draft), ValidationResult::Valid, "{}", kind);
    assert_eq!(validator.validate_step(total + 1, &draft), ValidationResult::Valid, "{}", kind);
    assert_eq!(validator.validate_step(99, &draft), ValidationResult::Valid, "{}", kind);
    // el primer paso de un borrador en blanco nunca valida
    assert!(!validator.validate_step(1, &draft).is_valid(), "{}", kind);
  }
}
