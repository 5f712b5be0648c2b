use async_trait::async_trait;
use std::sync::Arc;
use wizard::stubs::{RecordingNotifier, ScriptedEffect, StaticGate};
use wizard::{Advance, Rejection, StepIndex, SubmissionEffect, SubmissionError, SubmitOutcome, WizardController,
             WizardPhase};

fn controller(gate: StaticGate) -> (WizardController<StaticGate>, Arc<RecordingNotifier>) {
  let notifier = Arc::new(RecordingNotifier::new());
  let wizard = WizardController::new(gate, notifier.clone()).expect("controller");
  (wizard, notifier)
}

#[test]
fn zero_steps_is_rejected() {
  let notifier = Arc::new(RecordingNotifier::new());
  assert!(WizardController::new(StaticGate::new(0), notifier).is_err());
  assert!(StepIndex::at(4, 3).is_err());
  assert!(StepIndex::at(0, 3).is_err());
}

#[test]
fn next_never_skips_and_never_passes_the_last_step() {
  let (mut wizard, notifier) = controller(StaticGate::new(3));
  assert_eq!(wizard.current(), 1);
  for expected in [2, 3, 3, 3] {
    let before = wizard.current();
    match wizard.next(&()) {
      Advance::Moved { from, to } => {
        assert_eq!(from, before);
        assert_eq!(to, expected);
        assert!(to - from <= 1);
      }
      Advance::Rejected(r) => panic!("unexpected rejection: {}", r),
    }
  }
  assert_eq!(wizard.current(), 3);
  assert!(notifier.is_empty());
}

#[test]
fn prev_never_goes_below_one() {
  let (mut wizard, _) = controller(StaticGate::new(2));
  wizard.next(&());
  assert_eq!(wizard.prev().get(), 1);
  assert_eq!(wizard.prev().get(), 1);
  assert_eq!(wizard.current(), 1);
}

#[test]
fn prev_ignores_validation() {
  let gate = StaticGate::new(3).failing_at(2, Rejection::new("x"));
  let (mut wizard, notifier) = controller(gate);
  wizard.next(&());
  assert_eq!(wizard.current(), 2);
  wizard.prev();
  assert_eq!(wizard.current(), 1);
  assert!(notifier.is_empty());
}

#[test]
fn failed_step_keeps_index_and_notifies() {
  let gate = StaticGate::new(3).failing_at(1, Rejection::for_field("mobile", "شماره موبایل الزامی است"));
  let (mut wizard, notifier) = controller(gate);
  let res = wizard.next(&());
  assert_eq!(res, Advance::Rejected(Rejection::for_field("mobile", "شماره موبایل الزامی است")));
  assert_eq!(wizard.current(), 1);
  let last = notifier.last().expect("notification");
  assert!(last.is_destructive());
  assert_eq!(last.description, "شماره موبایل الزامی است");
}

#[test]
fn empty_reason_falls_back_to_generic_message() {
  let gate = StaticGate::new(2).failing_at(1, Rejection::new(""));
  let (mut wizard, notifier) = controller(gate);
  wizard.next(&());
  assert_eq!(notifier.last().unwrap().description, "لطفا تمام فیلدهای الزامی را پر کنید");
}

#[tokio::test]
async fn submit_outside_last_step_does_nothing() {
  let (mut wizard, notifier) = controller(StaticGate::new(2));
  let effect = ScriptedEffect::new();
  let out = wizard.submit(&(), &effect).await;
  assert_eq!(out, SubmitOutcome::NotFinalStep);
  assert_eq!(effect.calls(), 0);
  assert!(notifier.is_empty());
}

#[tokio::test]
async fn submit_calls_effect_once_and_completes() {
  let (mut wizard, notifier) = controller(StaticGate::new(2));
  wizard.next(&());
  let effect = ScriptedEffect::new();
  let out = wizard.submit(&(), &effect).await;
  assert!(out.is_submitted());
  assert_eq!(effect.calls(), 1);
  assert_eq!(wizard.phase(), WizardPhase::Completed);
  assert!(!wizard.is_submitting());
  assert!(!notifier.last().unwrap().is_destructive());

  // un segundo envío tras completar no vuelve a llamar al efecto
  assert_eq!(wizard.submit(&(), &effect).await, SubmitOutcome::Ignored);
  assert_eq!(effect.calls(), 1);
}

#[tokio::test]
async fn submit_is_a_noop_while_another_is_outstanding() {
  let (mut wizard, _) = controller(StaticGate::new(1));
  let effect = ScriptedEffect::new();
  let gate = wizard.submission_gate();
  let permit = gate.try_acquire().expect("free gate");
  assert!(wizard.is_submitting());
  assert_eq!(wizard.submit(&(), &effect).await, SubmitOutcome::Ignored);
  assert_eq!(effect.calls(), 0);
  drop(permit);
  assert!(wizard.submit(&(), &effect).await.is_submitted());
  assert_eq!(effect.calls(), 1);
}

#[tokio::test]
async fn final_condition_blocks_submission() {
  let gate = StaticGate::new(1).failing_final(Rejection::new("لطفا تمام توافق‌نامه‌ها را بپذیرید"));
  let (mut wizard, notifier) = controller(gate);
  let effect = ScriptedEffect::new();
  let out = wizard.submit(&(), &effect).await;
  assert_eq!(out, SubmitOutcome::Rejected(Rejection::new("لطفا تمام توافق‌نامه‌ها را بپذیرید")));
  assert_eq!(effect.calls(), 0);
  assert!(!wizard.is_submitting());
  assert_eq!(wizard.phase(), WizardPhase::Editing);
  assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn failed_submission_keeps_step_and_releases_gate() {
  let (mut wizard, notifier) = controller(StaticGate::new(2));
  wizard.next(&());
  let effect = ScriptedEffect::new();
  effect.fail_next(SubmissionError::new("سرور در دسترس نیست", Some(503)));
  effect.fail_next(SubmissionError::new("", None));

  let out = wizard.submit(&(), &effect).await;
  assert_eq!(out, SubmitOutcome::Failed(SubmissionError::new("سرور در دسترس نیست", Some(503))));
  assert_eq!(wizard.current(), 2);
  assert!(!wizard.is_submitting());
  assert_eq!(wizard.phase(), WizardPhase::Editing);
  assert_eq!(notifier.last().unwrap().description, "سرور در دسترس نیست");

  wizard.submit(&(), &effect).await;
  assert_eq!(notifier.last().unwrap().description, "خطا در ارسال اطلاعات");

  assert!(wizard.submit(&(), &effect).await.is_submitted());
  assert_eq!(effect.calls(), 3);
}

/// Efecto que nunca termina.
struct StalledEffect;

#[async_trait]
impl SubmissionEffect<()> for StalledEffect {
  type Receipt = ();

  async fn submit(&self, _draft: &()) -> Result<(), SubmissionError> {
    std::future::pending::<()>().await;
    Ok(())
  }
}

#[tokio::test]
async fn dropped_submission_returns_to_editing() {
  let (mut wizard, _) = controller(StaticGate::new(1));
  let gate = wizard.submission_gate();
  tokio::select! {
    biased;
    _ = wizard.submit(&(), &StalledEffect) => panic!("el efecto no debería terminar"),
    _ = async { assert!(gate.is_busy()) } => {}
  }
  assert!(!wizard.is_submitting());
  assert_eq!(wizard.phase(), WizardPhase::Editing);

  let effect = ScriptedEffect::new();
  assert!(wizard.submit(&(), &effect).await.is_submitted());
  assert_eq!(wizard.phase(), WizardPhase::Completed);
}
