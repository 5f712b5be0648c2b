use std::sync::Arc;

use onboarding_workflow::stubs::InMemoryRegistrationApi;
use onboarding_workflow::{FlowKind, OnboardingFactory, SessionView, WorkflowConfig};
use wizard::stubs::RecordingNotifier;
use wizard::Advance;

#[test]
fn supplier_edit_round_trip_with_blocking_runtime() {
  let api = Arc::new(InMemoryRegistrationApi::new());
  let notifier = Arc::new(RecordingNotifier::new());
  let config = WorkflowConfig::default();

  let loading = OnboardingFactory::load(FlowKind::SupplierEdit, &config, api.clone(), notifier.clone());
  let mut session = tokio_test::block_on(loading).expect("session");
  for (field, value) in [("full_name", "رضا کریمی"),
                         ("mobile", "09350000000"),
                         ("city", "یزد"),
                         ("address", "بلوار جمهوری"),
                         ("wholesale_min_price", "500000")]
  {
    session.set_field(field, value).expect("set field");
  }
  assert_eq!(session.next(), Advance::Moved { from: 1, to: 2 });
  session.update_product(0, "product_name", "ترمه").unwrap();
  session.update_product(0, "product_type", "handicraft").unwrap();
  session.update_product(0, "description", "ترمه دست‌باف").unwrap();

  let outcome = tokio_test::block_on(session.submit());
  assert!(outcome.is_submitted());
  assert_eq!(session.view(), SessionView::PendingReview { status_path: "/supplier-status".into() });
  assert_eq!(api.submission_count(), 1);
  assert_eq!(notifier.len(), 1);
}
