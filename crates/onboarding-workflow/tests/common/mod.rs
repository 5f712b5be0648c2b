#![allow(dead_code)]

use onboarding_workflow::stubs::InMemoryRegistrationApi;
use onboarding_workflow::{FlowKind, OnboardingFactory, OnboardingSession, WorkflowConfig};
use std::sync::Arc;
use wizard::stubs::RecordingNotifier;
use wizard::Advance;

pub struct Harness {
  pub session: OnboardingSession,
  pub api: Arc<InMemoryRegistrationApi>,
  pub notifier: Arc<RecordingNotifier>,
}

pub fn harness(kind: FlowKind) -> Harness {
  harness_with(kind, Arc::new(InMemoryRegistrationApi::new()), &WorkflowConfig::default())
}

pub fn harness_with(kind: FlowKind, api: Arc<InMemoryRegistrationApi>, config: &WorkflowConfig) -> Harness {
  let notifier = Arc::new(RecordingNotifier::new());
  let session = OnboardingFactory::create(kind, config, api.clone(), notifier.clone()).expect("session");
  Harness { session, api, notifier }
}

pub fn fill_visitor_identity(s: &mut OnboardingSession) {
  s.set_field("full_name", "مریم احمدی").unwrap();
  s.set_field("national_id", "0012345678").unwrap();
  s.set_field("birth_date", "1370-05-12").unwrap();
  s.set_field("mobile", "09120000000").unwrap();
}

pub fn fill_visitor_residence(s: &mut OnboardingSession) {
  s.set_field("residence_address", "خیابان اصلی، پلاک ۱۲").unwrap();
  s.set_field("city_province", "مسقط عمان").unwrap();
  s.set_field("destination_cities", "دبی امارات، ریاض عربستان").unwrap();
}

pub fn fill_visitor_bank(s: &mut OnboardingSession) {
  s.set_field("bank_account_iban", "IR820540102680020817909002").unwrap();
  s.set_field("bank_name", "ملت").unwrap();
}

pub fn fill_visitor_agreements(s: &mut OnboardingSession) {
  s.set_field("agrees_to_use_approved_products", true).unwrap();
  s.set_field("agrees_to_violation_consequences", true).unwrap();
  s.set_field("agrees_to_submit_reports", true).unwrap();
  s.set_field("digital_signature", "مریم احمدی").unwrap();
}

/// Rellena todo el alta de visitante y avanza hasta el último paso.
pub fn visitor_at_final_step(h: &mut Harness) {
  let s = &mut h.session;
  fill_visitor_identity(s);
  advance(s);
  fill_visitor_residence(s);
  advance(s);
  fill_visitor_bank(s);
  advance(s);
  s.set_field("language_level", "good").unwrap();
  advance(s);
  fill_visitor_agreements(s);
  assert_eq!(s.step().get(), 5);
}

pub fn advance(s: &mut OnboardingSession) {
  match s.next() {
    Advance::Moved { .. } => {}
    Advance::Rejected(r) => panic!("paso {} rechazado: {}", s.step(), r),
  }
}

pub fn fill_supplier_contact(s: &mut OnboardingSession) {
  s.set_field("full_name", "رضا کریمی").unwrap();
  s.set_field("mobile", "09350000000").unwrap();
  s.set_field("city", "اصفهان").unwrap();
  s.set_field("address", "شهرک صنعتی").unwrap();
}

pub fn fill_product(s: &mut OnboardingSession, index: usize) {
  s.update_product(index, "product_name", "زعفران").unwrap();
  s.update_product(index, "product_type", "food").unwrap();
  s.update_product(index, "description", "زعفران سرگل").unwrap();
  s.update_product(index, "monthly_production_min", "50").unwrap();
}
