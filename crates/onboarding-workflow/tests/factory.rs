mod common;

use common::*;
use onboarding_workflow::stubs::InMemoryRegistrationApi;
use onboarding_workflow::{ApiError, FlowKind, OnboardingFactory, Role, WorkflowConfig, WorkflowError};
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use wizard::stubs::RecordingNotifier;
use wizard::Advance;

#[test]
fn each_flow_has_its_step_count() {
  for (kind, total) in [(FlowKind::VisitorRegistration, 5),
                        (FlowKind::VisitorEdit, 3),
                        (FlowKind::SupplierRegistration, 4),
                        (FlowKind::SupplierEdit, 2)]
  {
    let h = harness(kind);
    assert_eq!(h.session.step().total(), total, "{}", kind);
    assert_eq!(h.session.step().get(), 1);
  }
}

#[test]
fn flow_kind_parses_from_cli_names() {
  assert_eq!("visitor-edit".parse::<FlowKind>().unwrap(), FlowKind::VisitorEdit);
  assert_eq!("Supplier_Registration".parse::<FlowKind>().unwrap(), FlowKind::SupplierRegistration);
  assert!("admin".parse::<FlowKind>().is_err());
}

#[tokio::test]
async fn load_hydrates_edit_flow_from_profile() {
  let profile = json!({
    "full_name": "مریم احمدی",
    "national_id": "0012345678",
    "birth_date": "1370-05-12",
    "mobile": "09120000000",
    "whatsapp_number": null,
    "residence_address": "مسقط",
    "city_province": "مسقط عمان",
    "destination_cities": "دبی امارات",
    "agrees_to_submit_reports": true,
    "unknown_key": "ignored"
  });
  let api = Arc::new(InMemoryRegistrationApi::new().with_profile(Role::Visitor, profile));
  let notifier = Arc::new(RecordingNotifier::new());
  let mut session =
    OnboardingFactory::load(FlowKind::VisitorEdit, &WorkflowConfig::default(), api, notifier.clone()).await
                                                                                                       .unwrap();
  assert_eq!(session.draft().text("full_name"), "مریم احمدی");
  assert!(session.draft().flag("agrees_to_submit_reports"));
  assert_eq!(session.draft().text("whatsapp_number"), "");

  // falta whatsapp_number en el paso 1 de la edición
  assert!(matches!(session.next(), Advance::Rejected(_)));
  session.set_field("whatsapp_number", "+96890000000").unwrap();
  assert_eq!(session.next(), Advance::Moved { from: 1, to: 2 });
  assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn load_without_profile_starts_blank() {
  let api = Arc::new(InMemoryRegistrationApi::new());
  let session = OnboardingFactory::load(FlowKind::SupplierEdit,
                                        &WorkflowConfig::default(),
                                        api,
                                        Arc::new(RecordingNotifier::new())).await
                                                                          .unwrap();
  assert_eq!(session.draft().text("full_name"), "");
  assert_eq!(session.draft().products().len(), 1);
}

#[tokio::test]
async fn load_is_only_for_edit_flows() {
  let api = Arc::new(InMemoryRegistrationApi::new());
  let err = OnboardingFactory::load(FlowKind::VisitorRegistration,
                                    &WorkflowConfig::default(),
                                    api.clone(),
                                    Arc::new(RecordingNotifier::new())).await;
  assert!(matches!(err, Err(WorkflowError::Validation(_))));
  assert!(api.calls().is_empty());
}

#[tokio::test]
async fn load_propagates_backend_errors() {
  let api = Arc::new(InMemoryRegistrationApi::new());
  api.fail_next(ApiError::new("unauthorized", Some(401)));
  let err = OnboardingFactory::load(FlowKind::VisitorEdit,
                                    &WorkflowConfig::default(),
                                    api,
                                    Arc::new(RecordingNotifier::new())).await;
  assert!(matches!(err, Err(WorkflowError::Api(ApiError { status_code: Some(401), .. }))));
}

#[tokio::test]
async fn edit_after_registration_sees_submitted_profile() {
  let mut h = harness(FlowKind::VisitorRegistration);
  visitor_at_final_step(&mut h);
  assert!(h.session.submit().await.is_submitted());

  let session = OnboardingFactory::load(FlowKind::VisitorEdit,
                                        &WorkflowConfig::default(),
                                        h.api.clone(),
                                        Arc::new(RecordingNotifier::new())).await
                                                                          .unwrap();
  assert_eq!(session.draft().text("city_province"), "مسقط عمان");
  assert_eq!(session.draft().text("language_level"), "good");
}

#[test]
fn config_reads_known_values() {
  let cfg = WorkflowConfig::from_lookup(|key| match key {
              "ONBOARDING_DESTINATION_DELIMITERS" => Some("commas".into()),
              "ONBOARDING_LOCATION_MATCH" => Some("exact".into()),
              _ => None,
            }).unwrap();
  assert_eq!(cfg.delimiters, onboarding_domain::DelimiterClass::Commas);
  assert_eq!(cfg.match_mode, onboarding_domain::MatchMode::ExactToken);
  assert!(cfg.locations_file.is_none());
}

#[test]
fn config_rejects_unknown_values() {
  let err = WorkflowConfig::from_lookup(|key| (key == "ONBOARDING_LOCATION_MATCH").then(|| "fuzzy".to_string()));
  assert!(matches!(err, Err(WorkflowError::Config(_))));
}

#[test]
fn locations_file_replaces_builtin_lists() {
  let path = std::env::temp_dir().join(format!("onboarding-locations-{}.json", std::process::id()));
  let mut file = std::fs::File::create(&path).unwrap();
  write!(file, r#"{{"allow": ["Zion"], "deny": ["Gotham"]}}"#).unwrap();
  drop(file);

  let cfg = WorkflowConfig { locations_file: Some(path.clone()), ..Default::default() };
  let lists = cfg.location_lists().unwrap();
  assert_eq!(lists.allow().collect::<Vec<_>>(), vec!["zion"]);
  assert_eq!(lists.deny().collect::<Vec<_>>(), vec!["gotham"]);
  std::fs::remove_file(&path).ok();

  let missing = WorkflowConfig { locations_file: Some(path), ..Default::default() };
  assert!(matches!(missing.location_lists(), Err(WorkflowError::Config(_))));
}
