use onboarding_domain::{DomainError, FieldKind, FieldSchema, FieldSpec, FieldValue, LanguageLevel, ProductType,
                        RegistrationDraft};
use serde_json::json;

static PROFILE: FieldSchema = FieldSchema { name: "profile",
                                            fields: &[FieldSpec::text("full_name"),
                                                      FieldSpec::flag("has_local_contact"),
                                                      FieldSpec::number("age"),
                                                      FieldSpec::today("signature_date")],
                                            has_products: false };

static SHOP: FieldSchema =
  FieldSchema { name: "shop", fields: &[FieldSpec::text("brand_name")], has_products: true };

#[test]
fn new_draft_uses_schema_defaults() {
  let draft = RegistrationDraft::new(&PROFILE);
  assert_eq!(draft.text("full_name"), "");
  assert!(!draft.flag("has_local_contact"));
  assert_eq!(draft.get("age"), Some(&FieldValue::Number(0)));
  let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
  assert_eq!(draft.text("signature_date"), today);
  assert!(draft.products().is_empty());
}

#[test]
fn set_rejects_unknown_keys_and_wrong_kinds() {
  let mut draft = RegistrationDraft::new(&PROFILE);
  draft.set("full_name", "علی رضایی").expect("set text");
  assert_eq!(draft.text("full_name"), "علی رضایی");
  assert_eq!(draft.set("nickname", "x"), Err(DomainError::UnknownField("nickname".into())));
  assert_eq!(draft.set("has_local_contact", "yes"),
             Err(DomainError::FieldKindMismatch { field: "has_local_contact".into(), expected: FieldKind::Flag }));
  draft.set_from_input("has_local_contact", "بله").expect("flag from input");
  assert!(draft.flag("has_local_contact"));
  draft.set_from_input("age", " 31 ").expect("number from input");
  assert_eq!(draft.get("age").and_then(FieldValue::as_number), Some(31));
  assert!(draft.set_from_input("age", "سی").is_err());
}

#[test]
fn hydrate_keeps_defaults_for_missing_or_null_keys() {
  let profile = json!({ "full_name": "مریم", "has_local_contact": null, "ignored": 1, "age": 40 });
  let draft = RegistrationDraft::hydrate(&PROFILE, &profile).expect("hydrate");
  assert_eq!(draft.text("full_name"), "مریم");
  assert!(!draft.flag("has_local_contact"));
  assert_eq!(draft.get("age"), Some(&FieldValue::Number(40)));
  assert!(draft.get("ignored").is_none());

  assert!(RegistrationDraft::hydrate(&PROFILE, &json!({ "has_local_contact": "no" })).is_err());
  assert!(RegistrationDraft::hydrate(&PROFILE, &json!([])).is_err());
}

#[test]
fn product_list_keeps_at_least_one_entry() {
  let mut draft = RegistrationDraft::new(&SHOP);
  assert_eq!(draft.products().len(), 1);
  assert_eq!(draft.remove_product(0), Err(DomainError::LastProduct));
  assert_eq!(draft.add_product(), Ok(1));
  draft.update_product(1, "product_name", "زعفران").expect("update");
  draft.update_product(1, "needs_export_license", true).expect("update flag");
  assert_eq!(draft.remove_product(5), Err(DomainError::ProductIndex(5)));
  let removed = draft.remove_product(0).expect("remove first");
  assert_eq!(removed.product_name, "");
  assert_eq!(draft.products().len(), 1);
  assert_eq!(draft.products()[0].product_name, "زعفران");
  assert!(draft.products()[0].needs_export_license);
  assert_eq!(draft.remove_product(0), Err(DomainError::LastProduct));
}

#[test]
fn product_updates_are_typed() {
  let mut draft = RegistrationDraft::new(&SHOP);
  assert_eq!(draft.update_product(0, "colour", "red"), Err(DomainError::UnknownProductField("colour".into())));
  assert!(draft.update_product(0, "description", true).is_err());
  draft.update_product(0, "monthly_production_min", 500i64).expect("number as text");
  assert_eq!(draft.products()[0].monthly_production_min, "500");
  assert_eq!(draft.update_product(3, "description", "x"), Err(DomainError::ProductIndex(3)));
}

#[test]
fn product_operations_need_a_product_schema() {
  let mut draft = RegistrationDraft::new(&PROFILE);
  assert_eq!(draft.add_product(), Err(DomainError::NoProducts("profile".into())));
}

#[test]
fn payload_follows_schema_order_and_includes_products() {
  let mut draft = RegistrationDraft::new(&SHOP);
  draft.set("brand_name", "گلستان").unwrap();
  draft.update_product(0, "product_type", "herbal").unwrap();
  let payload = draft.to_payload().expect("payload");
  let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
  assert_eq!(keys, vec!["brand_name", "products"]);
  assert_eq!(payload["products"][0]["product_type"], "herbal");
  assert_eq!(draft.products()[0].kind(), Some(ProductType::Herbal));

  let back = RegistrationDraft::hydrate(&SHOP, &payload).expect("hydrate back");
  assert_eq!(back, draft);
}

#[test]
fn catalogues_parse_their_keys() {
  assert_eq!("none".parse::<LanguageLevel>().unwrap(), LanguageLevel::NoKnowledge);
  assert_eq!(LanguageLevel::Good.label(), "خوب");
  assert!("fluent".parse::<LanguageLevel>().is_err());
  assert_eq!(" Food ".parse::<ProductType>().unwrap(), ProductType::Food);
  assert_eq!(ProductType::Handicraft.label(), "دستی");
}
