// visitor.rs
//
// Flujos del visitante: alta en cinco pasos y edición en tres.
use super::{FlowDefinition, StepRule};
use crate::flow_kind::FlowKind;
use onboarding_domain::{FieldSchema, FieldSpec};

pub const CITY_PROVINCE_LABEL: &str = "شهر و کشور محل سکونت";
pub const DESTINATION_CITIES_LABEL: &str = "شهرهای مقصد";

pub const AGREEMENTS: &[&str] =
  &["agrees_to_use_approved_products", "agrees_to_violation_consequences", "agrees_to_submit_reports"];

pub static SCHEMA: FieldSchema = FieldSchema { name: "visitor",
                                               fields: &[// identificación
                                                         FieldSpec::text("full_name"),
                                                         FieldSpec::text("national_id"),
                                                         FieldSpec::text("passport_number"),
                                                         FieldSpec::text("birth_date"),
                                                         FieldSpec::text("mobile"),
                                                         FieldSpec::text("whatsapp_number"),
                                                         FieldSpec::text("email"),
                                                         // residencia y viaje
                                                         FieldSpec::text("residence_address"),
                                                         FieldSpec::text("city_province"),
                                                         FieldSpec::text("destination_cities"),
                                                         FieldSpec::flag("has_local_contact"),
                                                         FieldSpec::text("local_contact_details"),
                                                         // datos bancarios
                                                         FieldSpec::text("bank_account_iban"),
                                                         FieldSpec::text("bank_name"),
                                                         FieldSpec::text("account_holder_name"),
                                                         // experiencia
                                                         FieldSpec::flag("has_marketing_experience"),
                                                         FieldSpec::text("marketing_experience_desc"),
                                                         FieldSpec::text("language_level"),
                                                         FieldSpec::text("special_skills"),
                                                         // compromisos
                                                         FieldSpec::flag("agrees_to_use_approved_products"),
                                                         FieldSpec::flag("agrees_to_violation_consequences"),
                                                         FieldSpec::flag("agrees_to_submit_reports"),
                                                         FieldSpec::text("digital_signature"),
                                                         FieldSpec::today("signature_date")],
                                               has_products: false };

const FULL_NAME: StepRule = StepRule::Required { field: "full_name", label: "نام و نام خانوادگی" };
const NATIONAL_ID: StepRule = StepRule::Required { field: "national_id", label: "کد ملی" };
const BIRTH_DATE: StepRule = StepRule::Required { field: "birth_date", label: "تاریخ تولد" };
const MOBILE: StepRule = StepRule::Required { field: "mobile", label: "شماره موبایل" };
const WHATSAPP: StepRule = StepRule::Required { field: "whatsapp_number", label: "شماره واتساپ" };
const RESIDENCE: StepRule = StepRule::Required { field: "residence_address", label: "آدرس محل سکونت" };
const CITY_PROVINCE: StepRule = StepRule::Location { field: "city_province", label: CITY_PROVINCE_LABEL };
const DESTINATIONS: StepRule = StepRule::LocationList { field: "destination_cities", label: DESTINATION_CITIES_LABEL };
const CITY_FORMAT: StepRule =
  StepRule::Format { field: "city_province", reason: "لطفا شهر و کشور را به فرمت صحیح وارد کنید (مثل: مسقط عمان)" };
const DESTINATIONS_FORMAT: StepRule =
  StepRule::Format { field: "destination_cities",
                     reason: "لطفا شهرهای مقصد را به فرمت صحیح وارد کنید (مثل: مسقط عمان، دبی امارات)" };
const IBAN: StepRule = StepRule::Required { field: "bank_account_iban", label: "شماره شبا" };
const BANK_NAME: StepRule = StepRule::Required { field: "bank_name", label: "نام بانک" };
const HOLDER: StepRule = StepRule::Required { field: "account_holder_name", label: "نام صاحب حساب" };
const LANGUAGE: StepRule = StepRule::LanguageLevel { field: "language_level", label: "سطح زبان عربی" };
const SIGNATURE: StepRule = StepRule::Required { field: "digital_signature", label: "امضای دیجیتال" };
const AGREED: StepRule = StepRule::Agreements { fields: AGREEMENTS };

pub static REGISTRATION: FlowDefinition =
  FlowDefinition { kind: FlowKind::VisitorRegistration,
                   schema: &SCHEMA,
                   steps: &[&[FULL_NAME, NATIONAL_ID, BIRTH_DATE, MOBILE],
                            &[RESIDENCE, CITY_PROVINCE, DESTINATIONS],
                            &[IBAN, BANK_NAME],
                            &[LANGUAGE],
                            &[AGREED, SIGNATURE]],
                   finalization: &[AGREED],
                   status_path: "/visitor-status",
                   success_title: "ثبت‌نام موفق",
                   success_description: "درخواست ثبت‌نام ویزیتور شما با موفقیت ارسال شد. پس از بررسی توسط تیم ما با شما تماس گرفته خواهد شد.",
                   failure_title: "خطا در ثبت‌نام",
                   failure_fallback: "خطا در ارسال اطلاعات" };

pub static EDIT: FlowDefinition =
  FlowDefinition { kind: FlowKind::VisitorEdit,
                   schema: &SCHEMA,
                   steps: &[&[FULL_NAME,
                              NATIONAL_ID,
                              BIRTH_DATE,
                              MOBILE,
                              RESIDENCE,
                              CITY_FORMAT,
                              DESTINATIONS_FORMAT,
                              CITY_PROVINCE,
                              DESTINATIONS,
                              WHATSAPP],
                            &[IBAN, BANK_NAME, HOLDER],
                            &[LANGUAGE, SIGNATURE]],
                   finalization: &[AGREED],
                   status_path: "/visitor-status",
                   success_title: "موفقیت‌آمیز",
                   success_description: "اطلاعات ویزیتور با موفقیت به‌روزرسانی شد. پس از بررسی مجدد توسط تیم ما، وضعیت شما اعلام خواهد شد.",
                   failure_title: "خطا",
                   failure_fallback: "خطا در به‌روزرسانی اطلاعات ویزیتور. لطفا دوباره تلاش کنید" };
