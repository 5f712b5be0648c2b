// supplier.rs
//
// Flujos del proveedor: alta en cuatro pasos (el último es de revisión) y
// edición en dos.
use super::{FlowDefinition, ProductRule, StepRule};
use crate::flow_kind::FlowKind;
use onboarding_domain::{FieldSchema, FieldSpec};

pub static SCHEMA: FieldSchema = FieldSchema { name: "supplier",
                                               fields: &[FieldSpec::text("full_name"),
                                                         FieldSpec::text("mobile"),
                                                         FieldSpec::text("brand_name"),
                                                         FieldSpec::text("city"),
                                                         FieldSpec::text("address"),
                                                         FieldSpec::flag("has_registered_business"),
                                                         FieldSpec::text("business_registration_num"),
                                                         FieldSpec::flag("has_export_experience"),
                                                         FieldSpec::text("export_price"),
                                                         FieldSpec::text("wholesale_min_price"),
                                                         FieldSpec::text("wholesale_high_volume_price"),
                                                         FieldSpec::flag("can_produce_private_label")],
                                               has_products: true };

const FULL_NAME: StepRule = StepRule::Required { field: "full_name", label: "نام و نام خانوادگی" };
const MOBILE: StepRule = StepRule::Required { field: "mobile", label: "شماره موبایل" };
const CITY: StepRule = StepRule::Required { field: "city", label: "شهر" };
const ADDRESS: StepRule = StepRule::Required { field: "address", label: "آدرس" };
const WHOLESALE_MIN: StepRule = StepRule::Required { field: "wholesale_min_price", label: "حداقل قیمت عمده" };

pub static REGISTRATION: FlowDefinition =
  FlowDefinition { kind: FlowKind::SupplierRegistration,
                   schema: &SCHEMA,
                   steps: &[&[FULL_NAME, MOBILE, CITY, ADDRESS],
                            &[StepRule::Products(ProductRule { require_monthly_production: true })],
                            &[WHOLESALE_MIN],
                            &[]],
                   finalization: &[StepRule::HasProducts, WHOLESALE_MIN],
                   status_path: "/supplier-status",
                   success_title: "موفقیت‌آمیز",
                   success_description: "درخواست ثبت‌نام تأمین‌کننده شما با موفقیت ارسال شد. پس از بررسی توسط تیم ما با شما تماس گرفته خواهد شد.",
                   failure_title: "خطا در ثبت‌نام",
                   failure_fallback: "خطا در ارسال اطلاعات" };

pub static EDIT: FlowDefinition =
  FlowDefinition { kind: FlowKind::SupplierEdit,
                   schema: &SCHEMA,
                   steps: &[&[FULL_NAME, MOBILE, CITY, ADDRESS, WHOLESALE_MIN],
                            &[StepRule::Products(ProductRule { require_monthly_production: false })]],
                   finalization: &[StepRule::HasProducts],
                   status_path: "/supplier-status",
                   success_title: "موفقیت‌آمیز",
                   success_description: "اطلاعات تأمین‌کننده با موفقیت به‌روزرسانی شد. پس از بررسی مجدد توسط تیم ما، وضعیت شما اعلام خواهد شد.",
                   failure_title: "خطا",
                   failure_fallback: "خطا در به‌روزرسانی اطلاعات تأمین‌کننده. لطفا دوباره تلاش کنید" };
