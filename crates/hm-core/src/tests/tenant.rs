use crate::models::tenant::Tenant;
use crate::slug::TenantIdentifiers;

fn identifiers() -> TenantIdentifiers {
    TenantIdentifiers {
        slug: "le-grand-hotel-x7k2".to_string(),
        code: "LE-GRAND-HOTEL-X7K2".to_string(),
    }
}

#[test]
fn new_tenant_stores_code_in_settings() {
    let tenant = Tenant::new("Le Grand Hotel".to_string(), identifiers());

    assert_eq!(tenant.timezone, "UTC");
    assert_eq!(tenant.settings["code"], "LE-GRAND-HOTEL-X7K2");
}

#[test]
fn public_code_prefers_settings() {
    let tenant = Tenant::new("Le Grand Hotel".to_string(), identifiers());
    assert_eq!(tenant.public_code(), "LE-GRAND-HOTEL-X7K2");
}

#[test]
fn public_code_falls_back_to_slug() {
    let mut tenant = Tenant::new("Le Grand Hotel".to_string(), identifiers());
    tenant.settings = serde_json::json!({});

    assert_eq!(tenant.public_code(), "le-grand-hotel-x7k2");
}
