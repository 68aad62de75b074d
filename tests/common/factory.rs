//! Random user payloads for the end-to-end tests. Emails get a uuid suffix
//! so concurrent tests never collide on the unique column.

use chrono::{Duration, Timelike, Utc};
use fake::faker::address::en::StreetName;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use serde_json::{json, Value};
use uuid::Uuid;

pub fn unique_email() -> String {
    format!("user_{}@example.com", Uuid::now_v7().simple())
}

/// Create payload with every field set. Also valid as a PUT body, since all
/// five keys are present.
pub fn user_payload() -> Value {
    let mut rng = rand::rng();
    // Whole seconds only, so the value survives the TIMESTAMPTZ round-trip.
    let birth_date = (Utc::now() - Duration::days(rng.random_range(18 * 365..60 * 365)))
        .with_nanosecond(0)
        .unwrap();
    json!({
        "email": unique_email(),
        "name": Name().fake::<String>(),
        "phone": format!("+1{:010}", rng.random_range(0u64..10_000_000_000)),
        "address": format!("{} {}", rng.random_range(1..1000), StreetName().fake::<String>()),
        "birth_date": birth_date.to_rfc3339(),
    })
}

/// Payload carrying only the required field.
pub fn required_only_payload() -> Value {
    json!({ "email": unique_email() })
}

/// Full payload with a caller-chosen email.
pub fn payload_with_email(email: &str) -> Value {
    let mut payload = user_payload();
    payload["email"] = json!(email);
    payload
}

/// A batch of distinct full payloads.
#[allow(dead_code)]
pub fn user_payloads(count: usize) -> Vec<Value> {
    (0..count).map(|_| user_payload()).collect()
}
