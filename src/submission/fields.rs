use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::sanitize;
use crate::store::ContactRecord;

/// Raw JSON body of a contact-form submission. Every field defaults to an
/// empty string so partially filled forms deserialize instead of erroring;
/// emptiness is decided after trimming.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub company: String,
    pub project_type: String,
    pub timeline: String,
    pub units_needed: String,
}

/// Trimmed and sanitized submission fields.
#[derive(Debug, Clone)]
pub struct ContactFields {
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub company: String,
    pub project_type: String,
    pub timeline: String,
    pub units_needed: String,
}

impl ContactForm {
    pub fn normalize(self) -> ContactFields {
        ContactFields {
            contact_person: self.contact_person.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: sanitize::sanitize_message(&self.message),
            company: self.company.trim().to_string(),
            project_type: self.project_type.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
            units_needed: self.units_needed.trim().to_string(),
        }
    }
}

impl ContactFields {
    /// All four mandatory fields are non-empty after trimming.
    pub fn has_required(&self) -> bool {
        !self.contact_person.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.message.is_empty()
    }
}

/// Build the sparse storage record. Keys with empty values are omitted
/// entirely rather than written as empty strings.
pub fn build_record(
    fields: &ContactFields,
    business_unit: &str,
    environment: &str,
    origin: &str,
    contact_id: Uuid,
    timestamp: &str,
) -> ContactRecord {
    let pk = format!("BU#{}", business_unit.to_uppercase());
    let sk = format!("CONTACT#{timestamp}#{contact_id}");

    let mut body = Map::new();
    body.insert("contact_id".to_string(), Value::String(contact_id.to_string()));
    body.insert("business_unit".to_string(), Value::String(business_unit.to_string()));
    body.insert("timestamp".to_string(), Value::String(timestamp.to_string()));
    body.insert("status".to_string(), Value::String("new".to_string()));

    insert_nonempty(&mut body, "environment", environment);
    insert_nonempty(&mut body, "contact_person", &fields.contact_person);
    insert_nonempty(&mut body, "email", &fields.email);
    insert_nonempty(&mut body, "phone", &fields.phone);
    insert_nonempty(&mut body, "message", &fields.message);
    insert_nonempty(&mut body, "company", &fields.company);
    insert_nonempty(&mut body, "project_type", &fields.project_type);
    insert_nonempty(&mut body, "timeline", &fields.timeline);
    insert_nonempty(&mut body, "units_needed", &fields.units_needed);
    insert_nonempty(&mut body, "source_domain", origin);

    ContactRecord {
        pk,
        sk,
        contact_id,
        body: Value::Object(body),
    }
}

fn insert_nonempty(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}
