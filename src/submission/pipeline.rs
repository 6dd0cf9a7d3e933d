use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::ProcessError;
use crate::locale::Locale;
use crate::notify::templates;
use crate::state::SharedState;

use super::fields::{self, ContactForm};

pub struct PipelineResult {
    pub contact_id: Uuid,
}

/// Process one submission: parse, validate, persist, notify. Steps run
/// strictly in that order; validation happens before any write, and the
/// notification step never affects the outcome.
pub async fn run(
    state: &SharedState,
    origin: &str,
    locale: Locale,
    body: &[u8],
) -> Result<PipelineResult, ProcessError> {
    // A malformed body is an unexpected error, not a validation failure.
    let form: ContactForm = serde_json::from_slice(body)
        .map_err(|e| ProcessError::Internal(format!("Invalid request body: {e}")))?;

    let contact = form.normalize();
    if !contact.has_required() {
        return Err(ProcessError::MissingFields);
    }

    let contact_id = Uuid::new_v4();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let record = fields::build_record(
        &contact,
        &state.config.business_unit,
        &state.config.environment,
        origin,
        contact_id,
        &timestamp,
    );

    state
        .store
        .put(&record)
        .await
        .map_err(ProcessError::Internal)?;

    // Best-effort notification; the submission is already persisted.
    if let Some(notifier) = &state.notifier {
        let subject = templates::subject(locale, &state.config.business_unit);
        let body = templates::body(locale, &contact, &timestamp);

        if let Err(e) = notifier.send(&subject, &body).await {
            tracing::warn!("Notification failed for {contact_id}: {e}");
        }
    } else {
        tracing::debug!("No notifier configured, skipping notification for {contact_id}");
    }

    Ok(PipelineResult { contact_id })
}
