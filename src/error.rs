/// Outcome classes at the submission-processor boundary.
///
/// `MissingFields` maps to a 400 with a localized message; `Internal` covers
/// everything else (body parse failures, storage errors) and maps to a 500.
/// The detail string is logged server-side and never exposed to the caller.
/// Notification errors are deliberately not represented here; they are
/// contained inside the pipeline and only logged.
#[derive(Debug)]
pub enum ProcessError {
    MissingFields,
    Internal(String),
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::MissingFields => write!(f, "Missing mandatory fields"),
            ProcessError::Internal(detail) => write!(f, "Internal error: {detail}"),
        }
    }
}
