/// Response locale, resolved from the request `Origin` header.
///
/// Each business-unit site lives on its own subdomain; the subdomain marker
/// decides the language. First match in priority order wins, and anything
/// unrecognized (or a missing header) falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    De,
    Ro,
}

impl Locale {
    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.to_lowercase();

        if origin.contains("construction.") {
            Locale::En
        } else if origin.contains("bau.") {
            Locale::De
        } else if origin.contains("constructii.") {
            Locale::Ro
        } else {
            Locale::En
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &Messages {
                success: "Contact form submitted successfully!",
                missing_fields: "Missing mandatory fields",
                server_error: "Internal server error",
            },
            Locale::De => &Messages {
                success: "Das Kontaktformular wurde erfolgreich abgeschickt!",
                missing_fields: "Pflichtfelder fehlen",
                server_error: "Serverfehler",
            },
            Locale::Ro => &Messages {
                success: "Formularul de contact a fost trimis cu succes!",
                missing_fields: "Câmpuri obligatorii lipsă",
                server_error: "Eroare internă",
            },
        }
    }
}

/// Localized response strings returned to the browser.
pub struct Messages {
    pub success: &'static str,
    pub missing_fields: &'static str,
    pub server_error: &'static str,
}
