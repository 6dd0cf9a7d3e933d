use crate::locale::Locale;
use crate::submission::fields::ContactFields;

/// Field labels for the notification email, one set per locale.
struct Labels {
    greeting: &'static str,
    company: &'static str,
    contact: &'static str,
    email: &'static str,
    phone: &'static str,
    project: &'static str,
    timeline: &'static str,
    units: &'static str,
    message: &'static str,
    timestamp: &'static str,
    not_specified: &'static str,
}

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &Labels {
            greeting: "New inquiry received:",
            company: "Company",
            contact: "Contact Person",
            email: "Email",
            phone: "Phone",
            project: "Project Type",
            timeline: "Timeline",
            units: "Units Needed",
            message: "Message",
            timestamp: "Timestamp",
            not_specified: "Not specified",
        },
        Locale::De => &Labels {
            greeting: "Neue Anfrage eingegangen:",
            company: "Firma",
            contact: "Kontakt Person",
            email: "Email",
            phone: "Tel.",
            project: "Projekttyp",
            timeline: "Zeitplan",
            units: "Benötigte Einheiten",
            message: "Nachricht",
            timestamp: "Zeitstempel",
            not_specified: "Nicht angegeben",
        },
        Locale::Ro => &Labels {
            greeting: "Cerere nouă primită:",
            company: "Companie",
            contact: "Persoană de contact",
            email: "Email",
            phone: "Telefon",
            project: "Tip proiect",
            timeline: "Termen",
            units: "Unități necesare",
            message: "Mesaj",
            timestamp: "Marcaj temporal",
            not_specified: "Nespecificat",
        },
    }
}

pub fn subject(locale: Locale, business_unit: &str) -> String {
    match locale {
        Locale::En => format!("New inquiry: {business_unit}"),
        Locale::De => format!("Neue Anfrage: {business_unit}"),
        Locale::Ro => format!("Cerere nouă: {business_unit}"),
    }
}

/// Assemble the plain-text notification body.
///
/// Blank project type and timeline render a localized placeholder; a blank
/// unit count drops the line entirely.
pub fn body(locale: Locale, fields: &ContactFields, timestamp: &str) -> String {
    let l = labels(locale);

    let mut lines = vec![
        l.greeting.to_string(),
        String::new(),
        format!("{}: {}", l.company, fields.company),
        format!("{}: {}", l.contact, fields.contact_person),
        format!("{}: {}", l.email, fields.email),
        format!("{}: {}", l.phone, fields.phone),
        String::new(),
        format!(
            "{}: {}",
            l.project,
            or_placeholder(&fields.project_type, l.not_specified)
        ),
        format!(
            "{}: {}",
            l.timeline,
            or_placeholder(&fields.timeline, l.not_specified)
        ),
    ];

    if !fields.units_needed.is_empty() {
        lines.push(format!("{}: {}", l.units, fields.units_needed));
    }

    lines.extend([
        String::new(),
        format!("{}:", l.message),
        fields.message.clone(),
        String::new(),
        "---".to_string(),
        format!("{}: {}", l.timestamp, timestamp),
    ]);

    lines.join("\n")
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
