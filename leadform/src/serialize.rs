//! Text and CSV renderings of collected leads.

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use leadform_types::{FieldId, Lead};

/// Line separator of the plain-text format.
pub const TEXT_LINE_SEPARATOR: &str = "\r\n";

/// Line written when there is nothing to export.
pub const NO_LEADS_LINE: &str = "Sem leads no momento.";

/// File name of the bulk CSV export.
pub const CSV_EXPORT_FILE_NAME: &str = "leads_klassvough.csv";

/// File name of the bulk plain-text export.
pub const TEXT_EXPORT_FILE_NAME: &str = "leads_klassvough.txt";

const CREATED_AT_COLUMN: &str = "criado_em";
const CREATED_AT_LABEL: &str = "Criado_em";

/// Column order shared by both formats.
const COLUMNS: [FieldId; 5] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Phone,
    FieldId::City,
    FieldId::Consent,
];

/// ISO-8601 UTC timestamp with milliseconds, e.g. `2024-01-05T08:09:10.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `sim` / `nao`, as written to exports.
pub fn consent_word(consent: bool) -> &'static str {
    if consent { "sim" } else { "nao" }
}

fn value(lead: &Lead, field: FieldId) -> &str {
    match field {
        FieldId::Name => lead.name(),
        FieldId::Phone => lead.phone(),
        FieldId::Email => lead.email(),
        FieldId::City => lead.city(),
        FieldId::Consent => consent_word(lead.consent()),
    }
}

/// Render leads as labelled blocks separated by `---` lines.
///
/// Lines end with CRLF and the output ends with a line break. An empty slice
/// yields the single line [`NO_LEADS_LINE`].
pub fn to_plain_text(leads: &[Lead]) -> String {
    let sep = TEXT_LINE_SEPARATOR;
    if leads.is_empty() {
        return format!("{NO_LEADS_LINE}{sep}");
    }

    let blocks: Vec<String> = leads
        .iter()
        .map(|lead| {
            let mut lines: Vec<String> = COLUMNS
                .iter()
                .map(|&field| format!("{}: {}", field.text_label(), value(lead, field)))
                .collect();
            lines.push(format!(
                "{CREATED_AT_LABEL}: {}",
                iso_timestamp(lead.created_at())
            ));
            lines.join(sep)
        })
        .collect();

    let mut text = blocks.join(&format!("{sep}---{sep}"));
    text.push_str(sep);
    text
}

/// Render leads as semicolon-separated values with a header line.
///
/// Values are written as-is, without quoting.
pub fn to_csv(leads: &[Lead]) -> String {
    let mut header: Vec<&str> = COLUMNS.iter().map(|f| f.column()).collect();
    header.push(CREATED_AT_COLUMN);

    let rows: Vec<String> = leads
        .iter()
        .map(|lead| {
            let mut cells: Vec<String> = COLUMNS
                .iter()
                .map(|&field| value(lead, field).to_string())
                .collect();
            cells.push(iso_timestamp(lead.created_at()));
            cells.join(";")
        })
        .collect();

    format!("{}\n{}", header.join(";"), rows.join("\n"))
}

/// File name for a single-lead export: `lead_YYYYMMDDHHMMSS.txt` in UTC.
pub fn lead_file_name(lead: &Lead) -> String {
    let at = lead.created_at();
    format!(
        "lead_{:04}{:02}{:02}{:02}{:02}{:02}.txt",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}
