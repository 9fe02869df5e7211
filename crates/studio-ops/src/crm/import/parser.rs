use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct LeadRecord {
    pub(crate) name: String,
    pub(crate) email: Option<String>,
    pub(crate) company: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) source_label: Option<String>,
    pub(crate) notes: Option<String>,
    pub(crate) last_contacted: Option<DateTime<Utc>>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<LeadRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<LeadRow>() {
        let row = record?;
        let last_contacted = row.last_contacted_date();

        records.push(LeadRecord {
            name: row.name,
            email: row.email,
            company: row.company,
            phone: row.phone,
            source_label: row.source,
            notes: row.notes,
            last_contacted,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Company", default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Source", default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(
        rename = "Last Contacted",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    last_contacted: Option<String>,
}

impl LeadRow {
    fn last_contacted_date(&self) -> Option<DateTime<Utc>> {
        self.last_contacted.as_deref().and_then(parse_datetime)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<DateTime<Utc>> {
    parse_datetime(value)
}
