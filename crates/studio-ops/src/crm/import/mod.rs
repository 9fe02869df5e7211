//! Bulk lead loading from spreadsheet exports.
//!
//! Admins track early-stage leads in spreadsheets before they reach the
//! back office; this module turns a CSV export (`Name, Email, Company,
//! Phone, Source, Notes, Last Contacted`) into [`NewLead`] payloads for the
//! intake service. Rows missing a name or an email are counted and skipped
//! rather than failing the batch. A missing `Source` cell means the
//! spreadsheet itself is the channel (`import`); an unrecognized label is an
//! unknown marketing channel (`other`), not an error. Source labels are
//! open-ended input, statuses are not.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::crm::sources::domain::{LeadSource, NewLead};

#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead export: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Leads parsed out of a CSV export, plus the count of rows left behind.
#[derive(Debug)]
pub struct ParsedLeads {
    pub leads: Vec<NewLead>,
    pub skipped: usize,
}

pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ParsedLeads, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ParsedLeads, LeadImportError> {
        let mut leads = Vec::new();
        let mut skipped = 0;

        for record in parser::parse_records(reader)? {
            let email = match record.email {
                Some(email) if !record.name.trim().is_empty() => email,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let source = match record.source_label.as_deref() {
                Some(label) => {
                    let normalized = normalizer::normalize_label(label);
                    mapping::lead_source_for_normalized(&normalized)
                        .unwrap_or(LeadSource::Other)
                }
                None => LeadSource::Import,
            };

            leads.push(NewLead {
                name: record.name,
                email,
                company: record.company,
                phone: record.phone,
                source,
                notes: record.notes.unwrap_or_default(),
                last_contacted_at: record.last_contacted,
            });
        }

        Ok(ParsedLeads { leads, skipped })
    }
}
