use std::collections::HashMap;
use std::sync::OnceLock;

use super::normalizer::normalize_label;
use crate::crm::sources::domain::LeadSource;

static SOURCE_LABEL_MAP: OnceLock<HashMap<String, LeadSource>> = OnceLock::new();

pub(crate) fn lead_source_for_normalized(normalized_label: &str) -> Option<LeadSource> {
    source_label_map().get(normalized_label).copied()
}

fn source_label_map() -> &'static HashMap<String, LeadSource> {
    SOURCE_LABEL_MAP.get_or_init(|| {
        const LABEL_TO_SOURCE: &[(&str, LeadSource)] = &[
            // Site forms
            ("website", LeadSource::Website),
            ("web", LeadSource::Website),
            ("web form", LeadSource::Website),
            ("site", LeadSource::Website),
            ("contact form", LeadSource::Website),
            // Referrals
            ("referral", LeadSource::Referral),
            ("referred", LeadSource::Referral),
            ("word of mouth", LeadSource::Referral),
            ("client referral", LeadSource::Referral),
            // Social channels
            ("social", LeadSource::Social),
            ("social media", LeadSource::Social),
            ("instagram", LeadSource::Social),
            ("facebook", LeadSource::Social),
            ("linkedin", LeadSource::Social),
            ("tiktok", LeadSource::Social),
            // Outbound
            ("outreach", LeadSource::Outreach),
            ("cold email", LeadSource::Outreach),
            ("cold call", LeadSource::Outreach),
            ("outbound", LeadSource::Outreach),
            // In person
            ("event", LeadSource::Event),
            ("conference", LeadSource::Event),
            ("meetup", LeadSource::Event),
            ("trade show", LeadSource::Event),
            // Bulk loads
            ("import", LeadSource::Import),
            ("spreadsheet", LeadSource::Import),
            ("csv", LeadSource::Import),
        ];

        let mut map = HashMap::with_capacity(LABEL_TO_SOURCE.len());
        for (label, source) in LABEL_TO_SOURCE {
            map.insert(normalize_label(label), *source);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(label: &str) -> Option<LeadSource> {
    let normalized = normalize_label(label);
    lead_source_for_normalized(&normalized)
}
