use crate::infra::{build_back_office, BackOffice};
use clap::Args;
use std::path::PathBuf;
use studio_ops::crm::clients::{sort_by_recent_activity, ClientSummary};
use studio_ops::crm::import::LeadCsvImporter;
use studio_ops::crm::inbox::{sort_newest_first, InboxItem, SourceRecord, UnifiedStatus};
use studio_ops::crm::sources::{
    ContactForm, ContactStatus, LeadSource, LeadStatus, NewLead, NewProject, ProjectRequestForm,
    QuoteRequestForm, QuoteStatus, RequestStatus,
};
use studio_ops::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional lead spreadsheet export (CSV) to load on top of the sample data
    #[arg(long)]
    pub(crate) leads_csv: Option<PathBuf>,
    /// Only show inbox items with this unified status
    #[arg(long, value_parser = parse_unified_status)]
    pub(crate) status: Option<UnifiedStatus>,
    /// Skip the client roster portion of the demo output
    #[arg(long)]
    pub(crate) skip_roster: bool,
}

fn parse_unified_status(raw: &str) -> Result<UnifiedStatus, String> {
    raw.parse::<UnifiedStatus>().map_err(|err| err.to_string())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        leads_csv,
        status,
        skip_roster,
    } = args;

    let office = build_back_office();
    seed_sample_data(&office)?;

    println!("Studio back-office demo");

    if let Some(path) = leads_csv {
        let parsed = LeadCsvImporter::from_path(path)?;
        let skipped = parsed.skipped;
        let imported = office.service.import_leads(parsed.leads)?;
        println!("Imported {imported} lead(s) from CSV ({skipped} row(s) skipped)");
    }

    let mut items = office.aggregator.aggregate()?;
    sort_newest_first(&mut items);

    let count_of = |wanted: UnifiedStatus| {
        items
            .iter()
            .filter(|item| item.status == wanted)
            .count()
    };
    println!(
        "\nUnified inbox: {} item(s) | new {} | in progress {} | converted {} | closed {}",
        items.len(),
        count_of(UnifiedStatus::New),
        count_of(UnifiedStatus::InProgress),
        count_of(UnifiedStatus::Converted),
        count_of(UnifiedStatus::Closed),
    );

    if let Some(wanted) = status {
        items.retain(|item| item.status == wanted);
        println!("Showing only '{}' items", wanted.label());
    }

    if items.is_empty() {
        println!("(inbox empty)");
    }
    for item in &items {
        render_inbox_item(item);
    }

    if skip_roster {
        return Ok(());
    }

    let mut roster = office.directory.consolidate()?;
    sort_by_recent_activity(&mut roster);

    println!("\nClient roster: {} client(s)", roster.len());
    for row in &roster {
        render_client(row);
    }

    Ok(())
}

fn render_inbox_item(item: &InboxItem) {
    let who = match item.email.as_deref() {
        Some(email) => format!("{} <{}>", item.name, email),
        None => item.name.clone(),
    };
    println!(
        "- [{}] {} {} | {} | {} | {}",
        item.status.label(),
        item.source.label(),
        item.id.0,
        who,
        detail_line(&item.record),
        item.created_at.format("%Y-%m-%d %H:%M"),
    );
}

fn detail_line(record: &SourceRecord) -> String {
    match record {
        SourceRecord::Contact(submission) => format!("about {}", submission.service),
        SourceRecord::Request(request) => format!(
            "{} | budget {}",
            request.project_types.join("+"),
            request.budget
        ),
        SourceRecord::Quote(quote) => {
            format!("{} in {} | {}", quote.service_type, quote.zip_code, quote.phone)
        }
        SourceRecord::Lead(lead) => format!("via {} | {}", lead.source.label(), lead.notes),
    }
}

fn render_client(row: &ClientSummary) {
    println!(
        "- {} | {} | {} related record(s) | first seen {} | last activity {}",
        row.email,
        if row.name.is_empty() { "(unnamed)" } else { &row.name },
        row.related_records(),
        row.first_seen.format("%Y-%m-%d"),
        row.last_activity.format("%Y-%m-%d"),
    );
}

fn seed_sample_data(office: &BackOffice) -> Result<(), AppError> {
    let service = &office.service;

    let fresh_contact = service.submit_contact(ContactForm {
        name: "Ada Marsh".to_string(),
        email: "ada@northpine.studio".to_string(),
        service: "web design".to_string(),
        message: "We need a refresh of our gallery site.".to_string(),
    })?;
    // Ada is also a current client; her message should fold into the roster.
    service.create_project(NewProject {
        title: "Northpine gallery relaunch".to_string(),
        client_name: "Ada Marsh".to_string(),
        client_email: fresh_contact.email.clone(),
    })?;

    let answered = service.submit_contact(ContactForm {
        name: "Juno Park".to_string(),
        email: "juno@parkandco.kr".to_string(),
        service: "branding".to_string(),
        message: "Can you share your branding portfolio?".to_string(),
    })?;
    service.set_contact_status(&answered.id, ContactStatus::Replied)?;

    let in_talks = service.submit_request(ProjectRequestForm {
        name: "Dana Okafor".to_string(),
        email: "dana@okafor.studio".to_string(),
        business_name: Some("Okafor Studio".to_string()),
        project_types: vec!["branding".to_string(), "web".to_string()],
        description: "Full rebrand ahead of spring launch.".to_string(),
        timeline: "3 months".to_string(),
        budget: "10k-25k".to_string(),
    })?;
    service.set_request_status(&in_talks.id, RequestStatus::Contacted)?;

    let won = service.submit_request(ProjectRequestForm {
        name: "Felix Abara".to_string(),
        email: "felix@abarahomes.com".to_string(),
        business_name: Some("Abara Homes".to_string()),
        project_types: vec!["vr".to_string()],
        description: "Virtual walkthroughs for three show homes.".to_string(),
        timeline: "6 weeks".to_string(),
        budget: "25k+".to_string(),
    })?;
    service.set_request_status(&won.id, RequestStatus::Accepted)?;

    service.submit_quote(QuoteRequestForm {
        name: "Bo Reyes".to_string(),
        phone: "515-555-0117".to_string(),
        email: None,
        service_type: "virtual tour".to_string(),
        issue_type: "new capture".to_string(),
        property_type: "retail".to_string(),
        zip_code: "50309".to_string(),
        description: Some("Two-floor showroom".to_string()),
    })?;

    let cold = service.submit_quote(QuoteRequestForm {
        name: "Mika Sato".to_string(),
        phone: "515-555-0186".to_string(),
        email: Some("mika@satobakery.com".to_string()),
        service_type: "photography".to_string(),
        issue_type: "reshoot".to_string(),
        property_type: "bakery".to_string(),
        zip_code: "50312".to_string(),
        description: None,
    })?;
    service.set_quote_status(&cold.id, QuoteStatus::Closed)?;

    let warm = service.create_lead(NewLead {
        name: "Cleo Tran".to_string(),
        email: "cleo@trancreative.co".to_string(),
        company: Some("Tran Creative".to_string()),
        phone: None,
        source: LeadSource::Referral,
        notes: "Asked about VR showroom pricing.".to_string(),
        last_contacted_at: None,
    })?;
    service.set_lead_status(&warm.id, LeadStatus::Qualified)?;

    let lost = service.create_lead(NewLead {
        name: "Priya Nair".to_string(),
        email: "priya@nairevents.in".to_string(),
        company: None,
        phone: Some("515-555-0153".to_string()),
        source: LeadSource::Event,
        notes: "Went with an in-house team.".to_string(),
        last_contacted_at: None,
    })?;
    service.set_lead_status(&lost.id, LeadStatus::Lost)?;

    Ok(())
}
