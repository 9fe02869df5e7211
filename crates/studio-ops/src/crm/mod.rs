//! CRM domain behind the operator back office: the four inbound submission
//! stores, the unified inbox projection over them, the consolidated client
//! roster, and bulk lead import.

pub mod clients;
pub mod import;
pub mod inbox;
pub mod sources;
