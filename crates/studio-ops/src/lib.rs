//! Back-office library for a creative studio: configuration, telemetry, and
//! the CRM domain behind the unified inbox and client roster.

pub mod config;
pub mod crm;
pub mod error;
pub mod telemetry;
