pub mod configuration;
pub mod crm_client;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod telemetry;
pub mod theme;
