mod lead_submission;
mod source_tag;
mod upstream_contact;

pub use lead_submission::LeadSubmission;
pub use source_tag::SourceTag;
pub use upstream_contact::UpstreamContact;
