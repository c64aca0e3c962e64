//! The contact form's side of a submission: field state, the
//! `idle → submitting → success | error` machine and the client that posts to
//! `/api/contact`.

mod form;
mod proxy_client;

pub use form::*;
pub use proxy_client::*;
