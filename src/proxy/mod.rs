pub mod forwarder;
pub mod routes;

pub use forwarder::{ForwardError, Forwarder, CREDENTIAL_HEADER};
