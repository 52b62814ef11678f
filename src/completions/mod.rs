//! Wire format of the AI21 completion endpoint.

pub mod params;
pub(crate) mod request;
pub(crate) mod response;

pub use params::{CompletionParams, Penalty};
pub use request::{build_request_body, flatten_messages};
