//! Network access to the search endpoint
//!
//! The [`Transport`] trait is the seam between the request executor and the
//! network. [`HttpTransport`] is the production implementation on top of
//! `reqwest`; tests substitute their own implementations.

mod http;
mod traits;

pub use http::HttpTransport;
pub use traits::Transport;
