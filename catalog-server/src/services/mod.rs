//! Services
//!
//! - [`HttpService`] - router assembly and the HTTP listener

pub mod http;

pub use http::{HttpService, build_app};
