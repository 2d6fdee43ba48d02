//! Probe module.
//!
//! This module handles:
//! - Header fetching and the security header checklist
//! - Reachability and status classification
//! - Parameter testing with encoded query strings

pub mod client;
pub mod headers;
pub mod params;
pub mod status;

pub use client::Prober;
pub use headers::{check_security_headers, SECURITY_HEADERS};
pub use params::{parse_param, parse_param_list};
pub use status::interpret_status;
