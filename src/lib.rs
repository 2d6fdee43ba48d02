//! webenum - basic HTTP reconnaissance for ethical security testing.
//!
//! This library provides:
//! - Header fetching with a fixed security header checklist
//! - Reachability checks with status classification and timing
//! - Parameter probing with encoded query strings
//! - Text and JSON rendering of the results
//!
//! # Example
//!
//! ```no_run
//! use webenum::{HttpConfig, ProbeResult, Prober};
//!
//! #[tokio::main]
//! async fn main() {
//!     let prober = Prober::new(HttpConfig::default()).unwrap();
//!     let result = ProbeResult::from_outcome(prober.check_status("https://example.com").await);
//!     println!("{}", webenum::output::render_text(&result));
//! }
//! ```

pub mod config;
pub mod interactive;
pub mod output;
pub mod prober;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{Config, OutputFormat, ProbeKind};
pub use interactive::Interactive;
pub use output::ConsoleOutput;
pub use prober::Prober;
pub use types::{
    ErrorResult, HeaderResult, HttpConfig, ParamResult, Params, ProbeError, ProbeResult, Result,
    SecurityReport, StatusResult, WebEnumError, UNREACHABLE,
};
