//! Text and JSON rendering of probe results.

use crate::types::{ProbeResult, Result, SecurityReport};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Write as _;

const SEPARATOR_WIDTH: usize = 40;

/// Output handler for probe results.
pub struct ConsoleOutput {
    json_mode: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    /// Render a result in the configured format.
    pub fn render(&self, result: &ProbeResult) -> Result<String> {
        if self.json_mode {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(render_text(result))
        }
    }

    /// Print a result to stdout.
    pub fn print_result(&self, result: &ProbeResult) -> Result<()> {
        println!("{}", self.render(result)?);
        Ok(())
    }

    /// Print an info message.
    pub fn print_info(&self, message: &str) {
        if self.json_mode {
            return;
        }

        println!("{} {}", "[+]".bright_green(), message);
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Human-readable rendering. Errors are a single flagged line.
pub fn render_text(result: &ProbeResult) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = format!("\n{}\n", separator);

    match result {
        ProbeResult::Error(e) => {
            return format!("{} Error: {}", "[!]".red().bold(), e.error);
        }
        ProbeResult::Headers(h) => {
            field(&mut out, "url", &h.url);
            field(&mut out, "status_code", h.status_code);
            headers_block(&mut out, &h.headers);
            field(&mut out, "server", &h.server);
            security_block(&mut out, &h.security_headers);
        }
        ProbeResult::Status(s) => {
            field(&mut out, "url", &s.url);
            field(&mut out, "status_code", s.status_code);
            field(&mut out, "status_message", &s.status_message);
            field(&mut out, "response_time", s.response_time);
        }
        ProbeResult::Params(p) => {
            field(&mut out, "url", &p.url);
            field(&mut out, "status_code", p.status_code);
            field(&mut out, "content_length", p.content_length);
            field(&mut out, "content_type", &p.content_type);
            let _ = writeln!(out, "\nContent Preview:");
            let _ = writeln!(out, "  {}", p.preview);
        }
    }

    out.push_str(&separator);
    out
}

fn field(out: &mut String, name: &str, value: impl Display) {
    let _ = writeln!(out, "{}: {}", title_case(name), value);
}

fn headers_block(out: &mut String, headers: &BTreeMap<String, String>) {
    let _ = writeln!(out, "\nHeaders:");
    for (name, value) in headers {
        let _ = writeln!(out, "  {}: {}", name, value);
    }
}

fn security_block(out: &mut String, report: &SecurityReport) {
    let _ = writeln!(out, "\nSecurity Analysis:");
    for (name, verdict) in report.iter() {
        let marker = if verdict.starts_with("Present") {
            "✅"
        } else {
            "⚠️"
        };
        let _ = writeln!(out, "  {} {}: {}", marker, name, verdict);
    }
}

/// `status_code` -> `Status Code`.
pub fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
