//! Interactive menu loop.

use crate::output::render_text;
use crate::prober::{parse_param, params::insert_param, Prober};
use crate::types::{Params, ProbeResult, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

const RULE_WIDTH: usize = 60;

/// Menu-driven session reading choices from `input` and writing to `out`.
pub struct Interactive<'a, R, W> {
    prober: &'a Prober,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Interactive<'a, R, W> {
    pub fn new(prober: &'a Prober, input: R, out: W) -> Self {
        Self { prober, input, out }
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("\nSelect option (1-6): ")? else {
                debug!("Input closed, leaving interactive mode");
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.check_headers().await?,
                "2" => self.check_status().await?,
                "3" => self.test_parameters().await?,
                "4" => self.batch_check().await?,
                "5" => {
                    self.info("Export feature coming soon!")?;
                    writeln!(self.out, "   Planned formats: JSON, CSV, HTML Report")?;
                }
                "6" => {
                    self.info("Happy hacking!")?;
                    return Ok(());
                }
                _ => self.warn("Invalid choice. Please select 1-6")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "WEB ENUMERATION TOOL - Interactive Mode")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "1. Check Headers & Security")?;
        writeln!(self.out, "2. Check Website Status")?;
        writeln!(self.out, "3. Test URL Parameters")?;
        writeln!(self.out, "4. Batch Check (Multiple URLs)")?;
        writeln!(self.out, "5. Export Results")?;
        writeln!(self.out, "6. Exit")?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    async fn check_headers(&mut self) -> Result<()> {
        let url = self.prompt("Enter URL: ")?.unwrap_or_default();
        self.info(&format!("Checking headers for: {}", url))?;

        let result = ProbeResult::from_outcome(self.prober.fetch_headers(&url).await);
        self.show(&result)
    }

    async fn check_status(&mut self) -> Result<()> {
        let url = self.prompt("Enter URL: ")?.unwrap_or_default();
        self.info(&format!("Checking status for: {}", url))?;

        let result = ProbeResult::from_outcome(self.prober.check_status(&url).await);
        self.show(&result)
    }

    async fn test_parameters(&mut self) -> Result<()> {
        let url = self.prompt("Enter base URL: ")?.unwrap_or_default();
        self.info("Enter parameters (name=value, one per line, empty line to finish):")?;

        let mut params = Params::new();
        while let Some(line) = self.prompt("> ")? {
            if line.is_empty() {
                break;
            }
            match parse_param(&line) {
                Some((key, value)) => insert_param(&mut params, &key, &value),
                None => self.warn("Format should be: name=value")?,
            }
        }

        self.info(&format!("Testing with {} parameters...", params.len()))?;
        let result = ProbeResult::from_outcome(self.prober.test_parameters(&url, &params).await);
        self.show(&result)
    }

    async fn batch_check(&mut self) -> Result<()> {
        self.info("Enter URLs (one per line, empty line to finish):")?;

        let mut urls = Vec::new();
        while let Some(line) = self.prompt("URL> ")? {
            if line.is_empty() {
                break;
            }
            urls.push(line);
        }

        for url in &urls {
            self.info(&format!("Processing: {}", url))?;
            let result = ProbeResult::from_outcome(self.prober.check_status(url).await);
            self.show(&result)?;
        }
        Ok(())
    }

    /// Write a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, result: &ProbeResult) -> Result<()> {
        writeln!(self.out, "{}", render_text(result))?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n{} {}", "[+]".bright_green(), message)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n{} {}", "[!]".yellow(), message)?;
        Ok(())
    }
}
