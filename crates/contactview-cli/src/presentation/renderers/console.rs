use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusBadge, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }

    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Csv => match result.content.csv_records() {
                Some(records) => {
                    report_badge(result.badge.as_ref());
                    let mut writer = csv::Writer::from_writer(&mut *out);
                    for record in records {
                        writer.write_record(&record)?;
                    }
                    writer.flush()?;
                }
                None => {
                    tracing::warn!("csv output is not available here, falling back to plain text");
                    self.render_text(out, result)?;
                }
            },
            OutputFormat::Text => self.render_text(out, result)?,
        }
        Ok(())
    }

    fn render_text<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.mode == ViewMode::Minimal {
            report_badge(result.badge.as_ref());
            write!(out, "{}", result.content.create_view(self.mode))?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", cmd.cyan())?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

/// Badge goes to stderr when stdout carries machine-readable data.
fn report_badge(badge: Option<&StatusBadge>) {
    if let Some(badge) = badge {
        eprintln!("{} {}", badge.icon(), badge.label);
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_contact_list;
    use contactview_engine::ViewState;
    use contactview_types::{ContactRecord, LoadError};

    fn render(format: OutputFormat, mode: ViewMode, state: &ViewState) -> String {
        let renderer = ConsoleRenderer::new(format, mode);
        let mut out = Vec::new();
        renderer
            .render_to(&mut out, &present_contact_list(state, "contacts.json"))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn loaded() -> ViewState {
        let mut state = ViewState::new();
        state.apply_load(Ok(vec![
            ContactRecord::new(Some("Work"), Some("John Doe"), Some("555 1234")),
            ContactRecord::new(None, Some("Ann, \"Jr\""), Some("N/A")),
        ]));
        state
    }

    #[test]
    fn test_json_output_carries_aria_sort_and_tel() {
        let output = render(OutputFormat::Json, ViewMode::Standard, &loaded());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["content"]["columns"][1]["aria_sort"], "ascending");
        assert_eq!(value["content"]["columns"][0]["aria_sort"], "none");
        assert_eq!(value["content"]["body"]["state"], "populated");
        assert_eq!(value["content"]["status"]["kind"], "total");
        assert_eq!(
            value["content"]["body"]["rows"][1]["phone"]["href"],
            "tel:5551234"
        );
        assert_eq!(value["content"]["body"]["rows"][0]["alias"]["kind"], "missing");
        assert!(value.get("badge").is_none());
    }

    #[test]
    fn test_csv_output_quotes_fields() {
        let output = render(OutputFormat::Csv, ViewMode::Standard, &loaded());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "alias,name,phone");
        assert_eq!(lines[1], "N/A,\"Ann, \"\"Jr\"\"\",N/A");
        assert_eq!(lines[2], "Work,John Doe,555 1234");
    }

    #[test]
    fn test_text_output_shows_error_badge_and_message() {
        let mut state = ViewState::new();
        state.apply_load(Err(LoadError::Status(500)));
        let output = render(OutputFormat::Text, ViewMode::Standard, &state);

        assert!(output.contains("Could not load contacts.json: Request failed with status 500"));
        assert!(output.contains("Failed to load contacts. Please try again later."));
        assert!(output.contains("Failed to load contacts"));
        assert!(output.contains("Tips:"));
    }
}
