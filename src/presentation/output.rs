//! Output Rendering
//!
//! Text for humans, NDJSON events for scripts. Renderers write to any
//! `io::Write` so command handlers pass stdout and tests pass a buffer.

use std::io::{self, Write};

use similar::TextDiff;

use crate::application::{GenerateMode, GenerateResult, InspectReport};
use crate::config::ConfigWarning;
use crate::domain::services::{FileAction, PlannedFile};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }
}

/// Unified diff from the file on disk to the rendered artifact
pub fn unified_diff(planned: &PlannedFile) -> String {
    let old = planned.existing.as_deref().unwrap_or("");
    let path = planned.file.path().display().to_string();
    TextDiff::from_lines(old, planned.file.content())
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

/// Trait for rendering generate results
pub trait GenerateResultRenderer {
    fn render(&self, result: &GenerateResult, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for generate results
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn render_check(&self, result: &GenerateResult, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();
        if !result.check_failed() {
            writeln!(out, "{} Up-to-date: {}", icons.check, result.type_path)?;
            return Ok(());
        }

        writeln!(out, "{} Stale artifacts for {}", icons.cross, result.type_path)?;
        for planned in result.stale() {
            let reason = match planned.action {
                FileAction::Create => "missing",
                _ => "out of date",
            };
            writeln!(out, "  {} {} ({})", icons.cross, planned.file.path().display(), reason)?;
        }
        for planned in result.stale() {
            writeln!(out)?;
            write!(out, "{}", unified_diff(planned))?;
        }
        Ok(())
    }
}

impl GenerateResultRenderer for TextRenderer {
    fn render(&self, result: &GenerateResult, out: &mut dyn Write) -> io::Result<()> {
        if result.mode == GenerateMode::Check {
            return self.render_check(result, out);
        }

        let icons = self.icons();
        if result.is_up_to_date() {
            writeln!(out, "{} Already up-to-date: {}", icons.check, result.type_path)?;
            if self.verbose > 0 {
                for planned in &result.files {
                    writeln!(out, "  {} {}", icons.skip, planned.file.path().display())?;
                }
            }
            return Ok(());
        }

        match result.mode {
            GenerateMode::DryRun => {
                writeln!(out, "{} Dry run for {} (nothing written)", icons.check, result.type_path)?
            }
            _ => writeln!(out, "{} Generated {}", icons.check, result.type_path)?,
        }
        writeln!(out)?;

        for planned in &result.files {
            let icon = if planned.should_write() {
                icons.write
            } else {
                icons.skip
            };
            if planned.should_write() || self.verbose > 0 {
                writeln!(
                    out,
                    "  {} {:<9} {}",
                    icon,
                    planned.action.as_str(),
                    planned.file.path().display()
                )?;
            }
        }

        if self.verbose > 1 {
            for planned in &result.files {
                writeln!(out, "    {} {}", planned.file.kind(), planned.file.hash())?;
            }
        }
        Ok(())
    }
}

/// NDJSON renderer for generate results
pub struct JsonRenderer;

impl GenerateResultRenderer for JsonRenderer {
    fn render(&self, result: &GenerateResult, out: &mut dyn Write) -> io::Result<()> {
        for planned in &result.files {
            let path = planned.file.path();
            let event = serde_json::json!({
                "event": "artifact",
                "type_path": result.type_path.to_string(),
                "kind": planned.file.kind().as_str(),
                "path": path.display().to_string(),
                "action": planned.action.as_str(),
                "hash": planned.file.hash(),
                "bytes": planned.file.len(),
                "written": result.written.iter().any(|w| w == path),
            });
            write_event(out, &event)?;
        }

        let event = serde_json::json!({
            "event": "complete",
            "command": "generate",
            "mode": result.mode.as_str(),
            "written": result.written.len(),
            "stale": result.stale().count(),
            "success": !result.check_failed(),
        });
        write_event(out, &event)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn GenerateResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            unicode: true,
            verbose,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Render an inspect report
pub fn render_inspect(
    report: &InspectReport,
    format: OutputFormat,
    out: &mut dyn Write,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        let mut event = serde_json::to_value(report).unwrap_or_default();
        if let Some(map) = event.as_object_mut() {
            map.insert("event".to_string(), serde_json::json!("inspect"));
        }
        return write_event(out, &event);
    }

    writeln!(
        out,
        "{} -> {} (collection \"{}\")",
        report.type_path, report.persistence_type, report.collection
    )?;
    writeln!(out, "  persistence: {}", report.persistence_file)?;
    writeln!(out, "  mapper:      {}", report.mapper_file)?;

    writeln!(out)?;
    writeln!(out, "Fields:")?;
    for field in &report.fields {
        write_field(out, field, 1)?;
    }

    writeln!(out)?;
    writeln!(out, "Columns:")?;
    let width = report
        .columns
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);
    for column in &report.columns {
        let marker = if column.primary_key { "  primary key" } else { "" };
        writeln!(
            out,
            "  {:<width$}  {:<20}  {}{}",
            column.name,
            column.storage_type,
            column.rust_type,
            marker,
            width = width
        )?;
    }

    if !report.mapping.is_empty() {
        writeln!(out)?;
        writeln!(out, "Reconstruction:")?;
        for entry in &report.mapping {
            writeln!(out, "  {} <- {}", entry.compound, entry.columns.join(", "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "to_domain returns {}", report.to_domain_returns)?;
    Ok(())
}

fn write_field(
    out: &mut dyn Write,
    field: &crate::application::inspect::FieldNode,
    depth: usize,
) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    let access = match &field.accessor {
        Some(method) => format!("via {}()", method),
        None => "direct".to_string(),
    };
    writeln!(
        out,
        "{}{}: {} [{}] {}",
        indent, field.name, field.declared, field.shape, access
    )?;
    for child in &field.children {
        write_field(out, child, depth + 1)?;
    }
    Ok(())
}

/// Render non-fatal config warnings (stderr for text, an event for JSON)
pub fn render_config_warnings(warnings: &[ConfigWarning], format: OutputFormat) -> io::Result<()> {
    for warning in warnings {
        match format {
            OutputFormat::Json => emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?,
            OutputFormat::Text => {
                let location = match warning.line {
                    Some(line) => format!("{}:{}", warning.file.display(), line),
                    None => warning.file.display().to_string(),
                };
                let hint = warning
                    .suggestion
                    .as_deref()
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                eprintln!("[!] unknown config key '{}' in {}{}", warning.key, location, hint);
            }
        }
    }
    Ok(())
}
