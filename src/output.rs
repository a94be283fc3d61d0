//! Output — renders conversions as TSV or JSON lines.

use std::io::Write;

use dharm_core::{normalize, patterns, Conversion, Fillers, OutputFormat};
use serde::Serialize;

/// Counts gathered while writing a batch of conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub alerts: usize,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    input: &'a str,
    start: &'a str,
    end: &'a str,
    pattern: Option<&'static str>,
}

/// Render one conversion as a single line (no trailing newline).
pub fn render_line(input: &str, conv: &Conversion, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tsv => format!("{input}\t{}\t{}", conv.span.start, conv.span.end),
        OutputFormat::Json => {
            let record = JsonRecord {
                input,
                start: &conv.span.start,
                end: &conv.span.end,
                pattern: conv.pattern.map(|p| p.name()),
            };
            // A struct of strings always serialises.
            serde_json::to_string(&record).unwrap_or_default()
        }
    }
}

/// Convert each input and write one rendered line per input to `out`.
pub fn write_conversions<W, I, S>(
    out: &mut W,
    inputs: I,
    fillers: &Fillers,
    format: OutputFormat,
) -> std::io::Result<Summary>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = Summary::default();

    for input in inputs {
        let input = input.as_ref();
        let conv = normalize(input, fillers);
        summary.total += 1;

        match conv.pattern {
            Some(pattern) => tracing::trace!(input, %pattern, "converted"),
            None => {
                summary.alerts += 1;
                tracing::warn!(input, "no date pattern matched");
            }
        }

        writeln!(out, "{}", render_line(input, &conv, format))?;
    }

    Ok(summary)
}

/// Write `name<TAB>example<TAB>start<TAB>end` for every table entry.
pub fn write_pattern_table<W: Write>(out: &mut W, fillers: &Fillers) -> std::io::Result<()> {
    for rule in patterns() {
        let id = rule.id();
        let span = dharm_core::convert(id.example(), fillers);
        writeln!(out, "{}\t{}\t{}\t{}", id.name(), id.example(), span.start, span.end)?;
    }
    Ok(())
}
