//! Rendering of lint results for the terminal and for tooling.

use anyhow::Result;
use doculint_core::LintResult;

use crate::OutputFormat;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Prints lint results in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => {
            for diagnostic in &result.diagnostics {
                println!("{diagnostic}");
            }
        }
    }
    Ok(())
}

/// One block per diagnostic, then a colored summary line.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    for diagnostic in &result.diagnostics {
        out.push_str(&diagnostic.format());
        out.push('\n');
    }
    out.push_str(&summary(result));
    out.push('\n');
    out
}

fn summary(result: &LintResult) -> String {
    let scope = format!(
        "{} package(s), {} file(s)",
        result.units_checked, result.files_checked
    );
    let (errors, warnings, infos) = result.count_by_severity();
    if errors + warnings + infos == 0 {
        return format!("{GREEN}No documentation issues in {scope}{RESET}");
    }

    let color = if errors > 0 { RED } else { YELLOW };
    format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {scope}{RESET}"
    )
}
