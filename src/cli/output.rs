// Output formatting utilities

use crate::models::Pipeline;
use std::io::IsTerminal;

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to COLUMNS and a default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 { // Sanity check
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn truncate_to_width(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        line.to_string()
    } else if width <= 3 {
        line.chars().take(width).collect()
    } else {
        let mut truncated: String = line.chars().take(width - 3).collect();
        truncated.push_str("...");
        truncated
    }
}

/// Format matched pipelines as a table
///
/// Columns: Name, Stage (name/counter of the latest stage), Status, Paused.
pub fn format_pipeline_table(pipelines: &[&Pipeline], width: usize, is_tty: bool) -> String {
    if pipelines.is_empty() {
        return "No matching pipelines.".to_string();
    }

    let rows: Vec<[String; 4]> = pipelines.iter().map(|pipeline| {
        let (stage, status) = match pipeline.latest_stage() {
            Some(stage) => (format!("{}/{}", stage.name, stage.counter), stage.status.as_str().to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        let paused = if pipeline.paused { "yes".to_string() } else { String::new() };
        [pipeline.name.clone(), stage, status, paused]
    }).collect();

    let headers = ["Name", "Stage", "Status", "Paused"];
    let mut widths: [usize; 4] = headers.map(|h| h.len());
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 4]| -> String {
        let line = cells.iter().enumerate()
            .map(|(i, cell)| format!("{:<w$}", cell, w = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        truncate_to_width(line.trim_end(), width)
    };

    let mut output = Vec::with_capacity(rows.len() + 1);
    output.push(bold_if_tty(&render(headers), is_tty));
    for row in &rows {
        output.push(render([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]));
    }
    output.join("\n")
}
