//! `campusnet run` command - execute a command script
//!
//! The first line may hold the number of commands that follow; otherwise
//! every non-empty line is a command. Each command prints one result block
//! and a rejected command never stops the script.

pub mod interpreter;
pub mod parser;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use campusnet_core::campus::Campus;
use campusnet_core::error::{CampusError, Result};

use interpreter::Reply;
use parser::parse_line;

/// Tally of one script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Execute the run command
pub fn execute(cli: &Cli, campus: &mut Campus, script: Option<&Path>) -> Result<()> {
    let text = match script {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CampusError::io_operation("read", path.display(), e))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let lines = script_lines(&text);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run_script(campus, &lines, cli.format, &mut out)?;
    out.flush()?;

    tracing::debug!(
        executed = summary.executed,
        failed = summary.failed,
        "script finished"
    );
    Ok(())
}

/// Command lines of a script, honouring a leading command count
pub fn script_lines(text: &str) -> Vec<&str> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(first) = lines.next() else {
        return Vec::new();
    };

    match first.parse::<usize>() {
        Ok(count) => {
            let commands: Vec<&str> = lines.by_ref().take(count).collect();
            if commands.len() < count {
                tracing::warn!(
                    expected = count,
                    found = commands.len(),
                    "script ended before the declared command count"
                );
            } else if lines.next().is_some() {
                tracing::warn!(expected = count, "ignoring lines past the declared command count");
            }
            commands
        }
        Err(_) => std::iter::once(first).chain(lines).collect(),
    }
}

/// Execute `lines` in order, writing each result to `out`
pub fn run_script<W: Write>(
    campus: &mut Campus,
    lines: &[&str],
    format: OutputFormat,
    out: &mut W,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in lines.iter().enumerate() {
        let (keyword, reply) = match parse_line(line) {
            Ok(command) => (Some(command.keyword()), interpreter::execute(campus, &command)),
            Err(e) => {
                tracing::debug!(line = index + 1, error = %e, "malformed command");
                (None, Reply::Done(false))
            }
        };

        summary.executed += 1;
        if !reply.is_success() {
            summary.failed += 1;
        }

        match format {
            OutputFormat::Human => reply.render_human(out)?,
            OutputFormat::Json => {
                let mut value = reply.to_json();
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("line".to_string(), serde_json::json!(index + 1));
                    obj.insert("command".to_string(), serde_json::json!(keyword));
                }
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            }
        }
    }

    Ok(summary)
}
