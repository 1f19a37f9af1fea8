//! Interactive set selection

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Which texture sets to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Standard,
    Variants,
    Both,
}

/// Map a menu answer to a choice; `None` for anything unrecognized
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::Standard),
        "2" => Some(Choice::Variants),
        "3" => Some(Choice::Both),
        _ => None,
    }
}

/// Print the menu to `output` and read one answer line from `input`
///
/// Unrecognized answers (including end of input) fall back to the standard
/// set.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    standard_size: u32,
) -> Result<Choice> {
    writeln!(output, "Fruit Texture Generator")?;
    writeln!(output, "{}", "=".repeat(40))?;
    writeln!(output, "Creates full square textures for UV mapping on spheres")?;
    writeln!(output)?;
    writeln!(output, "Choose option:")?;
    writeln!(output, "1. Standard textures ({standard_size}x{standard_size})")?;
    writeln!(output, "2. Multiple size variants")?;
    writeln!(output, "3. Both")?;
    write!(output, "Enter 1, 2, or 3: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read menu choice")?;

    Ok(parse_choice(&line).unwrap_or_else(|| {
        tracing::warn!(input = line.trim(), "Invalid choice, creating standard textures");
        Choice::Standard
    }))
}
