use std::io::{self, BufRead, Write};

use crate::utils::error::{AppError, AppResult};
use crate::utils::output::OutputStyle;

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| AppError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| AppError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}

/// Ask for a value, falling back to `default` on empty input
pub fn prompt_with_default(label: &str, default: &str) -> AppResult<String> {
    let prompt = format!(
        "{} {}: ",
        OutputStyle::label(label),
        OutputStyle::muted(&format!("[default: {}]", default))
    );
    let input = prompt_input(&prompt)?;
    Ok(choose_value(input, default))
}

fn choose_value(input: String, default: &str) -> String {
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Resolve a form value: explicit flag, then interactive prompt, then the sample default
pub fn resolve_input(
    provided: Option<String>,
    label: &str,
    default: &str,
    interactive: bool,
) -> AppResult<String> {
    match provided {
        Some(value) => Ok(value),
        None if interactive => prompt_with_default(label, default),
        None => Ok(default.to_string()),
    }
}
