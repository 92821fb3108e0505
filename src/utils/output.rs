use colored::*;

use crate::core::catalog::Operation;
use crate::core::data::ModelConfig;
use crate::utils::error::AppResult;
use crate::utils::format::truncate_string;

pub struct OutputStyle;

impl OutputStyle {
    pub fn command(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Titled panel around a body, as printed after each operation
    pub fn format_panel(icon: &str, title: &str, body: &str) -> String {
        format!(
            "\n{} {}\n{}\n{}\n{}",
            icon,
            Self::title(title),
            Self::separator(),
            body,
            Self::separator()
        )
    }

    /// Panel for one result; a failed result shows its error in place of the response
    pub fn format_result_panel(icon: &str, title: &str, result: &AppResult<String>) -> String {
        let body = match result {
            Ok(response) => Self::content(response).to_string(),
            Err(err) => format!("❌ {}", Self::error(&err.to_string())),
        };
        Self::format_panel(icon, title, &body)
    }

    /// Print a model response verbatim inside a titled panel
    pub fn print_response_panel(icon: &str, title: &str, response: &str) {
        println!("{}", Self::format_panel(icon, title, &Self::content(response).to_string()));
    }

    pub fn print_result_panel(icon: &str, title: &str, result: &AppResult<String>) {
        println!("{}", Self::format_result_panel(icon, title, result));
    }

    /// Print a rendered prompt without sending it
    pub fn print_rendered_content(content: &str) {
        println!("\n{}:", Self::header("📤 Rendered Prompt"));
        println!("{}", Self::header_separator());
        println!("{}", Self::content(content));
        println!("{}", Self::header_separator());
    }

    pub fn print_progress(message: &str) {
        println!("🚀 {}", Self::info(message));
    }

    pub fn print_model_banner(model: &ModelConfig) {
        println!(
            "{}",
            Self::muted(&format!(
                "model: {} · temperature: {}",
                model.model, model.temperature
            ))
        );
    }
}

/// Display formatter for the operation catalog
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn print_operations(operations: &[Operation]) {
        OutputStyle::print_header(&format!("🧰 Available Operations ({})", operations.len()));

        for (i, op) in operations.iter().enumerate() {
            println!("\n{}. {}", i + 1, OutputStyle::command(op.name));
            OutputStyle::print_field_colored("Title", op.title, OutputStyle::content);
            OutputStyle::print_field_colored("Fields", &op.fields.join(", "), OutputStyle::label);
            let preview = op.template.lines().next().unwrap_or_default();
            OutputStyle::print_field_colored("Preview", &truncate_string(preview, 60), OutputStyle::muted);
        }
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_failed_result_panel_contains_error() {
        let panel = OutputStyle::format_result_panel(
            "💰",
            "Pricing Strategy",
            &Err(AppError::RemoteService("quota exceeded".to_string())),
        );

        assert!(panel.contains("Pricing Strategy"));
        assert!(panel.contains("quota exceeded"));
        assert_eq!(panel.matches(&OutputStyle::separator()).count(), 2);
    }

    #[test]
    fn test_result_panel_keeps_response_verbatim() {
        let panel = OutputStyle::format_result_panel("📝", "Listing", &Ok("  line one\nline two".to_string()));
        assert!(panel.contains("  line one\nline two"));
    }
}
