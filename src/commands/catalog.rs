use anyhow::Result;

use crate::cli::OperationArgs;
use crate::config::Config;
use crate::core::{catalog, template};
use crate::utils::error::AppError;
use crate::utils::output::DisplayFormatter;
use crate::utils::{OutputStyle, parse_variables};

pub fn handle_operations_command() {
    DisplayFormatter::print_operations(catalog::all());
}

/// Render locally; needs neither a credential nor the network
pub fn handle_render_command(args: &OperationArgs) -> Result<()> {
    let fields = parse_variables(&args.vars)?;
    let prompt = template::render(&args.operation, &fields)?;
    OutputStyle::print_rendered_content(&prompt);
    Ok(())
}

pub async fn handle_run_command(config: &Config, args: &OperationArgs) -> Result<()> {
    let fields = parse_variables(&args.vars)?;
    // Fail on bad input before touching the credential.
    let op = catalog::find(&args.operation)
        .ok_or_else(|| AppError::UnknownOperation(args.operation.clone()))?;
    let prompt = template::render_operation(op, &fields)?;

    let agent = super::connect(config)?;
    let response = agent.operations().send(op.name, &prompt).await?;
    OutputStyle::print_response_panel("🤖", op.title, &response);
    Ok(())
}
