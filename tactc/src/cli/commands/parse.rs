use crate::ops::{describe_item, describe_selector, load, with_handler};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tact_ast::{ContractDeclaration, ProgramItem};
use tact_features::Features;
use tact_tracing::println_green;
use tact_types::SourceEngine;
use tracing::info;

/// Parse a Tact source file.
#[derive(Debug, Parser)]
pub struct Command {
    /// Path to the `.tact` file.
    pub file: PathBuf,
    /// Print the whole syntax tree as JSON instead of a summary.
    #[clap(long)]
    pub json: bool,
}

pub(crate) fn exec(command: Command, features: &Features) -> Result<()> {
    let engine = SourceEngine::default();
    let file = load(&engine, &command.file)?;
    let program = with_handler(&engine, &file, |handler| {
        tact_parse::parse(handler, file.src.clone(), Some(file.source_id))
    })?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(());
    }

    println_green(&format!(
        "Parsed {} ({} items)",
        command.file.display(),
        program.items.len()
    ));
    for item in &program.items {
        info!("  {}", describe_item(item));
        if features.enabled_debug() {
            print_receivers(item);
        }
    }
    Ok(())
}

fn print_receivers(item: &ProgramItem) {
    let declarations = match item {
        ProgramItem::Contract(contract) => &contract.declarations,
        ProgramItem::Trait(item) => &item.declarations,
        _ => return,
    };
    for declaration in declarations {
        if let ContractDeclaration::Receiver(receiver) = declaration {
            info!("    {}", describe_selector(&receiver.selector));
        }
    }
}
