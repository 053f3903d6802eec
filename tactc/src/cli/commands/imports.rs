use crate::ops::{load, with_handler};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tact_features::Features;
use tact_tracing::println_yellow_err;
use tact_types::SourceEngine;

/// List the imports of a Tact source file.
#[derive(Debug, Parser)]
pub struct Command {
    /// Path to the `.tact` file.
    pub file: PathBuf,
}

pub(crate) fn exec(command: Command, _features: &Features) -> Result<()> {
    let engine = SourceEngine::default();
    let file = load(&engine, &command.file)?;
    let imports = with_handler(&engine, &file, |handler| {
        tact_parse::parse_imports(handler, file.src.clone(), Some(file.source_id))
    })?;
    tracing::debug!(count = imports.len(), "imports");
    if imports.is_empty() {
        println_yellow_err(&format!("{} has no imports", command.file.display()));
    }
    for import in imports {
        println!("{import}");
    }
    Ok(())
}
