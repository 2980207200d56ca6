//! Transpile command.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::task::JoinSet;

use reskin_core::{Diagnostic, LibraryTarget, ParseFailure, ParserOptions, Severity, TranspileOutput};

use crate::config::load_config;
use crate::inputs::{collect_inputs, Input};

/// Outcome of transpiling one input file.
#[derive(Debug)]
struct FileResult {
    input: Input,
    source: String,
    outcome: Result<TranspileOutput, ParseFailure>,
}

impl FileResult {
    fn diagnostics(&self) -> &[Diagnostic] {
        match &self.outcome {
            Ok(output) => &output.diagnostics,
            Err(failure) => &failure.diagnostics,
        }
    }

    fn emit_skipped(&self) -> bool {
        match &self.outcome {
            Ok(output) => output.emit_skipped(),
            Err(_) => true,
        }
    }
}

async fn transpile_file(input: Input, target: LibraryTarget) -> Result<FileResult> {
    let source = tokio::fs::read_to_string(&input.path)
        .await
        .with_context(|| format!("Failed to read {}", input.path.display()))?;

    let options = ParserOptions::for_path(&input.path);
    let outcome = reskin_oxc::transpile(&source, target, &options);

    Ok(FileResult {
        input,
        source,
        outcome,
    })
}

/// Log every diagnostic of a file as `file (line,col): message`.
fn report_diagnostics(result: &FileResult) {
    let file = result.input.path.display();

    for diagnostic in result.diagnostics() {
        let message = match diagnostic.location(&result.source) {
            Some((line, column)) => format!("{file} ({line},{column}): {}", diagnostic.message),
            None => format!("{file}: {}", diagnostic.message),
        };

        match diagnostic.severity {
            Severity::Error => tracing::error!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
        }
    }
}

async fn write_output(out_dir: &Path, header: &str, result: &FileResult) -> Result<()> {
    let Ok(output) = &result.outcome else {
        return Ok(());
    };

    let path = out_dir.join(&result.input.relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = if header.is_empty() {
        output.output_text.clone()
    } else {
        format!("{header}\n{}", output.output_text)
    };

    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Run the transpile command. Returns the process exit code.
///
/// Nothing is written when any input has errors.
pub async fn run(
    target: LibraryTarget,
    paths: &[PathBuf],
    out_dir: Option<PathBuf>,
    config_path: &Path,
) -> Result<u8> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir));

    let inputs = collect_inputs(paths, &config.input.extensions)?;
    if inputs.is_empty() {
        anyhow::bail!("No input files found");
    }

    tracing::info!("Transpiling {} file(s) for {}", inputs.len(), target);

    let mut tasks = JoinSet::new();
    for input in inputs {
        tasks.spawn(transpile_file(input, target));
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined??);
    }
    results.sort_by(|a, b| a.input.path.cmp(&b.input.path));

    let mut emit_skipped = false;
    for result in &results {
        report_diagnostics(result);
        emit_skipped |= result.emit_skipped();
    }

    if emit_skipped {
        tracing::warn!("Emit skipped due to errors");
    } else {
        for result in &results {
            write_output(&out_dir, &config.output.header, result).await?;
        }
        tracing::info!(
            "Wrote {} file(s) to {} in {}ms",
            results.len(),
            out_dir.display(),
            start.elapsed().as_millis()
        );
    }

    let exit_code = u8::from(emit_skipped);
    tracing::info!("Process exiting with code '{}'.", exit_code);

    Ok(exit_code)
}
