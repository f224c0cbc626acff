//! Validate command implementation

use crate::cache::read_document;
use crate::cli::ValidateArgs;
use crate::output::OutputWriter;
use crate::output_types::{ValidateOutput, ValidationEntry};
use anyhow::{bail, Result};
use firemap_core::models::DocumentType;
use firemap_core::processing::check_document;
use std::path::Path;

pub fn execute(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    let files: Vec<ValidationEntry> = args.paths.iter().map(|path| validate_file(path)).collect();

    let invalid_count = files.iter().filter(|f| !f.valid).count();
    let valid_count = files.len() - invalid_count;

    if output.is_json() {
        output.result(ValidateOutput { files, valid_count, invalid_count })?;
    } else {
        for file in &files {
            match (&file.document_type, &file.reason) {
                (Some(document_type), _) => {
                    output.success(format!("{} ({})", file.path, document_type))
                }
                (None, reason) => output.error(format!(
                    "{}: {}",
                    file.path,
                    reason.as_deref().unwrap_or("invalid")
                )),
            }
        }
        output.info(format!("{} valid, {} invalid", valid_count, invalid_count));
    }

    if invalid_count > 0 {
        bail!("{} of {} documents failed validation", invalid_count, valid_count + invalid_count);
    }

    Ok(())
}

fn validate_file(path: &Path) -> ValidationEntry {
    let checked = read_document(path)
        .and_then(|document| check_document(&document).map_err(anyhow::Error::from));

    match checked {
        Ok(document_type) => ValidationEntry {
            path: path.display().to_string(),
            valid: true,
            document_type: Some(type_label(document_type)),
            reason: None,
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Validation failed");
            ValidationEntry {
                path: path.display().to_string(),
                valid: false,
                document_type: None,
                reason: Some(format!("{:#}", e)),
            }
        }
    }
}

fn type_label(document_type: DocumentType) -> String {
    match document_type {
        DocumentType::FeatureCollection => "FeatureCollection".to_string(),
        DocumentType::Feature => "Feature".to_string(),
        DocumentType::Geometry(kind) => kind.to_string(),
    }
}
