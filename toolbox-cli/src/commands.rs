use crate::cli::ExportArgs;
use crate::config::Settings;
use crate::error::{ToolboxError, ToolboxResult};
use crate::transfer::{display_name, encode, export_to_dir, export_to_file, import_from_file};
use shared::models::ToolExportRecord;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub async fn export(args: ExportArgs, settings: &Settings) -> ToolboxResult<()> {
    let record = build_record(&args).await?;

    match destination(&args, settings) {
        Destination::File(path) => export_to_file(&record, &path, settings.pretty).await,
        Destination::Dir(dir) => {
            let path = export_to_dir(&record, &dir, settings.pretty).await?;
            println!("{}", path.display());
            Ok(())
        }
        Destination::Stdout => {
            println!("{}", encode(&record, settings.pretty)?);
            Ok(())
        }
    }
}

pub async fn import(file: &Path, settings: &Settings) -> ToolboxResult<()> {
    let record = import_from_file(file).await?;
    println!("{}", encode(&record, settings.pretty)?);
    Ok(())
}

pub async fn inspect(file: &Path) -> ToolboxResult<()> {
    let record = import_from_file(file).await?;
    print!("{}", summarize(&record));
    Ok(())
}

pub async fn check(files: &[PathBuf]) -> ToolboxResult<()> {
    let mut failed = 0;
    for file in files {
        match import_from_file(file).await {
            Ok(_) => println!("ok      {}", file.display()),
            Err(ToolboxError::Decoding { path, source }) => {
                failed += 1;
                error!(
                    "{}:{}:{}: {}",
                    path.display(),
                    source.line(),
                    source.column(),
                    source
                );
                println!("invalid {}", path.display());
            }
            Err(e) => {
                failed += 1;
                error!("{}", e);
                println!("error   {}", file.display());
            }
        }
    }

    info!("Checked {} files, {} failed", files.len(), failed);
    if failed > 0 {
        return Err(ToolboxError::CheckFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

async fn build_record(args: &ExportArgs) -> ToolboxResult<ToolExportRecord> {
    let web_schema = match &args.web_schema_file {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ToolboxError::io(path, e))?,
        ),
        None => args.web_schema.clone(),
    };

    Ok(ToolExportRecord {
        name: Some(args.name.clone()),
        description: args.description.clone(),
        icon: args.icon.clone(),
        address: args.address.clone(),
        end_point: args.end_point.clone(),
        method: args.method.clone(),
        web_schema,
        auth_type: args.auth_type,
        auth_info: args.auth_info.clone(),
        avatar_color: args.avatar_color.clone(),
    })
}

#[derive(Debug, PartialEq)]
enum Destination {
    /// Explicit `--out`, replaced if it exists
    File(PathBuf),
    /// Directory that receives `<slug>.json`, never replacing a file
    Dir(PathBuf),
    Stdout,
}

/// `--out` wins, then `--out-dir`, then the configured directory
fn destination(args: &ExportArgs, settings: &Settings) -> Destination {
    if let Some(out) = &args.out {
        return Destination::File(out.clone());
    }
    match args.out_dir.as_ref().or(settings.out_dir.as_ref()) {
        Some(dir) => Destination::Dir(dir.clone()),
        None => Destination::Stdout,
    }
}

/// Human readable listing of the present fields. The auth payload is never
/// echoed, only its size.
fn summarize(record: &ToolExportRecord) -> String {
    let mut out = format!("Tool: {}\n", display_name(record));

    let text_fields = [
        ("description", &record.description),
        ("icon", &record.icon),
        ("address", &record.address),
        ("endPoint", &record.end_point),
        ("method", &record.method),
        ("avatarColor", &record.avatar_color),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            out.push_str(&format!("  {field:<12} {value}\n"));
        }
    }
    if let Some(auth_type) = record.auth_type {
        out.push_str(&format!("  {:<12} {}\n", "authType", auth_type));
    }
    if let Some(auth_info) = &record.auth_info {
        out.push_str(&format!("  {:<12} <{} bytes>\n", "authInfo", auth_info.len()));
    }
    if let Some(web_schema) = &record.web_schema {
        out.push_str(&format!("  {:<12} <{} bytes>\n", "webSchema", web_schema.len()));
    }

    let present = record.present_fields();
    out.push_str(&format!(
        "{} of {} fields present: {}\n",
        present.len(),
        ToolExportRecord::FIELD_NAMES.len(),
        present.join(", ")
    ));
    out
}
