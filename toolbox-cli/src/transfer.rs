use crate::error::{ToolboxError, ToolboxResult};
use shared::models::ToolExportRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const FALLBACK_STEM: &str = "tool";
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Render a record the way every command writes it
pub fn encode(record: &ToolExportRecord, pretty: bool) -> ToolboxResult<String> {
    let json = if pretty {
        record.to_json_pretty()?
    } else {
        record.to_json()?
    };
    Ok(json)
}

pub async fn export_to_file(
    record: &ToolExportRecord,
    path: &Path,
    pretty: bool,
) -> ToolboxResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating directory {}", parent.display());
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ToolboxError::io(parent, e))?;
    }

    tokio::fs::write(path, encode_line(record, pretty)?)
        .await
        .map_err(|e| ToolboxError::io(path, e))?;

    info!("Exported {} to {}", display_name(record), path.display());
    Ok(())
}

/// Write into `dir` under the record's default file name. An existing file is
/// never replaced: `<slug>-2.json`, `<slug>-3.json`, ... are tried instead.
pub async fn export_to_dir(
    record: &ToolExportRecord,
    dir: &Path,
    pretty: bool,
) -> ToolboxResult<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ToolboxError::io(dir, e))?;

    let json = encode_line(record, pretty)?;
    let stem = file_stem(record);
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let path = if attempt == 1 {
            dir.join(format!("{stem}.json"))
        } else {
            dir.join(format!("{stem}-{attempt}.json"))
        };

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} already exists", path.display());
                continue;
            }
            Err(e) => return Err(ToolboxError::io(&path, e)),
        };
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| ToolboxError::io(&path, e))?;
        file.flush().await.map_err(|e| ToolboxError::io(&path, e))?;

        info!("Exported {} to {}", display_name(record), path.display());
        return Ok(path);
    }

    Err(ToolboxError::Exists {
        path: dir.join(default_file_name(record)),
    })
}

fn encode_line(record: &ToolExportRecord, pretty: bool) -> ToolboxResult<String> {
    let mut json = encode(record, pretty)?;
    json.push('\n');
    Ok(json)
}

pub async fn import_from_file(path: &Path) -> ToolboxResult<ToolExportRecord> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| ToolboxError::io(path, e))?;

    let record =
        ToolExportRecord::from_json_slice(&data).map_err(|source| ToolboxError::Decoding {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Imported {} from {}", display_name(&record), path.display());
    Ok(record)
}

/// `<slug>.json` for the record's name, `tool.json` when there is no usable name
pub fn default_file_name(record: &ToolExportRecord) -> String {
    format!("{}.json", file_stem(record))
}

fn file_stem(record: &ToolExportRecord) -> String {
    let slug = record.name.as_deref().map(slugify).unwrap_or_default();
    if slug.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        slug
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub(crate) fn display_name(record: &ToolExportRecord) -> &str {
    record.name.as_deref().unwrap_or("<unnamed tool>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(&ToolExportRecord::new("Weather Tool")),
            "weather-tool.json"
        );
        assert_eq!(
            default_file_name(&ToolExportRecord::new("  OCR / LLM (v2)!  ")),
            "ocr-llm-v2.json"
        );
        assert_eq!(default_file_name(&ToolExportRecord::new("翻译")), "翻译.json");
        assert_eq!(
            default_file_name(&ToolExportRecord::new("图片理解 (OCR)")),
            "图片理解-ocr.json"
        );
        assert_eq!(default_file_name(&ToolExportRecord::new("Ärger")), "ärger.json");
        assert_eq!(default_file_name(&ToolExportRecord::new(" / ")), "tool.json");
        assert_eq!(default_file_name(&ToolExportRecord::default()), "tool.json");
    }

    #[test]
    fn test_encode_compact_and_pretty() {
        let record = ToolExportRecord::new("x").with_auth_type(1);
        assert_eq!(encode(&record, false).unwrap(), r#"{"name":"x","authType":1}"#);
        assert!(encode(&record, true).unwrap().contains("\n  \"authType\": 1"));
    }

    #[tokio::test]
    async fn test_export_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("weather.json");
        let record = ToolExportRecord::new("Weather Tool")
            .with_method("GET")
            .with_web_schema(r#"{"toolRequestInput":[]}"#)
            .with_avatar_color("");

        export_to_file(&record, &path, true).await.unwrap();
        let imported = import_from_file(&path).await.unwrap();
        assert_eq!(imported, record);
    }

    #[tokio::test]
    async fn test_export_to_dir_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = ToolExportRecord::new("Weather Tool").with_method("GET");
        let second = ToolExportRecord::new("weather tool").with_method("POST");
        let unnamed = ToolExportRecord::default().with_icon("a.png");

        let first_path = export_to_dir(&first, dir.path(), false).await.unwrap();
        let second_path = export_to_dir(&second, dir.path(), false).await.unwrap();
        let unnamed_path = export_to_dir(&unnamed, dir.path(), false).await.unwrap();

        assert_eq!(first_path, dir.path().join("weather-tool.json"));
        assert_eq!(second_path, dir.path().join("weather-tool-2.json"));
        assert_eq!(unnamed_path, dir.path().join("tool.json"));
        assert_eq!(import_from_file(&first_path).await.unwrap(), first);
        assert_eq!(import_from_file(&second_path).await.unwrap(), second);
        assert_eq!(import_from_file(&unnamed_path).await.unwrap(), unnamed);
    }

    #[tokio::test]
    async fn test_import_reports_path_on_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, r#"{"name": "half"#).await.unwrap();

        match import_from_file(&path).await {
            Err(ToolboxError::Decoding { path: failed, source }) => {
                assert_eq!(failed, path);
                assert!(source.is_truncated());
            }
            other => panic!("Expected decoding error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_from_file(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolboxError::Io { .. }));
    }
}
