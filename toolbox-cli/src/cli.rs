use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "toolbox", about = "Export and import tool definitions")]
pub struct Cli {
    /// Settings file, defaults to ./toolbox.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `toolbox=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Write single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    pub compact: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Write a tool export record")]
    Export(ExportArgs),
    #[command(about = "Read a tool export record and print it")]
    Import { file: PathBuf },
    #[command(about = "Print a summary of a tool export record")]
    Inspect { file: PathBuf },
    #[command(about = "Check that files decode as tool export records")]
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub end_point: Option<String>,
    #[arg(long)]
    pub method: Option<String>,
    #[arg(long, conflicts_with = "web_schema_file")]
    pub web_schema: Option<String>,
    /// Read the web schema text from a file
    #[arg(long)]
    pub web_schema_file: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    pub auth_type: Option<i32>,
    #[arg(long)]
    pub auth_info: Option<String>,
    #[arg(long)]
    pub avatar_color: Option<String>,
    /// Output file; stdout when neither this nor --out-dir is set
    #[arg(long, conflicts_with = "out_dir")]
    pub out: Option<PathBuf>,
    /// Directory to write `<name>.json` into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "toolbox",
            "--compact",
            "export",
            "--name",
            "Weather Tool",
            "--method",
            "GET",
            "--auth-type",
            "1",
            "--end-point",
            "/weather",
        ])
        .unwrap();

        assert!(cli.compact);
        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.name, "Weather Tool");
                assert_eq!(args.method.as_deref(), Some("GET"));
                assert_eq!(args.auth_type, Some(1));
                assert_eq!(args.end_point.as_deref(), Some("/weather"));
                assert!(args.out.is_none());
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_export_requires_name() {
        assert!(Cli::try_parse_from(["toolbox", "export", "--method", "GET"]).is_err());
    }

    #[test]
    fn test_web_schema_sources_conflict() {
        let result = Cli::try_parse_from([
            "toolbox",
            "export",
            "--name",
            "x",
            "--web-schema",
            "{}",
            "--web-schema-file",
            "schema.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["toolbox", "check"]).is_err());

        let cli = Cli::try_parse_from(["toolbox", "check", "a.json", "b.json"]).unwrap();
        match cli.command {
            Command::Check { files } => assert_eq!(files.len(), 2),
            _ => panic!("Wrong command"),
        }
    }
}
