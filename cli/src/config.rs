use clap::Parser;
use errscan_core::{FileSource, ReportFormat};
use std::path::PathBuf;

pub const CODE_LIST_FILE: &str = "full_code_list.txt";
pub const REPORT_STEM: &str = "full_error_list";

#[derive(Parser, Debug)]
#[command(name = "errscan", version)]
#[command(about = "Extract error and warning messages from Go source files", long_about = None)]
pub struct Cli {
    /// Codebase name (e.g. troopers)
    #[arg(short, long, env = "ERRSCAN_CODEBASE")]
    pub codebase: Option<String>,

    /// Feature label shown in the report
    #[arg(short, long, env = "ERRSCAN_FEATURE")]
    pub feature: Option<String>,

    /// File list to scan [default: <output-root>/<codebase>/full_code_list.txt]
    #[arg(long, env = "ERRSCAN_CODE_LIST")]
    pub code_list: Option<PathBuf>,

    /// Report path [default: <output-root>/<codebase>/full_error_list.md]
    #[arg(short, long, env = "ERRSCAN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Directory the listed files are relative to
    #[arg(long, env = "ERRSCAN_BASE_DIR", default_value = ".codebase/")]
    pub base_dir: PathBuf,

    /// Root of the default file list and report paths
    #[arg(long, env = "ERRSCAN_OUTPUT_ROOT", default_value = "output")]
    pub output_root: PathBuf,

    /// Directory of extra YAML rules
    #[arg(long, env = "ERRSCAN_RULES_DIR")]
    pub rules_dir: Option<PathBuf>,

    #[arg(long, value_enum, env = "ERRSCAN_FORMAT", default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// Include the matched source line in the report
    #[arg(long)]
    pub full_line: bool,

    /// Scan every .go file under <base-dir>/<codebase> instead of a file list
    #[arg(long)]
    pub walk: bool,

    /// Worker threads
    #[arg(short, long, env = "ERRSCAN_JOBS")]
    pub jobs: Option<usize>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(value_name = "CODEBASE")]
    pub codebase_arg: Option<String>,

    #[arg(value_name = "FEATURE")]
    pub feature_arg: Option<String>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub codebase: String,
    pub feature: Option<String>,
    pub code_list: PathBuf,
    pub output: PathBuf,
    pub base_dir: PathBuf,
    pub rules_dir: Option<PathBuf>,
    pub format: ReportFormat,
    pub full_line: bool,
    pub walk: bool,
    pub jobs: Option<usize>,
}

impl Config {
    /// `None` when no codebase was given in either form.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        // 标志优先，位置参数兼容 `errscan <codebase> <feature>` 的调用方式
        let codebase = non_empty(cli.codebase).or_else(|| non_empty(cli.codebase_arg))?;
        let feature = non_empty(cli.feature).or_else(|| non_empty(cli.feature_arg));
        let format = cli.format;

        let default_dir = cli.output_root.join(&codebase);
        let code_list = cli
            .code_list
            .unwrap_or_else(|| default_dir.join(CODE_LIST_FILE));
        let output = cli.output.unwrap_or_else(|| {
            default_dir.join(format!("{REPORT_STEM}.{}", format.extension()))
        });

        Some(Self {
            codebase,
            feature,
            code_list,
            output,
            base_dir: cli.base_dir,
            rules_dir: cli.rules_dir,
            format,
            full_line: cli.full_line,
            walk: cli.walk,
            jobs: cli.jobs,
        })
    }

    pub fn source(&self) -> FileSource {
        if self.walk {
            FileSource::Walk(self.base_dir.join(&self.codebase))
        } else {
            FileSource::List(self.code_list.clone())
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn usage() -> &'static str {
    "Usage: errscan --codebase <codebase_name> [--feature <feature_name>]\n\
     Or:    errscan <codebase_name> <feature_name>\n\
     Example: errscan troopers \"create cluster\""
}
