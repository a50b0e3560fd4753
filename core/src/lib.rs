// errscan core library
// 核心功能库：规则目录、逐行错误消息提取、文件列表扫描与报告生成

mod report;
mod rules;
mod scanner;

// 重新导出常用类型
pub use report::{ReportEntry, ReportFormat, ScanReport};
pub use scanner::{
    ErrorRecord, ErrorSearcher, FileProcessor, FileScan, FileSource, ScanOutcome, SkippedFile,
};
pub use scanner::manager::DEFAULT_EXTENSIONS;

// 规则系统
pub use rules::builtin::{builtin_rules, BUILTIN_RULES, MESSAGE_PATTERN};
pub use rules::loader::load_rules_from_dir;
pub use rules::{CompiledRule, PatternCatalog, Rule, RuleCategory, RuleSet, SkippedRule};

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CoreError {
        #[error("IO error on {}: {source}", path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },

        #[error("Cannot read file list {}: {source}", path.display())]
        FileList {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },

        #[error("Rule error: {0}")]
        Rules(String),

        #[error("Scanner error: {0}")]
        Scanner(String),

        #[error("Report error: {0}")]
        Report(#[from] serde_json::Error),
    }

    pub type Result<T> = std::result::Result<T, CoreError>;
}
