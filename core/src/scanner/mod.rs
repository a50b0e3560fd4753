// Scanner module - 扫描器模块
// 逐行分类并提取错误消息，以及按文件列表驱动扫描

pub mod manager;
pub mod searcher;

use serde::{Deserialize, Serialize};

pub use manager::{FileProcessor, FileScan, FileSource, ScanOutcome, SkippedFile};
pub use searcher::ErrorSearcher;

/// 一条提取出的错误消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    pub file_path: String,
    /// 1-based
    pub line_number: usize,
    /// The trimmed source line.
    pub full_line: String,
}
