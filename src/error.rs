//! # 错误类型
//!
//! 库内部的校验错误。文件 I/O 与编解码错误由 `anyhow` 在处理层附加上下文。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WatermarkError {
    #[error("Bits must be between 1 and 16, got {0}.")]
    BitDepthOutOfRange(u8),

    #[error("Watermark image path is required when creating a watermark.")]
    MissingWatermark,

    #[error("Output file already exists: {}. Use --force to overwrite.", .0.display())]
    OutputExists(PathBuf),
}
