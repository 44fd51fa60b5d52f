//! # 运行配置
//!
//! 把命令行参数校验并转换为一次运行所需的不可变配置。
//! 所有校验都在打开任何文件之前完成。

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::WatermarkError;
use crate::steganography::BitDepth;

/// 运行模式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// 把 `watermark` 嵌入底图。
    Create { watermark: PathBuf },
    /// 从底图中提取水印。
    Extract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub base: PathBuf,
    pub output: PathBuf,
    pub bits: BitDepth,
    pub force: bool,
}

impl TryFrom<Cli> for Config {
    type Error = WatermarkError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let bits = BitDepth::new(cli.bits)?;

        let mode = if cli.extract {
            Mode::Extract
        } else {
            let watermark = cli.watermark.ok_or(WatermarkError::MissingWatermark)?;
            Mode::Create { watermark }
        };

        Ok(Self {
            mode,
            base: cli.base,
            output: cli.output,
            bits,
            force: cli.force,
        })
    }
}
