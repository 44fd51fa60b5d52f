//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行参数。
//! 默认为创建水印模式，传入 `--extract` 时切换为提取模式。

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BITS, MAX_BITS, MIN_BITS};

/// 一款基于最低有效位的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取图像水印。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于最低有效位的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取图像水印。\n输出始终以 PNG 格式保存。"
)]
pub struct Cli {
    /// 底图文件路径。提取模式下为已嵌入水印的图像。
    #[arg(short, long)]
    pub base: PathBuf,

    /// 要嵌入的水印图像文件路径 (创建模式必填)。
    #[arg(short, long, required_unless_present = "extract")]
    pub watermark: Option<PathBuf>,

    /// 结果图像的输出路径 (PNG)。
    #[arg(short, long)]
    pub output: PathBuf,

    /// 每个颜色通道中用于承载水印的位数，提取时必须与创建时一致。
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_BITS,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_BITS)..=i64::from(MAX_BITS))
    )]
    pub bits: u8,

    /// 从底图中提取水印，而不是创建水印。
    #[arg(short, long)]
    pub extract: bool,

    /// 如果输出文件已存在，强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 输出调试日志。
    #[arg(short, long)]
    pub verbose: bool,
}
