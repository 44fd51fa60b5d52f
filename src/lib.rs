//! # lsb_watermark 库
//!
//! 本库包含图像水印工具的核心逻辑：对齐计算、位合成与位拆分，以及编解码与命令处理。

// 声明库包含的所有模块。

pub mod alignment;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod raster;
pub mod steganography;
