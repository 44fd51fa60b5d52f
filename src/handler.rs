//! # 命令处理逻辑模块
//!
//! 包含创建水印与提取水印两种模式的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心算法以及向用户报告结果。

use crate::codec::{decode, encode_png};
use crate::config::{Config, Mode};
use crate::error::WatermarkError;
use crate::raster::{embed_raster, extract_raster};
use crate::steganography::BitDepth;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// 根据配置的模式分派到相应的处理函数。
pub fn run(config: &Config) -> Result<()> {
    match &config.mode {
        Mode::Create { watermark } => {
            handle_create(&config.base, watermark, &config.output, config.bits, config.force)
        }
        Mode::Extract => handle_extract(&config.base, &config.output, config.bits, config.force),
    }
}

/// 除非指定了 `force`，否则拒绝覆盖已存在的输出文件。
fn check_output(output: &Path, force: bool) -> Result<(), WatermarkError> {
    if output.exists() && !force {
        return Err(WatermarkError::OutputExists(output.to_path_buf()));
    }
    Ok(())
}

/// 处理创建水印模式。
///
/// 解码底图与水印图像，把水印居中嵌入底图的低位，最后以 PNG 格式写入输出文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `force`。
/// * 无法读取或解码底图、水印图像。
/// * 无法创建或写入输出文件。
pub fn handle_create(
    base: &Path,
    watermark: &Path,
    output: &Path,
    bits: BitDepth,
    force: bool,
) -> Result<()> {
    check_output(output, force)?;

    log::info!("Base Image: {}", base.display());
    log::info!("Watermark Image: {}", watermark.display());
    log::info!("Output Image: {}", output.display());
    log::info!("Number of bits: {}", bits.get());
    log::info!("Creating watermark...");

    let base_image = decode(base)?;
    let watermark_image = decode(watermark)?;

    if watermark_image.width() > base_image.width() || watermark_image.height() > base_image.height()
    {
        log::warn!(
            "Watermark ({}x{}) is larger than the base image ({}x{}); it will be cropped.",
            watermark_image.width(),
            watermark_image.height(),
            base_image.width(),
            base_image.height()
        );
    }

    let result = embed_raster(&base_image, &watermark_image, bits);
    encode_png(output, &result)?;

    println!(
        "The watermark has been successfully embedded and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理提取水印模式。
///
/// 解码已嵌入水印的图像，把低 `bits` 位展开为完整采样，并以 PNG 格式写入输出文件。
/// `bits` 必须与创建水印时使用的值相同。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `force`。
/// * 无法读取或解码输入图像。
/// * 无法创建或写入输出文件。
pub fn handle_extract(base: &Path, output: &Path, bits: BitDepth, force: bool) -> Result<()> {
    check_output(output, force)?;

    log::info!("Base Image: {}", base.display());
    log::info!("Output Image: {}", output.display());
    log::info!("Number of bits: {}", bits.get());
    log::info!("Extracting watermark...");

    let base_image = decode(base)?;
    let result = extract_raster(&base_image, bits);
    encode_png(output, &result)?;

    println!(
        "The watermark has been successfully extracted and saved: {}",
        output.to_string_lossy().green().bold()
    );

    Ok(())
}
