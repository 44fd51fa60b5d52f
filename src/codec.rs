//! # 图像编解码
//!
//! 读取任意支持格式的图像并统一转换为每通道 16 位的 RGBA，输出则始终编码为 PNG，
//! 因为有损压缩会破坏嵌入在低位中的水印。

use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::raster::Raster16;

/// 打开并解码 `path` 处的图像。
///
/// # Errors
///
/// 无法打开文件或无法识别、解码图像格式时返回错误，错误信息中包含文件路径。
pub fn decode(path: &Path) -> Result<Raster16> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .with_context(|| {
            format!(
                "Unable to open image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;

    let image = reader.decode().with_context(|| {
        format!(
            "Unable to decode image file: {}. \nThe file may be corrupt or in an unsupported format.",
            path.to_string_lossy().red().bold()
        )
    })?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_rgba16())
}

/// 把 `image` 以 PNG 格式写入 `path`。
///
/// 文件只在编码前才创建；如果编码中途失败，可能留下不完整的文件。
pub fn encode_png(path: &Path, image: &Raster16) -> Result<()> {
    let file = File::create(path).with_context(|| {
        format!(
            "Unable to create output file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .and_then(|()| writer.flush().map_err(image::ImageError::IoError))
        .with_context(|| {
            format!(
                "Unable to encode output image: {}",
                path.to_string_lossy().red().bold()
            )
        })?;

    Ok(())
}
