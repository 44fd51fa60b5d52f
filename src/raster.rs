//! # 栅格组装
//!
//! 遍历底图的每个像素，调用合成或提取算法，并写入同尺寸的输出图像。
//! 像素之间没有数据依赖，输出按行切分后交给 `rayon` 并行处理，每个线程独占自己的行。

use image::{ImageBuffer, Rgba};
use rayon::prelude::*;

use crate::alignment::{Bounds, Offset};
use crate::steganography::{BitDepth, embed_pixel, extract_pixel};

/// 每通道 16 位的 RGBA 图像。
pub type Raster16 = ImageBuffer<Rgba<u16>, Vec<u16>>;

const CHANNELS: usize = 4;

/// 对输出图像的每一行并行执行 `f(x, y) -> 像素`。
fn map_rows<F>(width: u32, height: u32, f: F) -> Raster16
where
    F: Fn(u32, u32) -> Rgba<u16> + Sync,
{
    let mut output = Raster16::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let row_len = width as usize * CHANNELS;
    output
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
                out.copy_from_slice(&f(x as u32, y as u32).0);
            }
        });

    output
}

/// 把 `overlay` 居中嵌入 `base`。
///
/// 落在水印边界框之外的底图像素原样复制。输出尺寸始终与 `base` 相同。
pub fn embed_raster(base: &Raster16, overlay: &Raster16, bits: BitDepth) -> Raster16 {
    let overlay_bounds = Bounds::of(overlay);
    let offset = Offset::centered(Bounds::of(base), overlay_bounds);
    log::debug!("Watermark offset: ({}, {})", offset.dx, offset.dy);

    map_rows(base.width(), base.height(), |x, y| {
        let base_pixel = *base.get_pixel(x, y);
        let (wx, wy) = offset.to_overlay(i64::from(x), i64::from(y));

        if !overlay_bounds.contains(wx, wy) {
            return base_pixel;
        }

        // 边界检查保证坐标非负且小于水印尺寸
        let overlay_pixel = *overlay.get_pixel(wx as u32, wy as u32);
        embed_pixel(base_pixel, overlay_pixel, bits)
    })
}

/// 从已嵌入水印的图像中提取水印。
pub fn extract_raster(base: &Raster16, bits: BitDepth) -> Raster16 {
    map_rows(base.width(), base.height(), |x, y| {
        extract_pixel(*base.get_pixel(x, y), bits)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, pixel: [u16; 4]) -> Raster16 {
        Raster16::from_pixel(width, height, Rgba(pixel))
    }

    fn gradient(width: u32, height: u32) -> Raster16 {
        Raster16::from_fn(width, height, |x, y| {
            let v = (x * 997 + y * 131) as u16;
            Rgba([v, v.wrapping_mul(3), v.wrapping_add(0x5A5A), 0x8000 | v])
        })
    }

    fn depth(bits: u8) -> BitDepth {
        BitDepth::new(bits).unwrap()
    }

    #[test]
    fn embeds_only_inside_centered_overlay() {
        let base = gradient(10, 8);
        let overlay = solid(4, 2, [0xFFFF, 0xFFFF, 0xFFFF, 0]);
        let output = embed_raster(&base, &overlay, depth(8));

        assert_eq!(output.dimensions(), base.dimensions());
        for (x, y, pixel) in output.enumerate_pixels() {
            let source = base.get_pixel(x, y);
            let inside = (3..7).contains(&x) && (3..5).contains(&y);
            if inside {
                assert_eq!(*pixel, embed_pixel(*source, *overlay.get_pixel(x - 3, y - 3), depth(8)));
            } else {
                assert_eq!(pixel, source);
            }
            assert_eq!(pixel[3], source[3]);
        }
    }

    #[test]
    fn extraction_depends_only_on_watermark() {
        let watermark = gradient(6, 5);
        let first = embed_raster(&solid(6, 5, [0, 0, 0, 0xFFFF]), &watermark, depth(8));
        let second = embed_raster(&gradient(6, 5), &watermark, depth(8));

        let recovered_a = extract_raster(&first, depth(8));
        let recovered_b = extract_raster(&second, depth(8));
        for ((a, b), w) in recovered_a.pixels().zip(recovered_b.pixels()).zip(watermark.pixels()) {
            for c in 0..3 {
                assert_eq!(a[c], w[c] & 0xFF00);
                assert_eq!(b[c], w[c] & 0xFF00);
            }
        }
    }

    #[test]
    fn larger_overlay_is_cropped_to_base() {
        let base = gradient(4, 4);
        let overlay = gradient(9, 7);
        let output = embed_raster(&base, &overlay, depth(16));

        assert_eq!(output.dimensions(), (4, 4));
        // 偏移为 (-2, -1)，16 位时输出即水印对应区域
        assert_eq!(output.get_pixel(0, 0)[0], overlay.get_pixel(2, 1)[0]);
        assert_eq!(output.get_pixel(3, 3)[2], overlay.get_pixel(5, 4)[2]);
        assert_eq!(output.get_pixel(3, 3)[3], base.get_pixel(3, 3)[3]);
    }

    #[test]
    fn empty_rasters_stay_empty() {
        let empty = Raster16::new(0, 3);
        assert_eq!(embed_raster(&empty, &gradient(2, 2), depth(8)).dimensions(), (0, 3));
        assert_eq!(extract_raster(&empty, depth(8)).dimensions(), (0, 3));
    }
}
