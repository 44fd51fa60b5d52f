//! # 位合成与位拆分
//!
//! 水印的核心算法：把水印采样的高位写入底图采样的低位，以及把低位重新展开为完整的 16 位采样。
//!
//! 约定：合成后，结果的高 `16 - bits` 位保留底图的高位，低 `bits` 位存放水印采样的高 `bits` 位。
//! 提取时取出低 `bits` 位并左移回最高位，因此提取是合成的精确逆运算，且与底图无关。

use image::Rgba;

use crate::constants::{DEFAULT_BITS, MAX_BITS, MIN_BITS, SAMPLE_BITS};
use crate::error::WatermarkError;

/// 每个颜色通道中用于承载水印的位数，取值范围为 `[1, 16]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    pub fn new(bits: u8) -> Result<Self, WatermarkError> {
        if (MIN_BITS..=MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(WatermarkError::BitDepthOutOfRange(bits))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 保留底图信息的位数，即 `16 - bits`。
    fn offset(self) -> u32 {
        u32::from(SAMPLE_BITS - self.0)
    }

    /// 低 `bits` 位全为 1 的掩码。
    fn low_mask(self) -> u16 {
        u16::MAX >> self.offset()
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self(DEFAULT_BITS)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = WatermarkError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

/// 将水印采样 `overlay` 的高 `bits` 位合成进底图采样 `base` 的低位。
///
/// 先用 OR 把底图的低 `bits` 位置 1，再与「低位为水印高位、高位全 1」的值做 AND。
/// 当 `bits` 为 16 时结果就是 `overlay` 本身。
pub fn combine(base: u16, overlay: u16, bits: BitDepth) -> u16 {
    let offset = bits.offset();
    // `u16::MAX << 16` 按 0 处理
    let keep_high = u16::MAX.checked_shl(u32::from(bits.get())).unwrap_or(0);

    (base | bits.low_mask()) & ((overlay >> offset) | keep_high)
}

/// 取出 `sample` 中承载水印的低 `bits` 位，并左移回最高位。
pub fn extract(sample: u16, bits: BitDepth) -> u16 {
    (sample & bits.low_mask()) << bits.offset()
}

/// 合成单个像素的 R、G、B 通道；alpha 始终沿用底图。
pub fn embed_pixel(base: Rgba<u16>, overlay: Rgba<u16>, bits: BitDepth) -> Rgba<u16> {
    let [r1, g1, b1, a1] = base.0;
    let [r2, g2, b2, _] = overlay.0;

    Rgba([
        combine(r1, r2, bits),
        combine(g1, g2, bits),
        combine(b1, b2, bits),
        a1,
    ])
}

/// 从单个像素的 R、G、B 通道中提取水印；alpha 原样保留。
pub fn extract_pixel(base: Rgba<u16>, bits: BitDepth) -> Rgba<u16> {
    let [r, g, b, a] = base.0;

    Rgba([extract(r, bits), extract(g, bits), extract(b, bits), a])
}
