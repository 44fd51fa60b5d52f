/// 每个通道采样的位数。
/// 所有输入图像解码后都统一提升为 16 位通道。
pub const SAMPLE_BITS: u8 = 16;

/// 默认用于承载水印信息的位数。
pub const DEFAULT_BITS: u8 = 8;

/// `bits` 参数允许的最小值。
pub const MIN_BITS: u8 = 1;

/// `bits` 参数允许的最大值。
/// 等于 [`SAMPLE_BITS`] 时水印将完全替换底图的颜色通道。
pub const MAX_BITS: u8 = SAMPLE_BITS;
