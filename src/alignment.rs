//! # 对齐计算
//!
//! 计算把水印图像居中放置到底图中所需的整数偏移量。

use image::{ImageBuffer, Pixel};

/// 单个坐标轴上的半开区间 `[min, max)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: i64,
    pub max: i64,
}

impl Span {
    pub fn len(self) -> i64 {
        self.max - self.min
    }

    pub fn is_empty(self) -> bool {
        self.max <= self.min
    }

    pub fn contains(self, value: i64) -> bool {
        self.min <= value && value < self.max
    }
}

/// 栅格图像的边界框 `[min_x, max_x) × [min_y, max_y)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// 以原点为左上角、给定宽高的边界框。
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: i64::from(width),
            max_y: i64::from(height),
        }
    }

    /// 解码得到的图像总是从原点开始。
    pub fn of<P: Pixel>(image: &ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        Self::from_dimensions(image.width(), image.height())
    }

    pub fn x_span(self) -> Span {
        Span {
            min: self.min_x,
            max: self.max_x,
        }
    }

    pub fn y_span(self) -> Span {
        Span {
            min: self.min_y,
            max: self.max_y,
        }
    }

    pub fn contains(self, x: i64, y: i64) -> bool {
        self.x_span().contains(x) && self.y_span().contains(y)
    }
}

/// 沿单个坐标轴把 `overlay` 居中到 `base` 中的偏移量。
///
/// 使用截断整数除法；当 `overlay` 比 `base` 大时结果为负。
pub fn center_offset(base: Span, overlay: Span) -> i64 {
    (base.len() - overlay.len()) / 2
}

/// 两个坐标轴上的对齐偏移量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    pub fn centered(base: Bounds, overlay: Bounds) -> Self {
        Self {
            dx: center_offset(base.x_span(), overlay.x_span()),
            dy: center_offset(base.y_span(), overlay.y_span()),
        }
    }

    /// 将底图坐标映射为水印坐标。结果可能落在水印边界框之外。
    pub fn to_overlay(self, x: i64, y: i64) -> (i64, i64) {
        (x - self.dx, y - self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_small_overlay() {
        let base = Bounds::from_dimensions(100, 100);
        let overlay = Bounds::from_dimensions(20, 20);
        let offset = Offset::centered(base, overlay);

        assert_eq!(offset, Offset { dx: 40, dy: 40 });
        assert_eq!(offset.to_overlay(40, 40), (0, 0));
        assert_eq!(offset.to_overlay(59, 59), (19, 19));
        assert!(!overlay.contains(offset.to_overlay(60, 60).0, 0));
        assert!(!overlay.contains(offset.to_overlay(39, 39).0, 0));
    }

    #[test]
    fn truncates_odd_differences() {
        let base = Span { min: 0, max: 11 };
        let overlay = Span { min: 0, max: 4 };
        assert_eq!(center_offset(base, overlay), 3);
        // 负数同样向零截断
        assert_eq!(center_offset(overlay, base), -3);
    }

    #[test]
    fn larger_overlay_gives_negative_offset() {
        let base = Bounds::from_dimensions(10, 10);
        let overlay = Bounds::from_dimensions(30, 20);
        let offset = Offset::centered(base, overlay);

        assert_eq!(offset, Offset { dx: -10, dy: -5 });
        assert_eq!(offset.to_overlay(0, 0), (10, 5));
        assert!(overlay.contains(10, 5));
    }

    #[test]
    fn respects_non_zero_minimums() {
        let base = Span { min: 10, max: 30 };
        let overlay = Span { min: 5, max: 15 };
        assert_eq!(center_offset(base, overlay), 5);
        assert!(overlay.contains(5));
        assert!(!overlay.contains(15));
        assert!(Span { min: 3, max: 3 }.is_empty());
    }
}
