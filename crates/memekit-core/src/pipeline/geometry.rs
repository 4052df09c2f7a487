//! Crop rectangle computation.

/// Rectangle of source pixels kept by the crop, anchored at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropGeometry {
    /// Keep the full width and drop the bottom `trim_percent` of the height.
    ///
    /// The kept height is `floor(height * (100 - trim_percent) / 100)`,
    /// computed in integers. Returns `None` when the rectangle would be empty
    /// (zero width, or an image only 0 or 1 pixels tall) or when nothing
    /// would be trimmed (`trim_percent` of 0).
    pub fn trim_bottom(width: u32, height: u32, trim_percent: u32) -> Option<Self> {
        if trim_percent == 0 {
            return None;
        }
        let keep_percent = u64::from(100u32.saturating_sub(trim_percent.min(100)));
        let kept = (u64::from(height) * keep_percent / 100) as u32;

        if width == 0 || kept == 0 {
            return None;
        }

        Some(Self {
            x: 0,
            y: 0,
            width,
            height: kept,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_bottom_five_percent() {
        let geometry = CropGeometry::trim_bottom(100, 100, 5).unwrap();
        assert_eq!(
            geometry,
            CropGeometry {
                x: 0,
                y: 0,
                width: 100,
                height: 95
            }
        );
    }

    #[test]
    fn test_trim_bottom_rounds_down() {
        // 1080 * 0.95 = 1026, 333 * 0.95 = 316.35, 2 * 0.95 = 1.9
        assert_eq!(CropGeometry::trim_bottom(1920, 1080, 5).unwrap().height, 1026);
        assert_eq!(CropGeometry::trim_bottom(10, 333, 5).unwrap().height, 316);
        assert_eq!(CropGeometry::trim_bottom(10, 2, 5).unwrap().height, 1);
    }

    #[test]
    fn test_trim_bottom_always_loses_rows() {
        for height in 2..=2000u32 {
            let geometry = CropGeometry::trim_bottom(7, height, 5).unwrap();
            assert!(geometry.height < height, "height {height}");
            assert_eq!(geometry.height, height * 95 / 100);
            assert_eq!(geometry.width, 7);
        }
    }

    #[test]
    fn test_trim_bottom_degenerate() {
        assert!(CropGeometry::trim_bottom(10, 1, 5).is_none());
        assert!(CropGeometry::trim_bottom(10, 0, 5).is_none());
        assert!(CropGeometry::trim_bottom(0, 100, 5).is_none());
    }

    #[test]
    fn test_trim_bottom_requires_a_trim() {
        assert!(CropGeometry::trim_bottom(100, 100, 0).is_none());
        assert!(CropGeometry::trim_bottom(100, 100, 100).is_none());
        assert!(CropGeometry::trim_bottom(100, 100, 250).is_none());
        assert_eq!(CropGeometry::trim_bottom(100, 100, 1).unwrap().height, 99);
    }

    #[test]
    fn test_trim_bottom_large_dimensions_do_not_overflow() {
        let geometry = CropGeometry::trim_bottom(1, u32::MAX, 5).unwrap();
        assert_eq!(u64::from(geometry.height), u64::from(u32::MAX) * 95 / 100);
    }
}
