use layerkit_common::BBox;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Run-length encoded binary mask.
///
/// Canonical toggle-run form: `counts` alternates background/foreground run
/// lengths, starting with background, and sums to `width * height`. A raster
/// whose first pixel is foreground carries a leading zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rle {
    /// Alternating run lengths, background first
    pub counts: Vec<u32>,
    /// `[width, height]` of the encoded raster
    pub size: [u32; 2],
}

impl Rle {
    /// Create an RLE value from raw parts
    pub fn new(counts: Vec<u32>, width: u32, height: u32) -> Self {
        Self {
            counts,
            size: [width, height],
        }
    }

    /// The degenerate 1×1 empty mask used for malformed input
    pub fn empty() -> Self {
        Self {
            counts: vec![1],
            size: [1, 1],
        }
    }

    pub fn width(&self) -> u32 {
        self.size[0]
    }

    pub fn height(&self) -> u32 {
        self.size[1]
    }

    /// Declared pixel count (`width * height`)
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Sum of all run lengths
    pub fn run_sum(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Whether the run sum matches the declared size
    pub fn is_consistent(&self) -> bool {
        self.run_sum() == self.pixel_count()
    }

    /// Number of foreground pixels (sum of odd-indexed runs)
    pub fn area(&self) -> u64 {
        self.counts
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 1)
            .map(|(_, &c)| c as u64)
            .sum()
    }

    /// Bounding box of the foreground, or `None` for an all-background mask.
    ///
    /// Runs are laid out row-major; a run spanning multiple rows covers all
    /// columns of the rows in between.
    pub fn foreground_bbox(&self) -> Option<BBox> {
        let w = self.width() as u64;
        let h = self.height() as u64;
        if w == 0 || h == 0 {
            return None;
        }
        let n = w * h;

        let mut x0 = w;
        let mut x1 = 0u64;
        let mut y0 = h;
        let mut y1 = 0u64;
        let mut has_any = false;

        let mut cursor = 0u64;
        for (i, &count) in self.counts.iter().enumerate() {
            let count = count as u64;
            if i % 2 == 1 && count > 0 && cursor < n {
                has_any = true;
                let start = cursor;
                let end = (cursor + count - 1).min(n - 1);

                let (sy, sx) = (start / w, start % w);
                let (ey, ex) = (end / w, end % w);

                y0 = y0.min(sy);
                y1 = y1.max(ey + 1);
                if sy == ey {
                    x0 = x0.min(sx);
                    x1 = x1.max(ex + 1);
                } else {
                    // Wrapping run touches every column
                    x0 = 0;
                    x1 = w;
                }
            }
            cursor += count;
        }

        if !has_any {
            return None;
        }
        Some(BBox::new(
            x0 as f64,
            y0 as f64,
            (x1 - x0) as f64,
            (y1 - y0) as f64,
        ))
    }

    /// Parse a mask from an untrusted JSON value.
    ///
    /// Accepts both the canonical `{counts, size}` form and the legacy
    /// `{width, height, runs}` form. Anything malformed yields the degenerate
    /// 1×1 empty mask; layer creation must never fail on a bad detection.
    pub fn from_value(value: &serde_json::Value) -> Rle {
        match serde_json::from_value::<MaskEncoding>(value.clone()) {
            Ok(encoding) => encoding.into_canonical(),
            Err(_) => Rle::empty(),
        }
    }
}

/// A foreground segment of the legacy wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LegacyRun {
    /// Absolute pixel offset of the first foreground pixel
    pub start: u32,
    /// Length of the segment in pixels
    pub length: u32,
}

/// Legacy `{width, height, runs}` mask form.
///
/// Each run names an absolute foreground segment; gaps are background.
/// Normalized to the canonical alternating form on ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LegacyRle {
    pub width: u32,
    pub height: u32,
    pub runs: Vec<LegacyRun>,
}

impl LegacyRle {
    /// Convert to the canonical alternating-run form.
    ///
    /// Runs are sorted, clamped to the raster, and overlapping or adjacent
    /// segments merge into a single foreground run.
    pub fn to_canonical(&self) -> Rle {
        if self.width == 0 || self.height == 0 {
            return Rle::empty();
        }
        let n = self.width as u64 * self.height as u64;

        let mut runs = self.runs.clone();
        runs.sort_by_key(|r| r.start);

        let mut counts: Vec<u32> = Vec::new();
        let mut cursor = 0u64;
        for run in runs {
            let start = (run.start as u64).clamp(cursor, n);
            let end = (run.start as u64 + run.length as u64).min(n);
            if end <= start {
                continue;
            }
            let gap = start - cursor;
            if gap == 0 && counts.len() >= 2 {
                // Adjacent to the previous foreground run
                if let Some(last) = counts.last_mut() {
                    *last += (end - start) as u32;
                }
            } else {
                counts.push(gap as u32);
                counts.push((end - start) as u32);
            }
            cursor = end;
        }
        if cursor < n {
            counts.push((n - cursor) as u32);
        }
        if counts.is_empty() {
            counts.push(n as u32);
        }

        Rle::new(counts, self.width, self.height)
    }
}

/// Either mask wire form, distinguished by shape.
///
/// The two encodings share no field names, so untagged deserialization is
/// unambiguous; misreading one form as the other is tested explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MaskEncoding {
    Canonical(Rle),
    Legacy(LegacyRle),
}

impl MaskEncoding {
    /// Normalize to the canonical alternating-run form
    pub fn into_canonical(self) -> Rle {
        match self {
            MaskEncoding::Canonical(rle) => {
                if rle.width() == 0 || rle.height() == 0 || rle.counts.is_empty() {
                    Rle::empty()
                } else {
                    rle
                }
            }
            MaskEncoding::Legacy(legacy) => legacy.to_canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_area_counts_odd_runs() {
        let rle = Rle::new(vec![5, 2, 2, 2, 5], 4, 4);
        assert_eq!(rle.area(), 4);
        assert!(rle.is_consistent());
    }

    #[test]
    fn test_foreground_bbox_centered_block() {
        // 4x4 with a 2x2 block at (1,1)
        let rle = Rle::new(vec![5, 2, 2, 2, 5], 4, 4);
        let bbox = rle.foreground_bbox().expect("block should have a bbox");
        assert_eq!(bbox, BBox::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_foreground_bbox_empty_mask() {
        let rle = Rle::new(vec![16], 4, 4);
        assert!(rle.foreground_bbox().is_none());
    }

    #[test]
    fn test_foreground_bbox_wrapping_run() {
        // Run from (2,0) through (1,1) wraps the row boundary
        let rle = Rle::new(vec![2, 4, 10], 4, 4);
        let bbox = rle.foreground_bbox().expect("bbox");
        assert_eq!(bbox, BBox::new(0.0, 0.0, 4.0, 2.0));
    }

    #[test]
    fn test_legacy_normalization_sorts_and_merges() {
        let legacy = LegacyRle {
            width: 4,
            height: 2,
            runs: vec![
                LegacyRun { start: 5, length: 2 },
                LegacyRun { start: 1, length: 2 },
                LegacyRun { start: 3, length: 2 }, // overlaps + abuts the first
            ],
        };
        let rle = legacy.to_canonical();
        assert_eq!(rle.counts, vec![1, 6, 1]);
        assert!(rle.is_consistent());
    }

    #[test]
    fn test_legacy_run_clamped_to_raster() {
        let legacy = LegacyRle {
            width: 3,
            height: 1,
            runs: vec![LegacyRun { start: 2, length: 10 }],
        };
        let rle = legacy.to_canonical();
        assert_eq!(rle.counts, vec![2, 1]);
        assert!(rle.is_consistent());
    }

    #[test]
    fn test_from_value_accepts_both_wire_forms() {
        let canonical = Rle::from_value(&json!({"counts": [1, 2, 1], "size": [4, 1]}));
        assert_eq!(canonical.counts, vec![1, 2, 1]);

        let legacy = Rle::from_value(&json!({
            "width": 4,
            "height": 1,
            "runs": [{"start": 1, "length": 2}]
        }));
        assert_eq!(legacy.counts, vec![1, 2, 1]);
        assert_eq!(legacy.size, [4, 1]);

        // Same pixels, two encodings
        assert_eq!(canonical, legacy);
    }

    #[test]
    fn test_from_value_malformed_degrades() {
        for bad in [
            json!({}),
            json!({"counts": [1, 2, 1]}),
            json!({"width": 4, "height": 1}),
            json!({"size": [4, 1]}),
            json!(null),
            json!("counts"),
        ] {
            let rle = Rle::from_value(&bad);
            assert_eq!(rle, Rle::empty(), "input {bad} should degrade");
        }
    }

    #[test]
    fn test_from_value_zero_dimension_degrades() {
        let rle = Rle::from_value(&json!({"counts": [0], "size": [0, 4]}));
        assert_eq!(rle, Rle::empty());

        let rle = Rle::from_value(&json!({"width": 0, "height": 4, "runs": []}));
        assert_eq!(rle, Rle::empty());
    }
}
