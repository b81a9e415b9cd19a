use serde::{Deserialize, Serialize};

/// Options controlling which shapes the extractor reports.
///
/// - `detect_triangles`: also look inside every recognised rectangle for one
///   embedded triangle of a different color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub detect_triangles: bool,
}

impl ExtractOptions {
    pub fn rectangles_only() -> Self {
        Self {
            detect_triangles: false,
        }
    }

    pub fn with_triangles() -> Self {
        Self {
            detect_triangles: true,
        }
    }
}
