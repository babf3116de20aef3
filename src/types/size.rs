//! Required icon sizes and output naming.

use std::path::{Path, PathBuf};

/// Edge length the procedural icon is drawn at.
pub const BASE_SIZE: u32 = 1024;

/// Edge lengths required for a complete iOS app icon set, largest first.
pub const REQUIRED_SIZES: [u32; 13] = [1024, 180, 167, 152, 120, 87, 80, 76, 60, 58, 40, 29, 20];

/// File name for an icon of the given edge length, e.g. `icon_180.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon_{}.png", size)
}

/// Full output path for an icon of the given edge length.
pub fn icon_path(output: &Path, size: u32) -> PathBuf {
    output.join(icon_file_name(size))
}

/// Remove duplicate sizes, keeping the first occurrence of each.
pub fn dedup_sizes(sizes: &[u32]) -> Vec<u32> {
    let mut seen = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if !seen.contains(&size) {
            seen.push(size);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_sizes_start_with_base() {
        assert_eq!(REQUIRED_SIZES[0], BASE_SIZE);
        assert_eq!(REQUIRED_SIZES.len(), 13);
    }

    #[test]
    fn test_icon_file_name() {
        assert_eq!(icon_file_name(1024), "icon_1024.png");
        assert_eq!(icon_file_name(29), "icon_29.png");
    }

    #[test]
    fn test_icon_path() {
        let path = icon_path(Path::new("out"), 60);
        assert_eq!(path, Path::new("out").join("icon_60.png"));
    }

    #[test]
    fn test_dedup_sizes_keeps_order() {
        assert_eq!(dedup_sizes(&[80, 40, 80, 20, 40]), vec![80, 40, 20]);
    }
}
