//! Output path helpers

use std::path::{Path, PathBuf};

/// Default output path for a cropped image: `<stem>_cropped.png` next to the input
pub fn cropped_output_path(input: &str) -> String {
    let path = Path::new(input);
    let stem = path.file_stem().unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    parent
        .join(format!("{}_cropped.png", stem.to_string_lossy()))
        .to_string_lossy()
        .to_string()
}

/// File name used for a gallery slot inside the site's image directory
///
/// Slots are numbered so two sources with the same stem never collide.
pub fn slot_file_name(index: usize, source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    let safe: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    format!("{:02}_{}.png", index + 1, safe)
}

/// Resolve a manifest-relative path against the manifest directory
pub fn resolve_relative(base_dir: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cropped_output_path() {
        assert_eq!(cropped_output_path("img/ai_universal_train.png"), "img/ai_universal_train_cropped.png");
        assert_eq!(cropped_output_path("scan.jpeg"), "scan_cropped.png");
    }

    #[test]
    fn test_slot_file_name() {
        assert_eq!(slot_file_name(0, "ai_universal_train.png"), "01_ai_universal_train.png");
        assert_eq!(slot_file_name(2, "dir/my image.jpg"), "03_my_image.png");
    }

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/site");
        assert_eq!(resolve_relative(base, "a.png"), PathBuf::from("/site/a.png"));
        assert_eq!(resolve_relative(base, "/abs/a.png"), PathBuf::from("/abs/a.png"));
    }
}
