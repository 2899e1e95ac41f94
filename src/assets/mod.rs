use std::path::{Path, PathBuf};

const PHOTO_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// File stem used for an item's photo: whitespace and hyphen runs become `_`
pub fn sanitized_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.chars() {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                out.push('_');
            }
            in_separator = true;
        } else {
            out.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    out
}

/// First existing photo for the item, trying each known extension in turn
pub fn resolve_photo(photos_dir: &Path, name: &str) -> Option<PathBuf> {
    let stem = sanitized_name(name);

    PHOTO_EXTENSIONS
        .iter()
        .map(|ext| photos_dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
}
