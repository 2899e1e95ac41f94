use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Owl species ranked when no item file is given
pub fn default_owls() -> Vec<String> {
    [
        "Barn Owl",
        "Flammulated Owl",
        "Western Screech Owl",
        "Whiskered Screech Owl",
        "Eastern Screech Owl",
        "Snowy Owl",
        "Great Horned Owl",
        "Spotted Owl",
        "Barred Owl",
        "Great Gray Owl",
        "Northern Hawk Owl",
        "Ferruginous Pygmy Owl",
        "Northern Pygmy Owl",
        "Elf Owl",
        "Burrowing Owl",
        "Boreal Owl",
        "Northern Saw-whet Owl",
        "Long-eared Owl",
        "Short-eared Owl",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

/// Loads item names from a file holding either a JSON array of strings or
/// one name per line
pub fn load_items(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;
    let items = parse_items(&content)
        .with_context(|| format!("Failed to parse items file {}", path.display()))?;

    if items.len() < 2 {
        bail!("Need at least 2 items to rank, got {}", items.len());
    }
    Ok(items)
}

pub fn parse_items(content: &str) -> Result<Vec<String>> {
    let trimmed = content.trim();

    if trimmed.starts_with('[') {
        let items: Vec<String> = serde_json::from_str(trimmed).context("Invalid JSON item list")?;
        return Ok(items);
    }

    Ok(trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn resolve_items(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_items(path),
        None => Ok(default_owls()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_owls() {
        let owls = default_owls();
        assert_eq!(owls.len(), 19);
        assert_eq!(owls[0], "Barn Owl");
    }

    #[test]
    fn test_parse_json_list() {
        let items = parse_items(r#"["Elf Owl", "Snowy Owl"]"#).unwrap();
        assert_eq!(items, vec!["Elf Owl", "Snowy Owl"]);
    }

    #[test]
    fn test_parse_line_list_skips_blanks() {
        let items = parse_items("Elf Owl\n\n  Snowy Owl  \n").unwrap();
        assert_eq!(items, vec!["Elf Owl", "Snowy Owl"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_items("[\"Elf Owl\"").is_err());
    }
}
