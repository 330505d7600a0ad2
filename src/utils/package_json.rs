use {
    anyhow::{anyhow, Context, Result},
    serde_json::Value,
    std::{fs, path::Path},
};

/// Reads the `version` field of a `package.json` manifest.
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let Some(version) = doc.get("version").and_then(|version| version.as_str()) else {
        return Err(anyhow!(
            "failed to get version from {}",
            path.display()
        ));
    };
    Ok(version.to_string())
}
