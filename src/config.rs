use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::table::Justify;

/// Runtime configuration handed to the transformation pipeline.
///
/// Passed explicitly into every transform; nothing in the core reads
/// ambient state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Emit extra pipeline diagnostics.
    pub debug_enabled: bool,
    /// Column justification used when rendering tables.
    pub justify: Justify,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub debug: bool,
    pub write: bool,
    pub justify: Option<Justify>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            debug: self.debug || other.debug,
            write: self.write || other.write,
            justify: other.justify.or(self.justify),
        }
    }

    /// Collapse resolved flags into the pipeline configuration.
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            debug_enabled: self.debug,
            justify: self.justify.unwrap_or_default(),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("markwright").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("markwright")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("markwright").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("markwright")
                .join("config");
        }
    }

    PathBuf::from(".markwrightrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".markwrightrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# markwright defaults (saved with --save)".to_string());
    if flags.debug {
        lines.push("--debug".to_string());
    }
    if flags.write {
        lines.push("--write".to_string());
    }
    if let Some(justify) = flags.justify {
        let justify_str = match justify {
            Justify::Left => "left",
            Justify::Right => "right",
            Justify::Center => "center",
        };
        lines.push(format!("--justify {justify_str}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--debug" {
            flags.debug = true;
        } else if token == "--write" || token == "-w" {
            flags.write = true;
        } else if token == "--justify" {
            if let Some(next) = tokens.get(i + 1) {
                flags.justify = parse_justify(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--justify=") {
            flags.justify = parse_justify(value);
        }
        i += 1;
    }
    flags
}

fn parse_justify(s: &str) -> Option<Justify> {
    match s {
        "left" => Some(Justify::Left),
        "right" => Some(Justify::Right),
        "center" => Some(Justify::Center),
        _ => None,
    }
}
