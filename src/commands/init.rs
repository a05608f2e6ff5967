use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# docprops configuration

# Used when a file carries no line-ending or indentation signal
[defaults]
eol = "unix"          # unix | dos | mac
indent = "spaces"     # tabs | spaces | mixed
indent_width = 4
tab_width = 4

[scan]
codec = "utf-8"
ignore = [
    "README",
    "*.min.js",
    "target/**",
    "node_modules/**",
]
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
}
