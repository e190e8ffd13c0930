use std::path::Path;

pub fn cmd_init(path: &Path) -> anyhow::Result<()> {
    if crate::Config::create_default_if_missing(path)? {
        println!("✓ Config file created at {}.", path.display());
        println!("Fill in the provider API keys (or set them in .env) and run again.");
    } else {
        println!("Config file already exists at {}", path.display());
    }
    Ok(())
}
