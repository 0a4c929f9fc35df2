// File: crates/derivplot/src/main.rs
// Summary: Renders data.json to a PNG on disk.

use anyhow::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let bytes = derivplot::render(derivplot::DATA_PATH)?;

    let out = PathBuf::from("target/out/derivatives.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, bytes)?;
    println!("Wrote {}", out.display());
    Ok(())
}
