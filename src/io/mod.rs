pub mod output;
pub mod reader;
pub mod walker;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use reader::{decode, decode_with_encoding, read_decoded, read_text, DecodedText};
pub use walker::{collect_inputs, FileWalker};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
