use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

/// Overwrite `path` with `html` as UTF-8. The file handle is closed when this
/// returns, whether or not the write succeeded.
pub fn write_html(path: impl AsRef<Path>, html: &str) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
