use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::TranscodeError;

/// Convert a binary file into its `$readmemh`-style hex rendering.
///
/// Reads `input` fully into memory, then writes a two-line comment header
/// followed by one uppercase two-digit hex line per byte, in input order.
/// The output is staged in a temp file next to `output` and renamed into
/// place on success, so a failed run never leaves a partial file at the
/// destination path.
///
/// Returns the number of input bytes written as data lines.
pub fn transcode(input: &Path, output: &Path) -> Result<usize, TranscodeError> {
    let data = fs::read(input).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            TranscodeError::InputNotFound(input.display().to_string())
        } else {
            TranscodeError::Io(err)
        }
    })?;
    log::debug!("Read {} bytes from {}", data.len(), input.display());

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(staged.as_file());
        write_hex_lines(&mut writer, input, &data)?;
        writer.flush()?;
    }
    staged
        .persist(output)
        .map_err(|err| TranscodeError::Io(err.error))?;
    log::info!("Wrote {} data lines to {}", data.len(), output.display());

    Ok(data.len())
}

// The header echoes the source path exactly as given, never canonicalized.
fn write_hex_lines<W: Write>(writer: &mut W, source: &Path, data: &[u8]) -> io::Result<()> {
    writeln!(writer, "// Binary file: {}", source.display())?;
    writeln!(writer, "// Size: {} bytes", data.len())?;
    for byte in data {
        writeln!(writer, "{byte:02X}")?;
    }
    Ok(())
}
