//! Staging files, their directories, and cleanup after an export.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::Rng;
use tempfile::TempDir;
use tracing::{debug, warn};

use crate::core::Delimiter;
use crate::error::Result;
use crate::registry;

/// Length of generated staging file stems.
const RANDOM_STEM_LEN: usize = 10;

/// Bytes read per attempt while looking for the end of the header line.
const HEADER_CHUNK: usize = 4096;

/// Ten random lowercase ASCII letters.
pub fn random_stem() -> String {
    let mut rng = rand::thread_rng();
    (0..RANDOM_STEM_LEN)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

/// Create a fresh temporary directory for a synthesized staging file,
/// under `root` or the system temporary directory.
pub fn create_staging_dir(root: Option<&Path>) -> Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("access-export-");
    let dir = match root {
        Some(root) => builder.tempdir_in(root)?,
        None => builder.tempdir()?,
    };
    debug!("Created staging directory {}", dir.path().display());
    Ok(dir)
}

/// Read the header line of a delimited text file in `encoding`.
///
/// Only the first line is decoded. A byte-order mark and the line
/// terminator are stripped before splitting on the delimiter. Undecodable
/// bytes become U+FFFD rather than failing the export.
pub fn read_header(path: &Path, delimiter: &Delimiter, encoding: &str) -> Result<Vec<String>> {
    let codec = registry::text_encoding(encoding);
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    let mut chunk = [0u8; HEADER_CHUNK];

    // The whole prefix is decoded each round so UTF-16 newlines are never
    // split across chunks.
    let decoded = loop {
        let n = file.read(&mut chunk)?;
        bytes.extend_from_slice(&chunk[..n]);
        let (text, _, _) = codec.decode(&bytes);
        if n == 0 || text.contains('\n') {
            break text.into_owned();
        }
    };

    let line = decoded.split('\n').next().unwrap_or_default();
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let line = line.trim_end_matches('\r');
    Ok(line
        .split(delimiter.separator())
        .map(str::to_string)
        .collect())
}

/// What to remove once an export finishes.
#[derive(Debug)]
pub enum Cleanup {
    /// Remove the whole staging directory (synthesized staging file).
    RemoveDirectory(TempDir),
    /// Remove only the descriptor (caller-owned staging file).
    RemoveDescriptor(PathBuf),
}

impl Cleanup {
    pub fn run(self) -> Result<()> {
        match self {
            Cleanup::RemoveDirectory(dir) => {
                let path = dir.path().to_path_buf();
                dir.close()?;
                debug!("Removed staging directory {}", path.display());
            }
            Cleanup::RemoveDescriptor(path) => match std::fs::remove_file(&path) {
                Ok(()) => debug!("Removed descriptor {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }
}

/// Run `cleanup` and combine its outcome with the export's.
///
/// An export error always wins; a cleanup error is only returned when the
/// export itself succeeded.
pub fn finish<T>(outcome: Result<T>, cleanup: Cleanup) -> Result<T> {
    let cleaned = cleanup.run();
    match (outcome, cleaned) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(cleanup_err)) => {
            warn!("Cleanup failed after export error: {}", cleanup_err);
            Err(e)
        }
    }
}
