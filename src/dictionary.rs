use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, trace};

use crate::error::DictionaryError;
use crate::tree::PrefixTree;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Somewhere a newline-delimited word list can be read from.
#[async_trait::async_trait]
pub trait WordSource {
    /// Name used in logs.
    fn describe(&self) -> String;

    /// Reads the whole source. Bytes are handed back undecoded; lines that are
    /// not valid UTF-8 get rejected by the loader like any other bad line.
    async fn read(&self) -> Result<Vec<u8>, DictionaryError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, DictionaryError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| DictionaryError::Open {
                path: self.path.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait::async_trait]
impl WordSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, DictionaryError> {
        let mut stdin = tokio::io::stdin();
        let mut buf = Vec::with_capacity(256);
        stdin.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

/// A word list already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    content: Vec<u8>,
}

impl MemorySource {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for MemorySource {
    fn describe(&self) -> String {
        format!("<memory, {} bytes>", self.content.len())
    }

    async fn read(&self) -> Result<Vec<u8>, DictionaryError> {
        Ok(self.content.clone())
    }
}

/// Picks the source for a `--dictionary` argument.
pub fn source_for(path: &Path) -> Box<dyn WordSource + Send + Sync> {
    if path.as_os_str() == STDIN_PATH {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    }
}

/// Counts from one dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Lines that added a new word.
    pub inserted: usize,
    /// Valid lines whose word was already stored.
    pub duplicates: usize,
    /// Lines rejected as empty or non-alphabetic.
    pub skipped: usize,
}

/// Builds a tree from every valid line of `source`.
///
/// A trailing `\r` is dropped from each line. Lines that are empty or contain
/// anything but ASCII letters are skipped without error and counted in the
/// report.
pub async fn load_dictionary<S>(source: &S) -> Result<(PrefixTree, LoadReport), DictionaryError>
where
    S: WordSource + ?Sized + Sync,
{
    let start = Instant::now();
    let content = source.read().await?;
    debug!("Read {} bytes from {}", content.len(), source.describe());

    let mut tree = PrefixTree::new();
    let report = insert_lines(&mut tree, &content);

    info!(
        "Loaded {} words from {} ({} lines, {} duplicates, {} skipped) in {} ms",
        report.inserted,
        source.describe(),
        report.lines,
        report.duplicates,
        report.skipped,
        start.elapsed().as_millis()
    );

    Ok((tree, report))
}

/// Inserts each line of `content` into `tree`.
pub fn insert_lines(tree: &mut PrefixTree, content: &[u8]) -> LoadReport {
    let mut report = LoadReport::default();

    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return report;
    }

    for raw in content.split(|&b| b == b'\n') {
        report.lines += 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let Ok(line) = std::str::from_utf8(raw) else {
            trace!("Skipping line {}: not UTF-8", report.lines);
            report.skipped += 1;
            continue;
        };

        if crate::tree::normalize(line).is_none() {
            trace!("Skipping line {}: {:?}", report.lines, line);
            report.skipped += 1;
        } else if tree.insert(line) {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    report
}
