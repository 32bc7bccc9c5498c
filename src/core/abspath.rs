//! Lexical absolute paths, streamed from arguments or stdin.
//!
//! Input is a lazy sequence of path records. A producer thread feeds the
//! records through a rendezvous channel so output flows as soon as each path
//! is available, and a read error arrives as the last record.

use std::env;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::error::{Error, Result};
use crate::utils::io;

/// One item of the input sequence: a path, or the error that ended the input.
pub type PathRecord = Result<PathBuf>;

/// Collapse `//`, `.` and `..` without touching the filesystem.
///
/// `..` directly under a root is dropped. Relative paths keep leading `..`
/// components, and an empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    let mut rooted = false;
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) => root.push(component.as_os_str()),
            Component::RootDir => {
                root.push(component.as_os_str());
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if !rooted {
                    parts.push(component);
                }
            }
            Component::Normal(_) => parts.push(component),
        }
    }

    let mut cleaned = root;
    cleaned.extend(parts);
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Absolute, cleaned form of `path` relative to `cwd`.
///
/// Without a working directory the input itself is cleaned and returned.
pub fn absolutize_from(path: &Path, cwd: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return clean(path);
    }
    match cwd {
        Some(cwd) => clean(&cwd.join(path)),
        None => clean(path),
    }
}

/// Resolves paths against the process working directory.
///
/// The working directory is looked up for every path, so a directory that
/// disappears mid-stream switches to degraded output from that point on.
#[derive(Debug, Default)]
pub struct Resolver {
    degraded: bool,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return clean(path);
        }
        match env::current_dir() {
            Ok(cwd) => absolutize_from(path, Some(&cwd)),
            Err(e) => {
                if !self.degraded {
                    self.degraded = true;
                    crate::log_status!(
                        "abspath",
                        "working directory unavailable ({}), printing cleaned input paths",
                        e
                    );
                }
                absolutize_from(path, None)
            }
        }
    }

    /// Whether any path so far was resolved without a working directory.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Records for paths given on the command line.
pub fn arg_records(args: Vec<OsString>) -> impl Iterator<Item = PathRecord> {
    args.into_iter().map(|arg| Ok(PathBuf::from(arg)))
}

/// Records for newline-separated paths, each trimmed of surrounding whitespace.
///
/// Blank lines become empty paths. The first read error is yielded once and
/// ends the sequence.
pub fn line_records<R: BufRead>(reader: R) -> impl Iterator<Item = PathRecord> {
    let mut failed = false;
    reader.split(b'\n').map_while(move |line| {
        if failed {
            return None;
        }
        match line {
            Ok(bytes) => Some(Ok(io::path_from_bytes(io::trim_line(&bytes)))),
            Err(e) => {
                failed = true;
                Some(Err(Error::input_read(e)))
            }
        }
    })
}

/// Run a producer on its own thread and hand its records over one at a time.
///
/// The channel has no buffer: each send waits for the consumer to take the
/// record. Dropping the receiver stops the producer at its next send.
pub fn stream<F, I>(make_records: F) -> Result<Receiver<PathRecord>>
where
    F: FnOnce() -> I + Send + 'static,
    I: Iterator<Item = PathRecord>,
{
    let (tx, rx) = mpsc::sync_channel(0);

    thread::Builder::new()
        .name("abspath-input".to_string())
        .spawn(move || {
            for record in make_records() {
                if tx.send(record).is_err() {
                    break;
                }
            }
        })
        .map_err(|e| Error::internal_unexpected(format!("spawn input reader: {}", e)))?;

    Ok(rx)
}

/// Drain `records` in order, writing one resolved path per line.
///
/// Stops at the first error record or write failure. Returns the number of
/// lines written.
pub fn write_resolved<I, W>(records: I, resolver: &mut Resolver, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = PathRecord>,
    W: Write + ?Sized,
{
    let mut written = 0;
    for record in records {
        let path = record?;
        let resolved = resolver.resolve(&path);
        io::write_line(out, io::path_bytes(&resolved))?;
        written += 1;
    }
    io::flush(out)?;
    Ok(written)
}
