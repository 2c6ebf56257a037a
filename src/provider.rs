//! Content location: one fetch contract over three javadoc root kinds.
//!
//! A root is a zip archive, a directory tree, or an HTTP base URL. All
//! three are validated at construction by the presence of the
//! `package-list` index javadoc emits at the root of every generated
//! tree, so a bad root fails fast instead of producing confusing misses
//! on every lookup.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{JavadocError, Result};

/// Index file present at the root of every generated javadoc tree.
pub const PACKAGE_LIST: &str = "package-list";

/// A validated javadoc root. The set of backends is closed, so this is
/// a tagged variant rather than a trait object.
#[derive(Debug)]
pub enum DocProvider {
    Zip(ZipProvider),
    Dir(DirProvider),
    Url(UrlProvider),
}

impl DocProvider {
    /// Open a filesystem root: a directory of generated pages, or a zip
    /// archive of one.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(JavadocError::RootInvalid {
                root: root.display().to_string(),
                reason: "does not exist".to_string(),
            });
        }
        if root.is_dir() {
            Ok(DocProvider::Dir(DirProvider::open(root)?))
        } else if root.is_file() {
            Ok(DocProvider::Zip(ZipProvider::open(root)?))
        } else {
            Err(JavadocError::RootInvalid {
                root: root.display().to_string(),
                reason: "neither file nor directory".to_string(),
            })
        }
    }

    /// Open a remote root served over HTTP.
    pub fn from_url(base: &str) -> Result<Self> {
        Ok(DocProvider::Url(UrlProvider::open(base)?))
    }

    /// Fetch the raw bytes of one page by its relative path.
    pub fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        match self {
            DocProvider::Zip(p) => p.fetch(relative),
            DocProvider::Dir(p) => p.fetch(relative),
            DocProvider::Url(p) => p.fetch(relative),
        }
    }

    /// Package names listed by the root's `package-list`, one per line.
    pub fn package_list(&self) -> Result<Vec<String>> {
        let bytes = self.fetch(PACKAGE_LIST)?;
        let text = decode_page(bytes, PACKAGE_LIST)?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Human-readable root location for messages and cache keys.
    pub fn describe(&self) -> String {
        match self {
            DocProvider::Zip(p) => p.path.display().to_string(),
            DocProvider::Dir(p) => p.root.display().to_string(),
            DocProvider::Url(p) => p.base.clone(),
        }
    }
}

/// Decode page bytes as line-oriented UTF-8. Malformed bytes are a
/// content failure, not a hard error.
pub fn decode_page(bytes: Vec<u8>, path: &str) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|_| JavadocError::ContentNotFound {
        path: path.to_string(),
        reason: "page is not valid UTF-8".to_string(),
    })?;
    // Normalize line endings the way a line-by-line reader would.
    if text.contains('\r') {
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(text)
    }
}

// ============================================================================
// Zip archive backend
// ============================================================================

/// Javadoc packaged as a zip archive (e.g. a `-javadoc.jar`).
///
/// Entry names are gathered once at construction; each fetch re-opens
/// the archive, so a provider can serve concurrent lookups without a
/// shared mutable handle.
#[derive(Debug)]
pub struct ZipProvider {
    path: PathBuf,
    entries: Vec<String>,
}

impl ZipProvider {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = zip::ZipArchive::new(file).map_err(|e| JavadocError::RootInvalid {
            root: path.display().to_string(),
            reason: format!("not a readable zip archive: {}", e),
        })?;
        let entries: Vec<String> = archive.file_names().map(String::from).collect();

        if !entries.iter().any(|name| is_suffix_entry(name, PACKAGE_LIST)) {
            return Err(JavadocError::RootInvalid {
                root: path.display().to_string(),
                reason: format!("no {} entry in archive", PACKAGE_LIST),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        let name = self
            .entries
            .iter()
            .find(|name| is_suffix_entry(name, relative))
            .ok_or_else(|| JavadocError::ContentNotFound {
                path: relative.to_string(),
                reason: format!("no matching entry in {}", self.path.display()),
            })?
            .clone();

        let file = File::open(&self.path)?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| JavadocError::ContentNotFound {
                path: relative.to_string(),
                reason: format!("archive became unreadable: {}", e),
            })?;
        let mut entry = archive
            .by_name(&name)
            .map_err(|e| JavadocError::ContentNotFound {
                path: relative.to_string(),
                reason: e.to_string(),
            })?;

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Entry-name suffix match with a path-segment boundary, so
/// `docs/api/com/example/Foo.html` matches `com/example/Foo.html` but
/// `NotFoo.html` does not match `Foo.html`.
fn is_suffix_entry(entry: &str, relative: &str) -> bool {
    entry.ends_with(relative)
        && (entry.len() == relative.len()
            || entry.as_bytes()[entry.len() - relative.len() - 1] == b'/')
}

// ============================================================================
// Directory backend
// ============================================================================

/// Javadoc as an exploded directory tree.
#[derive(Debug)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(PACKAGE_LIST).is_file() {
            return Err(JavadocError::RootInvalid {
                root: root.display().to_string(),
                reason: format!("no {} in directory", PACKAGE_LIST),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.root.join(relative);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(JavadocError::ContentNotFound {
                    path: relative.to_string(),
                    reason: format!("no such file under {}", self.root.display()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// URL backend
// ============================================================================

/// Javadoc served over HTTP, e.g. `https://docs.oracle.com/javase/8/docs/api`.
#[derive(Debug)]
pub struct UrlProvider {
    base: String,
}

impl UrlProvider {
    pub fn open(base: &str) -> Result<Self> {
        let base = base.trim_end_matches('/').to_string();

        // One eager fetch of the index proves the root is reachable and
        // actually serves javadoc. The content itself is discarded.
        let url = format!("{}/{}", base, PACKAGE_LIST);
        let response = ureq::get(&url).call().map_err(|err| {
            let reason = match err {
                ureq::Error::Status(code, _) => {
                    format!("server returned status {} for {}", code, url)
                }
                ureq::Error::Transport(transport) => {
                    format!("transport error for {}: {}", url, transport)
                }
            };
            JavadocError::RootInvalid {
                root: base.clone(),
                reason,
            }
        })?;
        response
            .into_string()
            .map_err(|e| JavadocError::RootInvalid {
                root: base.clone(),
                reason: format!("unreadable {}: {}", PACKAGE_LIST, e),
            })?;

        Ok(Self { base })
    }

    fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base, relative);
        let response = ureq::get(&url).call().map_err(|err| {
            let reason = match err {
                ureq::Error::Status(code, _) => format!("server returned status {}", code),
                ureq::Error::Transport(transport) => format!("transport error: {}", transport),
            };
            JavadocError::ContentNotFound {
                path: relative.to_string(),
                reason,
            }
        })?;

        let mut buf = Vec::new();
        response.into_reader().read_to_end(&mut buf)?;
        Ok(buf)
    }
}
