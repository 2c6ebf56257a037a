//! Top-level lookup: path resolution, content fetch, signature extraction.

use std::path::Path;

use crate::error::Result;
use crate::extract::{self, SignatureMatch};
use crate::member::Callable;
use crate::provider::{decode_page, DocProvider};
use crate::resolve;

/// What a lookup does when the names cannot be found: raise the
/// underlying error, or degrade to an empty name list so a caller can
/// fall through to another source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    Raise,
    Empty,
}

/// One javadoc root, validated at construction and usable for many
/// lookups. Lookups are synchronous and uncached; each one performs a
/// single fetch against the backing root.
#[derive(Debug)]
pub struct Javadoc {
    provider: DocProvider,
}

impl Javadoc {
    /// Open javadoc from a zip archive or a directory tree.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            provider: DocProvider::open(root.as_ref())?,
        })
    }

    /// Open javadoc served at a base URL.
    pub fn from_url(base: &str) -> Result<Self> {
        Ok(Self {
            provider: DocProvider::from_url(base)?,
        })
    }

    /// Where this root points, for messages and cache keys.
    pub fn root(&self) -> String {
        self.provider.describe()
    }

    /// Packages documented under this root.
    pub fn packages(&self) -> Result<Vec<String>> {
        self.provider.package_list()
    }

    /// Ordered parameter names for `callable`.
    ///
    /// With `OnMissing::Raise` every failure to find the names becomes
    /// an error naming the callable and the cause. With
    /// `OnMissing::Empty` those failures collapse into an empty list;
    /// an empty result is then indistinguishable from a genuine
    /// zero-parameter match, which is the point of graceful mode.
    pub fn lookup(&self, callable: &Callable, on_missing: OnMissing) -> Result<Vec<String>> {
        match self.signature(callable) {
            Ok(m) => Ok(m.names),
            Err(err) => match on_missing {
                OnMissing::Raise => Err(err),
                OnMissing::Empty => Ok(Vec::new()),
            },
        }
    }

    /// Strict lookup, the common case.
    pub fn parameter_names(&self, callable: &Callable) -> Result<Vec<String>> {
        self.lookup(callable, OnMissing::Raise)
    }

    /// The full matched declaration, for callers that want to show it.
    pub fn signature(&self, callable: &Callable) -> Result<SignatureMatch> {
        let path = resolve::doc_path(&callable.declaring_type)?;
        let bytes = self.provider.fetch(&path)?;
        // The fetch handle is gone by now; only decoded text flows on.
        let page = decode_page(bytes, &path)?;
        extract::find_signature(&page, callable)
    }
}
