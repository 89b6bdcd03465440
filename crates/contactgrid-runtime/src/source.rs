//! Injectable contact sources.

use std::path::{Path, PathBuf};

use contactgrid_types::{RawContact, parse_contacts};
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::{Error, Result};

const BUNDLED_CONTACTS: &str = include_str!("../assets/contacts.json");

/// Asynchronous provider of the raw contact list. Fetched once per mount.
pub trait ContactSource: Send + Sync {
    /// Human-readable origin, used in logs and status lines.
    fn describe(&self) -> String;

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<RawContact>>>;
}

/// Reads a JSON array of contacts from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<RawContact>>> {
        let path = self.path.clone();
        async move {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                Error::Source(format!("failed to read {}: {}", path.display(), e))
            })?;
            Ok(parse_contacts(&content)?)
        }
        .boxed()
    }
}

/// The demo contact list compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl ContactSource for BundledSource {
    fn describe(&self) -> String {
        "bundled demo contacts".to_string()
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<RawContact>>> {
        async move { Ok(parse_contacts(BUNDLED_CONTACTS)?) }.boxed()
    }
}

/// Contacts handed over in memory, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: std::result::Result<Vec<RawContact>, String>,
}

impl StaticSource {
    pub fn new(contacts: Vec<RawContact>) -> Self {
        Self {
            result: Ok(contacts),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
        }
    }
}

impl ContactSource for StaticSource {
    fn describe(&self) -> String {
        match &self.result {
            Ok(contacts) => format!("{} in-memory contacts", contacts.len()),
            Err(_) => "failing source".to_string(),
        }
    }

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<RawContact>>> {
        let result = self.result.clone().map_err(Error::Source);
        async move { result }.boxed()
    }
}
