// src/graph/file.rs
//! TOML network descriptions.
//!
//! ```toml
//! [[page]]
//! name = "Homepage"
//! links = ["Library"]
//!
//! [[page]]
//! name = "Library"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Graph, GraphBuilder};
use crate::error::{RankError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default, rename = "page")]
    pub pages: Vec<PageEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    pub name: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl NetworkFile {
    /// Parses a network description.
    ///
    /// # Errors
    /// Returns `Parse` if the TOML is malformed.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Converts the description into a graph. Node order follows page order.
    ///
    /// # Errors
    /// Returns `DuplicateNode` for a repeated page, `UnknownNode` for a link
    /// to an undeclared page, and `EmptyGraph` if no page is declared.
    pub fn into_graph(self) -> Result<Graph> {
        let mut declared = HashSet::new();
        for page in &self.pages {
            if !declared.insert(page.name.as_str()) {
                return Err(RankError::DuplicateNode(page.name.clone()));
            }
        }
        if let Some(target) = self
            .pages
            .iter()
            .flat_map(|p| &p.links)
            .find(|t| !declared.contains(t.as_str()))
        {
            return Err(RankError::UnknownNode(target.clone()));
        }

        let mut builder = GraphBuilder::new();
        for page in &self.pages {
            builder.get_or_create_node(&page.name);
        }
        for page in &self.pages {
            builder.link_all(&page.name, &page.links);
        }
        builder.build()
    }
}

/// Reads and builds a graph from a TOML network file.
///
/// # Errors
/// Returns `Io` if the file can't be read, otherwise see
/// [`NetworkFile::into_graph`].
pub fn load(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    NetworkFile::parse(&content)?.into_graph()
}
