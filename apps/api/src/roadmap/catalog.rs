use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum hits returned by [`Catalog::search`].
pub const MAX_SEARCH_HITS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid roadmap id '{0}': only lowercase letters, digits and '-' are allowed")]
    InvalidId(String),

    #[error("duplicate roadmap id '{0}'")]
    DuplicateId(String),
}

/// A lookup that does not match the catalog. Since the catalog is fixed at
/// startup these only come from callers passing bad coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown roadmap '{0}'")]
    UnknownRoadmap(String),

    #[error("roadmap '{roadmap}' has {len} phases, index {phase} is out of range")]
    PhaseOutOfRange {
        roadmap: String,
        phase: usize,
        len: usize,
    },

    #[error("phase {phase} of '{roadmap}' has {len} nodes, index {node} is out of range")]
    NodeOutOfRange {
        roadmap: String,
        phase: usize,
        node: usize,
        len: usize,
    },

    #[error("node {phase}/{node} of '{roadmap}' has {len} sub-items, index {sub} is out of range")]
    SubOutOfRange {
        roadmap: String,
        phase: usize,
        node: usize,
        sub: usize,
        len: usize,
    },
}

/// Roadmap identifier. Non-empty, drawn from `[a-z0-9-]`, so it can never
/// contain the `|` separator used by the storage encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoadmapId(String);

impl RoadmapId {
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(Self(id))
        } else {
            Err(CatalogError::InvalidId(id))
        }
    }

    /// Built-in data only; the catalog tests check these ids.
    pub(super) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoadmapId {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoadmapId> for String {
    fn from(id: RoadmapId) -> Self {
        id.0
    }
}

impl fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapKind {
    Role,
    Skill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Classification of a node within its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeTag {
    #[serde(rename = "core")]
    Required,
    #[serde(rename = "optional")]
    Optional,
    #[serde(rename = "alt")]
    Alternative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Video,
    Article,
    Course,
    Docs,
    Book,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub tag: NodeTag,
    pub description: String,
    #[serde(default)]
    pub subs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub label: String,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: RoadmapId,
    pub icon: String,
    pub title: String,
    pub kind: RoadmapKind,
    pub difficulty: Difficulty,
    pub duration: String,
    pub description: String,
    pub about: String,
    pub prereqs: Vec<String>,
    pub tags: Vec<String>,
    pub phases: Vec<Phase>,
    pub resources: Vec<Resource>,
}

impl Roadmap {
    pub fn node_count(&self) -> usize {
        self.phases.iter().map(|p| p.nodes.len()).sum()
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.description.to_lowercase().contains(needle)
    }
}

/// The immutable set of roadmaps. Built once at startup and shared by
/// reference; nothing in it changes while the process runs.
#[derive(Debug, Clone)]
pub struct Catalog {
    roadmaps: Vec<Roadmap>,
}

impl Catalog {
    /// Builds a catalog from caller-supplied roadmaps, rejecting duplicate ids.
    pub fn new(roadmaps: Vec<Roadmap>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for roadmap in &roadmaps {
            if !seen.insert(roadmap.id.as_str()) {
                return Err(CatalogError::DuplicateId(roadmap.id.to_string()));
            }
        }
        Ok(Self { roadmaps })
    }

    /// The compiled-in roadmaps.
    pub fn builtin() -> Self {
        Self {
            roadmaps: super::data::builtin_roadmaps(),
        }
    }

    pub fn roadmaps(&self) -> &[Roadmap] {
        &self.roadmaps
    }

    pub fn get(&self, id: &str) -> Option<&Roadmap> {
        self.roadmaps.iter().find(|r| r.id.as_str() == id)
    }

    pub fn roadmap(&self, id: &str) -> Result<&Roadmap, LookupError> {
        self.get(id)
            .ok_or_else(|| LookupError::UnknownRoadmap(id.to_string()))
    }

    pub fn phase(&self, id: &str, phase: usize) -> Result<&Phase, LookupError> {
        let roadmap = self.roadmap(id)?;
        roadmap
            .phases
            .get(phase)
            .ok_or_else(|| LookupError::PhaseOutOfRange {
                roadmap: id.to_string(),
                phase,
                len: roadmap.phases.len(),
            })
    }

    pub fn node(&self, id: &str, phase: usize, node: usize) -> Result<&Node, LookupError> {
        let p = self.phase(id, phase)?;
        p.nodes.get(node).ok_or_else(|| LookupError::NodeOutOfRange {
            roadmap: id.to_string(),
            phase,
            node,
            len: p.nodes.len(),
        })
    }

    /// Checks that a sub-item exists and returns its label.
    pub fn sub(&self, id: &str, phase: usize, node: usize, sub: usize) -> Result<&str, LookupError> {
        let n = self.node(id, phase, node)?;
        n.subs
            .get(sub)
            .map(String::as_str)
            .ok_or_else(|| LookupError::SubOutOfRange {
                roadmap: id.to_string(),
                phase,
                node,
                sub,
                len: n.subs.len(),
            })
    }

    /// Total node count across every roadmap.
    pub fn node_count(&self) -> usize {
        self.roadmaps.iter().map(Roadmap::node_count).sum()
    }

    /// Roadmaps of one kind, or all of them.
    pub fn filter(&self, kind: Option<RoadmapKind>) -> impl Iterator<Item = &Roadmap> {
        self.roadmaps
            .iter()
            .filter(move |r| kind.map_or(true, |k| r.kind == k))
    }

    /// Case-insensitive substring search over title, tags and description.
    /// Returns at most [`MAX_SEARCH_HITS`] roadmaps in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Roadmap> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.roadmaps
            .iter()
            .filter(|r| r.matches(&needle))
            .take(MAX_SEARCH_HITS)
            .collect()
    }
}
