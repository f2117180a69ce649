use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::roadmap::{CatalogError, RoadmapId};

/// Separator used by the storage encoding. Roadmap ids cannot contain it.
pub const SEPARATOR: char = '|';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("progress key '{0}' must have 3 or 4 components")]
    Arity(String),

    #[error("progress key '{key}' has a non-numeric index '{part}'")]
    Index { key: String, part: String },

    #[error(transparent)]
    Roadmap(#[from] CatalogError),
}

/// Address of one completion flag.
///
/// `sub == None` is a node-level flag, `Some(i)` the flag of sub-item `i`.
/// The two shapes are distinct keys in the same flat map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgressKey {
    pub roadmap: RoadmapId,
    pub phase: usize,
    pub node: usize,
    pub sub: Option<usize>,
}

impl ProgressKey {
    pub fn node(roadmap: &RoadmapId, phase: usize, node: usize) -> Self {
        Self {
            roadmap: roadmap.clone(),
            phase,
            node,
            sub: None,
        }
    }

    pub fn sub(roadmap: &RoadmapId, phase: usize, node: usize, sub: usize) -> Self {
        Self {
            roadmap: roadmap.clone(),
            phase,
            node,
            sub: Some(sub),
        }
    }

    pub fn belongs_to(&self, roadmap: &RoadmapId) -> bool {
        &self.roadmap == roadmap
    }

    /// Storage form: `rid|pi|ni` or `rid|pi|ni|si`.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.roadmap, self.phase, self.node
        )?;
        if let Some(sub) = self.sub {
            write!(f, "{SEPARATOR}{sub}")?;
        }
        Ok(())
    }
}

impl FromStr for ProgressKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(KeyError::Arity(s.to_string()));
        }

        let index = |part: &str| {
            part.parse::<usize>().map_err(|_| KeyError::Index {
                key: s.to_string(),
                part: part.to_string(),
            })
        };

        Ok(Self {
            roadmap: RoadmapId::new(parts[0])?,
            phase: index(parts[1])?,
            node: index(parts[2])?,
            sub: parts.get(3).map(|p| index(p)).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(s: &str) -> RoadmapId {
        RoadmapId::new(s).unwrap()
    }

    #[test]
    fn test_encode_matches_storage_layout() {
        assert_eq!(ProgressKey::node(&rid("ai-ml"), 2, 5).encode(), "ai-ml|2|5");
        assert_eq!(ProgressKey::sub(&rid("git"), 0, 1, 3).encode(), "git|0|1|3");
    }

    #[test]
    fn test_decode_distinguishes_shapes_by_arity() {
        let node: ProgressKey = "git|0|1".parse().unwrap();
        let sub: ProgressKey = "git|0|1|0".parse().unwrap();
        assert_eq!(node.sub, None);
        assert_eq!(sub.sub, Some(0));
        assert_ne!(node, sub);
    }

    #[test]
    fn test_decode_rejects_malformed_keys() {
        assert!(matches!("git|0".parse::<ProgressKey>(), Err(KeyError::Arity(_))));
        assert!(matches!(
            "git|0|1|2|3".parse::<ProgressKey>(),
            Err(KeyError::Arity(_))
        ));
        assert!(matches!(
            "git|x|1".parse::<ProgressKey>(),
            Err(KeyError::Index { .. })
        ));
        assert!(matches!(
            "Git|0|1".parse::<ProgressKey>(),
            Err(KeyError::Roadmap(_))
        ));
        assert!(matches!(
            "git|-1|1".parse::<ProgressKey>(),
            Err(KeyError::Index { .. })
        ));
    }

    #[test]
    fn test_belongs_to_compares_whole_id() {
        let key = ProgressKey::node(&rid("git-advanced"), 0, 0);
        assert!(key.belongs_to(&rid("git-advanced")));
        assert!(!key.belongs_to(&rid("git")));
    }

    #[test]
    fn test_node_key_orders_before_its_sub_keys() {
        let node = ProgressKey::node(&rid("sql"), 1, 1);
        let sub = ProgressKey::sub(&rid("sql"), 1, 1, 0);
        assert!(node < sub);
    }
}
