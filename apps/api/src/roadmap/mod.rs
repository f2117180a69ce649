pub mod catalog;
mod data;
pub mod handlers;

pub use catalog::{Catalog, CatalogError, Difficulty, LookupError, Roadmap, RoadmapId, RoadmapKind};
