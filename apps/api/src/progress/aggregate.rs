//! Completion percentages derived from the catalog and the ledger.
//!
//! Everything here is a pure read, recomputed on each call. Only node-level
//! flags count; sub-items never affect a percentage.

use serde::Serialize;

use crate::roadmap::{Catalog, LookupError, Roadmap, RoadmapId};

/// Source of node-level completion flags. The ledger implements this; the
/// aggregator never needs to know how flags are stored.
pub trait CompletionView {
    fn node_done(&self, roadmap: &RoadmapId, phase: usize, node: usize) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    pub pct: u32,
}

impl Progress {
    pub fn new(done: usize, total: usize) -> Self {
        Self {
            done,
            total,
            pct: percent(done, total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseProgress {
    pub done: usize,
    pub total: usize,
}

/// `done / total * 100` rounded half up; 0 when `total` is 0.
pub fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * done + total) / (2 * total)) as u32
}

fn count_roadmap(roadmap: &Roadmap, view: &impl CompletionView) -> (usize, usize) {
    let mut done = 0;
    let mut total = 0;
    for (pi, phase) in roadmap.phases.iter().enumerate() {
        total += phase.nodes.len();
        done += (0..phase.nodes.len())
            .filter(|&ni| view.node_done(&roadmap.id, pi, ni))
            .count();
    }
    (done, total)
}

pub fn roadmap_progress(
    catalog: &Catalog,
    view: &impl CompletionView,
    roadmap: &str,
) -> Result<Progress, LookupError> {
    let (done, total) = count_roadmap(catalog.roadmap(roadmap)?, view);
    Ok(Progress::new(done, total))
}

pub fn global_progress(catalog: &Catalog, view: &impl CompletionView) -> Progress {
    let (done, total) = catalog
        .roadmaps()
        .iter()
        .map(|r| count_roadmap(r, view))
        .fold((0, 0), |(d, t), (rd, rt)| (d + rd, t + rt));
    Progress::new(done, total)
}

pub fn phase_progress(
    catalog: &Catalog,
    view: &impl CompletionView,
    roadmap: &str,
    phase: usize,
) -> Result<PhaseProgress, LookupError> {
    let id = &catalog.roadmap(roadmap)?.id;
    let total = catalog.phase(roadmap, phase)?.nodes.len();
    let done = (0..total)
        .filter(|&ni| view.node_done(id, phase, ni))
        .count();
    Ok(PhaseProgress { done, total })
}

/// Dashboard summary across the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub total_done: usize,
    pub maps_started: usize,
    pub best_pct: u32,
}

pub fn progress_stats(catalog: &Catalog, view: &impl CompletionView) -> ProgressStats {
    catalog
        .roadmaps()
        .iter()
        .map(|r| count_roadmap(r, view))
        .fold(ProgressStats::default(), |mut stats, (done, total)| {
            stats.total_done += done;
            if done > 0 {
                stats.maps_started += 1;
            }
            stats.best_pct = stats.best_pct.max(percent(done, total));
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::roadmap::catalog::tests::sample_roadmap;

    #[derive(Default)]
    struct Flags(HashSet<(String, usize, usize)>);

    impl Flags {
        fn with(mut self, roadmap: &str, phase: usize, node: usize) -> Self {
            self.0.insert((roadmap.to_string(), phase, node));
            self
        }
    }

    impl CompletionView for Flags {
        fn node_done(&self, roadmap: &RoadmapId, phase: usize, node: usize) -> bool {
            self.0.contains(&(roadmap.to_string(), phase, node))
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            sample_roadmap("a", &[3, 4]),
            sample_roadmap("b", &[2, 0]),
            sample_roadmap("empty", &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(2, 7), 29);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(7, 7), 100);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn test_roadmap_progress_counts_nodes_across_phases() {
        let flags = Flags::default().with("a", 0, 1).with("a", 1, 3);
        let progress = roadmap_progress(&catalog(), &flags, "a").unwrap();
        assert_eq!(progress, Progress { done: 2, total: 7, pct: 29 });
    }

    #[test]
    fn test_roadmap_progress_is_stable_between_calls() {
        let catalog = catalog();
        let flags = Flags::default().with("a", 0, 0);
        assert_eq!(
            roadmap_progress(&catalog, &flags, "a").unwrap(),
            roadmap_progress(&catalog, &flags, "a").unwrap()
        );
    }

    #[test]
    fn test_empty_roadmap_is_zero_percent() {
        let progress = roadmap_progress(&catalog(), &Flags::default(), "empty").unwrap();
        assert_eq!(progress, Progress { done: 0, total: 0, pct: 0 });
    }

    #[test]
    fn test_global_total_is_sum_of_roadmaps() {
        let catalog = catalog();
        let flags = Flags::default().with("a", 0, 0).with("b", 0, 1);
        let global = global_progress(&catalog, &flags);
        let sum: usize = catalog
            .roadmaps()
            .iter()
            .map(|r| roadmap_progress(&catalog, &flags, r.id.as_str()).unwrap().total)
            .sum();
        assert_eq!(global.total, sum);
        assert_eq!(global, Progress { done: 2, total: 9, pct: 22 });
    }

    #[test]
    fn test_phase_progress() {
        let flags = Flags::default().with("a", 1, 0).with("a", 1, 2).with("a", 0, 0);
        let catalog = catalog();
        assert_eq!(
            phase_progress(&catalog, &flags, "a", 1).unwrap(),
            PhaseProgress { done: 2, total: 4 }
        );
        assert_eq!(
            phase_progress(&catalog, &flags, "b", 1).unwrap(),
            PhaseProgress { done: 0, total: 0 }
        );
        assert!(matches!(
            phase_progress(&catalog, &flags, "a", 2),
            Err(LookupError::PhaseOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_roadmap_is_an_error() {
        assert!(matches!(
            roadmap_progress(&catalog(), &Flags::default(), "zzz"),
            Err(LookupError::UnknownRoadmap(_))
        ));
    }

    #[test]
    fn test_progress_stats() {
        let flags = Flags::default()
            .with("a", 0, 0)
            .with("b", 0, 0)
            .with("b", 0, 1);
        let stats = progress_stats(&catalog(), &flags);
        assert_eq!(
            stats,
            ProgressStats {
                total_done: 3,
                maps_started: 2,
                best_pct: 100
            }
        );
    }
}
