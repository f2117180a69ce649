use serde::Serialize;

use crate::progress::ProgressStats;

pub struct Achievement {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    unlocked: fn(&ProgressStats) -> bool,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_step",
        icon: "🌱",
        name: "First Step",
        description: "Complete your first topic",
        unlocked: |s| s.total_done >= 1,
    },
    Achievement {
        id: "on_a_roll",
        icon: "🔥",
        name: "On a Roll",
        description: "Complete 10 topics total",
        unlocked: |s| s.total_done >= 10,
    },
    Achievement {
        id: "deep_dive",
        icon: "🤿",
        name: "Deep Dive",
        description: "Start 3 different roadmaps",
        unlocked: |s| s.maps_started >= 3,
    },
    Achievement {
        id: "halfway",
        icon: "⚡",
        name: "Halfway There",
        description: "Reach 50% on any roadmap",
        unlocked: |s| s.best_pct >= 50,
    },
    Achievement {
        id: "completionist",
        icon: "🏆",
        name: "Completionist",
        description: "Reach 100% on any roadmap",
        unlocked: |s| s.best_pct >= 100,
    },
    Achievement {
        id: "scholar",
        icon: "📚",
        name: "Scholar",
        description: "Complete 25 topics total",
        unlocked: |s| s.total_done >= 25,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct AchievementStatus {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

pub fn evaluate(stats: &ProgressStats) -> Vec<AchievementStatus> {
    ACHIEVEMENTS
        .iter()
        .map(|a| AchievementStatus {
            id: a.id,
            icon: a.icon,
            name: a.name,
            description: a.description,
            unlocked: (a.unlocked)(stats),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(stats: ProgressStats) -> Vec<&'static str> {
        evaluate(&stats)
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn test_nothing_unlocked_without_progress() {
        assert!(unlocked(ProgressStats::default()).is_empty());
    }

    #[test]
    fn test_thresholds() {
        let stats = ProgressStats {
            total_done: 10,
            maps_started: 3,
            best_pct: 50,
        };
        assert_eq!(
            unlocked(stats),
            vec!["first_step", "on_a_roll", "deep_dive", "halfway"]
        );

        let stats = ProgressStats {
            total_done: 25,
            maps_started: 1,
            best_pct: 100,
        };
        assert_eq!(
            unlocked(stats),
            vec!["first_step", "on_a_roll", "halfway", "completionist", "scholar"]
        );
    }
}
