//! Mission registry: seeded opportunities plus join/leave bookkeeping
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type MissionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub duration_hours: u32,
    pub max_participants: u32,
    #[serde(default)]
    pub current_participants: u32,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub organizer: String,
    #[serde(default)]
    pub joined: bool,
}

impl Mission {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    #[must_use]
    pub const fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }

    /// Participation as a 0..=100 percentage for the roster bar.
    #[must_use]
    pub fn fill_pct(&self) -> u8 {
        if self.max_participants == 0 {
            return 100;
        }
        let pct = u64::from(self.current_participants) * 100 / u64::from(self.max_participants);
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}

/// Validated input for a new mission, produced by an activity draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub duration_hours: u32,
    pub max_participants: u32,
    pub category: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("no mission with id {0}")]
    UnknownMission(MissionId),
    #[error("mission \"{title}\" is full ({max} participants)")]
    Full { title: String, max: u32 },
}

/// What a successful toggle did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Joined,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinedFilter {
    #[default]
    All,
    JoinedOnly,
    OpenOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MissionFilter {
    pub category: Option<String>,
    pub query: String,
    pub joined: JoinedFilter,
}

impl MissionFilter {
    #[must_use]
    pub fn matches(&self, mission: &Mission) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| mission.category.eq_ignore_ascii_case(c));
        let query = self.query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || mission.title.to_lowercase().contains(&query)
            || mission.location.to_lowercase().contains(&query)
            || mission.organizer.to_lowercase().contains(&query);
        let joined_ok = match self.joined {
            JoinedFilter::All => true,
            JoinedFilter::JoinedOnly => mission.joined,
            JoinedFilter::OpenOnly => !mission.is_full() && !mission.joined,
        };
        category_ok && query_ok && joined_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MissionRegistry {
    missions: Vec<Mission>,
}

impl MissionRegistry {
    #[must_use]
    pub const fn new(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    #[must_use]
    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn filtered<'a>(&'a self, filter: &'a MissionFilter) -> impl Iterator<Item = &'a Mission> {
        self.missions.iter().filter(move |m| filter.matches(m))
    }

    #[must_use]
    pub fn joined(&self) -> Vec<&Mission> {
        self.missions.iter().filter(|m| m.joined).collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for mission in &self.missions {
            if !seen.iter().any(|c| c == &mission.category) {
                seen.push(mission.category.clone());
            }
        }
        seen
    }

    /// Flip the viewer's membership, moving the participant count by exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`MissionError::UnknownMission`] when the id is absent and
    /// [`MissionError::Full`] when joining a mission at capacity. The registry
    /// is unchanged in both cases.
    pub fn toggle_join(&mut self, id: MissionId) -> Result<(Membership, &Mission), MissionError> {
        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MissionError::UnknownMission(id))?;

        if mission.joined {
            mission.joined = false;
            mission.current_participants = mission.current_participants.saturating_sub(1);
            return Ok((Membership::Left, mission));
        }

        if mission.is_full() {
            return Err(MissionError::Full {
                title: mission.title.clone(),
                max: mission.max_participants,
            });
        }
        mission.joined = true;
        mission.current_participants += 1;
        Ok((Membership::Joined, mission))
    }

    #[must_use]
    pub fn next_id(&self) -> MissionId {
        self.missions.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    /// Append a freshly created mission with an empty roster.
    pub fn create(&mut self, new: NewMission, organizer: &str) -> &Mission {
        let mission = Mission {
            id: self.next_id(),
            title: new.title,
            description: new.description,
            location: new.location,
            date: new.date,
            duration_hours: new.duration_hours,
            max_participants: new.max_participants,
            current_participants: 0,
            category: new.category,
            difficulty: new.difficulty,
            organizer: organizer.to_string(),
            joined: false,
        };
        self.missions.push(mission);
        let last = self.missions.len() - 1;
        &self.missions[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(id: MissionId, current: u32, max: u32, joined: bool) -> Mission {
        Mission {
            id,
            title: format!("Mission {id}"),
            description: String::from("desc"),
            location: String::from("Oakland"),
            date: String::from("2024-08-01"),
            duration_hours: 2,
            max_participants: max,
            current_participants: current,
            category: String::from("Community"),
            difficulty: Difficulty::Easy,
            organizer: String::from("Org"),
            joined,
        }
    }

    #[test]
    fn join_then_leave_moves_count_by_one() {
        let mut registry = MissionRegistry::new(vec![mission(1, 3, 10, false)]);
        let (membership, m) = registry.toggle_join(1).unwrap();
        assert_eq!(membership, Membership::Joined);
        assert!(m.joined);
        assert_eq!(m.current_participants, 4);

        let (membership, m) = registry.toggle_join(1).unwrap();
        assert_eq!(membership, Membership::Left);
        assert!(!m.joined);
        assert_eq!(m.current_participants, 3);
    }

    #[test]
    fn unknown_id_leaves_registry_untouched() {
        let mut registry = MissionRegistry::new(vec![mission(1, 3, 10, false)]);
        let before = registry.clone();
        assert_eq!(
            registry.toggle_join(99).unwrap_err(),
            MissionError::UnknownMission(99)
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn full_mission_refuses_join_but_allows_leave() {
        let mut registry =
            MissionRegistry::new(vec![mission(1, 5, 5, false), mission(2, 5, 5, true)]);
        let before = registry.clone();
        assert!(matches!(
            registry.toggle_join(1),
            Err(MissionError::Full { max: 5, .. })
        ));
        assert_eq!(registry, before);

        let (membership, m) = registry.toggle_join(2).unwrap();
        assert_eq!(membership, Membership::Left);
        assert_eq!(m.current_participants, 4);
    }

    #[test]
    fn create_appends_with_empty_roster() {
        let mut registry = MissionRegistry::new(vec![mission(4, 1, 2, false)]);
        let created = registry.create(
            NewMission {
                title: String::from("Park Cleanup"),
                description: String::from("Pick up litter"),
                location: String::from("Lake Merritt"),
                date: String::from("2024-09-01"),
                duration_hours: 3,
                max_participants: 12,
                category: String::from("Environment"),
                difficulty: Difficulty::Medium,
            },
            "Green Earth Foundation",
        );
        assert_eq!(created.id, 5);
        assert_eq!(created.current_participants, 0);
        assert!(!created.joined);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn filter_matches_category_query_and_membership() {
        let mut a = mission(1, 1, 5, true);
        a.category = String::from("Environment");
        a.title = String::from("Beach Cleanup");
        let b = mission(2, 5, 5, false);
        let registry = MissionRegistry::new(vec![a, b]);

        let filter = MissionFilter {
            category: Some(String::from("environment")),
            ..MissionFilter::default()
        };
        assert_eq!(registry.filtered(&filter).count(), 1);

        let filter = MissionFilter {
            query: String::from("beach"),
            ..MissionFilter::default()
        };
        assert_eq!(registry.filtered(&filter).count(), 1);

        let filter = MissionFilter {
            joined: JoinedFilter::OpenOnly,
            ..MissionFilter::default()
        };
        assert_eq!(registry.filtered(&filter).count(), 0);
        assert_eq!(registry.categories(), vec!["Environment", "Community"]);
    }

    #[test]
    fn fill_pct_is_clamped() {
        assert_eq!(mission(1, 5, 10, false).fill_pct(), 50);
        assert_eq!(mission(1, 12, 10, false).fill_pct(), 100);
        assert_eq!(mission(1, 0, 0, false).fill_pct(), 100);
        assert_eq!(mission(1, 3, 10, false).spots_left(), 7);
    }

    #[test]
    fn difficulty_orders_and_parses() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }
}
