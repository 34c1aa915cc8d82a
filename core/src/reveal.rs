use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObservedSection {
    About,
    ProjectCard(usize),
}

impl ObservedSection {
    /// Value of the `data-observe` attribute that marks the section in the DOM.
    pub fn attr(self) -> String {
        match self {
            ObservedSection::About => "about".to_string(),
            ObservedSection::ProjectCard(index) => format!("project-{index}"),
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed == "about" {
            return Some(ObservedSection::About);
        }
        trimmed
            .strip_prefix("project-")
            .and_then(|index| index.parse::<usize>().ok())
            .map(ObservedSection::ProjectCard)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillBarPhase {
    /// Bars sit at their target width, before the section was ever seen.
    #[default]
    Idle,
    /// Bars collapsed to zero, waiting for the restore task.
    Collapsed,
    Filled,
}

impl SkillBarPhase {
    pub fn width_css(self, target: &str) -> String {
        match self {
            SkillBarPhase::Collapsed => "0".to_string(),
            SkillBarPhase::Idle | SkillBarPhase::Filled => target.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    SkillBars,
}

/// One-shot intersection effects: each section plays its effect the first
/// time it becomes visible and never again for the page lifetime.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    played: HashSet<ObservedSection>,
    skill_bars: SkillBarPhase,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_bars(&self) -> SkillBarPhase {
        self.skill_bars
    }

    pub fn on_intersection(
        &mut self,
        section: ObservedSection,
        is_intersecting: bool,
        ratio: f64,
        threshold: f64,
    ) -> Option<RevealTrigger> {
        if !is_intersecting || ratio < threshold {
            return None;
        }
        if !self.played.insert(section) {
            return None;
        }
        match section {
            ObservedSection::About => {
                self.skill_bars = SkillBarPhase::Collapsed;
                Some(RevealTrigger::SkillBars)
            }
            ObservedSection::ProjectCard(_) => None,
        }
    }

    pub fn restore_skill_bars(&mut self) -> bool {
        if self.skill_bars != SkillBarPhase::Collapsed {
            return false;
        }
        self.skill_bars = SkillBarPhase::Filled;
        true
    }
}
