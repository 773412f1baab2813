use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::error::{JourneyError, JourneyResult};
use crate::types::{Badge, Phase, Role, Step};

/// Immutable catalog of phases, roles, and steps, built once at startup.
///
/// Declaration order is load-bearing: a phase's position in `phases` is its
/// column index and a role's position in `roles` is its lane index. Both
/// index tables are computed here and never recomputed per call.
#[derive(Debug, Clone)]
pub struct Catalog {
    phases: Vec<Phase>,
    roles: Vec<Role>,
    steps: Vec<Step>,
    phase_index: HashMap<String, usize>,
    role_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates the given catalog data and builds the derived index tables.
    ///
    /// Rejects duplicate phase/role/step ids, step references that do not
    /// resolve, and role lane indexes that disagree with declaration order.
    pub fn new(phases: Vec<Phase>, roles: Vec<Role>, steps: Vec<Step>) -> JourneyResult<Self> {
        let mut phase_index: HashMap<String, usize> = HashMap::new();
        for (index, phase) in phases.iter().enumerate() {
            if phase_index.insert(phase.id.clone(), index).is_some() {
                return Err(JourneyError::Validation(format!(
                    "Duplicate phase id: {}",
                    phase.id
                )));
            }
        }

        let mut role_index: HashMap<String, usize> = HashMap::new();
        for (index, role) in roles.iter().enumerate() {
            if role_index.insert(role.id.clone(), index).is_some() {
                return Err(JourneyError::Validation(format!(
                    "Duplicate role id: {}",
                    role.id
                )));
            }
            if role.lane != index {
                return Err(JourneyError::Validation(format!(
                    "Role {} declares lane {} but is declared at position {}",
                    role.id, role.lane, index
                )));
            }
        }

        let mut seen_steps: HashSet<&str> = HashSet::new();
        for step in &steps {
            if !seen_steps.insert(&step.id) {
                return Err(JourneyError::Validation(format!(
                    "Duplicate step id: {}",
                    step.id
                )));
            }
            if !role_index.contains_key(&step.role) {
                return Err(JourneyError::Validation(format!(
                    "Step {} references unknown role {}",
                    step.id, step.role
                )));
            }
            if !phase_index.contains_key(&step.phase) {
                return Err(JourneyError::Validation(format!(
                    "Step {} references unknown phase {}",
                    step.id, step.phase
                )));
            }
        }

        info!(
            phases = phases.len(),
            roles = roles.len(),
            steps = steps.len(),
            "Catalog validated"
        );

        Ok(Self {
            phases,
            roles,
            steps,
            phase_index,
            role_index,
        })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Column index of a phase, by id.
    pub fn phase_index(&self, id: &str) -> Option<usize> {
        self.phase_index.get(id).copied()
    }

    /// Lane index of a role, by id.
    pub fn role_index(&self, id: &str) -> Option<usize> {
        self.role_index.get(id).copied()
    }

    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phase_index(id).map(|i| &self.phases[i])
    }

    pub fn role(&self, id: &str) -> Option<&Role> {
        self.role_index(id).map(|i| &self.roles[i])
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The embedded "Selected MVP" au-pair matching journey: seven phases
    /// from onboarding to handover, four actor lanes, nineteen steps.
    pub fn selected_mvp() -> JourneyResult<Self> {
        let phases = vec![
            phase("onb", "Onboarding", "#2962FF"),
            phase("int", "Family Interview", "#7E57C2"),
            phase("sl", "Shortlist (5)", "#00ACC1"),
            phase("p1", "P1 (5/24h)", "#43A047"),
            phase("p2", "P2 (3⇒1)", "#FB8C00"),
            phase("off", "Offer", "#EF5350"),
            phase("hov", "Handover", "#8D6E63"),
        ];

        let roles = vec![
            role("AP", "AuPair", 0, "#12c2e9"),
            role("HF", "Family", 1, "#ff77e9"),
            role("OPS", "Ops", 2, "#b388ff"),
            role("CORE", "Core (Mira)", 3, "#6ee7ff"),
        ];

        let steps = vec![
            // Onboarding
            Step::new(
                "s1",
                "AP",
                "onb",
                "Register + Consent",
                "Create account, locale, push-token.",
            ),
            Step::new(
                "s2",
                "AP",
                "onb",
                "Profile + Availability",
                "Wizard for basics and timing.",
            ),
            Step::new("s3", "AP", "onb", "ID & Liveness", "Verification pass/retry.")
                .with_badge(Badge::Trust),
            Step::new(
                "s4",
                "HF",
                "onb",
                "Onboard + House Guide",
                "Muss/Nice-to-have, photos, rules.",
            ),
            Step::new(
                "s5",
                "CORE",
                "onb",
                "Trust Gate",
                "Store verification, consent, PII boundaries.",
            )
            .small(),
            // Interview (family)
            Step::new(
                "s6",
                "HF",
                "int",
                "Mira chat interview",
                "Guided Q&A; 25–30 min.",
            )
            .with_badge(Badge::Ai),
            Step::new(
                "s7",
                "CORE",
                "int",
                "Family Summary (6 lines)",
                "Explainable digest for matching.",
            )
            .with_badge(Badge::Ai),
            // Shortlist (5)
            Step::new(
                "s8",
                "CORE",
                "sl",
                "Matching + “Why it fits”",
                "Hard filter + score + explain.",
            )
            .with_badge(Badge::Ai),
            Step::new(
                "s9",
                "OPS",
                "sl",
                "Curation 20→5",
                "Quality check; release drop.",
            ),
            Step::new(
                "s10",
                "HF",
                "sl",
                "Shortlist drop (48h)",
                "Review candidates; timer starts.",
            )
            .with_badge(Badge::Window48h),
            // P1 (5/24h)
            Step::new("s11", "AP", "p1", "Apply (24h)", "One-tap apply per slot.")
                .with_badge(Badge::Window24h),
            Step::new(
                "s12",
                "CORE",
                "p1",
                "Timer + Nudges",
                "Quiet hours aware; ghost-shield.",
            )
            .small(),
            // P2 (3⇒1)
            Step::new("s13", "HF", "p2", "Select Top-3", "Compare cards + notes."),
            Step::new(
                "s14",
                "CORE",
                "p2",
                "Recommendation",
                "Evidence-based guidance.",
            )
            .with_badge(Badge::Ai),
            Step::new("s15", "HF", "p2", "Decide 3⇒1", "Commit choice."),
            // Offer
            Step::new("s16", "HF", "off", "Send Offer", "Deadline included."),
            Step::new("s17", "AP", "off", "Accept Offer", "Match confirmed."),
            // Handover
            Step::new(
                "s18",
                "CORE",
                "hov",
                "Handover Checklists",
                "Docs + tasks for both sides.",
            ),
            Step::new(
                "s19",
                "OPS",
                "hov",
                "Partner/Agency Handover",
                "Export package to partner.",
            ),
        ];

        Self::new(phases, roles, steps)
    }
}

fn phase(id: &str, name: &str, color: &str) -> Phase {
    Phase {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn role(id: &str, name: &str, lane: usize, color: &str) -> Role {
    Role {
        id: id.to_string(),
        name: name.to_string(),
        lane,
        color: color.to_string(),
    }
}
