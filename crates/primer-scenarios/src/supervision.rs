//! Four-step supervisory process.

use serde::Serialize;

use crate::sequence::StepSequence;

/// One stage of supervision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupervisoryStep {
    /// Stage name.
    pub title: &'static str,
    /// Who carries it out.
    pub actor: &'static str,
    /// What happens.
    pub description: &'static str,
    /// What the stage produces.
    pub outputs: &'static [&'static str],
}

static SUPERVISORY_PROCESS: [SupervisoryStep; 4] = [
    SupervisoryStep {
        title: "Off-site monitoring",
        actor: "Supervisory analysts",
        description: "Quarterly call reports and market data are screened for outliers and trends.",
        outputs: &["Early-warning flags", "Peer comparisons"],
    },
    SupervisoryStep {
        title: "On-site examination",
        actor: "Examination team",
        description: "Examiners review loan files, controls and models at the bank.",
        outputs: &["Findings", "Matters requiring attention"],
    },
    SupervisoryStep {
        title: "CAMELS rating",
        actor: "Examiner in charge",
        description: "Each component is rated 1 to 5 and a composite rating is assigned.",
        outputs: &["Component ratings", "Composite rating"],
    },
    SupervisoryStep {
        title: "Enforcement & follow-up",
        actor: "Supervisory agency",
        description: "Weak ratings lead to corrective action; progress is tracked until resolved.",
        outputs: &["Memoranda of understanding", "Cease-and-desist orders", "Follow-up reviews"],
    },
];

/// The supervisory-process steps.
#[must_use]
pub fn supervisory_process() -> StepSequence<'static, SupervisoryStep> {
    StepSequence::new("supervisory-process", &SUPERVISORY_PROCESS)
        .expect("supervisory-process table should always be non-empty")
}
