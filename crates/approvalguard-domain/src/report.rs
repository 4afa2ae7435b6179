use approvalguard_types::{RequirementResult, RequirementStatus, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub approvals: u32,
    pub changed_files: u32,
    /// One entry per requirement, in configured order. Empty when skipped.
    pub results: Vec<RequirementResult>,
}

impl DomainReport {
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementResult> {
        self.results
            .iter()
            .filter(|r| r.status == RequirementStatus::Unmet)
    }
}
