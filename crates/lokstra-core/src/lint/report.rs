use crate::lint::LintIssue;

/// Ordered accumulation of every issue found during one scan.
///
/// A scan always runs to completion; issues are appended as found and the
/// final tally is the pass/fail signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    issues: Vec<LintIssue>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: LintIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = LintIssue>) {
        self.issues.extend(issues);
    }

    pub fn issues(&self) -> &[LintIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `true` when the scan found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IntoIterator for LintReport {
    type Item = LintIssue;
    type IntoIter = std::vec::IntoIter<LintIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
