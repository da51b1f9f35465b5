// Third-party licenses module
// Provides the license texts and attribution metadata compiled into the binary

pub mod v8;

use serde::Serialize;

/// Unified representation of one bundled third-party license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseRecord {
    pub project: &'static str,
    pub filename: &'static str,
    pub text: &'static str,
}

impl std::fmt::Display for LicenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.project, self.filename)?;
        writeln!(f)?;
        write!(f, "{}", self.text)
    }
}

/// Every license bundled with the application, in stable order
pub const ALL: &[LicenseRecord] = &[v8::LICENSE];

/// Look up a bundled license by its project identifier
pub fn find(project: &str) -> Option<&'static LicenseRecord> {
    ALL.iter().find(|record| record.project == project)
}

/// License list entry for the attribution UI (full text omitted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseSummary {
    pub project: String,
    pub filename: String,
    pub text_len: usize,
}

/// Get summaries for all bundled licenses
pub fn summaries() -> Vec<LicenseSummary> {
    ALL.iter()
        .map(|record| LicenseSummary {
            project: record.project.to_string(),
            filename: record.filename.to_string(),
            text_len: record.text.len(),
        })
        .collect()
}
