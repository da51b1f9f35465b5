// Third-party license metadata library
// Everything exposed here is compile-time constant data; there is no runtime
// state and no operation that can fail.

pub mod licenses;

pub use licenses::{find, summaries, LicenseRecord, LicenseSummary, ALL};
