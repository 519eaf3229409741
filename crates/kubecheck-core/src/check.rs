use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::resource::Resource;
use crate::result::{CheckResult, CheckUsage};

/// An evaluatable health check.
///
/// Instances hold unsynchronized state (the latest snapshot), so `update`
/// and `execute` on the same instance must be serialized by the caller.
/// Distinct instances share nothing and may run on separate threads.
pub trait Check: Send {
    /// Identity this check stamps on its results.
    fn config(&self) -> &CheckConfig;

    /// Human-readable description and accepted options.
    fn usage(&self) -> CheckUsage;

    /// Replace the current snapshot wholesale.
    ///
    /// Returns [`CheckError::KindMismatch`] when handed a kind the check did
    /// not register for; the previous snapshot is kept in that case.
    fn update(&mut self, resource: Resource) -> Result<(), CheckError>;

    /// Classify the current snapshot. Does not mutate the check.
    fn execute(&self) -> Result<CheckResult, CheckError>;
}
