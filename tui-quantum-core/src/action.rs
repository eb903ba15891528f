//! Action trait for values emitted by components

use std::fmt::Debug;

/// Marker trait for actions emitted by components and collected by a
/// [`TestHarness`](crate::testing::TestHarness)
///
/// Actions should be:
/// - Clone: Actions may be logged, replayed, or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
