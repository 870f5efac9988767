//! The aggregate seam: anything that raises domain events.

use super::EventLedger;

/// A domain object whose state changes may produce domain events.
///
/// Every aggregate carries its own [`EventLedger`]; the unit of work
/// enumerates tracked aggregates through this trait to drain their pending
/// events during commit. Events are appended only by the aggregate's own
/// state-changing operations.
pub trait Aggregate {
    /// Aggregate identity.
    fn id(&self) -> &str;

    /// The aggregate's pending-event buffer.
    fn ledger(&self) -> &EventLedger;

    /// Mutable access for raising and draining events.
    fn ledger_mut(&mut self) -> &mut EventLedger;
}
