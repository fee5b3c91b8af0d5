use crate::common::{DomainEvent, DomainResult};
use serde::Serialize;

pub trait AggregateRoot: Send + Sync {
    type Event: DomainEvent + Serialize;

    fn aggregate_id(&self) -> &str;
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    fn uncommitted_events(&self) -> &[Self::Event];
    fn mark_events_as_committed(&mut self);
    fn add_event(&mut self, event: Self::Event);

    /// Record an event and fold it into the aggregate.
    fn record(&mut self, event: Self::Event) -> DomainResult<()> {
        self.apply(&event)?;
        self.add_event(event);
        Ok(())
    }
}
