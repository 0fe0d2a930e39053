//! Async sequencing of begin → outbound call → settle

use super::{RequestId, Settlement, Ticket};
use crate::shared::error::ValidationError;
use leptos::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Somewhere a workflow lives between two event-loop turns.
///
/// Returns `None` when the state is gone (the owning view was disposed).
pub trait StateCell<S> {
    fn with_mut<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn with_mut<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        self.try_update(f)
    }
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn with_mut<T>(&self, f: impl FnOnce(&mut S) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Drive one request through a workflow held in `cell`.
///
/// `begin` validates and dispatches, `call` performs the I/O with the ticket
/// payload, `settle` folds the outcome back in. The state is only borrowed
/// inside `begin` and `settle`, so other actions can run while the call is
/// in flight.
pub async fn run_request<S, C, P, T, Fut>(
    cell: &C,
    begin: impl FnOnce(&mut S) -> Result<Ticket<P>, ValidationError>,
    call: impl FnOnce(P) -> Fut,
    settle: impl FnOnce(&mut S, RequestId, T) -> Settlement,
) -> Result<Settlement, ValidationError>
where
    C: StateCell<S>,
    Fut: Future<Output = T>,
{
    let Some(begun) = cell.with_mut(begin) else {
        return Ok(Settlement::Stale);
    };
    let Ticket { id, payload } = begun?;

    let outcome = call(payload).await;

    Ok(cell
        .with_mut(|state| settle(state, id, outcome))
        .unwrap_or(Settlement::Stale))
}
