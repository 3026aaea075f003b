//! Fetch-state wrapper shared by every page that talks to the backend.
//!
//! A [`RemoteResource`] tracks one remote value through idle, loading, ready
//! and failed states. Each trigger mints a fresh ticket from a monotonic
//! generation counter; a settlement is applied only when its ticket still
//! matches the current generation, so when two fetches overlap only the
//! newest one can ever reach the screen.

use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Lifecycle of one remote value.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One remote value plus the generation that ordered its latest trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResource<T> {
    pub epoch: u64,
    pub state: RemoteState<T>,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self {
            epoch: 0,
            state: RemoteState::Idle,
        }
    }
}

pub enum RemoteAction<T> {
    /// A new request was issued under `ticket`; the resource enters `Loading`
    /// and every older in-flight request becomes stale.
    Begin { ticket: u64 },
    /// A request finished. Ignored unless `ticket` is still the current
    /// generation.
    Settle {
        ticket: u64,
        outcome: Result<T, String>,
    },
    /// Back to `Idle`. Advances the generation so in-flight settlements land
    /// stale.
    Reset,
}

impl<T: Clone + PartialEq + 'static> Reducible for RemoteResource<T> {
    type Action = RemoteAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RemoteAction::Begin { ticket } => Rc::new(Self {
                epoch: ticket,
                state: RemoteState::Loading,
            }),
            RemoteAction::Settle { ticket, outcome } => {
                if ticket != self.epoch {
                    // Superseded by a newer trigger or a reset; drop it.
                    return self;
                }
                let state = match outcome {
                    Ok(value) => RemoteState::Ready(value),
                    Err(message) => RemoteState::Failed(message),
                };
                Rc::new(Self {
                    epoch: self.epoch,
                    state,
                })
            }
            RemoteAction::Reset => Rc::new(Self {
                epoch: self.epoch + 1,
                state: RemoteState::Idle,
            }),
        }
    }
}

/// Handle returned by [`use_remote`]. Cloning shares the underlying resource.
pub struct UseRemoteHandle<T: Clone + PartialEq + 'static> {
    resource: UseReducerHandle<RemoteResource<T>>,
    tickets: Rc<Cell<u64>>,
}

impl<T: Clone + PartialEq + 'static> Clone for UseRemoteHandle<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            tickets: self.tickets.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> UseRemoteHandle<T> {
    pub fn state(&self) -> &RemoteState<T> {
        &self.resource.state
    }

    /// Starts a new request generation and returns its ticket. The caller
    /// passes the ticket back through [`Self::settle`] when the request
    /// resolves.
    pub fn begin(&self) -> u64 {
        self.tickets.set(self.tickets.get() + 1);
        let ticket = self.tickets.get();
        self.resource.dispatch(RemoteAction::Begin { ticket });
        ticket
    }

    pub fn settle(&self, ticket: u64, outcome: Result<T, String>) {
        self.resource.dispatch(RemoteAction::Settle { ticket, outcome });
    }

    pub fn reset(&self) {
        // Keep the mint ahead of the advanced epoch so tickets stay unique.
        self.tickets.set(self.tickets.get() + 1);
        self.resource.dispatch(RemoteAction::Reset);
    }
}

/// Hook wrapping `use_reducer` around a [`RemoteResource`]. The ticket mint
/// lives in an `Rc<Cell<u64>>` so overlapping dispatches from async blocks
/// observe the live generation rather than a captured copy.
#[hook]
pub fn use_remote<T: Clone + PartialEq + 'static>() -> UseRemoteHandle<T> {
    let resource = use_reducer(RemoteResource::<T>::default);
    let tickets = use_memo((), |_| Cell::new(0u64));
    UseRemoteHandle { resource, tickets }
}
