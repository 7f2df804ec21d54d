//! The state-store dispatch boundary.

/// The interface the interactor needs from the application's state store.
///
/// The store is an external collaborator: it owns state and reducers, the
/// core only hands it actions. `dispatch` is synchronous from the caller's
/// point of view and must apply actions in the order a single caller
/// dispatches them; ordering across concurrent callers is the store's
/// business, not this contract's.
///
/// Actions are opaque here — the interactor's
/// [`actions`](crate::HttpInteractor::actions) hook produces them, the
/// store consumes them.
pub trait Store: Send + Sync {
    /// The action type this store accepts.
    type Action;

    /// Apply one action to the store.
    fn dispatch(&self, action: Self::Action);
}
