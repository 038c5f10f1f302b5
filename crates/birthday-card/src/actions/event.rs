//! Event types
//!
//! Events represent facts that have occurred and are broadcast to the
//! middleware chain. Reducers never see them.
//!
//! Events use past tense names indicating something has happened.

use crate::domain_models::ScreenId;

/// Events that re-enter the middleware chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A screen became active.
    ///
    /// `from` is `None` for the very first screen of the session. `visit`
    /// identifies this stay on the screen; resources tied to a screen's
    /// lifetime use it to recognise stale work.
    ScreenChanged {
        from: Option<ScreenId>,
        to: ScreenId,
        visit: u64,
    },
}
