use std::sync::mpsc::{self, Receiver};

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Announce the initial screen so middleware can attach its resources
    pub fn start(&mut self) {
        let event = Event::ScreenChanged {
            from: None,
            to: self.state.sequencer.screen_id(),
            visit: self.state.sequencer.visit(),
        };
        self.dispatch(Action::event(event));
    }

    /// Process an action, then everything it caused
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain_pending();
    }

    /// Process all queued actions (from middleware and background tasks)
    pub fn drain_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // Events are only for middleware observation
        if !should_reduce || matches!(action, Action::Event(_)) {
            return;
        }

        let from = self.state.sequencer.screen_id();
        let visit = self.state.sequencer.visit();

        self.state = reduce(self.state.clone(), &action);

        let sequencer = &self.state.sequencer;
        if sequencer.visit() != visit {
            self.dispatcher
                .dispatch(Action::event(Event::ScreenChanged {
                    from: Some(from),
                    to: sequencer.screen_id(),
                    visit: sequencer.visit(),
                }));
        }
    }
}
