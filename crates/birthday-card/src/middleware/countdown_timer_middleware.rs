//! Countdown Timer Middleware
//!
//! Owns the only timer of the card. The timer lives exactly as long as a
//! countdown visit:
//! - On `Event::ScreenChanged` into the countdown, a tokio task is spawned
//!   that dispatches one `SequencerInput::Tick` per interval
//! - On any other `Event::ScreenChanged` (or quit), the running task is aborted
//!
//! Each tick carries the visit it was started for. A tick that was already
//! queued when the task got aborted is therefore recognised as stale by the
//! sequencer and cannot count down a later countdown visit.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::actions::{Action, Event, GlobalAction, SequencerInput};
use crate::dispatcher::Dispatcher;
use crate::domain_models::ScreenId;
use crate::middleware::Middleware;
use crate::state::{AppState, COUNTDOWN_START};

/// A running countdown task
struct CountdownTask {
    visit: u64,
    handle: JoinHandle<()>,
}

/// Countdown timer middleware - ties the countdown task to the countdown screen
pub struct CountdownTimerMiddleware {
    runtime: Handle,
    period: Duration,
    task: Option<CountdownTask>,
}

impl CountdownTimerMiddleware {
    pub fn new(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period,
            task: None,
        }
    }

    /// Visit of the countdown the running task ticks for
    #[cfg(test)]
    fn running_visit(&self) -> Option<u64> {
        self.task
            .as_ref()
            .filter(|task| !task.handle.is_finished())
            .map(|task| task.visit)
    }

    fn start(&mut self, visit: u64, dispatcher: Dispatcher) {
        self.stop();

        let period = self.period;
        let handle = self.runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            for _ in 0..COUNTDOWN_START {
                interval.tick().await;
                if !dispatcher.dispatch(Action::Sequencer(SequencerInput::Tick { visit })) {
                    break;
                }
            }
        });

        log::debug!("CountdownTimerMiddleware: started timer for visit {}", visit);
        self.task = Some(CountdownTask { visit, handle });
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.handle.abort();
            log::debug!(
                "CountdownTimerMiddleware: stopped timer for visit {}",
                task.visit
            );
        }
    }
}

impl Drop for CountdownTimerMiddleware {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Middleware for CountdownTimerMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::ScreenChanged { to, visit, .. }) => {
                // Leaving a screen always ends its timer
                self.stop();
                if *to == ScreenId::Countdown {
                    self.start(*visit, dispatcher.clone());
                }
                true
            }

            Action::Global(GlobalAction::Quit) => {
                self.stop();
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    const PERIOD: Duration = Duration::from_millis(20);

    fn setup() -> (CountdownTimerMiddleware, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let middleware = CountdownTimerMiddleware::new(Handle::current(), PERIOD);
        (middleware, Dispatcher::new(tx), rx)
    }

    fn entered(
        middleware: &mut CountdownTimerMiddleware,
        dispatcher: &Dispatcher,
        to: ScreenId,
        visit: u64,
    ) {
        let action = Action::event(Event::ScreenChanged {
            from: None,
            to,
            visit,
        });
        assert!(middleware.handle(&action, &AppState::default(), dispatcher));
    }

    fn ticks(rx: &Receiver<Action>) -> Vec<u64> {
        rx.try_iter()
            .map(|action| match action {
                Action::Sequencer(SequencerInput::Tick { visit }) => visit,
                other => panic!("unexpected action: {:?}", other),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_countdown_ticks_three_times() {
        let (mut middleware, dispatcher, rx) = setup();
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 4);
        assert_eq!(middleware.running_visit(), Some(4));

        tokio::time::sleep(PERIOD * 8).await;

        assert_eq!(ticks(&rx), vec![4, 4, 4]);
        assert_eq!(middleware.running_visit(), None);
    }

    #[tokio::test]
    async fn test_no_tick_before_first_period() {
        let (mut middleware, dispatcher, rx) = setup();
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 0);
        tokio::task::yield_now().await;
        assert!(ticks(&rx).is_empty());
    }

    #[tokio::test]
    async fn test_leaving_countdown_cancels_timer() {
        let (mut middleware, dispatcher, rx) = setup();
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 0);
        entered(&mut middleware, &dispatcher, ScreenId::Intro, 1);
        assert_eq!(middleware.running_visit(), None);

        tokio::time::sleep(PERIOD * 5).await;
        assert!(ticks(&rx).is_empty());
    }

    #[tokio::test]
    async fn test_restart_replaces_timer() {
        let (mut middleware, dispatcher, rx) = setup();
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 0);
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 6);
        assert_eq!(middleware.running_visit(), Some(6));

        tokio::time::sleep(PERIOD * 8).await;
        assert_eq!(ticks(&rx), vec![6, 6, 6]);
    }

    #[tokio::test]
    async fn test_quit_cancels_timer() {
        let (mut middleware, dispatcher, rx) = setup();
        entered(&mut middleware, &dispatcher, ScreenId::Countdown, 0);
        middleware.handle(
            &Action::Global(GlobalAction::Quit),
            &AppState::default(),
            &dispatcher,
        );

        tokio::time::sleep(PERIOD * 5).await;
        assert!(ticks(&rx).is_empty());
    }
}
