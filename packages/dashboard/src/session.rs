//! The per-session update loop.
//!
//! Each session owns one [`InteractionState`] inside a spawned task. Gestures
//! and animation ticks are applied one at a time in arrival order; anything
//! that queued up while a batch was being applied is folded into the same
//! batch so only one view is derived for it. Published views carry a
//! revision that only ever increases.
//!
//! A session that has seen no gesture for its idle timeout and has no view
//! subscriber left ends on its own, playing or not.

use std::{future, sync::Arc, time::Duration};

use rate_map_dashboard_models::{Gesture, ViewSnapshot};
use rate_map_dataset::DatasetStore;
use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{Instant, sleep_until},
};

use crate::{interaction::InteractionState, views::derive_view};

/// How long a session without gestures or subscribers stays alive.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session closed")]
    Closed,
}

/// An input to the mutation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Gesture(Gesture),
    Tick,
}

/// Interaction state plus the revision counter, without any scheduling.
#[derive(Debug)]
pub struct Session {
    store: Arc<DatasetStore>,
    state: InteractionState,
    revision: u64,
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<DatasetStore>) -> Self {
        let state = InteractionState::new(&store);
        Self {
            store,
            state,
            revision: 0,
        }
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one message, bumping the revision if anything changed.
    pub fn apply(&mut self, message: &Message) -> bool {
        let changed = match message {
            Message::Gesture(gesture) => {
                log::debug!("apply: gesture={gesture:?}");
                self.state.apply(&self.store, gesture)
            }
            Message::Tick => {
                log::trace!("apply: tick year={}", self.state.selected_year());
                self.state.tick(&self.store)
            }
        };
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Derives the view for the current revision.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            revision: self.revision,
            view: derive_view(&self.store, &self.state),
        }
    }

    fn tick_period(&self) -> Option<Duration> {
        let clock = self.state.animation();
        clock
            .is_running()
            .then(|| Duration::from_millis(u64::from(clock.speed_ms())))
    }
}

enum Command {
    Gesture {
        gesture: Gesture,
        reply: oneshot::Sender<Arc<ViewSnapshot>>,
    },
    Shutdown,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gesture { gesture, .. } => f.debug_tuple("Gesture").field(gesture).finish(),
            Self::Shutdown => f.write_str("Shutdown"),
        }
    }
}

enum Incoming {
    Command(Command),
    Tick,
    Idle,
}

/// Client side of a running session. Cheap to clone.
///
/// All clones share one view receiver, so the loop can tell handles apart
/// from [`SessionHandle::subscribe`] receivers.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    views: Arc<watch::Receiver<Arc<ViewSnapshot>>>,
}

impl SessionHandle {
    /// Applies `gesture` and returns the view published after it (or the
    /// current view if the gesture changed nothing).
    ///
    /// # Errors
    ///
    /// * If the session has shut down
    pub async fn dispatch(&self, gesture: Gesture) -> Result<Arc<ViewSnapshot>, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Gesture { gesture, reply })
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }

    /// The most recently published view.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ViewSnapshot> {
        self.views.borrow().clone()
    }

    /// A receiver that observes every published view.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewSnapshot>> {
        (*self.views).clone()
    }

    /// Stops the session. Queued gestures after this are dropped.
    pub fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).is_err() {
            log::debug!("shutdown: session already closed");
        }
    }

    /// Whether the loop has ended, by shutdown or by idling out.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Spawns the update loop for a fresh session on the current runtime.
///
/// The loop ends after `idle_timeout` without a gesture once nothing but
/// handles is watching its views.
#[must_use]
pub fn spawn_session(store: Arc<DatasetStore>, idle_timeout: Duration) -> SessionHandle {
    let session = Session::new(store);
    let (view_tx, views) = watch::channel(Arc::new(session.snapshot()));
    let (commands, rx) = mpsc::unbounded_channel();

    tokio::spawn(run(session, rx, view_tx, idle_timeout));

    SessionHandle {
        commands,
        views: Arc::new(views),
    }
}

/// Receivers besides the one shared by every [`SessionHandle`].
fn subscriber_count(view_tx: &watch::Sender<Arc<ViewSnapshot>>) -> usize {
    view_tx.receiver_count().saturating_sub(1)
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}

async fn run(
    mut session: Session,
    mut rx: mpsc::UnboundedReceiver<Command>,
    view_tx: watch::Sender<Arc<ViewSnapshot>>,
    idle_timeout: Duration,
) {
    let mut next_tick: Option<Instant> = None;
    let mut idle_deadline = Instant::now() + idle_timeout;

    loop {
        let first = tokio::select! {
            command = rx.recv() => match command {
                Some(command) => Incoming::Command(command),
                None => break,
            },
            () = wait_until(next_tick) => Incoming::Tick,
            () = sleep_until(idle_deadline) => Incoming::Idle,
        };

        if matches!(first, Incoming::Idle) {
            let subscribers = subscriber_count(&view_tx);
            if subscribers == 0 {
                log::info!(
                    "Session idle for {}s with no subscribers; closing",
                    idle_timeout.as_secs()
                );
                break;
            }
            log::trace!("run: idle deadline passed with {subscribers} subscriber(s)");
            idle_deadline = Instant::now() + idle_timeout;
            continue;
        }

        let mut changed = false;
        let mut replies = vec![];
        let mut shutdown = false;
        let mut pending = Some(first);

        while let Some(incoming) = pending.take() {
            match incoming {
                Incoming::Tick => {
                    changed |= session.apply(&Message::Tick);
                    next_tick = None;
                }
                Incoming::Command(Command::Gesture { gesture, reply }) => {
                    changed |= session.apply(&Message::Gesture(gesture));
                    replies.push(reply);
                    idle_deadline = Instant::now() + idle_timeout;
                }
                Incoming::Command(Command::Shutdown) => {
                    shutdown = true;
                    break;
                }
                Incoming::Idle => {}
            }

            // A running clock keeps its pending deadline across speed
            // changes; the new period applies from the next tick on.
            next_tick = match session.tick_period() {
                Some(period) => next_tick.or_else(|| Some(Instant::now() + period)),
                None => None,
            };

            pending = rx.try_recv().ok().map(Incoming::Command);
        }

        let published = if changed {
            let snapshot = Arc::new(session.snapshot());
            view_tx.send_replace(snapshot.clone());
            snapshot
        } else {
            view_tx.borrow().clone()
        };
        for reply in replies {
            if reply.send(published.clone()).is_err() {
                log::trace!("run: gesture caller went away before the reply");
            }
        }

        if shutdown {
            break;
        }
    }

    log::debug!("run: session loop finished at revision {}", session.revision());
}
