#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the rate map dashboard.
//!
//! Loads the rate table once at startup and shares it read-only across all
//! sessions. Each session owns its own interaction state behind a
//! [`SessionHandle`]; renderers push gestures over REST and follow view
//! updates (animation ticks included) over SSE from
//! `/api/sessions/{id}/events`. The frontend build is served from
//! `app/dist`.
//!
//! Sessions end on their own once idle with no event stream attached; a
//! background reaper drops their registry entries.

pub mod config;
mod handlers;
pub mod interactive;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use rate_map_dashboard::SessionHandle;
use rate_map_dataset::{DatasetError, DatasetStore, load_from_path};
use rate_map_rates_models::YearRange;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use uuid::Uuid;

pub use config::ServerConfig;

/// How often closed sessions are swept out of the registry.
const REAP_INTERVAL: Duration = Duration::from_secs(60);

/// Shared application state.
pub struct AppState {
    /// The rate table, read-only after startup.
    pub store: Arc<DatasetStore>,
    /// Live sessions by id.
    sessions: Mutex<BTreeMap<Uuid, SessionHandle>>,
    session_idle: Duration,
}

impl AppState {
    /// `session_idle` is how long a session without gestures or event
    /// streams survives.
    #[must_use]
    pub fn new(store: Arc<DatasetStore>, session_idle: Duration) -> Self {
        Self {
            store,
            sessions: Mutex::new(BTreeMap::new()),
            session_idle,
        }
    }

    fn sessions(&self) -> MutexGuard<'_, BTreeMap<Uuid, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a session and registers it under a fresh id.
    #[must_use]
    pub fn open_session(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = rate_map_dashboard::spawn_session(self.store.clone(), self.session_idle);
        self.sessions().insert(id, handle.clone());
        log::info!("Opened session {id}");
        (id, handle)
    }

    /// Looks up a live session. A session that has idled out is dropped
    /// from the registry here.
    #[must_use]
    pub fn session(&self, id: &Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions();
        let handle = sessions.get(id)?.clone();
        if handle.is_closed() {
            sessions.remove(id);
            log::info!("Session {id} expired");
            return None;
        }
        Some(handle)
    }

    /// Stops and forgets a session. Returns whether it existed.
    pub fn close_session(&self, id: &Uuid) -> bool {
        let Some(handle) = self.sessions().remove(id) else {
            return false;
        };
        handle.shutdown();
        log::info!("Closed session {id}");
        true
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions().len()
    }

    /// Forgets every session whose loop has ended. Returns how many went.
    pub fn reap_closed(&self) -> usize {
        let reaped = {
            let mut sessions = self.sessions();
            let before = sessions.len();
            sessions.retain(|_, handle| !handle.is_closed());
            before - sessions.len()
        };
        if reaped > 0 {
            log::info!(
                "Reaped {reaped} expired session(s), {} live",
                self.session_count()
            );
        }
        reaped
    }
}

/// Sweeps closed sessions out of `state` every `every` until the runtime
/// stops.
fn spawn_reaper(state: web::Data<AppState>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            state.reap_closed();
        }
    })
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/bands", web::get().to(handlers::bands))
            .route("/national", web::get().to(handlers::national))
            .route("/states", web::get().to(handlers::states))
            .route("/sessions", web::post().to(handlers::create_session))
            .route("/sessions/{id}", web::get().to(handlers::get_session))
            .route("/sessions/{id}", web::delete().to(handlers::delete_session))
            .route(
                "/sessions/{id}/gestures",
                web::post().to(handlers::post_gesture),
            )
            .route("/sessions/{id}/events", web::get().to(handlers::events)),
    );
}

/// Loads the rate table over the default year range.
///
/// # Errors
///
/// * If the dataset cannot be read or fails validation
pub fn load_store(config: &ServerConfig) -> Result<Arc<DatasetStore>, DatasetError> {
    load_from_path(&config.data_path, YearRange::default()).map(Arc::new)
}

/// Starts the rate map API server.
///
/// Loads the dataset and starts the Actix-Web HTTP server. This is a
/// regular async function; the caller is responsible for providing the
/// async runtime (e.g. via [`actix_rt::System`]).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the dataset fails to load, or if
/// the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let store = load_store(&config).map_err(|e| {
        log::error!("Failed to load dataset: {e}");
        std::io::Error::other(e)
    })?;

    let ServerConfig {
        bind_addr,
        port,
        session_idle,
        ..
    } = config;
    let state = web::Data::new(AppState::new(store, session_idle));
    let reaper = spawn_reaper(state.clone(), REAP_INTERVAL);

    log::info!("Starting server on {bind_addr}:{port}");

    let result = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await;

    reaper.abort();
    result
}

#[cfg(test)]
mod tests {
    use rate_map_dashboard_models::Gesture;
    use rate_map_dataset::load_from_reader;

    use super::*;

    const CSV: &str = "\
State / [Region],2000,2001
Texas [WSC],10.0,11.0
Alaska [P],20.0,22.0
U.S.A.,10.0,10.4
";

    fn app_state(session_idle: Duration) -> web::Data<AppState> {
        let years = YearRange::new(2000, 2001).unwrap();
        let store = load_from_reader(CSV.as_bytes(), years).unwrap();
        web::Data::new(AppState::new(Arc::new(store), session_idle))
    }

    #[tokio::test(start_paused = true)]
    async fn orphaned_playing_session_leaves_the_registry() {
        let state = app_state(Duration::from_secs(60));
        let (id, handle) = state.open_session();
        handle.dispatch(Gesture::Play).await.unwrap();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(state.session(&id).is_some());

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(state.session(&id).is_none());
        assert_eq!(state.session_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reaper_sweeps_expired_sessions() {
        let state = app_state(Duration::from_secs(60));
        let (_, idle) = state.open_session();
        let (busy_id, busy) = state.open_session();
        idle.dispatch(Gesture::Play).await.unwrap();
        drop(idle);
        let _events = busy.subscribe();

        let reaper = spawn_reaper(state.clone(), Duration::from_secs(10));
        tokio::time::sleep(Duration::from_secs(75)).await;

        assert_eq!(state.session_count(), 1);
        assert!(state.session(&busy_id).is_some());
        reaper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn reap_closed_counts_removed_sessions() {
        let state = app_state(Duration::from_secs(60));
        let (a, _) = state.open_session();
        let (_, b) = state.open_session();
        assert_eq!(state.reap_closed(), 0);

        assert!(state.close_session(&a));
        b.shutdown();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(state.reap_closed(), 1);
        assert_eq!(state.session_count(), 0);
    }
}
