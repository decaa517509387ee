//! HTTP handler functions for the rate map API.

use actix_web::{HttpResponse, web};
use rate_map_dashboard::SessionError;
use rate_map_dashboard_models::Gesture;
use rate_map_rates_models::RateBand;
use rate_map_server_models::{ApiBand, ApiError, ApiHealth, ApiNational, ApiSession, ApiState};
use uuid::Uuid;

use crate::AppState;

fn session_not_found(id: &Uuid) -> HttpResponse {
    log::debug!("Unknown session {id}");
    HttpResponse::NotFound().json(ApiError::new(format!("Session not found: {id}")))
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/bands`
///
/// Returns the six rate bands in display order.
pub async fn bands() -> HttpResponse {
    let bands: Vec<ApiBand> = RateBand::all().iter().copied().map(ApiBand::from).collect();
    HttpResponse::Ok().json(bands)
}

/// `GET /api/national`
pub async fn national(state: web::Data<AppState>) -> HttpResponse {
    let years = state.store.year_range();
    HttpResponse::Ok().json(ApiNational {
        first_year: years.first(),
        last_year: years.last(),
        series: state.store.national_series().to_vec(),
    })
}

/// `GET /api/states`
///
/// Lists every state in the dataset, sorted by name.
pub async fn states(state: web::Data<AppState>) -> HttpResponse {
    let states: Vec<ApiState> = state
        .store
        .states()
        .iter()
        .filter_map(|name| state.store.state_series(name)?.first())
        .map(|record| ApiState {
            name: record.state.clone(),
            abbreviation: record.abbreviation.clone(),
            region: record.region,
            region_code: record.region.code().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(states)
}

/// `POST /api/sessions`
pub async fn create_session(state: web::Data<AppState>) -> HttpResponse {
    let (session_id, handle) = state.open_session();
    HttpResponse::Created().json(ApiSession {
        session_id,
        view: (*handle.snapshot()).clone(),
    })
}

/// `GET /api/sessions/{id}`
pub async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let id = path.into_inner();
    match state.session(&id) {
        Some(handle) => HttpResponse::Ok().json(&*handle.snapshot()),
        None => session_not_found(&id),
    }
}

/// `DELETE /api/sessions/{id}`
pub async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let id = path.into_inner();
    if state.close_session(&id) {
        HttpResponse::NoContent().finish()
    } else {
        session_not_found(&id)
    }
}

/// `POST /api/sessions/{id}/gestures`
///
/// Applies one gesture and returns the resulting view snapshot.
pub async fn post_gesture(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    gesture: web::Json<Gesture>,
) -> HttpResponse {
    let id = path.into_inner();
    let Some(handle) = state.session(&id) else {
        return session_not_found(&id);
    };

    match handle.dispatch(gesture.into_inner()).await {
        Ok(snapshot) => HttpResponse::Ok().json(&*snapshot),
        Err(e @ SessionError::Closed) => {
            log::error!("Session {id} failed to apply gesture: {e}");
            state.close_session(&id);
            HttpResponse::NotFound().json(ApiError::new(e.to_string()))
        }
    }
}

/// `GET /api/sessions/{id}/events`
///
/// Streams every published view snapshot as a server-sent event, starting
/// with the current one. The stream ends when the session closes.
pub async fn events(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let id = path.into_inner();
    let Some(handle) = state.session(&id) else {
        return session_not_found(&id);
    };
    let mut views = handle.subscribe();
    drop(handle);

    let stream = async_stream::stream! {
        loop {
            let snapshot = views.borrow_and_update().clone();
            match serde_json::to_string(&*snapshot) {
                Ok(json) => {
                    yield Ok::<_, actix_web::Error>(web::Bytes::from(format!("data: {json}\n\n")));
                }
                Err(e) => {
                    log::error!("Failed to serialize view for session {id}: {e}");
                    break;
                }
            }
            if views.changed().await.is_err() {
                log::debug!("Event stream for session {id} finished");
                break;
            }
        }
    };

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use rate_map_dashboard::DEFAULT_IDLE_TIMEOUT;
    use rate_map_dashboard_models::ViewSnapshot;
    use rate_map_dataset::load_from_reader;
    use rate_map_rates_models::YearRange;
    use serde_json::Value;

    use super::*;
    use crate::configure_api;

    const CSV: &str = "\
State / [Region],1999,2000,2001,2002
Texas [WSC],9.5,10.0,11.0,12.0
Oklahoma [WSC],14.0,15.0,16.0,17.5
Alaska [P],20.0,22.0,25.5,31.0
U.S.A.,10.0,10.4,10.7,11.0
";

    fn app_state() -> web::Data<AppState> {
        let years = YearRange::new(2000, 2002).unwrap();
        let store = load_from_reader(CSV.as_bytes(), years).unwrap();
        web::Data::new(AppState::new(Arc::new(store), DEFAULT_IDLE_TIMEOUT))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure_api)).await
        };
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let state = app_state();
        let app = app!(state);
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn bands_in_display_order() {
        let state = app_state();
        let app = app!(state);
        let req = test::TestRequest::get().uri("/api/bands").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let labels: Vec<_> = body.iter().map(|b| b["label"].as_str().unwrap()).collect();
        assert_eq!(labels, vec!["<10", "10-15", "15-20", "20-25", "25-30", ">30"]);
    }

    #[actix_web::test]
    async fn states_and_national_come_from_the_store() {
        let state = app_state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/states").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = body.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Alaska", "Oklahoma", "Texas"]);
        assert_eq!(body[2]["abbreviation"], "TX");
        assert_eq!(body[2]["region"], "West South Central");
        assert_eq!(body[2]["regionCode"], "WSC");
        assert_eq!(body[0]["regionCode"], "P");

        let req = test::TestRequest::get().uri("/api/national").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["firstYear"], 2000);
        assert_eq!(body["series"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn session_lifecycle() {
        let state = app_state();
        let app = app!(state);

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["sessionId"].as_str().unwrap().to_string();
        assert_eq!(body["view"]["revision"], 0);
        assert_eq!(body["view"]["view"]["map"]["year"], 2002);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/gestures"))
            .set_json(serde_json::json!({ "type": "selectState", "state": "Texas" }))
            .to_request();
        let snapshot: ViewSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot.revision, 1);
        assert_eq!(snapshot.view.rank_text, "Rank in 2002: #3 of 3");

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/gestures"))
            .set_json(serde_json::json!({
                "type": "mapClick",
                "payloads": [{ "kind": "location", "value": "ZZ" }]
            }))
            .to_request();
        let snapshot: ViewSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot.revision, 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        let snapshot: ViewSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot.revision, 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.session_count(), 0);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains(&id));
    }

    #[actix_web::test]
    async fn unknown_session_is_not_found() {
        let state = app_state();
        let app = app!(state);
        let id = Uuid::new_v4();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{id}/gestures"))
            .set_json(serde_json::json!({ "type": "play" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/sessions/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn events_stream_ends_with_the_session() {
        let state = app_state();
        let app = app!(state);
        let (id, handle) = state.open_session();
        handle
            .dispatch(Gesture::SelectYear { year: 2000 })
            .await
            .unwrap();
        drop(handle);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{id}/events"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/event-stream"
        );

        assert!(state.close_session(&id));
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("data: "));
        assert!(text.contains("\"revision\":1"));
        assert!(text.ends_with("\n\n"));
    }
}
