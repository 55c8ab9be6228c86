use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
}

#[derive(Default)]
struct MockState {
    responses: HashMap<String, (u16, Value)>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<MockState>>;

/// Stand-in for a third-party API (or a backend service behind the
/// gateway): answers every path with a canned JSON body and records what
/// it was asked.
#[derive(Clone)]
pub struct MockUpstream {
    pub address: String,
    state: SharedState,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let state: SharedState = Arc::new(Mutex::new(MockState::default()));
        let state_data = web::Data::new(state.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state_data.clone())
                .default_service(web::to(answer))
        })
        .workers(1)
        .listen(listener)
        .expect("Failed to bind mock upstream")
        .run();
        let _ = tokio::spawn(server);

        Self {
            address: format!("http://127.0.0.1:{}", port),
            state,
        }
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.respond_with_status(path, 200, body);
    }

    pub fn respond_with_status(&self, path: &str, status: u16, body: Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

async fn answer(req: HttpRequest, state: web::Data<SharedState>) -> HttpResponse {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|query| query.into_inner())
        .unwrap_or_default();
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        path: req.path().to_string(),
        query,
        api_key: header("X-RapidAPI-Key"),
        api_host: header("X-RapidAPI-Host"),
    });

    match state.responses.get(req.path()) {
        Some((status, body)) => {
            HttpResponse::build(StatusCode::from_u16(*status).unwrap()).json(body)
        }
        None => HttpResponse::NotFound().json(json!({ "message": "no canned response" })),
    }
}
