//! In-process Product API for store tests
//!
//! A tiny axum server on 127.0.0.1:0 that keeps products in memory and
//! counts requests per route, so tests can assert on what actually went
//! over the wire.

use crate::product::Product;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Reply = (StatusCode, Json<Value>);

#[derive(Default)]
struct FixtureState {
    products: Vec<Product>,
    next_id: u64,
    requests: HashMap<&'static str, usize>,
    /// Every route answers with this status (and optional message) when set
    failure: Option<(u16, Option<String>)>,
    /// Replaces the GET /product body when set
    list_body: Option<Value>,
}

impl FixtureState {
    fn record(&mut self, route: &'static str) -> Option<Reply> {
        *self.requests.entry(route).or_default() += 1;

        self.failure.as_ref().map(|(status, message)| {
            let body = match message {
                Some(m) => json!({ "message": m }),
                None => json!({}),
            };
            (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(body),
            )
        })
    }

    fn insert(&mut self, name: &str, description: &str, price: Option<f64>) -> Product {
        self.next_id += 1;
        let product = Product {
            id: format!("p{}", self.next_id),
            name: name.to_string(),
            description: description.to_string(),
            price,
        };
        self.products.push(product.clone());
        product
    }
}

fn not_found() -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Product not found" })),
    )
}

pub(crate) struct ApiFixture {
    pub base_url: String,
    state: Arc<Mutex<FixtureState>>,
}

impl ApiFixture {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(FixtureState::default()));

        let app = Router::new()
            .route("/product", get(list_products).post(create_product))
            .route(
                "/product/:id",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn seed(&self, items: Vec<(&str, &str, f64)>) {
        let mut state = self.state.lock().unwrap();
        for (name, description, price) in items {
            state.insert(name, description, Some(price));
        }
    }

    pub fn fail_with(&self, status: u16, message: Option<&str>) {
        self.state.lock().unwrap().failure = Some((status, message.map(str::to_string)));
    }

    pub fn override_list_body(&self, body: Value) {
        self.state.lock().unwrap().list_body = Some(body);
    }

    /// Requests seen on a route, e.g. "POST /product" or "PUT /product/:id"
    pub fn requests(&self, route: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .get(route)
            .copied()
            .unwrap_or(0)
    }
}

async fn list_products(State(state): State<Arc<Mutex<FixtureState>>>) -> Reply {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record("GET /product") {
        return failure;
    }
    if let Some(body) = state.list_body.clone() {
        return (StatusCode::OK, Json(body));
    }
    (StatusCode::OK, Json(json!({ "Products": state.products })))
}

async fn create_product(
    State(state): State<Arc<Mutex<FixtureState>>>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record("POST /product") {
        return failure;
    }
    let product = state.insert(
        body["name"].as_str().unwrap_or_default(),
        body["description"].as_str().unwrap_or_default(),
        body["price"].as_f64(),
    );
    (StatusCode::CREATED, Json(json!(product)))
}

async fn get_product(
    State(state): State<Arc<Mutex<FixtureState>>>,
    Path(id): Path<String>,
) -> Reply {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record("GET /product/:id") {
        return failure;
    }
    match state.products.iter().find(|p| p.id == id) {
        Some(product) => (StatusCode::OK, Json(json!(product))),
        None => not_found(),
    }
}

async fn update_product(
    State(state): State<Arc<Mutex<FixtureState>>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record("PUT /product/:id") {
        return failure;
    }
    let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
        return not_found();
    };
    product.name = body["name"].as_str().unwrap_or_default().to_string();
    product.description = body["description"].as_str().unwrap_or_default().to_string();
    product.price = body["price"].as_f64();
    (StatusCode::OK, Json(json!({ "message": "Product updated" })))
}

async fn delete_product(
    State(state): State<Arc<Mutex<FixtureState>>>,
    Path(id): Path<String>,
) -> Reply {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record("DELETE /product/:id") {
        return failure;
    }
    let before = state.products.len();
    state.products.retain(|p| p.id != id);
    if state.products.len() == before {
        return not_found();
    }
    (StatusCode::OK, Json(json!({ "message": "Product deleted" })))
}
