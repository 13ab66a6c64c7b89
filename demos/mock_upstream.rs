use axum::{extract::Path, routing::get, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post));

    let addr = SocketAddr::from(([127, 0, 0, 1], 9100));
    println!("Pretend third-party API listening on http://{}", addr);
    println!("Point the gateway at it with THIRD_PARTY_BASE=http://{}/posts", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn list_posts() -> Json<Value> {
    Json(json!([
        {"id": 1, "title": "Hello from the pretend API"},
        {"id": 2, "title": "Second post"}
    ]))
}

async fn get_post(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({"id": id, "title": format!("Post {}", id)}))
}
