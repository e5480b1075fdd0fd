use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub amount: u32,
    pub bought: bool,
}

#[derive(Deserialize)]
pub struct NewGroceryItem {
    pub name: String,
    #[serde(default = "one")]
    pub amount: u32,
    #[serde(default)]
    pub bought: bool,
}

fn one() -> u32 {
    1
}

#[derive(Deserialize)]
pub struct GroceryItemPatch {
    pub name: Option<String>,
    pub amount: Option<u32>,
    pub bought: Option<bool>,
}

/// Items in insertion order plus the next id to hand out.
#[derive(Debug)]
pub struct Store {
    items: Vec<GroceryItem>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/groceryList", get(list_items).post(create_item))
        .route("/groceryList/{id}", patch(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<GroceryItem>> {
    Json(db.read().await.items.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<NewGroceryItem>,
) -> (StatusCode, Json<Vec<GroceryItem>>) {
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    store.items.push(GroceryItem {
        id,
        name: input.name,
        amount: input.amount,
        bought: input.bought,
    });
    debug!(id, "created item");
    (StatusCode::CREATED, Json(store.items.clone()))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<GroceryItemPatch>,
) -> Result<Json<Vec<GroceryItem>>, StatusCode> {
    let mut store = db.write().await;
    let item = store
        .items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        item.name = name;
    }
    if let Some(amount) = input.amount {
        item.amount = amount;
    }
    if let Some(bought) = input.bought {
        item.bought = bought;
    }
    debug!(id, "updated item");
    Ok(Json(store.items.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<GroceryItem>>, StatusCode> {
    let mut store = db.write().await;
    let index = store
        .items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.items.remove(index);
    debug!(id, "deleted item");
    Ok(Json(store.items.clone()))
}
