//! In-memory [`ProductStore`] for screen and sync tests

use super::{ProductStore, StoreError};
use crate::product::{Product, ProductDraft};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct MockInner {
    products: Vec<Product>,
    next_id: u64,
    calls: HashMap<&'static str, usize>,
    failure: Option<StoreError>,
}

/// Records every call; fails every call while a failure is set
#[derive(Default)]
pub(crate) struct MockStore {
    inner: Mutex<MockInner>,
}

impl MockStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().products = products;
        store
    }

    pub fn fail_with(&self, err: StoreError) {
        self.inner.lock().unwrap().failure = Some(err);
    }

    /// Number of calls to an operation: "list", "get", "create", "update", "remove"
    pub fn calls(&self, op: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .get(op)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.inner.lock().unwrap().calls.values().sum()
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.lock().unwrap().products.clone()
    }

    fn begin(&self, op: &'static str) -> Result<std::sync::MutexGuard<'_, MockInner>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        *inner.calls.entry(op).or_default() += 1;
        match inner.failure.clone() {
            Some(err) => Err(err),
            None => Ok(inner),
        }
    }
}

pub(crate) fn product(id: &str, name: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        price: Some(price),
    }
}

fn not_found() -> StoreError {
    StoreError::status(404, "Product not found")
}

impl ProductStore for MockStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.begin("list")?;
        Ok(inner.products.clone())
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let inner = self.begin("get")?;
        inner
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Option<Product>, StoreError> {
        draft.check_required()?;
        let mut inner = self.begin("create")?;
        inner.next_id += 1;
        let product = Product {
            id: format!("m{}", inner.next_id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.parsed_price(),
        };
        inner.products.push(product.clone());
        Ok(Some(product))
    }

    async fn update(&self, id: &str, draft: &ProductDraft) -> Result<(), StoreError> {
        let mut inner = self.begin("update")?;
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        product.name = draft.name.clone();
        product.description = draft.description.clone();
        product.price = draft.parsed_price();
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.begin("remove")?;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
