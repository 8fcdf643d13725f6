//! Products listing and editor.

use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use storedash_core::{ProductId, ProductStatus};

use super::simulate_latency;
use crate::api::mock;
use crate::components::{TableQuery, TableView, products_table_config};
use crate::models::Product;
use crate::normalize::normalize_product;

/// Actions raised by the products table and editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductMessage {
    /// Open the editor on an existing product.
    Edit(ProductId),
    /// Ask for confirmation before deleting.
    RequestDelete(ProductId),
    ConfirmDelete,
    CancelDelete,
    /// Open the editor on a blank product.
    Create,
    /// Submit the editor.
    Save(ProductDraft),
}

/// Editor form contents.
///
/// `price` is kept as typed; it is parsed on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub sku: String,
    pub category: String,
    pub status: ProductStatus,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            status: product.status.clone(),
        }
    }
}

/// State of the products page.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    pub loading: bool,
    pub products: Vec<Product>,
    /// Product open in the editor; `None` with `editor_open` means a new one.
    pub selected: Option<ProductId>,
    pub editor_open: bool,
    /// Product awaiting delete confirmation.
    pub pending_delete: Option<ProductId>,
    pub query: TableQuery,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self {
            loading: true,
            products: Vec::new(),
            selected: None,
            editor_open: false,
            pending_delete: None,
            query: TableQuery::default(),
        }
    }
}

impl ProductsPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the sample catalog after `delay`.
    pub async fn load(&mut self, delay: Duration) {
        simulate_latency(delay).await;
        self.set_products(mock::products());
    }

    /// Replace the rows, e.g. with an API result.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
    }

    /// The product open in the editor, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected.as_ref()?;
        self.products.iter().find(|p| &p.id == id)
    }

    /// Apply a table or editor action.
    pub fn apply(&mut self, message: ProductMessage) {
        match message {
            ProductMessage::Edit(id) => {
                self.selected = Some(id);
                self.editor_open = true;
            }
            ProductMessage::RequestDelete(id) => {
                self.pending_delete = Some(id);
            }
            ProductMessage::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    self.products.retain(|p| p.id != id);
                    tracing::info!(product_id = %id, "Product deleted");
                }
            }
            ProductMessage::CancelDelete => self.pending_delete = None,
            ProductMessage::Create => {
                self.selected = None;
                self.editor_open = true;
            }
            ProductMessage::Save(draft) => self.save(&draft),
        }
    }

    fn save(&mut self, draft: &ProductDraft) {
        let id = self
            .selected
            .clone()
            .unwrap_or_else(|| ProductId::new(format!("#TB{}", Utc::now().timestamp_millis())));
        let raw = json!({
            "id": id.as_str(),
            "name": draft.name,
            "price": draft.price,
            "sku": draft.sku,
            "category": draft.category,
            "status": draft.status.as_str(),
        });
        let Some(product) = normalize_product(&raw) else {
            tracing::warn!(product_id = %id, "Discarding empty product draft");
            return;
        };

        match self.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = product;
                tracing::info!(product_id = %id, "Product updated");
            }
            None => {
                self.products.push(product);
                tracing::info!(product_id = %id, "Product created");
            }
        }
        self.selected = None;
        self.editor_open = false;
    }

    /// Render the products table for the current query.
    #[must_use]
    pub fn view(&self) -> TableView {
        products_table_config().view(&self.products, &self.query)
    }
}
