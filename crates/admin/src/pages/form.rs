//! Product information form.

use std::time::Duration;

use serde_json::Value;

use super::simulate_latency;
use crate::models::ProductForm;
use crate::normalize::normalize_product_form;

/// State of the product information form.
#[derive(Debug, Clone, Default)]
pub struct FormPage {
    pub submitting: bool,
    pub last_submission: Option<ProductForm>,
}

impl FormPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit raw form fields, returning the normalized form once the
    /// simulated request completes.
    pub async fn submit(&mut self, raw: &Value, delay: Duration) -> ProductForm {
        self.submitting = true;
        simulate_latency(delay).await;
        let form = normalize_product_form(raw);
        tracing::info!(
            manufacturer = %form.manufacturer_name,
            category = %form.category,
            "Product form submitted"
        );
        self.last_submission = Some(form.clone());
        self.submitting = false;
        form
    }
}
