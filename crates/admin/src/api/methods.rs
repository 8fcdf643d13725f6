//! Endpoint wrappers for the dashboard API.

use serde_json::{Value, json};

use super::client::ApiClient;
use super::types::{ApiRequest, ApiResponse};

/// The dashboard's API endpoints.
///
/// Each method issues one call through [`ApiClient::call`] and returns its
/// envelope unchanged; pair it with [`super::parse_api_response`] to get
/// canonical records.
#[derive(Debug, Clone)]
pub struct ApiMethods {
    client: ApiClient,
}

impl ApiMethods {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_products(&self) -> ApiResponse<Value> {
        self.client.call(ApiRequest::get("/products")).await
    }

    pub async fn create_product(&self, product: Value) -> ApiResponse<Value> {
        self.client.call(ApiRequest::post("/products", product)).await
    }

    pub async fn update_product(&self, id: &str, product: Value) -> ApiResponse<Value> {
        let url = format!("/products/{}", urlencoding::encode(id));
        self.client.call(ApiRequest::put(&url, product)).await
    }

    pub async fn delete_product(&self, id: &str) -> ApiResponse<Value> {
        let url = format!("/products/{}", urlencoding::encode(id));
        self.client.call(ApiRequest::delete(&url)).await
    }

    pub async fn get_orders(&self) -> ApiResponse<Value> {
        self.client.call(ApiRequest::get("/orders")).await
    }

    pub async fn update_order_status(&self, id: &str, status: &str) -> ApiResponse<Value> {
        let url = format!("/orders/{}/status", urlencoding::encode(id));
        self.client
            .call(ApiRequest::put(&url, json!({ "status": status })))
            .await
    }

    pub async fn get_users(&self) -> ApiResponse<Value> {
        self.client.call(ApiRequest::get("/users")).await
    }

    pub async fn get_discounts(&self) -> ApiResponse<Value> {
        self.client.call(ApiRequest::get("/discounts")).await
    }

    pub async fn apply_discount(&self, discount: Value) -> ApiResponse<Value> {
        self.client
            .call(ApiRequest::post("/discounts/apply", discount))
            .await
    }

    pub async fn get_dashboard_data(&self) -> ApiResponse<Value> {
        self.client.call(ApiRequest::get("/dashboard/analytics")).await
    }
}
