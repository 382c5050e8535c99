use crate::api::client::ApiClient;
use crate::domain::model::{
    Bill, BillRequest, Customer, LoginRequest, MessageResponse, NewCustomer, RegisterRequest,
    Session,
};
use crate::domain::ports::BillingApi;
use crate::utils::error::Result;
use async_trait::async_trait;

/// `BillingApi` over HTTP, one method per backend endpoint.
pub struct HttpBillingApi {
    client: ApiClient,
}

impl HttpBillingApi {
    pub fn new(api_base: &str) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api_base)?,
        })
    }
}

#[async_trait]
impl BillingApi for HttpBillingApi {
    async fn check_session(&self) -> Result<Session> {
        self.client.get("/api/auth/check").await
    }

    async fn login(&self, req: &LoginRequest) -> Result<Session> {
        self.client.post("/api/login", req).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse> {
        self.client.post("/api/register", req).await
    }

    async fn logout(&self) -> Result<MessageResponse> {
        self.client.post_empty("/api/logout").await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.client.get("/api/admin/customers").await
    }

    async fn add_customer(&self, req: &NewCustomer) -> Result<Customer> {
        self.client.post("/api/admin/customers", req).await
    }

    async fn delete_customer(&self, id: i64) -> Result<MessageResponse> {
        self.client
            .delete(&format!("/api/admin/customers/{}", id))
            .await
    }

    async fn list_bills(&self) -> Result<Vec<Bill>> {
        self.client.get("/api/admin/bills").await
    }

    async fn generate_bill(&self, req: &BillRequest) -> Result<Bill> {
        self.client.post("/api/admin/bills", req).await
    }

    async fn profile(&self) -> Result<Customer> {
        self.client.get("/api/customer/profile").await
    }

    async fn my_bills(&self) -> Result<Vec<Bill>> {
        self.client.get("/api/customer/bills").await
    }
}
