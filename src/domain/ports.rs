use crate::domain::model::{
    Bill, BillRequest, Customer, LoginRequest, MessageResponse, NewCustomer, RegisterRequest,
    Session,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn output_path(&self) -> &str;
    fn currency(&self) -> &str;
    fn username(&self) -> Option<&str>;
    fn password(&self) -> Option<&str>;
}

/// One method per backend endpoint. Implemented over HTTP by
/// `api::gateway::HttpBillingApi`, and by in-memory fakes in tests.
#[async_trait]
pub trait BillingApi: Send + Sync {
    async fn check_session(&self) -> Result<Session>;
    async fn login(&self, req: &LoginRequest) -> Result<Session>;
    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse>;
    async fn logout(&self) -> Result<MessageResponse>;

    async fn list_customers(&self) -> Result<Vec<Customer>>;
    async fn add_customer(&self, req: &NewCustomer) -> Result<Customer>;
    async fn delete_customer(&self, id: i64) -> Result<MessageResponse>;

    async fn list_bills(&self) -> Result<Vec<Bill>>;
    async fn generate_bill(&self, req: &BillRequest) -> Result<Bill>;

    async fn profile(&self) -> Result<Customer>;
    async fn my_bills(&self) -> Result<Vec<Bill>>;
}
