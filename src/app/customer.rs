use crate::domain::model::{Bill, Customer, CustomerStats};
use crate::domain::ports::BillingApi;
use crate::templates::{bills, profile};
use crate::utils::error::Result;

pub struct ProfileView {
    pub profile: Customer,
    pub card: String,
}

pub struct MyBillsView {
    pub bills: Vec<Bill>,
    pub rows: String,
    pub stats: CustomerStats,
}

pub async fn load_profile<A: BillingApi + ?Sized>(api: &A) -> Result<ProfileView> {
    let record = api.profile().await?;
    let card = profile::render_profile_card(&record);
    Ok(ProfileView {
        profile: record,
        card,
    })
}

pub async fn load_my_bills<A: BillingApi + ?Sized>(api: &A, currency: &str) -> Result<MyBillsView> {
    let list = api.my_bills().await?;
    tracing::debug!("Loaded {} of the customer's bills", list.len());
    let rows = bills::render_my_bill_rows(&list, currency);
    let stats = CustomerStats::from_bills(&list);
    Ok(MyBillsView {
        bills: list,
        rows,
        stats,
    })
}
