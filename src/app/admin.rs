use crate::domain::model::{AdminStats, Bill, BillRequest, Customer, MessageResponse, NewCustomer};
use crate::domain::ports::BillingApi;
use crate::templates::{bills, customers};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string, validate_positive_units};

/// Customer table view-model: the fetched records plus the rendered rows for
/// `customersTableBody`.
pub struct CustomersView {
    pub customers: Vec<Customer>,
    pub rows: String,
}

/// Bill table view-model for `billsTableBody`.
pub struct BillsView {
    pub bills: Vec<Bill>,
    pub rows: String,
}

pub async fn load_customers<A: BillingApi + ?Sized>(api: &A) -> Result<CustomersView> {
    let list = api.list_customers().await?;
    tracing::debug!("Loaded {} customers", list.len());
    let rows = customers::render_customer_rows(&list);
    Ok(CustomersView {
        customers: list,
        rows,
    })
}

/// Options for `billCustomerSelect`. Deliberately a separate fetch from the
/// customer table so each view names its own data need.
pub async fn load_bill_customer_options<A: BillingApi + ?Sized>(api: &A) -> Result<String> {
    let list = api.list_customers().await?;
    Ok(customers::render_customer_options(&list))
}

pub async fn add_customer<A: BillingApi + ?Sized>(
    api: &A,
    name: &str,
    email: &str,
    address: &str,
) -> Result<Customer> {
    // 先做表單驗證，通過才發出請求
    validate_non_empty_string("Name", name)?;
    validate_email("Email", email)?;
    validate_non_empty_string("Address", address)?;

    let req = NewCustomer {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        address: address.trim().to_string(),
    };
    api.add_customer(&req).await
}

pub async fn delete_customer<A: BillingApi + ?Sized>(api: &A, id: i64) -> Result<MessageResponse> {
    api.delete_customer(id).await
}

pub async fn load_bills<A: BillingApi + ?Sized>(api: &A, currency: &str) -> Result<BillsView> {
    let list = api.list_bills().await?;
    tracing::debug!("Loaded {} bills", list.len());
    let rows = bills::render_bill_rows(&list, currency);
    Ok(BillsView { bills: list, rows })
}

/// No request is issued unless a customer is selected and the units are a
/// positive number.
pub async fn generate_bill<A: BillingApi + ?Sized>(
    api: &A,
    customer_id: Option<i64>,
    units_consumed: f64,
) -> Result<Bill> {
    let customer_id = customer_id.ok_or_else(|| ClientError::ValidationError {
        message: "Please select a customer".to_string(),
    })?;
    validate_positive_units("Units consumed", units_consumed)?;

    api.generate_bill(&BillRequest {
        customer_id,
        units_consumed,
    })
    .await
}

/// Dashboard aggregates: customers and bills fetched concurrently, joined,
/// revenue summed over all bill amounts.
pub async fn load_stats<A: BillingApi + ?Sized>(api: &A) -> Result<AdminStats> {
    let (customers, bills) = tokio::join!(api.list_customers(), api.list_bills());
    let customers = customers?;
    let bills = bills?;
    Ok(AdminStats::from_lists(&customers, &bills))
}
