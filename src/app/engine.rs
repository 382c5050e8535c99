use crate::api::session::{self, AuthResult};
use crate::app::alerts::{Alert, AlertBox};
use crate::app::{admin, customer};
use crate::domain::model::{LoginRequest, RegisterRequest, Role, Session};
use crate::domain::ports::{BillingApi, ConfigProvider, Storage};
use crate::templates::{alerts as alert_template, customers, dashboard, layout};
use crate::templates::bills as bills_template;
use crate::utils::error::{ClientError, Result};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Command {
    AdminDashboard,
    AdminCustomers,
    AdminBills,
    CustomerDashboard,
    AddCustomer {
        name: String,
        email: String,
        address: String,
    },
    DeleteCustomer {
        id: i64,
    },
    GenerateBill {
        customer_id: Option<i64>,
        units_consumed: f64,
    },
    Register(RegisterRequest),
    Logout,
}

impl Command {
    fn required_role(&self) -> Option<Role> {
        match self {
            Command::AdminDashboard
            | Command::AdminCustomers
            | Command::AdminBills
            | Command::AddCustomer { .. }
            | Command::DeleteCustomer { .. }
            | Command::GenerateBill { .. } => Some(Role::Admin),
            Command::CustomerDashboard => Some(Role::Customer),
            Command::Register(_) | Command::Logout => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PageWritten { page: &'static str },
    Redirected { target: &'static str },
    Done { message: String },
}

/// Drives one command end to end: login (when configured), session guard,
/// fetch, render, write the page through the storage port.
pub struct PageEngine<A: BillingApi, S: Storage, C: ConfigProvider> {
    api: A,
    storage: S,
    config: C,
    alerts: AlertBox,
}

impl<A: BillingApi, S: Storage, C: ConfigProvider> PageEngine<A, S, C> {
    pub fn new(api: A, storage: S, config: C) -> Self {
        Self {
            api,
            storage,
            config,
            alerts: AlertBox::new(),
        }
    }

    pub async fn run(&mut self, command: Command) -> Result<Outcome> {
        // 不需要 session 的指令先處理
        match command {
            Command::Register(req) => {
                let res = self.api.register(&req).await?;
                return Ok(Outcome::Done {
                    message: res.message,
                });
            }
            Command::Logout => {
                let target = session::logout(&self.api).await;
                return Ok(Outcome::Redirected {
                    target: target.page(),
                });
            }
            _ => {}
        }

        self.login_if_configured().await?;

        let session = match session::check_session(&self.api, command.required_role()).await {
            AuthResult::Authorized(session) => session,
            AuthResult::Denied { reason, redirect } => {
                tracing::warn!(
                    "Access denied ({:?}), redirecting to {}",
                    reason,
                    redirect.page()
                );
                return Ok(Outcome::Redirected {
                    target: redirect.page(),
                });
            }
        };

        match command {
            Command::AdminDashboard => self.admin_dashboard(&session).await,
            Command::AdminCustomers => self.admin_customers(&session).await,
            Command::AdminBills => self.admin_bills(&session).await,
            Command::CustomerDashboard => self.customer_dashboard(&session).await,
            Command::AddCustomer {
                name,
                email,
                address,
            } => {
                match admin::add_customer(&self.api, &name, &email, &address).await {
                    Ok(created) => {
                        tracing::info!("Customer {} created", created.id);
                        self.alerts.show(Alert::success("Customer added!"));
                    }
                    Err(e) => self.show_error(e),
                }
                // 重新載入列表
                self.admin_customers(&session).await
            }
            Command::DeleteCustomer { id } => {
                match admin::delete_customer(&self.api, id).await {
                    Ok(_) => self.alerts.show(Alert::success("Customer deleted.")),
                    Err(e) => self.show_error(e),
                }
                self.admin_customers(&session).await
            }
            Command::GenerateBill {
                customer_id,
                units_consumed,
            } => {
                match admin::generate_bill(&self.api, customer_id, units_consumed).await {
                    Ok(bill) => {
                        tracing::info!("Bill {} generated", bill.id);
                        self.alerts.show(Alert::success("Bill generated!"));
                    }
                    Err(e) => self.show_error(e),
                }
                self.admin_bills(&session).await
            }
            Command::Register(_) | Command::Logout => unreachable!("handled above"),
        }
    }

    async fn login_if_configured(&self) -> Result<()> {
        let (Some(username), Some(password)) = (self.config.username(), self.config.password())
        else {
            return Ok(());
        };

        let session = self
            .api
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        tracing::info!("Logged in as {} ({})", session.username, session.role);
        Ok(())
    }

    /// Validation failures become warnings, everything else a danger banner
    /// with the `Error:` prefix.
    fn show_error(&mut self, error: ClientError) {
        match &error {
            ClientError::ValidationError { message } => {
                self.alerts.show(Alert::warning(message.clone()));
            }
            _ => {
                self.alerts.show(Alert::danger(format!(
                    "Error: {}",
                    error.user_friendly_message()
                )));
            }
        }
    }

    fn alert_html(&self) -> String {
        self.alerts
            .active(Instant::now())
            .map(alert_template::render_alert)
            .unwrap_or_default()
    }

    async fn write_page(&self, page: &'static str, html: &str) -> Result<Outcome> {
        self.storage.write_file(page, html.as_bytes()).await?;
        tracing::info!("📄 Wrote {}", page);
        Ok(Outcome::PageWritten { page })
    }

    async fn admin_dashboard(&mut self, session: &Session) -> Result<Outcome> {
        // 統計載入失敗只記錄，不打擾使用者
        let stats = match admin::load_stats(&self.api).await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::error!("Failed to load dashboard stats: {}", e);
                None
            }
        };

        let html = dashboard::render_admin_dashboard_page(
            &layout::render_nav_user(session),
            &self.alert_html(),
            stats,
            self.config.currency(),
        );
        self.write_page("admin-dashboard.html", &html).await
    }

    async fn admin_customers(&mut self, session: &Session) -> Result<Outcome> {
        let rows = match admin::load_customers(&self.api).await {
            Ok(view) => view.rows,
            Err(e) => {
                self.alerts.show(Alert::danger(format!(
                    "Failed to load customers: {}",
                    e.user_friendly_message()
                )));
                customers::render_customer_rows(&[])
            }
        };

        let html = customers::render_customers_page(
            &layout::render_nav_user(session),
            &self.alert_html(),
            &rows,
        );
        self.write_page("admin-customers.html", &html).await
    }

    async fn admin_bills(&mut self, session: &Session) -> Result<Outcome> {
        let rows = match admin::load_bills(&self.api, self.config.currency()).await {
            Ok(view) => view.rows,
            Err(e) => {
                self.alerts.show(Alert::danger(format!(
                    "Failed to load bills: {}",
                    e.user_friendly_message()
                )));
                bills_template::render_bill_rows(&[], self.config.currency())
            }
        };

        // 下拉選單的客戶資料是獨立的一次取用
        let options = match admin::load_bill_customer_options(&self.api).await {
            Ok(options) => options,
            Err(e) => {
                self.alerts.show(Alert::danger(format!(
                    "Failed to load customers: {}",
                    e.user_friendly_message()
                )));
                customers::render_customer_options(&[])
            }
        };

        let html = bills_template::render_bills_page(
            &layout::render_nav_user(session),
            &self.alert_html(),
            &rows,
            &options,
        );
        self.write_page("admin-bills.html", &html).await
    }

    async fn customer_dashboard(&mut self, session: &Session) -> Result<Outcome> {
        let card = match customer::load_profile(&self.api).await {
            Ok(view) => view.card,
            Err(e) => {
                self.alerts.show(Alert::danger(format!(
                    "Failed to load profile: {}",
                    e.user_friendly_message()
                )));
                String::new()
            }
        };

        let (rows, stats) = match customer::load_my_bills(&self.api, self.config.currency()).await {
            Ok(view) => (view.rows, Some(view.stats)),
            Err(e) => {
                self.alerts.show(Alert::danger(format!(
                    "Failed to load bills: {}",
                    e.user_friendly_message()
                )));
                (String::new(), None)
            }
        };

        let html = dashboard::render_customer_dashboard_page(
            &layout::render_nav_user(session),
            &self.alert_html(),
            &card,
            &rows,
            stats,
            self.config.currency(),
        );
        self.write_page("customer-dashboard.html", &html).await
    }
}
