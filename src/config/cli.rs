use crate::config::file::{CliOverrides, FileConfig};
use crate::config::Settings;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "powerbill")]
#[command(about = "Headless console client for the PowerBill billing API")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: CliCommand,

    #[arg(long, help = "Base URL of the billing server")]
    pub api_base: Option<String>,

    #[arg(long, help = "Directory the rendered pages are written to")]
    pub output_path: Option<String>,

    #[arg(long, help = "Currency prefix used for amounts")]
    pub currency: Option<String>,

    #[arg(long, help = "Account used to establish the session")]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(short, long, help = "Path to a TOML profile file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Render the admin dashboard with customer/bill/revenue stats
    AdminDashboard,
    /// Render the admin customer list
    AdminCustomers,
    /// Render the admin bill list
    AdminBills,
    /// Render the customer's own dashboard (profile, bills, totals)
    CustomerDashboard,
    /// Add a customer, then re-render the customer list
    AddCustomer {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
    },
    /// Delete a customer and all their bills, then re-render the list
    DeleteCustomer {
        #[arg(long)]
        id: i64,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Generate a bill for a customer, then re-render the bill list
    GenerateBill {
        #[arg(long)]
        customer_id: Option<i64>,
        #[arg(long)]
        units: f64,
    },
    /// Register a new user (CUSTOMER registrations need name/email/address)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "ADMIN or CUSTOMER")]
        role: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// End the current session
    Logout,
}

impl CliConfig {
    /// Merge CLI flags over the optional profile over the defaults.
    pub fn settings(&self, file: Option<FileConfig>) -> Settings {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            api_base: self.api_base.is_some(),
            output_path: self.output_path.is_some(),
            currency: self.currency.is_some(),
            username: self.username.is_some(),
            password: self.password.is_some(),
        };

        if let Some(api_base) = &self.api_base {
            settings.api_base = api_base.clone();
        }
        if let Some(output_path) = &self.output_path {
            settings.output_path = output_path.clone();
        }
        if let Some(currency) = &self.currency {
            settings.currency = currency.clone();
        }
        settings.username = self.username.clone();
        settings.password = self.password.clone();

        if let Some(file) = file {
            file.apply_defaults(&mut settings, &overrides);
        }

        settings
    }
}
