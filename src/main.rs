use clap::Parser;
use powerbill_client::app::engine::{Command, Outcome, PageEngine};
use powerbill_client::config::file::FileConfig;
use powerbill_client::domain::model::{RegisterRequest, Role};
use powerbill_client::domain::ports::ConfigProvider;
use powerbill_client::utils::{logger, validation::Validate};
use powerbill_client::{CliCommand, CliConfig, ClientError, HttpBillingApi, LocalStorage};
use std::io::Write as _;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting PowerBill console client");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入設定檔（可選）
    let file = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(file) => {
                tracing::info!("📁 Loaded profile from: {}", path);
                Some(file)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let settings = cli.settings(file);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let command = match build_command(&cli.command) {
        Ok(Some(command)) => command,
        Ok(None) => {
            println!("Cancelled.");
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 建立 API 閘道、儲存與引擎
    let api = HttpBillingApi::new(settings.api_base())?;
    let output_path = settings.output_path().to_string();
    let storage = LocalStorage::new(output_path.clone());
    let mut engine = PageEngine::new(api, storage, settings);

    match engine.run(command).await {
        Ok(Outcome::PageWritten { page }) => {
            tracing::info!("✅ Page rendered successfully!");
            println!("✅ Page rendered successfully!");
            println!("📄 Output saved to: {}/{}", output_path, page);
        }
        Ok(Outcome::Redirected { target }) => {
            println!("➡️ Not authorized for this view — continue at: {}", target);
        }
        Ok(Outcome::Done { message }) => {
            println!("✅ {}", message);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                powerbill_client::utils::error::ErrorSeverity::Low => 0,
                powerbill_client::utils::error::ErrorSeverity::Medium => 2,
                powerbill_client::utils::error::ErrorSeverity::High => 1,
                powerbill_client::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

/// Map the parsed CLI onto an engine command. `Ok(None)` means the user backed
/// out of a confirmation prompt.
fn build_command(cli_command: &CliCommand) -> Result<Option<Command>, ClientError> {
    let command = match cli_command {
        CliCommand::AdminDashboard => Command::AdminDashboard,
        CliCommand::AdminCustomers => Command::AdminCustomers,
        CliCommand::AdminBills => Command::AdminBills,
        CliCommand::CustomerDashboard => Command::CustomerDashboard,
        CliCommand::AddCustomer {
            name,
            email,
            address,
        } => Command::AddCustomer {
            name: name.clone(),
            email: email.clone(),
            address: address.clone(),
        },
        CliCommand::DeleteCustomer { id, yes } => {
            if !yes && !confirm_delete()? {
                return Ok(None);
            }
            Command::DeleteCustomer { id: *id }
        }
        CliCommand::GenerateBill { customer_id, units } => Command::GenerateBill {
            customer_id: *customer_id,
            units_consumed: *units,
        },
        CliCommand::Register {
            username,
            password,
            role,
            name,
            email,
            address,
        } => {
            let role = Role::from_name(role).ok_or_else(|| ClientError::ValidationError {
                message: "Invalid role. Use ADMIN or CUSTOMER.".to_string(),
            })?;
            Command::Register(RegisterRequest {
                username: username.clone(),
                password: password.clone(),
                role,
                name: name.clone(),
                email: email.clone(),
                address: address.clone(),
            })
        }
        CliCommand::Logout => Command::Logout,
    };
    Ok(Some(command))
}

fn confirm_delete() -> Result<bool, ClientError> {
    print!("Delete this customer and all their bills? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
