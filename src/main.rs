use std::process::ExitCode;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delymed_pharmacy::{
    config::AppConfig,
    dto::{
        auth::{LoginRequest, RegisterRequest},
        medications::{CreateMedicationRequest, MedicationView, UpdateMedicationRequest},
        orders::{CreateOrderRequest, OrderView},
        profile::UpdateProfileRequest,
    },
    error::AppResult,
    models::{OrderStatus, OrderType},
    params::{CategoryFilter, MedicationQuery, OrderFilter},
    response::{ApiResponse, Meta},
    services::{
        auth_service, dashboard_service, medication_service, notification_service,
        order_service, profile_service,
    },
    state::AppState,
};

#[derive(Parser)]
#[command(name = "delymed-pharmacy")]
#[command(about = "Pharmacy inventory and order operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register the pharmacy and open a session
    Register(RegisterArgs),
    /// Close the session
    Logout,
    /// Show whether a session is open
    Session,
    /// Dashboard KPIs
    Summary,
    /// Medication inventory
    #[command(subcommand)]
    Medications(MedicationCommands),
    /// Customer orders
    #[command(subcommand)]
    Orders(OrderCommands),
    /// Pharmacy profile
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Notification feed, newest first
    Notifications,
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    license: Option<String>,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm: String,
}

#[derive(Subcommand)]
enum MedicationCommands {
    List {
        /// `all`, `low-stock` or a category name
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Add(AddMedicationArgs),
    Edit(EditMedicationArgs),
    Delete {
        id: String,
    },
    /// Add (or with a negative value, remove) units of stock
    Adjust {
        id: String,
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
}

#[derive(Args)]
struct AddMedicationArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    generic_name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    stock: i32,
    #[arg(long)]
    min_stock: i32,
    #[arg(long)]
    price: String,
    #[arg(long)]
    requires_prescription: bool,
    #[arg(long)]
    barcode: Option<String>,
    #[arg(long)]
    manufacturer: Option<String>,
    #[arg(long)]
    expiry_date: Option<String>,
}

#[derive(Args)]
struct EditMedicationArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    generic_name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    stock: Option<i32>,
    #[arg(long)]
    min_stock: Option<i32>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    requires_prescription: Option<bool>,
    #[arg(long)]
    barcode: Option<String>,
    #[arg(long)]
    manufacturer: Option<String>,
    #[arg(long)]
    expiry_date: Option<String>,
}

#[derive(Subcommand)]
enum OrderCommands {
    List {
        /// `all`, `urgent` or a status name
        #[arg(long, default_value = "all")]
        filter: OrderFilter,
    },
    Show {
        id: String,
    },
    New(NewOrderArgs),
    /// Move an order to the next step
    Advance {
        id: String,
    },
    SetStatus {
        id: String,
        status: OrderStatus,
    },
    Cancel {
        id: String,
    },
}

#[derive(Args)]
struct NewOrderArgs {
    #[arg(long)]
    customer: String,
    #[arg(long)]
    items: i32,
    #[arg(long)]
    total: String,
    #[arg(long = "type", default_value = "list")]
    order_type: OrderType,
    #[arg(long)]
    urgent: bool,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    prescription_image: Option<String>,
}

#[derive(Subcommand)]
enum ProfileCommands {
    Show,
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        license: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,delymed_pharmacy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let state = AppState::open(&config).await?;

    match run(&state, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(error = ?err, "command failed");
            print_json(&ApiResponse::error("Error", err.to_string()))?;
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

fn requires_session(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Login { .. } | Commands::Register(_) | Commands::Session
    )
}

async fn run(state: &AppState, command: Commands) -> AppResult<()> {
    if requires_session(&command) {
        auth_service::ensure_logged_in(state).await?;
    }

    match command {
        Commands::Login { email, password } => {
            auth_service::login(state, LoginRequest { email, password }).await?;
            print_json(&ApiResponse::success("Logged in", true, None))
        }
        Commands::Register(args) => {
            let profile = auth_service::register(
                state,
                RegisterRequest {
                    pharmacy_name: args.name,
                    email: args.email,
                    phone: args.phone,
                    license_number: args.license,
                    password: args.password,
                    confirm: args.confirm,
                },
            )
            .await?;
            print_json(&ApiResponse::success("Registered", profile, None))
        }
        Commands::Session => {
            let logged_in = auth_service::is_logged_in(state).await;
            print_json(&ApiResponse::success("Session", logged_in, None))
        }
        Commands::Logout => {
            auth_service::logout(state).await?;
            print_json(&ApiResponse::success("Logged out", false, None))
        }
        Commands::Summary => {
            let summary = dashboard_service::summary(state).await?;
            print_json(&ApiResponse::success("Summary", summary, None))
        }
        Commands::Medications(command) => run_medications(state, command).await,
        Commands::Orders(command) => run_orders(state, command).await,
        Commands::Profile(ProfileCommands::Show) => {
            let profile = profile_service::get_profile(state).await?;
            print_json(&ApiResponse::success("Profile", profile, None))
        }
        Commands::Profile(ProfileCommands::Edit {
            name,
            address,
            phone,
            email,
            license,
        }) => {
            let profile = profile_service::update_profile(
                state,
                UpdateProfileRequest {
                    name,
                    address,
                    phone,
                    email,
                    license_number: license,
                },
            )
            .await?;
            print_json(&ApiResponse::success("Profile updated", profile, None))
        }
        Commands::Notifications => {
            let items = notification_service::list_notifications(state).await?;
            let total = items.len();
            print_json(&ApiResponse::list("Notifications", items, total))
        }
    }
}

async fn run_medications(state: &AppState, command: MedicationCommands) -> AppResult<()> {
    match command {
        MedicationCommands::List { category, search } => {
            let query = MedicationQuery { category, search };
            let items: Vec<MedicationView> = medication_service::list_medications(state, &query)
                .await?
                .into_iter()
                .map(MedicationView::from)
                .collect();
            let total = items.len();
            print_json(&ApiResponse::list("Medications", items, total))
        }
        MedicationCommands::Show { id } => {
            let medication = medication_service::get_medication(state, &id).await?;
            print_json(&ApiResponse::success(
                "Medication",
                MedicationView::from(medication),
                None,
            ))
        }
        MedicationCommands::Add(args) => {
            let medication = medication_service::create_medication(
                state,
                CreateMedicationRequest {
                    name: args.name,
                    generic_name: args.generic_name,
                    category: args.category,
                    stock: args.stock,
                    min_stock: args.min_stock,
                    price: args.price,
                    requires_prescription: args.requires_prescription,
                    barcode: args.barcode,
                    manufacturer: args.manufacturer,
                    expiry_date: args.expiry_date,
                },
            )
            .await?;
            print_json(&ApiResponse::success(
                "Medication created",
                MedicationView::from(medication),
                Some(Meta::empty()),
            ))
        }
        MedicationCommands::Edit(args) => {
            let medication = medication_service::update_medication(
                state,
                &args.id,
                UpdateMedicationRequest {
                    name: args.name,
                    generic_name: args.generic_name,
                    category: args.category,
                    stock: args.stock,
                    min_stock: args.min_stock,
                    price: args.price,
                    requires_prescription: args.requires_prescription,
                    barcode: args.barcode,
                    manufacturer: args.manufacturer,
                    expiry_date: args.expiry_date,
                },
            )
            .await?;
            print_json(&ApiResponse::success(
                "Updated",
                MedicationView::from(medication),
                Some(Meta::empty()),
            ))
        }
        MedicationCommands::Delete { id } => {
            let removed = medication_service::delete_medication(state, &id).await?;
            print_json(&ApiResponse::success("Deleted", removed, Some(Meta::empty())))
        }
        MedicationCommands::Adjust { id, delta } => {
            let medication = medication_service::adjust_stock(state, &id, delta).await?;
            print_json(&ApiResponse::success(
                "Inventory updated",
                MedicationView::from(medication),
                Some(Meta::empty()),
            ))
        }
    }
}

async fn run_orders(state: &AppState, command: OrderCommands) -> AppResult<()> {
    match command {
        OrderCommands::List { filter } => {
            let now = Utc::now();
            let items: Vec<OrderView> = order_service::list_orders(state, filter)
                .await?
                .into_iter()
                .map(|order| OrderView::new(order, now))
                .collect();
            let total = items.len();
            print_json(&ApiResponse::list("Orders", items, total))
        }
        OrderCommands::Show { id } => {
            let order = order_service::get_order(state, &id).await?;
            print_json(&ApiResponse::success(
                "Order found",
                OrderView::new(order, Utc::now()),
                None,
            ))
        }
        OrderCommands::New(args) => {
            let order = order_service::create_order(
                state,
                CreateOrderRequest {
                    customer: args.customer,
                    customer_email: args.email,
                    customer_phone: args.phone,
                    items: args.items,
                    total: args.total,
                    order_type: args.order_type,
                    is_urgent: args.urgent,
                    prescription_image: args.prescription_image,
                },
            )
            .await?;
            print_json(&ApiResponse::success("Order created", order, Some(Meta::empty())))
        }
        OrderCommands::Advance { id } => {
            let transition = order_service::advance_order(state, &id).await?;
            print_json(&ApiResponse::success("Order updated", transition, Some(Meta::empty())))
        }
        OrderCommands::SetStatus { id, status } => {
            let transition = order_service::update_order_status(state, &id, status).await?;
            print_json(&ApiResponse::success("Order updated", transition, Some(Meta::empty())))
        }
        OrderCommands::Cancel { id } => {
            let transition = order_service::cancel_order(state, &id).await?;
            print_json(&ApiResponse::success("Order cancelled", transition, Some(Meta::empty())))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
