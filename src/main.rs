use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use todoapp::cli::create_user;
use todoapp::logging::init_logging;
use todoapp::modules::auth::model::CreateUserRequest;
use todoapp::router::init_router;
use todoapp::state::init_app_state;
use todoapp_auth::{Authority, SystemClock};
use todoapp_config::{DatabaseConfig, JwtConfig, PasswordConfig, ServerConfig};
use todoapp_db::{PgPool, PgUserStore, init_db_pool, run_migrations};
use tracing::info;

#[derive(Parser)]
#[command(name = "todoapp")]
#[command(about = "todoapp - credential and token service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run migrations and start the HTTP server (default)
    Serve,
    /// Register a user directly against the database
    CreateUser {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// First name
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role name embedded in issued tokens
        #[arg(short = 'r', long, default_value = "user")]
        role: String,

        /// Optional phone number
        #[arg(long)]
        phone_number: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let password_config = PasswordConfig::from_env().context("invalid password configuration")?;
    let database_config = DatabaseConfig::from_env().context("invalid database configuration")?;

    let pool = init_db_pool(&database_config)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(pool, &jwt_config, &password_config).await,
        Commands::CreateUser {
            username,
            email,
            first_name,
            last_name,
            password,
            role,
            phone_number,
        } => {
            let request = CreateUserRequest {
                username: prompt_or("Username", username)?,
                email: prompt_or("Email address", email)?,
                first_name: prompt_or("First name", first_name)?,
                last_name: prompt_or("Last name", last_name)?,
                password: match password {
                    Some(password) => password,
                    None => Password::new()
                        .with_prompt("Password")
                        .with_confirmation("Confirm password", "Passwords don't match")
                        .interact()
                        .context("failed to read password")?,
                },
                role,
                phone_number,
            };
            handle_create_user(pool, &jwt_config, &password_config, request).await
        }
    }
}

async fn serve(
    pool: PgPool,
    jwt_config: &JwtConfig,
    password_config: &PasswordConfig,
) -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;

    let state = init_app_state(pool, jwt_config, password_config)
        .map_err(|err| err.error)
        .context("failed to initialise application state")?;
    let app = init_router(state);

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "server listening");
    info!("Scalar UI available at http://{addr}/scalar");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn handle_create_user(
    pool: PgPool,
    jwt_config: &JwtConfig,
    password_config: &PasswordConfig,
    request: CreateUserRequest,
) -> anyhow::Result<()> {
    let store = PgUserStore::new(pool);
    let authority = Authority::new(jwt_config, password_config, Arc::new(SystemClock))?;

    let user = create_user(&store, &authority, request).await?;
    println!("\n✅ User created successfully!");
    println!("   Id: {}", user.id);
    println!("   Username: {}", user.username);
    println!("   Role: {}", user.role);
    Ok(())
}

fn prompt_or(prompt: &str, value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("failed to read {}", prompt.to_lowercase())),
    }
}
