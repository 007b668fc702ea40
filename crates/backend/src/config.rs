use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calendar-backend")]
#[command(about = "HTTP API for events scoped to calendars")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Mint a JWT for local testing of protected routes
    IssueToken {
        /// Email address placed in the token subject.
        #[arg(long)]
        email: String,

        /// Optional display name.
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Port the server listens on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection string. Without it events live in memory.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections.
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pub database_pool_size: usize,

    /// Calendar ids registered at startup when running in memory.
    #[arg(long, env = "SEED_CALENDARS", value_delimiter = ',')]
    pub seed_calendars: Vec<String>,

    /// Secret key for signing JWTs.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Comma-separated emails allowed on protected routes. Empty allows all.
    #[arg(long, env = "ALLOWED_EMAILS", value_delimiter = ',')]
    pub allowed_emails: Vec<String>,

    /// Cookie checked for a token before the Authorization header.
    #[arg(long, env = "AUTH_COOKIE_NAME", default_value = "auth_token")]
    pub auth_cookie_name: String,

    /// Lifetime of tokens minted by `issue-token`.
    #[arg(long, env = "TOKEN_DURATION_DAYS", default_value_t = 7)]
    pub token_duration_days: i64,

    /// Comma-separated origins for CORS. Unset means permissive.
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub cors_allowed_origins: Vec<String>,
}
