// Command line definition. Every global option can also come from the
// environment so credentials don't have to end up in the shell history.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{
    AppInfo, ClientConfig, Credentials, DEFAULT_BACKEND, DEFAULT_COOKIE_NAME, DEFAULT_TIMEOUT_MS,
};

const APP: AppInfo = AppInfo::from_cargo();

#[derive(Parser, Debug)]
#[command(
    name = APP.name,
    version = APP.version,
    about = APP.description,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Backend host, e.g. "staging-nginz-https.zinfra.io".
    #[arg(short, long, env = "WIRE_BACKEND", default_value = DEFAULT_BACKEND, global = true)]
    pub backend: String,

    /// Email address of the account (prompted for when missing).
    #[arg(short, long, env = "WIRE_EMAIL", global = true)]
    pub email: Option<String>,

    /// Password of the account (prompted for when missing).
    #[arg(short, long, env = "WIRE_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(
        short,
        long,
        env = "WIRE_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_MS,
        global = true
    )]
    pub timeout: u64,

    /// Name of the session cookie set by the backend.
    #[arg(long, env = "WIRE_COOKIE_NAME", default_value = DEFAULT_COOKIE_NAME, global = true)]
    pub cookie_name: String,

    /// Log in with a permanent instead of a temporary session.
    #[arg(long, global = true)]
    pub persistent: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Delete every client of the account.
    DeleteAllClients {
        /// Don't ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },

    /// List all clients of the account.
    GetAllClients {
        /// Print the clients as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a single client.
    GetClient {
        /// ID of the client.
        #[arg(short = 'i', long)]
        client_id: String,
        /// Print the client as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Set the label of a client.
    SetClientLabel {
        /// ID of the client.
        #[arg(short = 'i', long)]
        client_id: String,
        /// New label of the client.
        #[arg(short, long)]
        label: String,
    },

    /// Delete a single client.
    DeleteClient {
        /// ID of the client.
        #[arg(short = 'i', long)]
        client_id: String,
    },

    /// Update your own profile.
    SetProfile {
        /// New display name.
        #[arg(short, long)]
        name: Option<String>,
        /// New accent color ID.
        #[arg(short, long)]
        accent_id: Option<i32>,
        /// Asset key of the uploaded profile picture preview.
        #[arg(long, requires = "complete_asset")]
        preview_asset: Option<String>,
        /// Asset key of the uploaded full size profile picture.
        #[arg(long, requires = "preview_asset")]
        complete_asset: Option<String>,
    },
}

impl Cli {
    /// Client configuration for the given credentials, using the backend,
    /// timeout and cookie name from the command line.
    #[must_use]
    pub fn client_config(&self, credentials: Credentials) -> ClientConfig {
        ClientConfig::new(self.backend.clone(), credentials)
            .with_timeout(Duration::from_millis(self.timeout))
            .with_cookie_name(self.cookie_name.clone())
    }
}
