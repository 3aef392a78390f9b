// UI layer: turns a parsed command into API calls and prints the results.
// Prompts use `dialoguer`, the login wait shows an `indicatif` spinner.
//
// Every command logs in first and logs out at the end, also when the command
// failed. The first error ends the command; nothing is retried.

use anyhow::{bail, Context, Result};
use dialoguer::{Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::ApiClient;
use crate::cli::{Cli, Command};
use crate::config::{AppInfo, Credentials};
use crate::error::ApiError;
use crate::models::{Asset, AssetSize, Device, SelfUpdate};
use crate::transport::Transport;
use crate::util::pluralize;

/// Entry point of the binary: resolves the credentials, builds the API client
/// and runs the requested command against the real backend.
pub fn run(app: &AppInfo, cli: &Cli) -> Result<()> {
    let credentials = resolve_credentials(cli.email.clone(), cli.password.clone())?;
    let config = cli.client_config(credentials);
    let mut api = ApiClient::from_config(&config, app).context("Failed to set up API client")?;

    log::debug!("{} {}: running {:?}", app.name, app.version, cli.command);
    execute(&mut api, &cli.command, cli.persistent)
}

/// Use the given email and password, asking for whatever is missing.
/// `Password` hides the input in the terminal.
pub fn resolve_credentials(email: Option<String>, password: Option<String>) -> Result<Credentials> {
    let email = match email.filter(|email| !email.is_empty()) {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match password.filter(|password| !password.is_empty()) {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };
    Ok(Credentials::new(email, password))
}

/// Log in, run `command`, log out.
pub fn execute<T: Transport>(
    api: &mut ApiClient<T>,
    command: &Command,
    persistent: bool,
) -> Result<()> {
    // Checked up front so an empty update doesn't cost a login.
    let profile_update = match command {
        Command::SetProfile {
            name,
            accent_id,
            preview_asset,
            complete_asset,
        } => {
            let update = profile_update(name, *accent_id, preview_asset, complete_asset);
            if update.is_empty() {
                bail!("Nothing to update, pass --name, --accent-id or the picture assets");
            }
            Some(update)
        }
        _ => None,
    };

    login(api, persistent)?;

    // Logout runs even when the command failed; the command's error wins.
    let result = run_command(api, command, profile_update);
    let logout = if api.is_authenticated() {
        println!("Logging out ...");
        api.logout().context("Logout failed")
    } else {
        Ok(())
    };
    result.and(logout)
}

fn run_command<T: Transport>(
    api: &mut ApiClient<T>,
    command: &Command,
    profile_update: Option<SelfUpdate>,
) -> Result<()> {
    match command {
        Command::DeleteAllClients { yes } => delete_all_clients(api, *yes)?,
        Command::GetAllClients { json } => get_all_clients(api, *json)?,
        Command::GetClient { client_id, json } => get_client(api, client_id, *json)?,
        Command::SetClientLabel { client_id, label } => set_client_label(api, client_id, label)?,
        Command::DeleteClient { client_id } => {
            println!("Deleting client with ID \"{client_id}\" ...");
            api.delete_device(client_id)
                .with_context(|| format!("Failed to delete client \"{client_id}\""))?;
        }
        Command::SetProfile { .. } => {
            if let Some(update) = profile_update {
                api.update_self(&update).context("Failed to update profile")?;
                println!("Profile updated.");
            }
        }
    }
    Ok(())
}

fn login<T: Transport>(api: &mut ApiClient<T>, persistent: bool) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Logging in...");
    spinner.tick();

    let result = api
        .login(persistent)
        .map(|session| session.user_id.clone());
    spinner.finish_and_clear();

    let message = match result.as_ref().err().and_then(ApiError::status) {
        Some(403) => "Login failed, check email and password",
        _ => "Login failed",
    };
    let user_id = result.context(message)?;
    println!("Logged in as user {user_id}.");
    Ok(())
}

/// Delete every device of the account, one after another. Stops at the
/// first device that can't be deleted.
fn delete_all_clients<T: Transport>(api: &mut ApiClient<T>, yes: bool) -> Result<()> {
    let devices = api.list_devices().context("Failed to get clients")?;
    let count = devices.len();
    println!("Found {count} {}.", pluralize("client", "s", count));

    if count == 0 {
        return Ok(());
    }
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {count} {}?", pluralize("client", "s", count)))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    for device in devices {
        println!("Deleting client with ID \"{}\" ...", device.id);
        api.delete_device(&device.id)
            .with_context(|| format!("Failed to delete client \"{}\"", device.id))?;
    }
    Ok(())
}

fn get_all_clients<T: Transport>(api: &mut ApiClient<T>, json: bool) -> Result<()> {
    let devices = api.list_devices().context("Failed to get clients")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    println!("Found {} {}.", devices.len(), pluralize("client", "s", devices.len()));
    for device in &devices {
        println!("{}", describe(device));
    }
    Ok(())
}

fn get_client<T: Transport>(api: &mut ApiClient<T>, client_id: &str, json: bool) -> Result<()> {
    let device = api
        .get_device(client_id)
        .with_context(|| format!("Failed to get client \"{client_id}\""))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&device)?);
    } else {
        println!("{}", describe(&device));
    }
    Ok(())
}

fn set_client_label<T: Transport>(
    api: &mut ApiClient<T>,
    client_id: &str,
    label: &str,
) -> Result<()> {
    println!("Setting label of client with ID \"{client_id}\" to \"{label}\" ...");
    api.update_device(client_id, Some(label), None)
        .with_context(|| format!("Failed to set label of client \"{client_id}\""))?;
    Ok(())
}

fn profile_update(
    name: &Option<String>,
    accent_id: Option<i32>,
    preview_asset: &Option<String>,
    complete_asset: &Option<String>,
) -> SelfUpdate {
    let assets = match (preview_asset, complete_asset) {
        (Some(preview), Some(complete)) => Some(vec![
            Asset::image(preview.clone(), AssetSize::Preview),
            Asset::image(complete.clone(), AssetSize::Complete),
        ]),
        _ => None,
    };
    SelfUpdate {
        accent_id,
        assets,
        name: name.clone(),
    }
}

/// One line per device: ID, label, class, model and registration time.
fn describe(device: &Device) -> String {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        device.id,
        or_dash(device.label.clone()),
        or_dash(device.class.map(|class| class.to_string())),
        or_dash(device.model.clone()),
        or_dash(device.time.clone()),
    )
}
