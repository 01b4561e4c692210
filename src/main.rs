use chrono::{Local, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clockidup::*;
use log::error;
use std::process;

#[derive(Parser)]
#[command(name = "clockidup")]
#[command(about = "Generate your standup entry from your Clockify time entries", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The day to report: today, yesterday, a weekday name, "2 days ago",
    /// or YYYY-MM-DD
    day: Option<String>,

    /// The Clockify API token; overrides the token stored in the config file
    #[arg(long, global = true)]
    token: Option<String>,

    /// The workspace name to use; overrides the workspace stored in the
    /// config file
    #[arg(long, global = true)]
    workspace: Option<String>,

    /// Only print the entries that are billable
    #[arg(long)]
    billable: bool,

    /// Show debug output, including the HTTP requests
    #[arg(long, global = true)]
    debug: bool,

    /// The Clockify API server
    #[arg(long, global = true, default_value = clockify::DEFAULT_SERVER)]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with your Clockify API token and choose a workspace
    Login,

    /// Choose the Clockify workspace to use
    Select,

    /// Print the clockidup version
    Version,
}

/// All flag state, collected once at startup and passed down explicitly.
struct Options {
    token: Option<String>,
    workspace: Option<String>,
    billable: bool,
    server: String,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let opts = Options {
        token: cli.token,
        workspace: cli.workspace,
        billable: cli.billable,
        server: cli.server,
    };

    let result = match cli.command {
        Some(Commands::Login) => run_login(&opts),
        Some(Commands::Select) => run_select(&opts),
        Some(Commands::Version) => {
            println!("{}", clap::crate_version!());
            Ok(())
        }
        None => match cli.day {
            Some(day) => run_day(&opts, &day),
            None => {
                Cli::command().print_help().ok();
                println!();
                Err(ClockidupError::Config(
                    "a command is required, e.g. 'login' or 'yesterday'".to_string(),
                ))
            }
        },
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

fn run_day(opts: &Options, day_arg: &str) -> Result<()> {
    let config = Config::load()?;

    let now = Local::now();
    let day = date::parse_day(day_arg, now)?;
    if day > now {
        return Err(ClockidupError::FutureDate(
            day.format("%Y-%m-%d").to_string(),
        ));
    }

    let token = opts.token.clone().unwrap_or_else(|| config.token.clone());
    if token.is_empty() {
        return Err(ClockidupError::Config(
            "no configuration found in ~/.config/clockidup.yml, run 'clockidup login' first or use --token".to_string(),
        ));
    }

    let client = ClockifyClient::new(&token, &opts.server)?;
    if !login::token_works(&client) {
        return Err(ClockidupError::Config(
            "existing token does not work, run 'clockidup login' first or use --token".to_string(),
        ));
    }

    let workspace_name = opts
        .workspace
        .clone()
        .unwrap_or_else(|| config.workspace.clone());

    let mut day_entries = entries::entries_for_day(&client, Utc::now, &workspace_name, day)?;
    if opts.billable {
        day_entries = entries::filter_billable(day_entries);
    }
    let merged = entries::merge_similar(day_entries);

    println!("{}:", report::day_heading(day, now));
    for line in report::render(&merged) {
        println!("{}", line);
    }

    Ok(())
}

fn run_login(opts: &Options) -> Result<()> {
    let config = Config::load()?;

    let new_config = login::login(&config, &opts.server)?;
    new_config.save()?;

    prompt::display_success("you are logged in!");
    Ok(())
}

fn run_select(opts: &Options) -> Result<()> {
    let mut config = Config::load()?;

    let token = opts.token.clone().unwrap_or_else(|| config.token.clone());
    if token.is_empty() {
        return Err(ClockidupError::Config(
            "no token found, run 'clockidup login' first or use --token".to_string(),
        ));
    }

    let client = ClockifyClient::new(&token, &opts.server)?;
    let workspace = login::select_workspace(&client)?;

    config.workspace = workspace.clone();
    config.save()?;

    prompt::display_success(&format!("workspace '{}' selected", workspace));
    Ok(())
}
