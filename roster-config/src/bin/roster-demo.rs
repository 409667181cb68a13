use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster_config::{ConfigSource, RosterConfig, RosterRuntime};
use roster_core::{AdminAction, ListUsersOptions, Notice, PaginatedUsers};
use roster_model::{SortField, SortOrder};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "roster-demo", about = "Sign in and print the Roster user directory")]
struct Cli {
    /// Config file (TOML or JSON); overrides ROSTER_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "admin@example.com")]
    email: String,
    #[arg(long, default_value = "password")]
    password: String,
    /// Include deactivated users
    #[arg(long)]
    show_inactive: bool,
    /// Column to sort by: firstName, lastName or email
    #[arg(long, default_value = "firstName")]
    sort: String,
    /// asc or desc
    #[arg(long, default_value = "asc")]
    order: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
        dotenvy::Error::Io(_) => Ok(false),
        _ => Err(err),
    })?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,roster_core=info,roster_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => {
            let config = RosterConfig::load_from_file(path)?;
            config.validate().context("invalid roster configuration")?;
            (config, ConfigSource::File(path.clone()))
        }
        None => RosterConfig::load_from_env()?,
    };
    info!(?source, "configuration loaded");

    let runtime = RosterRuntime::from_config(&config);
    runtime
        .session
        .login(&cli.email, &cli.password)
        .await
        .context("sign-in failed")?;

    let mut options = ListUsersOptions {
        active_only: !cli.show_inactive,
        sort_field: SortField::from(cli.sort.as_str()),
        sort_order: SortOrder::from(cli.order.as_str()),
        page_size: runtime.page_size,
        ..ListUsersOptions::default()
    };

    loop {
        let page = match runtime.admin.list_users(options).await {
            Ok(page) => page,
            Err(err) => {
                let notice = Notice::from_error(AdminAction::LoadUsers, &err);
                warn!(error = %err, "{}", notice.message);
                return Err(err).context(notice.message);
            }
        };
        print_page(&page);

        if page.page_index + 1 >= page.page_count() {
            break;
        }
        options.page_index = page.page_index + 1;
    }

    runtime.session.logout();
    Ok(())
}

fn print_page(page: &PaginatedUsers) {
    println!(
        "-- page {}/{} ({} users) --",
        page.page_index + 1,
        page.page_count().max(1),
        page.total
    );
    for user in &page.users {
        println!(
            "{:>4}  {:<12} {:<12} {:<32} {:<13} {}",
            user.id.get(),
            user.first_name,
            user.last_name,
            user.email,
            user.role.label(),
            if user.status { "active" } else { "inactive" }
        );
    }
}
