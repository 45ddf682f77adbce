/// Taller - administrative dashboard in the terminal
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taller_client::TallerClient;
use taller_console::{build_dashboard, read_photo, render, ConsoleConfig};
use taller_core::{Panel, Role, Status};
use taller_dashboard::{Dashboard, ProfileField};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taller")]
#[command(about = "Taller administrative dashboard", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TALLER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dashboard panels
    Panels,
    /// Open a panel by its routing key
    Open {
        /// Routing key (e.g. "inventory", "profile")
        key: String,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Edit the profile and save it
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Image file to use as profile photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Administrator,
            RoleArg::User => Role::User,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Activo,
    Inactivo,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Activo => Status::Active,
            StatusArg::Inactivo => Status::Inactive,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered panels stay clean on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "taller_console=info,taller_dashboard=info,taller_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Panels = cli.command {
        print!("{}", render::panel_list());
        return Ok(());
    }

    let config = ConsoleConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let mut dashboard = build_dashboard(&config)?;

    let result = match cli.command {
        Commands::Panels => Ok(()),
        Commands::Open { key } => open(&mut dashboard, &key).await,
        Commands::Profile => open(&mut dashboard, Panel::Profile.key()).await,
        Commands::Edit {
            name,
            email,
            phone,
            department,
            location,
            role,
            status,
            photo,
        } => {
            let fields = [
                (ProfileField::Name, name),
                (ProfileField::Email, email),
                (ProfileField::Phone, phone),
                (ProfileField::Department, department),
                (ProfileField::Location, location),
            ];
            edit(
                &mut dashboard,
                fields,
                role.map(Role::from),
                status.map(Status::from),
                photo,
            )
            .await
        }
    };

    log_events(&mut dashboard);
    result
}

async fn open(dashboard: &mut Dashboard<TallerClient>, key: &str) -> anyhow::Result<()> {
    let panel = dashboard.open_key(key).await?;
    show(dashboard, panel);
    Ok(())
}

async fn edit(
    dashboard: &mut Dashboard<TallerClient>,
    fields: [(ProfileField, Option<String>); 5],
    role: Option<Role>,
    status: Option<Status>,
    photo: Option<PathBuf>,
) -> anyhow::Result<()> {
    dashboard.open(Panel::EditProfile).await?;

    for (field, value) in fields {
        if let Some(value) = value {
            dashboard.edit_field(field, value)?;
        }
    }
    if let Some(role) = role {
        dashboard.set_role(role)?;
    }
    if let Some(status) = status {
        dashboard.set_status(status)?;
    }
    if let Some(path) = photo {
        let file = read_photo(&path)?;
        if let Err(e) = dashboard.select_photo(file) {
            show(dashboard, Panel::EditProfile);
            return Err(e.into());
        }
    }

    if let Err(e) = dashboard.save_profile().await {
        show(dashboard, Panel::EditProfile);
        return Err(e.into());
    }

    println!("{}", taller_dashboard::SUCCESS_MESSAGE);
    let panel = dashboard.current_view();
    show(dashboard, panel);
    Ok(())
}

fn show(dashboard: &Dashboard<TallerClient>, panel: Panel) {
    print!("{}", render::panel_heading(panel));

    match panel {
        Panel::EditProfile => {
            if let Some(editor) = dashboard.editor() {
                print!("{}", render::editor(editor));
            } else {
                print!("{}", render::load_state(dashboard.load_state()));
            }
        }
        Panel::Profile => match dashboard.profile_card() {
            Some(card) => print!("{}", render::profile_card(&card)),
            None => print!("{}", render::load_state(dashboard.load_state())),
        },
        _ => {}
    }
}

fn log_events(dashboard: &mut Dashboard<TallerClient>) {
    for event in dashboard.drain_events() {
        tracing::debug!(?event, "Dashboard event");
    }
}
