// EventRater - create, locate and rate events
// Entry point and command-line front end

use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use eventrater::app::{default_data_dir, AppState};
use eventrater::events::{Coordinates, RatingCriterion};
use eventrater::services::GeocodingSettings;
use eventrater::views::{EventDetailsView, EventForm, HomeView, RateForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eventrater")]
#[command(about = "Create, locate and rate events", long_about = None)]
struct Cli {
    /// Directory holding events and settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// A position given on the command line
#[derive(Args, Clone, Copy)]
struct PositionArgs {
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl PositionArgs {
    fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// Fields of the add and edit forms
#[derive(Args)]
struct FormArgs {
    /// Event name (at most 20 characters)
    #[arg(long)]
    name: Option<String>,

    /// Event date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Event time, HH:MM[:SS] (defaults to now)
    #[arg(long)]
    time: Option<NaiveTime>,

    #[command(flatten)]
    position: PositionArgs,

    /// Use this address instead of reverse geocoding the position
    #[arg(long)]
    address: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List events, nearest first
    List {
        #[command(flatten)]
        position: PositionArgs,

        /// Show events in stored order without sorting by distance
        #[arg(long)]
        all: bool,
    },
    /// Show one event
    Show { id: u32 },
    /// Add an event
    Add(FormArgs),
    /// Edit the name, date, time or location of an event
    Edit {
        id: u32,

        #[command(flatten)]
        form: FormArgs,
    },
    /// Rate an event on each criterion from 0 to 3
    Rate {
        id: u32,
        #[arg(long, default_value_t = 0)]
        location: u8,
        #[arg(long, default_value_t = 0)]
        entertainment: u8,
        #[arg(long, default_value_t = 0)]
        atmosphere: u8,
        #[arg(long, default_value_t = 0)]
        prices: u8,
        #[arg(long, default_value_t = 0)]
        overall: u8,
    },
    /// Delete an event
    Delete { id: u32 },
    /// Resolve a position to an address
    Geocode {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Store the reverse geocoding API key and endpoint
    SetGeocoding {
        api_key: String,
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Store the position used when listing without --lat/--lon
    SetHome {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Forget the stored home position
    ClearHome,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventrater=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let state = AppState::setup(data_dir).await?;

    run(&state, cli.command).await
}

async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    let service = &state.events_service;

    match command {
        Command::List { position, all } => {
            let view = if all {
                HomeView::from_events(&service.list_events().await)
            } else {
                let location = state.location(position.coordinates()).await?;
                let mut view = HomeView::new();
                view.refresh(service, &location).await;
                if view.entries.is_empty() && position.coordinates().is_none() {
                    tracing::info!("No position available; pass --lat/--lon, set a home position or use --all");
                }
                view
            };
            print!("{}", view.render());
        }
        Command::Show { id } => {
            let event = service.get_event(id).await?;
            print!("{}", EventDetailsView::new(event).render());
        }
        Command::Add(args) => {
            let mut form = EventForm::new(Local::now().naive_local());
            fill_form(state, &mut form, args).await?;

            let event = service.create_event(form.to_draft()?).await?;
            print!("{}", EventDetailsView::new(event).render());
        }
        Command::Edit { id, form: args } => {
            let existing = service.get_event(id).await?;
            let mut form = EventForm::for_edit(&existing, Local::now().naive_local());
            fill_form(state, &mut form, args).await?;

            match service.edit_event(id, form.to_draft()?).await? {
                Some(event) => print!("{}", EventDetailsView::new(event).render()),
                None => anyhow::bail!("Event not found for updating: {}", id),
            }
        }
        Command::Rate {
            id,
            location,
            entertainment,
            atmosphere,
            prices,
            overall,
        } => {
            let event = service.get_event(id).await?;
            let mut form = RateForm::new(&event);
            form.set(RatingCriterion::Location, location)?;
            form.set(RatingCriterion::Entertainment, entertainment)?;
            form.set(RatingCriterion::Atmosphere, atmosphere)?;
            form.set(RatingCriterion::Prices, prices)?;
            form.set(RatingCriterion::Overall, overall)?;

            match service.rate_event(id, form.ratings).await? {
                Some(event) => print!("{}", EventDetailsView::new(event).render()),
                None => anyhow::bail!("Event not found for updating ratings: {}", id),
            }
        }
        Command::Delete { id } => {
            if service.delete_event(id).await? {
                println!("Deleted event {}", id);
            } else {
                anyhow::bail!("Event not found: {}", id);
            }
        }
        Command::Geocode { lat, lon } => {
            let geocoder = state.geocoder().await?;
            println!("{}", geocoder.reverse(Coordinates::new(lat, lon)).await?);
        }
        Command::Config(config) => run_config(state, config).await?,
    }

    Ok(())
}

/// Apply command-line fields to a form, resolving the address when needed
async fn fill_form(state: &AppState, form: &mut EventForm, args: FormArgs) -> anyhow::Result<()> {
    if let Some(name) = args.name {
        if !form.set_name(&name) {
            // Keep it so validation reports the length limit
            form.name = name;
        }
    }
    if let Some(date) = args.date {
        form.set_date(date);
    }
    if let Some(time) = args.time {
        form.set_time(time);
    }

    let position = args.position.coordinates();
    match (position, args.address) {
        (Some(coords), Some(address)) => {
            form.select_location(coords);
            form.set_address(address);
        }
        (Some(coords), None) => match state.geocoder().await {
            Ok(geocoder) => form.pick_location(coords, &geocoder).await,
            Err(e) => {
                tracing::error!("Error getting address: {}", e);
                form.select_location(coords);
            }
        },
        (None, Some(address)) => form.set_address(address),
        (None, None) => {}
    }

    Ok(())
}

async fn run_config(state: &AppState, command: ConfigCommand) -> anyhow::Result<()> {
    let settings = &state.settings_service;

    match command {
        ConfigCommand::SetGeocoding { api_key, base_url } => {
            let mut geocoding = GeocodingSettings {
                api_key,
                ..GeocodingSettings::default()
            };
            if let Some(base_url) = base_url {
                geocoding.base_url = base_url;
            }
            settings.update_geocoding(geocoding).await?;
            println!("Geocoding settings saved");
        }
        ConfigCommand::SetHome { lat, lon } => {
            settings
                .update_home_position(Some(Coordinates::new(lat, lon)))
                .await?;
            println!("Home position set to {}", Coordinates::new(lat, lon));
        }
        ConfigCommand::ClearHome => {
            settings.update_home_position(None).await?;
            println!("Home position cleared");
        }
    }

    Ok(())
}
