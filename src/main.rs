use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use ballpit::persist::JsonFileStore;
use ballpit::{Config, Session, Status};

#[derive(Parser, Debug)]
#[command(name = "ballpit")]
#[command(about = "Evolution recommendations and fusion for Ball x Pit runs")]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog file (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Save file (overrides config)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the run and recommendations
    Show,
    /// Show recommendations only
    Recommend,
    /// Add an item to the run
    Add { name: String },
    /// Remove the item in a slot
    Remove { index: usize },
    /// Craft an evolution
    Craft { name: String },
    /// Fuse two slots into one item
    Fuse { a: usize, b: usize },
    /// Toggle whether an item counts as discovered
    Discover { name: String },
    /// Clear the run, keeping discoveries
    Reset,
    /// Pick or unpick a character
    Character { name: String },
    /// Pick a character duo
    Duo { name: String },
    /// Replace the run with a meta build
    Build { name: String },
    /// List evolutions, characters, duos and builds
    Catalog,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = match args.verbose {
        0 => "ballpit=info",
        1 => "ballpit=debug",
        _ => "ballpit=trace",
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(catalog) = args.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(save) = args.save {
        config.save_file = save;
    }

    let mut session = Session::from_config(&config)?;
    info!(
        "Loaded {} evolutions, {} items in run",
        session.catalog().len(),
        session.inventory().len()
    );

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            print_run(&session);
            print_recommendations(&mut session);
        }
        Command::Recommend => print_recommendations(&mut session),
        Command::Add { name } => {
            if session.add_item(&name) {
                println!("Added {name}");
            } else {
                println!("Item name cannot be empty");
            }
            print_recommendations(&mut session);
        }
        Command::Remove { index } => {
            match session.remove_at(index) {
                Some(item) => println!("Removed {item}"),
                None => println!("No item in slot {index}"),
            }
            print_run(&session);
        }
        Command::Craft { name } => {
            match session.craft(&name) {
                Ok(outcome) if outcome.newly_discovered => {
                    println!("Discovered {}!", outcome.product)
                }
                Ok(outcome) => println!("Crafted {}", outcome.product),
                Err(err) => println!("Cannot craft: {err}"),
            }
            print_run(&session);
            print_recommendations(&mut session);
        }
        Command::Fuse { a, b } => {
            match session.fuse_slots(a, b) {
                Ok(product) => println!("Created {product}"),
                Err(err) => println!("Cannot fuse: {err}"),
            }
            print_run(&session);
        }
        Command::Discover { name } => {
            let state = if session.toggle_discovery(&name) {
                "discovered"
            } else {
                "undiscovered"
            };
            println!("{name} marked {state}");
        }
        Command::Reset => {
            session.reset_run();
            println!("Run cleared");
        }
        Command::Character { name } => {
            if !session.select_character(&name) {
                println!("Unknown character {name}");
            }
            print_run(&session);
        }
        Command::Duo { name } => {
            if !session.select_duo(&name) {
                println!("Unknown duo {name}");
            }
            print_run(&session);
        }
        Command::Build { name } => {
            if !session.load_build(&name) {
                println!("Unknown build {name}");
            }
            print_run(&session);
            print_recommendations(&mut session);
        }
        Command::Catalog => print_catalog(&session),
    }

    Ok(())
}

fn print_run(session: &Session<JsonFileStore>) {
    println!("== Run ({} items) ==", session.inventory().len());
    for (i, item) in session.inventory().iter().enumerate() {
        let mark = if session.fusion_selection().contains(i) { "*" } else { " " };
        println!("{mark}[{i}] {item}");
    }
    if !session.selected_characters().is_empty() {
        println!("Characters: {}", session.selected_characters().join(", "));
    }
    println!("Encyclopedia: {} discovered", session.discovery().len());
}

fn print_recommendations(session: &mut Session<JsonFileStore>) {
    let recommendations = session.recommendations();
    println!("== Recommendations ({}) ==", recommendations.len());
    if recommendations.is_empty() {
        println!("No possible evolutions found.");
    }
    for rec in recommendations {
        let tag = match (rec.status, rec.is_new_discovery) {
            (Status::Ready, true) => "DISCOVER NOW",
            (Status::Ready, false) => "CRAFT",
            (_, true) => "new",
            _ => "",
        };
        print!("{:<10} {:<24} {}", rec.status.label(), rec.name(), tag);
        if !rec.missing.is_empty() {
            print!("  find: {}", rec.missing.join(", "));
        }
        println!();
    }
}

fn print_catalog(session: &Session<JsonFileStore>) {
    let catalog = session.catalog();
    println!("== Evolutions ==");
    for entry in catalog.entries() {
        let logic = entry.logic().map(str::to_string).unwrap_or_else(|| {
            entry
                .alternatives()
                .iter()
                .map(|alt| alt.join(" + "))
                .collect::<Vec<_>>()
                .join(" or ")
        });
        let found = if session.discovery().contains(entry.name()) { "+" } else { " " };
        println!("{found} {:<24} [{}] {}", entry.name(), entry.kind().display_name(), logic);
    }

    println!("== Characters ==");
    for character in catalog.characters() {
        println!("  {:<24} {}", character.name, character.ball.as_deref().unwrap_or("-"));
    }

    println!("== Duos ==");
    for duo in catalog.duos() {
        println!("  {:<24} {} ({})", duo.name, duo.chars.join(" + "), duo.tag);
    }

    println!("== Builds ==");
    for build in catalog.builds() {
        println!("  {:<24} {}", build.name, build.items().collect::<Vec<_>>().join(", "));
    }
}
