use clap::Parser;
use crowdring::application::{
    FilterCatalogService, FilterOptions, FilterRingersService, InitService, InspectFilterService,
};
use crowdring::cli::{
    format_filter_groups, format_filter_list, format_ringer_list, parse_date, Cli, Commands,
    FilterAction,
};
use crowdring::error::CrowdringError;
use crowdring::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

/// Log filter directives, e.g. CROWDRING_LOG=crowdring=debug
const LOG_ENV: &str = "CROWDRING_LOG";

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CrowdringError> {
    match cli.command {
        Commands::Init { path } => {
            let config = InitService::execute(&path)?;
            println!("Initialized crowdring campaign at {}", path.display());
            println!("Roster: {}", path.join(&config.roster).display());
            Ok(())
        }
        Commands::Match {
            tags,
            filter,
            from,
            to,
        } => {
            let options = FilterOptions {
                tags,
                filter,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
            };

            let repo = FileSystemRepository::discover()?;
            let ringers = FilterRingersService::new(repo).execute(&options)?;
            print!("{}", with_newline(format_ringer_list(&ringers)));
            Ok(())
        }
        Commands::Inspect { tags } => {
            let filter = InspectFilterService::execute(&tags)?;
            print!("{}", with_newline(format_filter_groups(&filter)));
            Ok(())
        }
        Commands::Filters { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = FilterCatalogService::new(repo);

            match action {
                None => {
                    let filters = service.list()?;
                    print!("{}", with_newline(format_filter_list(&filters)));
                }
                Some(FilterAction::Save { name, tags }) => {
                    let filter = service.save(&name, &tags)?;
                    println!("Saved {} = {}", name, filter);
                }
                Some(FilterAction::Remove { name }) => {
                    service.remove(&name)?;
                    println!("Removed {}", name);
                }
            }
            Ok(())
        }
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
