use clap::Parser;
use hatdaily::application::{
    archive_last_month, init::init, manage_config::KEYS, open_view, ArchiveOutcome, ConfigService,
    Host,
};
use hatdaily::cli::{format_archive_report, format_settings, Cli, Commands};
use hatdaily::domain::Granularity;
use hatdaily::error::HatDailyError;
use hatdaily::infrastructure::{
    clock_from_env, ConsoleNotifier, EditorWorkspace, FileSystemVault, PrintWorkspace, Workspace,
};
use std::str::FromStr;

fn main() {
    hatdaily::init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), HatDailyError> {
    match cli.command {
        Some(Commands::Init { path, folder }) => {
            let settings = init(&path, folder.as_deref())?;
            println!("Initialized hatdaily at {}", path.display());
            match settings.daily_folder() {
                Some(folder) => println!("Journal folder: {}", folder),
                None => println!("Next: hatdaily config daily_folder_path <folder>"),
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemVault::discover()?);

            if list {
                print!("{}", format_settings(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v.trim());
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: hatdaily config [--list | <key> [<value>]]");
                println!("Valid keys: {}", KEYS.join(", "));
            }
            Ok(())
        }
        Some(Commands::View { granularity, print }) => {
            let granularity = Granularity::from_str(&granularity)?;
            let vault = FileSystemVault::discover()?;
            let settings = vault.load_settings()?;
            let clock = clock_from_env()?;
            let notifier = ConsoleNotifier;
            let host = Host::new(&vault, &*clock, &notifier);

            let mut workspace: Box<dyn Workspace> = if print {
                Box::new(PrintWorkspace::new(std::io::stdout()))
            } else {
                Box::new(EditorWorkspace::new(
                    settings.get_editor(),
                    vault.root().to_path_buf(),
                ))
            };

            open_view(&host, &mut *workspace, &settings, granularity)?;
            Ok(())
        }
        Some(Commands::Archive) => {
            let vault = FileSystemVault::discover()?;
            let settings = vault.load_settings()?;
            let clock = clock_from_env()?;
            let notifier = ConsoleNotifier;
            let host = Host::new(&vault, &*clock, &notifier);

            match archive_last_month(&host, &settings)? {
                ArchiveOutcome::NothingToArchive => Ok(()),
                ArchiveOutcome::Archived(report) => {
                    print!("{}", format_archive_report(&report));
                    if report.is_complete() {
                        Ok(())
                    } else {
                        Err(HatDailyError::ArchiveIncomplete(report.failed.len()))
                    }
                }
            }
        }
        None => {
            println!("hatdaily - Three-pane periodic journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
