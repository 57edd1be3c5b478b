use clap::Parser;
use dayjot::application::{init::init, ConfigService, JournalApp, SystemClock};
use dayjot::cli::{format_entry, format_entry_list, format_tag_summary, Cli, Commands, TagAction};
use dayjot::domain::{EntryDate, ExportFormat};
use dayjot::error::{JournalError, Result};
use dayjot::infrastructure::{
    DirectoryEmitter, EditorSession, FileKeyValueStore, FileSystemRepository, JournalRepository,
};
use std::path::PathBuf;
use std::str::FromStr;

type App = JournalApp<FileKeyValueStore, SystemClock>;

fn main() {
    let cli = Cli::parse();
    dayjot::logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("dayjot - Terminal day journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized dayjot journal at {}", path.display());
            Ok(())
        }
        Commands::Write { text, tags } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut app = open_app(&repo)?;

            if let Some(raw) = tags {
                app.add_tags(&raw);
            }
            let text = match text {
                Some(text) => text,
                None => EditorSession::new(config.get_editor())
                    .compose(&repo.draft_path(), &app.draft().text)?,
            };
            app.set_draft_text(text);
            app.save_entry()?;

            println!("✓ Entry saved successfully!");
            Ok(())
        }
        Commands::Show { date } => {
            let repo = FileSystemRepository::discover()?;
            let app = open_app(&repo)?;
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => app.today(),
            };

            match app.entry(date) {
                Some(entry) => print!("{}", format_entry(date, entry)),
                None => println!("No entry for {}", date),
            }
            Ok(())
        }
        Commands::List { date, tag } => {
            let repo = FileSystemRepository::discover()?;
            let app = open_app(&repo)?;

            let entries = if let Some(raw) = date {
                app.entries_on(parse_date(&raw)?)
            } else if let Some(tag) = tag {
                app.entries_tagged(&tag.trim().to_lowercase())
            } else {
                app.past_entries()
            };

            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Tags => {
            let repo = FileSystemRepository::discover()?;
            let app = open_app(&repo)?;
            let summary = app.tag_summary();

            print!("{}", format_tag_summary(&summary));
            if summary.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Tag { action } => {
            let repo = FileSystemRepository::discover()?;
            let mut app = open_app(&repo)?;

            match action {
                TagAction::Add { tags } => {
                    if app.add_tags(&tags) == 0 {
                        println!("No new tags to add");
                        return Ok(());
                    }
                }
                TagAction::Remove { tag } => {
                    let tag = tag.trim().to_lowercase();
                    if !app.draft().tags.contains(&tag) {
                        println!("Tag not on today's entry: {}", tag);
                        return Ok(());
                    }
                    app.remove_tag(&tag);
                }
            }

            let entry = app.save_entry()?;
            if entry.tags().is_empty() {
                println!("Tags: (none)");
            } else {
                println!("Tags: {}", entry.tags().join(", "));
            }
            Ok(())
        }
        Commands::Export {
            format,
            from,
            to,
            out,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let app = open_app(&repo)?;

            let format = match format {
                Some(raw) => ExportFormat::from_str(&raw).map_err(JournalError::Config)?,
                None => config.format,
            };
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let dir = out.unwrap_or_else(|| config.get_export_dir(repo.root()));

            let mut emitter = DirectoryEmitter::new(dir);
            let export = app.export_data(format, from, to, &mut emitter)?;

            println!(
                "Exported {} {} to {}",
                export.entry_count,
                if export.entry_count == 1 { "entry" } else { "entries" },
                emitted_path(&emitter, &export.filename).display()
            );
            Ok(())
        }
        Commands::Backup { out } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let app = open_app(&repo)?;
            let dir = out.unwrap_or_else(|| config.get_export_dir(repo.root()));

            let mut emitter = DirectoryEmitter::new(dir);
            let export = app.backup_all_data(&mut emitter)?;

            println!(
                "Backed up {} entries to {}",
                export.entry_count,
                emitted_path(&emitter, &export.filename).display()
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!(
                    "export_dir = {}",
                    config
                        .export_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("format = {}", config.format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: dayjot config [--list | <key> [<value>]]");
                println!("Valid keys: editor, export_dir, format, created");
                Ok(())
            }
        }
    }
}

fn open_app(repo: &FileSystemRepository) -> Result<App> {
    JournalApp::open(repo.storage(), SystemClock)
}

fn parse_date(raw: &str) -> Result<EntryDate> {
    EntryDate::from_str(raw)
}

fn emitted_path(emitter: &DirectoryEmitter, filename: &str) -> PathBuf {
    emitter
        .last_path()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| emitter.dir().join(filename))
}
