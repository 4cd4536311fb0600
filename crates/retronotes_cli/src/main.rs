//! Command-line front end over `retronotes_core`.
//!
//! # Responsibility
//! - Wire a file-backed store at startup and dispatch one command per run.
//! - Stand in for the graphical shell; all decision logic lives in core.

use chrono::NaiveDate;
use retronotes_core::{
    clear, export_to_file, init_logging, select_date, DateRange, ExportSelection, GeminiClient,
    Note, NoteDraft, NoteRepository, NoteService, SettingsRepository, SqliteKvStore,
    TextAssistant, EXPORT_FILE_NAME,
};
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use uuid::Uuid;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    let data_dir = data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    if let Err(err) = init_logging(
        retronotes_core::default_log_level(),
        &data_dir.join("logs").to_string_lossy(),
    ) {
        eprintln!("warning: logging disabled: {err}");
    }

    let cmd = args.remove(0);
    match cmd.as_str() {
        "add" => add(args, &data_dir)?,
        "list" => list(args, &data_dir)?,
        "edit" => edit(args, &data_dir)?,
        "delete" => delete(args, &data_dir)?,
        "days" => days(&data_dir)?,
        "export" => export(args, &data_dir)?,
        "settings" => settings(args, &data_dir)?,
        "polish" => assist(args, &data_dir, AssistKind::Polish)?,
        "continue" => assist(args, &data_dir, AssistKind::Continue)?,
        "path" => println!("{}", data_dir.display()),
        "help" => print_help(),
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
RetroNotes CLI
Usage:
  retronotes add <title> [body...]          Create a note
  retronotes list [--from YYYY-MM-DD] [--to YYYY-MM-DD]
                                            List notes, optionally range-filtered
  retronotes edit <id> <title> [body...]    Replace a note's title and body
  retronotes delete <id>                    Delete a note
  retronotes days                           Days that carry at least one note
  retronotes export [path] [ids...]         Export notes as JSON (default: all)
  retronotes settings [on|off]              Show or set the AI toggle
  retronotes polish <text...>               Polish text via the AI assistant
  retronotes continue <text...>             Continue a thought via the assistant
  retronotes path                           Show the data directory

Environment:
  RETRONOTES_DIR                            Override data directory (default: ~/.retronotes)
  GEMINI_API_KEY                            API key for polish/continue
"
    );
}

fn data_dir() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(dir) = env::var("RETRONOTES_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var("HOME").map_err(|_| "cannot determine home directory; set RETRONOTES_DIR")?;
    Ok(PathBuf::from(home).join(".retronotes"))
}

fn open_notes(data_dir: &Path) -> Result<NoteService<SqliteKvStore>, Box<dyn Error>> {
    let store = SqliteKvStore::open(data_dir.join("retronotes.sqlite3"))?;
    Ok(NoteService::open(NoteRepository::new(store))?)
}

fn open_settings(data_dir: &Path) -> Result<SettingsRepository<SqliteKvStore>, Box<dyn Error>> {
    let store = SqliteKvStore::open(data_dir.join("retronotes.sqlite3"))?;
    Ok(SettingsRepository::new(store))
}

fn add(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut args = args.into_iter();
    let title = args.next().ok_or("usage: retronotes add <title> [body...]")?;
    let body = args.collect::<Vec<_>>().join(" ");

    let mut service = open_notes(data_dir)?;
    let note = service.create(NoteDraft::new(title, body))?;
    println!("created {}", note.id);
    Ok(())
}

fn list(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let range = parse_range(&args)?;
    let service = open_notes(data_dir)?;

    let notes = service.list_filtered(range);
    if notes.is_empty() {
        if range.is_active() {
            println!("No notes in selected range.");
        } else {
            println!("Type something...");
        }
        return Ok(());
    }

    for note in &notes {
        print_note_line(note);
    }
    Ok(())
}

fn edit(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut args = args.into_iter();
    let id: Uuid = args
        .next()
        .ok_or("usage: retronotes edit <id> <title> [body...]")?
        .parse()?;
    let title = args.next().ok_or("usage: retronotes edit <id> <title> [body...]")?;
    let body = args.collect::<Vec<_>>().join(" ");

    let mut service = open_notes(data_dir)?;
    let note = service.update(id, NoteDraft::new(title, body))?;
    println!("updated {}", note.id);
    Ok(())
}

fn delete(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let id: Uuid = args
        .first()
        .ok_or("usage: retronotes delete <id>")?
        .parse()?;
    let mut service = open_notes(data_dir)?;
    service.delete(id)?;
    println!("deleted {id}");
    Ok(())
}

fn days(data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let service = open_notes(data_dir)?;
    for key in service.active_date_keys() {
        println!("{key}");
    }
    Ok(())
}

fn export(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut args = args.into_iter().peekable();
    let path = match args.peek() {
        Some(first) if first.parse::<Uuid>().is_err() => PathBuf::from(args.next().unwrap_or_default()),
        _ => PathBuf::from(EXPORT_FILE_NAME),
    };

    let service = open_notes(data_dir)?;
    let mut selection = ExportSelection::new();
    let ids: Vec<Uuid> = args.map(|arg| arg.parse()).collect::<Result<_, _>>()?;
    if ids.is_empty() {
        selection.select_all(service.list());
    } else {
        for id in ids {
            selection.toggle(id);
        }
    }

    export_to_file(service.list(), &selection, &path)?;
    println!("exported {} note(s) to {}", selection.len(), path.display());
    Ok(())
}

fn settings(args: Vec<String>, data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut repo = open_settings(data_dir)?;
    let mut current = repo.load()?;

    match args.first().map(String::as_str) {
        None => {}
        Some("on") => {
            current.enable_ai = true;
            repo.save(current)?;
        }
        Some("off") => {
            current.enable_ai = false;
            repo.save(current)?;
        }
        Some(other) => return Err(format!("expected `on` or `off`, got `{other}`").into()),
    }

    println!("ai: {}", if current.enable_ai { "on" } else { "off" });
    Ok(())
}

enum AssistKind {
    Polish,
    Continue,
}

fn assist(args: Vec<String>, data_dir: &Path, kind: AssistKind) -> Result<(), Box<dyn Error>> {
    let settings = open_settings(data_dir)?.load()?;
    if !settings.enable_ai {
        return Err("AI assistance is disabled; run `retronotes settings on` first".into());
    }

    let text = args.join(" ");
    let client = GeminiClient::new(env::var("GEMINI_API_KEY").ok());
    let output = match kind {
        AssistKind::Polish => client.polish(&text)?,
        AssistKind::Continue => client.continue_thought(&text)?,
    };
    println!("{output}");
    Ok(())
}

/// Parses `--from`/`--to` flags into a range via the core selection
/// operations, so the CLI cannot produce a range the picker could not.
fn parse_range(args: &[String]) -> Result<DateRange, Box<dyn Error>> {
    let mut from: Option<NaiveDate> = None;
    let mut to: Option<NaiveDate> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--from" => from = Some(parse_day(iter.next(), "--from")?),
            "--to" => to = Some(parse_day(iter.next(), "--to")?),
            other => return Err(format!("unexpected argument `{other}`").into()),
        }
    }

    let mut range = clear();
    if let Some(start) = from {
        range = select_date(range, start);
    }
    if let Some(end) = to {
        if from.is_none() {
            return Err("--to requires --from".into());
        }
        if Some(end) < from {
            return Err("--to must not be earlier than --from".into());
        }
        range = select_date(range, end);
    }
    Ok(range)
}

fn parse_day(value: Option<&String>, flag: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let raw = value.ok_or_else(|| format!("{flag} requires a YYYY-MM-DD value"))?;
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| format!("invalid date `{raw}` for {flag}: {err}"))?)
}

fn print_note_line(note: &Note) {
    let day = retronotes_core::calendar::local_day_of_ms(note.created_at)
        .map(retronotes_core::calendar::day_key)
        .unwrap_or_else(|| "????-??-??".to_string());
    let title = if note.title.is_empty() {
        "(untitled)"
    } else {
        note.title.as_str()
    };
    println!("{}  {}  {}", note.id, day, title);
}
