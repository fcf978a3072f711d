//! Command-line front end for the planner core.
//!
//! Each invocation restores the last session from the database, performs
//! one action and exits.

mod config;
mod render;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use config::RuntimeConfig;
use planner_core::db::open_db;
use planner_core::{
    build_month_grid, AccountService, EventDraft, EventRepository, PlaintextCredentials, Session,
    SqliteIdentityStore, TaskRepository, YearMonth,
};
use rusqlite::Connection;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Personal calendar and to-do planner", version)]
struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, env = "PLANNER_DB", global = true)]
    db: Option<PathBuf>,

    /// Directory for rolling log files (must be absolute)
    #[arg(long, env = "PLANNER_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace | debug | info | warn | error
    #[arg(long, env = "PLANNER_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new identity
    Register {
        name: String,
        #[arg(long, env = "PLANNER_PASSWORD")]
        password: String,
        /// Must repeat --password
        #[arg(long, env = "PLANNER_PASSWORD_CONFIRM")]
        confirm: String,
    },
    /// Sign in as an existing identity
    SignIn {
        name: String,
        #[arg(long, env = "PLANNER_PASSWORD")]
        password: String,
    },
    /// Sign out of the current identity
    SignOut,
    /// Show the signed-in identity
    Whoami,
    /// Show or toggle the display theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Manage calendar events
    #[command(subcommand)]
    Event(EventCommand),
    /// Manage to-do tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Print a month grid (defaults to the current month)
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        /// 1-12
        #[arg(long)]
        month: Option<u32>,
        /// Step one month back from the chosen month
        #[arg(long, conflicts_with = "next")]
        prev: bool,
        /// Step one month forward from the chosen month
        #[arg(long)]
        next: bool,
    },
}

#[derive(Subcommand)]
enum EventCommand {
    /// Add an event
    Add {
        title: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit an event; it moves to the end of the list
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete { id: Uuid },
    /// List all events by date
    List,
    /// List the events of one day
    Day { date: NaiveDate },
    /// Show the event opened from a day cell (the first stored that day)
    Open { date: NaiveDate },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Add a task
    Add {
        title: String,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a task as done
    Done { id: Uuid },
    /// Mark a task as not done
    Undo { id: Uuid },
    /// Delete a task
    Delete { id: Uuid },
    /// List tasks in insertion order
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RuntimeConfig::resolve(cli.db, cli.log_dir, cli.log_level)?;

    if let Err(err) = planner_core::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let conn = open_db(&config.db_path)
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;

    run(&conn, cli.command)
}

fn run(conn: &Connection, command: Commands) -> Result<()> {
    let accounts = AccountService::new(SqliteIdentityStore::new(conn), PlaintextCredentials);
    let mut session = accounts.restore_session()?;

    match command {
        Commands::Register {
            name,
            password,
            confirm,
        } => {
            check_confirmation(&password, &confirm)?;
            accounts.register(&name, &password)?;
            println!("Account created. You can now sign in.");
        }
        Commands::SignIn { name, password } => {
            accounts.sign_in(&mut session, &name, &password)?;
            println!("Signed in as {}", name.trim());
        }
        Commands::SignOut => {
            accounts.sign_out(&mut session)?;
            println!("Signed out");
        }
        Commands::Whoami => println!("{}", session.identity().unwrap_or("Guest")),
        Commands::Theme { toggle } => {
            let theme = if toggle {
                accounts.toggle_theme(&session)?
            } else {
                accounts.theme(&session)?
            };
            println!("{}", theme.as_str());
        }
        Commands::Event(command) => run_event(conn, &session, command)?,
        Commands::Task(command) => run_task(conn, &session, command)?,
        Commands::Calendar {
            year,
            month,
            prev,
            next,
        } => {
            let today = Local::now().date_naive();
            let ym = target_month(YearMonth::containing(today), year, month, prev, next)?;
            let events = match session.identity() {
                Some(_) => EventRepository::new(SqliteIdentityStore::new(conn)).list_all(&session)?,
                None => Vec::new(),
            };
            print!("{}", render::month(ym, &build_month_grid(ym, today, &events)));
        }
    }

    Ok(())
}

fn check_confirmation(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        bail!("Passwords do not match");
    }
    Ok(())
}

/// Month shown by `planner calendar`: `--month`/`--year` override the
/// current month, then `--prev`/`--next` step from there.
fn target_month(
    current: YearMonth,
    year: Option<i32>,
    month: Option<u32>,
    prev: bool,
    next: bool,
) -> Result<YearMonth> {
    let mut ym = match month {
        Some(month) => YearMonth::new(current.year(), month)?,
        None => current,
    };
    if let Some(year) = year {
        ym = ym.with_year(year)?;
    }
    if prev {
        ym = ym.previous();
    }
    if next {
        ym = ym.next();
    }
    Ok(ym)
}

fn run_event(conn: &Connection, session: &Session, command: EventCommand) -> Result<()> {
    let events = EventRepository::new(SqliteIdentityStore::new(conn));

    match command {
        EventCommand::Add {
            title,
            date,
            time,
            category,
            description,
        } => {
            let mut draft = EventDraft::new(title, date);
            draft.time = time;
            draft.category = category;
            draft.description = description;
            let event = events.upsert(session, draft)?;
            println!("{}", render::event_line(&event));
        }
        EventCommand::Edit {
            id,
            title,
            date,
            time,
            category,
            description,
        } => {
            let Some(existing) = events.get(session, id)? else {
                bail!("No event with id {id}");
            };
            let mut draft = EventDraft::from_event(&existing);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if time.is_some() {
                draft.time = time;
            }
            if category.is_some() {
                draft.category = category;
            }
            if description.is_some() {
                draft.description = description;
            }
            let event = events.upsert(session, draft)?;
            println!("{}", render::event_line(&event));
        }
        EventCommand::Delete { id } => {
            events.delete(session, id)?;
            println!("Deleted");
        }
        EventCommand::List => {
            for event in events.list_all(session)? {
                println!("{}", render::event_line(&event));
            }
        }
        EventCommand::Day { date } => {
            for event in events.list(session, date)? {
                println!("{}", render::event_line(&event));
            }
        }
        EventCommand::Open { date } => match events.first_on(session, date)? {
            Some(event) => println!("{}", render::event_line(&event)),
            None => println!("No events on {}", date.format("%Y-%m-%d")),
        },
    }

    Ok(())
}

fn run_task(conn: &Connection, session: &Session, command: TaskCommand) -> Result<()> {
    let tasks = TaskRepository::new(SqliteIdentityStore::new(conn));

    match command {
        TaskCommand::Add {
            title,
            due,
            description,
        } => {
            let task = tasks.add(session, &title, due, description)?;
            println!("{}", render::task_line(&task));
        }
        TaskCommand::Done { id } => tasks.set_done(session, id, true)?,
        TaskCommand::Undo { id } => tasks.set_done(session, id, false)?,
        TaskCommand::Delete { id } => {
            tasks.delete(session, id)?;
            println!("Deleted");
        }
        TaskCommand::List => {
            for task in tasks.list(session)? {
                println!("{}", render::task_line(&task));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_confirmation, target_month};
    use planner_core::YearMonth;

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert!(check_confirmation("pw1", "pw1").is_ok());
        let err = check_confirmation("pw1", "pw2").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn target_month_applies_overrides_then_steps() {
        let june = YearMonth::new(2025, 6).unwrap();

        assert_eq!(target_month(june, None, None, false, false).unwrap(), june);
        assert_eq!(
            target_month(june, None, Some(1), true, false).unwrap(),
            YearMonth::new(2024, 12).unwrap()
        );
        assert_eq!(
            target_month(june, Some(2030), None, false, true).unwrap(),
            YearMonth::new(2030, 7).unwrap()
        );
        assert!(target_month(june, None, Some(13), false, false).is_err());
    }
}
