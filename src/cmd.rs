//! Command implementations for the CLI interface.
//!
//! Every command works on a `Session`: the store built at start-up, the
//! configured initial view and the sample projects. Output goes to stdout as a
//! plain table or, with `--json`, as pretty-printed JSON.

use std::io;

use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::dates::format_due_relative;
use crate::fields::*;
use crate::stats::{compute_stats, due_instant, is_overdue};
use crate::store::TaskStore;
use crate::task::{Project, Task};
use crate::tui::run::run_tui;
use crate::view::{derive_view, ViewQuery};

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive board (the default).
    Ui,

    /// Print the filtered and sorted task list.
    List {
        /// Case-insensitive search over title, description and tags.
        #[arg(long)]
        search: Option<String>,
        /// Status filter: all | todo | in-progress | review | completed.
        #[arg(long)]
        status: Option<Filter<Status>>,
        /// Priority filter: all | low | medium | high.
        #[arg(long)]
        priority: Option<Filter<Priority>>,
        /// Sort key.
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print summary counts for the whole board.
    Stats {
        /// Evaluate overdue tasks as of the start of this day (YYYY-MM-DD).
        #[arg(long)]
        now: Option<NaiveDate>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the sample projects.
    Projects {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CmdError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// State shared by all commands.
pub struct Session {
    pub store: TaskStore,
    pub query: ViewQuery,
    pub projects: Vec<Project>,
}

/// Launch the terminal user interface.
pub fn cmd_ui(session: Session) -> Result<(), CmdError> {
    run_tui(session.store, session.query, session.projects)?;
    Ok(())
}

/// Override the configured view with whatever was given on the command line.
pub fn apply_list_overrides(
    mut query: ViewQuery,
    search: Option<String>,
    status: Option<Filter<Status>>,
    priority: Option<Filter<Priority>>,
    sort: Option<SortKey>,
) -> ViewQuery {
    if let Some(s) = search {
        query.set_search(s);
    }
    if let Some(s) = status {
        query.set_status_filter(s);
    }
    if let Some(p) = priority {
        query.set_priority_filter(p);
    }
    if let Some(k) = sort {
        query.set_sort(k);
    }
    query
}

/// Print the derived view.
pub fn cmd_list(session: &Session, query: &ViewQuery, json: bool) -> Result<(), CmdError> {
    let tasks = derive_view(session.store.tasks(), query);
    debug!(shown = tasks.len(), total = session.store.len(), "list");
    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        print!("{}", render_table(&tasks, Utc::now()));
    }
    Ok(())
}

/// Print stats, evaluated at midnight UTC of `now` or at the current instant.
pub fn cmd_stats(session: &Session, now: Option<NaiveDate>, json: bool) -> Result<(), CmdError> {
    let now: DateTime<Utc> = now.map_or_else(Utc::now, due_instant);
    let stats = compute_stats(session.store.tasks(), now);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{:<12} {}", "Total", stats.total);
        println!("{:<12} {}", "Completed", stats.completed);
        println!("{:<12} {}", "In Progress", stats.in_progress);
        println!("{:<12} {}", "Overdue", stats.overdue);
        println!("{:<12} {}%", "Done", stats.completion_percent());
    }
    Ok(())
}

/// List the sample projects with their display counts.
pub fn cmd_projects(session: &Session, json: bool) -> Result<(), CmdError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&session.projects)?);
        return Ok(());
    }
    println!("{:<4} {:<20} {:<8} {}", "ID", "Project", "Color", "Tasks");
    for p in &session.projects {
        println!("{:<4} {:<20} {:<8} {}", p.id, truncate(&p.name, 20), p.color_tag, p.task_count);
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}

/// Render tasks as a fixed-width table. Overdue tasks are flagged with `!`.
///
/// Relative due labels use the local calendar day; the overdue flag uses `now`.
pub fn render_table(tasks: &[&Task], now: DateTime<Utc>) -> String {
    let today = now.with_timezone(&Local).date_naive();
    let mut out = format!(
        "{:<4} {:<12} {:<7} {:<16} {:<5} {:<14} {}\n",
        "ID", "Status", "Pri", "Due", "Done", "Assignee", "Title [tags]"
    );
    for t in tasks {
        let tags = if t.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", t.tags.join(","))
        };
        let flag = if is_overdue(t, now) { "!" } else { "" };
        let due = format!("{}{}", format_due_relative(t.due_date, today), flag);
        out.push_str(&format!(
            "{:<4} {:<12} {:<7} {:<16} {:<5} {:<14} {}{}\n",
            t.id.to_string(),
            format_status(t.status),
            format_priority(t.priority),
            due,
            t.effective_progress().to_string(),
            truncate(&t.assignee.name, 14),
            t.title,
            tags
        ));
    }
    out
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
