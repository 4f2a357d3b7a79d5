//! gucs — terminal browser for the CS department catalog

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gucs::app::{AppCommand, AppController, Tab};
use gucs::catalog::Catalog;
use gucs::config::{app::TITLE, storage::LOG_FILE};
use gucs::data::{
    favorite, storage, CatalogEntry, EntryKind, FavoritesManager, FavoritesStore, RecordId,
    Settings, SortKey,
};

#[derive(Parser)]
#[command(name = "gucs", about = "Browse CS courses and professors, keep favorites", version)]
struct Cli {
    /// Directory for favorites, settings and logs (default: user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive browser (default)
    Browse,
    /// Print the catalog
    Catalog,
    /// Print saved favorites
    Favorites {
        /// Sort order (default: from settings)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Favorite a catalog entry by name
    Add {
        /// Class name, or professor name with --professor
        name: String,
        #[arg(long)]
        professor: bool,
    },
    /// Remove favorites by record id
    Remove {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Class,
    Professor,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Class => SortKey::ClassName,
            SortArg::Professor => SortKey::ProfessorName,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dir = cli.data_dir.as_deref();

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            init_file_logging(dir)?;
            browse(dir)
        }
        command => {
            init_stderr_logging();
            run_command(command, dir)
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a file: the full-screen UI owns stdout and stderr.
fn init_file_logging(dir: Option<&Path>) -> anyhow::Result<()> {
    let path = storage::data_path_in(dir, LOG_FILE)?;
    if let Some(parent) = path.parent() {
        storage::create_dir_if_needed(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// =============================================================================
// One-shot commands
// =============================================================================

fn run_command(command: Command, dir: Option<&Path>) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    match command {
        Command::Browse => unreachable!("handled in main"),
        Command::Catalog => {
            println!("{TITLE}\n");
            println!("Classes:");
            for entry in catalog.courses() {
                println!("  {} ({})", entry.display_name(), entry.professor_name());
            }
            println!("\nProfessors:");
            for entry in catalog.professors() {
                println!("  {} - {}", entry.display_name(), entry.about());
            }
        }
        Command::Favorites { sort } => {
            let sort = match sort {
                Some(arg) => arg.into(),
                None => Settings::load_in(dir)?.favorites_sort,
            };
            let store = FavoritesManager::open_in(dir)?;
            let records = store.list_all(sort);
            if records.is_empty() {
                println!("No favorites yet.");
            }
            for record in records {
                println!(
                    "{}  {:<9} {}",
                    record.id,
                    record.entry.kind().label(),
                    describe(&record.entry)
                );
            }
        }
        Command::Add { name, professor } => {
            let kind = if professor {
                EntryKind::Professor
            } else {
                EntryKind::Course
            };
            let Some(entry) = catalog.find(kind, &name) else {
                bail!("no {} named '{}' in the catalog", kind.label().to_lowercase(), name);
            };
            let mut store = FavoritesManager::open_in(dir)?;
            match favorite(&mut store, entry)? {
                Some(id) => println!("Added {} ({})", entry.display_name(), id),
                None => println!("{} is already a favorite", entry.display_name()),
            }
        }
        Command::Remove { ids } => {
            let ids = ids
                .iter()
                .map(|s| s.parse::<RecordId>())
                .collect::<Result<Vec<_>, _>>()?;
            let mut store = FavoritesManager::open_in(dir)?;
            let removed = store.delete(&ids)?;
            println!("Removed {} of {} favorite(s)", removed, ids.len());
        }
    }
    Ok(())
}

fn describe(entry: &CatalogEntry) -> String {
    match entry {
        CatalogEntry::Course {
            class_name,
            professor_name,
            ..
        } => format!("{class_name} ({professor_name})"),
        CatalogEntry::Professor { name, .. } => name.clone(),
    }
}

// =============================================================================
// Interactive browser
// =============================================================================

fn browse(dir: Option<&Path>) -> anyhow::Result<()> {
    let settings = Settings::load_in(dir)?;
    let store = FavoritesManager::open_in(dir)?;
    let mut ctrl = AppController::new(Catalog::builtin(), store, settings);
    info!("browser started");

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    // Key release events make long presses exact where the terminal supports them
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        io::stdout().execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let result = run_loop(&mut ctrl);

    // Restore terminal
    if enhanced {
        let _ = io::stdout().execute(PopKeyboardEnhancementFlags);
    }
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = ctrl.settings().save_in(dir) {
        warn!(error = %e, "failed to save settings");
    }
    info!("browser closed");
    result
}

fn run_loop(ctrl: &mut AppController<FavoritesManager>) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let tick_rate = Duration::from_millis(50);

    loop {
        terminal.draw(|f| draw_ui(f, ctrl))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if let Some(cmd) = key_to_command(key.code, key.kind, Instant::now()) {
                    if ctrl.handle_command(cmd) {
                        break;
                    }
                }
            }
        }
        ctrl.handle_command(AppCommand::Tick(Instant::now()));
    }
    Ok(())
}

fn key_to_command(code: KeyCode, kind: KeyEventKind, now: Instant) -> Option<AppCommand> {
    if code == KeyCode::Char(' ') {
        return Some(match kind {
            KeyEventKind::Release => AppCommand::Release(now),
            KeyEventKind::Press | KeyEventKind::Repeat => AppCommand::Press(now),
        });
    }
    if kind == KeyEventKind::Release {
        return None;
    }

    let cmd = match code {
        KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
        KeyCode::Tab => AppCommand::NextTab,
        KeyCode::Char('1') => AppCommand::SelectTab(Tab::Classes),
        KeyCode::Char('2') => AppCommand::SelectTab(Tab::Professors),
        KeyCode::Char('3') => AppCommand::SelectTab(Tab::Favorites),
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Char('f') => AppCommand::FavoriteSelected,
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => AppCommand::DeleteSelected,
        KeyCode::Char('s') => AppCommand::CycleSort,
        _ => return None,
    };
    Some(cmd)
}

const ACCENT: Color = Color::Magenta;

fn draw_ui(f: &mut Frame, ctrl: &AppController<FavoritesManager>) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" gucs v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // title
        Constraint::Length(1), // tabs
        Constraint::Min(5),    // list + detail
        Constraint::Length(2), // status + help
    ])
    .split(inner);

    f.render_widget(
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).bold()),
        chunks[0],
    );
    draw_tabs(f, ctrl, chunks[1]);

    let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    draw_list(f, ctrl, body[0]);
    draw_detail(f, ctrl, body[1]);
    draw_footer(f, ctrl, chunks[3]);
}

fn draw_tabs(f: &mut Frame, ctrl: &AppController<FavoritesManager>, area: Rect) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .map(|t| format!(" {} {} ", t.index() + 1, t.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(ctrl.snapshot().tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(ACCENT).bold());
    f.render_widget(tabs, area);
}

fn draw_list(f: &mut Frame, ctrl: &AppController<FavoritesManager>, area: Rect) {
    let snap = ctrl.snapshot();
    let block = Block::default()
        .title(format!(" {} ", snap.tab.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = match snap.tab {
        Tab::Favorites => snap
            .favorites
            .iter()
            .map(|r| {
                let (icon, color) = match r.entry.kind() {
                    EntryKind::Course => ("■ ", Color::Yellow),
                    EntryKind::Professor => ("● ", Color::Green),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(icon, Style::default().fg(color)),
                    Span::raw(r.entry.display_name().to_string()),
                ]))
            })
            .collect(),
        tab => ctrl
            .catalog_rows(tab)
            .into_iter()
            .map(|entry| {
                let star = if ctrl.is_favorited(entry) {
                    Span::styled("★ ", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("☆ ", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(Line::from(vec![star, Span::raw(entry.display_name().to_string())]))
            })
            .collect(),
    };

    if items.is_empty() {
        let hint = Paragraph::new("Press and hold on classes to favorite them")
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(ACCENT).bold())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(snap.selected()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(f: &mut Frame, ctrl: &AppController<FavoritesManager>, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(entry) = ctrl.selected_entry() else {
        f.render_widget(block, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut text = vec![
        Line::from(Span::styled(
            entry.display_name().to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::default(),
    ];
    let heading = match entry {
        CatalogEntry::Course { professor_name, .. } => {
            text.push(Line::from(vec![
                Span::styled("Professor: ", label),
                Span::raw(professor_name.clone()),
            ]));
            "About the Course"
        }
        CatalogEntry::Professor { image, .. } => {
            text.push(Line::from(vec![
                Span::styled("Image: ", label),
                Span::raw(image.clone().unwrap_or_else(|| "---".to_string())),
            ]));
            "About the Professor"
        }
    };
    text.push(Line::default());
    text.push(Line::from(Span::styled(heading, Style::default().fg(ACCENT))));
    text.push(Line::from(entry.about().to_string()));

    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_footer(f: &mut Frame, ctrl: &AppController<FavoritesManager>, area: Rect) {
    let snap = ctrl.snapshot();
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let status = if snap.press_progress > 0.0 {
        Line::from(Span::styled(
            format!("  Hold to favorite... {:.0}%", snap.press_progress * 100.0),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", snap.status_text),
            Style::default().fg(if snap.is_error { Color::Red } else { Color::Green }),
        ))
    };
    f.render_widget(Paragraph::new(status), rows[0]);

    let key = Style::default().fg(Color::Yellow);
    let mut help = vec![
        Span::styled("  'q' ", key),
        Span::raw("quit  |  "),
        Span::styled("Tab ", key),
        Span::raw("switch  |  "),
    ];
    if snap.tab == Tab::Favorites {
        help.extend([
            Span::styled("'d' ", key),
            Span::raw("remove  |  "),
            Span::styled("'s' ", key),
            Span::raw(format!("sort: {}", snap.favorites_sort.label())),
        ]);
    } else {
        help.extend([
            Span::styled("hold Space ", key),
            Span::raw("favorite  |  "),
            Span::styled("'f' ", key),
            Span::raw("favorite now"),
        ]);
    }
    f.render_widget(Paragraph::new(Line::from(help)), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_maps_to_gesture() {
        let now = Instant::now();
        assert_eq!(
            key_to_command(KeyCode::Char(' '), KeyEventKind::Press, now),
            Some(AppCommand::Press(now))
        );
        assert_eq!(
            key_to_command(KeyCode::Char(' '), KeyEventKind::Repeat, now),
            Some(AppCommand::Press(now))
        );
        assert_eq!(
            key_to_command(KeyCode::Char(' '), KeyEventKind::Release, now),
            Some(AppCommand::Release(now))
        );
    }

    #[test]
    fn test_releases_of_other_keys_ignored() {
        let now = Instant::now();
        assert_eq!(key_to_command(KeyCode::Char('q'), KeyEventKind::Release, now), None);
        assert_eq!(
            key_to_command(KeyCode::Char('q'), KeyEventKind::Press, now),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_sort_arg_conversion() {
        assert_eq!(SortKey::from(SortArg::Class), SortKey::ClassName);
        assert_eq!(SortKey::from(SortArg::Professor), SortKey::ProfessorName);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gucs", "--data-dir", "/tmp/x", "favorites", "--sort", "professor"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Some(Command::Favorites { sort: Some(SortArg::Professor) })
        ));

        assert!(Cli::try_parse_from(["gucs", "remove"]).is_err());
    }
}
