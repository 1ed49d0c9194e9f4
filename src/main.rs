use crossterm::event;
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use scribe::app::{Editor, TerminalRequest, UiTheme};
use scribe::services::keybinding::{KeybindingService, Platform};
use scribe::services::settings;
use scribe::tui::osc52;
use scribe::tui::terminal_guard::{TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The file named on the command line, made absolute against `cwd`.
fn resolve_startup_path(cwd: &Path, arg: Option<&str>) -> io::Result<Option<PathBuf>> {
    let Some(arg) = arg.filter(|a| !a.trim().is_empty()) else {
        return Ok(None);
    };
    let path = Path::new(arg);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(Some(path))
}

fn apply_requests(editor: &mut Editor) {
    for request in editor.take_requests() {
        match request {
            TerminalRequest::SetTitle(title) => {
                if let Err(err) = execute!(io::stdout(), SetTitle(&title)) {
                    tracing::warn!(error = %err, "set title failed");
                }
            }
            TerminalRequest::CopyToClipboard(text) => {
                if let Err(err) = osc52::copy_to_clipboard(&text) {
                    tracing::warn!(error = %err, "clipboard copy failed");
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    let arg = std::env::args().nth(1);
    let cwd = std::env::current_dir()?;
    let startup_path = resolve_startup_path(&cwd, arg.as_deref())?;

    let _logging = logging::init();

    let settings = settings::load_settings();
    let mut keybindings = KeybindingService::with_defaults(Platform::current());
    for rule in keybindings.apply_rules(&settings.keybindings) {
        tracing::warn!(key = %rule.key, command = %rule.command, "ignored keybinding");
    }

    let mut theme = UiTheme::default();
    theme.apply_settings(&settings.theme);
    theme.adapt_to_terminal_capabilities();

    let mut editor = Editor::new(&settings, keybindings).with_theme(theme);
    if let Some(path) = startup_path {
        editor.open_initial(path);
    }

    let guard = TerminalGuard::new()?;
    guard.install_panic_hook();

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = scribe::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    apply_requests(&mut editor);

    loop {
        terminal.draw(|frame| editor.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            editor.handle_event(&ev);
            apply_requests(&mut editor);
        }

        if editor.should_quit() {
            break;
        }
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "shutting down");
            break;
        }
    }

    drop(terminal);
    drop(guard);
    tracing::info!("bye");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
