use std::io::stdout;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::content;
use folio_core::{ThemeStore, ViewController};
use folio_protocol::{SectionId, Theme, ThemeToken, ViewState};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tracing::debug;

use crate::page::{PageLine, ROLE_PLACEHOLDER, TerminalPage};
use crate::theme::resolve;

const IDLE_POLL: Duration = Duration::from_millis(100);
const FRAME: Duration = Duration::from_millis(16);
const WHEEL_ROWS: isize = 3;

/// What a key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ScrollBy(isize),
    PageBy(isize),
    ScrollTop,
    Navigate(SectionId),
    ToggleTheme,
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Up | KeyCode::Char('k') => Command::ScrollBy(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::ScrollBy(1),
        KeyCode::PageUp => Command::PageBy(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => Command::PageBy(1),
        KeyCode::Home | KeyCode::Char('g') => Command::ScrollTop,
        KeyCode::Char('t') => Command::ToggleTheme,
        KeyCode::Char('p') => Command::Navigate(SectionId::Projects),
        KeyCode::Char('c') => Command::Navigate(SectionId::Contact),
        KeyCode::Char(d @ '1'..='9') => {
            let index = d.to_digit(10)? as usize - 1;
            Command::Navigate(content::NAV_ITEMS.get(index)?.section)
        }
        _ => return None,
    };
    Some(command)
}

/// Run the portfolio in the terminal until the user quits.
pub fn render_tui<S: ThemeStore>(view: ViewController<S>, units_per_row: f64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Laid out for real on the first resize.
    let page = TerminalPage::new(0, 0, units_per_row);
    let mut session = Session::start(view, page, Instant::now());
    let result = event_loop(&mut terminal, &mut session);
    session.stop();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<S: ThemeStore>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session<S>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        session.resize(
            usize::from(size.width),
            usize::from(size.height.saturating_sub(1)),
        );

        let state = session.view.state();
        terminal.draw(|frame| draw(frame, &session.page, &state))?;

        if event::poll(session.poll_timeout(Instant::now()))?
            && session.handle(&event::read()?).is_break()
        {
            return Ok(());
        }
        session.advance(Instant::now());
    }
}

/// The controller, the page it observes and the role tick clock.
struct Session<S> {
    view: ViewController<S>,
    page: TerminalPage,
    interval: Duration,
    next_tick: Instant,
}

impl<S: ThemeStore> Session<S> {
    /// Mount the controller and start the tick clock at `now`.
    fn start(mut view: ViewController<S>, page: TerminalPage, now: Instant) -> Self {
        view.mount();
        let interval = view.config().role_interval();
        Self {
            view,
            page,
            interval,
            next_tick: now + interval,
        }
    }

    fn stop(&mut self) {
        self.view.unmount();
    }

    fn resize(&mut self, width: usize, height: usize) {
        if self.page.resize(width, height) {
            self.view.on_scroll(&self.page);
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let until_tick = self.next_tick.saturating_duration_since(now);
        let budget = if self.page.is_animating() {
            FRAME
        } else {
            IDLE_POLL
        };
        until_tick.min(budget)
    }

    fn handle(&mut self, event: &Event) -> ControlFlow<()> {
        let scrolled = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match command_for(key.code) {
                    Some(command) => {
                        debug!(?command, "key");
                        self.run(command)?
                    }
                    None => false,
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_ROWS),
                MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_ROWS),
                _ => false,
            },
            _ => false,
        };
        if scrolled {
            self.view.on_scroll(&self.page);
        }
        ControlFlow::Continue(())
    }

    /// Apply a command. Continues with whether the page moved at once.
    fn run(&mut self, command: Command) -> ControlFlow<(), bool> {
        let moved = match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::ScrollBy(rows) => self.page.scroll_by(rows),
            Command::PageBy(pages) => {
                let rows = isize::try_from(self.page.visible().len()).unwrap_or(1);
                self.page.scroll_by(pages * rows.max(1))
            }
            Command::ScrollTop => {
                self.view.scroll_to_top(&mut self.page);
                false
            }
            Command::Navigate(section) => {
                self.view.scroll_to_section(&mut self.page, section.as_str());
                false
            }
            Command::ToggleTheme => {
                self.view.toggle_theme();
                false
            }
        };
        ControlFlow::Continue(moved)
    }

    /// Step any smooth scroll and fire the role tick when it is due.
    fn advance(&mut self, now: Instant) {
        if self.page.step() {
            self.view.on_scroll(&self.page);
        }
        if now >= self.next_tick {
            self.view.on_tick();
            self.next_tick = now + self.interval;
        }
    }
}

fn draw(frame: &mut Frame, page: &TerminalPage, state: &ViewState) {
    if !state.mounted {
        return;
    }
    let area = frame.area();
    let theme = state.theme;
    let color = |token: ThemeToken| resolve(token, theme);

    let nav_area = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    frame.render_widget(nav_bar(state, &color), nav_area);

    let body = Rect::new(
        area.x,
        area.y + nav_area.height,
        area.width,
        area.height.saturating_sub(nav_area.height),
    );
    frame.render_widget(
        Block::default().style(Style::default().bg(color(ThemeToken::Background))),
        body,
    );

    let (_, hero_end) = page.section_rows(SectionId::Hero);
    for (i, line) in page.visible().iter().enumerate() {
        let Ok(offset) = u16::try_from(i) else {
            break;
        };
        if offset >= body.height {
            break;
        }
        let row = Rect::new(body.x + 2, body.y + offset, body.width.saturating_sub(4), 1);
        let centered = page.scroll() + i < hero_end;
        frame.render_widget(page_line(line, state, centered, &color), row);
    }

    if state.scroll_top_visible && body.height > 0 && body.width > 12 {
        let button = Rect::new(
            body.x + body.width - 10,
            body.y + body.height - 1,
            9,
            1,
        );
        frame.render_widget(
            Paragraph::new(" ↑ Top ").style(
                Style::default()
                    .fg(color(ThemeToken::AccentForeground))
                    .bg(color(ThemeToken::Accent)),
            ),
            button,
        );
    }
}

fn nav_bar<'a>(state: &ViewState, color: &impl Fn(ThemeToken) -> Color) -> Paragraph<'a> {
    let mut spans = vec![Span::styled(
        format!(" {} ", content::OWNER_INITIALS),
        Style::default()
            .fg(color(ThemeToken::Accent))
            .add_modifier(Modifier::BOLD),
    )];
    let separator = || Span::styled("│", Style::default().fg(color(ThemeToken::Border)));
    spans.push(separator());
    for (i, item) in content::NAV_ITEMS.iter().enumerate() {
        let token = if state.is_active(item.section) {
            ThemeToken::NavActive
        } else {
            ThemeToken::NavText
        };
        let mut style = Style::default().fg(color(token));
        if state.is_active(item.section) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} {} ", i + 1, item.label), style));
    }
    let icon = match state.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };
    spans.push(separator());
    spans.push(Span::styled(
        format!(" {icon} t · q quit"),
        Style::default().fg(color(ThemeToken::Muted)),
    ));
    Paragraph::new(Line::from(spans)).style(
        Style::default()
            .bg(color(ThemeToken::MutedBackground))
            .fg(color(ThemeToken::Foreground)),
    )
}

fn page_line<'a>(
    line: &'a PageLine,
    state: &ViewState,
    centered: bool,
    color: &impl Fn(ThemeToken) -> Color,
) -> Paragraph<'a> {
    let text = if line.text == ROLE_PLACEHOLDER {
        state.role.clone()
    } else {
        line.text.clone()
    };
    let mut style = Style::default()
        .fg(color(line.color))
        .bg(color(ThemeToken::Background));
    if line.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    let alignment = if centered {
        Alignment::Center
    } else {
        Alignment::Left
    };
    Paragraph::new(text).style(style).alignment(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use folio_core::{Config, MemoryThemeStore};

    fn session(height: usize) -> (Session<MemoryThemeStore>, Instant) {
        let config = Config {
            roles: vec!["A".into(), "B".into(), "C".into()],
            ..Config::default()
        };
        let view = ViewController::new(config, MemoryThemeStore::new()).expect("valid config");
        let now = Instant::now();
        let page = TerminalPage::new(80, height, 20.0);
        (Session::start(view, page, now), now)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_follow_nav_items() {
        assert_eq!(
            command_for(KeyCode::Char('1')),
            Some(Command::Navigate(SectionId::About))
        );
        assert_eq!(
            command_for(KeyCode::Char('5')),
            Some(Command::Navigate(SectionId::Contact))
        );
        assert_eq!(command_for(KeyCode::Char('9')), None);
    }

    #[test]
    fn hero_shortcuts() {
        assert_eq!(
            command_for(KeyCode::Char('p')),
            Some(Command::Navigate(SectionId::Projects))
        );
        assert_eq!(command_for(KeyCode::Home), Some(Command::ScrollTop));
        assert_eq!(command_for(KeyCode::Char('t')), Some(Command::ToggleTheme));
        assert_eq!(command_for(KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn unbound_keys_do_not_hold_back_the_tick() {
        let (mut session, start) = session(24);
        for _ in 0..10 {
            assert!(session.handle(&key(KeyCode::Char('x'))).is_continue());
        }
        session.advance(start + session.interval);
        assert_eq!(session.view.role(), "B");
    }

    #[test]
    fn tick_waits_for_interval() {
        let (mut session, start) = session(24);
        session.advance(start + session.interval / 2);
        assert_eq!(session.view.role_index(), 0);
        session.advance(start + session.interval);
        assert_eq!(session.view.role_index(), 1);
    }

    #[test]
    fn quit_breaks_and_stop_unmounts() {
        let (mut session, _) = session(24);
        assert!(session.handle(&key(KeyCode::Char('q'))).is_break());
        session.stop();
        assert!(!session.view.is_mounted());
    }

    #[test]
    fn smooth_navigation_updates_active_section() {
        let (mut session, start) = session(24);
        assert!(session.handle(&key(KeyCode::Char('2'))).is_continue());
        assert_eq!(session.view.active_section(), SectionId::Hero);
        while session.page.is_animating() {
            session.advance(start);
        }
        assert_eq!(session.view.active_section(), SectionId::Skills);
        assert!(session.view.scroll_top_visible());
    }

    #[test]
    fn resize_refreshes_scroll_state() {
        let (mut session, _) = session(10);
        let (about, _) = session.page.section_rows(SectionId::About);
        let rows = isize::try_from(about + 1).unwrap_or(isize::MAX);
        session.page.scroll_by(rows);
        session.view.on_scroll(&session.page);
        assert_eq!(session.view.active_section(), SectionId::About);
        assert!(!session.view.scroll_top_visible());

        // A taller hero pushes the same spot in the about section further
        // down the page.
        session.resize(80, 60);
        assert_eq!(session.view.active_section(), SectionId::About);
        assert!(session.view.scroll_top_visible());
    }
}
