//! Screens of the interactive dashboard.
//!
//! Views are a closed set: the engine builds them through [`View::build`],
//! which matches [`ViewId`] exhaustively. A view owns its local UI state
//! (focus, selections, in-flight phases) and reads shared session state
//! from [`AppState`]; the `authenticated`/`current_user` pair is mutated
//! only by the engine.

mod auth_login;
mod auth_logout;
mod auth_menu;
mod auth_whoami;
mod dashboard;
mod help;
mod service_create;
mod service_list;

pub use auth_login::AuthLoginView;
pub use auth_logout::AuthLogoutView;
pub use auth_menu::AuthMenuView;
pub use auth_whoami::AuthWhoamiView;
pub use dashboard::DashboardView;
pub use help::HelpView;
pub use service_create::ServiceCreateView;
pub use service_list::ServiceListView;

use super::message::{Message, Update};
use super::router::ViewId;
use super::state::AppState;
use super::widgets::StatusBar;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// The active screen.
#[derive(Debug)]
pub enum View {
    Dashboard(DashboardView),
    AuthMenu(AuthMenuView),
    AuthLogin(AuthLoginView),
    AuthLogout(AuthLogoutView),
    AuthWhoami(AuthWhoamiView),
    ServiceList(ServiceListView),
    ServiceCreate(ServiceCreateView),
    Help(HelpView),
}

impl View {
    /// Construct the screen for an identifier.
    ///
    /// Identifiers without a dedicated screen fall back to the dashboard,
    /// so activating them is always safe.
    pub fn build(id: ViewId) -> Self {
        match id {
            ViewId::Dashboard => View::Dashboard(DashboardView::new()),
            ViewId::AuthMenu => View::AuthMenu(AuthMenuView::new()),
            ViewId::AuthLogin => View::AuthLogin(AuthLoginView::new()),
            ViewId::AuthLogout => View::AuthLogout(AuthLogoutView::new()),
            ViewId::AuthWhoami => View::AuthWhoami(AuthWhoamiView::new()),
            ViewId::ServiceList => View::ServiceList(ServiceListView::new()),
            ViewId::ServiceCreate => View::ServiceCreate(ServiceCreateView::new()),
            ViewId::Help => View::Help(HelpView::new()),
            ViewId::ServiceDetail
            | ViewId::ServiceLogs
            | ViewId::ConfigMenu
            | ViewId::ConfigEditor
            | ViewId::ConfigView
            | ViewId::Exit => View::Dashboard(DashboardView::new()),
        }
    }

    /// Called once when the view becomes current, before any message.
    pub fn init(&mut self, state: &AppState) -> Update {
        match self {
            View::Dashboard(v) => v.init(state),
            View::AuthWhoami(v) => v.init(),
            View::ServiceList(v) => v.init(),
            _ => Update::none(),
        }
    }

    /// Feed one message to the view.
    pub fn update(&mut self, message: Message, state: &mut AppState) -> Update {
        match self {
            View::Dashboard(v) => v.update(message, state),
            View::AuthMenu(v) => v.update(message),
            View::AuthLogin(v) => v.update(message),
            View::AuthLogout(v) => v.update(message),
            View::AuthWhoami(v) => v.update(message),
            View::ServiceList(v) => v.update(message, state),
            View::ServiceCreate(v) => v.update(message),
            View::Help(v) => v.update(message),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        match self {
            View::Dashboard(v) => v.render(f, state),
            View::AuthMenu(v) => v.render(f, state),
            View::AuthLogin(v) => v.render(f, state),
            View::AuthLogout(v) => v.render(f, state),
            View::AuthWhoami(v) => v.render(f, state),
            View::ServiceList(v) => v.render(f, state),
            View::ServiceCreate(v) => v.render(f, state),
            View::Help(v) => v.render(f, state),
        }
    }
}

/// Draw the shared header and status bar, returning the content area.
pub(super) fn chrome(f: &mut Frame, state: &AppState, hints: &str) -> Rect {
    let theme = &state.theme;
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let current = state.router.current();
    let title = Line::from(vec![
        Span::styled(
            " QuickSpin ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", current.title()),
            Style::default().fg(theme.text).bg(theme.highlight),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).style(Style::default().bg(theme.highlight)),
        header,
    );

    let account = if state.is_authenticated() {
        state
            .current_user()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    } else {
        "not signed in".to_string()
    };
    StatusBar::new(account, state.router.breadcrumb(), hints).render(f, footer, theme);

    content.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    })
}

/// Shared helper for vertical menu screens.
pub(super) fn menu_nav(code: crossterm::event::KeyCode, selected: &mut usize, len: usize) -> bool {
    use crossterm::event::KeyCode;
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            if *selected > 0 {
                *selected -= 1;
            }
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < len {
                *selected += 1;
            }
            true
        }
        _ => false,
    }
}

/// Re-inject navigation as a message so the engine records it on the stack.
pub(super) fn go(view: ViewId) -> Update {
    Update::message(Message::Navigate(view))
}

pub(super) fn back() -> Update {
    Update::message(Message::Back)
}
