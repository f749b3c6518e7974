//! Stack-based navigation between views.

use std::fmt;

/// Identifier for every screen the dashboard can show.
///
/// This is a closed set; the engine's view construction matches on it
/// exhaustively. Identifiers without a dedicated screen yet fall back to
/// the dashboard when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewId {
    Dashboard,
    AuthMenu,
    AuthLogin,
    AuthLogout,
    AuthWhoami,
    ServiceList,
    ServiceCreate,
    ServiceDetail,
    ServiceLogs,
    ConfigMenu,
    ConfigEditor,
    ConfigView,
    Help,
    Exit,
}

impl ViewId {
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::AuthMenu => "Authentication",
            ViewId::AuthLogin => "Login",
            ViewId::AuthLogout => "Logout",
            ViewId::AuthWhoami => "Current User",
            ViewId::ServiceList => "Services",
            ViewId::ServiceCreate => "Create Service",
            ViewId::ServiceDetail => "Service Details",
            ViewId::ServiceLogs => "Service Logs",
            ViewId::ConfigMenu => "Configuration",
            ViewId::ConfigEditor => "Config Editor",
            ViewId::ConfigView => "View Configuration",
            ViewId::Help => "Help",
            ViewId::Exit => "Exit",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Non-empty stack of view identifiers.
///
/// The bottom element is the session's entry view and can never be popped.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<ViewId>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ViewId::Dashboard)
    }
}

impl Router {
    /// Create a router starting at the given entry view.
    pub fn new(entry: ViewId) -> Self {
        Self { stack: vec![entry] }
    }

    /// Navigate forward. Pushing the current view again is allowed and
    /// grows the stack (no dedup).
    pub fn push(&mut self, view: ViewId) {
        self.stack.push(view);
    }

    /// Navigate back, returning the new current view.
    ///
    /// Popping the last element is a no-op; the stack never empties.
    pub fn pop(&mut self) -> ViewId {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// The view on top of the stack.
    pub fn current(&self) -> ViewId {
        *self.stack.last().expect("router stack is never empty")
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Clear the history back down to the entry view.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// Breadcrumb trail, current view bracketed: `Dashboard › [Services]`.
    pub fn breadcrumb(&self) -> String {
        let mut out = String::new();
        for (i, view) in self.stack.iter().enumerate() {
            if i > 0 {
                out.push_str(" › ");
            }
            if i == self.stack.len() - 1 {
                out.push('[');
                out.push_str(view.title());
                out.push(']');
            } else {
                out.push_str(view.title());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_never_drops_below_one() {
        let mut router = Router::new(ViewId::Dashboard);
        for _ in 0..10 {
            router.pop();
        }
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current(), ViewId::Dashboard);
    }

    #[test]
    fn pop_returns_previous_view() {
        let mut router = Router::new(ViewId::Dashboard);
        router.push(ViewId::ServiceList);
        router.push(ViewId::ServiceCreate);
        assert_eq!(router.pop(), ViewId::ServiceList);
        assert_eq!(router.pop(), ViewId::Dashboard);
        // Bottom element stays put.
        assert_eq!(router.pop(), ViewId::Dashboard);
    }

    #[test]
    fn repeated_push_is_not_deduplicated() {
        let mut router = Router::new(ViewId::Dashboard);
        let depth = router.depth();
        router.push(ViewId::Help);
        router.push(ViewId::Help);
        assert_eq!(router.depth(), depth + 2);
    }

    #[test]
    fn custom_entry_view_is_the_floor() {
        let mut router = Router::new(ViewId::ServiceList);
        router.push(ViewId::Help);
        router.pop();
        router.pop();
        assert_eq!(router.current(), ViewId::ServiceList);
    }

    #[test]
    fn breadcrumb_brackets_current() {
        let mut router = Router::new(ViewId::Dashboard);
        router.push(ViewId::ServiceList);
        assert_eq!(router.breadcrumb(), "Dashboard › [Services]");
    }

    #[test]
    fn reset_returns_to_entry() {
        let mut router = Router::new(ViewId::Dashboard);
        router.push(ViewId::AuthMenu);
        router.push(ViewId::AuthLogin);
        router.reset();
        assert_eq!(router.depth(), 1);
        assert!(!router.can_go_back());
    }
}
