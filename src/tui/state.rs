//! Session-wide state shared by the engine and all views.

use super::router::{Router, ViewId};
use super::theme::Theme;
use crate::models::{Service, User};

/// How many services the dashboard shows in its "recent" panel.
const MAX_RECENT: usize = 5;

/// Process-lifetime session state.
///
/// The `authenticated`/`current_user` pair is only mutated through
/// [`AppState::set_user`] and [`AppState::clear_user`], which the engine
/// calls while handling auth result messages; the two fields always change
/// together.
#[derive(Debug)]
pub struct AppState {
    authenticated: bool,
    current_user: Option<User>,

    pub router: Router,

    pub width: u16,
    pub height: u16,

    /// Full cached service list, as last fetched.
    pub services: Vec<Service>,
    /// First [`MAX_RECENT`] of `services`, recomputed on every update.
    pub recent_services: Vec<Service>,

    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme, entry: ViewId) -> Self {
        Self {
            authenticated: false,
            current_user: None,
            router: Router::new(entry),
            width: 80,
            height: 24,
            services: Vec::new(),
            recent_services: Vec::new(),
            theme,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Record a successful authentication. Both fields flip together.
    pub fn set_user(&mut self, user: User) {
        self.current_user = Some(user);
        self.authenticated = true;
    }

    /// Drop the session. Both fields flip together.
    pub fn clear_user(&mut self) {
        self.current_user = None;
        self.authenticated = false;
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Replace the cached service list and derive the recent slice.
    pub fn update_services(&mut self, services: Vec<Service>) {
        self.recent_services = services.iter().take(MAX_RECENT).cloned().collect();
        self.services = services;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceStatus, ServiceTier, ServiceType};
    use std::collections::HashMap;

    fn make_service(name: &str) -> Service {
        Service {
            id: format!("svc-{name}"),
            name: name.to_string(),
            service_type: ServiceType::Redis,
            tier: ServiceTier::Developer,
            status: ServiceStatus::Running,
            region: "us-east-1".to_string(),
            organization_id: String::new(),
            labels: HashMap::new(),
            created_at: None,
            updated_at: None,
            credentials: None,
            resources: None,
        }
    }

    fn make_user() -> User {
        serde_json::from_str(r#"{"id":"u-1","email":"user@example.com"}"#).unwrap()
    }

    #[test]
    fn auth_pair_changes_together() {
        let mut state = AppState::new(Theme::default(), ViewId::Dashboard);
        assert!(!state.is_authenticated());
        assert!(state.current_user().is_none());

        state.set_user(make_user());
        assert!(state.is_authenticated());
        assert!(state.current_user().is_some());

        state.clear_user();
        assert!(!state.is_authenticated());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn recent_services_is_capped_at_five() {
        let mut state = AppState::new(Theme::default(), ViewId::Dashboard);
        let services: Vec<Service> = (0..8).map(|i| make_service(&format!("s{i}"))).collect();
        state.update_services(services);
        assert_eq!(state.services.len(), 8);
        assert_eq!(state.recent_services.len(), 5);
        assert_eq!(state.recent_services[0].name, "s0");
    }

    #[test]
    fn recent_services_recomputed_on_update() {
        let mut state = AppState::new(Theme::default(), ViewId::Dashboard);
        state.update_services(vec![make_service("a"), make_service("b")]);
        assert_eq!(state.recent_services.len(), 2);
        state.update_services(vec![make_service("c")]);
        assert_eq!(state.recent_services.len(), 1);
        assert_eq!(state.recent_services[0].name, "c");
    }
}
