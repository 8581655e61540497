use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{TournamentApi, TournamentSource};
use crate::config::{Config, DisplayConfig};
use crate::error::ConfigError;
use crate::fetch::{FetchOutcome, fetch_tournaments};
use crate::model::tournament::Tournament;
use crate::nav::{BottomNav, Navigator, Tab};
use crate::page::helpers::{format_date, not_found_markup};
use crate::router::{Resolution, Route, resolve};
use crate::store::{CollectionState, TournamentStore};

/// Client-side location with its history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    fn new(path: &str) -> Self {
        Self { entries: vec![path.to_string()] }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn replace(&mut self, path: &str) {
        if let Some(last) = self.entries.last_mut() {
            *last = path.to_string();
        }
    }
}

impl Navigator for History {
    fn navigate(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }
}

/// What the layout shows above the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Tournaments(CollectionState<Tournament>),
    Placeholder(Route),
    NotFound,
}

/// One rendered state of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub location: String,
    pub content: Content,
    pub selected_tab: Tab,
}

/// Router, bottom navigation and tournament store wired together.
pub struct AppShell<S: TournamentSource + ?Sized> {
    store: TournamentStore,
    source: Arc<S>,
    display: DisplayConfig,
    history: History,
    nav: BottomNav,
}

impl AppShell<TournamentApi> {
    /// Shell backed by the HTTP endpoint named in `config`.
    pub fn from_config(config: &Config, initial_path: &str) -> Result<Self, ConfigError> {
        Self::new(config, Arc::new(TournamentApi::from_config(config)), initial_path)
    }
}

impl<S: TournamentSource + ?Sized> AppShell<S> {
    /// Mount the shell at `initial_path`. The store starts empty, not
    /// loading and without an error.
    pub fn new(config: &Config, source: Arc<S>, initial_path: &str) -> Result<Self, ConfigError> {
        let display = config.display()?;
        let mut shell = Self {
            store: TournamentStore::new(config.resolution_policy),
            source,
            display,
            history: History::new(initial_path),
            nav: BottomNav::for_path(initial_path),
        };
        shell.follow_redirect();
        info!(location = shell.location(), tab = shell.nav.selected().label(), "Shell mounted");
        Ok(shell)
    }

    pub fn store(&self) -> &TournamentStore {
        &self.store
    }

    pub fn location(&self) -> &str {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selected_tab(&self) -> Tab {
        self.nav.selected()
    }

    /// Client-side navigation to `path`.
    pub fn navigate(&mut self, path: &str) {
        self.history.navigate(path);
        self.follow_redirect();
    }

    /// Tap the bottom navigation tab at `index`.
    pub fn tap_tab(&mut self, index: usize) -> Option<Tab> {
        let tab = self.nav.tap(index, &mut self.history)?;
        self.follow_redirect();
        Some(tab)
    }

    /// Start a refresh of the tournament collection.
    pub fn refresh(&self) -> impl Future<Output = FetchOutcome> + Send + use<S> {
        fetch_tournaments(&self.store, Arc::clone(&self.source))
    }

    pub fn frame(&self) -> Frame {
        let content = match resolve(self.location()) {
            Resolution::Render(Route::Tournaments) => Content::Tournaments(self.store.snapshot()),
            Resolution::Render(route) => Content::Placeholder(route),
            Resolution::Redirect(_) | Resolution::NotFound => Content::NotFound,
        };
        Frame { location: self.location().to_string(), content, selected_tab: self.nav.selected() }
    }

    pub fn render(&self) -> String {
        self.frame().to_html(&self.display)
    }

    fn follow_redirect(&mut self) {
        if let Resolution::Redirect(target) = resolve(self.history.current()) {
            debug!(from = self.history.current(), to = target, "Redirecting");
            self.history.replace(target);
        }
    }
}

impl Frame {
    pub fn to_html(&self, display: &DisplayConfig) -> String {
        let body = match &self.content {
            Content::Tournaments(state) => tournaments_html(state, display),
            Content::Placeholder(route) => format!("<div>{}</div>", route.title()),
            Content::NotFound => not_found_markup().to_string(),
        };
        let mut nav = String::new();
        for tab in Tab::ALL {
            let class = if tab == self.selected_tab { "nav-action selected" } else { "nav-action" };
            nav.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                class,
                tab.path(),
                tab.label()
            ));
        }
        format!(
            "<div class=\"app-layout\"><main class=\"container\">{}</main><nav class=\"bottom-nav\">{}</nav></div>",
            body, nav
        )
    }
}

fn tournaments_html(state: &CollectionState<Tournament>, display: &DisplayConfig) -> String {
    let mut out = String::from("<section class=\"tournaments\"><h1>Tournaments</h1>");
    if state.loading {
        out.push_str("<p class=\"loading\">Loading…</p>");
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("<p class=\"error\">{}</p>", escape_html(error)));
    }
    out.push_str("<ul>");
    for t in &state.items {
        let start = format_date(&t.start_date.to_string(), display);
        let end = format_date(&t.end_date.to_string(), display);
        out.push_str(&format!(
            "<li data-id=\"{}\"><strong>{}</strong> <span class=\"dates\">{} – {}</span>",
            t.id,
            escape_html(&t.name),
            start,
            end
        ));
        if let Some(description) = &t.description {
            out.push_str(&format!("<p>{}</p>", escape_html(description)));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></section>");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
