use tracing::{debug, warn};

/// Something that can move the application to another client path.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Bottom navigation tabs, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Matches,
    Tournaments,
    Teams,
    Stats,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Matches, Tab::Tournaments, Tab::Teams, Tab::Stats];

    pub fn index(self) -> usize {
        match self {
            Tab::Matches => 0,
            Tab::Tournaments => 1,
            Tab::Teams => 2,
            Tab::Stats => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn path(self) -> &'static str {
        match self {
            Tab::Matches => "/matches",
            Tab::Tournaments => "/tournaments",
            Tab::Teams => "/teams",
            Tab::Stats => "/stats",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Matches => "Matches",
            Tab::Tournaments => "Tournaments",
            Tab::Teams => "Teams",
            Tab::Stats => "Stats",
        }
    }
}

/// Tab for the current path: the first tab, in bar order, whose path is a
/// prefix of `path`. Anything unrecognized, the root included, selects the
/// first tab.
pub fn tab_for_path(path: &str) -> Tab {
    Tab::ALL
        .into_iter()
        .find(|tab| path.starts_with(tab.path()))
        .unwrap_or(Tab::Matches)
}

/// Bottom navigation bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomNav {
    selected: Tab,
}

impl BottomNav {
    /// Selection derived once from the path at mount time.
    pub fn for_path(path: &str) -> Self {
        Self { selected: tab_for_path(path) }
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    /// Handle a tap on the tab at `index`. The selection changes right away
    /// and a navigation command is issued; the resulting route is not read
    /// back.
    pub fn tap<N: Navigator>(&mut self, index: usize, navigator: &mut N) -> Option<Tab> {
        let Some(tab) = Tab::from_index(index) else {
            warn!(index, "Ignoring tap on unknown tab");
            return None;
        };
        debug!(tab = tab.label(), path = tab.path(), "Tab tapped");
        self.selected = tab;
        navigator.navigate(tab.path());
        Some(tab)
    }
}
