use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;
use url::Url;

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::net::{Sample, Update};
use crate::ui::theme::{HeatOverrides, Theme};

/// Which viewer this process runs. Fixed at startup; the three viewers are
/// independent and never hand off to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    PollJson,
    PollBars,
    LiveBars,
}

impl ViewMode {
    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "poll-json" | "json" => ViewMode::PollJson,
            "poll-bars" | "hybrid" => ViewMode::PollBars,
            _ => ViewMode::LiveBars,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::PollJson => "poll json",
            ViewMode::PollBars => "poll bars",
            ViewMode::LiveBars => "live bars",
        }
    }

}

/// Content of the main view, derived entirely from the latest update.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent {
    /// Nothing received yet.
    Waiting,
    /// Pretty-printed JSON text.
    Raw(String),
    /// One bar row per core.
    Bars(Sample),
    /// The literal error placeholder.
    Error,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub cycle_theme: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
        }
    }
}

/// Per-viewer controller: owns the render target state the network tasks feed.
pub struct App {
    pub running: bool,
    pub mode: ViewMode,
    pub server: Url,
    pub view: ViewContent,
    pub frames: u64,
    pub link_down: bool,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    heat: HeatOverrides,
}

impl App {
    pub fn new(config: &Config, mode: ViewMode, server: Url) -> Self {
        let heat = HeatOverrides::from_config(&config.colors);
        let theme = Theme::from_config(&config.colors.theme, &heat);
        Self {
            running: true,
            mode,
            server,
            view: ViewContent::Waiting,
            frames: 0,
            link_down: false,
            theme,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            heat,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if key.code == self.keybinds.quit {
            Action::Quit
        } else if key.code == self.keybinds.cycle_theme {
            Action::CycleTheme
        } else {
            Action::None
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::CycleTheme => self.theme = self.theme.next(&self.heat),
            Action::None => {}
        }
    }

    /// Folds one network completion into the view. Each successful update
    /// fully replaces the previous content; failures keep it stale.
    pub fn apply_update(&mut self, update: Update) {
        match update {
            Update::RawJson(text) => {
                self.view = ViewContent::Raw(text);
                self.frames += 1;
            }
            Update::Bars(sample) => {
                self.view = ViewContent::Bars(sample);
                self.frames += 1;
            }
            Update::BadStatus(status) => {
                warn!(status, "metrics endpoint returned non-success status");
                self.view = ViewContent::Error;
            }
            Update::FetchFailed(reason) => {
                warn!(%reason, "fetch failed, keeping previous view");
            }
            Update::StreamClosed => {
                self.link_down = true;
            }
        }
    }
}
