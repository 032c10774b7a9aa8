use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::animation::{ButtonAnimator, ButtonEvent, EntranceAnimation};
use crate::config::Config;
use crate::dialog::{Dialog, DialogState};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::search::{MovieSource, SearchController, SearchError, SearchUpdate};

/// Application state
pub struct App {
    pub input: InputState,
    pub search: SearchController,
    pub dialog: DialogState,
    pub button: ButtonAnimator,
    pub entrance: EntranceAnimation,
    pub layout_regions: LayoutRegions,
    /// Index of the first visible result card
    pub results_scroll: u16,
    /// Problem loading the config file, shown in the help line
    pub config_warning: Option<String>,
    /// Clock value of the last tick; rendering samples animations here
    pub last_tick: Instant,
    pub should_quit: bool,
}

impl App {
    /// Create an App around an existing controller
    pub fn new(search: SearchController, config: &Config) -> Self {
        let animations = config.animation.enabled;
        let stagger = Duration::from_millis(config.animation.stagger_ms);

        Self {
            input: InputState::new(search.query()),
            search,
            dialog: DialogState::new(),
            button: ButtonAnimator::new(animations),
            entrance: EntranceAnimation::new(animations, stagger),
            layout_regions: LayoutRegions::new(),
            results_scroll: 0,
            config_warning: None,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    /// Create an App whose searches go to `source` on a worker thread
    pub fn with_source(config: &Config, source: Arc<dyn MovieSource>) -> Self {
        let search = SearchController::spawn(config.search.default_query.clone(), source);
        Self::new(search, config)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Startup search with the seed query
    pub fn initialize(&mut self) {
        let result = self.search.initialize();
        self.input.set_text(self.search.query());
        self.report_search_result(result);
    }

    /// User asked to search: play the press animation, search when it ends
    ///
    /// Ignored while loading (the button is disabled) or while a press is
    /// already running.
    pub fn activate_search(&mut self, now: Instant) {
        if self.search.is_loading() || self.button.is_pressing() {
            return;
        }
        self.button.press(now);
    }

    /// Search immediately for the current query
    pub fn run_search(&mut self) {
        self.search.set_query(self.input.query());
        let result = self.search.search();
        self.report_search_result(result);
    }

    fn report_search_result(&mut self, result: Result<u64, SearchError>) {
        if let Err(error) = result {
            self.show_search_error(&error);
        }
    }

    /// Failed requests emptied the results, so scrolling starts over
    fn show_search_error(&mut self, error: &SearchError) {
        if error.is_request_failure() {
            self.results_scroll = 0;
        }
        self.dialog.show(Dialog::error(error.user_message()));
    }

    /// Back to the seed query with no results
    pub fn reset(&mut self, now: Instant) {
        self.button.cancel_press(now);
        self.search.reset();
        self.input.set_text(self.search.query());
        self.results_scroll = 0;
        self.entrance.start(now, 0);
    }

    /// Sync the controller with the editor after a keystroke
    pub fn sync_query(&mut self) {
        if self.search.query() != self.input.query() {
            self.search.set_query(self.input.query());
        }
    }

    /// Advance animations and apply settled searches
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;

        if let Some(ButtonEvent::PressComplete) = self.button.update(now) {
            self.run_search();
        }

        if let Some(update) = self.search.poll_response() {
            self.apply_update(update, now);
        }

        self.entrance.update(now);
    }

    fn apply_update(&mut self, update: SearchUpdate, now: Instant) {
        match update {
            SearchUpdate::Replaced { count } => {
                self.results_scroll = 0;
                if count > 0 {
                    self.entrance.start(now, count);
                }
            }
            SearchUpdate::Failed(error) => self.show_search_error(&error),
        }
    }

    /// Whether the next frame should come quickly
    pub fn is_animating(&self, now: Instant) -> bool {
        self.button.is_animating()
            || self.button.is_pressing()
            || self.entrance.is_active(now)
            || self.search.is_loading()
    }

    pub fn scroll_results_down(&mut self, cards: u16) {
        let max = self.search.results().len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.results_scroll = self.results_scroll.saturating_add(cards).min(max);
    }

    pub fn scroll_results_up(&mut self, cards: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(cards);
    }
}
