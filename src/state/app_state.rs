//! Application state definitions

use super::forms::{
    EventForm, EventRegistration, MerchandiseForm, MerchandiseOrder, SignupForm, SignupRow,
};
use super::submission::Page;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Under-construction page with the menu
    #[default]
    Landing,
    /// "Formulário" sign-up
    Signup,
    /// "Camisas Lume" shirt order
    Merchandise,
    /// "Jantar Genesis" event registration
    Event,
}

impl View {
    /// Form pages reachable from the landing menu, in menu order
    pub const MENU: [View; 3] = [View::Signup, View::Merchandise, View::Event];

    pub fn is_form_view(&self) -> bool {
        !matches!(self, View::Landing)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Landing => "Igreja Batista Lume",
            View::Signup => "Formulário de Cadastro",
            View::Merchandise => "Camisas Lume",
            View::Event => "Jantar Genesis",
        }
    }
}

pub type SignupPage = Page<SignupForm, SignupRow>;
pub type MerchandisePage = Page<MerchandiseForm, MerchandiseOrder>;
pub type EventPage = Page<EventForm, EventRegistration>;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    /// Highlighted entry of the landing menu
    pub menu_index: usize,

    // Pages
    pub signup: SignupPage,
    pub merchandise: MerchandisePage,
    pub event: EventPage,

    // Overlays
    /// Print id shown in the preview modal
    pub print_preview: Option<u32>,
    errors: VecDeque<String>,

    /// One-line feedback in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % View::MENU.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = self
            .menu_index
            .checked_sub(1)
            .unwrap_or(View::MENU.len() - 1);
    }

    /// View the highlighted menu entry opens
    pub fn menu_selection(&self) -> View {
        View::MENU[self.menu_index.min(View::MENU.len() - 1)]
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    /// Drop the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Whether the page for `view` has a request in flight
    pub fn is_submitting(&self, view: View) -> bool {
        match view {
            View::Landing => false,
            View::Signup => self.signup.submission.is_submitting(),
            View::Merchandise => self.merchandise.submission.is_submitting(),
            View::Event => self.event.submission.is_submitting(),
        }
    }

    /// Drop everything entered on the page for `view`
    pub fn discard_page(&mut self, view: View) {
        match view {
            View::Landing => {}
            View::Signup => self.signup = SignupPage::default(),
            View::Merchandise => self.merchandise = MerchandisePage::default(),
            View::Event => self.event = EventPage::default(),
        }
    }
}
