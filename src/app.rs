//! Application state and core logic

use crate::api::{AddressLookup, ApiClient, RowSubmitter, ViaCepClient};
use crate::config::{AppConfig, TableIds};
use crate::platform::COPY_MODIFIER;
use crate::state::catalog::INSTAGRAM_URL;
use crate::state::{
    AppState, EventForm, Form, FormEffect, LookupOutcome, MerchandiseForm, SignupForm, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const SUBMIT_FORM_ERROR: &str = "Erro ao enviar formulário. Por favor, tente novamente.";
const SUBMIT_ORDER_ERROR: &str = "Erro ao enviar pedido. Por favor, tente novamente.";

/// Results of background work, delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// A postal-code lookup issued for `tag` completed
    AddressLookedUp { tag: String, outcome: LookupOutcome },
    /// Submission `attempt` of the page for `view` completed
    SubmissionFinished {
        view: View,
        attempt: u64,
        result: Result<(), String>,
    },
}

/// What a key press means for a form being edited
enum FormKey {
    Edited(Option<FormEffect>),
    Submit,
    Ignored,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    submitter: Arc<dyn RowSubmitter>,
    lookup: Arc<dyn AddressLookup>,
    tables: TableIds,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// In-flight submission attempt per page
    pending: HashMap<View, u64>,
    next_attempt: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured services
    pub fn new(config: &AppConfig) -> Self {
        let submitter = ApiClient::new(config.api_base_url(), config.api_token.clone());
        let lookup = ViaCepClient::new(config.address_lookup_url());
        Self::with_services(Arc::new(submitter), Arc::new(lookup), config.table_ids())
    }

    pub fn with_services(
        submitter: Arc<dyn RowSubmitter>,
        lookup: Arc<dyn AddressLookup>,
        tables: TableIds,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            submitter,
            lookup,
            tables,
            events_tx,
            events_rx,
            pending: HashMap::new(),
            next_attempt: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply every background result that has arrived. Returns how many were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AddressLookedUp { tag, outcome } => {
                if let LookupOutcome::Failed(reason) = &outcome {
                    tracing::warn!(postal_code = %tag, %reason, "address lookup failed");
                }
                self.state.signup.form.apply_lookup(&tag, outcome);
            }
            AppEvent::SubmissionFinished {
                view,
                attempt,
                result,
            } => {
                if self.pending.get(&view) != Some(&attempt) {
                    tracing::debug!(?view, attempt, "ignoring result of abandoned submission");
                    return;
                }
                self.pending.remove(&view);

                let failure = result.as_ref().err().cloned();
                let applied = match view {
                    View::Landing => false,
                    View::Signup => self.state.signup.finish_submit(result),
                    View::Merchandise => self.state.merchandise.finish_submit(result),
                    View::Event => self.state.event.finish_submit(result),
                };
                if !applied {
                    return;
                }
                match failure {
                    Some(reason) => {
                        tracing::error!(?view, %reason, "submission failed");
                        self.push_error(match view {
                            View::Merchandise => SUBMIT_ORDER_ERROR,
                            _ => SUBMIT_FORM_ERROR,
                        });
                    }
                    None => tracing::info!(?view, "submission accepted"),
                }
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit, even over dialogs
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Print preview (modal)
        if self.state.print_preview.is_some() {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('v')
            ) {
                self.state.print_preview = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Signup => self.handle_signup_key(key),
            View::Merchandise => self.handle_merchandise_key(key),
            View::Event => self.handle_event_key(key),
        }
    }

    /// Navigate to a view. The page being left is discarded.
    pub fn navigate(&mut self, view: View) {
        let leaving = self.state.current_view;
        if leaving != view {
            self.pending.remove(&leaving);
            self.state.discard_page(leaving);
        }
        self.state.print_preview = None;
        self.state.current_view = view;
    }

    pub fn go_back(&mut self) {
        self.navigate(View::Landing);
    }

    fn handle_landing_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('y') && key.modifiers.contains(COPY_MODIFIER) {
            self.copy_link(INSTAGRAM_URL);
            return Ok(());
        }
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.navigate(View::Signup),
            KeyCode::Char('2') => self.navigate(View::Merchandise),
            KeyCode::Char('3') => self.navigate(View::Event),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
                self.state.menu_next()
            }
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
                self.state.menu_prev()
            }
            KeyCode::Enter => self.navigate(self.state.menu_selection()),
            _ => {}
        }
        Ok(())
    }

    fn handle_signup_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.go_back();
            return Ok(());
        }
        if self.state.signup.submission.is_submitted() {
            if key.code == KeyCode::Char('n') {
                self.state.signup.reset();
            }
            return Ok(());
        }
        if !self.state.signup.is_editable() {
            return Ok(());
        }
        match form_key(&mut self.state.signup.form, key) {
            FormKey::Edited(Some(FormEffect::LookupAddress(digits))) => self.spawn_lookup(digits),
            FormKey::Submit => self.submit_signup(),
            FormKey::Edited(None) | FormKey::Ignored => {}
        }
        Ok(())
    }

    fn handle_merchandise_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.go_back();
            return Ok(());
        }
        if self.state.merchandise.submission.is_submitted() {
            self.handle_success_key(key);
            return Ok(());
        }
        if !self.state.merchandise.is_editable() {
            return Ok(());
        }

        let form = &self.state.merchandise.form;
        if key.code == KeyCode::Char('v') && form.active_field() == MerchandiseForm::PRINT {
            match form.selected_print() {
                Some(print) => self.state.print_preview = Some(print.id),
                None => {
                    self.state.status_message =
                        Some("Selecione uma estampa para visualizar".to_string())
                }
            }
            return Ok(());
        }

        if let FormKey::Submit = form_key(&mut self.state.merchandise.form, key) {
            self.submit_merchandise();
        }
        Ok(())
    }

    fn handle_event_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.go_back();
            return Ok(());
        }
        if self.state.event.submission.is_submitted() {
            self.handle_success_key(key);
            return Ok(());
        }
        if !self.state.event.is_editable() {
            return Ok(());
        }
        if let FormKey::Submit = form_key(&mut self.state.event.form, key) {
            self.submit_event();
        }
        Ok(())
    }

    /// Keys on a success view with a payment link
    fn handle_success_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('y') && key.modifiers.contains(COPY_MODIFIER) {
            if let Some(link) = self.current_payment_link() {
                self.copy_link(link);
            }
        }
    }

    fn submit_signup(&mut self) {
        let table_id = self.tables.signup;
        let payload = self
            .state
            .signup
            .begin_submit(SignupForm::row)
            .map(serde_json::to_value);
        self.dispatch_submission(View::Signup, table_id, payload);
    }

    fn submit_merchandise(&mut self) {
        let table_id = self.tables.merchandise;
        let payload = self
            .state
            .merchandise
            .begin_submit(MerchandiseForm::order)
            .map(|order| serde_json::to_value(&order.row));
        self.dispatch_submission(View::Merchandise, table_id, payload);
    }

    fn submit_event(&mut self) {
        let table_id = self.tables.event;
        let payload = self
            .state
            .event
            .begin_submit(EventForm::registration)
            .map(|registration| serde_json::to_value(&registration.row));
        self.dispatch_submission(View::Event, table_id, payload);
    }

    /// Send a row built by `begin_submit`. `None` means validation failed.
    fn dispatch_submission(
        &mut self,
        view: View,
        table_id: u32,
        payload: Option<serde_json::Result<serde_json::Value>>,
    ) {
        let attempt = self.next_attempt;
        self.next_attempt += 1;
        self.pending.insert(view, attempt);

        let row = match payload {
            None => {
                self.pending.remove(&view);
                self.state.status_message = Some("Verifique os campos destacados".to_string());
                return;
            }
            Some(Err(err)) => {
                // Unreachable for the row types, but the page must not stay stuck
                self.handle_event(AppEvent::SubmissionFinished {
                    view,
                    attempt,
                    result: Err(err.to_string()),
                });
                return;
            }
            Some(Ok(row)) => row,
        };

        tracing::info!(?view, table_id, attempt, payload = %row, "submitting form");
        let submitter = Arc::clone(&self.submitter);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = submitter
                .create_row(table_id, row)
                .await
                .map_err(|err| err.to_string());
            let _ = events.send(AppEvent::SubmissionFinished {
                view,
                attempt,
                result,
            });
        });
    }

    fn spawn_lookup(&self, digits: String) {
        tracing::debug!(postal_code = %digits, "looking up address");
        let lookup = Arc::clone(&self.lookup);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = match lookup.lookup(&digits).await {
                Ok(Some(address)) => LookupOutcome::Found(address),
                Ok(None) => LookupOutcome::NotFound,
                Err(err) => LookupOutcome::Failed(err.to_string()),
            };
            let _ = events.send(AppEvent::AddressLookedUp {
                tag: digits,
                outcome,
            });
        });
    }

    /// Payment link offered on the current success view, if any
    pub fn current_payment_link(&self) -> Option<&'static str> {
        match self.state.current_view {
            View::Merchandise => self
                .state
                .merchandise
                .submission
                .submitted()
                .map(|order| order.payment_link()),
            View::Event => self
                .state
                .event
                .submission
                .submitted()
                .and_then(|registration| registration.pricing.payment_link),
            View::Landing | View::Signup => None,
        }
    }

    fn copy_link(&mut self, link: &str) {
        match self.copy_to_clipboard(link) {
            Ok(()) => self.state.status_message = Some("Link copiado!".to_string()),
            Err(err) => {
                tracing::warn!(%err, "clipboard unavailable");
                self.push_error(format!("Não foi possível copiar o link.\n{link}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Shared editing keys of every form
fn form_key(form: &mut impl Form, key: KeyEvent) -> FormKey {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return FormKey::Submit;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            FormKey::Edited(None)
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            FormKey::Edited(None)
        }
        KeyCode::Enter if form.is_submit_row_active() => FormKey::Submit,
        KeyCode::Enter => {
            form.next_field();
            FormKey::Edited(None)
        }
        KeyCode::Left => FormKey::Edited(form.cycle_option(false)),
        KeyCode::Right => FormKey::Edited(form.cycle_option(true)),
        KeyCode::Backspace => FormKey::Edited(form.backspace()),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            FormKey::Edited(form.input_char(c))
        }
        _ => FormKey::Ignored,
    }
}
