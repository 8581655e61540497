use tracing::{debug, info};

use super::dom::{DomEvent, Host, Page};

/// A handler registered against the page at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    DropdownToggle { toggle: String },
    RowNavigate { row: String },
    FilterAutoSubmit { form: String, select: String },
    FormValidation { form: String },
    /// Document-level listener closing open panels on outside clicks.
    CloseDropdowns,
}

/// What the host should do with the event after the handlers ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
    pub handled: bool,
}

/// Registered page-script handlers, in listener order.
#[derive(Debug, Clone, Default)]
pub struct PageScripts {
    handlers: Vec<Handler>,
}

impl PageScripts {
    /// Wire every element the page exposes. Clickable rows get their hover
    /// marker here.
    pub fn initialize(page: &mut Page) -> Self {
        let mut handlers = Vec::new();

        for dropdown in &page.dropdowns {
            handlers.push(Handler::DropdownToggle { toggle: dropdown.toggle.clone() });
        }
        for row in &mut page.rows {
            row.clickable = true;
            handlers.push(Handler::RowNavigate { row: row.id.clone() });
        }
        for form in &page.filter_forms {
            for select in &form.selects {
                handlers.push(Handler::FilterAutoSubmit { form: form.id.clone(), select: select.clone() });
            }
        }
        for form in page.forms.iter().filter(|f| f.needs_validation) {
            handlers.push(Handler::FormValidation { form: form.id.clone() });
        }
        // Element listeners fire before the document one.
        if !page.dropdowns.is_empty() {
            handlers.push(Handler::CloseDropdowns);
        }

        info!(count = handlers.len(), "Page scripts initialized");
        Self { handlers }
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Run every handler the event reaches.
    pub fn dispatch<H: Host>(&self, page: &mut Page, event: &DomEvent, host: &mut H) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        for handler in &self.handlers {
            match (handler, event) {
                (Handler::DropdownToggle { toggle }, DomEvent::Click { target }) if toggle == target => {
                    outcome.default_prevented = true;
                    outcome.handled = true;
                    toggle_dropdown(page, toggle);
                }
                (Handler::RowNavigate { row }, DomEvent::Click { target }) if row == target => {
                    if let Some(row) = page.rows.iter().find(|r| &r.id == row) {
                        debug!(href = %row.href, "Row clicked");
                        host.assign_location(&row.href);
                        outcome.handled = true;
                    }
                }
                (Handler::FilterAutoSubmit { form, select }, DomEvent::Change { target }) if select == target => {
                    debug!(form = %form, "Filter changed, submitting");
                    host.submit_form(form);
                    outcome.handled = true;
                }
                (Handler::FormValidation { form }, DomEvent::Submit { form: submitted }) if form == submitted => {
                    if let Some(form) = page.form_mut(form) {
                        if !form.check_validity() {
                            debug!(form = %form.id, "Blocking invalid submission");
                            outcome.default_prevented = true;
                            outcome.propagation_stopped = true;
                        }
                        form.was_validated = true;
                        outcome.handled = true;
                    }
                }
                (Handler::CloseDropdowns, DomEvent::Click { target }) if !page.is_toggle(target) => {
                    close_all(page);
                    outcome.handled = true;
                }
                _ => {}
            }
        }
        outcome
    }
}

fn toggle_dropdown(page: &mut Page, toggle: &str) {
    let was_open = page.dropdown(toggle).is_some_and(|d| d.open);
    if was_open {
        if let Some(dropdown) = page.dropdowns.iter_mut().find(|d| d.toggle == toggle) {
            dropdown.open = false;
        }
        return;
    }
    for dropdown in &mut page.dropdowns {
        dropdown.open = dropdown.toggle == toggle;
    }
}

fn close_all(page: &mut Page) {
    for dropdown in &mut page.dropdowns {
        dropdown.open = false;
    }
}
