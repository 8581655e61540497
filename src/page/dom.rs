//! In-memory model of the host markup the page scripts operate on.
//!
//! Every relationship the scripts rely on is explicit: a dropdown names its
//! panel, a clickable row carries its target location, a filter form lists
//! its selects.

/// Browser capabilities the page scripts need from their host.
pub trait Host {
    /// Full page navigation, not client-side routing.
    fn assign_location(&mut self, href: &str);
    fn submit_form(&mut self, form_id: &str);
    fn confirm(&mut self, message: &str) -> bool;
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub toggle: String,
    pub panel: String,
    pub open: bool,
}

impl Dropdown {
    pub fn new(toggle: impl Into<String>, panel: impl Into<String>) -> Self {
        Self { toggle: toggle.into(), panel: panel.into(), open: false }
    }
}

/// Table row that navigates to `href` when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickableRow {
    pub id: String,
    pub href: String,
    /// Set once the row has been wired, used for the hover style.
    pub clickable: bool,
}

impl ClickableRow {
    pub fn new(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self { id: id.into(), href: href.into(), clickable: false }
    }
}

/// Form whose select controls submit it on change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub id: String,
    pub selects: Vec<String>,
}

impl FilterForm {
    pub fn new(id: impl Into<String>, selects: &[&str]) -> Self {
        Self { id: id.into(), selects: selects.iter().map(|s| s.to_string()).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub invalid: bool,
    pub feedback: Option<String>,
}

impl Field {
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), required: true, invalid: false, feedback: None }
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { required: false, ..Self::required(name, value) }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub needs_validation: bool,
    pub was_validated: bool,
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), needs_validation: false, was_validated: false, fields: Vec::new() }
    }

    /// A form that is checked on submit.
    pub fn validated(id: impl Into<String>) -> Self {
        Self { needs_validation: true, ..Self::new(id) }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Constraint check without touching markers: every required field has
    /// a non-blank value.
    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(|f| !f.required || !f.is_blank())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub dropdowns: Vec<Dropdown>,
    pub rows: Vec<ClickableRow>,
    pub filter_forms: Vec<FilterForm>,
    pub forms: Vec<Form>,
}

impl Page {
    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|f| f.id == id)
    }

    pub fn dropdown(&self, toggle: &str) -> Option<&Dropdown> {
        self.dropdowns.iter().find(|d| d.toggle == toggle)
    }

    pub fn open_panels(&self) -> Vec<&str> {
        self.dropdowns.iter().filter(|d| d.open).map(|d| d.panel.as_str()).collect()
    }

    pub fn is_toggle(&self, id: &str) -> bool {
        self.dropdowns.iter().any(|d| d.toggle == id)
    }
}

/// Events delivered to the page scripts, addressed by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    Click { target: String },
    Change { target: String },
    Submit { form: String },
}

impl DomEvent {
    pub fn click(target: impl Into<String>) -> Self {
        DomEvent::Click { target: target.into() }
    }

    pub fn change(target: impl Into<String>) -> Self {
        DomEvent::Change { target: target.into() }
    }

    pub fn submit(form: impl Into<String>) -> Self {
        DomEvent::Submit { form: form.into() }
    }
}
