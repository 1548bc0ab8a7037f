//! Landing page demo-request flow.
//!
//! The form is revealed by any "request demo" control and hidden again on
//! submit. Nothing is sent anywhere; the submitted values are only logged.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use serde::{Deserialize, Serialize};

use super::notify::{Notice, NoticeSink};

/// Scroll offset past which the header switches to its condensed style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Landing header chrome: scrolled style and the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Track the window scroll offset. Returns whether the scrolled style
    /// flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Visibility of the demo-request form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoFlow {
    #[default]
    Hidden,
    Shown,
}

/// Company size options of the demo form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRange {
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-250")]
    From100To250,
    #[serde(rename = "250-500")]
    From250To500,
    #[serde(rename = "500+")]
    Over500,
}

impl EmployeeRange {
    pub const ALL: [Self; 4] = [Self::From50To100, Self::From100To250, Self::From250To500, Self::Over500];

    /// Option value, also the serialized form.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::From50To100 => "50-100",
            Self::From100To250 => "100-250",
            Self::From250To500 => "250-500",
            Self::Over500 => "500+",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::From50To100 => "50-100 çalışan",
            Self::From100To250 => "100-250 çalışan",
            Self::From250To500 => "250-500 çalışan",
            Self::Over500 => "500+ çalışan",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

/// Inputs of the demo form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoField {
    CompanyName,
    ContactName,
    Email,
    Phone,
    EmployeeCount,
}

/// Values typed into the demo form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoForm {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub employee_count: Option<EmployeeRange>,
}

impl DemoForm {
    #[must_use]
    pub fn value(&self, field: DemoField) -> String {
        match field {
            DemoField::CompanyName => self.company_name.clone(),
            DemoField::ContactName => self.contact_name.clone(),
            DemoField::Email => self.email.clone(),
            DemoField::Phone => self.phone.clone(),
            DemoField::EmployeeCount => self.employee_count.map(EmployeeRange::value).unwrap_or_default().to_owned(),
        }
    }
}

/// Local state of the landing page.
#[derive(Clone, Debug, Default)]
pub struct DemoRequestState {
    pub flow: DemoFlow,
    pub form: DemoForm,
    /// Set once a request went through; drives the thank-you panel.
    pub submitted: bool,
}

impl DemoRequestState {
    /// Reveal the form. Scrolling to it is the caller's job.
    pub fn request_demo(&mut self) {
        self.flow = DemoFlow::Shown;
    }

    #[must_use]
    pub fn is_form_shown(&self) -> bool {
        self.flow == DemoFlow::Shown
    }

    /// The thank-you panel replaces the form only after a submit.
    #[must_use]
    pub fn show_thank_you(&self) -> bool {
        self.flow == DemoFlow::Hidden && self.submitted
    }

    pub fn set_field(&mut self, field: DemoField, value: &str) {
        match field {
            DemoField::CompanyName => value.clone_into(&mut self.form.company_name),
            DemoField::ContactName => value.clone_into(&mut self.form.contact_name),
            DemoField::Email => value.clone_into(&mut self.form.email),
            DemoField::Phone => value.clone_into(&mut self.form.phone),
            DemoField::EmployeeCount => self.form.employee_count = EmployeeRange::from_value(value),
        }
    }

    /// Accept the form: hide it, clear its values, and confirm. Returns the
    /// submitted values, or `None` when the form was not shown.
    pub fn submit(&mut self, sink: &impl NoticeSink) -> Option<DemoForm> {
        if self.flow != DemoFlow::Shown {
            return None;
        }
        let form = std::mem::take(&mut self.form);
        match serde_json::to_string(&form) {
            Ok(json) => log::debug!("demo request: {json}"),
            Err(e) => log::warn!("demo request not serializable: {e}"),
        }
        self.flow = DemoFlow::Hidden;
        self.submitted = true;
        sink.publish(Notice::success("Demo Talebi Alındı!", "En kısa sürede sizinle iletişime geçeceğiz."));
        Some(form)
    }
}
