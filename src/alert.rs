//! Alert system for displaying error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined in [crate::html::base].

use maud::{Markup, html};

/// An error alert with a short summary and a longer explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400"
                role="alert"
                data-alert="true"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        span class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            " " (self.details)
                        }
                    }

                    button
                        type="button"
                        class="font-bold"
                        aria-label="Dismiss"
                        onclick="this.closest('[data-alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}
