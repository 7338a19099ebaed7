//! This file defines the templates and a convenience function for creating the tab bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a tab in the tab bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one tab should be set as active at any one time.
#[derive(Clone)]
struct Tab<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Tab<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center gap-2 py-4 px-1 border-b-2 font-medium text-sm \
            border-emerald-500 text-emerald-600"
        } else {
            "flex items-center gap-2 py-4 px-1 border-b-2 font-medium text-sm \
            border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300 \
            dark:text-gray-400 dark:hover:text-gray-200"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    tabs: Vec<Tab<'a>>,
}

impl NavBar<'_> {
    /// Get the tab bar.
    ///
    /// If a tab matches `active_endpoint`, then that tab will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let tabs = [
            (endpoints::TRANSACTIONS_VIEW, "Transactions"),
            (endpoints::ANALYTICS_VIEW, "Analytics"),
            (endpoints::PREDICTIONS_VIEW, "ML Predictions"),
            (endpoints::ANOMALIES_VIEW, "Anomalies"),
            (endpoints::CHAT_VIEW, "AI Chat"),
        ]
        .into_iter()
        .map(|(url, title)| Tab {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { tabs }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div class="border-b border-gray-200 dark:border-gray-700"
            {
                nav class="flex flex-wrap gap-x-8 px-6" aria-label="Tabs"
                {
                    @for tab in self.tabs {
                        (tab.into_html())
                    }
                }
            }
        )
    }
}
