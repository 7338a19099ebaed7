use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{navigation::NavBar, stats::StatCards};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-emerald-600 \
    dark:bg-emerald-600 disabled:opacity-50 disabled:cursor-not-allowed \
    hover:enabled:bg-emerald-700 focus:outline-none focus:ring-2 \
    focus:ring-emerald-500 text-white rounded-md flex items-center \
    justify-center gap-2";

// Form styles
pub const FORM_LABEL_STYLE: &str =
    "block mb-1 text-sm font-medium text-gray-700 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full px-3 py-2 rounded-md text-sm \
    text-gray-900 dark:text-white bg-white dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:outline-none focus:ring-2 focus:ring-emerald-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Badge style, combine with a colour from the badge's domain.
pub const BADGE_STYLE: &str = "px-2 py-1 rounded-full text-xs font-medium";

// Card and page containers
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 rounded-lg shadow p-6";

pub const PAGE_CONTAINER_STYLE: &str =
    "max-w-7xl mx-auto p-6 space-y-6 text-gray-900 dark:text-white";

const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_SCRIPT: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js";
const TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// The ECharts library, add it to the head of pages that render charts.
pub const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Spendboard" }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";

                script src=(TAILWIND_SCRIPT) {}
                script src=(HTMX_SCRIPT) {}
                script src=(HTMX_RESPONSE_TARGETS_SCRIPT) {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request + .idle-label {
                        display: none;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// The page shell shared by every tab.
///
/// Renders the header, the summary cards, the tab bar with `active_endpoint`
/// highlighted, the tab's `content` and the footer.
pub fn dashboard_page(
    title: &str,
    active_endpoint: &str,
    stats: StatCards,
    head_elements: &[HeadElement],
    content: &Markup,
) -> Markup {
    let nav_bar = NavBar::new(active_endpoint).into_html();

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="text-center space-y-2"
            {
                h1 class="text-4xl font-bold" { "Financial Spending Dashboard" }
                p class="text-gray-600 dark:text-gray-400"
                {
                    "AI-powered insights with SQL analytics and ML predictions"
                }
            }

            (stats.into_html())

            div class="bg-white dark:bg-gray-800 rounded-lg shadow"
            {
                (nav_bar)

                main class="p-6" { (content) }
            }

            footer class="text-center text-sm text-gray-500"
            {
                "Ready for FastAPI backend integration • SQLite/Postgres • ML predictions • LangChain NL queries"
            }
        }
    );

    base(title, head_elements, &content)
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-emerald-600 dark:text-emerald-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-emerald-600
                            hover:bg-emerald-800 focus:ring-4 focus:outline-hidden
                            focus:ring-emerald-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-emerald-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format `number` as US dollars with two decimal places and thousands
/// separators, e.g. `1234.5` is rendered as "$1,234.50".
///
/// Values that are not finite (NaN, infinity) are treated as zero. Every digit
/// of the whole dollars is written out, however large the amount.
pub fn format_currency(number: f64) -> String {
    let number = if number.is_finite() { number } else { 0.0 };
    let total_cents = (number.abs() * 100.0).round();

    // Pad to at least "0.00" before splitting off the cents.
    let digits = format!("{total_cents:03.0}");
    let (dollars, cents) = digits.split_at(digits.len() - 2);

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Avoid "-$0.00" for tiny negative numbers that round to zero.
    if number < 0.0 && total_cents > 0.0 {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn format_currency_uses_thousands_separators_and_two_decimals() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(52.5), "$52.50");
        assert_eq!(format_currency(26.25), "$26.25");
        assert_eq!(format_currency(40.0), "$40.00");
        assert_eq!(format_currency(1_000_000.99), "$1,000,000.99");
        assert_eq!(format_currency(123_456.0), "$123,456.00");
    }

    #[test]
    fn format_currency_treats_non_finite_numbers_as_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn format_currency_handles_negative_numbers() {
        assert_eq!(format_currency(-500.0), "-$500.00");
        assert_eq!(format_currency(-1234.567), "-$1,234.57");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn format_currency_writes_out_large_amounts() {
        assert_eq!(format_currency(999_999_999.99), "$999,999,999.99");
        assert_eq!(format_currency(1e15), "$1,000,000,000,000,000.00");
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(-1e15), "-$1,000,000,000,000,000.00");

        let huge = format_currency(1e300);
        assert!(huge.starts_with("$1,000,000,"), "got {huge}");
        assert!(huge.ends_with(".00"), "got {huge}");
        assert!(!huge.contains('e'), "got {huge}");
    }

    #[test]
    fn format_currency_pads_cents() {
        assert_eq!(format_currency(0.05), "$0.05");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(7.0), "$7.00");
    }
}
