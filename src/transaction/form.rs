//! The form for adding a new transaction.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::core::{Category, MAX_AMOUNT, PaymentMethod},
};

/// The form for adding a transaction.
///
/// `today` is used as the default date.
pub fn new_transaction_form(today: Date) -> Markup {
    html! {
        section class="bg-gray-50 dark:bg-gray-900 rounded-lg p-6"
        {
            h3 class="text-lg font-semibold mb-4" { "Add New Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
            {
                div
                {
                    label for="merchant" class=(FORM_LABEL_STYLE) { "Merchant" }

                    input
                        name="merchant"
                        id="merchant"
                        type="text"
                        placeholder="e.g., Starbucks"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select name="category" id="category" required class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        max=(MAX_AMOUNT)
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        name="date"
                        id="date"
                        type="date"
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="payment_method" class=(FORM_LABEL_STYLE) { "Payment Method" }

                    select
                        name="payment_method"
                        id="payment_method"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for payment_method in PaymentMethod::ALL {
                            option value=(payment_method) { (payment_method) }
                        }
                    }
                }

                div class="flex items-end"
                {
                    button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                    {
                        span class="inline htmx-indicator" id="indicator"
                        {
                            (loading_spinner())
                        }
                        "Add Transaction"
                    }
                }
            }
        }
    }
}
