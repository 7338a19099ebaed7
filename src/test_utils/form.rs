use scraper::{ElementRef, Html, Selector};

/// The first form on the page.
#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    let selector = Selector::parse("form").unwrap();

    html.select(&selector).next().expect("No form found")
}

/// Assert that `form` sends its data to `endpoint` with the htmx `attribute`, e.g. "hx-post".
#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form.value().attr(attribute);

    assert_eq!(
        got,
        Some(endpoint),
        "want form with {attribute}=\"{endpoint}\", got {got:?}"
    );
}

/// Assert that `form` has a required input called `name` with the given type.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(got_type, type_, "want input {name} with type \"{type_}\"");
    assert!(
        input.value().attr("required").is_some(),
        "want input {name} to be required"
    );
}

/// Assert that the first button in `form` submits it and reads `text`.
#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let selector = Selector::parse("button").unwrap();
    let button = form.select(&selector).next().expect("No button found");

    assert_eq!(button.value().attr("type"), Some("submit"));
    assert_eq!(button.text().collect::<String>().trim(), text);
}
