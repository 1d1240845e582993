use api::models::{parse_amount, Commercials, Deliverable, RateItem};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Alert, Button, ButtonVariant, FormField, Input, Select, Textarea};
use crate::icons::FaTrash;
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::Icon;

/// One editable row of the rate card. Prices are kept as typed.
#[derive(Clone, Debug, PartialEq)]
struct RateRow {
    deliverable: Deliverable,
    price: String,
    description: String,
}

impl RateRow {
    fn blank(deliverable: Deliverable) -> Self {
        Self {
            deliverable,
            price: String::new(),
            description: String::new(),
        }
    }

    fn from_item(item: &RateItem) -> Self {
        let price = match item.price % 100 {
            0 => (item.price / 100).to_string(),
            paise => format!("{}.{paise:02}", item.price / 100),
        };
        Self {
            deliverable: item.deliverable,
            price,
            description: item.description.clone().unwrap_or_default(),
        }
    }

    fn to_item(&self) -> Result<RateItem, String> {
        let mut item = RateItem::new(self.deliverable, 0);
        let description = self.description.trim();
        if !description.is_empty() {
            item.description = Some(description.to_string());
        }
        item.price = parse_amount(&self.price)
            .ok_or_else(|| format!("Enter a valid price for {}", item.title()))?;
        Ok(item)
    }
}

/// Assemble the rate card from the form, running the same checks the
/// backend does.
fn build_commercials(
    currency: &str,
    rows: &[RateRow],
    negotiable: bool,
    notes: &str,
) -> Result<Commercials, String> {
    let rates = rows
        .iter()
        .map(RateRow::to_item)
        .collect::<Result<Vec<_>, _>>()?;
    let commercials = Commercials {
        currency: currency.to_string(),
        negotiable,
        notes: Some(notes.trim().to_string()).filter(|n| !n.is_empty()),
        rates,
    };
    commercials.validate().map_err(|e| e.to_string())?;
    Ok(commercials)
}

/// Loads the saved media kit and shows the editor.
#[component]
pub fn MediaKitView() -> Element {
    let api = use_api();
    // An expired session signs out here, once per load
    let commercials = use_resource(move || async move {
        api.client()
            .commercials()
            .await
            .map_err(|e| api.error_message(&e))
    });

    let loaded = commercials.read().clone();
    match loaded {
        None => rsx! {
            p { class: "muted", "Loading media kit..." }
        },
        Some(Err(message)) => rsx! {
            Alert { message: message }
        },
        Some(Ok(saved)) => rsx! {
            MediaKitEditor { initial: saved }
        },
    }
}

#[component]
fn MediaKitEditor(initial: Commercials) -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let currency = initial.currency.clone();
    let mut rows = use_signal(|| initial.rates.iter().map(RateRow::from_item).collect::<Vec<_>>());
    let mut negotiable = use_signal(|| initial.negotiable);
    let mut notes = use_signal(|| initial.notes.clone().unwrap_or_default());
    let mut saved = use_signal(|| initial.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let deliverable_options: Vec<(String, String)> = Deliverable::ALL
        .iter()
        .map(|d| (d.key().to_string(), d.label().to_string()))
        .collect();

    let save_currency = currency.clone();
    let handle_save = move |_: MouseEvent| {
        let currency = save_currency.clone();
        spawn(async move {
            error.set(None);
            let commercials = match build_commercials(&currency, &rows(), negotiable(), &notes()) {
                Ok(c) => c,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            saving.set(true);
            match api.client().save_commercials(&commercials).await {
                Ok(stored) => {
                    rows.set(stored.rates.iter().map(RateRow::from_item).collect());
                    saved.set(stored);
                    notify(&mut notices, NoticeLevel::Success, "Media kit saved");
                }
                Err(e) => error.set(Some(api.error_message(&e))),
            }
            saving.set(false);
        });
    };

    let summary = saved().starting_price().map(|p| {
        let label = api::models::format_amount(p, &saved().currency);
        format!("Starting at {label}")
    });

    rsx! {
        section {
            class: "card",
            div {
                class: "card-header",
                h2 { class: "card-title", "Media kit" }
                if let Some(summary) = summary {
                    span { class: "badge", "{summary}" }
                }
            }
            p { class: "muted", "Prices in {currency}. Brands see these when browsing your profile." }

            table {
                class: "rate-table",
                thead {
                    tr {
                        th { "Deliverable" }
                        th { "Description" }
                        th { "Price" }
                        th {}
                    }
                }
                tbody {
                    for (i, row) in rows().into_iter().enumerate() {
                        tr {
                            key: "{i}",
                            td {
                                Select {
                                    value: row.deliverable.key(),
                                    options: deliverable_options.clone(),
                                    onchange: move |key: String| {
                                        if let Some(d) = Deliverable::from_key(&key) {
                                            rows.write()[i].deliverable = d;
                                        }
                                    },
                                }
                            }
                            td {
                                Input {
                                    placeholder: "Optional",
                                    value: row.description.clone(),
                                    oninput: move |e: FormEvent| rows.write()[i].description = e.value(),
                                }
                            }
                            td {
                                Input {
                                    placeholder: "0",
                                    value: row.price.clone(),
                                    oninput: move |e: FormEvent| rows.write()[i].price = e.value(),
                                }
                            }
                            td {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| {
                                        rows.write().remove(i);
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
            if rows().is_empty() {
                p { class: "muted", "No rates yet. Add what you charge for each kind of content." }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    let next = next_deliverable(&rows());
                    rows.write().push(RateRow::blank(next));
                },
                "Add rate"
            }

            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: negotiable(),
                    onchange: move |e: FormEvent| negotiable.set(e.checked()),
                }
                " Prices are negotiable"
            }
            FormField { label: "Notes", html_for: "media-kit-notes",
                Textarea {
                    id: "media-kit-notes",
                    rows: 3,
                    value: notes(),
                    oninput: move |e: FormEvent| notes.set(e.value()),
                }
            }
            if let Some(err) = error() {
                Alert { message: err }
            }
            div {
                class: "form-actions",
                Button {
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save media kit" }
                }
            }
        }
    }
}

/// First standard deliverable not yet on the card, else a custom row.
fn next_deliverable(rows: &[RateRow]) -> Deliverable {
    Deliverable::ALL
        .into_iter()
        .find(|d| *d != Deliverable::Custom && !rows.iter().any(|r| r.deliverable == *d))
        .unwrap_or(Deliverable::Custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(deliverable: Deliverable, price: &str) -> RateRow {
        RateRow {
            price: price.to_string(),
            ..RateRow::blank(deliverable)
        }
    }

    #[test]
    fn test_row_price_roundtrips_through_form_text() {
        let item = RateItem::new(Deliverable::InstagramReel, 250_050);
        let row = RateRow::from_item(&item);
        assert_eq!(row.price, "2500.50");
        assert_eq!(row.to_item().unwrap(), item);

        let row = RateRow::from_item(&RateItem::new(Deliverable::YoutubeVideo, 1_000_000));
        assert_eq!(row.price, "10000");
    }

    #[test]
    fn test_build_commercials() {
        let rows = vec![
            row(Deliverable::InstagramReel, "15,000"),
            RateRow {
                description: "  Event appearance ".to_string(),
                ..row(Deliverable::Custom, "50000")
            },
        ];
        let c = build_commercials("INR", &rows, false, "  ").unwrap();
        assert_eq!(c.rates[0].price, 1_500_000);
        assert_eq!(c.rates[1].description.as_deref(), Some("Event appearance"));
        assert_eq!(c.notes, None);
        assert!(!c.negotiable);
    }

    #[test]
    fn test_build_commercials_rejects_bad_rows() {
        let err = build_commercials("INR", &[row(Deliverable::InstagramPost, "lots")], true, "")
            .unwrap_err();
        assert_eq!(err, "Enter a valid price for Instagram Post");

        let err = build_commercials("INR", &[row(Deliverable::InstagramPost, "0")], true, "")
            .unwrap_err();
        assert_eq!(err, "Price for Instagram Post must be greater than zero");

        let rows = vec![row(Deliverable::YoutubeShort, "10"), row(Deliverable::YoutubeShort, "20")];
        let err = build_commercials("INR", &rows, true, "").unwrap_err();
        assert_eq!(err, "YouTube Short is listed more than once");
    }

    #[test]
    fn test_next_deliverable_skips_used_ones() {
        assert_eq!(next_deliverable(&[]), Deliverable::InstagramReel);
        let rows: Vec<RateRow> = Deliverable::ALL
            .into_iter()
            .filter(|d| *d != Deliverable::Custom)
            .map(RateRow::blank)
            .collect();
        assert_eq!(next_deliverable(&rows), Deliverable::Custom);
    }
}
