use super::ui;
use crate::core::{PriceList, Side, SwapForm, quote_description};
use comfy_table::{Cell, Table};

/// Lists the normalized price list, marking the default selection.
pub fn run(list: &PriceList, form: &SwapForm) {
    if list.is_empty() {
        println!("{}", ui::style_text("No quotes available.", ui::StyleType::Subtle));
        return;
    }

    println!("{}", ui::style_text("Price List", ui::StyleType::Title));
    println!("{}", build_table(list, form));
}

pub fn build_table(list: &PriceList, form: &SwapForm) -> Table {
    let from = form.dropdown(Side::From, list);
    let to = form.dropdown(Side::To, list);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Price"),
        ui::header_cell("Updated"),
        ui::header_cell(&from.label()),
        ui::header_cell(&to.label()),
        ui::header_cell("Icon"),
    ]);

    for quote in from.items() {
        let updated = quote
            .updated_at
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "N/A".to_string());

        table.add_row(vec![
            Cell::new(&quote.currency),
            Cell::new(quote_description(quote)),
            Cell::new(updated),
            ui::marker_cell(from.is_selected(quote)),
            ui::marker_cell(to.is_selected(quote)),
            Cell::new(ui::style_text(&quote.icon_url, ui::StyleType::Subtle)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quote::normalize_json;
    use crate::core::quote::DEFAULT_ICON_URL_TEMPLATE;

    #[test]
    fn test_build_table() {
        let list = normalize_json(
            r#"[
                {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.2},
                {"currency": "ETH", "price": 1645.9},
                {"currency": "ATOM", "price": 7.18}
            ]"#,
            DEFAULT_ICON_URL_TEMPLATE,
        )
        .unwrap();
        let form = SwapForm::initialize(&list);
        let table = build_table(&list, &form);

        assert_eq!(table.row_iter().count(), 3);
        let rendered = console::strip_ansi_codes(&table.to_string()).to_string();
        assert!(rendered.contains("1 BLUR = $0.2"));
        assert!(rendered.contains("2023-08-29 07:10:40"));
        assert!(rendered.contains("N/A"));
        // One marker per slot
        assert_eq!(rendered.matches('✓').count(), 2);
    }

    #[test]
    fn test_uninitialized_form_has_no_markers() {
        let list = crate::core::normalize(vec![crate::core::RawQuote::new("A", Some(1.0))]);
        let form = SwapForm::initialize(&list);
        let rendered = build_table(&list, &form).to_string();
        assert_eq!(rendered.matches('✓').count(), 0);
    }
}
