use super::dialog::{CONFIRM_TITLE, Confirmation, Decision};
use super::{ensure_ready, lookup, rate, ui};
use crate::core::conversion::format_amount;
use crate::core::{ConversionState, PriceList, SwapForm};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

/// User choices for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub swap: bool,
    pub yes: bool,
}

/// Applies the choices to the form in the order a user would: pick the
/// currencies, optionally swap them, then type the amount.
pub fn apply(list: &PriceList, form: SwapForm, args: &ConvertArgs) -> Result<SwapForm> {
    ensure_ready(&form)?;
    let mut form = form;
    if let Some(code) = &args.from {
        form = form.select_from(lookup(list, code)?.clone());
    }
    if let Some(code) = &args.to {
        form = form.select_to(lookup(list, code)?.clone());
    }
    if args.swap {
        form = form.swap();
    }
    Ok(form.set_amount_in(args.amount.as_deref().unwrap_or("")))
}

pub fn run(
    list: &PriceList,
    form: SwapForm,
    args: &ConvertArgs,
    dialog: &dyn Confirmation,
) -> Result<Option<Decision>> {
    let form = apply(list, form, args)?;
    let Some(state) = form.state() else {
        return Ok(None);
    };

    println!("{}", render(state));
    submit(state, dialog)
}

/// Renders the two selections with their amounts, plus rates once an
/// amount has been entered.
pub fn render(state: &ConversionState) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Currency"),
        ui::header_cell("Amount"),
    ]);
    table.add_row(vec![
        Cell::new("You Pay"),
        Cell::new(&state.from.currency),
        ui::amount_cell(state.amount_in),
    ]);
    table.add_row(vec![
        Cell::new("You Receive"),
        Cell::new(&state.to.currency),
        ui::amount_cell(state.amount_out),
    ]);

    let mut output = table.to_string();
    if state.amount_in.is_some() {
        output.push('\n');
        output.push_str(&rate::render(state));
    }
    output
}

pub fn summary(state: &ConversionState) -> String {
    format!(
        "{} {} to {} {}",
        format_amount(state.amount_in),
        state.from.currency,
        format_amount(state.amount_out),
        state.to.currency
    )
}

/// Asks for confirmation. Without an amount nothing is submitted.
pub fn submit(state: &ConversionState, dialog: &dyn Confirmation) -> Result<Option<Decision>> {
    if state.amount_in.is_none() {
        println!(
            "{}",
            ui::style_text(
                "Please enter an amount you would like to convert",
                ui::StyleType::Subtle
            )
        );
        return Ok(None);
    }

    let summary = summary(state);
    let decision = dialog.confirm(CONFIRM_TITLE, &summary)?;
    info!(?decision, %summary, "Conversion resolved");

    let title_style = match decision {
        Decision::Confirmed => ui::StyleType::Success,
        Decision::Cancelled => ui::StyleType::Subtle,
    };
    println!(
        "{}: {}",
        ui::style_text(decision.title(), title_style),
        decision.message()
    );
    Ok(Some(decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::dialog::FixedConfirmation;
    use crate::core::{RawQuote, normalize};
    use std::cell::RefCell;

    struct RecordingConfirmation {
        answer: Decision,
        seen: RefCell<Vec<(String, String)>>,
    }

    impl Confirmation for RecordingConfirmation {
        fn confirm(&self, title: &str, summary: &str) -> Result<Decision> {
            self.seen
                .borrow_mut()
                .push((title.to_string(), summary.to_string()));
            Ok(self.answer)
        }
    }

    fn price_list() -> PriceList {
        normalize(vec![
            RawQuote::new("A", Some(1.0)),
            RawQuote::new("A", Some(2.0)),
            RawQuote::new("B", Some(4.0)),
            RawQuote::new("C", Some(8.0)),
        ])
    }

    fn args(amount: &str) -> ConvertArgs {
        ConvertArgs {
            amount: Some(amount.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_defaults_to_first_two_quotes() {
        let list = price_list();
        let form = apply(&list, SwapForm::initialize(&list), &args("10")).unwrap();
        let state = form.state().unwrap();
        assert_eq!(state.from.currency, "A");
        assert_eq!(state.to.currency, "B");
        assert_eq!(state.amount_out, Some(40.0));
    }

    #[test]
    fn test_apply_with_selection_and_swap() {
        let list = price_list();
        let convert_args = ConvertArgs {
            amount: Some("16".to_string()),
            from: Some("C".to_string()),
            to: Some("B".to_string()),
            swap: true,
            yes: true,
        };
        let form = apply(&list, SwapForm::initialize(&list), &convert_args).unwrap();
        let state = form.state().unwrap();
        assert_eq!(state.from.currency, "B");
        assert_eq!(state.to.currency, "C");
        assert_eq!(state.amount_out, Some(32.0));
    }

    #[test]
    fn test_apply_rejects_unknown_currency() {
        let list = price_list();
        let convert_args = ConvertArgs {
            to: Some("Z".to_string()),
            ..args("1")
        };
        let err = apply(&list, SwapForm::initialize(&list), &convert_args).unwrap_err();
        assert!(err.to_string().contains("Unknown currency: Z"));
    }

    #[test]
    fn test_run_confirmed() {
        let list = price_list();
        let dialog = RecordingConfirmation {
            answer: Decision::Confirmed,
            seen: RefCell::new(Vec::new()),
        };
        let decision = run(&list, SwapForm::initialize(&list), &args("10"), &dialog).unwrap();

        assert_eq!(decision, Some(Decision::Confirmed));
        let seen = dialog.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, CONFIRM_TITLE);
        assert_eq!(seen[0].1, "10 A to 40 B");
    }

    #[test]
    fn test_run_cancelled() {
        let list = price_list();
        let dialog = FixedConfirmation(Decision::Cancelled);
        let decision = run(&list, SwapForm::initialize(&list), &args("1"), &dialog).unwrap();
        assert_eq!(decision, Some(Decision::Cancelled));
    }

    #[test]
    fn test_run_without_amount_skips_dialog() {
        let list = price_list();
        let dialog = RecordingConfirmation {
            answer: Decision::Confirmed,
            seen: RefCell::new(Vec::new()),
        };
        let decision = run(&list, SwapForm::initialize(&list), &args(""), &dialog).unwrap();

        assert_eq!(decision, None);
        assert!(dialog.seen.borrow().is_empty());
    }

    #[test]
    fn test_run_on_uninitialized_form() {
        let list = PriceList::default();
        let dialog = FixedConfirmation(Decision::Confirmed);
        let err = run(&list, SwapForm::Uninitialized, &args("1"), &dialog).unwrap_err();
        assert!(err.to_string().contains("not ready"));
    }

    #[test]
    fn test_render_shows_rates_only_with_amount() {
        let list = price_list();
        let form = SwapForm::initialize(&list);
        let empty = console::strip_ansi_codes(&render(form.state().unwrap())).to_string();
        assert!(!empty.contains("Reference Price"));

        let form = form.set_amount_in("10");
        let filled = console::strip_ansi_codes(&render(form.state().unwrap())).to_string();
        assert!(filled.contains("40"));
        assert!(filled.contains("Reference Price"));
        assert!(filled.contains("1 A = 4 B"));
    }
}
