use ledger_core::{EntryFilter, Ledger};

use crate::app::AppContext;
use crate::cli::{EditArgs, EntryArgs, ListArgs, SearchArgs};
use crate::errors::CliError;
use crate::helpers::{
    parse_amount, parse_date, parse_index, parse_optional_amount, parse_optional_date,
    parse_output_format,
};
use crate::output::print_entry_list;
use crate::ui::UiContext;

pub fn handle_add(ctx: &AppContext, args: &EntryArgs) -> anyhow::Result<()> {
    let date = parse_date(&args.date)?;
    let amount = parse_amount(&args.amount)?;

    let mut ledger = ctx.open_ledger()?;
    ledger
        .append(date, args.category.trim(), amount, args.description.as_str())
        .map_err(CliError::from)?;

    if !ctx.quiet() {
        println!("Added entry #{}", ledger.len() - 1);
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let index = parse_index(&args.index)?;
    let date = parse_date(&args.entry.date)?;
    let amount = parse_amount(&args.entry.amount)?;

    let mut ledger = ctx.open_ledger()?;
    ledger
        .update(
            index,
            date,
            args.entry.category.trim(),
            amount,
            args.entry.description.as_str(),
        )
        .map_err(CliError::from)?;

    if !ctx.quiet() {
        println!("Updated entry #{}", index);
    }
    Ok(())
}

/// Build a filter from raw, possibly blank, user input.
pub fn build_filter(
    category: Option<&str>,
    date: Option<&str>,
    amount: Option<&str>,
) -> Result<EntryFilter, CliError> {
    let mut filter = EntryFilter::new();
    if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
        filter = filter.category(category);
    }
    if let Some(date) = parse_optional_date(date)? {
        filter = filter.date(date);
    }
    if let Some(amount) = parse_optional_amount(amount)? {
        filter = filter.amount(amount);
    }
    Ok(filter)
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let filter = build_filter(
        args.category.as_deref(),
        args.date.as_deref(),
        args.amount.as_deref(),
    )?;
    let format = parse_output_format(args.format.as_deref())?;
    let ledger = ctx.open_ledger()?;

    let ui = UiContext::from_env(args.json, format);
    print_entry_list(&ui, &matching_rows(&ledger, &filter), ctx.quiet())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ledger = ctx.open_ledger()?;

    let ui = UiContext::from_env(args.json, format);
    print_entry_list(&ui, &matching_rows(&ledger, &EntryFilter::new()), ctx.quiet())
}

/// `(position, entry)` pairs for every entry matching `filter`.
pub fn matching_rows<'a>(
    ledger: &'a Ledger,
    filter: &EntryFilter,
) -> Vec<(usize, &'a ledger_core::Entry)> {
    ledger
        .search_positions(filter)
        .into_iter()
        .filter_map(|index| ledger.get(index).map(|entry| (index, entry)))
        .collect()
}
