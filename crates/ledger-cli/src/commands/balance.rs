use crate::app::AppContext;
use crate::cli::BalanceArgs;
use crate::output::print_balance;
use crate::ui::UiContext;

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let ui = UiContext::from_env(args.json, None);
    print_balance(&ui, &ledger.balance())
}
