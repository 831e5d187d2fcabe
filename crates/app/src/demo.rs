//! Fixed demonstration sequence.

use minibank_bank::{Bank, Console, notify};
use minibank_core::{BankResult, Money};

use crate::config::DumpFormat;

/// Run the demo against `console` and hand back the resulting bank.
///
/// Notifications are written to the same console as the bank's own lines.
/// Operations that turn out to be no-ops are only traced.
pub fn run<C>(console: C, dump: DumpFormat) -> BankResult<Bank<C>>
where
    C: Console + Clone,
{
    let mut bank = Bank::new(console.clone());

    bank.open_account("Amine", Money::new(1000.0), false);
    bank.open_account("Sara", Money::new(2000.0), true);

    let mut by_sms = notify::sms(console.clone());
    let mut by_email = notify::email(console);

    note("deposit", bank.deposit("Amine", Money::new(300.0), &mut by_sms));
    note("withdraw", bank.withdraw("Sara", Money::new(400.0), &mut by_email));
    note("transfer", bank.transfer("Amine", "Sara", Money::new(200.0)));
    note("duplicate", bank.duplicate_account("Sara"));

    match dump {
        DumpFormat::Table => bank.print_accounts(),
        DumpFormat::Json => {
            let json = bank.dump_json()?;
            bank.console_mut().print_line(&json);
        }
    }

    Ok(bank)
}

fn note<T>(step: &'static str, result: BankResult<T>) {
    if let Err(err) = result {
        tracing::debug!(step, error = %err, "demo step had no effect");
    }
}
