use crate::domain::account::Account;
use crate::domain::calendar::CalendarDate;
use crate::domain::instruction::ParsedInstruction;
use crate::domain::transaction::ValidatedTransaction;
use crate::error::{AccountRole, InstructionError};

/// Currencies the engine settles in.
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["NGN", "USD", "GBP", "GHS"];

/// Runs the ordered semantic checks against a parsed instruction.
///
/// The first violated check wins and later checks never run. Callers depend
/// on which code surfaces when several rules are broken at once, so the
/// sequence here (amount, currency support, id format, existence,
/// cross-currency, self-transfer, funds, date) is part of the contract.
pub fn validate<'a>(
    parsed: &ParsedInstruction,
    accounts: &'a [Account],
) -> Result<ValidatedTransaction<'a>, InstructionError> {
    let amount = parse_amount(&parsed.amount_raw)?;
    let currency = supported_currency(&parsed.currency)?;
    check_account_id(&parsed.debit_account, AccountRole::Debit)?;
    check_account_id(&parsed.credit_account, AccountRole::Credit)?;
    let debit = find_account(accounts, &parsed.debit_account)?;
    let credit = find_account(accounts, &parsed.credit_account)?;
    check_currencies(debit, credit, &currency)?;
    check_distinct(debit, credit)?;
    check_funds(debit, amount)?;
    let execute_by = check_date(parsed.execute_by.as_deref())?;

    Ok(ValidatedTransaction {
        instruction_type: parsed.instruction_type,
        amount,
        currency,
        debit,
        credit,
        execute_by,
    })
}

/// A positive integer string: digits only, no sign, no point, value > 0.
fn parse_amount(raw: &str) -> Result<i64, InstructionError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InstructionError::InvalidAmount);
    }
    match raw.parse::<i64>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(InstructionError::InvalidAmount),
    }
}

fn supported_currency(code: &str) -> Result<String, InstructionError> {
    let upper = code.to_ascii_uppercase();
    if SUPPORTED_CURRENCIES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(InstructionError::UnsupportedCurrency)
    }
}

/// Account ids allow ASCII alphanumerics plus `-`, `.` and `@`.
fn check_account_id(id: &str, role: AccountRole) -> Result<(), InstructionError> {
    let well_formed = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'@'));
    if well_formed {
        Ok(())
    } else {
        Err(InstructionError::InvalidAccountId {
            role,
            id: id.to_string(),
        })
    }
}

fn find_account<'a>(accounts: &'a [Account], id: &str) -> Result<&'a Account, InstructionError> {
    accounts
        .iter()
        .find(|account| account.id == id)
        .ok_or_else(|| InstructionError::AccountNotFound { id: id.to_string() })
}

/// The accounts must agree with each other first, then with the instruction.
fn check_currencies(
    debit: &Account,
    credit: &Account,
    instruction_currency: &str,
) -> Result<(), InstructionError> {
    let debit_currency = debit.currency.to_ascii_uppercase();
    let credit_currency = credit.currency.to_ascii_uppercase();
    if debit_currency != credit_currency {
        return Err(InstructionError::AccountCurrencyMismatch);
    }
    if debit_currency != instruction_currency {
        return Err(InstructionError::InstructionCurrencyMismatch {
            instruction: instruction_currency.to_string(),
            account: debit_currency,
        });
    }
    Ok(())
}

fn check_distinct(debit: &Account, credit: &Account) -> Result<(), InstructionError> {
    if debit.id == credit.id {
        Err(InstructionError::SelfTransfer)
    } else {
        Ok(())
    }
}

fn check_funds(debit: &Account, amount: i64) -> Result<(), InstructionError> {
    if debit.balance < amount {
        return Err(InstructionError::InsufficientFunds {
            available: debit.balance,
            required: amount,
            currency: debit.currency.to_ascii_uppercase(),
        });
    }
    Ok(())
}

fn check_date(token: Option<&str>) -> Result<Option<CalendarDate>, InstructionError> {
    match token {
        Some(raw) => CalendarDate::parse(raw)
            .map(Some)
            .ok_or(InstructionError::InvalidDate),
        None => Ok(None),
    }
}
