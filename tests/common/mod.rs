use paylang::application::engine::InstructionEngine;
use paylang::domain::account::Account;
use paylang::domain::calendar::CalendarDate;
use paylang::domain::request::TransferRequest;
use paylang::domain::response::Response;

/// Fixed clock (2025-06-15) so scheduling assertions never depend on the
/// wall calendar.
const TODAY: CalendarDate = CalendarDate {
    year: 2025,
    month: 6,
    day: 15,
};

pub fn account(id: &str, balance: i64, currency: &str) -> Account {
    Account {
        id: id.to_string(),
        balance,
        currency: currency.to_string(),
    }
}

pub fn process(instruction: &str, accounts: Vec<Account>) -> Response {
    let request = TransferRequest {
        instruction: instruction.to_string(),
        accounts,
    };
    InstructionEngine::with_today(TODAY).process(&request)
}
