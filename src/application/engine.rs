use crate::application::{assembler, executor, parser, validator};
use crate::domain::calendar::CalendarDate;
use crate::domain::request::TransferRequest;
use crate::domain::response::Response;

/// The pipeline entry point: parse, validate, simulate, assemble.
///
/// Stateless apart from an optional pinned clock. Every call receives the
/// full account snapshot from the caller and returns simulated balances;
/// nothing is retained between calls and the snapshot itself is never
/// mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionEngine {
    today: Option<CalendarDate>,
}

impl InstructionEngine {
    /// An engine that reads the UTC calendar once per call.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Pins "today" for deterministic scheduling decisions, used by tests
    /// and the CLI's `--today` flag.
    pub fn with_today(today: CalendarDate) -> Self {
        Self { today: Some(today) }
    }

    /// Processes one transfer request into a response.
    ///
    /// Parse and validation failures branch straight to the assembler; only
    /// a fully validated transaction reaches the executor.
    pub fn process(&self, request: &TransferRequest) -> Response {
        let parsed = match parser::parse(&request.instruction) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(code = %error.status_code(), "instruction rejected at parse");
                return assembler::failure(None, &error);
            }
        };
        let validated = match validator::validate(&parsed, &request.accounts) {
            Ok(validated) => validated,
            Err(error) => {
                tracing::debug!(code = %error.status_code(), "instruction rejected at validation");
                return assembler::failure(Some(&parsed), &error);
            }
        };
        let today = self.today.unwrap_or_else(CalendarDate::today_utc);
        let executed = executor::execute(&validated, today);
        assembler::success(&validated, &executed, &request.accounts)
    }
}
