use crate::domain::instruction::{InstructionType, ParsedInstruction};
use crate::error::InstructionError;

/// Shortest token stream either form can open with.
const MIN_TOKENS: usize = 10;
/// Tokens needed for a complete form, through the destination account.
const FORM_TOKENS: usize = 11;

/// Keyword skeletons at fixed positions 3, 4, 6, 7, 8, 9 of each form.
const DEBIT_KEYWORDS: [&str; 6] = ["FROM", "ACCOUNT", "FOR", "CREDIT", "TO", "ACCOUNT"];
const CREDIT_KEYWORDS: [&str; 6] = ["TO", "ACCOUNT", "FOR", "DEBIT", "FROM", "ACCOUNT"];
const KEYWORD_POSITIONS: [usize; 6] = [3, 4, 6, 7, 8, 9];

/// Parses a raw instruction string into its structural fields.
///
/// The grammar is fixed-position rather than free-form:
///
/// ```text
/// DEBIT  <amount> <currency> FROM ACCOUNT <debit>  FOR CREDIT TO   ACCOUNT <credit> [ON <date>]
/// CREDIT <amount> <currency> TO   ACCOUNT <credit> FOR DEBIT  FROM ACCOUNT <debit>  [ON <date>]
/// ```
///
/// Keywords match case-insensitively. A wrong keyword is a distinct failure
/// (`SY02`) from a structurally short stream (`SY03`), and an `ON` clause
/// without its date is a date failure (`DT01`). Tokens after the destination
/// account that do not open an `ON` clause are ignored.
pub fn parse(raw: &str) -> Result<ParsedInstruction, InstructionError> {
    // Interior runs of spaces collapse to single separators.
    let tokens: Vec<&str> = raw.trim().split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() {
        return Err(InstructionError::Malformed { reason: "empty" });
    }
    if tokens.len() < MIN_TOKENS {
        return Err(InstructionError::Malformed { reason: "too short" });
    }

    match tokens[0].to_ascii_uppercase().as_str() {
        "DEBIT" => parse_form(&tokens, InstructionType::Debit),
        "CREDIT" => parse_form(&tokens, InstructionType::Credit),
        _ => Err(InstructionError::MissingVerb),
    }
}

fn parse_form(
    tokens: &[&str],
    form: InstructionType,
) -> Result<ParsedInstruction, InstructionError> {
    if tokens.len() < FORM_TOKENS {
        return Err(InstructionError::TruncatedForm { form });
    }

    let keywords = match form {
        InstructionType::Debit => &DEBIT_KEYWORDS,
        InstructionType::Credit => &CREDIT_KEYWORDS,
    };
    for (&position, expected) in KEYWORD_POSITIONS.iter().zip(keywords) {
        if !tokens[position].eq_ignore_ascii_case(expected) {
            return Err(InstructionError::KeywordOrder { form });
        }
    }

    let execute_by = match tokens.get(FORM_TOKENS) {
        Some(token) if token.eq_ignore_ascii_case("ON") => match tokens.get(FORM_TOKENS + 1) {
            Some(date) => Some((*date).to_string()),
            None => return Err(InstructionError::IncompleteDateClause),
        },
        _ => None,
    };

    // Both forms put the first-named account at position 5 and the
    // counterparty at position 10; the form decides which side is which.
    let (debit_account, credit_account) = match form {
        InstructionType::Debit => (tokens[5], tokens[10]),
        InstructionType::Credit => (tokens[10], tokens[5]),
    };

    Ok(ParsedInstruction {
        instruction_type: form,
        amount_raw: tokens[1].to_string(),
        currency: tokens[2].to_ascii_uppercase(),
        debit_account: debit_account.to_string(),
        credit_account: credit_account.to_string(),
        execute_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatusCode;

    fn code_of(raw: &str) -> StatusCode {
        parse(raw).unwrap_err().status_code()
    }

    #[test]
    fn test_parse_debit_form() {
        let parsed = parse("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2").unwrap();
        assert_eq!(parsed.instruction_type, InstructionType::Debit);
        assert_eq!(parsed.amount_raw, "100");
        assert_eq!(parsed.currency, "USD");
        assert_eq!(parsed.debit_account, "A1");
        assert_eq!(parsed.credit_account, "A2");
        assert_eq!(parsed.execute_by, None);
    }

    #[test]
    fn test_parse_credit_form_swaps_sides() {
        let parsed = parse("CREDIT 50 GBP TO ACCOUNT B1 FOR DEBIT FROM ACCOUNT B2").unwrap();
        assert_eq!(parsed.instruction_type, InstructionType::Credit);
        assert_eq!(parsed.credit_account, "B1");
        assert_eq!(parsed.debit_account, "B2");
    }

    #[test]
    fn test_parse_keywords_are_case_insensitive() {
        let parsed = parse("debit 100 usd from account A1 for credit to account A2").unwrap();
        assert_eq!(parsed.instruction_type, InstructionType::Debit);
        assert_eq!(parsed.currency, "USD");
    }

    #[test]
    fn test_parse_collapses_interior_whitespace() {
        let parsed =
            parse("  DEBIT   100 USD FROM  ACCOUNT A1 FOR CREDIT TO ACCOUNT   A2  ").unwrap();
        assert_eq!(parsed.amount_raw, "100");
        assert_eq!(parsed.credit_account, "A2");
    }

    #[test]
    fn test_parse_on_clause() {
        let parsed =
            parse("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2 ON 2999-01-01").unwrap();
        assert_eq!(parsed.execute_by.as_deref(), Some("2999-01-01"));
    }

    #[test]
    fn test_parse_on_clause_without_date_is_dt01() {
        assert_eq!(
            code_of("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2 ON"),
            StatusCode::DT01
        );
    }

    #[test]
    fn test_parse_ignores_trailing_tokens_that_are_not_on() {
        let parsed =
            parse("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2 EXTRA").unwrap();
        assert_eq!(parsed.execute_by, None);
        assert_eq!(parsed.credit_account, "A2");
    }

    #[test]
    fn test_parse_unknown_verb_is_sy01() {
        assert_eq!(
            code_of("TRANSFER 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2"),
            StatusCode::SY01
        );
    }

    #[test]
    fn test_parse_misplaced_keyword_is_sy02() {
        assert_eq!(
            code_of("DEBIT 100 USD INTO ACCOUNT A1 FOR CREDIT TO ACCOUNT A2"),
            StatusCode::SY02
        );
        assert_eq!(
            code_of("CREDIT 50 GBP TO ACCOUNT B1 FOR DEBIT INTO ACCOUNT B2"),
            StatusCode::SY02
        );
    }

    #[test]
    fn test_parse_structural_failures_are_sy03() {
        assert_eq!(code_of(""), StatusCode::SY03);
        assert_eq!(code_of("   "), StatusCode::SY03);
        assert_eq!(code_of("DEBIT 100 USD"), StatusCode::SY03);
        // Ten tokens open the form but cut off before the destination.
        assert_eq!(
            code_of("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT"),
            StatusCode::SY03
        );
    }

    #[test]
    fn test_parse_is_stable_under_reparse() {
        let first = parse("DEBIT 100 USD FROM ACCOUNT A1 FOR CREDIT TO ACCOUNT A2").unwrap();
        let rebuilt = format!(
            "{} {} {} FROM ACCOUNT {} FOR CREDIT TO ACCOUNT {}",
            first.instruction_type,
            first.amount_raw,
            first.currency,
            first.debit_account,
            first.credit_account
        );
        assert_eq!(parse(&rebuilt).unwrap(), first);
    }
}
