use crate::domain::response::Response;
use crate::error::Result;
use std::io::Write;

/// Writes a response as JSON, compact by default.
pub struct ResponseWriter<W: Write> {
    sink: W,
    pretty: bool,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            pretty: false,
        }
    }

    pub fn pretty(sink: W) -> Self {
        Self { sink, pretty: true }
    }

    pub fn write(mut self, response: &Response) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.sink, response)?;
        } else {
            serde_json::to_writer(&mut self.sink, response)?;
        }
        writeln!(self.sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::ResponseStatus;
    use crate::error::StatusCode;

    fn response() -> Response {
        Response {
            instruction_type: None,
            amount: None,
            currency: None,
            debit_account: None,
            credit_account: None,
            execute_by: None,
            status: ResponseStatus::Failed,
            status_reason: "Malformed instruction: empty".to_string(),
            status_code: StatusCode::SY03,
            accounts: Vec::new(),
        }
    }

    #[test]
    fn test_writer_emits_terminated_json_line() {
        let mut out = Vec::new();
        ResponseWriter::new(&mut out).write(&response()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status_code"], "SY03");
    }

    #[test]
    fn test_pretty_writer_indents() {
        let mut out = Vec::new();
        ResponseWriter::pretty(&mut out).write(&response()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"status\""));
    }
}
