use crate::domain::request::TransferRequest;
use crate::error::Result;
use std::io::Read;

/// Reads a transfer request from a JSON source.
///
/// Shape errors (missing fields, wrong types) surface here as `PaymentError`,
/// standing in for the schema validation the upstream service performs
/// before the engine ever runs.
pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    /// Creates a reader over any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read(self) -> Result<TransferRequest> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
