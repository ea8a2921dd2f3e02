use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use wildcard_dns_domain::{Question, QueryType};

use crate::resolver::{Reply, Resolver};

/// ABI version this backend speaks. The server announces its version in
/// field 1 of the handshake line and the match is mandatory.
const ABI_VERSION: &str = "1";

const BANNER: &str = "wildcard-dns backend ready";

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("I/O error on pipe channel: {0}")]
    Io(#[from] io::Error),

    #[error("channel closed before handshake")]
    ChannelClosed,

    #[error("unsupported ABI version in handshake line {0:?}")]
    UnsupportedAbi(String),
}

/// Protocol engine for one pipe channel.
///
/// Owns the line framing: performs the handshake, then decodes one request
/// per line and writes the encoded reply before reading the next. Generic
/// over the channel ends so tests can drive it with in-memory buffers.
/// Per-request errors are absorbed here and answered over the channel
/// (`FAIL`, `LOG`); only handshake failure and I/O errors abort the session.
pub struct PipeSession<R, W> {
    reader: R,
    writer: W,
    resolver: Resolver,
}

impl<R: BufRead, W: Write> PipeSession<R, W> {
    pub fn new(reader: R, writer: W, resolver: Resolver) -> Self {
        Self {
            reader,
            writer,
            resolver,
        }
    }

    /// Runs the session until the input channel closes.
    pub fn run(&mut self) -> Result<(), PipeError> {
        self.handshake()?;
        while let Some(line) = self.read_line()? {
            self.handle_request(&line)?;
        }
        debug!("input channel closed");
        Ok(())
    }

    fn handshake(&mut self) -> Result<(), PipeError> {
        let line = self.read_line()?.ok_or(PipeError::ChannelClosed)?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.get(1).copied() != Some(ABI_VERSION) {
            return Err(PipeError::UnsupportedAbi(line));
        }
        self.write_fields(&["OK", BANNER])?;
        debug!("handshake complete");
        Ok(())
    }

    fn handle_request(&mut self, line: &str) -> Result<(), PipeError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 6 {
            warn!(line, "malformed request");
            return self.write_fields(&["FAIL"]);
        }

        // fields 0, 2, 4 and 5 are protocol fields the server already
        // validated; only qname and qtype matter here
        let question = Question::new(fields[1].to_lowercase(), QueryType::from(fields[3]));

        match self.resolver.resolve(&question) {
            Reply::Records(answers) => {
                for answer in &answers {
                    self.write_fields(&[
                        "DATA",
                        &answer.qname,
                        "IN",
                        answer.record_type.as_str(),
                        &answer.ttl.to_string(),
                        &answer.record_id,
                        &answer.content,
                    ])?;
                }
                self.write_fields(&["END"])
            }
            Reply::Unknown => {
                debug!(qname = %question.qname, qtype = %question.qtype, "unknown query");
                self.write_fields(&[
                    "LOG",
                    &format!(
                        "Unknown type: {}, domain: {}",
                        question.qtype, question.qname
                    ),
                ])?;
                self.write_fields(&["END"])
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, PipeError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end().to_string()))
    }

    /// One logical message: tab-separated fields, newline-terminated,
    /// flushed immediately. The server expects one synchronous reply per
    /// request, so nothing may sit in a buffer.
    fn write_fields(&mut self, fields: &[&str]) -> Result<(), PipeError> {
        let mut line = fields.join("\t");
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
