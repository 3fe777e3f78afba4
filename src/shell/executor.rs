use crate::core::commands::Outcome;
use crate::core::line::splitter::{self, Connector};
use crate::core::line::tokenizer;
use crate::error::ShellError;

/// What processing a full input line produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading input.
    Continue,
    /// The `exit` builtin ran; shut down with this code.
    Exit(i32),
}

pub(crate) trait LineRunner {
    fn run_line(&mut self, line: &str) -> Result<LineOutcome, ShellError>;
}

impl LineRunner for super::Shell {
    /// The fixed per-line pipeline: strip comment, split on `;`/`&&`/`||`,
    /// then per segment substitute the first word's alias, tokenize, and
    /// dispatch. Each segment's status feeds the next connector decision.
    fn run_line(&mut self, line: &str) -> Result<LineOutcome, ShellError> {
        let stripped = tokenizer::strip_comment(line);

        // The connector joining the upcoming segment to the last one that
        // actually ran. Empty segments are inert: they neither run nor
        // re-gate what follows.
        let mut gate = Connector::Seq;

        for segment in splitter::split(stripped) {
            let args = self.expand_segment(segment.text);
            if args.is_empty() {
                continue;
            }

            match gate {
                Connector::Seq => {}
                Connector::And if self.state.last_status == 0 => {}
                Connector::Or if self.state.last_status != 0 => {}
                // Condition failed: the remainder of the line is abandoned.
                _ => return Ok(LineOutcome::Continue),
            }

            match self.executor.execute(&args, &mut self.state) {
                Ok(Outcome::Status(status)) => self.state.last_status = status,
                Ok(Outcome::Exit(code)) => return Ok(LineOutcome::Exit(code)),
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    eprintln!("{}", self.style.error(&format!("venule: {}", e)));
                    self.state.last_status = e.status();
                }
            }

            gate = segment.connector;
        }

        Ok(LineOutcome::Continue)
    }
}

impl super::Shell {
    /// Tokenizes one segment, substituting the first word's alias value
    /// (a single pass, no recursive expansion).
    fn expand_segment(&self, text: &str) -> Vec<String> {
        let words = tokenizer::tokenize(text);

        if let Some(first) = words.first() {
            if let Some(value) = self.state.aliases.resolve(first) {
                let mut args: Vec<String> =
                    tokenizer::tokenize(&value).iter().map(|w| w.to_string()).collect();
                args.extend(words[1..].iter().map(|w| w.to_string()));
                return args;
            }
        }

        words.iter().map(|w| w.to_string()).collect()
    }
}
