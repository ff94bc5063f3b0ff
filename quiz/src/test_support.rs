//! Test-only doubles for driving sessions without a terminal or wall clock.

use std::collections::VecDeque;
use std::time::Duration;

use crate::collect::{AnswerSource, LineEvent};
use crate::deadline::ManualExpiry;

/// One scripted input event for [`ScriptedAnswers`].
#[derive(Debug, Clone)]
pub enum ScriptedEvent {
    /// The user submits this line.
    Line(String),
    /// The input stream closes.
    Close,
    /// The session deadline fires while the read is still blocked; no line is
    /// produced for this wait.
    Expire,
    /// The user sits idle this long before the wait gives up. For use with a
    /// real timer and a delay past the budget.
    Sleep(Duration),
}

/// Scripted line submission.
pub fn line(text: &str) -> ScriptedEvent {
    ScriptedEvent::Line(text.to_string())
}

/// The ready-gate acknowledgment (a bare enter).
pub fn ack() -> ScriptedEvent {
    ScriptedEvent::Line(String::new())
}

/// Deterministic [`AnswerSource`] driven by a scripted event list.
///
/// An exhausted script behaves like a closed stream. `Expire` events fire the
/// paired [`ManualExpiry`] before reporting that no line arrived, modeling a
/// blocking read that outlives the budget.
#[derive(Debug)]
pub struct ScriptedAnswers {
    events: VecDeque<ScriptedEvent>,
    expiry: Option<ManualExpiry>,
}

impl ScriptedAnswers {
    pub fn new(events: Vec<ScriptedEvent>) -> Self {
        Self {
            events: events.into(),
            expiry: None,
        }
    }

    /// Pair the script with the manual deadline its `Expire` events drive.
    pub fn with_expiry(mut self, expiry: ManualExpiry) -> Self {
        self.expiry = Some(expiry);
        self
    }
}

impl AnswerSource for ScriptedAnswers {
    fn recv_line(&mut self, _wait: Duration) -> LineEvent {
        match self.events.pop_front() {
            Some(ScriptedEvent::Line(text)) => LineEvent::Line(text),
            Some(ScriptedEvent::Close) | None => LineEvent::Closed,
            Some(ScriptedEvent::Expire) => {
                if let Some(expiry) = &self.expiry {
                    expiry.fire();
                }
                LineEvent::NoInput
            }
            Some(ScriptedEvent::Sleep(idle)) => {
                std::thread::sleep(idle);
                LineEvent::NoInput
            }
        }
    }

    fn recv_line_blocking(&mut self) -> LineEvent {
        match self.events.pop_front() {
            Some(ScriptedEvent::Line(text)) => LineEvent::Line(text),
            _ => LineEvent::Closed,
        }
    }
}
