//! Per-question answer collection.
//!
//! The collector knows how to read one answer; it never learns how long the
//! user has. The orchestrator supplies the wait for each question and treats
//! deadline expiry as authoritative regardless of what the source returns.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::core::normalize::normalize;

/// What a line source produced within one bounded wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// One complete line of input, terminator already stripped.
    Line(String),
    /// The stream reached end of input or failed; no more lines will come.
    Closed,
    /// No line arrived within the wait.
    NoInput,
}

/// A line-oriented source of user answers.
pub trait AnswerSource {
    /// Wait up to `wait` for the next submitted line.
    fn recv_line(&mut self, wait: Duration) -> LineEvent;

    /// Wait indefinitely for the next submitted line. Used only before the
    /// countdown starts (the ready gate), so there is no budget to honor.
    fn recv_line_blocking(&mut self) -> LineEvent;
}

/// Stdin-backed source.
///
/// One detached reader thread feeds lines through a channel for the whole
/// session, so a blocking read never prevents the orchestrator from observing
/// deadline expiry. A read still in flight when the session finishes is
/// abandoned: its eventual line dies in the channel when the receiver drops.
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<String>,
}

impl StdinSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("input stream closed");
        });
        Self { rx }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for StdinSource {
    fn recv_line(&mut self, wait: Duration) -> LineEvent {
        match self.rx.recv_timeout(wait) {
            Ok(line) => LineEvent::Line(line),
            Err(RecvTimeoutError::Timeout) => LineEvent::NoInput,
            Err(RecvTimeoutError::Disconnected) => LineEvent::Closed,
        }
    }

    fn recv_line_blocking(&mut self) -> LineEvent {
        match self.rx.recv() {
            Ok(line) => LineEvent::Line(line),
            Err(_) => LineEvent::Closed,
        }
    }
}

/// Collector for one session's answers. At most one collect is in flight at a
/// time; the same underlying source serves every question in order.
#[derive(Debug)]
pub struct Collector<S> {
    source: S,
}

impl<S: AnswerSource> Collector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Display `prompt`, then wait up to `wait` for one answer line.
    ///
    /// A collected line is returned normalized (trimmed, case-folded), ready
    /// for comparison. Stream end or failure surfaces as [`LineEvent::Closed`]
    /// rather than an error: a single unreadable answer must not abort the
    /// session.
    pub fn collect(&mut self, prompt: &str, wait: Duration) -> LineEvent {
        println!("> {prompt} = ?");
        match self.source.recv_line(wait) {
            LineEvent::Line(raw) => LineEvent::Line(normalize(&raw)),
            other => other,
        }
    }

    /// Wait for the ready acknowledgment line, with no time bound.
    pub fn wait_for_ready(&mut self) -> LineEvent {
        self.source.recv_line_blocking()
    }
}
