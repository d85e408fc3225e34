use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;

use fltk::app::Sender;

use crate::app::domain::{CoreInbound, CoreOutbound, Message};
use crate::app::infrastructure::error::{AppError, Result};

/// The shell's outbound half of the link to the application core.
///
/// Delivery is fire-and-forget. An unreachable core is not reported to the
/// caller; the transport posts `Message::CoreFailed` instead.
pub trait CorePort {
    fn send(&self, message: CoreInbound);
}

/// Application core running as a child process speaking JSON lines over stdio.
pub struct ProcessCore {
    child: RefCell<Child>,
    stdin: RefCell<ChildStdin>,
    sender: Sender<Message>,
}

impl ProcessCore {
    pub fn spawn(command: &[String], sender: Sender<Message>) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| AppError::CoreUnavailable("no core command configured".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| AppError::CoreUnavailable(format!("failed to start {}: {}", program, e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::CoreUnavailable("core stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::CoreUnavailable("core stdout not captured".to_string()))?;

        tracing::info!(program = %program, pid = child.id(), "application core started");

        thread::spawn(move || {
            pump_lines(BufReader::new(stdout), |msg| sender.send(msg));
        });

        Ok(Self {
            child: RefCell::new(child),
            stdin: RefCell::new(stdin),
            sender,
        })
    }
}

impl CorePort for ProcessCore {
    fn send(&self, message: CoreInbound) {
        let line = match message.to_line() {
            Ok(line) => line,
            Err(e) => {
                self.sender.send(Message::CoreFailed(e.into()));
                return;
            }
        };
        tracing::trace!(line = line.trim_end(), "to core");
        let mut stdin = self.stdin.borrow_mut();
        if let Err(e) = stdin.write_all(line.as_bytes()).and_then(|_| stdin.flush()) {
            self.sender.send(Message::CoreFailed(AppError::CoreUnavailable(format!(
                "write to core failed: {}",
                e
            ))));
        }
    }
}

impl Drop for ProcessCore {
    fn drop(&mut self) {
        let mut child = self.child.borrow_mut();
        if let Err(e) = child.kill() {
            tracing::debug!("core already exited: {}", e);
        }
        if let Err(e) = child.wait() {
            tracing::debug!("failed to reap core: {}", e);
        }
    }
}

/// Turn core output lines into messages until the stream ends or breaks the
/// protocol. The last delivered message is always `Message::CoreFailed`.
pub fn pump_lines<R: BufRead>(reader: R, mut deliver: impl FnMut(Message)) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                deliver(Message::CoreFailed(AppError::CoreUnavailable(format!(
                    "read from core failed: {}",
                    e
                ))));
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match CoreOutbound::from_line(&line) {
            Ok(msg) => deliver(Message::Core(msg)),
            Err(e) => {
                deliver(Message::CoreFailed(AppError::Protocol(format!("{} in {:?}", e, line))));
                return;
            }
        }
    }
    deliver(Message::CoreFailed(AppError::CoreUnavailable(
        "application core closed its output".to_string(),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pump(input: &str) -> Vec<Message> {
        let mut out = Vec::new();
        pump_lines(Cursor::new(input.to_string()), |msg| out.push(msg));
        out
    }

    #[test]
    fn test_pump_delivers_messages_in_order() {
        let input = concat!(
            "{\"port\":\"updateWindowTitle\",\"data\":\"*talk.md\"}\n",
            "\n",
            "{\"port\":\"openFileDialog\"}\n",
        );
        let out = pump(input);
        assert_eq!(out.len(), 3);
        assert!(matches!(&out[0], Message::Core(CoreOutbound::UpdateWindowTitle(t)) if t == "*talk.md"));
        assert!(matches!(&out[1], Message::Core(CoreOutbound::OpenFileDialog)));
        assert!(matches!(&out[2], Message::CoreFailed(AppError::CoreUnavailable(_))));
    }

    #[test]
    fn test_pump_accepts_file_name_update() {
        let out = pump("{\"port\":\"updateFileName\",\"data\":\"/tmp/a.md\"}\n");
        assert_eq!(out.len(), 2);
        assert!(matches!(&out[0], Message::Core(CoreOutbound::UpdateFileName(p)) if p == "/tmp/a.md"));
        assert!(matches!(&out[1], Message::CoreFailed(AppError::CoreUnavailable(_))));
    }

    #[test]
    fn test_pump_stops_at_protocol_violation() {
        let input = concat!(
            "{\"port\":\"selectedSlideInfo\",\"data\":{\"mode\":\"sideways\"}}\n",
            "{\"port\":\"openFileDialog\"}\n",
        );
        let out = pump(input);
        assert_eq!(out.len(), 1);
        match &out[0] {
            Message::CoreFailed(err) => {
                assert!(matches!(err, AppError::Protocol(_)));
                assert!(err.is_fatal());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_spawn_missing_program_is_unavailable() {
        let (sender, _receiver) = fltk::app::channel::<Message>();
        let result = ProcessCore::spawn(&["/nonexistent/deckset-core".to_string()], sender);
        assert!(matches!(result, Err(AppError::CoreUnavailable(_))));

        let result = ProcessCore::spawn(&[], sender);
        assert!(matches!(result, Err(AppError::CoreUnavailable(_))));
    }
}
