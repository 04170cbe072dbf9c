//! Line-oriented console for the contact book.
//!
//! Reads one command per line, hands it to the session and prints the
//! result. The loop ends on an exit command, end of input, or when the
//! shutdown future resolves (termination signal).

pub mod dispatcher;

pub use dispatcher::{dispatch, is_exit_command, Command, EXIT_COMMANDS};

use crate::session::Session;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "console bot >>> ";
pub const FAREWELL: &str = "Good bye!";
pub const EMPTY_INPUT: &str = "No command was entered. Try again";
pub const SHUTDOWN_NOTICE: &str = "Termination signal received. Shutting down...";

/// Why the console loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed one of the exit commands
    Command,
    /// Input was closed
    EndOfInput,
    /// The shutdown future resolved
    Signal,
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print this and keep reading
    Reply(String),
    /// Stop the session
    Exit,
}

/// Handle one raw input line.
///
/// Tokenizes on whitespace and lowercases the command token; arguments are
/// passed through unchanged. Errors are rendered into the reply.
pub fn handle_line(session: &mut Session, line: &str) -> LineOutcome {
    if is_exit_command(line) {
        return LineOutcome::Exit;
    }

    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return LineOutcome::Reply(EMPTY_INPUT.to_string());
    };
    let command = command.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    match session.dispatch(&command, &args) {
        Ok(message) => LineOutcome::Reply(message),
        Err(e) => {
            tracing::debug!(command = %command, error = %e, "Command failed");
            LineOutcome::Reply(format!("error: {}", e))
        }
    }
}

/// Run the read-dispatch-print loop until exit, end of input or `shutdown`.
pub async fn run_console<R, W, F>(
    session: &mut Session,
    input: R,
    mut output: W,
    shutdown: F,
) -> std::io::Result<ExitReason>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    write_line(&mut output, GREETING).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let line = tokio::select! {
            _ = &mut shutdown => {
                write_line(&mut output, &format!("\n{}", SHUTDOWN_NOTICE)).await?;
                return Ok(ExitReason::Signal);
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            write_line(&mut output, &format!("\n{}", FAREWELL)).await?;
            return Ok(ExitReason::EndOfInput);
        };

        match handle_line(session, &line) {
            LineOutcome::Reply(message) => write_line(&mut output, &message).await?,
            LineOutcome::Exit => {
                write_line(&mut output, FAREWELL).await?;
                return Ok(ExitReason::Command);
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
