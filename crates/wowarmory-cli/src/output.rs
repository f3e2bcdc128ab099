//! Terminal styling and JSON output.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use wowarmory::Realm;

const RESET: &str = "\x1b[0m";
const WHITE: &str = "\x1b[37m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// ANSI color helper. Colors are opt-in through `CLICOLOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styled {
    enabled: bool,
}

impl Styled {
    /// Enabled when `CLICOLOR` is set and `--no-color` was not given.
    pub fn from_env(no_color: bool) -> Self {
        Self {
            enabled: !no_color && std::env::var_os("CLICOLOR").is_some(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn white(&self, text: &str) -> String {
        self.paint(text, WHITE)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, RED)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, YELLOW)
    }
}

/// How command results are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub styled: Styled,
}

impl Output {
    pub fn text(styled: Styled) -> Self {
        Self {
            json: false,
            styled,
        }
    }

    pub fn json() -> Self {
        Self {
            json: true,
            styled: Styled::plain(),
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Exit status for any failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Render a failed command and return the exit status.
///
/// Text mode writes `Error: <cause chain>` to `stderr`; JSON mode writes an
/// `{"error": true, "message": ...}` object to `stdout`.
pub fn report_error<O: Write, E: Write>(
    out: &Output,
    err: &anyhow::Error,
    stdout: &mut O,
    stderr: &mut E,
) -> i32 {
    let message = format!("{err:#}");
    // Nothing sensible is left to do if the report itself cannot be written.
    let _ = if out.json {
        write_json(
            stdout,
            &serde_json::json!({
                "error": true,
                "message": message,
            }),
        )
    } else {
        writeln!(stderr, "Error: {message}").map_err(Into::into)
    };
    EXIT_FAILURE
}

/// `Hellfire................(en) Normal is UP NoQueue`
pub fn format_realm(realm: &Realm, s: &Styled) -> String {
    let status = if realm.up { s.green("UP") } else { s.red("DOWN") };
    let queue = if realm.queue {
        s.yellow("Queue")
    } else {
        "NoQueue".to_string()
    };
    format!(
        "{}({}) {:<6} is {} {}",
        s.white(&format!("{:.<24}", realm.name)),
        realm.language,
        realm.kind,
        status,
        queue
    )
}
