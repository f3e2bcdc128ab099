//! `wowarmory character` — look up one character sheet.

use std::io::Write;

use anyhow::{Context, Result};
use wowarmory::{ArmoryClient, CharacterQuery};

use crate::output::{self, Output};

/// Fetch the character and write one line about it.
///
/// Prints `<name> is a <class>`, or the full summary when `detail` is set.
pub async fn run<W: Write>(
    client: &ArmoryClient,
    query: &CharacterQuery,
    detail: bool,
    out: &Output,
    w: &mut W,
) -> Result<()> {
    let info = client
        .fetch_character(query)
        .await
        .with_context(|| format!("looking up '{}' on realm '{}'", query.name, query.realm))?;

    if out.json {
        return output::write_json(w, &info);
    }

    let line = if detail {
        info.summary()
    } else {
        info.headline()?
    };
    writeln!(w, "{line}")?;
    Ok(())
}
