//! `wowarmory status` — realm up/down status.

use std::io::Write;

use anyhow::{Context, Result};
use wowarmory::{filter_realms, ArmoryClient};

use crate::output::{self, format_realm, Output};

/// List every realm, or only the realm named `realm`.
pub async fn run<W: Write>(
    client: &ArmoryClient,
    realm: Option<&str>,
    out: &Output,
    w: &mut W,
) -> Result<()> {
    if let Some(name) = realm.filter(|_| !out.json) {
        writeln!(w, "Getting realm status for {name}.")?;
    }

    let realms = client
        .fetch_realm_status()
        .await
        .context("fetching realm status")?;

    if realm.is_none() && !out.json {
        writeln!(w, "Status of all realms:")?;
    }
    let realms = match realm {
        Some(name) => filter_realms(&realms, name),
        None => realms,
    };

    if out.json {
        return output::write_json(w, &realms);
    }

    if realms.is_empty() && realm.is_some() {
        writeln!(w, "No matching realms!")?;
    }
    for r in &realms {
        writeln!(w, "\t{}", format_realm(r, &out.styled))?;
    }
    Ok(())
}
