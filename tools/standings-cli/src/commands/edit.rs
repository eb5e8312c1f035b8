//! Edit teams and configuration.

use anyhow::Context;

use standings_model::{TeamPatch, TournamentInfoPatch};
use standings_store::StoreContext;

pub fn set_team(
    context: &StoreContext,
    id: String,
    name: Option<String>,
    logo: Option<String>,
    wins: Option<u32>,
    pp: Option<u32>,
    kp: Option<u32>,
) -> anyhow::Result<()> {
    let patch = TeamPatch {
        name,
        logo,
        wins,
        pp,
        kp,
    };
    if patch.is_empty() {
        anyhow::bail!("Nothing to change: pass at least one of --name, --logo, --wins, --pp, --kp");
    }

    let updated = context.with_mut(|store| {
        store
            .update_team(&id, patch)
            .then(|| store.team(&id).cloned())
            .flatten()
    });

    match updated {
        Some(team) => {
            println!(
                "Updated {}: {} (wins {}, pp {}, kp {}, total {})",
                team.id,
                team.name,
                team.wins,
                team.pp,
                team.kp,
                team.total()
            );
            Ok(())
        }
        None => anyhow::bail!("No team with id '{id}'"),
    }
}

pub fn set_info(context: &StoreContext, raw_patch: &str) -> anyhow::Result<()> {
    let patch: TournamentInfoPatch =
        serde_json::from_str(raw_patch).context("Invalid configuration patch")?;
    if patch.is_empty() {
        anyhow::bail!("Patch does not change any field");
    }

    context.with_mut(|store| store.update_tournament_info(patch));
    println!("Tournament configuration updated.");
    Ok(())
}

pub fn reset(context: &StoreContext) -> anyhow::Result<()> {
    context.with_mut(|store| store.reset_to_default());
    println!("Teams and configuration restored to defaults.");
    Ok(())
}
