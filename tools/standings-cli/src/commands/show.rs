//! Show standings and the roster.

use standings_store::StoreContext;

pub fn run(context: &StoreContext, json: bool) -> anyhow::Result<()> {
    let (standings, heading) = context.with(|store| {
        let info = store.tournament_info();
        let heading = format!(
            "{}: Week {} Day {}",
            info.host_name, info.week_number, info.day_number
        );
        (store.ranked_teams(), heading)
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    println!("{heading}");
    println!();
    println!(
        "  {:>4}  {:<24} {:>5} {:>6} {:>6} {:>7}",
        "RANK", "TEAM", "WINS", "PP", "KP", "TOTAL"
    );
    for standing in &standings {
        let team = &standing.team;
        println!(
            "  {:>4}  {:<24} {:>5} {:>6} {:>6} {:>7}",
            standing.rank, team.name, team.wins, team.pp, team.kp, standing.total
        );
    }

    Ok(())
}

pub fn teams(context: &StoreContext) -> anyhow::Result<()> {
    context.with(|store| {
        for team in store.teams() {
            let logo = if team.logo.is_empty() {
                "-"
            } else {
                team.logo.as_str()
            };
            println!(
                "{:<10} {:<24} wins={} pp={} kp={} logo={}",
                team.id, team.name, team.wins, team.pp, team.kp, logo
            );
        }
    });
    Ok(())
}
