//! Ranking engine.

use standings_model::{Standing, Team};

/// Rank a roster by `pp + kp`, highest first.
///
/// The sort is stable: teams with equal totals keep their input order, and
/// no other field (wins included) breaks the tie. Ranks are 1-based and
/// unique. The input is left untouched.
pub fn rank(teams: &[Team]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|team| Standing {
            total: team.total(),
            team: team.clone(),
            rank: 0,
        })
        .collect();

    standings.sort_by(|a, b| b.total.cmp(&a.total));

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }

    standings
}
