//! Canonical first-run values, also used as the reset target.
//!
//! These are pure: no I/O and no randomness, so callers can compare against
//! them with `==`.

use crate::style::TextStyle;
use crate::team::Team;
use crate::tournament::TournamentInfo;

/// Number of teams on a freshly created roster.
pub const DEFAULT_TEAM_COUNT: usize = 12;

/// Default gradient start color for styled text.
pub const DEFAULT_GRADIENT_FROM: &str = "#00a8ff";

/// Default gradient end color for styled text.
pub const DEFAULT_GRADIENT_TO: &str = "#ff3778";

/// Default background skin.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "https://files.catbox.moe/yt2t9h.png";

/// `Team 1`..`Team 12` with ids `team-1`..`team-12`, zeroed counters, no logo.
pub fn default_teams() -> Vec<Team> {
    (1..=DEFAULT_TEAM_COUNT)
        .map(|n| Team::new(format!("team-{n}"), format!("Team {n}")))
        .collect()
}

/// The default tournament configuration.
pub fn default_tournament_info() -> TournamentInfo {
    TournamentInfo {
        host_name: "Esports Host".to_string(),
        host_name_second_line: String::new(),
        show_presents: true,
        week_number: 1,
        day_number: 1,
        show_week_day: true,
        logo_url: String::new(),
        show_logo: true,
        facebook: "esports.tournament".to_string(),
        instagram: "esports.tournament".to_string(),
        youtube: "@esportstournament".to_string(),
        show_social: true,
        host_name_style: default_text_style(),
        second_line_style: default_text_style(),
        standings_style: default_text_style(),
        rank_box_color: "#4299e1".to_string(),
        rank_number_color: "#ffffff".to_string(),
        background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
    }
}

fn default_text_style() -> TextStyle {
    TextStyle::gradient(DEFAULT_GRADIENT_FROM, DEFAULT_GRADIENT_TO)
}

impl Default for TournamentInfo {
    fn default() -> Self {
        default_tournament_info()
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        default_text_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_roster_shape() {
        let teams = default_teams();
        assert_eq!(teams.len(), 12);
        assert_eq!(teams[0].id, "team-1");
        assert_eq!(teams[0].name, "Team 1");
        assert_eq!(teams[11].id, "team-12");
        assert_eq!(teams[11].name, "Team 12");

        for team in &teams {
            assert!(team.logo.is_empty());
            assert_eq!((team.wins, team.pp, team.kp), (0, 0, 0));
        }

        let ids: HashSet<_> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), teams.len());
    }

    #[test]
    fn test_defaults_are_deterministic() {
        assert_eq!(default_teams(), default_teams());
        assert_eq!(default_tournament_info(), default_tournament_info());
        assert_eq!(TournamentInfo::default(), default_tournament_info());
    }

    #[test]
    fn test_default_styles_use_enabled_gradient() {
        let info = default_tournament_info();
        for style in [
            &info.host_name_style,
            &info.second_line_style,
            &info.standings_style,
        ] {
            assert!(style.gradient_enabled);
            assert_eq!(style.solid_color, "#00a8ff");
            assert_eq!(style.gradient_from, "#00a8ff");
            assert_eq!(style.gradient_to, "#ff3778");
        }
        assert_eq!(info.rank_box_color, "#4299e1");
        assert_eq!(info.rank_number_color, "#ffffff");
        assert_eq!(info.background_image, DEFAULT_BACKGROUND_IMAGE);
    }
}
