//! Overlay view: what the header, point table, and footer surfaces draw.
//!
//! Surfaces receive a [`OverlayView`] built from a store snapshot and turn it
//! into markup. All visibility rules and the solid/gradient decision for
//! styled text are made here, once, so every surface agrees.

use serde::Serialize;

use standings_model::{Standing, TextPaint, TextStyle, TournamentInfo};
use standings_store::StoreSnapshot;

/// Heading shown above the point table.
pub const STANDINGS_HEADING: &str = "OVERALL STANDINGS";

/// CSS paint for a styled text element.
///
/// A gradient is expressed as a clipped background with transparent text;
/// a solid color is just `color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssPaint {
    pub color: String,
    pub background: Option<String>,
}

impl CssPaint {
    pub fn from_style(style: &TextStyle) -> Self {
        match style.paint() {
            TextPaint::Gradient { from, to } => Self {
                color: "transparent".to_string(),
                background: Some(format!("linear-gradient(to right, {from}, {to})")),
            },
            TextPaint::Solid(color) => Self {
                color: color.to_string(),
                background: None,
            },
        }
    }

    /// Inline `style` attribute value.
    pub fn inline_style(&self) -> String {
        match &self.background {
            Some(background) => format!(
                "background: {background}; -webkit-background-clip: text; background-clip: text; color: {};",
                self.color
            ),
            None => format!("color: {};", self.color),
        }
    }
}

/// A text element and its resolved paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledText {
    pub text: String,
    pub paint: CssPaint,
}

impl StyledText {
    fn new(text: impl Into<String>, style: &TextStyle) -> Self {
        Self {
            text: text.into(),
            paint: CssPaint::from_style(style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    /// `Week N • Day M`, when enabled.
    pub week_day: Option<String>,
    pub host_name: StyledText,
    /// Only present for a non-empty second line.
    pub second_line: Option<StyledText>,
    pub show_presents: bool,
    /// Only present when the logo is enabled and a reference is set.
    pub logo_url: Option<String>,
}

impl HeaderView {
    pub fn build(info: &TournamentInfo) -> Self {
        let week_day = info
            .show_week_day
            .then(|| format!("Week {} \u{2022} Day {}", info.week_number, info.day_number));

        let second_line = (!info.host_name_second_line.is_empty())
            .then(|| StyledText::new(&info.host_name_second_line, &info.second_line_style));

        let logo_url = (info.show_logo && !info.logo_url.is_empty()).then(|| info.logo_url.clone());

        Self {
            week_day,
            host_name: StyledText::new(&info.host_name, &info.host_name_style),
            second_line,
            show_presents: info.show_presents,
            logo_url,
        }
    }
}

/// One row of the point table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub rank: usize,
    pub name: String,
    pub logo: Option<String>,
    pub wins: u32,
    pub pp: u32,
    pub kp: u32,
    pub total: u64,
}

impl From<&Standing> for TableRow {
    fn from(standing: &Standing) -> Self {
        let team = &standing.team;
        Self {
            rank: standing.rank,
            name: team.name.clone(),
            logo: (!team.logo.is_empty()).then(|| team.logo.clone()),
            wins: team.wins,
            pp: team.pp,
            kp: team.kp,
            total: standing.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointTableView {
    pub heading: StyledText,
    pub rank_box_color: String,
    pub rank_number_color: String,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialView {
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
}

/// Everything the overlay page draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayView {
    pub background_image: String,
    pub header: HeaderView,
    pub table: PointTableView,
    /// Footer handles, when enabled.
    pub social: Option<SocialView>,
}

impl OverlayView {
    pub fn build(snapshot: &StoreSnapshot) -> Self {
        let info = &snapshot.tournament_info;
        let rows = snapshot.ranked_teams().iter().map(TableRow::from).collect();

        Self {
            background_image: info.background_image.clone(),
            header: HeaderView::build(info),
            table: PointTableView {
                heading: StyledText::new(STANDINGS_HEADING, &info.standings_style),
                rank_box_color: info.rank_box_color.clone(),
                rank_number_color: info.rank_number_color.clone(),
                rows,
            },
            social: info.show_social.then(|| SocialView {
                facebook: info.facebook.clone(),
                instagram: info.instagram.clone(),
                youtube: info.youtube.clone(),
            }),
        }
    }
}
