//! Tournament configuration: branding, counters, social handles, and styling.

use serde::{Deserialize, Serialize};

use crate::style::{TextStyle, TextStylePatch};

/// Flat record of presentation settings for the overlay.
///
/// Missing fields take their documented defaults when deserialized, so a
/// record saved by an older build still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TournamentInfo {
    /// Primary header line.
    pub host_name: String,

    /// Optional second header line. Hidden when empty.
    pub host_name_second_line: String,

    /// Show the "PRESENTS" caption under the host name.
    pub show_presents: bool,

    pub week_number: u32,
    pub day_number: u32,

    /// Show the "Week N • Day M" counter.
    pub show_week_day: bool,

    /// Tournament logo reference.
    pub logo_url: String,

    /// Show the logo. A logo is only drawn when this is set and `logo_url`
    /// is non-empty.
    pub show_logo: bool,

    pub facebook: String,
    pub instagram: String,
    pub youtube: String,

    /// Show the social handles footer.
    pub show_social: bool,

    /// Style of the primary header line.
    pub host_name_style: TextStyle,

    /// Style of the second header line.
    pub second_line_style: TextStyle,

    /// Style of the standings heading.
    pub standings_style: TextStyle,

    /// Fill color of the rank box in the point table.
    pub rank_box_color: String,

    /// Text color of the rank number.
    pub rank_number_color: String,

    /// Background skin reference (URL or local path).
    pub background_image: String,
}

impl TournamentInfo {
    /// Shallow-merge a patch into the record. Per field, the patch value wins;
    /// absent fields are preserved. Style descriptors merge per style field.
    pub fn apply(&mut self, patch: TournamentInfoPatch) {
        let TournamentInfoPatch {
            host_name,
            host_name_second_line,
            show_presents,
            week_number,
            day_number,
            show_week_day,
            logo_url,
            show_logo,
            facebook,
            instagram,
            youtube,
            show_social,
            host_name_style,
            second_line_style,
            standings_style,
            rank_box_color,
            rank_number_color,
            background_image,
        } = patch;

        merge(&mut self.host_name, host_name);
        merge(&mut self.host_name_second_line, host_name_second_line);
        merge(&mut self.show_presents, show_presents);
        merge(&mut self.week_number, week_number);
        merge(&mut self.day_number, day_number);
        merge(&mut self.show_week_day, show_week_day);
        merge(&mut self.logo_url, logo_url);
        merge(&mut self.show_logo, show_logo);
        merge(&mut self.facebook, facebook);
        merge(&mut self.instagram, instagram);
        merge(&mut self.youtube, youtube);
        merge(&mut self.show_social, show_social);
        merge(&mut self.rank_box_color, rank_box_color);
        merge(&mut self.rank_number_color, rank_number_color);
        merge(&mut self.background_image, background_image);

        if let Some(style) = host_name_style {
            self.host_name_style.apply(style);
        }
        if let Some(style) = second_line_style {
            self.second_line_style.apply(style);
        }
        if let Some(style) = standings_style {
            self.standings_style.apply(style);
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Partial update for [`TournamentInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TournamentInfoPatch {
    pub host_name: Option<String>,
    pub host_name_second_line: Option<String>,
    pub show_presents: Option<bool>,
    pub week_number: Option<u32>,
    pub day_number: Option<u32>,
    pub show_week_day: Option<bool>,
    pub logo_url: Option<String>,
    pub show_logo: Option<bool>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub show_social: Option<bool>,
    pub host_name_style: Option<TextStylePatch>,
    pub second_line_style: Option<TextStylePatch>,
    pub standings_style: Option<TextStylePatch>,
    pub rank_box_color: Option<String>,
    pub rank_number_color: Option<String>,
    pub background_image: Option<String>,
}

impl TournamentInfoPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
