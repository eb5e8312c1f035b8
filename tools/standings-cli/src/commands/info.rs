//! Show tournament configuration and the overlay view.

use standings_model::{TextPaint, TextStyle};
use standings_render::OverlayView;
use standings_store::StoreContext;

pub fn run(context: &StoreContext, json: bool) -> anyhow::Result<()> {
    let info = context.with(|store| store.tournament_info().clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Header:");
    println!("  Host name: {} [{}]", info.host_name, describe(&info.host_name_style));
    if !info.host_name_second_line.is_empty() {
        println!(
            "  Second line: {} [{}]",
            info.host_name_second_line,
            describe(&info.second_line_style)
        );
    }
    println!("  Presents: {}", on_off(info.show_presents));
    println!(
        "  Week {} / Day {} ({})",
        info.week_number,
        info.day_number,
        on_off(info.show_week_day)
    );
    let logo = if info.logo_url.is_empty() {
        "(none)"
    } else {
        info.logo_url.as_str()
    };
    println!("  Logo: {} ({})", logo, on_off(info.show_logo));
    println!();

    println!("Point table:");
    println!("  Heading: [{}]", describe(&info.standings_style));
    println!("  Rank box: {}", info.rank_box_color);
    println!("  Rank number: {}", info.rank_number_color);
    println!();

    println!("Social ({}):", on_off(info.show_social));
    println!("  Facebook: {}", info.facebook);
    println!("  Instagram: {}", info.instagram);
    println!("  YouTube: {}", info.youtube);
    println!();

    println!("Background: {}", info.background_image);

    Ok(())
}

pub fn view(context: &StoreContext) -> anyhow::Result<()> {
    let view = context.with(|store| OverlayView::build(&store.snapshot()));
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn describe(style: &TextStyle) -> String {
    match style.paint() {
        TextPaint::Gradient { from, to } => format!("gradient {from} -> {to}"),
        TextPaint::Solid(color) => format!("solid {color}"),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "shown"
    } else {
        "hidden"
    }
}
