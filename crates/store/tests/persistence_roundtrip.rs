use std::sync::Arc;

use proptest::prelude::*;

use standings_model::{
    default_teams, default_tournament_info, Team, TeamPatch, TextStylePatch, TournamentInfo,
    TournamentInfoPatch,
};
use standings_store::{
    rank, BackgroundWriter, FileStorage, InlineWriter, PersistenceAdapter, StorageKey,
    TournamentStore,
};

fn file_adapter(dir: &std::path::Path) -> PersistenceAdapter {
    PersistenceAdapter::new(Arc::new(FileStorage::open(dir).unwrap()))
}

fn reopen(adapter: &PersistenceAdapter) -> TournamentStore {
    TournamentStore::open(adapter, Box::new(InlineWriter::new(adapter.clone())))
}

fn roster() -> impl Strategy<Value = Vec<Team>> {
    proptest::collection::vec(
        (
            "[A-Za-z0-9 ]{0,16}",
            "[a-z:/._-]{0,24}",
            any::<u32>(),
            any::<u32>(),
            any::<u32>(),
        ),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, logo, wins, pp, kp))| Team {
                id: format!("team-{}", i + 1),
                name,
                logo,
                wins,
                pp,
                kp,
            })
            .collect()
    })
}

fn tournament_info() -> impl Strategy<Value = TournamentInfo> {
    (
        "[A-Za-z ]{0,20}",
        "[A-Za-z ]{0,20}",
        any::<bool>(),
        any::<u32>(),
        any::<u32>(),
        any::<bool>(),
        "#[0-9a-f]{6}",
        "#[0-9a-f]{6}",
    )
        .prop_map(
            |(host, second, gradient, week, day, presents, color_a, color_b)| {
                let mut info = default_tournament_info();
                info.host_name = host;
                info.host_name_second_line = second;
                info.second_line_style.gradient_enabled = gradient;
                info.second_line_style.gradient_to = color_a.clone();
                info.week_number = week;
                info.day_number = day;
                info.show_presents = presents;
                info.rank_box_color = color_a;
                info.rank_number_color = color_b;
                info
            },
        )
}

proptest! {
    #[test]
    fn roster_survives_save_and_load(teams in roster()) {
        let adapter = PersistenceAdapter::in_memory();
        adapter.save(StorageKey::Teams, &teams).unwrap();
        prop_assert_eq!(adapter.load_teams(), teams);
    }

    #[test]
    fn config_survives_save_and_load(info in tournament_info()) {
        let adapter = PersistenceAdapter::in_memory();
        adapter.save(StorageKey::TournamentInfo, &info).unwrap();
        prop_assert_eq!(adapter.load_tournament_info(), info);
    }

    #[test]
    fn ranking_is_deterministic_and_ordered(teams in roster()) {
        let first = rank(&teams);
        let second = rank(&teams);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), teams.len());

        for (index, standing) in first.iter().enumerate() {
            prop_assert_eq!(standing.rank, index + 1);
            prop_assert_eq!(standing.total, standing.team.total());
        }
        for pair in first.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
            if pair[0].total == pair[1].total {
                let pos = |id: &str| teams.iter().position(|t| t.id == id).unwrap();
                prop_assert!(pos(&pair[0].team.id) < pos(&pair[1].team.id));
            }
        }
    }
}

#[test]
fn edits_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = file_adapter(dir.path());

    {
        let mut store = reopen(&adapter);
        store.update_team("team-3", TeamPatch::default().wins(5).pp(14).kp(9));
        store.update_tournament_info(TournamentInfoPatch {
            host_name: Some("Midnight League".to_string()),
            ..Default::default()
        });
    }

    let store = TournamentStore::open_dir(dir.path()).unwrap();
    let team = store.team("team-3").unwrap();
    assert_eq!((team.wins, team.pp, team.kp), (5, 14, 9));
    assert_eq!(store.tournament_info().host_name, "Midnight League");
    assert_eq!(store.ranked_teams()[0].team.id, "team-3");
}

#[test]
fn corrupt_key_falls_back_independently() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = file_adapter(dir.path());

    {
        let mut store = reopen(&adapter);
        store.update_team("team-1", TeamPatch::default().kp(3));
        store.update_tournament_info(TournamentInfoPatch {
            week_number: Some(6),
            ..Default::default()
        });
    }

    adapter
        .storage()
        .set("tournamentInfo", "<<<corrupted>>>")
        .unwrap();

    let store = reopen(&adapter);
    assert_eq!(store.tournament_info(), &default_tournament_info());
    assert_eq!(store.team("team-1").unwrap().kp, 3);
}

#[test]
fn reset_restores_defaults_in_memory_and_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = file_adapter(dir.path());

    let mut store = reopen(&adapter);
    for id in ["team-1", "team-5", "team-12"] {
        store.update_team(id, TeamPatch::default().name("Renamed").pp(40));
    }
    store.update_tournament_info(TournamentInfoPatch {
        show_logo: Some(false),
        host_name_style: Some(TextStylePatch::default().gradient_enabled(false)),
        ..Default::default()
    });

    store.reset_to_default();
    assert_eq!(store.teams(), default_teams().as_slice());
    assert_eq!(store.tournament_info(), &default_tournament_info());

    store.reset_to_default();
    assert_eq!(store.teams(), default_teams().as_slice());

    let reloaded = reopen(&adapter);
    assert_eq!(reloaded.snapshot(), store.snapshot());
}

#[test]
fn gradient_toggle_preserves_colors_through_persistence() {
    let adapter = PersistenceAdapter::in_memory();
    let mut store = reopen(&adapter);

    store.update_tournament_info(TournamentInfoPatch {
        standings_style: Some(
            TextStylePatch::default()
                .gradient_from("#111111")
                .gradient_to("#222222"),
        ),
        ..Default::default()
    });
    store.update_tournament_info(TournamentInfoPatch {
        standings_style: Some(TextStylePatch::default().gradient_enabled(false)),
        ..Default::default()
    });

    let reloaded = reopen(&adapter);
    let style = &reloaded.tournament_info().standings_style;
    assert!(!style.gradient_enabled);
    assert_eq!(style.gradient_from, "#111111");
    assert_eq!(style.gradient_to, "#222222");
}

#[tokio::test]
async fn background_writes_land_after_flush() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = file_adapter(dir.path());
    let (writer, handle) = BackgroundWriter::spawn(adapter.clone());

    let mut store = TournamentStore::open(&adapter, Box::new(writer));
    store.update_team("team-8", TeamPatch::default().pp(21));
    store.update_team("team-8", TeamPatch::default().kp(4));
    assert_eq!(store.team("team-8").unwrap().total(), 25);

    handle.flush().await.unwrap();
    let persisted = adapter.load_teams();
    assert_eq!(persisted, store.teams());

    let stats = handle.shutdown().await.unwrap();
    assert_eq!(stats.written, 2);
}

#[tokio::test]
async fn failed_writes_are_counted_and_keep_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("storage");
    let adapter = file_adapter(&root);
    let (writer, handle) = BackgroundWriter::spawn(adapter.clone());
    let mut store = TournamentStore::open(&adapter, Box::new(writer));

    std::fs::remove_dir_all(&root).unwrap();
    assert!(store.update_team("team-2", TeamPatch::default().pp(7)));
    assert_eq!(store.team("team-2").unwrap().pp, 7);

    let stats = handle.shutdown().await.unwrap();
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.written, 0);
    assert!(adapter.storage().get("teams").unwrap().is_none());
}
