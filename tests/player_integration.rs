// SPDX-License-Identifier: MPL-2.0
//! End-to-end player scenarios over the simulated media element.

use folio::config::{self, Config, PlayerConfig};
use folio::domain::video::PlayerStatus;
use folio::ui::skins::{self, MountedSkin, SkinKind};
use folio::video_player::seek_bar::{self, SeekBar, TrackBounds};
use folio::video_player::{
    pump_events, simulated_player, CaptionTrack, Key, KeyEvent, KeyboardRouter, KeyboardScope,
    ListenerRegistry, ManualScheduler, PlayerControls, PlayerProvider, PlayerSettings,
    SimulatedPlayer, TokioScheduler,
};
use std::time::Duration;
use tempfile::tempdir;

fn player(duration: f64) -> SimulatedPlayer<ManualScheduler> {
    simulated_player(duration, ManualScheduler::new(), PlayerSettings::default())
}

fn elapse(player: &mut SimulatedPlayer<ManualScheduler>, by: Duration) {
    for id in player.scheduler_mut().advance(by) {
        player.on_timer(id);
    }
}

#[test]
fn seek_then_read_current_time() {
    let mut player = player(300.0);
    for target in [0.0, 12.5, 150.0, 299.999, 300.0] {
        player.seek(target);
        pump_events(&mut player);
        assert_eq!(player.state().current_time(), target);
        assert_eq!(player.state().status(), PlayerStatus::Idle);
    }
    for (target, clamped) in [(-1.0, 0.0), (-1e9, 0.0), (300.5, 300.0), (f64::INFINITY, 300.0)] {
        player.seek(target);
        pump_events(&mut player);
        assert_eq!(player.state().current_time(), clamped);
    }
}

#[test]
fn playback_runs_to_end_and_restarts() {
    let mut player = player(20.0);
    player.toggle();
    pump_events(&mut player);

    player.media_mut().advance(5.0);
    pump_events(&mut player);
    assert_eq!(player.state().current_time(), 5.0);

    player.media_mut().advance(30.0);
    pump_events(&mut player);
    assert_eq!(player.state().status(), PlayerStatus::Ended);
    assert!(!player.state().is_idle());

    player.toggle();
    pump_events(&mut player);
    assert_eq!(player.state().status(), PlayerStatus::Playing);
    assert_eq!(player.state().current_time(), 0.0);
}

#[test]
fn idle_invariant_holds_across_statuses() {
    let mut player = player(60.0);
    player.toggle();
    pump_events(&mut player);
    elapse(&mut player, Duration::from_secs(4));
    assert!(player.state().is_idle());

    player.media_mut().stall();
    pump_events(&mut player);
    assert_eq!(player.state().status(), PlayerStatus::Waiting);
    assert!(!player.state().is_idle());

    player.media_mut().recover();
    pump_events(&mut player);
    assert_eq!(player.state().status(), PlayerStatus::Playing);
}

#[test]
fn keyboard_drag_and_drop_leave_no_listeners() {
    let registry = ListenerRegistry::new();
    let mut player = player(100.0);
    let router = KeyboardRouter::new(
        registry.clone(),
        KeyboardScope::Global,
        Default::default(),
        Default::default(),
    );
    let mut bar = SeekBar::new(registry.clone());
    bar.handle(
        seek_bar::Message::BoundsChanged(TrackBounds::new(0.0, 0.0, 1_000.0, 10.0)),
        100.0,
    );

    if let seek_bar::Effect::Seek(time) =
        bar.handle(seek_bar::Message::PointerPressed { x: 250.0, y: 5.0 }, 100.0)
    {
        player.seek(time);
    }
    if let seek_bar::Effect::Seek(time) =
        bar.handle(seek_bar::Message::PointerMoved { x: 400.0, y: 80.0 }, 100.0)
    {
        player.seek(time);
    }
    pump_events(&mut player);
    assert_eq!(player.state().current_time(), 40.0);
    assert_eq!(registry.total(), 3);

    bar.handle(seek_bar::Message::PointerReleased { x: 400.0, y: 80.0 }, 100.0);
    assert_eq!(registry.total(), 1);

    let outcome = router.dispatch(&KeyEvent::outside(Key::ArrowRight), &mut player);
    assert!(outcome.prevent_default());
    pump_events(&mut player);
    assert_eq!(player.state().current_time(), 45.0);

    drop(router);
    drop(bar);
    drop(player);
    assert_eq!(registry.total(), 0);
}

#[test]
fn captions_cycle_through_skin_messages() {
    let mut player = player(100.0);
    player.load(vec![
        CaptionTrack::new("en", "English", "en"),
        CaptionTrack::new("de", "Deutsch", "de"),
    ]);
    let mut skin = MountedSkin::new(SkinKind::Modern, ListenerRegistry::new());
    let mut provider = PlayerProvider::new(&mut player);

    let mut seen = Vec::new();
    for _ in 0..3 {
        skin.update(&mut provider, skins::Message::CycleCaptions)
            .expect("player mounted");
        let player = provider.use_player("test");
        seen.push(player.state().active_caption_track_id().map(str::to_string));
    }
    assert_eq!(
        seen,
        vec![Some("en".to_string()), Some("de".to_string()), None]
    );
}

#[test]
fn settings_from_config_file_drive_the_player() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let written = Config {
        player: PlayerConfig {
            idle_timeout_ms: Some(1_000),
            volume: Some(0.5),
            keyboard_scope: Some(KeyboardScope::None),
            ..PlayerConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&written, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to read config");
    let settings = loaded.player.settings();

    let mut player = simulated_player(60.0, ManualScheduler::new(), settings);
    assert_eq!(player.state().volume().value(), 0.5);
    assert_eq!(player.media().volume(), 0.5);

    player.toggle();
    pump_events(&mut player);
    elapse(&mut player, Duration::from_millis(1_000));
    assert!(player.state().is_idle());

    let router = KeyboardRouter::new(
        ListenerRegistry::new(),
        settings.keyboard_scope,
        settings.seek_step,
        settings.volume_step,
    );
    assert!(!router
        .dispatch(&KeyEvent::in_player(Key::Space), &mut player)
        .prevent_default());
}

#[tokio::test(start_paused = true)]
async fn tokio_scheduler_hides_controls() {
    let (scheduler, mut fired) = TokioScheduler::new();
    let mut player = simulated_player(60.0, scheduler, PlayerSettings::default());
    player.toggle();
    pump_events(&mut player);

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    while let Ok(id) = fired.try_recv() {
        player.on_timer(id);
    }
    assert!(player.state().is_idle());

    player.activity();
    assert!(!player.state().is_idle());
}
