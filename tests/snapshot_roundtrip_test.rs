// Export -> reset -> import reproduces settings, profile and history
// field-for-field.

use buddy::app::App;
use buddy::models::{AppView, GenerationParams, RecordKind, SynopsisMode, Theme};
use buddy::storage::{export_snapshot, import_snapshot, SNAPSHOT_FILE_NAME};
use buddy::stores::{ProfilePatch, SettingsPatch};

fn populated_app() -> App {
    let mut app = App::new(None);
    app.settings.update(SettingsPatch {
        theme: Some(Theme::Glass),
        slide_enabled: Some(false),
        bouncing_animation: Some(false),
        experimental_features: Some(true),
        ..Default::default()
    });
    app.settings.update(SettingsPatch {
        enable_neon: Some(true),
        ..Default::default()
    });
    app.profile.update(ProfilePatch {
        name: Some("Alex Rivera".to_string()),
        avatar_url: Some("data:image/png;base64,aGVsbG8=".to_string()),
        is_logged_in: Some(false),
    });
    app.history.add(
        RecordKind::Synopsis,
        "A quiet story about a street food tour.".to_string(),
        GenerationParams {
            mode: Some(SynopsisMode::Suspense),
            word_count: Some(450),
            title: Some("Kyoto Nights".to_string()),
            model_id: "gemini-3-pro-preview".to_string(),
            ..Default::default()
        },
    );
    let id = app.history.add(
        RecordKind::Hashtags,
        "#kyoto #streetfood #travel".to_string(),
        GenerationParams {
            amount: Some(25),
            description: Some("Kyoto street food".to_string()),
            model_id: "gemini-2.5-flash".to_string(),
            ..Default::default()
        },
    );
    app.history.toggle_favorite(&id);
    app
}

#[test]
fn test_export_reset_import_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE_NAME);

    let mut app = populated_app();
    let before = app.snapshot();
    export_snapshot(&before, &path).unwrap();

    app.set_view(AppView::Studio);
    app.reset_all();

    // Reset really did wipe everything and return home.
    assert!(app.history.is_empty());
    assert_eq!(app.settings.get().theme, Theme::Light);
    assert_eq!(app.profile.get().name, "Creator");
    assert_eq!(app.nav.current(), AppView::Home);

    let restored = import_snapshot(&path).unwrap();
    app.apply_snapshot(restored);

    let after = app.snapshot();
    assert_eq!(after.settings, before.settings);
    assert_eq!(after.user, before.user);
    assert_eq!(after.history, before.history);
}

#[test]
fn test_snapshot_json_shape_matches_legacy_document() {
    let app = populated_app();
    let value = serde_json::to_value(app.snapshot()).unwrap();

    assert_eq!(value["settings"]["theme"], "GLASS");
    assert_eq!(value["settings"]["enableNeon"], true);
    assert_eq!(value["user"]["name"], "Alex Rivera");
    assert_eq!(value["user"]["isLoggedIn"], false);
    assert_eq!(value["history"][0]["type"], "hashtags");
    assert_eq!(value["history"][0]["isFavorite"], true);
    assert_eq!(value["history"][0]["params"]["amount"], 25);
    assert_eq!(value["history"][1]["params"]["mode"], "Suspense");
}

#[test]
fn test_imported_settings_pass_through_correction() {
    // A hand-edited document cannot smuggle an invariant violation in.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.json");

    let mut app = populated_app();
    let mut snapshot = app.snapshot();
    snapshot.settings.experimental_features = false;
    snapshot.settings.enable_3d_mode = true;
    snapshot.settings.theme = Theme::Retro3d;
    export_snapshot(&snapshot, &path).unwrap();

    app.apply_snapshot(import_snapshot(&path).unwrap());

    assert!(!app.settings.get().enable_3d_mode);
    assert_eq!(app.settings.get().theme, Theme::Light);
}
