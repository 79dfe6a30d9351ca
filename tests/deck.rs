use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use folio::app::App;
use folio::config::DeckSettings;
use folio::definitions::{ControlKind, SlideId};
use folio::direction::{FlowDirection, layout_policy};
use folio::i18n::{Language, Translations};
use folio::ui::render;

fn deck(language: Language) -> App {
    let settings = DeckSettings {
        default_language: language,
        transition_ms: 0,
        ..DeckSettings::default()
    };
    App::new(settings, Translations::builtin().unwrap())
}

fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn hebrew_walkthrough_then_switch_to_english() {
    let mut app = deck(Language::He);
    assert_eq!(app.active_slide(), SlideId::Intro);
    assert_eq!(app.policy().direction, FlowDirection::Rtl);

    for _ in 0..5 {
        assert!(app.step_forward());
    }
    assert_eq!(app.active_slide(), SlideId::Workflows);
    assert!(!app.step_forward());
    assert_eq!(app.active_slide(), SlideId::Workflows);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.active_language(), Language::En);
    assert_eq!(app.active_slide(), SlideId::Workflows);
    assert_eq!(app.policy(), layout_policy(Language::En));
}

#[test]
fn english_sidebar_click_after_render() {
    let mut app = deck(Language::En);
    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.active_slide(), SlideId::Tech);

    draw(&mut app);
    let entry = app
        .regions
        .sidebar_entry_area(SlideId::Collaboration)
        .unwrap();
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: entry.x + 2,
        row: entry.y,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.active_slide(), SlideId::Collaboration);
    assert_eq!(app.active_language(), Language::En);
}

#[test]
fn arrow_keys_follow_the_visible_controls() {
    for language in Language::ALL {
        let mut app = deck(language);
        draw(&mut app);
        let forward = app.regions.control_area(ControlKind::StepForward).unwrap();
        let backward = app.regions.control_area(ControlKind::StepBackward).unwrap();
        // The key matching the side of the forward button advances.
        let key = if forward.x < backward.x {
            KeyCode::Left
        } else {
            KeyCode::Right
        };
        press(&mut app, key);
        assert_eq!(app.active_slide(), SlideId::Engine, "{language}");
    }
}

#[test]
fn deck_loads_custom_translations_from_settings() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = dir.path().join("i18n");
    fs::create_dir_all(&i18n).unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let en = include_str!("../assets/i18n/en.json").replace("Noa Cohen", "Dana Levi");
    fs::write(i18n.join("en.json"), en).unwrap();
    fs::write(i18n.join("he.json"), include_str!("../assets/i18n/he.json")).unwrap();
    fs::write(
        dir.path().join("config/folio.toml"),
        "default_language = \"en\"\ntranslations_dir = \"i18n\"\n",
    )
    .unwrap();

    let settings = DeckSettings::load(dir.path()).unwrap();
    let app = App::from_settings(settings).unwrap();
    assert_eq!(app.active_language(), Language::En);
    assert_eq!(app.bundle().nav.name, "Dana Levi");
}

#[test]
fn incomplete_translations_stop_startup() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = dir.path().join("i18n");
    fs::create_dir_all(&i18n).unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let he = include_str!("../assets/i18n/he.json").replace("\"chartTitle\"", "\"chart\"");
    fs::write(i18n.join("he.json"), he).unwrap();
    fs::write(i18n.join("en.json"), include_str!("../assets/i18n/en.json")).unwrap();
    fs::write(
        dir.path().join("config/folio.toml"),
        "translations_dir = \"i18n\"\n",
    )
    .unwrap();

    let settings = DeckSettings::load(dir.path()).unwrap();
    let err = App::from_settings(settings).err().unwrap();
    assert!(format!("{err:#}").contains("invalid translations"));
}
