use std::cell::RefCell;
use std::rc::Rc;

use super::defaults::*;
use super::*;
use crate::search::SearchableRecord;

fn modes() -> Vec<Resolution> {
    vec![
        Resolution::new(800, 600),
        Resolution::new(1920, 1080),
        Resolution::new(1280, 800),
    ]
}

fn locales() -> Vec<String> {
    ["en", "de", "fr"].iter().map(|s| s.to_string()).collect()
}

fn window() -> SettingsWindow<MemorySettings> {
    SettingsWindow::new(MemorySettings::with_builtin_defaults(), &modes(), locales())
}

/// Window with a sink that records every applied changeset
fn recording_window() -> (SettingsWindow<MemorySettings>, Rc<RefCell<Vec<Changeset>>>) {
    let mut window = window();
    let applied = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&applied);
    window.add_sink(Box::new(move |changes: &Changeset| {
        sink_log.borrow_mut().push(changes.clone())
    }));
    (window, applied)
}

fn key(category: &str, name: &str) -> SettingKey {
    (category.to_string(), name.to_string())
}

#[test]
fn test_new_window_highlights_current_resolution() {
    let window = window();
    assert_eq!(
        window.resolutions().items(),
        &["1920 x 1080 (16 : 9)", "1280 x 800 (16 : 10)", "800 x 600 (4 : 3)"]
    );
    assert_eq!(window.resolutions().selected(), Some(2));
    assert!(window.window_border_enabled());
    assert!(window.is_keyboard_mode());
}

#[test]
fn test_resolution_accept_writes_and_applies() {
    let (mut window, applied) = recording_window();
    window.on_resolution_selected(0);
    assert!(applied.borrow().is_empty());

    assert_eq!(window.on_resolution_accept(), Some(Resolution::new(1920, 1080)));
    assert_eq!(window.store().get_int(VIDEO, RESOLUTION_X).unwrap(), 1920);
    assert_eq!(window.store().get_int(VIDEO, RESOLUTION_Y).unwrap(), 1080);

    let applied = applied.borrow();
    assert_eq!(applied.len(), 1);
    assert!(applied[0].contains(&key(VIDEO, RESOLUTION_X)));
    assert!(window.store().pending_changes().is_empty());
}

#[test]
fn test_resolution_cancel_restores_highlight() {
    let mut window = window();
    window.on_resolution_selected(1);
    window.on_resolution_cancel();
    assert_eq!(window.resolutions().selected(), Some(2));
}

#[test]
fn test_fullscreen_falls_back_to_largest_supported_resolution() {
    let mut store = MemorySettings::with_builtin_defaults();
    store.set_int(VIDEO, RESOLUTION_X, 1024);
    store.set_int(VIDEO, RESOLUTION_Y, 768);
    store.reset_pending_changes();

    let mut window = SettingsWindow::new(store, &modes(), locales());
    assert_eq!(window.resolutions().selected(), None);

    window.on_window_mode_changed(WindowMode::Fullscreen);
    assert!(!window.window_border_enabled());
    assert_eq!(window.store().get_int(VIDEO, RESOLUTION_X).unwrap(), 1920);
    assert_eq!(window.store().get_int(VIDEO, WINDOW_MODE).unwrap(), 0);
    assert_eq!(window.resolutions().selected(), Some(0));

    window.on_window_mode_changed(WindowMode::Windowed);
    assert!(window.window_border_enabled());
}

#[test]
fn test_button_toggle_flips_and_applies() {
    let (mut window, applied) = recording_window();
    assert_eq!(window.button_caption(VIDEO, "vsync").unwrap(), "Off");
    assert!(window.on_button_toggled(VIDEO, "vsync").unwrap());
    assert_eq!(window.button_caption(VIDEO, "vsync").unwrap(), "On");
    assert_eq!(applied.borrow().len(), 1);

    assert!(window.on_button_toggled(VIDEO, "no such toggle").is_err());
}

#[test]
fn test_slider_change_stores_value_and_returns_label() {
    let (mut window, applied) = recording_window();
    let slider = SliderSpec::new(CAMERA, "viewing distance", SliderKind::Cell, 3)
        .with_range(0.0, 16384.0)
        .with_label("%s cells");

    assert_eq!(window.on_slider_changed(&slider, 1), "1.00 cells");
    assert_eq!(window.store().get_int(CAMERA, "viewing distance").unwrap(), 8192);
    assert_eq!(applied.borrow().len(), 1);
}

#[test]
fn test_graphics_options() {
    let mut window = window();
    assert_eq!(window.texture_filtering_label(), "Bilinear");
    window.on_texture_filtering_changed(1);
    assert_eq!(window.texture_filtering_label(), "Trilinear");
    window.on_texture_filtering_changed(7);
    assert_eq!(window.texture_filtering_label(), "Trilinear");

    assert_eq!(window.water_texture_index(), Some(0));
    window.on_water_texture_size_changed(2);
    assert_eq!(window.store().get_int(WATER, RTT_SIZE).unwrap(), 2048);
    window.on_water_texture_size_changed(9);
    assert_eq!(window.water_texture_index(), Some(2));

    window.on_water_reflection_detail_changed(12);
    assert_eq!(window.water_reflection_detail(), 5);
    window.on_rain_ripple_detail_changed(4);
    assert_eq!(window.rain_ripple_detail(), 2);
}

#[test]
fn test_lights_reset_restores_defaults_only_when_confirmed() {
    let mut window = window();
    window.on_max_lights_changed(3);
    window.on_lighting_method_changed(LightingMethod::Legacy);
    assert_eq!(window.max_lights_index(), Some(3));
    assert_eq!(window.lighting_method(), LightingMethod::Legacy);

    window.on_lights_reset(false).unwrap();
    assert_eq!(window.store().get_int(SHADERS, MAX_LIGHTS).unwrap(), 32);

    window.on_lights_reset(true).unwrap();
    assert_eq!(window.max_lights_index(), Some(0));
    assert_eq!(window.lighting_method(), LightingMethod::ShadersCompatibility);
}

#[test]
fn test_language_change_pads_and_stays_pending() {
    let (mut window, applied) = recording_window();
    assert_eq!(window.languages().primary(), Some(1));
    assert_eq!(window.languages().secondary(), None);

    // options are sorted: de, en, fr
    let locales = window.on_language_changed(1, 2).unwrap();
    assert_eq!(locales, vec!["en", "fr"]);
    assert_eq!(window.languages().secondary(), Some(2));
    assert!(applied.borrow().is_empty());
    assert!(window
        .store()
        .pending_changes()
        .contains(&key(GENERAL, PREFERRED_LOCALES)));

    assert_eq!(window.on_language_changed(0, 10), None);
}

#[test]
fn test_keyboard_controller_switch() {
    let mut window = window();
    assert!(!window.on_keyboard_switch());
    assert!(window.on_controller_switch());
    assert!(!window.is_keyboard_mode());
    assert!(!window.on_controller_switch());
    assert!(window.on_keyboard_switch());
}

#[test]
fn test_script_pages_filter_and_select() {
    let pages = SearchableRecord::enumerate([
        ("Fireball", ""),
        ("Ice Spike", "fire resistant"),
        ("Healing", "restore"),
    ]);
    let mut window = window();
    window.on_open(&pages);
    assert!(window.scripts().is_enabled());
    assert_eq!(window.scripts().rows().len(), 3);

    window.on_script_filter_changed("fire", &pages);
    let names: Vec<&str> = window
        .scripts()
        .rows()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Fireball", "Ice Spike"]);

    assert_eq!(window.on_script_selected(1), Some(1));
    assert_eq!(window.on_script_selected(2), None);
}

#[test]
fn test_apply_without_changes_skips_sinks() {
    let (mut window, applied) = recording_window();
    assert!(window.apply().is_empty());
    assert!(applied.borrow().is_empty());
}

#[test]
fn test_debug_output_includes_window_border_state() {
    let mut window = window();
    assert!(format!("{:?}", window).contains("window_border_enabled: true"));
    window.on_window_mode_changed(WindowMode::Fullscreen);
    assert!(format!("{:?}", window).contains("window_border_enabled: false"));
}
