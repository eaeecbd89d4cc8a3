//! Settings window controller
//!
//! Each `on_*` method handles one user interaction: it writes the affected
//! settings to the store and, for most options, applies the pending
//! changeset to the injected [`ChangeSink`]s straight away. Language changes
//! only take effect after a restart and are left pending.

use tracing::{debug, info, warn};

use super::defaults::{
    GENERAL, LIGHTING_METHOD, LIGHTING_RESET_SETTINGS, MAX_LIGHTS, PREFERRED_LOCALES,
    RAIN_RIPPLE_DETAIL, REFLECTION_DETAIL, RESOLUTION_X, RESOLUTION_Y, RTT_SIZE, SHADERS, TEXTURE_MIPMAP, VIDEO,
    WATER, WINDOW_MODE,
};
use super::display::{Resolution, ResolutionList, WindowMode};
use super::graphics::{self, LightingMethod, TextureFiltering};
use super::locales::{current_locales, set_preferred_locale, LanguageOptions};
use super::script_pages::ScriptSettingsPanel;
use super::sliders::SliderSpec;
use super::store::{apply_changes, ChangeSink, Changeset, SettingsStore};
use crate::error::{Result, ResultExt};
use crate::search::CandidateProvider;

pub struct SettingsWindow<S: SettingsStore> {
    store: S,
    sinks: Vec<Box<dyn ChangeSink>>,
    resolutions: ResolutionList,
    languages: LanguageOptions,
    scripts: ScriptSettingsPanel,
    keyboard_mode: bool,
    window_border_enabled: bool,
}

impl<S: SettingsStore + std::fmt::Debug> std::fmt::Debug for SettingsWindow<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWindow")
            .field("store", &self.store)
            .field("sinks", &self.sinks.len())
            .field("resolutions", &self.resolutions)
            .field("languages", &self.languages)
            .field("scripts", &self.scripts)
            .field("keyboard_mode", &self.keyboard_mode)
            .field("window_border_enabled", &self.window_border_enabled)
            .finish()
    }
}

impl<S: SettingsStore> SettingsWindow<S> {
    /// Build the window over `store` with the display modes of the current
    /// screen and the locales that have translations.
    pub fn new(
        store: S,
        display_modes: &[Resolution],
        available_locales: impl IntoIterator<Item = String>,
    ) -> Self {
        let languages = LanguageOptions::new(available_locales, &current_locales(&store));
        let mut window = SettingsWindow {
            store,
            sinks: Vec::new(),
            resolutions: ResolutionList::new(display_modes),
            languages,
            scripts: ScriptSettingsPanel::new(),
            keyboard_mode: true,
            window_border_enabled: true,
        };
        window.highlight_current_resolution();
        window.window_border_enabled = window
            .window_mode()
            .map_or(true, WindowMode::window_border_enabled);
        info!(
            resolutions = window.resolutions.len(),
            locales = window.languages.available().len(),
            "Settings window created"
        );
        window
    }

    pub fn add_sink(&mut self, sink: Box<dyn ChangeSink>) {
        self.sinks.push(sink);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Push pending changes to every sink and reset them
    pub fn apply(&mut self) -> Changeset {
        apply_changes(&mut self.store, &mut self.sinks)
    }

    /// Refresh everything derived from the store; called when the window is shown
    pub fn on_open<P: CandidateProvider + ?Sized>(&mut self, pages: &P) {
        self.highlight_current_resolution();
        self.update_window_mode_settings();
        self.scripts.render(pages);
    }

    // --- check buttons and sliders ---

    /// Flip a bool setting and apply; returns the new state
    pub fn on_button_toggled(&mut self, category: &str, name: &str) -> Result<bool> {
        let state = !self.store.get_bool(category, name)?;
        self.store.set_bool(category, name, state);
        self.apply();
        Ok(state)
    }

    pub fn button_caption(&self, category: &str, name: &str) -> Result<&'static str> {
        Ok(if self.store.get_bool(category, name)? {
            "On"
        } else {
            "Off"
        })
    }

    /// Current position and value text of a slider
    pub fn slider_state(&self, slider: &SliderSpec) -> Result<(usize, String)> {
        slider.read(&self.store)
    }

    /// Store the slider value and apply; returns the label text
    pub fn on_slider_changed(&mut self, slider: &SliderSpec, pos: usize) -> String {
        let text = slider.write(&mut self.store, pos);
        self.apply();
        slider.label(&text).unwrap_or(text)
    }

    // --- video ---

    pub fn resolutions(&self) -> &ResolutionList {
        &self.resolutions
    }

    fn current_resolution(&self) -> Option<Resolution> {
        let width = self.store.get_int(VIDEO, RESOLUTION_X).warn_on_err()?;
        let height = self.store.get_int(VIDEO, RESOLUTION_Y).warn_on_err()?;
        Some(Resolution::new(
            u32::try_from(width).ok()?,
            u32::try_from(height).ok()?,
        ))
    }

    fn write_resolution(&mut self, resolution: Resolution) {
        self.store
            .set_int(VIDEO, RESOLUTION_X, i64::from(resolution.width));
        self.store
            .set_int(VIDEO, RESOLUTION_Y, i64::from(resolution.height));
    }

    pub fn highlight_current_resolution(&mut self) {
        match self.current_resolution() {
            Some(current) => {
                self.resolutions.highlight(current);
            }
            None => self.resolutions.select(None),
        }
    }

    /// A list row was clicked; the change waits for confirmation
    pub fn on_resolution_selected(&mut self, index: usize) {
        self.resolutions.select(Some(index));
    }

    /// Confirmation accepted: store the selected resolution and apply
    pub fn on_resolution_accept(&mut self) -> Option<Resolution> {
        let resolution = self.resolutions.selected_resolution()?;
        self.write_resolution(resolution);
        self.apply();
        info!(width = resolution.width, height = resolution.height, "Resolution changed");
        Some(resolution)
    }

    pub fn on_resolution_cancel(&mut self) {
        self.highlight_current_resolution();
    }

    pub fn window_mode(&self) -> Option<WindowMode> {
        self.store
            .get_int(VIDEO, WINDOW_MODE)
            .warn_on_err()
            .and_then(WindowMode::from_index)
    }

    pub fn window_border_enabled(&self) -> bool {
        self.window_border_enabled
    }

    pub fn on_window_mode_changed(&mut self, mode: WindowMode) {
        self.store.set_int(VIDEO, WINDOW_MODE, mode.index());
        self.update_window_mode_settings();
        self.apply();
    }

    /// Fullscreen modes only accept resolutions the screen reports; fall
    /// back to the largest one otherwise.
    fn update_window_mode_settings(&mut self) {
        let Some(mode) = self.window_mode() else {
            return;
        };
        self.window_border_enabled = mode.window_border_enabled();
        if mode == WindowMode::Windowed {
            return;
        }

        if let Some(selected) = self.resolutions.selected_resolution() {
            self.write_resolution(selected);
        }

        let supported = self
            .current_resolution()
            .is_some_and(|current| self.resolutions.contains(current));
        if !supported {
            if let Some(fallback) = self
                .resolutions
                .resolution_at(0)
                .filter(|r| r.width != 0 && r.height != 0)
            {
                debug!(%fallback, "Resolution unsupported in fullscreen, using fallback");
                self.write_resolution(fallback);
            }
        }
        self.highlight_current_resolution();
    }

    // --- graphics ---

    pub fn texture_filtering_label(&self) -> &'static str {
        match self.store.get_string(GENERAL, TEXTURE_MIPMAP).warn_on_err() {
            Some(value) => graphics::texture_filtering_label(&value),
            None => "Other",
        }
    }

    pub fn on_texture_filtering_changed(&mut self, pos: usize) {
        if let Some(filtering) = TextureFiltering::from_position(pos) {
            self.store
                .set_string(GENERAL, TEXTURE_MIPMAP, filtering.as_str());
        }
        self.apply();
    }

    pub fn water_texture_index(&self) -> Option<usize> {
        self.store
            .get_int(WATER, RTT_SIZE)
            .warn_on_err()
            .and_then(graphics::water_texture_index)
    }

    pub fn on_water_texture_size_changed(&mut self, pos: usize) {
        match graphics::water_texture_size(pos) {
            Some(size) => self.store.set_int(WATER, RTT_SIZE, size),
            None => warn!(pos, "Unexpected water texture size option"),
        }
        self.apply();
    }

    pub fn water_reflection_detail(&self) -> i64 {
        graphics::clamp_reflection_detail(
            self.store
                .get_int(WATER, REFLECTION_DETAIL)
                .warn_on_err()
                .unwrap_or_default(),
        )
    }

    pub fn on_water_reflection_detail_changed(&mut self, pos: usize) {
        let level = graphics::clamp_reflection_detail(i64::try_from(pos).unwrap_or(i64::MAX));
        self.store.set_int(WATER, REFLECTION_DETAIL, level);
        self.apply();
    }

    pub fn rain_ripple_detail(&self) -> i64 {
        graphics::clamp_rain_ripple_detail(
            self.store
                .get_int(WATER, RAIN_RIPPLE_DETAIL)
                .warn_on_err()
                .unwrap_or_default(),
        )
    }

    pub fn on_rain_ripple_detail_changed(&mut self, pos: usize) {
        let level = graphics::clamp_rain_ripple_detail(i64::try_from(pos).unwrap_or(i64::MAX));
        self.store.set_int(WATER, RAIN_RIPPLE_DETAIL, level);
        self.apply();
    }

    pub fn max_lights_index(&self) -> Option<usize> {
        self.store
            .get_int(SHADERS, MAX_LIGHTS)
            .warn_on_err()
            .and_then(graphics::max_lights_index)
    }

    pub fn on_max_lights_changed(&mut self, pos: usize) {
        self.store
            .set_int(SHADERS, MAX_LIGHTS, graphics::max_lights_for_index(pos));
        self.apply();
    }

    pub fn lighting_method(&self) -> LightingMethod {
        self.store
            .get_string(SHADERS, LIGHTING_METHOD)
            .warn_on_err()
            .and_then(|name| name.parse().ok())
            .unwrap_or(LightingMethod::Shaders)
    }

    /// Takes effect after a restart
    pub fn on_lighting_method_changed(&mut self, method: LightingMethod) {
        self.store
            .set_string(SHADERS, LIGHTING_METHOD, method.as_str());
        self.apply();
    }

    /// Restore the lighting settings to their defaults once the user confirms
    pub fn on_lights_reset(&mut self, confirmed: bool) -> Result<()> {
        if !confirmed {
            return Ok(());
        }
        for name in LIGHTING_RESET_SETTINGS {
            self.store.reset_to_default(SHADERS, name)?;
        }
        self.apply();
        info!("Lighting settings reset to defaults");
        Ok(())
    }

    // --- language ---

    pub fn languages(&self) -> &LanguageOptions {
        &self.languages
    }

    /// Set the locale at `priority` (0 primary, 1 secondary) to the option
    /// at `pos`. Requires a restart, so the change is not applied.
    pub fn on_language_changed(&mut self, priority: usize, pos: usize) -> Option<Vec<String>> {
        let locale = self.languages.locale_at(pos)?.to_string();
        let locales = set_preferred_locale(current_locales(&self.store), priority, &locale);
        self.store
            .set_string_array(GENERAL, PREFERRED_LOCALES, locales.clone());
        self.languages = LanguageOptions::new(self.languages.available().to_vec(), &locales);
        Some(locales)
    }

    // --- controls ---

    pub fn is_keyboard_mode(&self) -> bool {
        self.keyboard_mode
    }

    /// Returns whether the mode changed
    pub fn on_keyboard_switch(&mut self) -> bool {
        self.switch_input_mode(true)
    }

    pub fn on_controller_switch(&mut self) -> bool {
        self.switch_input_mode(false)
    }

    fn switch_input_mode(&mut self, keyboard: bool) -> bool {
        if self.keyboard_mode == keyboard {
            return false;
        }
        self.keyboard_mode = keyboard;
        debug!(keyboard, "Controls mode switched");
        true
    }

    // --- scripts ---

    pub fn scripts(&self) -> &ScriptSettingsPanel {
        &self.scripts
    }

    pub fn on_script_filter_changed<P: CandidateProvider + ?Sized>(
        &mut self,
        filter: &str,
        pages: &P,
    ) {
        self.scripts.set_filter(filter, pages);
    }

    pub fn on_script_selected(&mut self, row: usize) -> Option<usize> {
        self.scripts.select(row)
    }
}
