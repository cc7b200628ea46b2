use super::*;
use crate::store::MemoryStore;

fn controller() -> ThemeController<MemoryStore> {
    ThemeController::new(PreferenceStore::new(MemoryStore::new()), "theme")
}

fn stored(ctl: &ThemeController<MemoryStore>) -> Option<String> {
    ctl.store().get("theme")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_other_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_display_matches_attribute_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), Theme::Light.as_str());
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
        assert_ne!(theme.toggled(), theme);
    }
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_prefers_stored_choice() {
    assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn resolve_falls_back_to_system() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn startup_uses_stored_preference() {
    let mut ctl = controller();
    assert!(ctl.store().set("theme", "dark"));
    assert_eq!(ctl.resolve_and_apply(false), Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn startup_without_preference_follows_system() {
    let mut ctl = controller();
    assert_eq!(ctl.resolve_and_apply(true), Theme::Dark);
    let mut ctl = controller();
    assert_eq!(ctl.resolve_and_apply(false), Theme::Light);
}

#[test]
fn startup_ignores_garbage_preference() {
    let mut ctl = controller();
    assert!(ctl.store().set("theme", "purple"));
    assert_eq!(ctl.resolve_and_apply(true), Theme::Dark);
}

#[test]
fn startup_with_unavailable_storage_still_resolves() {
    for system_dark in [false, true] {
        let mut ctl = ThemeController::new(PreferenceStore::new(MemoryStore::unavailable()), "theme");
        let theme = ctl.resolve_and_apply(system_dark);
        assert_eq!(theme, Theme::from_system(system_dark));
    }
}

#[test]
fn startup_does_not_write_storage() {
    let mut ctl = controller();
    ctl.resolve_and_apply(true);
    assert_eq!(stored(&ctl), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let mut ctl = controller();
    ctl.resolve_and_apply(false);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(stored(&ctl).as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_round_trips_display_and_storage() {
    for system_dark in [false, true] {
        let mut ctl = controller();
        let start = ctl.resolve_and_apply(system_dark);
        ctl.toggle();
        assert_eq!(ctl.toggle(), start);
        assert_eq!(ctl.current(), start);
        assert_eq!(stored(&ctl).as_deref(), Some(start.as_str()));
    }
}

#[test]
fn toggle_survives_storage_failure() {
    let mut ctl = ThemeController::new(PreferenceStore::new(MemoryStore::unavailable()), "theme");
    ctl.resolve_and_apply(false);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn toggle_uses_configured_key() {
    let mut ctl = ThemeController::new(PreferenceStore::new(MemoryStore::new()), "site-theme");
    ctl.toggle();
    assert_eq!(ctl.store().get("site-theme").as_deref(), Some("dark"));
    assert_eq!(ctl.store().get("theme"), None);
}

// =============================================================
// System signal
// =============================================================

#[test]
fn system_change_followed_without_preference() {
    let mut ctl = controller();
    ctl.resolve_and_apply(false);
    assert_eq!(ctl.on_system_change(true), Some(Theme::Dark));
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.on_system_change(false), Some(Theme::Light));
}

#[test]
fn system_change_ignored_once_preference_stored() {
    let mut ctl = controller();
    ctl.resolve_and_apply(false);
    ctl.toggle();
    assert_eq!(ctl.on_system_change(false), None);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn system_change_followed_again_after_external_clear() {
    let mut ctl = controller();
    ctl.toggle();
    ctl.store().backend().clear("theme");
    assert_eq!(ctl.on_system_change(false), Some(Theme::Light));
}

// =============================================================
// Placement
// =============================================================

/// Apply one render to a two-element page model.
fn render_onto(page: &mut std::collections::HashMap<ThemeHost, Theme>, body_present: bool, theme: Theme) {
    let placement = theme_placement(body_present);
    page.insert(placement.write, theme);
    if let Some(stale) = placement.clear {
        page.remove(&stale);
    }
}

#[test]
fn placement_before_body_uses_root() {
    let placement = theme_placement(false);
    assert_eq!(placement.write, ThemeHost::Root);
    assert_eq!(placement.clear, None);
}

#[test]
fn placement_with_body_clears_root() {
    let placement = theme_placement(true);
    assert_eq!(placement.write, ThemeHost::Body);
    assert_eq!(placement.clear, Some(ThemeHost::Root));
}

#[test]
fn startup_before_body_then_toggle_leaves_one_carrier() {
    let mut ctl = controller();
    let mut page = std::collections::HashMap::new();

    render_onto(&mut page, false, ctl.resolve_and_apply(true));
    assert_eq!(page.get(&ThemeHost::Root), Some(&Theme::Dark));

    render_onto(&mut page, true, ctl.current());
    assert_eq!(page.get(&ThemeHost::Root), None);
    assert_eq!(page.get(&ThemeHost::Body), Some(&Theme::Dark));

    render_onto(&mut page, true, ctl.toggle());
    assert_eq!(page.len(), 1);
    assert_eq!(page.get(&ThemeHost::Body), Some(&Theme::Light));

    render_onto(&mut page, true, ctl.toggle());
    assert_eq!(page.len(), 1);
    assert_eq!(page.get(&ThemeHost::Body), Some(&Theme::Dark));
}
