use super::*;

#[test]
fn stored_choice_wins_over_system() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn system_preference_applies_when_nothing_stored() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
}

#[test]
fn attribute_values() {
    assert_eq!(Theme::from_dark(true).as_str(), "dark");
    assert_eq!(Theme::from_dark(false).as_str(), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_defaults_to_light_and_toggle_flips() {
    assert!(!read_preference());
    assert!(toggle(false));
    assert!(!toggle(true));
}
