use super::*;

#[test]
fn test_default_settings() {
    let settings = LightVolumeSettings::default();
    assert_eq!(settings.mode(), LightVolumeMode::Single);
    assert!(settings.is_enabled());
    assert!(settings.exposes_output());
    assert!(!settings.debug);
}

#[test]
fn test_mode_from_toggle() {
    let mut settings = LightVolumeSettings::default();

    settings.light_volumes = 0;
    assert_eq!(settings.mode(), LightVolumeMode::Off);
    assert!(!settings.is_enabled());

    settings.light_volumes = 2;
    assert_eq!(settings.mode(), LightVolumeMode::Multi);
    assert!(settings.is_enabled());
    assert!(!settings.exposes_output());

    settings.light_volumes = -1;
    assert_eq!(settings.mode(), LightVolumeMode::Multi);
}

#[test]
fn test_dynamic_lights_gate() {
    let settings = LightVolumeSettings {
        dynamic_lights: false,
        ..LightVolumeSettings::default()
    };
    assert!(!settings.is_enabled());
    assert!(!settings.exposes_output());
}

#[test]
fn test_disabled() {
    assert_eq!(LightVolumeSettings::disabled().mode(), LightVolumeMode::Off);
}

// ============================================================================
// Console variables
// ============================================================================

#[test]
fn test_set_and_read_cvars() {
    let mut settings = LightVolumeSettings::default();

    settings.set_cvar(CVAR_LIGHT_VOLUMES, "2").unwrap();
    settings.set_cvar(CVAR_DYNAMIC_LIGHTS, "0").unwrap();
    settings.set_cvar(CVAR_LIGHT_VOLUMES_DEBUG, " 1 ").unwrap();

    assert_eq!(settings.cvar(CVAR_LIGHT_VOLUMES), Some(2));
    assert_eq!(settings.cvar(CVAR_DYNAMIC_LIGHTS), Some(0));
    assert_eq!(settings.cvar(CVAR_LIGHT_VOLUMES_DEBUG), Some(1));
    assert!(settings.debug);
    assert!(!settings.dynamic_lights);
}

#[test]
fn test_unknown_cvar() {
    let mut settings = LightVolumeSettings::default();
    assert_eq!(
        settings.set_cvar("e_Shadows", "1"),
        Err(Error::UnknownSetting("e_Shadows".to_string()))
    );
    assert_eq!(settings.cvar("e_Shadows"), None);
}

#[test]
fn test_invalid_cvar_value_leaves_settings_untouched() {
    let mut settings = LightVolumeSettings::default();
    let result = settings.set_cvar(CVAR_LIGHT_VOLUMES, "on");

    assert!(matches!(result, Err(Error::InvalidSetting(_))));
    assert_eq!(settings, LightVolumeSettings::default());
}
