use std::collections::HashMap;

use super::*;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<GalleryConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    GalleryConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg, GalleryConfig::default());
    assert_eq!(cfg.screen, ScreenKind::Clock);
    assert_eq!(cfg.size, Size::new(1080.0, 2000.0));
    assert_eq!(cfg.frame_ms, 16);
    assert_eq!(cfg.run_secs, 3);
    assert_eq!(cfg.seed, None);
    assert!(!cfg.dump);
}

#[test]
fn overrides_are_parsed() {
    let cfg = from_pairs(&[
        ("GALLERY_SCREEN", "weight"),
        ("GALLERY_WIDTH", "720"),
        ("GALLERY_HEIGHT", " 1280 "),
        ("GALLERY_FRAME_MS", "33"),
        ("GALLERY_RUN_SECS", "10"),
        ("GALLERY_SEED", "42"),
        ("GALLERY_DUMP", "true"),
    ])
    .unwrap();
    assert_eq!(cfg.screen, ScreenKind::Weight);
    assert_eq!(cfg.size, Size::new(720.0, 1280.0));
    assert_eq!(cfg.frame_ms, 33);
    assert_eq!(cfg.run_secs, 10);
    assert_eq!(cfg.seed, Some(42));
    assert!(cfg.dump);
}

#[test]
fn unknown_screen_is_rejected() {
    assert_eq!(from_pairs(&[("GALLERY_SCREEN", "pong")]), Err(ConfigError::UnknownScreen("pong".to_owned())));
}

#[test]
fn garbage_numbers_are_rejected() {
    let err = from_pairs(&[("GALLERY_WIDTH", "wide")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "GALLERY_WIDTH", value: "wide".to_owned() });
    assert_eq!(err.to_string(), "invalid GALLERY_WIDTH: \"wide\"");
    assert!(matches!(from_pairs(&[("GALLERY_SEED", "-1")]), Err(ConfigError::Invalid { var: "GALLERY_SEED", .. })));
}

#[test]
fn zero_sizes_and_intervals_are_rejected() {
    assert_eq!(from_pairs(&[("GALLERY_HEIGHT", "0")]), Err(ConfigError::Zero { var: "GALLERY_HEIGHT" }));
    assert_eq!(from_pairs(&[("GALLERY_FRAME_MS", "0")]), Err(ConfigError::Zero { var: "GALLERY_FRAME_MS" }));
}

#[test]
fn dump_flag_accepts_common_spellings() {
    for raw in ["1", "TRUE", "yes", "on"] {
        assert!(from_pairs(&[("GALLERY_DUMP", raw)]).unwrap().dump, "{raw}");
    }
    for raw in ["0", "false", ""] {
        assert!(!from_pairs(&[("GALLERY_DUMP", raw)]).unwrap().dump, "{raw}");
    }
}
