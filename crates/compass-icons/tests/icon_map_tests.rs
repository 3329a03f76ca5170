//! Integration tests for the public icon map API.

use std::collections::HashMap;
use std::thread;

use compass_icons::Error;
use compass_icons::prelude::*;

#[test]
fn test_app_icon_names() {
    let expected = [
        ("back", "ArrowLeft"),
        ("alertSuccess", "CircleCheck"),
        ("alertError", "CircleAlert"),
        ("alertWarning", "TriangleAlert"),
        ("alertInfo", "Info"),
    ];
    for (name, icon) in expected {
        assert_eq!(lookup_icon(name).unwrap(), icon, "icon for {name}");
    }
}

#[test]
fn test_table_has_no_duplicate_keys() {
    let mut seen = HashMap::new();
    for (key, id) in ICON_MAP.iter() {
        assert!(seen.insert(key, id).is_none(), "{key} listed twice");
    }
    assert_eq!(seen.len(), IconKey::ALL.len());
}

#[test]
fn test_unknown_name_is_reported() {
    let err = IconNameResolver::new().lookup("ArrowLeft").unwrap_err();
    assert!(matches!(err, Error::UnknownIconKey { .. }));
    assert_eq!(err.to_string(), "Unknown icon key 'ArrowLeft'");
}

#[test]
fn test_concurrent_readers_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                IconKey::ALL
                    .iter()
                    .map(|&key| resolve(key))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

#[test]
fn test_manifest_lists_every_key() {
    let manifest = IconManifest::from_map(&ICON_MAP);
    let keys: Vec<_> = manifest.entries().iter().map(|e| e.key).collect();
    assert_eq!(keys, IconKey::ALL.to_vec());

    let pretty = manifest.to_json_pretty().unwrap();
    assert!(pretty.contains("\"alertSuccess\""));
    assert!(pretty.contains("\"circle-check\""));
}
