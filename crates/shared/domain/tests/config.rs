use packhub_domain::config::{ApiConfig, PackingConfig, ServerConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);
    assert!(server.address.is_unspecified());
    assert!(server.ssl.is_none());

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("static"));

    let packing = PackingConfig::default();
    assert_eq!(packing.default_sizes, vec![250, 500, 1000, 2000, 5000]);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 9090 },
        "storage": { "static_dir": "/srv/www" },
        "packing": { "default_sizes": [23, 31, 53] }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/www"));
    assert_eq!(cfg.packing.default_sizes, vec![23, 31, 53]);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "port": 3000 } })).expect("config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.packing.default_sizes.len(), 5);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("static"));
}

#[test]
fn config_mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 1;

    assert_eq!(original.server.port, 8080);
    assert_eq!(changed.server.port, 1);
}
