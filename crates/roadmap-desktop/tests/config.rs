use std::path::PathBuf;

use roadmap_desktop::config::{
    CredentialSource, DEFAULT_TIMEOUT_SECS, RoadmapConfig, config_info, export_path, parse_config,
};

#[test]
fn unversioned_config_is_migrated() {
    let json = r#"{
        "region": "eu-west-1",
        "model_id": "eu.anthropic.claude-sonnet-4-20250514-v1:0",
        "credentials": { "type": "profile", "profile_name": "study" },
        "created_at": "2025-03-01T12:00:00Z"
    }"#;

    let config = parse_config(json).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(
        config.credentials,
        CredentialSource::Profile {
            profile_name: "study".to_string()
        }
    );
    assert_eq!(config.export_path, None);
}

#[test]
fn newer_config_version_is_rejected() {
    let json = r#"{ "config_version": 99, "region": "us-east-1" }"#;
    let err = parse_config(json).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn config_info_redacts_access_keys() {
    let config = RoadmapConfig {
        credentials: CredentialSource::Inline {
            access_key_id: "AKIAABCDEFGHWXYZ".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: None,
        },
        ..RoadmapConfig::default()
    };

    let info = config_info(&config);

    assert_eq!(info.credential_type, "inline");
    assert_eq!(info.access_key_hint.as_deref(), Some("AKIA...WXYZ"));
    assert_eq!(info.export_path, "roadmap.pdf");
}

#[test]
fn export_path_can_be_overridden() {
    let config = RoadmapConfig {
        export_path: Some(PathBuf::from("/tmp/plans/rust.pdf")),
        ..RoadmapConfig::default()
    };
    assert_eq!(export_path(&config), PathBuf::from("/tmp/plans/rust.pdf"));
}
