use std::io::Write;

use srpolicy_packet::AfiSafi;
use srpolicyctl::{Config, Policy, SourceError};

#[test]
fn load_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_level: debug").unwrap();
    writeln!(file, "encode:").unwrap();
    writeln!(file, "  preference: true").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.log_level, "debug");
    assert!(config.encode.preference);
    assert!(!config.encode.priority);
    assert_eq!(config.family, AfiSafi::SR_POLICY_IPV6);
}

#[test]
fn invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "encode: [1, 2]").unwrap();
    assert!(matches!(
        Config::load(Some(file.path())),
        Err(SourceError::Yaml(_))
    ));
}

#[test]
fn load_policy_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Nlri:\n  Distinguisher: 4\n  Color: 7\n  Endpoint: 2001:db8::7\nBsid: cafe::7\n"
    )
    .unwrap();
    let policy = Policy::from_file(file.path()).unwrap();
    assert_eq!(policy.nlri.color, 7);
    assert_eq!(policy.bsid, Some("cafe::7".parse().unwrap()));
}
