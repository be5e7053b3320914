use std::fs;
use swarmfund_assistant::Config;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "swarmfund-assistant");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.relay.url, "nats://localhost:4222");
    assert_eq!(cfg.relay.subject_prefix, "assistant.session");
    assert_eq!(cfg.assistant.greeting_delay_ms, 1000);
    assert!(!cfg.assistant.teardown_on_error);
    assert_eq!(cfg.assistant.transcriber.model, "nova-2");
    assert_eq!(cfg.assistant.voice.voice_id, "21m00Tcm4TlvDq8ikWAM");
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("assistant.toml"),
        r#"
[service]
name = "test-assistant"

[service.http]
port = 9090

[relay]
url = "nats://relay:4222"

[assistant]
greeting_delay_ms = 250
teardown_on_error = true

[assistant.voice]
voice_id = "custom-voice"
"#,
    )
    .unwrap();

    let path = dir.path().join("assistant");
    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "test-assistant");
    assert_eq!(cfg.service.http.port, 9090);
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.relay.url, "nats://relay:4222");
    assert_eq!(cfg.assistant.greeting_delay_ms, 250);
    assert!(cfg.assistant.teardown_on_error);
    assert_eq!(cfg.assistant.voice.voice_id, "custom-voice");
    assert_eq!(cfg.assistant.voice.provider, "11labs");
    assert_eq!(cfg.assistant.name, "SwarmFund AI Assistant");
}
