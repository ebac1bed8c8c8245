use parlance_apps::ConversationConfig;

#[test]
fn verify_sample_configs() {
    let files = vec![
        "config/sample_conversation_print.toml",
        "config/sample_conversation_local_command.toml",
        "config/sample_conversation_transcript.toml",
    ];
    for f in files {
        let result = ConversationConfig::try_new(f);
        assert!(result.is_ok(), "{:?} {:?}", f, result);
        let ser_result = toml::to_string(&result.unwrap());
        assert!(ser_result.is_ok(), "{:?} {:?}", f, ser_result);
    }
}

#[test]
fn ser_default_config() {
    toml::to_string(&ConversationConfig::default()).unwrap();
}

#[tokio::test]
async fn transcript_conversation_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("conversation.toml");
    std::fs::write(
        &config_path,
        r#"
        initial_speaker = "John"

        [speak_config]
        type = "Transcript"

        [speak_config.args]
        path = "transcript.txt"
        "#,
    )
    .unwrap();

    let config = ConversationConfig::try_new(&config_path).unwrap();
    let conversation = config.create_conversation().unwrap();
    conversation.speak("Hello world!").unwrap().await.unwrap();
    conversation.register("Carlos");
    conversation.speak("Foobar!").unwrap().await.unwrap();

    let transcript = std::fs::read_to_string(dir.path().join("transcript.txt")).unwrap();
    assert_eq!(transcript, "[John] Hello world!\n[Carlos] Foobar!\n");
}
