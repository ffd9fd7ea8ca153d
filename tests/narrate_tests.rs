use accessipilot::narrate::narrate_model::{
    DeleteAck, HealthStatus, NarrationRecord, NarrationRequest,
};

// =========================================================================
// 1. Record decoding — full shape from GET /narrations
// =========================================================================

#[test]
fn full_record_decodes_from_camel_case() {
    let json = r#"{
        "id": "rec-123",
        "userId": "user-1",
        "text": "A login form with two fields.",
        "voiceId": "default",
        "audioUrl": "https://placeholder-audio.com/audio.mp3",
        "createdAt": "2025-06-01T12:00:00Z",
        "status": "completed",
        "wordCount": 6
    }"#;

    let record: NarrationRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, "rec-123");
    assert_eq!(record.user_id, "user-1");
    assert_eq!(record.text, "A login form with two fields.");
    assert_eq!(record.voice_id.as_deref(), Some("default"));
    assert_eq!(record.status.as_deref(), Some("completed"));
    assert_eq!(record.word_count, Some(6));
}

// =========================================================================
// 2. Record decoding — POST /narrate subset
// =========================================================================

#[test]
fn create_response_subset_decodes_with_defaults() {
    let json = r#"{
        "id": "rec-9",
        "userId": "user-1",
        "text": "short text",
        "status": "completed",
        "createdAt": "2025-06-01T12:00:00Z"
    }"#;

    let record: NarrationRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, "rec-9");
    assert_eq!(record.voice_id, None);
    assert_eq!(record.audio_url, None);
    assert_eq!(record.word_count, None);
}

// =========================================================================
// 3. Record list ordering is preserved as received
// =========================================================================

#[test]
fn record_list_preserves_server_order() {
    let json = r#"[
        {"id": "newest", "userId": "u", "text": "a"},
        {"id": "older", "userId": "u", "text": "b"}
    ]"#;

    let records: Vec<NarrationRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records[0].id, "newest");
    assert_eq!(records[1].id, "older");
}

// =========================================================================
// 4. Request encoding
// =========================================================================

#[test]
fn request_with_voice_carries_voice_id() {
    let body = NarrationRequest {
        text: "hello".into(),
        voice_id: Some("calm".into()),
    };

    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains(r#""voiceId":"calm""#));
}

#[test]
fn request_without_voice_omits_the_field() {
    let body = NarrationRequest {
        text: "hello".into(),
        voice_id: None,
    };

    let json = serde_json::to_string(&body).unwrap();
    assert!(!json.contains("voiceId"));
}

// =========================================================================
// 5. Health and delete shapes
// =========================================================================

#[test]
fn health_status_decodes() {
    let json = r#"{"status":"ok","timestamp":"2025-06-01T12:00:00Z","service":"AccessiPilot Backend"}"#;
    let health: HealthStatus = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "AccessiPilot Backend");
}

#[test]
fn delete_ack_decodes() {
    let json = r#"{"success":true,"id":"rec-123"}"#;
    let ack: DeleteAck = serde_json::from_str(json).unwrap();

    assert!(ack.success);
    assert_eq!(ack.id, "rec-123");
}
