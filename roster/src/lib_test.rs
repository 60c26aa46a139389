use super::*;

fn sample_record() -> StudentRecord {
    StudentRecord {
        student_id: "S-042".to_owned(),
        username: "ada".to_owned(),
        status: Presence::Active,
        active_time: "00:12:05".to_owned(),
    }
}

// =============================================================================
// StudentRecord
// =============================================================================

#[test]
fn student_record_uses_wire_field_names() {
    let json = serde_json::to_value(sample_record()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "student_id": "S-042",
            "username": "ada",
            "status": "active",
            "active_time": "00:12:05"
        })
    );
}

#[test]
fn student_record_parses_idle_status() {
    let raw = r#"{"student_id":"7","username":"bo","status":"idle","active_time":"01:00:00"}"#;
    let record: StudentRecord = serde_json::from_str(raw).expect("parse");
    assert_eq!(record.status, Presence::Idle);
}

#[test]
fn student_record_rejects_unknown_status() {
    let raw = r#"{"student_id":"7","username":"bo","status":"away","active_time":"01:00:00"}"#;
    assert!(serde_json::from_str::<StudentRecord>(raw).is_err());
}

#[test]
fn cells_follow_column_order() {
    assert_eq!(sample_record().cells(), ["S-042", "ada", "active", "00:12:05"]);
}

// =============================================================================
// format_active_time
// =============================================================================

#[test]
fn format_active_time_pads_components() {
    assert_eq!(format_active_time(0), "00:00:00");
    assert_eq!(format_active_time(61), "00:01:01");
    assert_eq!(format_active_time(3_725), "01:02:05");
}

#[test]
fn format_active_time_does_not_cap_hours() {
    assert_eq!(format_active_time(100 * 3600), "100:00:00");
}

#[test]
fn format_active_time_clamps_negative() {
    assert_eq!(format_active_time(-30), "00:00:00");
}

// =============================================================================
// MessageReply
// =============================================================================

#[test]
fn display_text_prefers_message() {
    let reply = MessageReply { message: Some("ok".to_owned()), error: Some("bad".to_owned()) };
    assert_eq!(reply.display_text(), "ok");
}

#[test]
fn display_text_falls_back_to_error() {
    let reply: MessageReply = serde_json::from_str(r#"{"error":"Unauthorized"}"#).expect("parse");
    assert_eq!(reply.display_text(), "Unauthorized");
}

#[test]
fn display_text_handles_empty_body() {
    let reply: MessageReply = serde_json::from_str("{}").expect("parse");
    assert_eq!(reply.display_text(), "No response message");
}

#[test]
fn message_reply_omits_absent_fields() {
    let json = serde_json::to_string(&MessageReply::message("Session started successfully!")).expect("serialize");
    assert_eq!(json, r#"{"message":"Session started successfully!"}"#);
}

// =============================================================================
// Role / Me
// =============================================================================

#[test]
fn role_parse_matches_as_str() {
    for role in [Role::Admin, Role::Student] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("teacher"), None);
}

#[test]
fn me_skips_student_fields_for_admin() {
    let me = Me { role: Role::Admin, username: "root".to_owned(), student_id: None, session_active: Some(true) };
    let json = serde_json::to_value(&me).expect("serialize");
    assert_eq!(json, serde_json::json!({ "role": "admin", "username": "root", "session_active": true }));
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn theme_parse_is_exact() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn next_from_attribute_flips_dark_to_light() {
    assert_eq!(Theme::next_from_attribute(Some("dark")), Theme::Light);
}

#[test]
fn next_from_attribute_treats_anything_else_as_light() {
    assert_eq!(Theme::next_from_attribute(None), Theme::Dark);
    assert_eq!(Theme::next_from_attribute(Some("light")), Theme::Dark);
    assert_eq!(Theme::next_from_attribute(Some("sepia")), Theme::Dark);
}

// =============================================================================
// FaceImage
// =============================================================================

#[test]
fn face_image_parses_jpeg_capture() {
    let url = format!("{FACE_IMAGE_PREFIX}/9j/4AAQ");
    let image = FaceImage::parse(&url).expect("valid capture");
    assert_eq!(image.mime, "image/jpeg");
    assert_eq!(image.bytes, vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]);
}

#[test]
fn face_image_rejects_blank_canvas_output() {
    assert_eq!(FaceImage::parse("data:,"), Err(FaceImageError::NotBase64));
}

#[test]
fn face_image_rejects_empty_input() {
    assert_eq!(FaceImage::parse("   "), Err(FaceImageError::Empty));
}

#[test]
fn face_image_rejects_plain_text() {
    assert_eq!(FaceImage::parse("hello"), Err(FaceImageError::NotDataUrl));
}

#[test]
fn face_image_rejects_non_image_mime() {
    assert_eq!(
        FaceImage::parse("data:text/plain;base64,aGk="),
        Err(FaceImageError::UnsupportedType("text/plain".to_owned()))
    );
}

#[test]
fn face_image_rejects_empty_payload() {
    assert_eq!(FaceImage::parse(FACE_IMAGE_PREFIX), Err(FaceImageError::EmptyPayload));
}

#[test]
fn face_image_rejects_bad_base64() {
    assert!(matches!(
        FaceImage::parse("data:image/png;base64,@@@"),
        Err(FaceImageError::InvalidPayload(_))
    ));
}
