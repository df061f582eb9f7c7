use salon_booking_api::dto::{
    appointments::{CreateAppointmentRequest, UpdateAppointmentRequest},
    contact::ContactRequest,
};
use validator::Validate;

#[test]
fn null_clears_and_absent_keeps() {
    let cleared: UpdateAppointmentRequest =
        serde_json::from_value(serde_json::json!({ "stylist_id": null, "comments": null }))
            .expect("deserialize");
    assert_eq!(cleared.stylist_id, Some(None));
    assert_eq!(cleared.comments, Some(None));

    let untouched: UpdateAppointmentRequest =
        serde_json::from_value(serde_json::json!({ "status": "confirmed" })).expect("deserialize");
    assert_eq!(untouched.stylist_id, None);
    assert_eq!(untouched.comments, None);

    let set: UpdateAppointmentRequest =
        serde_json::from_value(serde_json::json!({ "stylist_id": 2, "comments": "late" }))
            .expect("deserialize");
    assert_eq!(set.stylist_id, Some(Some(2)));
    assert_eq!(set.comments, Some(Some("late".to_string())));
}

#[test]
fn whitespace_only_customer_fields_fail_validation() {
    let request: CreateAppointmentRequest = serde_json::from_value(serde_json::json!({
        "service_id": 1,
        "first_name": "   ",
        "last_name": " ",
        "email": "ana@example.com",
        "phone": "  ",
        "date": "2030-01-05",
        "time": "10:00"
    }))
    .expect("deserialize");

    let errors = request.validate().expect_err("blank fields rejected");
    let fields = errors.field_errors();
    assert!(fields.contains_key("first_name"));
    assert!(fields.contains_key("last_name"));
    assert!(fields.contains_key("phone"));
}

#[test]
fn blank_update_fields_fail_validation() {
    let request = UpdateAppointmentRequest {
        first_name: Some("\t".into()),
        ..Default::default()
    };
    assert!(request.validate().is_err());

    let request = UpdateAppointmentRequest {
        first_name: Some(" Ana ".into()),
        ..Default::default()
    };
    assert!(request.validate().is_ok());
}

#[test]
fn blank_contact_message_fails_validation() {
    let request = ContactRequest {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        subject: "Hours".into(),
        message: "  \n ".into(),
    };
    let errors = request.validate().expect_err("blank message rejected");
    assert!(errors.field_errors().contains_key("message"));
}
