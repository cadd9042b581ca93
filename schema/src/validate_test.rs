use super::*;
use time::macros::date;

fn filled_form() -> LeadForm {
    LeadForm {
        name: "John Smith".to_owned(),
        email: "john@techcorp.com".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        category: "c1".to_owned(),
        position: "CTO".to_owned(),
        lead_source: "Website".to_owned(),
        notes: "Met at expo".to_owned(),
        priority: Priority::High,
        status: LeadStatus::New,
        follow_up_dates: Vec::new(),
        last_contact: None,
    }
}

// =============================================================
// Field validators
// =============================================================

#[test]
fn email_pattern() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("@c.com"));
}

#[test]
fn phone_pattern_ignores_whitespace() {
    assert!(is_valid_phone("+91 98765 43210"));
    assert!(is_valid_phone("9876543210"));
    assert!(!is_valid_phone("0123456"));
    assert!(!is_valid_phone("98-76"));
    assert!(!is_valid_phone("12345678901234567"));
}

// =============================================================
// Lead form
// =============================================================

#[test]
fn complete_create_form_is_valid() {
    assert_eq!(filled_form().validate(FormMode::Create), Ok(()));
}

#[test]
fn empty_create_form_reports_required_fields() {
    let errors = LeadForm::default().validate(FormMode::Create).unwrap_err();
    assert_eq!(errors.get("name"), Some("Full name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("category"), Some("Please select a category"));
    assert_eq!(errors.get("phoneNumber"), None);
    assert_eq!(errors.len(), 3);
}

#[test]
fn short_name_bad_email_and_bad_phone() {
    let form = LeadForm {
        name: " J ".to_owned(),
        email: "john@".to_owned(),
        phone: "abc".to_owned(),
        ..filled_form()
    };
    let errors = form.validate(FormMode::Create).unwrap_err();
    assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert_eq!(errors.get("phoneNumber"), Some("Please enter a valid phone number"));
}

#[test]
fn update_mode_skips_locked_email() {
    let form = LeadForm { email: String::new(), ..filled_form() };
    assert_eq!(form.validate(FormMode::Update), Ok(()));
    assert!(form.validate(FormMode::Create).is_err());
}

#[test]
fn clearing_a_field_error() {
    let mut errors = LeadForm::default().validate(FormMode::Create).unwrap_err();
    errors.clear("name");
    assert_eq!(errors.get("name"), None);
    assert_eq!(errors.len(), 2);
}

#[test]
fn create_multipart_fields_include_email_and_normalized_phone() {
    let fields = filled_form().multipart_fields(FormMode::Create);
    let get = |key: &str| fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());
    assert_eq!(get("email"), Some("john@techcorp.com"));
    assert_eq!(get("phoneNumber"), Some("+919876543210"));
    assert_eq!(get("priority"), Some("high"));
    assert_eq!(get("status"), Some("new"));
    assert_eq!(get("followUpDates"), None);
}

#[test]
fn update_multipart_fields_omit_email_and_encode_dates() {
    let form = LeadForm {
        follow_up_dates: vec![date!(2025 - 07 - 20), date!(2025 - 07 - 22)],
        last_contact: Some(date!(2025 - 07 - 01)),
        ..filled_form()
    };
    let fields = form.multipart_fields(FormMode::Update);
    let get = |key: &str| fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone());
    assert_eq!(get("email"), None);
    assert_eq!(get("lastContact").as_deref(), Some("2025-07-01T00:00:00.000Z"));
    assert_eq!(
        get("followUpDates").as_deref(),
        Some(r#"["2025-07-20T00:00:00.000Z","2025-07-22T00:00:00.000Z"]"#)
    );
}

#[test]
fn follow_up_list_parses_and_formats() {
    let dates = parse_follow_up_list(" 2025-07-20, 2025-07-22 ,").unwrap();
    assert_eq!(dates, vec![date!(2025 - 07 - 20), date!(2025 - 07 - 22)]);
    assert_eq!(format_follow_up_list(&dates), "2025-07-20, 2025-07-22");
    assert!(parse_follow_up_list("2025-07-20, soon").is_err());
    assert_eq!(parse_follow_up_list("").unwrap(), Vec::new());
}

// =============================================================
// Documents
// =============================================================

#[test]
fn document_limits() {
    let pdf = DocumentMeta { file_name: "deck.pdf".to_owned(), size: 1024, mime: "application/pdf".to_owned() };
    assert_eq!(validate_document(&pdf), Ok(()));

    let big = DocumentMeta { size: MAX_DOCUMENT_BYTES + 1, ..pdf.clone() };
    assert_eq!(validate_document(&big), Err("File size must be less than 5MB"));

    let png = DocumentMeta { mime: "image/png".to_owned(), ..pdf };
    assert_eq!(validate_document(&png), Err("Please upload a PDF, DOC, or XLS file"));
}

#[test]
fn mime_from_extension() {
    assert_eq!(mime_for_file_name("Q3.XLSX"), ALLOWED_DOCUMENT_TYPES[4]);
    assert_eq!(mime_for_file_name("notes.doc"), "application/msword");
    assert_eq!(mime_for_file_name("leads.csv"), "text/csv");
    assert_eq!(mime_for_file_name("README"), "application/octet-stream");
}

// =============================================================
// Dialogs + auth
// =============================================================

#[test]
fn follow_up_dialog_rejects_past_dates_and_blank_conclusion() {
    let today = date!(2025 - 07 - 15);
    let errors = validate_follow_up("2025-07-14", "  ", today).unwrap_err();
    assert_eq!(errors.get("date"), Some("Follow-up date cannot be in the past"));
    assert_eq!(errors.get("conclusion"), Some("Conclusion is required"));

    let errors = validate_follow_up("", "ok", today).unwrap_err();
    assert_eq!(errors.get("date"), Some("Follow-up date is required"));

    let body = validate_follow_up("2025-07-15", " Call Monday ", today).unwrap();
    assert_eq!(body.follow_up_date, "2025-07-15");
    assert_eq!(body.conclusion, "Call Monday");
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("", "pw"), Err("Email and Password are required"));
    assert_eq!(validate_login("a@b.co", ""), Err("Email and Password are required"));
    let body = validate_login(" a@b.co ", "pw").unwrap();
    assert_eq!(body.email, "a@b.co");
}

#[test]
fn register_drops_blank_optional_fields() {
    let body = validate_register("w@shop.in", "secret", " Priya ", "", "  ").unwrap();
    assert_eq!(body.first_name.as_deref(), Some("Priya"));
    assert_eq!(body.last_name, None);
    assert_eq!(body.avatar, None);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "w@shop.in", "password": "secret", "firstName": "Priya" })
    );
    assert_eq!(validate_register("nope", "x", "", "", ""), Err("Please enter a valid email address"));
}

#[test]
fn category_editor_checks_title_and_color() {
    let errors = validate_category("", "", "blue").unwrap_err();
    assert!(errors.get("title").is_some());
    assert!(errors.get("color").is_some());

    let body = validate_category(" Retail ", "Walk-in stores", "#4F46E5").unwrap();
    assert_eq!(body.title, "Retail");
    assert_eq!(body.color, "#4f46e5");
}
