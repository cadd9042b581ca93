use super::*;

fn category() -> Category {
    Category {
        id: "cat-1".to_owned(),
        title: "Healthcare".to_owned(),
        description: "Clinics and hospitals".to_owned(),
        color: "#10b981".to_owned(),
        created_at: None,
    }
}

#[test]
fn new_draft_uses_default_color() {
    let draft = CategoryDraft::default();
    assert_eq!(draft.color, DEFAULT_CATEGORY_COLOR);
    assert_eq!(draft.editing, None);
    assert_eq!(draft.submit_label(), "Add Category");
}

#[test]
fn editing_draft_copies_category() {
    let draft = CategoryDraft::for_category(&category());
    assert_eq!(draft.editing.as_deref(), Some("cat-1"));
    assert_eq!(draft.title, "Healthcare");
    assert_eq!(draft.color, "#10b981");
    assert_eq!(draft.submit_label(), "Save Changes");
}

#[test]
fn default_color_passes_validation() {
    let draft = CategoryDraft { title: "Retail".to_owned(), ..CategoryDraft::default() };
    assert!(validate_category(&draft.title, &draft.description, &draft.color).is_ok());
}
