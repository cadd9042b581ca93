use super::*;

#[test]
fn lead_paths() {
    assert_eq!(lead_page(3), "/lead/getalllead?page=3");
    assert_eq!(lead_page(0), "/lead/getalllead?page=1");
    assert_eq!(lead("abc"), "/lead/getlead/abc");
    assert_eq!(update_lead("abc"), "/lead/updateleads/abc");
    assert_eq!(delete_lead("abc"), "/lead/deletelead/abc");
    assert_eq!(follow_up("abc"), "/lead/abc/follow-up");
    assert_eq!(category("c9"), "/category/c9");
}

#[test]
fn join_normalizes_slashes() {
    assert_eq!(join(DEFAULT_API_BASE_URL, CATEGORIES), "https://api.lead.indibus.net/api/v1/category/");
    assert_eq!(join("http://localhost:8080/api/v1/", "/user/current"), "http://localhost:8080/api/v1/user/current");
    assert_eq!(join("http://h", "lead/assign"), "http://h/lead/assign");
}
