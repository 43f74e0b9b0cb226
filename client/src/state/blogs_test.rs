use super::*;
use serde_json::json;

fn post(id: &str) -> BlogPost {
    serde_json::from_value(json!({ "_id": id, "title": format!("Post {id}"), "body": "b" })).unwrap()
}

#[test]
fn blogs_state_defaults() {
    let s = BlogsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.load_failed);
}

#[test]
fn loading_renders_fixed_skeletons() {
    assert_eq!(BlogsState::loading().view(false), BlogListView::Loading { skeletons: 6 });
}

#[test]
fn empty_result_signed_out_links_to_sign_in() {
    let mut s = BlogsState::loading();
    s.apply(Ok(Vec::new()));
    let BlogListView::Empty { cta, load_failed } = s.view(false) else {
        panic!("expected empty state");
    };
    assert_eq!(cta.href, "/sign-in");
    assert_eq!(cta.label, "Sign In to Write");
    assert!(cta.external);
    assert!(!load_failed);
}

#[test]
fn empty_result_signed_in_links_to_form() {
    let mut s = BlogsState::loading();
    s.apply(Ok(Vec::new()));
    let BlogListView::Empty { cta, .. } = s.view(true) else {
        panic!("expected empty state");
    };
    assert_eq!(cta.href, "/add-blog");
    assert_eq!(cta.label, "Write the First Blog");
    assert!(!cta.external);
}

#[test]
fn failure_falls_back_to_empty_state_with_notice() {
    let mut s = BlogsState::loading();
    s.apply(Err(ApiError::NoResponse));
    assert!(!s.loading);
    assert_eq!(
        s.view(true),
        BlogListView::Empty { cta: empty_cta(true), load_failed: true }
    );
}

#[test]
fn posts_render_as_cards_in_order() {
    let mut s = BlogsState::loading();
    s.apply(Ok(vec![post("a"), post("b")]));
    let BlogListView::Cards(items) = s.view(false) else {
        panic!("expected cards");
    };
    let ids: Vec<&str> = items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn write_cta_depends_on_sign_in() {
    assert_eq!(write_cta(true).label, "Write a Blog");
    assert_eq!(write_cta(true).href, "/add-blog");
    assert_eq!(write_cta(false).href, "/sign-in");
}
