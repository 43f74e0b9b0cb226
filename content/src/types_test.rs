use super::*;
use serde_json::json;

// =============================================================
// Author normalization
// =============================================================

#[test]
fn author_record_keeps_name() {
    assert_eq!(Author::resolve(&json!({ "name": "Priya" })), Author::named("Priya"));
}

#[test]
fn author_string_reference_is_anonymous() {
    assert_eq!(Author::resolve(&json!("65f0c2a1b3")), Author::anonymous());
}

#[test]
fn author_null_and_malformed_records_are_anonymous() {
    assert_eq!(Author::resolve(&Value::Null), Author::anonymous());
    assert_eq!(Author::resolve(&json!({})), Author::anonymous());
    assert_eq!(Author::resolve(&json!({ "name": 42 })), Author::anonymous());
    assert_eq!(Author::resolve(&json!({ "name": "   " })), Author::anonymous());
    assert_eq!(Author::resolve(&json!(["Priya"])), Author::anonymous());
}

#[test]
fn author_name_is_trimmed() {
    assert_eq!(Author::resolve(&json!({ "name": "  Meera " })), Author::named("Meera"));
}

// =============================================================
// BlogPost decoding
// =============================================================

#[test]
fn blog_post_decodes_upstream_shape() {
    let post: BlogPost = serde_json::from_value(json!({
        "_id": "b1",
        "title": "Tenancy basics",
        "body": "What every renter should know.",
        "imageUrl": "https://cdn.example/cover.png",
        "createby": { "_id": "u1", "name": "Arjun" },
        "createdAt": "2024-03-14T10:20:30.000Z",
        "comments": [
            { "_id": "c1", "body": "Helpful", "createby": "u2", "createdAt": "2024-03-15T08:00:00.000Z" }
        ],
        "__v": 0
    }))
    .unwrap();

    assert_eq!(post.id, "b1");
    assert_eq!(post.image_url.as_deref(), Some("https://cdn.example/cover.png"));
    assert_eq!(post.author.name, "Arjun");
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].author.name, ANONYMOUS_AUTHOR);
}

#[test]
fn blog_post_with_string_author_renders_anonymous() {
    let post: BlogPost = serde_json::from_value(json!({
        "_id": "b2",
        "title": "t",
        "body": "b",
        "createby": "65f0c2a1b3"
    }))
    .unwrap();
    assert_eq!(post.author.name, "Anonymous");
}

#[test]
fn blog_post_missing_optional_fields_default() {
    let post: BlogPost = serde_json::from_value(json!({ "_id": "b3" })).unwrap();
    assert!(post.title.is_empty());
    assert!(post.image_url.is_none());
    assert!(post.created_at.is_none());
    assert!(post.comments.is_empty());
    assert_eq!(post.author, Author::anonymous());
}

#[test]
fn blog_post_null_text_fields_become_empty() {
    let post: BlogPost = serde_json::from_value(json!({
        "_id": "b5",
        "title": null,
        "body": null,
        "comments": [{ "_id": "c1", "body": null, "createby": { "name": "A" } }]
    }))
    .unwrap();
    assert_eq!(post.title, "");
    assert_eq!(post.body, "");
    assert_eq!(post.comments[0].body, "");
    assert_eq!(post.comments[0].author.name, "A");
}

#[test]
fn blog_post_skips_unpopulated_comment_references() {
    let post: BlogPost = serde_json::from_value(json!({
        "_id": "b6",
        "title": "T",
        "body": "B",
        "createby": "u1",
        "comments": ["65f0c2a1", null, 7, { "body": "kept" }, { "body": 42 }]
    }))
    .unwrap();
    let bodies: Vec<&str> = post.comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["kept"]);
}

#[test]
fn blog_list_survives_one_loosely_shaped_post() {
    let posts: Vec<BlogPost> = serde_json::from_value(json!([
        { "_id": "b1", "title": "Tenancy basics", "body": "B", "createby": { "name": "Arjun" } },
        { "_id": "b2", "title": null, "body": "B", "createby": "u1", "comments": ["65f0c2a1"] },
        { "_id": "b3", "title": "Consumer rights", "comments": null }
    ]))
    .unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Tenancy basics", "", "Consumer rights"]);
    assert!(posts[1].comments.is_empty());
    assert_eq!(posts[1].author, Author::anonymous());
}

#[test]
fn blog_post_null_comments_become_empty() {
    let post: BlogPost = serde_json::from_value(json!({ "_id": "b4", "comments": null })).unwrap();
    assert!(post.comments.is_empty());
}

#[test]
fn blog_post_requires_id() {
    assert!(serde_json::from_value::<BlogPost>(json!({ "title": "no id" })).is_err());
}

// =============================================================
// Comment append
// =============================================================

#[test]
fn append_comment_goes_last_with_local_author() {
    let mut post: BlogPost = serde_json::from_value(json!({
        "_id": "b1",
        "comments": [
            { "body": "first", "createby": { "name": "A" } },
            { "body": "second", "createby": { "name": "B" } }
        ]
    }))
    .unwrap();
    let created: Comment = serde_json::from_value(json!({
        "_id": "c9",
        "body": "third",
        "createby": "u-remote",
        "createdAt": "2024-05-01T00:00:00Z"
    }))
    .unwrap();

    post.append_comment(created, "Meera Iyer");

    let bodies: Vec<&str> = post.comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["first", "second", "third"]);
    assert_eq!(post.comments[2].author.name, "Meera Iyer");
    assert_eq!(post.comments[2].id.as_deref(), Some("c9"));
}

#[test]
fn new_comment_serializes_body_only() {
    let payload = serde_json::to_value(NewComment { body: "Nice".to_owned() }).unwrap();
    assert_eq!(payload, json!({ "body": "Nice" }));
}

// =============================================================
// SessionUser display name
// =============================================================

fn user(first: Option<&str>, last: Option<&str>, full: Option<&str>) -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        full_name: full.map(str::to_owned),
    }
}

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(user(Some("Meera"), Some("Iyer"), Some("Dr. Meera Iyer")).display_name(), "Dr. Meera Iyer");
}

#[test]
fn display_name_ignores_last_name() {
    assert_eq!(user(Some("Meera"), Some("Iyer"), None).display_name(), "Meera");
}

#[test]
fn display_name_falls_back_to_first_then_user() {
    assert_eq!(user(Some("Meera"), None, Some("  ")).display_name(), "Meera");
    assert_eq!(user(None, Some("Iyer"), None).display_name(), FALLBACK_USER_NAME);
    assert_eq!(user(None, None, None).display_name(), "User");
}
