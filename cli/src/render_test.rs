use serde_json::json;

use super::*;

fn post(value: serde_json::Value) -> BlogPost {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_list_prints_placeholder() {
    assert_eq!(render_list(&[]), "No blogs available yet.\n");
}

#[test]
fn list_shows_id_date_title_and_author() {
    let out = render_list(&[post(json!({
        "_id": "b1",
        "title": "Bail basics",
        "body": "What happens after arrest",
        "createby": { "name": "Asha" },
        "createdAt": "2024-03-14T10:20:30Z"
    }))]);
    assert_eq!(out, "[b1] 3/14/2024\n  Bail basics\n  by Asha\n  What happens after arrest\n\n");
}

#[test]
fn post_without_comments_prints_empty_message() {
    let out = render_post(&post(json!({ "_id": "b1", "title": "RTI", "body": "text" })));
    assert!(out.contains("by Anonymous on Unknown date"));
    assert!(out.contains("Comments (0)\n  No comments yet. Be the first to share your thoughts!"));
}

#[test]
fn post_lists_comments_in_order() {
    let out = render_post(&post(json!({
        "_id": "b1",
        "title": "RTI",
        "imageUrl": "https://cdn.example.com/rti.png",
        "comments": [
            { "body": "first", "createby": { "name": "A" } },
            { "body": " second ", "createby": null }
        ]
    })));
    assert!(out.contains("cover: https://cdn.example.com/rti.png"));
    let first = out.find("- A (Unknown date): first").unwrap();
    let second = out.find("- Anonymous (Unknown date): second").unwrap();
    assert!(first < second);
}
