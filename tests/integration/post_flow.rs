// tests/integration/post_flow.rs
//! The single-post flow: lookup by slug, missing-slug handling,
//! composed markdown with reading time.

use crate::common::{page, post, ScriptedSource};
use pretty_assertions::assert_eq;
use spacetraveling::{
    compose_missing_post, compose_post_markdown, BodyText, ContentGroup, ContentRepository,
    PageContent, Slug,
};

#[tokio::test]
async fn known_slug_renders_with_reading_time() {
    let mut featured = post("first-post", "First Post");
    featured.data.content = vec![ContentGroup {
        heading: "Intro".to_string(),
        body: vec![BodyText {
            text: "one two three".to_string(),
        }],
    }];

    let source = ScriptedSource::new(vec![spacetraveling::PostPage {
        results: vec![featured],
        next_page: None,
        total_results_size: Some(1),
    }]);

    let slug = Slug::parse("first-post").unwrap();
    let found = source.get_post_by_slug(&slug).await.unwrap();

    let rendered = compose_post_markdown(&found).unwrap();
    assert!(rendered.as_str().starts_with("# First Post\n"));
    assert!(rendered.as_str().contains("· 1 min read\n"));
    assert!(rendered.as_str().contains("## Intro\n"));
}

#[tokio::test]
async fn missing_slug_is_not_found_not_a_source_failure() {
    let source = ScriptedSource::new(vec![page(&["first-post"], None)]);
    let slug = Slug::parse("missing-slug").unwrap();

    let error = source.get_post_by_slug(&slug).await.unwrap_err();

    assert!(error.is_not_found());
    assert!(!error.is_source_unavailable());
    assert_eq!(error.to_string(), "No post found for slug 'missing-slug'");

    // The front-end maps the error to the distinct missing state and
    // renders it instead of crashing.
    let content = PageContent::Missing { slug: slug.clone() };
    match content {
        PageContent::Missing { slug } => {
            let rendered = compose_missing_post(&slug);
            assert!(rendered.as_str().starts_with("# Post not found\n"));
            assert!(rendered.as_str().contains("missing-slug"));
        }
        other => panic!("expected the missing state, got {:?}", other),
    }
}
