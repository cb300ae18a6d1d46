// tests/unit/feed.rs
//! Unit tests for the pagination state machine.

use crate::common::{cursor, page, ScriptedSource};
use pretty_assertions::assert_eq;
use spacetraveling::{FeedState, LoadOutcome, PostFeed};

fn slugs_of(feed: &PostFeed) -> Vec<String> {
    feed.posts()
        .iter()
        .map(|post| post.slug.to_string())
        .collect()
}

#[test]
fn starts_idle_when_initial_page_has_cursor() {
    let feed = PostFeed::new(page(&["a", "b"], Some("https://x/page2")));

    assert_eq!(feed.state(), FeedState::Idle);
    assert!(!feed.is_exhausted());
    assert_eq!(feed.next_page(), Some(&cursor("https://x/page2")));
}

#[test]
fn starts_exhausted_when_initial_page_has_no_cursor() {
    let feed = PostFeed::new(page(&["a"], None));

    assert_eq!(feed.state(), FeedState::Exhausted);
    assert!(feed.is_exhausted());
    assert_eq!(feed.next_page(), None);
}

#[tokio::test]
async fn load_more_appends_and_replaces_cursor() {
    let source = ScriptedSource::new(vec![page(&["c"], None)]);
    let mut feed = PostFeed::new(page(&["a", "b"], Some("https://x/page2")));

    let outcome = feed.load_more(&source).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded { appended: 1 });
    assert_eq!(slugs_of(&feed), vec!["a", "b", "c"]);
    assert_eq!(feed.state(), FeedState::Exhausted);
    assert_eq!(feed.next_page(), None);
}

#[tokio::test]
async fn exhausted_load_more_is_a_noop_and_issues_no_fetch() {
    let source = ScriptedSource::new(vec![page(&["never-served"], None)]);
    let mut feed = PostFeed::new(page(&["a"], None));

    let outcome = feed.load_more(&source).await.unwrap();

    assert_eq!(outcome, LoadOutcome::AlreadyExhausted);
    assert_eq!(slugs_of(&feed), vec!["a"]);
    assert_eq!(feed.next_page(), None);
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn accumulation_preserves_order_and_keeps_duplicates() {
    let source = ScriptedSource::new(vec![
        page(&["b", "c"], Some("https://x/page3")),
        page(&["c", "d"], None),
    ]);
    let mut feed = PostFeed::new(page(&["a", "b"], Some("https://x/page2")));

    feed.load_more(&source).await.unwrap();
    feed.load_more(&source).await.unwrap();

    // Concatenation in call order; the repeated "b" and "c" stay.
    assert_eq!(slugs_of(&feed), vec!["a", "b", "b", "c", "c", "d"]);
    assert_eq!(feed.state(), FeedState::Exhausted);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn failed_fetch_leaves_feed_unchanged() {
    // No scripted pages: every fetch fails like an unreachable source.
    let source = ScriptedSource::new(vec![]);
    let mut feed = PostFeed::new(page(&["a"], Some("https://x/page2")));

    let error = feed.load_more(&source).await.unwrap_err();

    assert!(error.is_source_unavailable());
    assert_eq!(slugs_of(&feed), vec!["a"]);
    assert_eq!(feed.state(), FeedState::Idle);
    assert_eq!(feed.next_page(), Some(&cursor("https://x/page2")));
}

#[tokio::test]
async fn fetch_entire_feed_drains_the_cursor_chain() {
    let source = ScriptedSource::new(vec![
        page(&["a", "b"], Some("https://x/page2")),
        page(&["c"], Some("https://x/page3")),
        page(&["d"], None),
    ]);

    let feed = spacetraveling::fetch_entire_feed(&source, 10, None)
        .await
        .unwrap();

    assert_eq!(slugs_of(&feed), vec!["a", "b", "c", "d"]);
    assert_eq!(feed.state(), FeedState::Exhausted);
    assert_eq!(source.list_count(), 1);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn fetch_entire_feed_respects_the_page_cap() {
    let source = ScriptedSource::new(vec![
        page(&["a"], Some("https://x/page2")),
        page(&["b"], Some("https://x/page3")),
        page(&["c"], None),
    ]);

    let feed = spacetraveling::fetch_entire_feed(&source, 10, Some(2))
        .await
        .unwrap();

    assert_eq!(slugs_of(&feed), vec!["a", "b"]);
    assert_eq!(feed.state(), FeedState::Idle);
    assert_eq!(source.fetch_count(), 1);
}
