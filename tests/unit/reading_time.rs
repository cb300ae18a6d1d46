// tests/unit/reading_time.rs
//! Unit tests for the reading-time estimator.

use pretty_assertions::assert_eq;
use spacetraveling::{
    measure_post, post_word_count, reading_time_minutes, token_count, BodyText, ContentGroup,
    Post, PostData, Slug,
};

/// Builds a post whose single group carries the given heading and body.
fn post_with(heading: &str, body: &[&str]) -> Post {
    Post {
        slug: Slug::parse("estimated").expect("Test slug should be valid"),
        first_publication_date: None,
        data: PostData {
            title: "Estimated".to_string(),
            subtitle: String::new(),
            author: "Tester".to_string(),
            banner: None,
            content: vec![ContentGroup {
                heading: heading.to_string(),
                body: body
                    .iter()
                    .map(|text| BodyText {
                        text: text.to_string(),
                    })
                    .collect(),
            }],
        },
    }
}

/// Builds a body text with exactly `n` single-letter words.
fn words(n: usize) -> String {
    vec!["w"; n].join(" ")
}

#[test]
fn intro_heading_plus_three_body_words_reads_in_one_minute() {
    let post = post_with("Intro", &["one two three"]);

    assert_eq!(post_word_count(&post), 4);
    assert_eq!(reading_time_minutes(Some(&post)), 1);
}

#[test]
fn absent_post_estimates_zero() {
    assert_eq!(reading_time_minutes(None), 0);
}

#[test]
fn empty_texts_count_as_single_tokens() {
    // Splitting "" yields one empty token; an empty heading with one
    // empty paragraph therefore counts two words.
    assert_eq!(token_count(""), 1);

    let post = post_with("", &[""]);
    assert_eq!(post_word_count(&post), 2);
    assert_eq!(reading_time_minutes(Some(&post)), 1);
}

#[test]
fn estimate_rounds_up_at_page_boundaries() {
    // 1 heading word + 199 body words = 200 exactly
    let exact = post_with("w", &[&words(199)]);
    assert_eq!(reading_time_minutes(Some(&exact)), 1);

    // One word past the boundary rounds up
    let over = post_with("w", &[&words(200)]);
    assert_eq!(reading_time_minutes(Some(&over)), 2);

    let far = post_with("w", &[&words(400)]);
    assert_eq!(reading_time_minutes(Some(&far)), 3);
}

#[test]
fn estimate_is_monotonic_in_word_count() {
    let mut previous = 0;
    for n in [0, 1, 50, 199, 200, 201, 999, 1000] {
        let post = post_with("heading words here", &[&words(n)]);
        let minutes = reading_time_minutes(Some(&post));
        assert!(
            minutes >= previous,
            "estimate dropped from {} to {} at {} body words",
            previous,
            minutes,
            n
        );
        previous = minutes;
    }
}

#[test]
fn measure_post_reports_words_and_minutes() {
    let post = post_with("Intro", &[&words(395)]);
    let stats = measure_post(&post);

    assert_eq!(stats.words, 396);
    assert_eq!(stats.reading_minutes, 2);
}
