// src/analytics/mod.rs
//! Content measurement for posts: word counts and reading time.

use crate::constants::WORDS_PER_MINUTE;
use crate::model::{ContentGroup, Post};

/// Word count and reading time for a single post.
///
/// Use this for lightweight summaries shown to the user (e.g.
/// "1,234 words, 7 min read").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostMeasurement {
    pub words: usize,
    pub reading_minutes: usize,
}

/// Counts the space-separated tokens of a text.
///
/// Splitting on single spaces means the empty string still yields one
/// (empty) token, so a degenerate heading counts as one word, never zero.
pub fn token_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Counts the words of one content group: heading plus body paragraphs.
pub fn group_word_count(group: &ContentGroup) -> usize {
    let body_words: usize = group
        .body
        .iter()
        .map(|paragraph| token_count(&paragraph.text))
        .sum();

    token_count(&group.heading) + body_words
}

/// Counts all words in a post's content.
pub fn post_word_count(post: &Post) -> usize {
    post.data.content.iter().map(group_word_count).sum()
}

/// Estimated minutes to read a post, rounded up.
///
/// An absent post reads in zero minutes. No locale sensitivity, no
/// rounding beyond the ceiling.
pub fn reading_time_minutes(post: Option<&Post>) -> usize {
    match post {
        None => 0,
        Some(post) => post_word_count(post).div_ceil(WORDS_PER_MINUTE),
    }
}

/// Measures a post for user-facing completion stats.
pub fn measure_post(post: &Post) -> PostMeasurement {
    PostMeasurement {
        words: post_word_count(post),
        reading_minutes: reading_time_minutes(Some(post)),
    }
}
