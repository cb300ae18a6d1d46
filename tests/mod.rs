// tests/mod.rs
//! Test suite organization for spacetraveling
//!
//! Unit tests cover individual components in isolation; integration
//! tests drive the pagination and rendering flows end to end against a
//! scripted content source.

#[cfg(test)]
pub mod unit;

#[cfg(test)]
pub mod integration;

/// Common test utilities and helpers
#[cfg(test)]
pub mod common {
    use async_trait::async_trait;
    use spacetraveling::{
        AppError, ContentRepository, PageCursor, Post, PostData, PostPage, Slug,
    };
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Creates a contentless post with the given slug and title.
    pub fn post(slug: &str, title: &str) -> Post {
        Post {
            slug: Slug::parse(slug).expect("Test slug should be valid"),
            first_publication_date: None,
            data: PostData {
                title: title.to_string(),
                subtitle: format!("All about {}", title),
                author: "Danilo Vieira".to_string(),
                banner: None,
                content: vec![],
            },
        }
    }

    /// Creates a page of posts named after their slugs, with an
    /// optional next-page cursor.
    pub fn page(slugs: &[&str], next: Option<&str>) -> PostPage {
        PostPage {
            results: slugs.iter().map(|slug| post(slug, slug)).collect(),
            next_page: next.map(cursor),
            total_results_size: None,
        }
    }

    /// Creates a test cursor.
    pub fn cursor(url: &str) -> PageCursor {
        PageCursor::parse(url).expect("Test cursor should be valid")
    }

    /// A scripted content source: hands out pre-built pages in order
    /// and counts every request, so tests can assert that an exhausted
    /// feed issues no fetches. Running out of scripted pages yields a
    /// source error, standing in for an unreachable source.
    pub struct ScriptedSource {
        pages: Mutex<VecDeque<PostPage>>,
        list_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn new(pages: Vec<PostPage>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                list_calls: AtomicUsize::new(0),
                fetch_calls: AtomicUsize::new(0),
            }
        }

        pub fn list_count(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn fetch_count(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }

        fn next_page(&self) -> Result<PostPage, AppError> {
            self.pages
                .lock()
                .expect("pages lock")
                .pop_front()
                .ok_or_else(|| {
                    AppError::MalformedResponse("scripted source ran out of pages".to_string())
                })
        }
    }

    #[async_trait]
    impl ContentRepository for ScriptedSource {
        async fn list_posts(&self, _page_size: u32) -> Result<PostPage, AppError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.next_page()
        }

        async fn fetch_page(&self, _cursor: &PageCursor) -> Result<PostPage, AppError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.next_page()
        }

        async fn get_post_by_slug(&self, slug: &Slug) -> Result<Post, AppError> {
            let pages = self.pages.lock().expect("pages lock");
            pages
                .iter()
                .flat_map(|page| page.results.iter())
                .find(|post| &post.slug == slug)
                .cloned()
                .ok_or_else(|| AppError::PostNotFound {
                    slug: slug.to_string(),
                })
        }
    }
}
