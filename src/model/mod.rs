mod post;

pub use post::{Banner, BodyText, ContentGroup, Post, PostData, PostPage};
