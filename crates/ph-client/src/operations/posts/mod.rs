mod runner;
mod service;
mod types;

pub use runner::run;
pub use service::{PostsFetch, PostsFetchRequest, PostsQuery, posts_query};
pub use types::{Post, PostField};
