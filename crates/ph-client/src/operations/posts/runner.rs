use tower::{Service, ServiceExt};

use crate::{ProductHuntClient, ProductHuntClientError};

use super::service::{PostsFetch, PostsFetchRequest};
use super::types::Post;

/// Fetches the default page of posts from Product Hunt, in the order Product Hunt returns them
pub async fn run(client: &ProductHuntClient) -> Result<Vec<Post>, ProductHuntClientError> {
    let mut service = PostsFetch::new(client.graphql_service()?);
    let service = service.ready().await?;
    let posts = service.call(PostsFetchRequest).await?;
    tracing::debug!(count = posts.len(), "fetched posts");
    Ok(posts)
}
