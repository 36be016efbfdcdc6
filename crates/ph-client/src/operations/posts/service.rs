use std::{future::Future, pin::Pin};

use graphql_client::{GraphQLQuery, QueryBody};
use ph_graphql::{GraphQLRequest, GraphQLServiceError};
use tower::Service;

use crate::ProductHuntClientError;

use super::types::Post;

/// The `posts` query. Every post field is always requested; callers pick columns afterwards.
pub struct PostsQuery;

/// Request and response shapes of [`PostsQuery`]
pub mod posts_query {
    use serde::{Deserialize, Serialize};

    use super::Post;

    /// The query document sent to Product Hunt
    pub const QUERY: &str = "query PostsQuery { posts { edges { node { id name createdAt featuredAt url tagline description } } } }";
    /// The operation name of [`QUERY`]
    pub const OPERATION_NAME: &str = "PostsQuery";

    /// The query takes no variables
    #[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
    pub struct Variables {}

    /// The `data` member of the response
    #[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
    pub struct ResponseData {
        /// The first page of posts
        #[serde(default)]
        pub posts: Option<PostsConnection>,
    }

    /// A page of posts
    #[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
    pub struct PostsConnection {
        /// The posts on this page
        #[serde(default)]
        pub edges: Vec<PostEdge>,
    }

    /// One post on a page
    #[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
    pub struct PostEdge {
        /// The post itself
        #[serde(default)]
        pub node: Option<Post>,
    }
}

impl GraphQLQuery for PostsQuery {
    type Variables = posts_query::Variables;
    type ResponseData = posts_query::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: posts_query::QUERY,
            operation_name: posts_query::OPERATION_NAME,
        }
    }
}

/// Asks for the default page of posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostsFetchRequest;

/// [`Service`] that runs [`PostsQuery`] and flattens its edges into [`Post`]s
#[derive(Clone)]
pub struct PostsFetch<S: Clone> {
    inner: S,
}

impl<S: Clone> PostsFetch<S> {
    /// Wraps a GraphQL service
    pub const fn new(inner: S) -> PostsFetch<S> {
        PostsFetch { inner }
    }
}

impl<S, Fut> Service<PostsFetchRequest> for PostsFetch<S>
where
    S: Service<
            GraphQLRequest<PostsQuery>,
            Response = posts_query::ResponseData,
            Error = GraphQLServiceError<posts_query::ResponseData>,
            Future = Fut,
        > + Clone
        + Send
        + 'static,
    Fut: Future<Output = Result<S::Response, S::Error>> + Send,
{
    type Response = Vec<Post>;
    type Error = ProductHuntClientError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<PostsQuery>>::poll_ready(&mut self.inner, cx)
            .map_err(ProductHuntClientError::from)
    }

    fn call(&mut self, _req: PostsFetchRequest) -> Self::Future {
        let cloned = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, cloned);
        let fut = async move {
            let response_data = match inner
                .call(GraphQLRequest::new(posts_query::Variables::default()))
                .await
            {
                Ok(response_data) => response_data,
                // posts that came back are still usable
                Err(GraphQLServiceError::PartialError { data, errors }) => {
                    for error in &errors {
                        tracing::warn!(message = %error.message, "Product Hunt returned posts with an error");
                    }
                    data
                }
                Err(err) => return Err(ProductHuntClientError::from(err)),
            };
            Ok(get_posts_from_response_data(response_data))
        };
        Box::pin(fut)
    }
}

/// Missing `posts`, missing `edges` and null nodes all count as "nothing there";
/// a null node still yields a post so row counts follow the edge count.
fn get_posts_from_response_data(response_data: posts_query::ResponseData) -> Vec<Post> {
    response_data
        .posts
        .map(|posts| posts.edges)
        .unwrap_or_default()
        .into_iter()
        .map(|edge| edge.node.unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::operations::posts::PostField;

    #[test]
    fn query_requests_every_post_field() {
        let body = PostsQuery::build_query(posts_query::Variables::default());
        for field in PostField::ALL {
            assert!(
                body.query
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .any(|word| word == field.remote_name()),
                "{} is missing from the query",
                field.remote_name()
            );
        }
        assert_eq!(
            serde_json::to_value(&body).unwrap()["variables"],
            json!({})
        );
    }

    #[test]
    fn get_posts_from_response_data_keeps_order() {
        let json_response = json!({
            "posts": {
                "edges": [
                    { "node": { "id": "2", "name": "Second", "tagline": "the second one" } },
                    { "node": { "id": "1", "name": "First", "description": null } },
                ]
            }
        });
        let data: posts_query::ResponseData = serde_json::from_value(json_response).unwrap();
        let posts = get_posts_from_response_data(data);

        assert_eq!(
            posts,
            vec![
                Post {
                    id: Some(json!("2")),
                    name: Some(json!("Second")),
                    tagline: Some(json!("the second one")),
                    ..Post::default()
                },
                Post {
                    id: Some(json!("1")),
                    name: Some(json!("First")),
                    ..Post::default()
                },
            ]
        );
    }

    #[rstest]
    #[case::no_posts(json!({}))]
    #[case::null_posts(json!({ "posts": null }))]
    #[case::no_edges(json!({ "posts": {} }))]
    #[case::empty_edges(json!({ "posts": { "edges": [] } }))]
    fn get_posts_from_response_data_handles_empty_pages(#[case] json_response: Value) {
        let data: posts_query::ResponseData = serde_json::from_value(json_response).unwrap();
        assert!(get_posts_from_response_data(data).is_empty());
    }

    #[test]
    fn null_nodes_become_empty_posts() {
        let data: posts_query::ResponseData =
            serde_json::from_value(json!({ "posts": { "edges": [{ "node": null }] } })).unwrap();
        assert_eq!(get_posts_from_response_data(data), vec![Post::default()]);
    }
}
