//! Helpers for draining [`Body`] types into memory

use bytes::Bytes;
use http_body::Body;
use http_body_util::BodyExt;

/// Collects every frame of `body` into a single [`Bytes`] buffer
pub async fn body_to_bytes<B>(body: &mut B) -> Result<Bytes, B::Error>
where
    B: Body<Data = Bytes> + Unpin,
{
    BodyExt::collect(body).await.map(|buf| buf.to_bytes())
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http_body_util::{Empty, Full};

    use super::body_to_bytes;

    #[tokio::test]
    async fn it_collects_a_full_body() {
        let mut body = Full::new(Bytes::from_static(b"[[\"id\"]]"));
        let bytes = body_to_bytes(&mut body).await.unwrap();
        assert_eq!(bytes, Bytes::from_static(b"[[\"id\"]]"));
    }

    #[tokio::test]
    async fn it_collects_an_empty_body() {
        let mut body = Empty::<Bytes>::new();
        let bytes = body_to_bytes(&mut body).await.unwrap();
        assert!(bytes.is_empty());
    }
}
