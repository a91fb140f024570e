use edubridge_shared::forum::handle::{
    CreateCommentDescriptor, CreatePostDescriptor, VoteDescriptor, VoteKind,
};
use edubridge_shared::forum::{Comment, Post};
use reqwest::{Method, RequestBuilder, Response};

/// Lists posts, or searches them when a non-empty term is given.
pub struct Posts {
    pub search: Option<String>,
}

impl Posts {
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

#[async_trait::async_trait]
impl super::Request for Posts {
    type Output = Vec<Post>;

    fn url_suffix(&self) -> String {
        if self.search_term().is_some() {
            "/forum/search".to_string()
        } else {
            "/forum/posts".to_string()
        }
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        if let Some(term) = self.search_term() {
            Ok(req.query(&[("query", term)]))
        } else {
            Ok(req)
        }
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct CreatePost {
    pub descriptor: CreatePostDescriptor,
}

#[async_trait::async_trait]
impl super::Request for CreatePost {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/forum/posts".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct DeletePost {
    pub post: u64,
}

#[async_trait::async_trait]
impl super::Request for DeletePost {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/forum/posts/{}", self.post)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct Vote {
    pub post: u64,
    pub kind: VoteKind,
}

#[async_trait::async_trait]
impl super::Request for Vote {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        format!("/forum/posts/{}/vote", self.post)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&VoteDescriptor {
            vote_type: self.kind,
        }))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

/// Comments of one post, fetched lazily when the post is expanded.
pub struct Comments {
    pub post: u64,
}

#[async_trait::async_trait]
impl super::Request for Comments {
    type Output = Vec<Comment>;

    fn url_suffix(&self) -> String {
        format!("/forum/posts/{}/comments", self.post)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct CreateComment {
    pub descriptor: CreateCommentDescriptor,
}

#[async_trait::async_trait]
impl super::Request for CreateComment {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/forum/comments".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

/// Marks one comment as the accepted answer of its post. The backend
/// owns exclusivity; a lost race surfaces as a conflict status here.
pub struct AcceptComment {
    pub post: u64,
    pub comment: u64,
}

#[async_trait::async_trait]
impl super::Request for AcceptComment {
    type Output = ();
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/forum/posts/{}/comments/{}/accept", self.post, self.comment)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&serde_json::json!({})))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
