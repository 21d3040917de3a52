use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A copyable block of example text. The `id` is the identifier token the
/// copy indicator tracks, unique across the whole reference.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    pub id: String,
    pub code: String,
}

impl CodeBlock {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
        }
    }

    pub fn from_json(id: impl Into<String>, value: &Value) -> Self {
        let code = serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| value.to_string());
        Self {
            id: id.into(),
            code,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub description: String,
    pub request: Option<CodeBlock>,
    pub response: CodeBlock,
}

impl Endpoint {
    pub fn new(
        method: Method,
        path: &str,
        description: &str,
        request: Option<&Value>,
        response: &Value,
    ) -> Self {
        let slug = token_slug(method, path);
        Self {
            method,
            path: path.to_string(),
            description: description.to_string(),
            request: request.map(|v| CodeBlock::from_json(format!("{slug}-request"), v)),
            response: CodeBlock::from_json(format!("{slug}-response"), response),
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Token stem for an endpoint: lowercased method joined with the path
/// segments, `:id`-style parameters stripped of the colon.
/// `GET /products/:id` becomes `get-products-id`.
fn token_slug(method: Method, path: &str) -> String {
    let mut slug = method.as_str().to_lowercase();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        slug.push('-');
        slug.push_str(segment.trim_start_matches(':'));
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_slug() {
        assert_eq!(token_slug(Method::Get, "/products"), "get-products");
        assert_eq!(token_slug(Method::Get, "/products/:id"), "get-products-id");
        assert_eq!(token_slug(Method::Delete, "/users/:id"), "delete-users-id");
    }

    #[test]
    fn test_endpoint_tokens() {
        let ep = Endpoint::new(
            Method::Post,
            "/products",
            "Create a new product",
            Some(&json!({"name": "Keyboard"})),
            &json!({"id": 3, "name": "Keyboard"}),
        );
        assert_eq!(ep.request.as_ref().unwrap().id, "post-products-request");
        assert_eq!(ep.response.id, "post-products-response");
    }

    #[test]
    fn test_code_block_from_json_pretty_prints() {
        let block = CodeBlock::from_json("x", &json!({"id": 1, "name": "Laptop"}));
        assert!(block.code.contains("\n"));
        assert!(block.code.contains("  \"id\": 1"));
    }

    #[test]
    fn test_endpoint_title() {
        let ep = Endpoint::new(Method::Get, "/posts", "Retrieve all posts", None, &json!([]));
        assert_eq!(ep.title(), "GET /posts");
        assert!(ep.request.is_none());
    }
}
