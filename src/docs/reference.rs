use super::endpoint::{CodeBlock, Endpoint, Method};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct Resource {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone)]
pub struct GuideStep {
    pub title: String,
    pub blurb: String,
    pub block: CodeBlock,
}

/// The full documentation content: base URLs, one tab per resource and the
/// getting-started guide. The content is static; nothing here talks to a
/// real server.
#[derive(Debug, Clone)]
pub struct ApiReference {
    pub title: String,
    pub base_urls: Vec<String>,
    pub resources: Vec<Resource>,
    pub guide: Vec<GuideStep>,
}

impl ApiReference {
    pub fn builtin() -> Self {
        Self {
            title: "Hono API".to_string(),
            base_urls: vec![
                "http://localhost:8787".to_string(),
                "https://dummyapi-1xsj.onrender.com".to_string(),
            ],
            resources: vec![products(), users(), posts()],
            guide: guide(),
        }
    }

    pub fn base_url_block(&self) -> CodeBlock {
        CodeBlock::new("base-url", self.base_urls[0].clone())
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Every copyable block in the reference, in display order.
    pub fn all_blocks(&self) -> Vec<&CodeBlock> {
        let mut blocks = Vec::new();
        for resource in &self.resources {
            for ep in &resource.endpoints {
                if let Some(ref req) = ep.request {
                    blocks.push(req);
                }
                blocks.push(&ep.response);
            }
        }
        for step in &self.guide {
            blocks.push(&step.block);
        }
        blocks
    }

    pub fn find_block(&self, token: &str) -> Option<&CodeBlock> {
        self.all_blocks().into_iter().find(|b| b.id == token)
    }
}

fn products() -> Resource {
    Resource {
        name: "Products".to_string(),
        endpoints: vec![
            Endpoint::new(
                Method::Get,
                "/products",
                "Retrieve all products",
                None,
                &json!([
                    {"id": 1, "name": "Laptop", "price": 999.99, "description": "High-performance laptop"},
                    {"id": 2, "name": "Mouse", "price": 29.99, "description": "Wireless mouse"}
                ]),
            ),
            Endpoint::new(
                Method::Get,
                "/products/:id",
                "Retrieve a specific product by ID",
                None,
                &json!({"id": 1, "name": "Laptop", "price": 999.99, "description": "High-performance laptop"}),
            ),
            Endpoint::new(
                Method::Post,
                "/products",
                "Create a new product",
                Some(&json!({"name": "Keyboard", "price": 79.99, "description": "Mechanical keyboard"})),
                &json!({"id": 3, "name": "Keyboard", "price": 79.99, "description": "Mechanical keyboard"}),
            ),
            Endpoint::new(
                Method::Put,
                "/products/:id",
                "Update an existing product",
                Some(&json!({"name": "Gaming Laptop", "price": 1299.99, "description": "High-end gaming laptop"})),
                &json!({"id": 1, "name": "Gaming Laptop", "price": 1299.99, "description": "High-end gaming laptop"}),
            ),
            Endpoint::new(
                Method::Delete,
                "/products/:id",
                "Delete a product",
                None,
                &json!({"id": 1, "name": "Laptop", "price": 999.99, "description": "High-performance laptop"}),
            ),
        ],
    }
}

fn users() -> Resource {
    Resource {
        name: "Users".to_string(),
        endpoints: vec![
            Endpoint::new(
                Method::Get,
                "/users",
                "Retrieve all users",
                None,
                &json!([
                    {"id": 1, "name": "John Doe", "email": "john@example.com", "age": 30},
                    {"id": 2, "name": "Jane Smith", "email": "jane@example.com", "age": 25}
                ]),
            ),
            Endpoint::new(
                Method::Get,
                "/users/:id",
                "Retrieve a specific user by ID",
                None,
                &json!({"id": 1, "name": "John Doe", "email": "john@example.com", "age": 30}),
            ),
            Endpoint::new(
                Method::Post,
                "/users",
                "Create a new user",
                Some(&json!({"name": "Alice Johnson", "email": "alice@example.com", "age": 28})),
                &json!({"id": 3, "name": "Alice Johnson", "email": "alice@example.com", "age": 28}),
            ),
            Endpoint::new(
                Method::Put,
                "/users/:id",
                "Update an existing user",
                Some(&json!({"name": "John Smith", "email": "johnsmith@example.com", "age": 31})),
                &json!({"id": 1, "name": "John Smith", "email": "johnsmith@example.com", "age": 31}),
            ),
            Endpoint::new(
                Method::Delete,
                "/users/:id",
                "Delete a user",
                None,
                &json!({"id": 1, "name": "John Doe", "email": "john@example.com", "age": 30}),
            ),
        ],
    }
}

fn posts() -> Resource {
    Resource {
        name: "Posts".to_string(),
        endpoints: vec![
            Endpoint::new(
                Method::Get,
                "/posts",
                "Retrieve all posts",
                None,
                &json!([
                    {"id": 1, "title": "Getting Started with Hono", "content": "Hono is a fast web framework...", "author": "John Doe"},
                    {"id": 2, "title": "API Best Practices", "content": "When building APIs...", "author": "Jane Smith"}
                ]),
            ),
            Endpoint::new(
                Method::Get,
                "/posts/:id",
                "Retrieve a specific post by ID",
                None,
                &json!({"id": 1, "title": "Getting Started with Hono", "content": "Hono is a fast web framework...", "author": "John Doe"}),
            ),
            Endpoint::new(
                Method::Post,
                "/posts",
                "Create a new post",
                Some(&json!({"title": "TypeScript Tips", "content": "Here are some useful TypeScript tips...", "author": "Alice Johnson"})),
                &json!({"id": 3, "title": "TypeScript Tips", "content": "Here are some useful TypeScript tips...", "author": "Alice Johnson"}),
            ),
            Endpoint::new(
                Method::Put,
                "/posts/:id",
                "Update an existing post",
                Some(&json!({"title": "Advanced Hono Techniques", "content": "Learn advanced Hono patterns...", "author": "John Doe"})),
                &json!({"id": 1, "title": "Advanced Hono Techniques", "content": "Learn advanced Hono patterns...", "author": "John Doe"}),
            ),
            Endpoint::new(
                Method::Delete,
                "/posts/:id",
                "Delete a post",
                None,
                &json!({"id": 1, "title": "Getting Started with Hono", "content": "Hono is a fast web framework...", "author": "John Doe"}),
            ),
        ],
    }
}

fn guide() -> Vec<GuideStep> {
    vec![
        GuideStep {
            title: "Start the Server".to_string(),
            blurb: "Clone the repository and start the development server:".to_string(),
            block: CodeBlock::new(
                "start-server",
                "npm install\nnpm run dev\n\n# Server will start on http://localhost:8787",
            ),
        },
        GuideStep {
            title: "Make Your First Request".to_string(),
            blurb: "Test the API with a simple GET request:".to_string(),
            block: CodeBlock::new(
                "first-request",
                "curl http://localhost:8787/products\n\n# Or using fetch in JavaScript\nfetch('http://localhost:8787/products')\n  .then(response => response.json())\n  .then(data => console.log(data));",
            ),
        },
        GuideStep {
            title: "Create New Resources".to_string(),
            blurb: "Add new data using POST requests:".to_string(),
            block: CodeBlock::new(
                "create-resource",
                "fetch('http://localhost:8787/products', {\n  method: 'POST',\n  headers: {\n    'Content-Type': 'application/json',\n  },\n  body: JSON.stringify({\n    name: 'New Product',\n    price: 49.99,\n    description: 'A great new product'\n  })\n})\n.then(response => response.json())\n.then(data => console.log(data));",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_three_resources() {
        let reference = ApiReference::builtin();
        assert_eq!(reference.resources.len(), 3);
        for resource in &reference.resources {
            assert_eq!(resource.endpoints.len(), 5);
        }
        assert_eq!(reference.guide.len(), 3);
    }

    #[test]
    fn test_tokens_unique() {
        let reference = ApiReference::builtin();
        let mut seen = HashSet::new();
        for block in reference.all_blocks() {
            assert!(seen.insert(block.id.clone()), "duplicate token {}", block.id);
        }
    }

    #[test]
    fn test_find_block() {
        let reference = ApiReference::builtin();
        let block = reference.find_block("get-products-response").unwrap();
        assert!(block.code.contains("Laptop"));
        assert!(reference.find_block("no-such-token").is_none());
    }

    #[test]
    fn test_resource_lookup_case_insensitive() {
        let reference = ApiReference::builtin();
        assert!(reference.resource("products").is_some());
        assert!(reference.resource("Users").is_some());
        assert!(reference.resource("comments").is_none());
    }

    #[test]
    fn test_mutating_endpoints_carry_request_bodies() {
        let reference = ApiReference::builtin();
        for resource in &reference.resources {
            for ep in &resource.endpoints {
                match ep.method {
                    Method::Post | Method::Put => assert!(ep.request.is_some(), "{}", ep.title()),
                    Method::Get | Method::Delete => assert!(ep.request.is_none(), "{}", ep.title()),
                }
            }
        }
    }
}
