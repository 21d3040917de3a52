use std::fmt;

/// Which half of an endpoint's example the detail view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Request,
    #[default]
    Response,
}

impl Pane {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Request => Self::Response,
            Self::Response => Self::Request,
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "REQUEST"),
            Self::Response => write!(f, "RESPONSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Pane::Response.toggle(), Pane::Request);
        assert_eq!(Pane::Request.toggle(), Pane::Response);
    }
}
