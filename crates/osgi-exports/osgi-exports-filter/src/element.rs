//! The slice of the API model the export filter needs to see.

/// Which side of an API comparison an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiSide {
    Old,
    New,
}

/// Package and simple name of a class-like element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCoordinates<'a> {
    /// Dot-qualified package name, empty for the unnamed package.
    pub package: &'a str,
    pub simple_name: &'a str,
}

/// An element discovered while analyzing one side of a comparison.
pub trait ApiElement {
    fn api_side(&self) -> ApiSide;

    /// `None` for elements that are not classes (methods, fields, packages...).
    fn as_type(&self) -> Option<TypeCoordinates<'_>>;
}

/// Owned element for callers without an API model of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Type {
        side: ApiSide,
        package: String,
        simple_name: String,
    },
    Other {
        side: ApiSide,
        name: String,
    },
}

impl Element {
    pub fn class(side: ApiSide, package: &str, simple_name: &str) -> Self {
        Self::Type {
            side,
            package: package.to_string(),
            simple_name: simple_name.to_string(),
        }
    }

    /// Split a top-level class name such as `a.b.Foo` at its last dot.
    /// A name without a dot lives in the unnamed package.
    pub fn from_qualified(side: ApiSide, qualified_name: &str) -> Self {
        match qualified_name.rsplit_once('.') {
            Some((package, simple_name)) => Self::class(side, package, simple_name),
            None => Self::class(side, "", qualified_name),
        }
    }

    pub fn other(side: ApiSide, name: &str) -> Self {
        Self::Other {
            side,
            name: name.to_string(),
        }
    }
}

impl ApiElement for Element {
    fn api_side(&self) -> ApiSide {
        match self {
            Self::Type { side, .. } | Self::Other { side, .. } => *side,
        }
    }

    fn as_type(&self) -> Option<TypeCoordinates<'_>> {
        match self {
            Self::Type {
                package,
                simple_name,
                ..
            } => Some(TypeCoordinates {
                package,
                simple_name,
            }),
            Self::Other { .. } => None,
        }
    }
}
