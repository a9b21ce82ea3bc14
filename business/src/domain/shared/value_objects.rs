use serde::{Deserialize, Serialize};

/// Declares a string-backed identifier newtype.
///
/// Catalog identifiers come from the hosted backend as opaque strings
/// (UUIDs in production, short slugs in fixtures), so they are kept as text.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifies a tenant storefront. A cart is bound to at most one.
    BusinessId
);
string_id!(
    /// Identifies a catalog product.
    ProductId
);
string_id!(
    /// Identifies a catalog size tier.
    SizeId
);
string_id!(
    /// Identifies an ingredient of a product.
    IngredientId
);
