//! Status enums for dashboard entities.
//!
//! Raw records carry free-form status labels (`"draft"`, `"DELIVERED"`,
//! `"on hold"`). Each enum knows the labels the dashboard acts on and keeps
//! anything else in an `Other` variant, so an unexpected label still renders.
//! All of them serialize as their display label.

use serde::{Deserialize, Serialize};

/// Upper-case the first character and lower-case the rest.
///
/// Empty input yields an empty string.
#[must_use]
pub fn capitalize_label(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Defines a label-backed status enum.
///
/// The generated type has the listed variants plus `Other(String)`, a
/// `Default` of the first variant, `from_label`/`as_str`, `Display`, and
/// string-based serde.
macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $name:ident, normalize = $normalize:path {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A label outside the known set, kept in normalized form.
            Other(String),
        }

        impl $name {
            /// Parse a raw label, normalizing its case first.
            #[must_use]
            pub fn from_label(raw: &str) -> Self {
                let label = $normalize(raw);
                match label.as_str() {
                    $( $label => Self::$variant, )+
                    _ => Self::Other(label),
                }
            }

            /// The display label.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Other(label) => label,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                define_status!(@first $( $variant ),+)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from_label(&label)
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                status.as_str().to_owned()
            }
        }
    };
    (@first $first:ident $(, $rest:ident)*) => {
        Self::$first
    };
}

define_status! {
    /// Product publication status.
    ProductStatus, normalize = capitalize_label {
        /// Not visible to customers.
        Draft => "Draft",
        /// Published to the storefront.
        Publish => "Publish",
    }
}

define_status! {
    /// Order processing status.
    OrderStatus, normalize = capitalize_label {
        Pending => "Pending",
        Process => "Process",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
}

impl OrderStatus {
    /// Status after the "Update Status" row action.
    ///
    /// `Process` advances to `Delivered`; every other status moves to `Process`.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Process => Self::Delivered,
            _ => Self::Process,
        }
    }
}

define_status! {
    /// Customer account status.
    AccountStatus, normalize = capitalize_label {
        Active => "Active",
        Inactive => "Inactive",
        Suspended => "Suspended",
    }
}

define_status! {
    /// Discount lifecycle status.
    DiscountStatus, normalize = capitalize_label {
        Active => "Active",
        Expired => "Expired",
        Scheduled => "Scheduled",
    }
}

fn lower_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

define_status! {
    /// How a discount amount is applied.
    DiscountType, normalize = lower_label {
        /// Fixed currency amount off.
        Fixed => "fixed",
        /// Percentage off.
        Percentage => "percentage",
    }
}
