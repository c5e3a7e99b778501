//! Form Core - Builder/Director construction of form-field descriptors
//!
//! # Core Concepts
//!
//! - [`FieldDescriptor`]: one form input, or a group of nested inputs
//! - [`Product`]: ordered descriptors accumulated by a builder
//! - [`FormBuilder`]: step operations that append descriptors
//! - [`ProductFormBuilder`]: the product catalogue form
//! - [`Director`]: replays a [`Recipe`] against a borrowed builder
//! - [`FormSession`]: the two UI actions, guarded until a builder is connected
//!
//! # Example
//!
//! ```rust
//! use form_core::{Director, FormBuilder, ProductFormBuilder};
//!
//! let mut builder = ProductFormBuilder::new();
//! let mut director = Director::new();
//! director.set_builder(&mut builder);
//! director.build_minimal_viable_product()?;
//!
//! let product = builder.get_product();
//! assert_eq!(product.len(), 1);
//! # Ok::<(), form_core::FormError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builder;
pub mod director;
pub mod error;
pub mod field;
pub mod product;
pub mod session;

// Re-exports
pub use builder::{FormBuilder, ProductFormBuilder};
pub use director::{Director, Recipe, Step};
pub use error::FormError;
pub use field::{FieldDescriptor, FieldType, Walk};
pub use product::Product;
pub use session::FormSession;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        Director, FieldDescriptor, FieldType, FormBuilder, FormError, FormSession, Product,
        ProductFormBuilder, Recipe, Step,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
