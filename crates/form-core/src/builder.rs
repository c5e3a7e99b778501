//! Form builders
//!
//! [`FormBuilder`] is the capability set a [`Director`](crate::Director)
//! drives. Each step appends fixed descriptors to the builder's pending
//! [`Product`]; [`FormBuilder::get_product`] hands the product over and
//! leaves the builder blank for reuse.
//!
//! ```rust
//! use form_core::{FormBuilder, ProductFormBuilder};
//!
//! let mut builder = ProductFormBuilder::new();
//! builder.produce_name();
//! builder.produce_stock();
//!
//! let product = builder.get_product();
//! assert_eq!(product.field_names(), vec!["name", "stock"]);
//! assert!(builder.get_product().is_empty());
//! ```

use crate::field::{FieldDescriptor, FieldType};
use crate::product::Product;

/// Step-wise construction of a form [`Product`]
///
/// Implementations decide what each step appends. Steps never fail and
/// always append in call order.
pub trait FormBuilder: std::fmt::Debug {
    /// Discard the pending product and start a fresh, empty one
    fn reset(&mut self);

    /// Append the product name field
    fn produce_name(&mut self);

    /// Append the price field
    fn produce_price(&mut self);

    /// Append the stock field
    fn produce_stock(&mut self);

    /// Append the grouped detail fields
    fn produce_children(&mut self);

    /// Take the pending product, then [`reset`](FormBuilder::reset)
    ///
    /// Reading clears: a second call with no steps in between returns an
    /// empty product.
    fn get_product(&mut self) -> Product;
}

/// Builder for the product catalogue form
///
/// | step               | appends                                                   |
/// |--------------------|-----------------------------------------------------------|
/// | `produce_name`     | `name` (text, `""`)                                       |
/// | `produce_price`    | `price` (number, `"0"`)                                   |
/// | `produce_stock`    | `stock` (number, `"0"`)                                   |
/// | `produce_children` | `details` group: `dimensions` and `supplier` sub-groups   |
#[derive(Debug, Default)]
pub struct ProductFormBuilder {
    product: Product,
}

impl ProductFormBuilder {
    /// Create a blank builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level fields pending, without clearing them
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.product.len()
    }

    /// True if no step has run since the last reset
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product.is_empty()
    }

    fn details_group() -> FieldDescriptor {
        FieldDescriptor::group(
            "details",
            vec![
                FieldDescriptor::group(
                    "dimensions",
                    vec![
                        FieldDescriptor::leaf("width", FieldType::Number),
                        FieldDescriptor::leaf("height", FieldType::Number),
                    ],
                ),
                FieldDescriptor::group(
                    "supplier",
                    vec![
                        FieldDescriptor::leaf("company", FieldType::Text),
                        FieldDescriptor::leaf("email", FieldType::Email),
                    ],
                ),
            ],
        )
    }
}

impl FormBuilder for ProductFormBuilder {
    fn reset(&mut self) {
        tracing::debug!(discarded = self.product.len(), "resetting form builder");
        self.product = Product::new();
    }

    fn produce_name(&mut self) {
        tracing::trace!("produce_name");
        self.product.push(FieldDescriptor::leaf("name", FieldType::Text));
    }

    fn produce_price(&mut self) {
        tracing::trace!("produce_price");
        self.product
            .push(FieldDescriptor::leaf("price", FieldType::Number).with_value("0"));
    }

    fn produce_stock(&mut self) {
        tracing::trace!("produce_stock");
        self.product
            .push(FieldDescriptor::leaf("stock", FieldType::Number).with_value("0"));
    }

    fn produce_children(&mut self) {
        tracing::trace!("produce_children");
        self.product.push(Self::details_group());
    }

    fn get_product(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        tracing::debug!(fields = product.len(), "handing over product");
        self.reset();
        product
    }
}
