//! Testing utilities for the form builder workspace
//!
//! Shared fixtures, a recording builder double, and proptest strategies.

#![allow(missing_docs)]

use form_core::{FieldDescriptor, FieldType, FormBuilder, Product, Step};
use proptest::prelude::*;

pub fn name_field() -> FieldDescriptor {
    FieldDescriptor::leaf("name", FieldType::Text)
}

pub fn price_field() -> FieldDescriptor {
    FieldDescriptor::leaf("price", FieldType::Number).with_value("0")
}

pub fn stock_field() -> FieldDescriptor {
    FieldDescriptor::leaf("stock", FieldType::Number).with_value("0")
}

pub fn details_field() -> FieldDescriptor {
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

/// What `ProductFormBuilder` appends for `step`
pub fn expected_field(step: Step) -> FieldDescriptor {
    match step {
        Step::Name => name_field(),
        Step::Price => price_field(),
        Step::Stock => stock_field(),
        Step::Children => details_field(),
    }
}

pub fn full_featured_fields() -> Vec<FieldDescriptor> {
    vec![name_field(), price_field(), stock_field(), details_field()]
}

pub fn run_steps(builder: &mut dyn FormBuilder, steps: &[Step]) {
    for step in steps {
        step.apply(builder);
    }
}

/// Builder double that records every call it receives
///
/// Each step appends a leaf named after the step, so products stay
/// distinguishable from `ProductFormBuilder` output.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<Step>,
    pub resets: usize,
    product: Product,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, step: Step) {
        self.calls.push(step);
        self.product.push(FieldDescriptor::leaf(step.name(), FieldType::Text));
    }
}

impl FormBuilder for RecordingBuilder {
    fn reset(&mut self) {
        self.resets += 1;
        self.product = Product::new();
    }

    fn produce_name(&mut self) {
        self.record(Step::Name);
    }

    fn produce_price(&mut self) {
        self.record(Step::Price);
    }

    fn produce_stock(&mut self) {
        self.record(Step::Stock);
    }

    fn produce_children(&mut self) {
        self.record(Step::Children);
    }

    fn get_product(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        self.reset();
        product
    }
}

pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Name),
        Just(Step::Price),
        Just(Step::Stock),
        Just(Step::Children),
    ]
}

pub fn arb_steps(max_len: usize) -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(arb_step(), 0..=max_len)
}
