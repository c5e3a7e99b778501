use form_core::prelude::*;
use form_test_utils::{details_field, full_featured_fields, name_field, RecordingBuilder};
use pretty_assertions::assert_eq;

#[test]
fn director_drives_any_builder_in_recipe_order() {
    let mut builder = RecordingBuilder::new();
    let mut director = Director::new();
    director.set_builder(&mut builder);
    director.build_full_featured_product().unwrap();

    assert_eq!(
        builder.calls,
        vec![Step::Name, Step::Price, Step::Stock, Step::Children]
    );
    assert_eq!(builder.resets, 0);
}

#[test]
fn minimal_recipe_calls_produce_name_once() {
    let mut builder = RecordingBuilder::new();
    Director::with_builder(&mut builder)
        .build_minimal_viable_product()
        .unwrap();

    assert_eq!(builder.calls, vec![Step::Name]);
}

#[test]
fn director_does_not_read_or_reset_the_product() {
    let mut builder = RecordingBuilder::new();
    Director::with_builder(&mut builder)
        .build_full_featured_product()
        .unwrap();

    // Product is still pending on the builder
    let product = builder.get_product();
    assert_eq!(product.len(), 4);
    assert_eq!(builder.resets, 1);
}

#[test]
fn full_featured_product_matches_fixture() {
    let mut builder = ProductFormBuilder::new();
    Director::with_builder(&mut builder)
        .build_full_featured_product()
        .unwrap();

    let product = builder.get_product();
    assert_eq!(product.into_fields(), full_featured_fields());
}

#[test]
fn minimal_product_is_exactly_the_name_field() {
    let mut builder = ProductFormBuilder::new();
    Director::with_builder(&mut builder)
        .build_minimal_viable_product()
        .unwrap();

    assert_eq!(builder.get_product().into_fields(), vec![name_field()]);
}

#[test]
fn details_group_serializes_nested_children() {
    let json = serde_json::to_value(details_field()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "field": "details",
            "children": [
                {
                    "field": "dimensions",
                    "children": [
                        {"field": "width", "value": "", "type": "number"},
                        {"field": "height", "value": "", "type": "number"}
                    ]
                },
                {
                    "field": "supplier",
                    "children": [
                        {"field": "company", "value": "", "type": "text"},
                        {"field": "email", "value": "", "type": "email"}
                    ]
                }
            ]
        })
    );
}

#[test]
fn build_without_builder_reports_recipe() {
    let mut director = Director::new();
    let err = director.build(Recipe::FullFeatured).unwrap_err();

    assert!(err.is_missing_builder());
    assert_eq!(err.to_string(), "no builder set for recipe 'full-featured'");
}

#[test]
fn director_can_be_repointed_between_builders() {
    let mut recording = RecordingBuilder::new();
    let mut concrete = ProductFormBuilder::new();

    let mut director = Director::with_builder(&mut recording);
    director.build_minimal_viable_product().unwrap();
    director.set_builder(&mut concrete);
    director.build_minimal_viable_product().unwrap();

    assert_eq!(recording.calls, vec![Step::Name]);
    assert_eq!(concrete.get_product().into_fields(), vec![name_field()]);
}
