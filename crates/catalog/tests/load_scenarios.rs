use serde_json::{Value, json};
use storecatalog_catalog::{Catalog, CatalogError, CatalogLoader, LoadOptions, ProductGroup, load};

fn flippybit() -> Value {
    json!({
        "name": "FlippyBit",
        "details": "Party like it's 1979! Flippy Bit takes the great action of early 2014, and makes it look like it's on an old Atari.",
        "identifier": "825459863",
        "imageURL": "https://rebisoft.com/appicons/flippybit512.png"
    })
}

fn scribattle() -> Value {
    json!({
        "name": "Scribattle",
        "details": "Put your finger-flicking abilities to the test in this all-but-forgotten 2009 App Store hit game!",
        "identifier": "301618970",
        "imageURL": "https://rebisoft.com/appicons/scribattle100.png"
    })
}

fn goldy() -> Value {
    json!({
        "name": "Goldy",
        "details": "Goldy is a web browser for iPhone, iPad, and iPod touch that offers one simple feature: Privacy.",
        "identifier": "417317449",
        "imageURL": "https://rebisoft.com/_Media/screen_shot_2011-08-19_at_med.png"
    })
}

fn example_json() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "productGroups": [
            { "title": "Awesome Games", "products": [flippybit(), scribattle()] },
            { "title": "Other Apps", "products": [goldy()] }
        ]
    }))
    .unwrap()
}

fn counts(catalog: &Catalog) -> Vec<usize> {
    catalog.groups().map(ProductGroup::len).collect()
}

#[test]
fn typical_data_loads() {
    let catalog = load(&example_json(), None).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(counts(&catalog), vec![2, 1]);
    assert_eq!(catalog.product_groups()[0].title(), "Awesome Games");
    assert_eq!(catalog.product_groups()[1].title(), "Other Apps");
}

#[test]
fn excluding_from_first_group() {
    let catalog = load(&example_json(), Some("301618970")).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(counts(&catalog), vec![1, 1]);
}

#[test]
fn excluding_only_product_of_second_group() {
    let catalog = load(&example_json(), Some("417317449")).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(counts(&catalog), vec![2]);
    assert_eq!(catalog.product_groups()[0].title(), "Awesome Games");
}

#[test]
fn empty_product_group_fails() {
    let bytes = serde_json::to_vec(&json!({
        "productGroups": [ { "title": "Awesome Games", "products": [] } ]
    }))
    .unwrap();

    assert_eq!(load(&bytes, None).unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn empty_product_group_through_exclusion_fails() {
    let bytes = serde_json::to_vec(&json!({
        "productGroups": [ { "title": "Awesome Games", "products": [flippybit()] } ]
    }))
    .unwrap();

    let loader = CatalogLoader::new(LoadOptions::new().excluding("825459863"));
    assert_eq!(loader.load(&bytes).unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn bad_json_fails_with_decoding_error() {
    // Unterminated string in the first title.
    let bytes = br#"{ "productGroups" : [
        {   "title" : "Awesome Games,
            "products" : [
                {
                    "name" : "FlippyBit",
                    "details" : "Party like it's 1979!",
                    "identifier" : "825459863",
                    "imageURL" : "https://rebisoft.com/appicons/flippybit512.png"
                }
            ]
        }
    ]}"#;

    let err = load(bytes, None).unwrap_err();
    assert!(err.is_decoding(), "unexpected error: {err}");
}

#[test]
fn repeated_loads_are_equal() {
    let bytes = example_json();

    assert_eq!(load(&bytes, Some("301618970")), load(&bytes, Some("301618970")));
    assert_eq!(load(b"{", None), load(b"{", None));
}

mod hand_written_documents {
    //! Catalog documents as authors write them, trailing commas included.

    use super::counts;
    use storecatalog_catalog::{CatalogError, load};

    const EXAMPLE: &[u8] = include_bytes!("fixtures/example.json");
    const SINGLE_PRODUCT_GROUP: &[u8] = include_bytes!("fixtures/single_product_group.json");
    const EMPTY_PRODUCT_GROUP: &[u8] = include_bytes!("fixtures/empty_product_group.json");
    const BAD: &[u8] = include_bytes!("fixtures/bad.json");

    #[test]
    fn typical_data_loads() {
        let catalog = load(EXAMPLE, None).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(counts(&catalog), vec![2, 1]);
    }

    #[test]
    fn excluding_from_first_group() {
        let catalog = load(EXAMPLE, Some("301618970")).unwrap();

        assert_eq!(counts(&catalog), vec![1, 1]);
    }

    #[test]
    fn excluding_only_product_of_second_group() {
        let catalog = load(EXAMPLE, Some("417317449")).unwrap();

        assert_eq!(counts(&catalog), vec![2]);
    }

    #[test]
    fn empty_product_group_fails() {
        assert_eq!(load(EMPTY_PRODUCT_GROUP, None).unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn empty_product_group_through_exclusion_fails() {
        assert!(load(SINGLE_PRODUCT_GROUP, None).is_ok());
        assert_eq!(
            load(SINGLE_PRODUCT_GROUP, Some("825459863")).unwrap_err(),
            CatalogError::EmptyCatalog
        );
    }

    #[test]
    fn unterminated_string_fails_with_decoding_error() {
        let err = load(BAD, None).unwrap_err();
        assert!(err.is_decoding(), "unexpected error: {err}");
    }
}
