use stockboard_core::{CategoryId, Entity, ProductId, SupplierId, UserId};
use stockboard_products::{
    Category, NewProduct, PricingMetadata, Product, ProductCatalog, ProductStatus, ReferenceData,
    Supplier,
};
use stockboard_query::{Dimension, ProductTable, Session, TableChange, TableConfig};

fn product(
    id: &str,
    name: &str,
    sku: &str,
    category: &str,
    status: ProductStatus,
    supplier: &str,
) -> Product {
    Product::create(NewProduct {
        id: ProductId::new(id).unwrap(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: CategoryId::new(category).unwrap(),
        supplier: SupplierId::new(supplier).unwrap(),
        status,
        quantity: 5,
        pricing: PricingMetadata {
            base_price: Some(1999),
            currency: Some("USD".to_string()),
        },
        created_by: None,
        created_at: None,
    })
    .unwrap()
}

fn inventory() -> Vec<Product> {
    vec![
        product("1", "Widget", "SKU-001", "electronics", ProductStatus::Active, "acme"),
        product("2", "Desk Lamp", "SKU-WID-01", "furniture", ProductStatus::Active, "acme"),
        product("3", "Office Chair", "SKU-003", "furniture", ProductStatus::Inactive, "zeta"),
        product("4", "USB Cable", "SKU-004", "electronics", ProductStatus::Draft, "zeta"),
        product("5", "Monitor", "SKU-005", "electronics", ProductStatus::Active, "zeta"),
    ]
}

fn mount(products: Vec<Product>) -> ProductTable {
    stockboard_observability::init();
    ProductTable::new(
        Session::new(UserId::new()),
        TableConfig::default(),
        ProductCatalog::from_products(products).unwrap(),
    )
}

fn visible_ids(table: &ProductTable) -> Vec<String> {
    table
        .result()
        .visible_products
        .iter()
        .map(|p| p.id().as_str().to_string())
        .collect()
}

#[test]
fn filters_and_search_compose() {
    let mut table = mount(inventory());
    assert_eq!(table.result().total_matches, 5);

    table.toggle_filter(Dimension::Category, "electronics");
    table.toggle_filter(Dimension::Status, "active");
    assert_eq!(visible_ids(&table), vec!["1", "5"]);

    table.toggle_filter(Dimension::Category, "furniture");
    assert_eq!(visible_ids(&table), vec!["1", "2", "5"]);

    table.set_search_term("WID");
    assert_eq!(visible_ids(&table), vec!["1", "2"]);

    table.toggle_filter(Dimension::Supplier, "zeta");
    assert!(visible_ids(&table).is_empty());
    assert_eq!(table.result().total_pages, 0);
    assert_eq!(table.result().page_index, 0);
}

#[test]
fn every_effective_mutation_is_published_once() {
    let mut table = mount(inventory());
    let changes = table.subscribe();

    assert!(table.add_filter(Dimension::Status, "active"));
    assert!(!table.add_filter(Dimension::Status, "active"));
    assert!(!table.remove_filter(Dimension::Supplier, "nobody"));
    assert!(!table.clear_filter(Dimension::Category));
    assert!(table.set_search_term("  lamp "));
    assert!(!table.set_search_term("lamp"));

    assert_eq!(
        changes.drain(),
        vec![
            TableChange::FiltersChanged { dimension: Dimension::Status },
            TableChange::SearchChanged { term: "lamp".to_string() },
        ]
    );
}

#[test]
fn reset_is_one_atomic_change_and_skips_search_and_pages() {
    let mut table = mount(inventory());
    table.set_page_size(1);
    table.set_page_index(2);
    table.add_filter(Dimension::Category, "electronics");
    table.add_filter(Dimension::Supplier, "zeta");
    table.set_search_term("o");
    let changes = table.subscribe();
    let page_before = table.pagination().page_index();

    assert!(table.show_reset());
    assert!(table.reset_all_filters());
    assert!(!table.reset_all_filters());

    assert!(!table.show_reset());
    assert_eq!(table.search().as_str(), "o");
    assert_eq!(table.pagination().page_index(), page_before);
    assert_eq!(changes.drain(), vec![TableChange::FiltersReset]);
}

#[test]
fn shrinking_results_reclamp_and_announce_the_page_move() {
    let mut table = mount(inventory());
    table.set_page_size(2);
    assert!(table.set_page_index(2));
    assert_eq!(visible_ids(&table), vec!["5"]);
    let changes = table.subscribe();

    table.set_search_term("chair");

    assert_eq!(table.pagination().page_index(), 0);
    assert_eq!(visible_ids(&table), vec!["3"]);
    assert_eq!(
        changes.drain(),
        vec![
            TableChange::SearchChanged { term: "chair".to_string() },
            TableChange::PaginationChanged { page_index: 0, page_size: 2 },
        ]
    );
}

#[test]
fn out_of_range_page_requests_clamp() {
    let mut table = mount(inventory());
    table.set_page_size(2);

    table.set_page_index(10);
    assert_eq!(table.pagination().page_index(), 2);
    assert!(!table.next_page());
    assert!(table.previous_page());

    let info = table.page_info();
    assert_eq!((info.first_item, info.last_item, info.total_matches), (3, 4, 5));
}

#[test]
fn replacing_products_recomputes_with_current_selections() {
    let mut table = mount(inventory());
    table.add_filter(Dimension::Status, "draft");
    assert_eq!(visible_ids(&table), vec!["4"]);

    let grown = table
        .catalog()
        .with_product(product(
            "6",
            "HDMI Cable",
            "SKU-006",
            "electronics",
            ProductStatus::Draft,
            "acme",
        ))
        .unwrap();
    let changes = table.subscribe();
    table.replace_products(grown);

    assert_eq!(visible_ids(&table), vec!["4", "6"]);
    assert_eq!(changes.drain(), vec![TableChange::ProductsReplaced { count: 6 }]);
}

#[test]
fn badges_use_reference_names_and_collapse() {
    let mut table = mount(inventory());
    table.set_reference_data(ReferenceData::new(
        [Category {
            id: CategoryId::new("electronics").unwrap(),
            name: "Electronics".to_string(),
        }],
        [Supplier {
            id: SupplierId::new("acme").unwrap(),
            name: "Acme Corp".to_string(),
        }],
    ));

    table.add_filter(Dimension::Category, "electronics");
    for status in ["active", "inactive", "draft"] {
        table.add_filter(Dimension::Status, status);
    }

    let badges = table.badges();
    assert_eq!(badges.len(), 2);
    assert_eq!(badges[0].label, "Status");
    assert_eq!(badges[0].chips, vec!["3 Selected"]);
    assert_eq!(badges[1].label, "Category");
    assert_eq!(badges[1].chips, vec!["Electronics"]);
    assert_eq!(table.result().filter_counts.status, 3);
}

#[test]
fn pass_through_fields_survive_the_query() {
    let table = mount(inventory());
    let first = &table.result().visible_products[0];
    assert_eq!(first.quantity(), 5);
    assert_eq!(first.pricing().base_price, Some(1999));
}
