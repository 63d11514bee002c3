//! Integration coverage for the SQLite repositories against a real store.

use super::*;
use crate::domain::ports::CategoryRepository;
use crate::outbound::persistence::{PoolConfig, SqliteCategoryRepository};

struct TestStore {
    products: SqliteProductRepository,
    categories: SqliteCategoryRepository,
    _dir: tempfile::TempDir,
}

fn store() -> TestStore {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalogue.db");
    let pool = DbPool::new(PoolConfig::new(path.to_string_lossy()).with_max_size(2))
        .expect("pool builds");
    pool.run_migrations().expect("migrations apply");
    TestStore {
        products: SqliteProductRepository::new(pool.clone()),
        categories: SqliteCategoryRepository::new(pool),
        _dir: dir,
    }
}

fn new_record(title: &str, price: Option<f64>, category: &str) -> NewProductRecord {
    NewProductRecord {
        title: title.to_owned(),
        description: Some(format!("{title} description")),
        price,
        image_url: None,
        category: CategoryRef::Create(category.to_owned()),
    }
}

#[tokio::test]
async fn create_persists_and_joins_the_category() {
    let store = store();

    let created = store
        .products
        .create(new_record("Phone", Some(499.0), "electronics"))
        .await
        .expect("create succeeds");

    assert!(created.id > 0);
    assert_eq!(created.title, "Phone");
    assert_eq!(created.price, Some(499.0));
    assert_eq!(created.category.title, "electronics");
    assert!(created.category.id.is_some());
    assert!(created.created_on.is_some());
    assert!(created.last_updated_on.is_some());
}

#[tokio::test]
async fn category_rows_are_reused_across_creates() {
    let store = store();

    store
        .products
        .create(new_record("Phone", None, "electronics"))
        .await
        .expect("first create");
    store
        .products
        .create(new_record("Laptop", None, "electronics"))
        .await
        .expect("second create");

    let categories = store.categories.list_all().await.expect("list categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "electronics");
}

#[tokio::test]
async fn find_by_id_returns_none_for_missing_rows() {
    let store = store();
    let found = store.products.find_by_id(404).await.expect("query runs");
    assert!(found.is_none());
}

#[tokio::test]
async fn search_matches_title_fragments() {
    let store = store();
    store
        .products
        .create(new_record("Blue Phone", None, "electronics"))
        .await
        .expect("create");
    store
        .products
        .create(new_record("Red Chair", None, "furniture"))
        .await
        .expect("create");

    let found = store
        .products
        .search_by_title("Phone")
        .await
        .expect("search runs");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Blue Phone");
}

#[tokio::test]
async fn listing_by_category_title_matches_exactly() {
    let store = store();
    store
        .products
        .create(new_record("Hammer", None, "tools"))
        .await
        .expect("create");
    store
        .products
        .create(new_record("Toolbox Toy", None, "toys"))
        .await
        .expect("create");

    let in_tools = store
        .products
        .list_by_category_title("tools")
        .await
        .expect("listing runs");
    assert_eq!(in_tools.len(), 1);
    assert_eq!(in_tools[0].title, "Hammer");

    let in_unknown = store
        .products
        .list_by_category_title("tool")
        .await
        .expect("listing runs");
    assert!(in_unknown.is_empty());
}

#[tokio::test]
async fn pages_are_zero_based_and_out_of_range_pages_are_empty() {
    let store = store();
    for n in 1..=5 {
        store
            .products
            .create(new_record(&format!("Item {n}"), Some(f64::from(n)), "bulk"))
            .await
            .expect("create");
    }

    let page = store
        .products
        .list_page(PageRequest::new(2, 1))
        .await
        .expect("page runs");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "Item 3");
    assert_eq!(page[1].title, "Item 4");

    let beyond = store
        .products
        .list_page(PageRequest::new(2, 9))
        .await
        .expect("page runs");
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn pages_sort_by_the_requested_column() {
    let store = store();
    store
        .products
        .create(new_record("Cheap", Some(5.0), "bulk"))
        .await
        .expect("create");
    store
        .products
        .create(new_record("Dear", Some(50.0), "bulk"))
        .await
        .expect("create");
    store
        .products
        .create(new_record("Middling", Some(20.0), "bulk"))
        .await
        .expect("create");

    let page = store
        .products
        .list_page(
            PageRequest::new(3, 0).with_sort(SortColumn::Price, SortDirection::Descending),
        )
        .await
        .expect("page runs");

    let titles: Vec<_> = page.iter().map(|product| product.title.as_str()).collect();
    assert_eq!(titles, ["Dear", "Middling", "Cheap"]);

    let by_title = store
        .products
        .list_page(
            PageRequest::new(3, 0).with_sort(SortColumn::Title, SortDirection::Descending),
        )
        .await
        .expect("page runs");

    let titles: Vec<_> = by_title
        .iter()
        .map(|product| product.title.as_str())
        .collect();
    assert_eq!(titles, ["Middling", "Dear", "Cheap"]);
}

#[tokio::test]
async fn update_writes_the_merge_and_can_keep_the_category() {
    let store = store();
    let created = store
        .products
        .create(new_record("Phone", Some(499.0), "electronics"))
        .await
        .expect("create");

    let updated = store
        .products
        .update(ProductUpdateRecord {
            id: created.id,
            title: "Phone XL".to_owned(),
            description: None,
            price: Some(599.0),
            image_url: None,
            category: None,
        })
        .await
        .expect("update succeeds");

    assert_eq!(updated.title, "Phone XL");
    assert_eq!(updated.price, Some(599.0));
    // A merged None really clears the column.
    assert_eq!(updated.description, None);
    assert_eq!(updated.category.title, "electronics");
}

#[tokio::test]
async fn update_can_move_a_product_to_a_new_category() {
    let store = store();
    let created = store
        .products
        .create(new_record("Phone", None, "electronics"))
        .await
        .expect("create");

    let updated = store
        .products
        .update(ProductUpdateRecord {
            id: created.id,
            title: created.title.clone(),
            description: created.description.clone(),
            price: created.price,
            image_url: None,
            category: Some(CategoryRef::Create("gadgets".to_owned())),
        })
        .await
        .expect("update succeeds");

    assert_eq!(updated.category.title, "gadgets");

    let categories = store.categories.list_all().await.expect("list categories");
    let titles: Vec<_> = categories
        .iter()
        .map(|category| category.title.as_str())
        .collect();
    assert_eq!(titles, ["electronics", "gadgets"]);
}

#[tokio::test]
async fn delete_reports_whether_a_row_existed() {
    let store = store();
    let created = store
        .products
        .create(new_record("Phone", None, "electronics"))
        .await
        .expect("create");

    assert!(store.products.delete(created.id).await.expect("delete"));
    assert!(!store.products.delete(created.id).await.expect("redelete"));
    assert!(
        store
            .products
            .find_by_id(created.id)
            .await
            .expect("lookup")
            .is_none()
    );
}

#[tokio::test]
async fn deleting_the_last_product_leaves_its_category_behind() {
    let store = store();
    let created = store
        .products
        .create(new_record("Phone", None, "electronics"))
        .await
        .expect("create");

    assert!(store.products.delete(created.id).await.expect("delete"));

    let in_category = store
        .products
        .list_by_category_title("electronics")
        .await
        .expect("listing runs");
    assert!(in_category.is_empty());

    let categories = store.categories.list_all().await.expect("list categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].title, "electronics");
}

#[tokio::test]
async fn categories_can_be_found_by_title() {
    let store = store();
    store
        .products
        .create(new_record("Phone", None, "electronics"))
        .await
        .expect("create");

    let found = store
        .categories
        .find_by_title("electronics")
        .await
        .expect("lookup runs")
        .expect("category exists");
    assert_eq!(found.title, "electronics");

    let missing = store
        .categories
        .find_by_title("misc")
        .await
        .expect("lookup runs");
    assert!(missing.is_none());
}
