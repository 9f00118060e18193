//! Runs against a live PostgreSQL instance:
//! `DATABASE_URL=... cargo test -p persistence --features postgres-tests`.
//! Each test gets a fresh database with the catalog and cart seeds applied
//! (carts 1 and 2 belong to users 1 and 2).

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::model::{CartItem, NewCartItem};
use business::domain::shopping_cart::repository::ShoppingCartRepository;
use persistence::shopping_cart::repository::ShoppingCartRepositoryPostgres;
use sqlx::PgPool;

async fn count_items(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM cart_items")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn new_item(cart_id: i32, product_id: i32, qty: i32) -> NewCartItem {
    NewCartItem {
        cart_id,
        product_id,
        qty,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_add_item_with_assigned_id(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());

    let added = repo.add_item(&new_item(1, 5, 2)).await.unwrap().unwrap();

    assert!(added.id > 0);
    assert_eq!(added.cart_id, 1);
    assert_eq!(added.product_id, 5);
    assert_eq!(added.qty, 2);
    assert_eq!(count_items(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_not_add_duplicate_product_to_same_cart(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());
    let first = repo.add_item(&new_item(1, 5, 2)).await.unwrap().unwrap();

    let second = repo.add_item(&new_item(1, 5, 9)).await.unwrap();

    assert!(second.is_none());
    assert_eq!(count_items(&pool).await, 1);
    let stored = repo.get_item(first.id).await.unwrap().unwrap();
    assert_eq!(stored.qty, 2);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_allow_same_product_in_different_carts(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());

    repo.add_item(&new_item(1, 5, 1)).await.unwrap().unwrap();
    let other = repo.add_item(&new_item(2, 5, 1)).await.unwrap();

    assert!(other.is_some());
    assert_eq!(count_items(&pool).await, 2);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_not_add_unknown_product(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());

    let result = repo.add_item(&new_item(1, 9999, 1)).await.unwrap();

    assert!(result.is_none());
    assert_eq!(count_items(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_return_none_when_deleting_nonexistent(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());
    repo.add_item(&new_item(1, 5, 1)).await.unwrap().unwrap();

    let result = repo.delete_item(424242).await.unwrap();

    assert!(result.is_none());
    assert_eq!(count_items(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_delete_exactly_one_item_and_return_prior_state(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());
    let doomed = repo.add_item(&new_item(1, 5, 3)).await.unwrap().unwrap();
    let kept = repo.add_item(&new_item(1, 6, 1)).await.unwrap().unwrap();

    let deleted = repo.delete_item(doomed.id).await.unwrap().unwrap();

    assert_eq!(deleted, doomed);
    assert!(repo.get_item(doomed.id).await.unwrap().is_none());
    assert_eq!(repo.get_item(kept.id).await.unwrap(), Some(kept));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_return_only_items_of_requested_user(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());
    let mine_a = repo.add_item(&new_item(1, 5, 1)).await.unwrap().unwrap();
    let mine_b = repo.add_item(&new_item(1, 7, 2)).await.unwrap().unwrap();
    let theirs = repo.add_item(&new_item(2, 5, 1)).await.unwrap().unwrap();

    let mut items = repo.get_items(UserId::new(1)).await.unwrap();
    items.sort_by_key(|i| i.id);

    assert_eq!(items, vec![mine_a, mine_b]);
    assert!(!items.contains(&theirs));
    assert!(repo.get_items(UserId::new(3)).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_update_only_qty(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());
    let item = repo.add_item(&new_item(1, 5, 2)).await.unwrap().unwrap();

    let updated = repo.update_qty(item.id, 7).await.unwrap().unwrap();

    assert_eq!(
        updated,
        CartItem {
            id: item.id,
            cart_id: 1,
            product_id: 5,
            qty: 7,
        }
    );
    assert_eq!(repo.get_item(item.id).await.unwrap(), Some(updated));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_return_none_when_updating_nonexistent(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool);

    let result = repo.update_qty(424242, 3).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "postgres-tests"), ignore = "requires DATABASE_URL")]
async fn should_fail_to_add_item_to_unknown_cart(pool: PgPool) {
    let repo = ShoppingCartRepositoryPostgres::new(pool.clone());

    let result = repo.add_item(&new_item(999, 5, 1)).await;

    assert!(matches!(result, Err(RepositoryError::Persistence)));
    assert_eq!(count_items(&pool).await, 0);
}
