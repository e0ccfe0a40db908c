//! Shared helper utilities for factory methods.
//!
//! Provides unique counter values for readable default names and convenience methods
//! for creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a person that owns `count` work orders.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of work orders to assign to the person
///
/// # Returns
/// - `Ok((person, workorders))` - The person and its work orders in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_person_with_workorders(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::person::Model, Vec<entity::workorder::Model>), DbErr> {
    let person = crate::factory::person::create_person(db).await?;

    let mut workorders = Vec::with_capacity(count);
    for _ in 0..count {
        workorders.push(crate::factory::workorder::create_workorder_for_person(db, person.id).await?);
    }

    Ok((person, workorders))
}

/// Creates a person that references a fresh address and image.
///
/// # Returns
/// - `Ok((address, image, person))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_person_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::address::Model,
        entity::image::Model,
        entity::person::Model,
    ),
    DbErr,
> {
    let address = crate::factory::address::create_address(db).await?;
    let image = crate::factory::image::create_image(db).await?;
    let person = crate::factory::person::PersonFactory::new(db)
        .address_id(Some(address.id))
        .image_id(Some(image.id))
        .build()
        .await?;

    Ok((address, image, person))
}
