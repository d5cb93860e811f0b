//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique test values and convenience methods for creating
//! entities together with their dependencies.

use entity::group_member::GroupRole;
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

/// Creates a published course with `lesson_count` lessons ordered 1..=lesson_count.
///
/// # Arguments
/// - `db` - Database connection
/// - `lesson_count` - Number of lessons to create
///
/// # Returns
/// - `Ok((course, lessons))` - Created course and its lessons in display order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_lessons(
    db: &DatabaseConnection,
    lesson_count: i32,
) -> Result<(entity::course::Model, Vec<entity::lesson::Model>), DbErr> {
    let course = crate::factory::course::create_course(db).await?;

    let mut lessons = Vec::new();
    for order_index in 1..=lesson_count {
        let lesson = crate::factory::lesson::LessonFactory::new(db, course.id)
            .order_index(order_index)
            .build()
            .await?;
        lessons.push(lesson);
    }

    Ok((course, lessons))
}

/// Creates a study group with a fresh owner holding the ADMIN membership.
///
/// Mirrors what group creation does in the application: the group starts with a
/// member count of one and the owner as its only member.
///
/// # Arguments
/// - `db` - Database connection
/// - `max_members` - Capacity of the group
///
/// # Returns
/// - `Ok((owner, group))` - Created owner user and group
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_owner(
    db: &DatabaseConnection,
    max_members: i32,
) -> Result<(entity::user::Model, entity::study_group::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let group = crate::factory::study_group::StudyGroupFactory::new(db)
        .max_members(max_members)
        .member_count(1)
        .build()
        .await?;

    crate::factory::group_member::GroupMemberFactory::new(db, group.id, owner.id)
        .role(GroupRole::Admin)
        .build()
        .await?;

    Ok((owner, group))
}

/// Adds `count` fresh users to a group as MEMBERs and bumps its member count.
///
/// # Arguments
/// - `db` - Database connection
/// - `group` - Group to fill
/// - `count` - Number of members to add
///
/// # Returns
/// - `Ok(Vec<user::Model>)` - The users that were added
/// - `Err(DbErr)` - Database error during creation
pub async fn add_members(
    db: &DatabaseConnection,
    group: &entity::study_group::Model,
    count: i32,
) -> Result<Vec<entity::user::Model>, DbErr> {
    use sea_orm::{
        sea_query::{Expr, ExprTrait},
        ColumnTrait, EntityTrait, QueryFilter,
    };

    let mut users = Vec::new();
    for _ in 0..count {
        let user = crate::factory::user::create_user(db).await?;
        crate::factory::group_member::create_group_member(db, group.id, user.id).await?;
        users.push(user);
    }

    entity::prelude::StudyGroup::update_many()
        .col_expr(
            entity::study_group::Column::MemberCount,
            Expr::col(entity::study_group::Column::MemberCount).add(count),
        )
        .filter(entity::study_group::Column::Id.eq(group.id))
        .exec(db)
        .await?;

    Ok(users)
}
