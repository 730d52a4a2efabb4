//! Enrollment lookups.

use crate::{
    entities::{Enrollment, enrollment},
    errors::Result,
};
use sea_orm::prelude::*;
use tracing::{debug, instrument};

/// Finds the enrollment owned by `user_id`, if the user has enrolled.
#[instrument(skip(db))]
pub async fn find_enrollment_by_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Option<enrollment::Model>> {
    let found = Enrollment::find()
        .filter(enrollment::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    debug!(
        enrollment_id = found.as_ref().map(|e| e.id),
        "Enrollment lookup"
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_find_enrollment_by_user() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let other = create_test_user(&db).await?;
        let enrollment = create_test_enrollment(&db, user.id).await?;

        let found = find_enrollment_by_user(&db, user.id).await?;
        assert_eq!(found.unwrap().id, enrollment.id);

        assert!(find_enrollment_by_user(&db, other.id).await?.is_none());
        Ok(())
    }
}
