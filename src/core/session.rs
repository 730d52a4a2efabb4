//! Session lookups used to authenticate bearer tokens.

use crate::{
    entities::{Session, session},
    errors::Result,
};
use sea_orm::prelude::*;
use tracing::{debug, instrument};

/// Finds the session that owns `token`, if any.
#[instrument(skip(db, token))]
pub async fn find_session_by_token(
    db: &DatabaseConnection,
    token: &str,
) -> Result<Option<session::Model>> {
    let found = Session::find()
        .filter(session::Column::Token.eq(token))
        .one(db)
        .await?;
    debug!(found = found.is_some(), "Session lookup");
    Ok(found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_find_session_by_token() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db).await?;
        let created = create_test_session(&db, user.id).await?;

        let found = find_session_by_token(&db, &created.token).await?;
        assert_eq!(found.unwrap().user_id, user.id);

        assert!(find_session_by_token(&db, "no-such-token").await?.is_none());
        Ok(())
    }
}
