use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, Set};

use crate::entities::users::{ActiveModel, Column, Entity, Model};

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Option<Self> {
        let query = Entity::find().filter(Column::Id.eq(id));

        match query.one(db).await {
            Ok(user) => user,
            Err(e) => {
                ::tracing::error!("Failed to find user by id");
                ::tracing::error!("Error: {}", e);

                None
            }
        }
    }

    pub async fn find_by_username<T: ToString>(
        db: &DatabaseConnection,
        username: T,
    ) -> Option<Self> {
        let query = Entity::find().filter(Column::Username.eq(username.to_string()));

        match query.one(db).await {
            Ok(user) => user,
            Err(e) => {
                ::tracing::error!("Failed to find user by username");
                ::tracing::error!("Error: {}", e);

                None
            }
        }
    }

    pub async fn find_by_email<T: ToString>(db: &DatabaseConnection, email: T) -> Option<Self> {
        let query = Entity::find().filter(Column::Email.eq(email.to_string()));

        match query.one(db).await {
            Ok(user) => user,
            Err(e) => {
                ::tracing::error!("Failed to find user by email");
                ::tracing::error!("Error: {}", e);

                None
            }
        }
    }

    pub async fn username_exists<T: ToString>(db: &DatabaseConnection, username: T) -> bool {
        let query = Entity::find()
            .filter(Column::Username.eq(username.to_string()))
            .count(db);

        query.await.unwrap_or(0) > 0
    }

    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> bool {
        let query = Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .count(db);

        query.await.unwrap_or(0) > 0
    }

    pub async fn count(db: &DatabaseConnection) -> u64 {
        Entity::find().count(db).await.unwrap_or(0)
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }

    /// Replaces the stored password hash, bumping `updated_at`.
    pub async fn update_password(
        &self,
        db: &DatabaseConnection,
        hash: String,
    ) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        model.password = Set(hash);
        model.updated_at = Set(super::now());

        model.update(db).await
    }
}
