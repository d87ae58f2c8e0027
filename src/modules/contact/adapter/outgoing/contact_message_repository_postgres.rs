use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::ActiveModel;
use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            read: Set(false),
            created_at: Set(Utc::now().into()),
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.into())
    }
}
