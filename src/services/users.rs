use chrono::Utc;
use redb::ReadableTable;
use uuid::Uuid;

use crate::constants::ERR_USERNAME_REQUIRED;
use crate::db::{decode, encode, tables, Db};
use crate::error::{AppError, Result};
use crate::models::{User, UserRecord};

/// Creates and lists users
#[derive(Clone)]
pub struct UserService {
    db: Db,
}

impl UserService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Create a user with the given username
    ///
    /// Returns `Validation` without touching the store when the username is
    /// missing or blank. Usernames are not required to be unique.
    pub async fn create_user(&self, username: Option<&str>) -> Result<User> {
        let username = username
            .filter(|name| User::validate_username(name))
            .ok_or_else(|| {
                tracing::warn!("Rejected user creation without a username");
                AppError::Validation(ERR_USERNAME_REQUIRED.to_string())
            })?
            .to_string();

        let db = self.db.clone();

        let user = tokio::task::spawn_blocking(move || -> Result<User> {
            let id = Uuid::new_v4().to_string();
            let record = UserRecord {
                username,
                created_at: Utc::now().timestamp_millis(),
            };
            let bytes = encode(&record)?;

            let write_txn = db.begin_write()?;
            {
                let mut users = write_txn.open_table(tables::USERS)?;
                users.insert(id.as_str(), bytes.as_slice())?;
            }
            write_txn.commit()?;

            Ok(User::from_record(id, record))
        })
        .await??;

        tracing::info!("New user created: {}", user.id);

        Ok(user)
    }

    /// List every user in creation order
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let db = self.db.clone();

        let users = tokio::task::spawn_blocking(move || -> Result<Vec<User>> {
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(tables::USERS)?;

            let mut records = Vec::new();
            for entry in table.iter()? {
                let (key, value) = entry?;
                let record: UserRecord = decode(value.value())?;
                records.push((key.value().to_string(), record));
            }

            records.sort_by(|(a_id, a), (b_id, b)| {
                a.created_at.cmp(&b.created_at).then_with(|| a_id.cmp(b_id))
            });

            Ok(records
                .into_iter()
                .map(|(id, record)| User::from_record(id, record))
                .collect())
        })
        .await??;

        tracing::debug!("Listed {} users", users.len());

        Ok(users)
    }
}
