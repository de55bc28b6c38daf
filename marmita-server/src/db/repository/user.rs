//! User Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{User, UserCreate, UserUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const USER_TABLE: &str = "usuario";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM usuario ORDER BY nome")
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record_id = parse_id(USER_TABLE, id)?;
        let user: Option<User> = self.base.db().select(record_id).await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM usuario WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user
    ///
    /// Email uniqueness is enforced here; only the argon2 hash of the
    /// password is stored.
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                data.email
            )));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        // The hash is skip_serializing on the model, so a raw CREATE is used
        // instead of .content() to get it into the document.
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE usuario SET
                    nome = $nome,
                    email = $email,
                    senha_hash = $senha_hash,
                    role = $role,
                    telefone = $telefone
                RETURN AFTER"#,
            )
            .bind(("nome", data.name))
            .bind(("email", data.email))
            .bind(("senha_hash", password_hash))
            .bind(("role", data.role))
            .bind(("telefone", data.phone))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Partially update a user
    ///
    /// Only provided fields are written; an empty patch returns the stored
    /// record unchanged. Email uniqueness is only enforced at creation
    /// time, not here.
    pub async fn update(&self, id: &str, data: UserUpdate) -> RepoResult<User> {
        let record_id = parse_id(USER_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("nome = $nome");
        }
        if data.email.is_some() {
            set_parts.push("email = $email");
        }
        if data.role.is_some() {
            set_parts.push("role = $role");
        }
        if data.phone.is_some() {
            set_parts.push("telefone = $telefone");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(query_str).bind(("thing", record_id));

        if let Some(v) = data.name {
            query = query.bind(("nome", v));
        }
        if let Some(v) = data.email {
            query = query.bind(("email", v));
        }
        if let Some(v) = data.role {
            query = query.bind(("role", v));
        }
        if let Some(v) = data.phone {
            query = query.bind(("telefone", v));
        }

        let mut result = query.await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    /// Hard delete a user
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_id(USER_TABLE, id)?;
        let deleted: Option<User> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
