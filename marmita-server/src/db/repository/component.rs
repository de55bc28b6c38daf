//! Component Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Component, ComponentCreate, ComponentUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const COMPONENT_TABLE: &str = "componente";

#[derive(Clone)]
pub struct ComponentRepository {
    base: BaseRepository,
}

impl ComponentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all components
    pub async fn find_all(&self) -> RepoResult<Vec<Component>> {
        let components: Vec<Component> = self
            .base
            .db()
            .query("SELECT * FROM componente ORDER BY nome")
            .await?
            .take(0)?;
        Ok(components)
    }

    /// Find component by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Component>> {
        let record_id = parse_id(COMPONENT_TABLE, id)?;
        let component: Option<Component> = self.base.db().select(record_id).await?;
        Ok(component)
    }

    /// Find components by name (order selections reference components by name)
    pub async fn find_by_names(&self, names: Vec<String>) -> RepoResult<Vec<Component>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let components: Vec<Component> = self
            .base
            .db()
            .query("SELECT * FROM componente WHERE nome IN $nomes")
            .bind(("nomes", names))
            .await?
            .take(0)?;
        Ok(components)
    }

    /// Create a new component
    pub async fn create(&self, data: ComponentCreate) -> RepoResult<Component> {
        let component = Component {
            id: None,
            name: data.name,
            kind: data.kind,
            packaged_separately: data.packaged_separately,
            extra_price_cents: data.extra_price_cents,
            active: data.active,
            dietary_tags: data.dietary_tags,
        };

        let created: Option<Component> = self
            .base
            .db()
            .create(COMPONENT_TABLE)
            .content(component)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create component".to_string()))
    }

    /// Partially update a component
    pub async fn update(&self, id: &str, data: ComponentUpdate) -> RepoResult<Component> {
        let record_id = parse_id(COMPONENT_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("nome = $nome");
        }
        if data.kind.is_some() {
            set_parts.push("tipo = $tipo");
        }
        if data.packaged_separately.is_some() {
            set_parts.push("embalagem_separada = $embalagem_separada");
        }
        if data.extra_price_cents.is_some() {
            set_parts.push("preco_adicional_centavos = $preco_adicional_centavos");
        }
        if data.active.is_some() {
            set_parts.push("ativo = $ativo");
        }
        if data.dietary_tags.is_some() {
            set_parts.push("tags_dieteticas = $tags_dieteticas");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Component {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(query_str).bind(("thing", record_id));

        if let Some(v) = data.name {
            query = query.bind(("nome", v));
        }
        if let Some(v) = data.kind {
            query = query.bind(("tipo", v));
        }
        if let Some(v) = data.packaged_separately {
            query = query.bind(("embalagem_separada", v));
        }
        if let Some(v) = data.extra_price_cents {
            query = query.bind(("preco_adicional_centavos", v));
        }
        if let Some(v) = data.active {
            query = query.bind(("ativo", v));
        }
        if let Some(v) = data.dietary_tags {
            query = query.bind(("tags_dieteticas", v));
        }

        let mut result = query.await?;
        let components: Vec<Component> = result.take(0)?;
        components
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Component {} not found", id)))
    }

    /// Hard delete a component
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_id(COMPONENT_TABLE, id)?;
        let deleted: Option<Component> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Component {} not found", id)));
        }
        Ok(())
    }
}
