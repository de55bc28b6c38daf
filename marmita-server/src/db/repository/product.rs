//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "produto";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM produto ORDER BY nome")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record_id = parse_id(PRODUCT_TABLE, id)?;
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Find products by name (order items reference products by name)
    pub async fn find_by_names(&self, names: Vec<String>) -> RepoResult<Vec<Product>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM produto WHERE nome IN $nomes")
            .bind(("nomes", names))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.price_cents < 0 {
            return Err(RepoError::Validation(
                "preco_centavos must not be negative".into(),
            ));
        }

        let product = Product {
            id: None,
            name: data.name,
            description: data.description,
            price_cents: data.price_cents,
            image_url: data.image_url,
            category: data.category,
            active: data.active,
            kind: data.kind,
            composition_rules: data.composition_rules,
            dietary_tags: data.dietary_tags,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Partially update a product
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let record_id = parse_id(PRODUCT_TABLE, id)?;

        if let Some(price) = data.price_cents
            && price < 0
        {
            return Err(RepoError::Validation(
                "preco_centavos must not be negative".into(),
            ));
        }

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("nome = $nome");
        }
        if data.description.is_some() {
            set_parts.push("descricao = $descricao");
        }
        if data.price_cents.is_some() {
            set_parts.push("preco_centavos = $preco_centavos");
        }
        if data.image_url.is_some() {
            set_parts.push("imagem_url = $imagem_url");
        }
        if data.category.is_some() {
            set_parts.push("categoria = $categoria");
        }
        if data.active.is_some() {
            set_parts.push("ativo = $ativo");
        }
        if data.kind.is_some() {
            set_parts.push("tipo = $tipo");
        }
        if data.composition_rules.is_some() {
            set_parts.push("regras_composicao = $regras_composicao");
        }
        if data.dietary_tags.is_some() {
            set_parts.push("tags_dieteticas = $tags_dieteticas");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));
        let mut query = self.base.db().query(query_str).bind(("thing", record_id));

        if let Some(v) = data.name {
            query = query.bind(("nome", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("descricao", v));
        }
        if let Some(v) = data.price_cents {
            query = query.bind(("preco_centavos", v));
        }
        if let Some(v) = data.image_url {
            query = query.bind(("imagem_url", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("categoria", v));
        }
        if let Some(v) = data.active {
            query = query.bind(("ativo", v));
        }
        if let Some(v) = data.kind {
            query = query.bind(("tipo", v));
        }
        if let Some(v) = data.composition_rules {
            query = query.bind(("regras_composicao", v));
        }
        if let Some(v) = data.dietary_tags {
            query = query.bind(("tags_dieteticas", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_id(PRODUCT_TABLE, id)?;
        let deleted: Option<Product> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}
