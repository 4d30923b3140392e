//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use folio_core::domain::{
    BlogPost, Category, ContactMessage, PortfolioProject, Tag, Talk, User, mask_email,
};
use folio_core::error::RepoError;
use folio_core::ports::{
    BaseRepository, BlogPostFilter, BlogPostRepository, CategoryRepository, ContactFilter,
    ContactRepository, PortfolioFilter, PortfolioRepository, TagRepository, TalkRepository,
    UserRepository,
};

use super::entity::{
    about_page, blog_post, blog_post_tag, category, contact_message, contact_page, home_page,
    portfolio_project, tag, talk, user,
};
use super::postgres_base::{PostgresBaseRepository, PostgresSingletonRepository, map_db_err};

pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;
pub type PostgresPortfolioRepository = PostgresBaseRepository<portfolio_project::Entity>;
pub type PostgresTalkRepository = PostgresBaseRepository<talk::Entity>;
pub type PostgresContactRepository = PostgresBaseRepository<contact_message::Entity>;
pub type PostgresCategoryRepository = PostgresBaseRepository<category::Entity>;
pub type PostgresTagRepository = PostgresBaseRepository<tag::Entity>;

pub type PostgresHomePageRepository = PostgresSingletonRepository<home_page::Entity>;
pub type PostgresAboutPageRepository = PostgresSingletonRepository<about_page::Entity>;
pub type PostgresContactPageRepository = PostgresSingletonRepository<contact_page::Entity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn list(&self, filter: PortfolioFilter) -> Result<Vec<PortfolioProject>, RepoError> {
        let mut query = portfolio_project::Entity::find();
        if filter.published_only {
            query = query.filter(portfolio_project::Column::Published.eq(true));
        }
        if filter.featured_only {
            query = query.filter(portfolio_project::Column::Featured.eq(true));
        }

        let rows = query
            .order_by_asc(portfolio_project::Column::SortOrder)
            .order_by_desc(portfolio_project::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PortfolioProject>, RepoError> {
        let result = portfolio_project::Entity::find()
            .filter(portfolio_project::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        portfolio_project::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl TalkRepository for PostgresTalkRepository {
    async fn list(&self, published_only: bool) -> Result<Vec<Talk>, RepoError> {
        let mut query = talk::Entity::find();
        if published_only {
            query = query.filter(talk::Column::Published.eq(true));
        }

        let rows = query
            .order_by_desc(talk::Column::Date)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        talk::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn list(&self, filter: ContactFilter) -> Result<Vec<ContactMessage>, RepoError> {
        let mut query = contact_message::Entity::find();
        if let Some(read) = filter.read {
            query = query.filter(contact_message::Column::Read.eq(read));
        }
        if let Some(replied) = filter.replied {
            query = query.filter(contact_message::Column::Replied.eq(replied));
        }

        let rows = query
            .order_by_desc(contact_message::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, unread_only: bool) -> Result<u64, RepoError> {
        let mut query = contact_message::Entity::find();
        if unread_only {
            query = query.filter(contact_message::Column::Read.eq(false));
        }
        query.count(&self.db).await.map_err(map_db_err)
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let result = category::Entity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let rows = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, RepoError> {
        let result = tag::Entity::find()
            .filter(tag::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Blog posts and their ordered tag links.
pub struct PostgresBlogPostRepository {
    db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn tag_ids_for<C: ConnectionTrait>(
        conn: &C,
        post_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Uuid>>, RepoError> {
        let links = blog_post_tag::Entity::find()
            .filter(blog_post_tag::Column::PostId.is_in(post_ids))
            .order_by_asc(blog_post_tag::Column::Position)
            .all(conn)
            .await
            .map_err(map_db_err)?;

        let mut by_post: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            by_post.entry(link.post_id).or_default().push(link.tag_id);
        }
        Ok(by_post)
    }

    async fn attach_tags(&self, models: Vec<blog_post::Model>) -> Result<Vec<BlogPost>, RepoError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let mut tags = Self::tag_ids_for(&self.db, models.iter().map(|m| m.id).collect()).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let tag_ids = tags.remove(&model.id).unwrap_or_default();
                let mut post = BlogPost::from(model);
                post.tag_ids = tag_ids;
                post
            })
            .collect())
    }

    async fn replace_tags<C: ConnectionTrait>(
        conn: &C,
        post_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), RepoError> {
        blog_post_tag::Entity::delete_many()
            .filter(blog_post_tag::Column::PostId.eq(post_id))
            .exec(conn)
            .await
            .map_err(map_db_err)?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let links = tag_ids
            .iter()
            .enumerate()
            .map(|(position, tag_id)| blog_post_tag::ActiveModel {
                post_id: Set(post_id),
                tag_id: Set(*tag_id),
                position: Set(position as i32),
            });
        blog_post_tag::Entity::insert_many(links)
            .exec(conn)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for PostgresBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = blog_post::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        match result {
            Some(model) => Ok(self.attach_tags(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let tag_ids = post.tag_ids.clone();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = blog_post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        Self::replace_tags(&txn, model.id, &tag_ids).await?;

        txn.commit().await.map_err(map_db_err)?;

        let mut saved = BlogPost::from(model);
        saved.tag_ids = tag_ids;
        Ok(saved)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let tag_ids = post.tag_ids.clone();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = blog_post::ActiveModel::for_edit(post)
            .update(&txn)
            .await
            .map_err(map_db_err)?;
        Self::replace_tags(&txn, model.id, &tag_ids).await?;

        txn.commit().await.map_err(map_db_err)?;

        let mut saved = BlogPost::from(model);
        saved.tag_ids = tag_ids;
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        blog_post_tag::Entity::delete_many()
            .filter(blog_post_tag::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        let result = blog_post::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list(&self, filter: BlogPostFilter) -> Result<Vec<BlogPost>, RepoError> {
        let mut query = blog_post::Entity::find();
        if filter.published_only {
            query = query.filter(blog_post::Column::Published.eq(true));
        }

        let models = query
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_tags(models).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let result = blog_post::Entity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        match result {
            Some(model) => Ok(self.attach_tags(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError> {
        let result = blog_post::Entity::update_many()
            .col_expr(
                blog_post::Column::Views,
                Expr::col(blog_post::Column::Views).add(1),
            )
            .filter(blog_post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self, published_only: bool) -> Result<u64, RepoError> {
        let mut query = blog_post::Entity::find();
        if published_only {
            query = query.filter(blog_post::Column::Published.eq(true));
        }
        query.count(&self.db).await.map_err(map_db_err)
    }
}
