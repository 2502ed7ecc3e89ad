use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{CategoryCreatedResponse, CategoryResponse, MessageResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let categories = self.repository.find_all().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryCreatedResponse, ServiceError> {
        let id = self.repository.create(req).await?;

        Ok(CategoryCreatedResponse {
            message: "Category added successfully".into(),
            category_id: id,
        })
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let affected = self.repository.update(id, req).await?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        Ok(MessageResponse::new("Category updated successfully"))
    }

    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let affected = self.repository.delete(id).await?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        Ok(MessageResponse::new("Category deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::CategoryRepositoryTrait, errors::RepositoryError, model::Category,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryCategoryRepository {
        rows: Mutex<Vec<Category>>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for InMemoryCategoryRepository {
        async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, req: &CreateCategoryRequest) -> Result<i32, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i32 + 1;
            rows.push(Category {
                category_id: id,
                title: req.title.clone().unwrap_or_default(),
            });
            Ok(id)
        }

        async fn update(
            &self,
            id: i32,
            req: &UpdateCategoryRequest,
        ) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.category_id == id) {
                Some(row) => {
                    row.title = req.title.clone().unwrap_or_default();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.category_id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn service() -> (CategoryService, Arc<InMemoryCategoryRepository>) {
        let repo = Arc::new(InMemoryCategoryRepository::default());
        (CategoryService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn created_category_shows_up_in_listing() {
        let (service, _) = service();

        let created = service
            .create(&CreateCategoryRequest {
                title: Some("Electronics".into()),
            })
            .await
            .unwrap();

        assert_eq!(created.message, "Category added successfully");

        let listed = service.find_all().await.unwrap();
        assert!(
            listed
                .iter()
                .any(|c| c.category_id == created.category_id && c.title == "Electronics")
        );
    }

    #[tokio::test]
    async fn updating_missing_category_is_not_found() {
        let (service, repo) = service();

        let err = service
            .update(
                42,
                &UpdateCategoryRequest {
                    title: Some("Books".into()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Category not found"));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_missing_category_is_not_found() {
        let (service, _) = service();

        let err = service.delete(7).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Category not found"));
    }

    #[tokio::test]
    async fn update_reports_success_message() {
        let (service, _) = service();

        let created = service
            .create(&CreateCategoryRequest {
                title: Some("Garden".into()),
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.category_id,
                &UpdateCategoryRequest {
                    title: Some("Home & Garden".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.message, "Category updated successfully");
    }
}
