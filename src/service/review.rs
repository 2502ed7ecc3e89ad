use crate::{
    abstract_trait::{DynReviewRepository, ReviewServiceTrait},
    domain::responses::{MessageResponse, ReviewResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct ReviewService {
    repository: DynReviewRepository,
}

impl ReviewService {
    pub fn new(repository: DynReviewRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn find_all(&self) -> Result<Vec<ReviewResponse>, ServiceError> {
        let reviews = self.repository.find_all().await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let affected = self.repository.delete(id).await?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Review not found".into()));
        }

        Ok(MessageResponse::new("Review deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::ReviewRepositoryTrait, errors::RepositoryError, model::Review};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryReviewRepository {
        rows: Mutex<Vec<Review>>,
    }

    #[async_trait]
    impl ReviewRepositoryTrait for InMemoryReviewRepository {
        async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.review_id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    #[tokio::test]
    async fn deleting_missing_review_is_not_found() {
        let service = ReviewService::new(Arc::new(InMemoryReviewRepository::default()));

        let err = service.delete(3).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Review not found"));
    }

    #[tokio::test]
    async fn deleting_existing_review_reports_success() {
        let repo = Arc::new(InMemoryReviewRepository::default());
        repo.rows.lock().unwrap().push(Review {
            review_id: 3,
            customer_name: "Ada".into(),
            product_name: "Keyboard".into(),
            rating: Some(5),
            review_text: Some("great".into()),
            review_date: None,
        });

        let service = ReviewService::new(repo.clone());
        let deleted = service.delete(3).await.unwrap();

        assert_eq!(deleted.message, "Review deleted successfully");
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
