use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ReviewCommand {
    vendor_rating: i32,
    driver_rating: Option<i32>,
    comment: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewCommandError {
    #[error("Ratings must be between 1 and 5")]
    RatingOutOfRange,

    #[error("Comment cannot exceed 500 characters")]
    CommentTooLong,
}

impl ReviewCommand {
    pub fn new(
        vendor_rating: i32,
        driver_rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Self, ReviewCommandError> {
        if !(1..=5).contains(&vendor_rating) {
            return Err(ReviewCommandError::RatingOutOfRange);
        }
        if let Some(rating) = driver_rating {
            if !(1..=5).contains(&rating) {
                return Err(ReviewCommandError::RatingOutOfRange);
            }
        }

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(ref c) = comment {
            if c.len() > 500 {
                return Err(ReviewCommandError::CommentTooLong);
            }
        }

        Ok(Self {
            vendor_rating,
            driver_rating,
            comment,
        })
    }

    pub fn vendor_rating(&self) -> i32 {
        self.vendor_rating
    }

    pub fn driver_rating(&self) -> Option<i32> {
        self.driver_rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Order belongs to another customer")]
    NotOwner,

    #[error("Only delivered orders can be reviewed")]
    NotDelivered,

    #[error("Order already reviewed")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// One review per delivered order; ratings feed the vendor and driver
/// aggregates.
#[async_trait]
pub trait ReviewOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
        command: ReviewCommand,
    ) -> Result<(), ReviewOrderError>;
}
