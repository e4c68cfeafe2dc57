use domain::{DomainError, DomainResult, MovieId, Rating, RatingId, RatingProps, RatingResponse};

use super::Mapper;
use crate::repository::entities::{MovieRef, RatingRecord};

pub struct RatingMapper;

impl Mapper for RatingMapper {
    type Domain = Rating;
    type Record = RatingRecord;
    type Json = RatingResponse;

    fn to_domain(record: &RatingRecord) -> DomainResult<Rating> {
        let movie = record
            .movie
            .as_ref()
            .ok_or_else(|| DomainError::validation("movie: Rating must reference a movie"))?;

        Rating::create(
            RatingProps::new(record.score, MovieId::new(movie.id.clone()))
                .with_comment(record.comment.clone()),
            Some(RatingId::new(record.id.clone())),
        )
    }

    fn to_persistence(rating: &Rating) -> RatingRecord {
        RatingRecord {
            id: rating.id().to_string(),
            score: rating.score().value(),
            comment: rating.comment().to_string(),
            movie: Some(MovieRef::stub(rating.movie_id().as_str())),
        }
    }

    fn to_json(rating: &Rating) -> RatingResponse {
        RatingResponse::from(rating)
    }
}
