use domain::{
    ActorId, DomainError, DomainResult, Movie, MovieId, MovieProps, MovieResponse, Score,
};

use super::Mapper;
use crate::repository::entities::{ActorRef, MovieRecord};

pub struct MovieMapper;

impl Mapper for MovieMapper {
    type Domain = Movie;
    type Record = MovieRecord;
    type Json = MovieResponse;

    fn to_domain(record: &MovieRecord) -> DomainResult<Movie> {
        let actors = record
            .actors
            .iter()
            .map(|actor| ActorId::new(actor.id.clone()))
            .collect();
        let ratings = record
            .ratings
            .iter()
            .map(|rating| Score::new(rating.score))
            .collect::<DomainResult<Vec<_>>>()
            .map_err(|e| DomainError::invalid_field("ratings", e))?;

        Movie::create(
            MovieProps::new(record.title.clone(), record.description.clone())
                .with_actors(actors)
                .with_ratings(ratings),
            Some(MovieId::new(record.id.clone())),
        )
    }

    /// Ratings are left out: they are written through the rating aggregate.
    fn to_persistence(movie: &Movie) -> MovieRecord {
        MovieRecord {
            id: movie.id().to_string(),
            title: movie.title().value().to_string(),
            description: movie.description().value().to_string(),
            actors: movie
                .actors()
                .iter()
                .map(|id| ActorRef::stub(id.as_str()))
                .collect(),
            ratings: Vec::new(),
        }
    }

    fn to_json(movie: &Movie) -> MovieResponse {
        MovieResponse::from(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::entities::RatingRef;

    fn record() -> MovieRecord {
        MovieRecord {
            id: "movie-1".to_string(),
            title: "Titanic".to_string(),
            description: "A tragic love story aboard the Titanic.".to_string(),
            actors: vec![ActorRef::stub("a-1")],
            ratings: vec![
                RatingRef { id: "r-1".to_string(), score: 5.0 },
                RatingRef { id: "r-2".to_string(), score: 3.0 },
            ],
        }
    }

    #[test]
    fn test_to_domain_collects_scores() {
        let movie = MovieMapper::to_domain(&record()).unwrap();
        assert_eq!(movie.ratings().len(), 2);
        assert_eq!(movie.average_rating(), 4.0);
        assert_eq!(MovieMapper::to_json(&movie).ratings, 4.0);
    }

    #[test]
    fn test_to_domain_rejects_out_of_range_rating() {
        let mut bad = record();
        bad.ratings[0].score = 12.0;
        assert_eq!(
            MovieMapper::to_domain(&bad).unwrap_err(),
            DomainError::validation("ratings: Score must be between 0 and 10")
        );
    }

    #[test]
    fn test_to_persistence_drops_ratings() {
        let movie = MovieMapper::to_domain(&record()).unwrap();
        let stored = MovieMapper::to_persistence(&movie);
        assert!(stored.ratings.is_empty());
        assert_eq!(stored.actors, vec![ActorRef::stub("a-1")]);
    }

    #[test]
    fn test_round_trip_modulo_ratings() {
        let movie = MovieMapper::to_domain(&record()).unwrap();
        let again = MovieMapper::to_domain(&MovieMapper::to_persistence(&movie)).unwrap();

        let before = MovieMapper::to_json(&movie);
        let after = MovieMapper::to_json(&again);
        assert_eq!(after.title, before.title);
        assert_eq!(after.actors, before.actors);
        assert_eq!(after.ratings, 0.0);
    }
}
