//! In-memory storage backing every repository contract.
//!
//! Rows are kept flat, the way a relational store keeps them: actor and movie
//! rows carry no relation lists, the movie-actor relation lives in a link
//! table, and ratings point at their movie. Reads hydrate the relations back
//! into the records before they go through the mappers.

use std::cmp::Ordering;

use tokio::sync::RwLock;

use common::{AppError, AppResult, ListOptions, Page, SortOrder};

use super::entities::{
    ActorRecord, ActorRef, MovieRecord, MovieRef, RatingRecord, RatingRef, UserRecord,
};

/// Catalog held in process memory. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Row tables, in insertion order.
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub(super) actors: Vec<ActorRecord>,
    pub(super) movies: Vec<MovieRecord>,
    pub(super) ratings: Vec<RatingRecord>,
    pub(super) users: Vec<UserRecord>,
    pub(super) movie_actors: Vec<MovieActorLink>,
}

/// Row of the movie-actor link table.
///
/// Each side keeps its own ordering, so relinking a movie never reorders the
/// movie lists of its actors and the other way round.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct MovieActorLink {
    pub(super) movie_id: String,
    pub(super) actor_id: String,
    /// Position of the movie in the actor's list
    pub(super) movie_pos: usize,
    /// Position of the actor in the movie's list
    pub(super) actor_pos: usize,
}

impl Tables {
    pub(super) fn actor_row(&self, id: &str) -> Option<&ActorRecord> {
        self.actors.iter().find(|row| row.id == id)
    }

    pub(super) fn movie_row(&self, id: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|row| row.id == id)
    }

    pub(super) fn rating_row(&self, id: &str) -> Option<&RatingRecord> {
        self.ratings.iter().find(|row| row.id == id)
    }

    pub(super) fn hydrate_actor(&self, row: &ActorRecord) -> ActorRecord {
        let mut links: Vec<&MovieActorLink> = self
            .movie_actors
            .iter()
            .filter(|link| link.actor_id == row.id)
            .collect();
        links.sort_by_key(|link| link.movie_pos);

        let movies = links
            .into_iter()
            .map(|link| MovieRef {
                id: link.movie_id.clone(),
                title: self.movie_row(&link.movie_id).map(|movie| movie.title.clone()),
            })
            .collect();

        ActorRecord {
            movies,
            ..row.clone()
        }
    }

    pub(super) fn hydrate_movie(&self, row: &MovieRecord) -> MovieRecord {
        let mut links: Vec<&MovieActorLink> = self
            .movie_actors
            .iter()
            .filter(|link| link.movie_id == row.id)
            .collect();
        links.sort_by_key(|link| link.actor_pos);

        let actors = links
            .into_iter()
            .map(|link| ActorRef {
                id: link.actor_id.clone(),
                name: self.actor_row(&link.actor_id).map(ActorRecord::display_name),
            })
            .collect();
        let ratings = self
            .ratings
            .iter()
            .filter(|rating| rating.movie.as_ref().is_some_and(|movie| movie.id == row.id))
            .map(|rating| RatingRef {
                id: rating.id.clone(),
                score: rating.score,
            })
            .collect();

        MovieRecord {
            actors,
            ratings,
            ..row.clone()
        }
    }

    pub(super) fn hydrate_rating(&self, row: &RatingRecord) -> RatingRecord {
        let movie = row.movie.as_ref().map(|movie| MovieRef {
            id: movie.id.clone(),
            title: self.movie_row(&movie.id).map(|found| found.title.clone()),
        });

        RatingRecord {
            movie,
            ..row.clone()
        }
    }

    pub(super) fn ensure_movies_exist<'a>(
        &self,
        movies: impl IntoIterator<Item = &'a MovieRef>,
    ) -> AppResult<()> {
        for movie in movies {
            if self.movie_row(&movie.id).is_none() {
                return Err(AppError::persistence(format!(
                    "Movie with id {} not found",
                    movie.id
                )));
            }
        }
        Ok(())
    }

    pub(super) fn ensure_actors_exist(&self, actors: &[ActorRef]) -> AppResult<()> {
        for actor in actors {
            if self.actor_row(&actor.id).is_none() {
                return Err(AppError::persistence(format!(
                    "Actor with id {} not found",
                    actor.id
                )));
            }
        }
        Ok(())
    }

    /// Replace the movies an actor is linked to, in the given order.
    ///
    /// Links that survive keep their place in each movie's actor list; new
    /// links go to the end of it.
    pub(super) fn link_actor(&mut self, actor_id: &str, movies: &[MovieRef]) {
        self.movie_actors.retain(|link| {
            link.actor_id != actor_id || movies.iter().any(|movie| movie.id == link.movie_id)
        });

        for (pos, movie) in movies.iter().enumerate() {
            match self.link_index(&movie.id, actor_id) {
                Some(index) => self.movie_actors[index].movie_pos = pos,
                None => {
                    let actor_pos = self.next_actor_pos(&movie.id);
                    self.movie_actors.push(MovieActorLink {
                        movie_id: movie.id.clone(),
                        actor_id: actor_id.to_string(),
                        movie_pos: pos,
                        actor_pos,
                    });
                }
            }
        }
    }

    /// Replace the actors a movie is linked to, in the given order.
    ///
    /// Links that survive keep their place in each actor's movie list; new
    /// links go to the end of it.
    pub(super) fn link_movie(&mut self, movie_id: &str, actors: &[ActorRef]) {
        self.movie_actors.retain(|link| {
            link.movie_id != movie_id || actors.iter().any(|actor| actor.id == link.actor_id)
        });

        for (pos, actor) in actors.iter().enumerate() {
            match self.link_index(movie_id, &actor.id) {
                Some(index) => self.movie_actors[index].actor_pos = pos,
                None => {
                    let movie_pos = self.next_movie_pos(&actor.id);
                    self.movie_actors.push(MovieActorLink {
                        movie_id: movie_id.to_string(),
                        actor_id: actor.id.clone(),
                        movie_pos,
                        actor_pos: pos,
                    });
                }
            }
        }
    }

    fn link_index(&self, movie_id: &str, actor_id: &str) -> Option<usize> {
        self.movie_actors
            .iter()
            .position(|link| link.movie_id == movie_id && link.actor_id == actor_id)
    }

    /// Slot after the last movie in the actor's list.
    fn next_movie_pos(&self, actor_id: &str) -> usize {
        self.movie_actors
            .iter()
            .filter(|link| link.actor_id == actor_id)
            .map(|link| link.movie_pos + 1)
            .max()
            .unwrap_or(0)
    }

    /// Slot after the last actor in the movie's list.
    fn next_actor_pos(&self, movie_id: &str) -> usize {
        self.movie_actors
            .iter()
            .filter(|link| link.movie_id == movie_id)
            .map(|link| link.actor_pos + 1)
            .max()
            .unwrap_or(0)
    }

    pub(super) fn remove_actor(&mut self, id: &str) -> bool {
        let before = self.actors.len();
        self.actors.retain(|row| row.id != id);
        if self.actors.len() == before {
            return false;
        }
        self.movie_actors.retain(|link| link.actor_id != id);
        true
    }

    /// Remove a movie together with its links and its ratings.
    pub(super) fn remove_movie(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|row| row.id != id);
        if self.movies.len() == before {
            return false;
        }
        self.movie_actors.retain(|link| link.movie_id != id);
        self.ratings
            .retain(|rating| rating.movie.as_ref().map_or(true, |movie| movie.id != id));
        true
    }
}

/// Value a listing is ordered by.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Case-insensitive substring test. `needle` is already lowercase.
pub(super) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter, sort and page a listing.
///
/// `matches` gets the lowercased search term. `sort_key` is only called with
/// a field from `sortable`; any other field is rejected up front.
pub(super) fn paginate<T>(
    items: Vec<T>,
    options: &ListOptions,
    sortable: &[&str],
    matches: impl Fn(&T, &str) -> bool,
    sort_key: impl Fn(&T, &str) -> SortKey,
) -> AppResult<Page<T>> {
    let sort_field = options.sort_by.as_deref();
    if let Some(field) = sort_field {
        if !sortable.contains(&field) {
            return Err(AppError::validation(format!(
                "Cannot sort by '{}', expected one of: {}",
                field,
                sortable.join(", ")
            )));
        }
    }

    let mut items: Vec<T> = match options.search_term().map(str::to_lowercase) {
        Some(needle) => items.into_iter().filter(|item| matches(item, &needle)).collect(),
        None => items,
    };

    if let Some(field) = sort_field {
        items.sort_by(|a, b| {
            let ordering = sort_key(a, field).compare(&sort_key(b, field));
            match options.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total = items.len() as u64;
    let offset = usize::try_from(options.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(options.limit()).unwrap_or(usize::MAX);
    let data = items.into_iter().skip(offset).take(limit).collect();

    Ok(Page::new(data, total))
}
