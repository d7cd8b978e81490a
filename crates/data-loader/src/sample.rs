//! Built-in demo catalog.
//!
//! Twelve well-known films used when no CSV catalog is supplied.

use crate::types::{MovieId, MovieRecord};

#[allow(clippy::too_many_arguments)]
fn movie(
    id: MovieId,
    title: &str,
    overview: &str,
    release_date: &str,
    poster_path: &str,
    vote_average: f32,
    genres: &[&str],
    duration: &str,
    director: &str,
    cast: &[&str],
) -> MovieRecord {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    MovieRecord {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        release_date: release_date.to_string(),
        poster_path: poster_path.to_string(),
        vote_average,
        genres: owned(genres),
        duration: Some(duration.to_string()),
        director: Some(director.to_string()),
        cast: Some(owned(cast)),
    }
}

/// The demo catalog, in its canonical order
pub fn sample_movies() -> Vec<MovieRecord> {
    vec![
        movie(
            1,
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "1994-09-23",
            "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
            8.7,
            &["Drama", "Crime"],
            "2h 22m",
            "Frank Darabont",
            &["Tim Robbins", "Morgan Freeman", "Bob Gunton"],
        ),
        movie(
            2,
            "The Godfather",
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "1972-03-14",
            "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
            8.7,
            &["Drama", "Crime"],
            "2h 55m",
            "Francis Ford Coppola",
            &["Marlon Brando", "Al Pacino", "James Caan"],
        ),
        movie(
            3,
            "The Dark Knight",
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "2008-07-16",
            "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            8.5,
            &["Action", "Crime", "Drama", "Thriller"],
            "2h 32m",
            "Christopher Nolan",
            &["Christian Bale", "Heath Ledger", "Aaron Eckhart"],
        ),
        movie(
            4,
            "Pulp Fiction",
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
            "1994-10-14",
            "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
            8.5,
            &["Crime", "Thriller"],
            "2h 34m",
            "Quentin Tarantino",
            &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
        ),
        movie(
            5,
            "Inception",
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "2010-07-15",
            "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",
            8.3,
            &["Action", "Adventure", "Sci-Fi", "Thriller"],
            "2h 28m",
            "Christopher Nolan",
            &["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Ellen Page"],
        ),
        movie(
            6,
            "Interstellar",
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "2014-11-05",
            "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            8.4,
            &["Adventure", "Drama", "Sci-Fi"],
            "2h 49m",
            "Christopher Nolan",
            &["Matthew McConaughey", "Jessica Chastain", "Anne Hathaway"],
        ),
        movie(
            7,
            "Fight Club",
            "An insomniac office worker and a devil-may-care soapmaker form an underground fight club that evolves into something much, much more.",
            "1999-10-15",
            "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            8.4,
            &["Drama"],
            "2h 19m",
            "David Fincher",
            &["Brad Pitt", "Edward Norton", "Helena Bonham Carter"],
        ),
        movie(
            8,
            "The Matrix",
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "1999-03-30",
            "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            8.2,
            &["Action", "Sci-Fi"],
            "2h 16m",
            "Lana Wachowski",
            &["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"],
        ),
        movie(
            9,
            "Parasite",
            "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
            "2019-05-30",
            "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
            8.5,
            &["Comedy", "Drama", "Thriller"],
            "2h 12m",
            "Bong Joon-ho",
            &["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong"],
        ),
        movie(
            10,
            "Spirited Away",
            "During her family's move to the suburbs, a sullen 10-year-old girl wanders into a world ruled by gods, witches, and spirits, and where humans are changed into beasts.",
            "2001-07-20",
            "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
            8.5,
            &["Animation", "Family", "Fantasy"],
            "2h 5m",
            "Hayao Miyazaki",
            &["Rumi Hiiragi", "Miyu Irino", "Mari Natsuki"],
        ),
        movie(
            11,
            "Joker",
            "In Gotham City, mentally troubled comedian Arthur Fleck is disregarded and mistreated by society. He then embarks on a downward spiral of revolution and bloody crime. This path brings him face-to-face with his alter-ego: the Joker.",
            "2019-10-02",
            "/udDclJoHjfjb8Ekgsd4FDteOkCU.jpg",
            8.2,
            &["Crime", "Drama", "Thriller"],
            "2h 2m",
            "Todd Phillips",
            &["Joaquin Phoenix", "Robert De Niro", "Zazie Beetz"],
        ),
        movie(
            12,
            "Avengers: Endgame",
            "After the devastating events of Avengers: Infinity War, the universe is in ruins. With the help of remaining allies, the Avengers assemble once more in order to reverse Thanos' actions and restore balance to the universe.",
            "2019-04-24",
            "/or06FN3Dka5tukK1e9sl16pB3iy.jpg",
            8.3,
            &["Action", "Adventure", "Sci-Fi"],
            "3h 1m",
            "Anthony Russo",
            &["Robert Downey Jr.", "Chris Evans", "Mark Ruffalo"],
        ),
    ]
}
