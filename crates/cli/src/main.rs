use anyhow::{anyhow, Context, Result};
use catalog::{CatalogService, InMemoryCatalog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_csv_files, sample_csv_template, MovieId, MovieRecord};
use pipeline::preference::{DEFAULT_MIN_RATING, DEFAULT_YEAR_RANGE};
use pipeline::{RecommendationCategory, UserPreference};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// ReelPicks - Movie discovery from the command line
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Browse, import, and get preference-based movie recommendations", long_about = None)]
struct Cli {
    /// CSV files to use as the catalog instead of the built-in sample
    #[arg(short, long, global = true)]
    catalog: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse CSV files and show the imported movies
    Import {
        /// CSV files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show at most this many movies
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the CSV template, or write it to a file
    Template {
        /// Where to write the template
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get movie recommendations for a set of preferences
    Recommend {
        /// Preferred genre (repeat for several, up to 5)
        #[arg(long)]
        genre: Vec<String>,

        /// Earliest release year
        #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.0)]
        min_year: i32,

        /// Latest release year
        #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.1)]
        max_year: i32,

        /// Minimum rating (1.0 - 10.0, in steps of 0.5)
        #[arg(long, default_value_t = DEFAULT_MIN_RATING)]
        rating: f32,

        /// Keyword (repeat for several, up to 5; not used for matching yet)
        #[arg(long)]
        keyword: Vec<String>,

        /// Number of recommendations to show
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// List movies in a browsing category
    Category {
        /// action, comedy, drama, horror, scifi, family, romance, or documentary
        name: RecommendationCategory,
    },

    /// List movies carrying a genre (case-insensitive)
    Genre {
        name: String,
    },

    /// Show the highest rated movies
    TopRated {
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Show the most recently released movies
    Recent {
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Show full details for one movie
    Show {
        /// Movie ID to display
        id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Import { files, limit } => handle_import(&files, limit, cli.json)?,
        Commands::Template { output } => handle_template(output)?,
        command => {
            let service = build_service(&cli.catalog)?;
            handle_query(&service, command, cli.json).await?
        }
    }

    Ok(())
}

/// Build the catalog service from CSV files, or the sample catalog
fn build_service(catalog_files: &[PathBuf]) -> Result<CatalogService> {
    let source = if catalog_files.is_empty() {
        InMemoryCatalog::sample()
    } else {
        let movies = load_csv_files(catalog_files).context("Failed to load catalog CSV")?;
        InMemoryCatalog::new("csv", movies)
    };
    Ok(CatalogService::new(Arc::new(source)))
}

/// Handle the 'import' command
fn handle_import(files: &[PathBuf], limit: Option<usize>, json: bool) -> Result<()> {
    let start = Instant::now();
    let movies = load_csv_files(files).context("The CSV file could not be parsed. Please check the format.")?;
    info!("Loaded {} movies from {} file(s) in {:?}", movies.len(), files.len(), start.elapsed());

    let shown = &movies[..limit.unwrap_or(movies.len()).min(movies.len())];
    print_movies(&format!("Imported {} movies", movies.len()), shown, json)
}

/// Handle the 'template' command
fn handle_template(output: Option<PathBuf>) -> Result<()> {
    let template = sample_csv_template();
    match output {
        Some(path) => {
            std::fs::write(&path, template)
                .with_context(|| format!("Failed to write template to {}", path.display()))?;
            println!("{} Template written to {}", "✓".green(), path.display());
        }
        None => println!("{}", template),
    }
    Ok(())
}

/// Handle every command that reads the catalog
async fn handle_query(service: &CatalogService, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Recommend {
            genre,
            min_year,
            max_year,
            rating,
            keyword,
            limit,
        } => {
            let preference = UserPreference::builder()
                .genres(genre)
                .years(min_year, max_year)
                .rating(rating)
                .keywords(keyword)
                .build();
            let mut movies = service.recommendations(&preference).await?;
            movies.truncate(limit);
            print_movies("Movie Recommendations", &movies, json)
        }
        Commands::Category { name } => {
            let movies = service.category_movies(name).await?;
            print_movies(&format!("{} movies", name.genre_name()), &movies, json)
        }
        Commands::Genre { name } => {
            let movies = service.movies_by_genre(&name).await?;
            print_movies(&format!("{} movies", name), &movies, json)
        }
        Commands::TopRated { limit } => {
            let movies = service.top_rated(limit).await?;
            print_movies("Top Rated", &movies, json)
        }
        Commands::Recent { limit } => {
            let movies = service.recent(limit).await?;
            print_movies("Recent Releases", &movies, json)
        }
        Commands::Show { id } => {
            let movie = service
                .fetch_movie_by_id(id)
                .await?
                .ok_or_else(|| anyhow!("Movie {} not found in catalog '{}'", id, service.source_name()))?;
            print_movie_details(&movie, json)
        }
        Commands::Import { .. } | Commands::Template { .. } => {
            Err(anyhow!("command does not read the catalog"))
        }
    }
}

/// Helper function to format and print a list of movies
fn print_movies(heading: &str, movies: &[MovieRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(movies)?);
        return Ok(());
    }

    println!("{}", heading.bold().blue());
    if movies.is_empty() {
        println!("  No movies match.");
        return Ok(());
    }
    for (index, movie) in movies.iter().enumerate() {
        let year = movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "????".to_string());
        println!(
            "{}. {} ({}) [{}] - Rating: {:.1}",
            (index + 1).to_string().green(),
            movie.title,
            year,
            movie.genres.join(", "),
            movie.vote_average
        );
    }
    Ok(())
}

/// Helper function to print every field of one movie
fn print_movie_details(movie: &MovieRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(movie)?);
        return Ok(());
    }

    println!("{}", format!("{} (ID {})", movie.title, movie.id).bold().blue());
    println!("{}Released: {}", "• ".green(), movie.release_date);
    println!("{}Rating: {:.1}/10", "• ".green(), movie.vote_average);
    println!("{}Genres: {}", "• ".green(), movie.genres.join(", "));
    if let Some(duration) = &movie.duration {
        println!("{}Duration: {}", "• ".green(), duration);
    }
    if let Some(director) = &movie.director {
        println!("{}Director: {}", "• ".cyan(), director);
    }
    if let Some(cast) = &movie.cast {
        println!("{}Cast: {}", "• ".cyan(), cast.join(", "));
    }
    println!("{}Poster: {}", "• ".cyan(), movie.poster_path);
    println!();
    println!("{}", movie.overview);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_defaults() {
        let cli = Cli::try_parse_from(["reel-picks", "recommend", "--genre", "Sci-Fi"]).unwrap();

        match cli.command {
            Commands::Recommend { genre, min_year, max_year, rating, keyword, limit } => {
                assert_eq!(genre, vec!["Sci-Fi".to_string()]);
                assert_eq!((min_year, max_year), (1990, 2023));
                assert_eq!(rating, 7.0);
                assert!(keyword.is_empty());
                assert_eq!(limit, 5);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_category_names_are_validated() {
        let cli = Cli::try_parse_from(["reel-picks", "category", "scifi"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Category { name: RecommendationCategory::SciFi }
        ));

        assert!(Cli::try_parse_from(["reel-picks", "category", "western"]).is_err());
    }

    #[test]
    fn test_global_catalog_flag() {
        let cli = Cli::try_parse_from([
            "reel-picks", "top-rated", "--catalog", "a.csv", "--catalog", "b.csv", "--json",
        ])
        .unwrap();

        assert_eq!(cli.catalog, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::TopRated { limit: 5 }));
    }

    #[test]
    fn test_import_requires_files() {
        assert!(Cli::try_parse_from(["reel-picks", "import"]).is_err());
    }

    #[test]
    fn test_sample_service_builds() {
        let service = build_service(&[]).unwrap();
        assert_eq!(service.source_name(), "sample");

        assert!(build_service(&[PathBuf::from("missing/catalog.csv")]).is_err());
    }
}
