/// Title-to-title recommendation demo: load a small catalog with its
/// precomputed similarity matrix, then print the top-5 neighbors for a
/// known title and the miss path for an unknown one.
use simspace::catalog::Catalog;
use simspace::matrix::SimilarityMatrix;
use simspace::recommender::RecommenderBuilder;

const CATALOG_DATA: &str = r#"
Alien; 1.00,0.95,0.55,0.82,0.60,0.50,0.45,0.35
Aliens; 0.95,1.00,0.50,0.72,0.78,0.62,0.48,0.40
Blade Runner; 0.55,0.50,1.00,0.40,0.35,0.58,0.70,0.65
The Thing; 0.82,0.72,0.40,1.00,0.66,0.42,0.38,0.30
Predator; 0.60,0.78,0.35,0.66,1.00,0.64,0.44,0.46
The Terminator; 0.50,0.62,0.58,0.42,0.64,1.00,0.68,0.72
Total Recall; 0.45,0.48,0.70,0.38,0.44,0.68,1.00,0.60
RoboCop; 0.35,0.40,0.65,0.30,0.46,0.72,0.60,1.00
"#;

/// Parse `Title; s0,s1,...` lines into titles and matrix rows.
fn parse_catalog_block(block: &str) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut titles = Vec::new();
    let mut rows = Vec::new();

    for line in block.lines() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        let mut parts = l.splitn(2, ';');
        let title = parts.next().unwrap().trim().to_string();
        let rest = parts.next().unwrap_or("").trim();

        let scores: Vec<f64> =
            rest.split(',').map(|s| s.trim().parse::<f64>().unwrap()).collect();

        titles.push(title);
        rows.push(scores);
    }

    (titles, rows)
}

fn main() {
    env_logger::init();

    let (titles, rows) = parse_catalog_block(CATALOG_DATA);
    let catalog = Catalog::from_titles(titles);
    let matrix = SimilarityMatrix::from_rows(rows).expect("demo matrix is square");

    let recommender = RecommenderBuilder::new()
        .build(catalog, matrix)
        .expect("demo catalog and matrix agree");

    let query = "Alien";
    let position = recommender.catalog().index_of(query).expect("query title exists");
    let ranked = recommender.recommend(position, recommender.params().top_k).unwrap();

    println!("Because you liked {query:?}:");
    for (rank, (p, score)) in ranked.iter().enumerate() {
        let title = recommender.catalog().title_at(*p).unwrap();
        println!("  {}. {} (score={:.2})", rank + 1, title, score);
    }

    // the same list, title-in titles-out
    let by_title = recommender.recommend_by_title(query).unwrap();
    assert_eq!(by_title.len(), ranked.len());

    // miss path: unknown titles yield an empty list, not an error
    let missing = "The Godfather";
    let result = recommender.recommend_by_title(missing).unwrap();
    if result.is_empty() {
        println!("\n{missing:?} is not in the catalog.");
    }
}
