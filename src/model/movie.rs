#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub year: u32,
    pub rating: f64,
    pub quote: String,
}

impl MovieRecord {
    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.director.clone(),
            self.year.to_string(),
            self.rating.to_string(),
            self.quote.clone(),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Director", "Year", "Rating", "Quote"]
    }
}

impl std::fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.title, self.director, self.year, self.rating, self.quote
        )
    }
}
