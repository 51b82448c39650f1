use select::{
    document::Document,
    node::Node,
    predicate::{Class, Descendant, Name},
};

use crate::{
    error::ExtractError,
    extractors::fields::{self, FieldWarning},
    logging::Diagnostics,
    model::movie::MovieRecord,
};

/// Raw text of the regions of one `.item` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlock {
    pub title: String,
    pub credits: String,
    pub rating: String,
    pub quote: Option<String>,
}

#[derive(Debug)]
pub struct MovieExtractor {}

impl MovieExtractor {
    pub fn extract_movies_from_html<D: Diagnostics + ?Sized>(
        page_html: &str,
        diagnostics: &D,
    ) -> Result<Vec<MovieRecord>, ExtractError> {
        MovieExtractor::break_page_html_per_item(page_html)?
            .iter()
            .enumerate()
            .map(|(index, block)| MovieExtractor::extract_movie(block, index, diagnostics))
            .collect()
    }

    pub fn break_page_html_per_item(page_html: &str) -> Result<Vec<ItemBlock>, ExtractError> {
        Document::from(page_html)
            .find(Class("item"))
            .enumerate()
            .map(|(index, item)| MovieExtractor::read_item_block(&item, index))
            .collect()
    }

    /// Builds one record. Year and director fall back to defaults and are reported to
    /// `diagnostics`; a bad rating is an error.
    pub fn extract_movie<D: Diagnostics + ?Sized>(
        block: &ItemBlock,
        index: usize,
        diagnostics: &D,
    ) -> Result<MovieRecord, ExtractError> {
        let rating =
            fields::extract_rating(&block.rating).map_err(|source| ExtractError::InvalidRating {
                index,
                text: block.rating.clone(),
                source,
            })?;

        let (director, director_warning) = fields::extract_director(&block.credits).into_parts();
        let (year, year_warning) = fields::extract_year(&block.credits).into_parts();

        let movie = MovieRecord {
            title: fields::extract_title(&block.title),
            director,
            year,
            rating,
            quote: fields::extract_quote(block.quote.as_deref()),
        };

        let warnings: Vec<FieldWarning> = [director_warning, year_warning]
            .into_iter()
            .flatten()
            .collect();
        for warning in &warnings {
            diagnostics.warn(warning, &movie);
        }
        diagnostics.extracted(&movie);

        Ok(movie)
    }

    fn read_item_block(item: &Node, index: usize) -> Result<ItemBlock, ExtractError> {
        let title = MovieExtractor::first_text(item, Class("title"))
            .ok_or(ExtractError::MissingRegion { index, region: "title" })?;
        let credits = MovieExtractor::first_text(item, Descendant(Class("bd"), Name("p")))
            .ok_or(ExtractError::MissingRegion {
                index,
                region: "credits",
            })?;
        let rating = MovieExtractor::first_text(item, Class("rating_num")).ok_or(
            ExtractError::MissingRegion {
                index,
                region: "rating",
            },
        )?;
        let quote = MovieExtractor::first_text(item, Descendant(Class("quote"), Name("span")));

        Ok(ItemBlock {
            title,
            credits,
            rating,
            quote,
        })
    }

    fn first_text<P: select::predicate::Predicate>(item: &Node, predicate: P) -> Option<String> {
        item.find(predicate).next().map(|n| n.text())
    }
}
