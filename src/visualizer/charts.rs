use std::collections::{BTreeMap, HashMap};

use crate::model::movie::MovieRecord;

pub const RATING_BINS: usize = 10;
pub const TOP_DIRECTORS: usize = 10;

/// One chart: a title, axis labels and one bar per category, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<(String, usize)>,
}

/// Equal-width bins over `[min, max]`; the last bin also takes `max`.
pub fn rating_histogram(movies: &[MovieRecord], bins: usize) -> ChartSeries {
    let mut series = ChartSeries {
        name: "rating_histogram",
        title: "豆瓣Top100 评分分布",
        x_label: "评分",
        y_label: "电影数量",
        bars: vec![],
    };

    let ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    let (min, max) = match ratings.iter().copied().fold(None, |acc, r| match acc {
        None => Some((r, r)),
        Some((lo, hi)) => Some((f64::min(lo, r), f64::max(hi, r))),
    }) {
        Some(bounds) => bounds,
        None => return series,
    };

    let bins = bins.max(1);
    if max <= min {
        series.bars.push((format!("{:.2}", min), ratings.len()));
        return series;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for rating in ratings {
        let index = (((rating - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    series.bars = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = min + width * i as f64;
            let hi = if i + 1 == bins { max } else { lo + width };
            (format!("{:.2}-{:.2}", lo, hi), count)
        })
        .collect();
    series
}

pub fn year_counts(movies: &[MovieRecord]) -> ChartSeries {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for movie in movies {
        *counts.entry(movie.year).or_default() += 1;
    }

    ChartSeries {
        name: "year_counts",
        title: "豆瓣Top100 上映年份分布",
        x_label: "年份",
        y_label: "电影数量",
        bars: counts
            .into_iter()
            .map(|(year, count)| (year.to_string(), count))
            .collect(),
    }
}

/// Most frequent directors, count descending then name ascending.
pub fn top_directors(movies: &[MovieRecord], limit: usize) -> ChartSeries {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for movie in movies {
        *counts.entry(movie.director.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);

    ChartSeries {
        name: "top_directors",
        title: "豆瓣Top100 导演出现次数Top10",
        x_label: "导演",
        y_label: "电影数量",
        bars: ranked
            .into_iter()
            .map(|(director, count)| (director.to_string(), count))
            .collect(),
    }
}
