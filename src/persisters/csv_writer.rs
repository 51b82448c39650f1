use std::path::Path;

use csv::Writer;

use crate::{error::ExportError, model::movie::MovieRecord};

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_movies_to_csv(movies: &[MovieRecord], file_name: &Path) -> Result<(), ExportError> {
        let csv_error = |source| ExportError::Csv {
            path: file_name.to_path_buf(),
            source,
        };

        let mut wrt = Writer::from_path(file_name).map_err(csv_error)?;
        wrt.write_record(MovieRecord::csv_titles())
            .map_err(csv_error)?;
        for movie in movies.iter() {
            wrt.write_record(movie.to_csvable_array())
                .map_err(csv_error)?;
        }

        wrt.flush()?;
        Ok(())
    }
}
