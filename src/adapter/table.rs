use ph_client::operations::posts::Post;
use serde::Serialize;

use super::Column;

/// A header row followed by one row per post, every cell a string.
///
/// Serializes as a JSON array of arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Lays out `posts` under `columns`. Unknown columns and missing values
    /// are empty cells.
    pub fn build(columns: &[Column], posts: &[Post]) -> ResultTable {
        let header = columns.iter().map(|column| column.name.clone()).collect();
        let body = posts.iter().map(|post| {
            columns
                .iter()
                .map(|column| {
                    column
                        .field
                        .and_then(|field| post.get(field))
                        .unwrap_or_default()
                })
                .collect()
        });
        ResultTable {
            rows: std::iter::once(header).chain(body).collect(),
        }
    }

    /// The single empty cell returned when there is nothing to ask Product Hunt with
    pub fn degenerate() -> ResultTable {
        ResultTable {
            rows: vec![vec![String::new()]],
        }
    }

    /// The first row
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Every row after the header
    pub fn records(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Every row, header included
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Renders the table on a single line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
