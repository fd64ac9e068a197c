use serde::Serialize;
use std::collections::BTreeMap;

/// A single table cell as rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    Text { value: String },
    Labels { labels: BTreeMap<String, String> },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text {
            value: value.into(),
        }
    }

    pub fn labels(labels: BTreeMap<String, String>) -> Self {
        Cell::Labels { labels }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text { value } => Some(value),
            Cell::Labels { .. } => None,
        }
    }
}

/// Column name to cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Cell>);

impl Row {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.0.get(column)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Cell::as_text)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, Cell); N]> for Row {
    fn from(cells: [(&str, Cell); N]) -> Self {
        Row(cells
            .into_iter()
            .map(|(column, cell)| (column.to_string(), cell))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub title: String,
    pub placeholder: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentResponse {
    pub title: String,
    pub components: Vec<Table>,
}

impl ContentResponse {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            components: Vec::new(),
        }
    }

    pub fn add(&mut self, tables: impl IntoIterator<Item = Table>) {
        self.components.extend(tables);
    }

    pub fn table(&self, title: &str) -> Option<&Table> {
        self.components.iter().find(|t| t.title == title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub title: String,
    pub path: String,
    pub icon_name: String,
    pub children: Vec<Navigation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub is_module: bool,
    pub action_names: Vec<String>,
}
