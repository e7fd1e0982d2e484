// Server-side table builder speaking the DataTables wire format.
//
// Search, ordering and paging run on the raw rows; column transforms run on
// the current page only, after paging. The global search only looks at the
// columns the client marks searchable. A column search value must equal the
// raw cell, which is what the select filters on the list page send.

use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;

pub type Row = Map<String, Value>;

type ColumnFn<'a> = Box<dyn Fn(&Row) -> Value + Send + Sync + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableRequest {
    pub draw: u64,
    pub start: usize,
    /// `None` returns every filtered row.
    pub length: Option<usize>,
    pub search: Option<String>,
    /// Columns the global search looks at. `None` when the client sent no
    /// column list, in which case every column is searched.
    pub searchable: Option<Vec<String>>,
    /// `(column, value)` pairs from `columns[i][search][value]`.
    pub column_search: Vec<(String, String)>,
    pub order: Vec<(String, SortDirection)>,
}

impl DataTableRequest {
    /// Read the flat `key[index][field]=value` query parameters sent by the DataTables client.
    pub fn from_params(
        params: &HashMap<String, String>,
        default_length: usize,
        max_length: usize,
    ) -> Self {
        let number = |key: &str| params.get(key).and_then(|v| v.trim().parse::<i64>().ok());

        let length = match number("length") {
            Some(-1) => None,
            Some(n) if n > 0 => Some((n as usize).min(max_length)),
            _ => Some(default_length.min(max_length)),
        };

        let search = params
            .get("search[value]")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut columns = Vec::new();
        let mut column_search = Vec::new();
        for i in 0.. {
            let Some(column) = params.get(&format!("columns[{i}][data]")) else {
                break;
            };
            if params.get(&format!("columns[{i}][searchable]")).map(String::as_str)
                != Some("false")
            {
                columns.push(column.clone());
            }
            if let Some(value) = params
                .get(&format!("columns[{i}][search][value]"))
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
            {
                column_search.push((column.clone(), value.to_string()));
            }
        }
        let searchable = params.contains_key("columns[0][data]").then_some(columns);

        let mut order = Vec::new();
        for i in 0.. {
            let Some(column_index) = params.get(&format!("order[{i}][column]")) else {
                break;
            };
            let Some(column) = params.get(&format!("columns[{column_index}][data]")) else {
                continue;
            };
            if params.get(&format!("columns[{column_index}][orderable]")).map(String::as_str)
                == Some("false")
            {
                continue;
            }
            let direction = match params.get(&format!("order[{i}][dir]")).map(String::as_str) {
                Some("desc") => SortDirection::Desc,
                _ => SortDirection::Asc,
            };
            order.push((column.clone(), direction));
        }

        Self {
            draw: number("draw").unwrap_or(0).max(0) as u64,
            start: number("start").unwrap_or(0).max(0) as usize,
            length,
            search,
            searchable,
            column_search,
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableResponse {
    pub draw: u64,
    pub records_total: usize,
    pub records_filtered: usize,
    pub data: Vec<Row>,
}

pub struct DataTable<'a> {
    rows: Vec<Row>,
    edits: Vec<(String, ColumnFn<'a>)>,
    additions: Vec<(String, ColumnFn<'a>)>,
}

impl<'a> DataTable<'a> {
    pub fn of(rows: Vec<Row>) -> Self {
        Self {
            rows,
            edits: Vec::new(),
            additions: Vec::new(),
        }
    }

    /// Replace the value of an existing column.
    pub fn edit_column(
        mut self,
        name: impl Into<String>,
        column: impl Fn(&Row) -> Value + Send + Sync + 'a,
    ) -> Self {
        self.edits.push((name.into(), Box::new(column)));
        self
    }

    /// Append a computed column.
    pub fn add_column(
        mut self,
        name: impl Into<String>,
        column: impl Fn(&Row) -> Value + Send + Sync + 'a,
    ) -> Self {
        self.additions.push((name.into(), Box::new(column)));
        self
    }

    pub fn make(self, request: &DataTableRequest) -> DataTableResponse {
        let records_total = self.rows.len();

        let mut rows = self.rows;
        if let Some(term) = &request.search {
            let needle = term.to_lowercase();
            rows.retain(|row| match &request.searchable {
                Some(columns) => columns
                    .iter()
                    .any(|column| row.get(column).is_some_and(|value| contains(value, &needle))),
                None => row.values().any(|value| contains(value, &needle)),
            });
        }
        for (column, wanted) in &request.column_search {
            let wanted = wanted.to_lowercase();
            rows.retain(|row| row.get(column).is_some_and(|value| equals(value, &wanted)));
        }
        let records_filtered = rows.len();

        if !request.order.is_empty() {
            rows.sort_by(|a, b| {
                request
                    .order
                    .iter()
                    .map(|(column, direction)| {
                        let ordering = compare(a.get(column), b.get(column));
                        match direction {
                            SortDirection::Asc => ordering,
                            SortDirection::Desc => ordering.reverse(),
                        }
                    })
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }

        let page = rows
            .into_iter()
            .skip(request.start)
            .take(request.length.unwrap_or(usize::MAX));

        let data = page
            .map(|original| {
                let mut row = original.clone();
                for (name, column) in self.edits.iter() {
                    if row.contains_key(name) {
                        row.insert(name.clone(), column(&original));
                    }
                }
                for (name, column) in self.additions.iter() {
                    row.insert(name.clone(), column(&original));
                }
                row
            })
            .collect();

        DataTableResponse {
            draw: request.draw,
            records_total,
            records_filtered,
            data,
        }
    }
}

fn contains(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => s.to_lowercase().contains(needle),
        other => other.to_string().to_lowercase().contains(needle),
    }
}

fn equals(value: &Value, wanted: &str) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => s.to_lowercase() == wanted,
        other => other.to_string().to_lowercase() == wanted,
    }
}

fn compare(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(l)), Some(Value::Number(r))) => l
            .as_f64()
            .partial_cmp(&r.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(l)), Some(Value::String(r))) => l.cmp(r),
        (Some(l), Some(r)) => l.to_string().cmp(&r.to_string()),
    }
}
