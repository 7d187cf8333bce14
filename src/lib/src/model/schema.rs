pub mod field;

pub use field::Field;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of fields for one dataset, in the dataset's native column order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub name: Option<String>,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn from_fields(fields: Vec<Field>) -> Schema {
        Schema { name: None, fields }
    }

    pub fn with_name(mut self, name: impl AsRef<str>) -> Schema {
        self.name = Some(name.as_ref().to_string());
        self
    }

    pub fn has_field_name(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Returns the last field declared with this name.
    pub fn get_field<S: AsRef<str>>(&self, name: S) -> Option<&Field> {
        let name = name.as_ref();
        self.fields.iter().rev().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["id", "column", "dtype"]);

        for (i, field) in self.fields.iter().enumerate() {
            let mut cells: Vec<comfy_table::Cell> = vec![];
            cells.push(comfy_table::Cell::from(format!("{i}")));
            cells.push(comfy_table::Cell::from(field.name.to_owned()));
            cells.push(comfy_table::Cell::from(field.dtype.to_owned()));
            table.add_row(cells);
        }

        write!(f, "{table}")
    }
}
