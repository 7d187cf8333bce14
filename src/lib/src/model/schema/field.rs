use serde::{Deserialize, Serialize};

/// A named column and its declared type descriptor, as reported by the schema loader.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub dtype: String,
}

impl Field {
    pub fn new(name: impl AsRef<str>, dtype: impl AsRef<str>) -> Field {
        Field {
            name: name.as_ref().to_string(),
            dtype: dtype.as_ref().to_string(),
        }
    }

    pub fn all_fields_to_string<V: AsRef<Vec<Field>>>(fields: V) -> String {
        let names: Vec<String> = fields.as_ref().iter().map(|f| f.name.to_owned()).collect();

        let combined_names = names.join(", ");

        format!("[{combined_names}]")
    }
}

impl<N: AsRef<str>, T: AsRef<str>> From<(N, T)> for Field {
    fn from((name, dtype): (N, T)) -> Self {
        Field::new(name, dtype)
    }
}
