//! The JSON document written by "Export JSON" and read back by "Import JSON".

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn dot_format() -> String {
	"dot".into()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
	#[serde(default = "dot_format")]
	pub format: String,
	pub description: String,
}

impl GraphExport {
	pub fn dot(description: impl Into<String>) -> Self {
		Self {
			format: dot_format(),
			description: description.into(),
		}
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	#[test]
	fn exported_json_reads_back() {
		let export = GraphExport::dot("digraph {\n\"a\" -> \"b\";\n}");
		let json = serde_json::to_string_pretty(&export).unwrap();
		assert_eq!(GraphExport::from_json(&json).unwrap(), export);
	}

	#[test]
	fn format_defaults_to_dot() {
		let export = GraphExport::from_json(r#"{"description":"digraph {}"}"#).unwrap();
		assert_eq!(export.format, "dot");
		assert_eq!(export.description, "digraph {}");
	}

	#[test]
	fn malformed_json_is_a_serialize_error() {
		let err = GraphExport::from_json("{\"format\": \"dot\"").unwrap_err();
		assert!(matches!(err, Error::Serialize(_)));
	}

	#[test]
	fn missing_description_is_rejected() {
		assert!(GraphExport::from_json(r#"{"format":"dot"}"#).is_err());
	}
}
