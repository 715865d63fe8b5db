use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::algorithm::parse_timetable;
use crate::models::{Catalog, Day};

/// Cuerpo de `POST /timetable/parse`.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "days": {
///     "Monday": "Timetable,...\n,1,2,...\n...",
///     "Tuesday": "..."
///   }
/// }
/// ```
///
/// # Campos:
/// - `days`: texto CSV exportado de cada día. Las claves son los nombres
///   completos en inglés ("Monday" ... "Friday"); días ausentes se omiten.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ParseRequest {
	#[serde(default)]
	pub days: BTreeMap<Day, String>,
}

pub fn parse_json_input(json_str: &str) -> Result<ParseRequest, serde_json::Error> {
	serde_json::from_str::<ParseRequest>(json_str)
}

/// Construye el catálogo para una petición ya parseada.
pub fn catalog_from_request(request: &ParseRequest) -> Catalog {
	parse_timetable(&request.days)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_json_with_days() {
		let json_data = r#"
		{
			"days": {
				"Monday": "a,b\n",
				"Friday": "c,d\n"
			}
		}
		"#;

		let req = parse_json_input(json_data).expect("Debe parsear JSON con días");
		assert_eq!(req.days.len(), 2);
		assert_eq!(req.days.get(&Day::Monday).map(String::as_str), Some("a,b\n"));
		assert!(req.days.contains_key(&Day::Friday));
		assert!(!req.days.contains_key(&Day::Tuesday));
	}

	#[test]
	fn test_parse_json_without_days() {
		let req = parse_json_input("{}").expect("Debe aceptar cuerpo vacío");
		assert!(req.days.is_empty());
		assert!(catalog_from_request(&req).is_empty());
	}

	#[test]
	fn test_parse_json_rejects_unknown_day() {
		let json_data = r#"{ "days": { "Someday": "" } }"#;
		assert!(parse_json_input(json_data).is_err());
	}
}
