/// CSV export of query results with a client-side download
use contracts::usecases::u508_nl_query::Row;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Name of the downloaded file
pub const EXPORT_FILENAME: &str = "query_results.csv";

const CSV_MIME: &str = "text/csv";

/// Builds the CSV text of `rows`; `None` when there is nothing to export
///
/// Columns follow the key order of the first row. String values are quoted,
/// numbers and booleans are written as-is, nulls and missing keys stay empty.
pub fn build_csv(rows: &[Row]) -> Option<String> {
    let first = rows.first()?;
    let columns: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| csv_field(row.get(column.as_str())))
            .collect();
        lines.push(cells.join(","));
    }

    Some(lines.join("\n"))
}

fn csv_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => quote(s),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => quote(&other.to_string()),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Builds the CSV of `rows` and hands it to the browser as a download
pub fn export_to_csv(rows: &[Row], filename: &str) -> Result<(), String> {
    let content = build_csv(rows).ok_or("No data to export")?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(CSV_MIME);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Clicks a hidden anchor pointing at an object URL for `blob`
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_strings_quoted_numbers_raw() {
        let data = rows(json!([{"name": "Max", "points": 454}]));
        assert_eq!(build_csv(&data).unwrap(), "name,points\n\"Max\",454");
    }

    #[test]
    fn test_nulls_and_missing_are_empty() {
        let data = rows(json!([
            {"a": 1, "b": null, "c": true},
            {"a": 2}
        ]));
        assert_eq!(build_csv(&data).unwrap(), "a,b,c\n1,,true\n2,,");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let data = rows(json!([{"name": "Lewis \"Ham\""}]));
        assert_eq!(build_csv(&data).unwrap(), "name\n\"Lewis \"\"Ham\"\"\"");
    }

    #[test]
    fn test_empty_rows_have_no_csv() {
        assert_eq!(build_csv(&[]), None);
    }
}
