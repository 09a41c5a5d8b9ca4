//! Small utilities for the CSV component: mapping grid selections to
//! classifications and handing generated files to the browser.

use common::model::column::Classification;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// File name offered when exporting the result grid.
pub const EXPORT_FILE_NAME: &str = "anonymized.csv";

/// Maps a `<select>` value to a classification. The empty option means
/// "not set"; unknown values are treated the same way.
pub fn parse_choice<T: Classification>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

/// Value of the `<option>` matching `current`, empty when unset.
pub fn choice_value<T: Classification>(current: Option<T>) -> &'static str {
    current.map(|value| value.as_str()).unwrap_or("")
}

/// Offers `contents` as a download through a temporary object URL.
pub fn download_text(file_name: &str, mime: &str, contents: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::column::{DataType, SensitivityType};

    #[test]
    fn empty_option_means_unset() {
        assert_eq!(parse_choice::<DataType>(""), None);
        assert_eq!(choice_value::<DataType>(None), "");
    }

    #[test]
    fn options_map_to_classifications() {
        assert_eq!(parse_choice("number"), Some(DataType::Number));
        assert_eq!(
            parse_choice("quasi-identifier"),
            Some(SensitivityType::QuasiIdentifier)
        );
        assert_eq!(choice_value(Some(SensitivityType::Insensitive)), "insensitive");
        assert_eq!(parse_choice::<SensitivityType>("secret"), None);
    }
}
