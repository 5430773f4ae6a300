use gpui::{Pixels, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::LineHeight;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    parse_pixels(StringOrFloat::deserialize(deserializer)?).map_err(D::Error::custom)
}

pub fn de_opt_pixels<'de, D>(deserializer: D) -> Result<Option<Pixels>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(value) => parse_pixels(value).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Accepts `1.4`, `"1.4x"` and `"140%"` as multiples of the font size and
/// `"20px"` as an exact line height.
pub fn de_line_height<'de, D>(deserializer: D) -> Result<LineHeight, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(multiple) => return Ok(LineHeight::Multiple(multiple)),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.trim().parse::<f32>()
            {
                return Ok(LineHeight::Exact(px(value)));
            } else if let Some(string) = string.strip_suffix('%')
                && let Ok(value) = string.trim().parse::<f32>()
            {
                return Ok(LineHeight::Multiple(value / 100.));
            } else if let Some(string) = string.strip_suffix('x')
                && let Ok(value) = string.trim().parse::<f32>()
            {
                return Ok(LineHeight::Multiple(value));
            }
        }
    }

    Err(D::Error::custom(
        "expected f32 or string containing a f32 ending with 'px', 'x' or '%'",
    ))
}

fn parse_pixels(value: StringOrFloat) -> Result<Pixels, &'static str> {
    match value {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err("expected string to end with 'px'"),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err("could not convert string into pixels"),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "de_pixels")]
        pixels: Pixels,
        #[serde(deserialize_with = "de_line_height")]
        line_height: LineHeight,
    }

    fn parse(json: &str) -> Result<Wrapper, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_pixels_accept_numbers_and_px_strings() {
        let wrapper = parse(r#"{ "pixels": 12, "line_height": 1.5 }"#).unwrap();
        assert_eq!(wrapper.pixels, px(12.));

        let wrapper = parse(r#"{ "pixels": "12.5px", "line_height": 1.5 }"#).unwrap();
        assert_eq!(wrapper.pixels, px(12.5));
    }

    #[test]
    fn test_pixels_reject_unknown_units() {
        assert!(parse(r#"{ "pixels": "12rem", "line_height": 1.5 }"#).is_err());
        assert!(parse(r#"{ "pixels": "twelve px", "line_height": 1.5 }"#).is_err());
    }

    #[test]
    fn test_line_height_rules() {
        let cases = [
            (r#"1.25"#, LineHeight::Multiple(1.25)),
            (r#""1.5x""#, LineHeight::Multiple(1.5)),
            (r#""150%""#, LineHeight::Multiple(1.5)),
            (r#""20px""#, LineHeight::Exact(px(20.))),
        ];

        for (raw, expected) in cases {
            let json = format!(r#"{{ "pixels": 1, "line_height": {raw} }}"#);
            assert_eq!(parse(&json).unwrap().line_height, expected, "{raw}");
        }

        assert!(parse(r#"{ "pixels": 1, "line_height": "tall" }"#).is_err());
    }

    #[test]
    fn test_font_family_list_must_not_be_empty() {
        #[derive(Deserialize)]
        struct Family {
            #[serde(deserialize_with = "de_string_or_non_empty_list")]
            family: SmallVec<[SharedString; 1]>,
        }

        let one: Family = serde_json::from_str(r#"{ "family": "Inter" }"#).unwrap();
        assert_eq!(one.family.as_slice(), &[SharedString::from("Inter")]);

        let many: Family =
            serde_json::from_str(r#"{ "family": ["Inter", "Helvetica"] }"#).unwrap();
        assert_eq!(many.family.len(), 2);

        assert!(serde_json::from_str::<Family>(r#"{ "family": [] }"#).is_err());
    }
}
