use chrono::NaiveDate;

/// Calendar date format used by every timestamp-like field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse(value: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

pub(crate) fn is_valid(value: &str) -> bool {
    parse(value).is_ok()
}
