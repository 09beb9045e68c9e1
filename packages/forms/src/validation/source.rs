use actix_web::HttpRequest;

use super::values::Values;

/// Anything a form field can be read from.
pub trait FormSource {
    /// First value submitted for `field`, if any.
    fn form_value(&self, field: &str) -> Option<String>;
}

impl FormSource for Values {
    fn form_value(&self, field: &str) -> Option<String> {
        self.get_all(field).first().cloned()
    }
}

/// Reads fields from the request's query string. Bodies are consumed by
/// extractors, so callers decode them into [`Values`] instead.
impl FormSource for HttpRequest {
    fn form_value(&self, field: &str) -> Option<String> {
        Values::from_query(self.query_string()).form_value(field)
    }
}

impl<T: FormSource + ?Sized> FormSource for &T {
    fn form_value(&self, field: &str) -> Option<String> {
        (**self).form_value(field)
    }
}
