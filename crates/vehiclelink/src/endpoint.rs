//! Declarative endpoint table for the vehicle-reference API.
//!
//! Every resource is described by a path template plus an ordered list of
//! query parameters, and a single [`Endpoint::render`] turns that
//! description into a path-and-query string. The parameter order in each
//! table entry is the wire order: required identifiers first, then the
//! optional filters, which render only when a non-empty value is supplied.

use crate::encoding::encode_path_segment;
use url::form_urlencoded;

/// A query parameter slot in an endpoint definition.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    /// Wire name of the parameter.
    pub name: &'static str,
    /// Required parameters always render; optional ones render only when
    /// the caller supplies a non-empty value.
    pub required: bool,
}

impl Param {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// A resource endpoint: path template plus ordered query parameters.
///
/// `{}` placeholders in the template are filled, in order, from the path
/// arguments passed to [`Endpoint::render`]; each argument is
/// percent-encoded as a single path segment.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Path template, e.g. `/segments/{}/makes`.
    pub path: &'static str,
    /// Query parameters in wire order.
    pub params: &'static [Param],
}

/// `GET /segments`
pub const SEGMENTS: Endpoint = Endpoint {
    path: "/segments",
    params: &[],
};

/// `GET /segments/{segment}/makes`
pub const MAKES: Endpoint = Endpoint {
    path: "/segments/{}/makes",
    params: &[],
};

/// `GET /segments/{segment}/families?make_code=..`
pub const FAMILIES: Endpoint = Endpoint {
    path: "/segments/{}/families",
    params: &[Param::required("make_code")],
};

/// `GET /segments/{segment}/vehicles?make_code=..&family_code=..&body_style_code=..`
pub const VEHICLES: Endpoint = Endpoint {
    path: "/segments/{}/vehicles",
    params: &[
        Param::required("make_code"),
        Param::required("family_code"),
        Param::required("body_style_code"),
        Param::optional("size_unit"),
        Param::optional("weight_unit"),
        Param::optional("order_by"),
        Param::optional("order_direction"),
    ],
};

/// `GET /segments/{segment}/variants/{variant}`
pub const VARIANT: Endpoint = Endpoint {
    path: "/segments/{}/variants/{}",
    params: &[],
};

/// `GET /segments/{segment}/variants?make_code=..&family_code=..&body_style_code=..&year_code=..`
pub const VARIANTS: Endpoint = Endpoint {
    path: "/segments/{}/variants",
    params: &[
        Param::required("make_code"),
        Param::required("family_code"),
        Param::required("body_style_code"),
        Param::required("year_code"),
        Param::optional("size_unit"),
        Param::optional("weight_unit"),
        Param::optional("seat_capacity"),
    ],
};

/// `GET /attachments?size_unit=..&weight_unit=..`
pub const ATTACHMENTS: Endpoint = Endpoint {
    path: "/attachments",
    params: &[
        Param::optional("size_unit"),
        Param::optional("weight_unit"),
    ],
};

impl Endpoint {
    /// Render the path and query string for this endpoint.
    ///
    /// `path_args` fill the `{}` placeholders in template order and are
    /// percent-encoded. `values` line up one-to-one with [`Endpoint::params`]:
    /// required slots render unconditionally, optional slots render only for
    /// `Some` non-empty values. Values are form-urlencoded (space becomes
    /// `+`), matching what the server's query parser expects.
    #[must_use]
    pub fn render(&self, path_args: &[&str], values: &[Option<&str>]) -> String {
        debug_assert_eq!(
            values.len(),
            self.params.len(),
            "one value slot per declared parameter"
        );

        let mut rendered = String::new();
        let mut args = path_args.iter();
        let mut parts = self.path.split("{}");
        if let Some(first) = parts.next() {
            rendered.push_str(first);
        }
        for part in parts {
            let arg = args.next().copied().unwrap_or_default();
            rendered.push_str(&encode_path_segment(arg));
            rendered.push_str(part);
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for (param, value) in self.params.iter().zip(values.iter().copied()) {
            if param.required {
                query.append_pair(param.name, value.unwrap_or_default());
                has_query = true;
            } else if let Some(value) = value.filter(|v| !v.is_empty()) {
                query.append_pair(param.name, value);
                has_query = true;
            }
        }

        if has_query {
            rendered.push('?');
            rendered.push_str(&query.finish());
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_has_no_query() {
        assert_eq!(SEGMENTS.render(&[], &[]), "/segments");
    }

    #[test]
    fn makes_substitutes_segment() {
        assert_eq!(MAKES.render(&["vehicles"], &[]), "/segments/vehicles/makes");
    }

    #[test]
    fn families_appends_make_code() {
        assert_eq!(
            FAMILIES.render(&["vehicles"], &[Some("TOYO")]),
            "/segments/vehicles/families?make_code=TOYO"
        );
    }

    #[test]
    fn vehicles_without_optionals_renders_identifiers_only() {
        let rendered = VEHICLES.render(
            &["vehicles"],
            &[Some("TOYO"), Some("PRADO"), Some("WAGON"), None, None, None, None],
        );
        assert_eq!(
            rendered,
            "/segments/vehicles/vehicles?make_code=TOYO&family_code=PRADO&body_style_code=WAGON"
        );
    }

    #[test]
    fn vehicles_with_units_appends_after_identifiers() {
        let rendered = VEHICLES.render(
            &["vehicles"],
            &[
                Some("TOYO"),
                Some("PRADO"),
                Some("WAGON"),
                Some("mm"),
                Some("kg"),
                None,
                None,
            ],
        );
        assert_eq!(
            rendered,
            "/segments/vehicles/vehicles?make_code=TOYO&family_code=PRADO&body_style_code=WAGON&size_unit=mm&weight_unit=kg"
        );
    }

    #[test]
    fn vehicles_ordering_hints_render_in_declared_order() {
        let rendered = VEHICLES.render(
            &["vehicles"],
            &[
                Some("TOYO"),
                Some("PRADO"),
                Some("WAGON"),
                None,
                None,
                Some("start_year"),
                Some("desc"),
            ],
        );
        assert_eq!(
            rendered,
            "/segments/vehicles/vehicles?make_code=TOYO&family_code=PRADO&body_style_code=WAGON&order_by=start_year&order_direction=desc"
        );
    }

    #[test]
    fn empty_optional_values_are_omitted() {
        let rendered = ATTACHMENTS.render(&[], &[Some(""), Some("t")]);
        assert_eq!(rendered, "/attachments?weight_unit=t");
    }

    #[test]
    fn attachments_with_both_units() {
        let rendered = ATTACHMENTS.render(&[], &[Some("m"), Some("t")]);
        assert_eq!(rendered, "/attachments?size_unit=m&weight_unit=t");
    }

    #[test]
    fn attachments_without_units_has_no_query() {
        assert_eq!(ATTACHMENTS.render(&[], &[None, None]), "/attachments");
    }

    #[test]
    fn variant_substitutes_both_segments() {
        assert_eq!(
            VARIANT.render(&["vehicles", "PRADO-GXL-2015"], &[]),
            "/segments/vehicles/variants/PRADO-GXL-2015"
        );
    }

    #[test]
    fn variants_renders_year_code_after_body_style() {
        let rendered = VARIANTS.render(
            &["vehicles"],
            &[
                Some("TOYO"),
                Some("PRADO"),
                Some("WAGON"),
                Some("2015"),
                None,
                None,
                Some("7"),
            ],
        );
        assert_eq!(
            rendered,
            "/segments/vehicles/variants?make_code=TOYO&family_code=PRADO&body_style_code=WAGON&year_code=2015&seat_capacity=7"
        );
    }

    #[test]
    fn query_values_are_form_urlencoded() {
        let rendered = FAMILIES.render(&["vehicles"], &[Some("Style 1")]);
        assert_eq!(
            rendered,
            "/segments/vehicles/families?make_code=Style+1"
        );
    }

    #[test]
    fn path_args_are_percent_encoded() {
        let rendered = MAKES.render(&["heavy vehicles"], &[]);
        assert_eq!(rendered, "/segments/heavy%20vehicles/makes");
    }
}
