use crate::xml::KeyStyle;

/// Convert an element or attribute name into a key.
pub(crate) fn key(style: KeyStyle, name: &str) -> String {
    match style {
        KeyStyle::SnakeCase => snake_case(name),
        KeyStyle::Verbatim => name.to_owned(),
    }
}

/// Convert a `PascalCase` or `camelCase` name into `snake_case`.
///
/// A run of capitals is kept together, with the last capital starting a new
/// word if it is followed by a lowercase letter: `XMLAnnotation` becomes
/// `xml_annotation`.
fn snake_case(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(name.len() + 4);

    for (n, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '.' | ':' | ' ') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }

            continue;
        }

        if !c.is_uppercase() {
            out.push(c);
            continue;
        }

        let prev = n.checked_sub(1).and_then(|n| chars.get(n));
        let next = chars.get(n + 1);

        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.map_or(false, |n| n.is_lowercase()),
            _ => false,
        };

        if boundary && !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }

        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::snake_case;

    #[test]
    fn snake_case_names() {
        assert_eq!(snake_case("ID"), "id");
        assert_eq!(snake_case("Name"), "name");
        assert_eq!(snake_case("SizeX"), "size_x");
        assert_eq!(snake_case("TheZ"), "the_z");
        assert_eq!(snake_case("PhysicalSizeX"), "physical_size_x");
        assert_eq!(snake_case("PhysicalSizeXUnit"), "physical_size_x_unit");
        assert_eq!(snake_case("XMLAnnotation"), "xml_annotation");
        assert_eq!(snake_case("AnnotationRef"), "annotation_ref");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("camelCase"), "camel_case");
        assert_eq!(snake_case("with-dash"), "with_dash");
        assert_eq!(snake_case(""), "");
    }
}
