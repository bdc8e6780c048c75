//! WordprocessingML element and attribute helpers over `roxmltree`.

use roxmltree::Node;

/// WordprocessingML main namespace.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Check whether a node is the `w:` element with the given local name.
pub fn is_wml(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// First `w:` child element with the given local name.
pub fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_wml(*n, name))
}

/// All `w:` child elements with the given local name.
pub fn wml_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| is_wml(*n, name))
}

/// A `w:`-namespaced attribute on the node itself.
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((WML_NS, name))
}

/// The `w:val` attribute of the named child element.
pub fn wml_attr<'a>(node: Node<'a, '_>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| attr(n, "val"))
}

/// Parse a WML boolean toggle element (e.g., `w:b`).
/// Present with no val, or a val other than "0"/"false"/"off", means true.
pub fn wml_bool(node: Node, name: &str) -> Option<bool> {
    wml(node, name).map(|n| match attr(n, "val") {
        None => true,
        Some(v) => !matches!(v, "0" | "false" | "off"),
    })
}

/// Parse a twips measure. Plain integers are twips; universal measures
/// (`2.54cm`, `1in`, `72pt`, ...) are converted.
pub fn parse_twips(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(v) = value.parse::<i64>() {
        return Some(v);
    }

    let split = value
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f64 = number.parse().ok()?;
    let twips = match unit {
        "" => number,
        "mm" => number * 1440.0 / 25.4,
        "cm" => number * 1440.0 / 2.54,
        "in" => number * 1440.0,
        "pt" => number * 20.0,
        "pc" | "pi" => number * 240.0,
        _ => return None,
    };
    Some(twips.round() as i64)
}
