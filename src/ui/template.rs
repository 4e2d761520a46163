/// Substitute `{{Key}}` placeholders. Placeholders without a value are kept.
///
/// The template is scanned once, so substituted values are never expanded.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };

        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => rendered.push_str(value),
            None => {
                rendered.push_str("{{");
                rendered.push_str(key);
                rendered.push_str("}}");
            }
        }
        rest = &after[close + 2..];
    }

    rendered.push_str(rest);
    rendered
}
