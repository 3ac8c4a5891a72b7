use crate::models::FormKind;

/// Issue body skeleton for a form, with a passing sample under each heading
pub fn render(kind: FormKind) -> String {
    kind.spec().to_markdown_skeleton()
}

/// Run the `template` command
pub fn run(kind: FormKind) {
    let spec = kind.spec();
    eprintln!("Title must start with one of: {}", spec.title_prefixes.join(", "));
    print!("{}", render(kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_issue_body;

    #[test]
    fn test_render_has_every_rule() {
        for kind in FormKind::ALL {
            let form = parse_issue_body(&render(kind));
            let expected: Vec<&str> = kind.spec().rules.iter().map(|r| r.name).collect();
            assert_eq!(form.names(), expected);
        }
    }
}
